/// Start-of-transmission control byte.
pub const STX: u8 = 0x02;
/// End-of-transmission control byte.
pub const ETX: u8 = 0x03;
/// Field delimiter byte.
pub const FIELD_TERMINATOR: u8 = b'*';

const CR: u8 = 0x0D;
const LF: u8 = 0x0A;

/// How a field was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEnd {
	/// Closed by the `*` field terminator.
	Delimiter,
	/// Closed by the ETX control byte.
	EndOfTransmission,
	/// The byte source ran out before any terminator.
	EndOfStream,
}

/// One field's text with framing and line-break bytes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
	/// Field content; each source byte maps to one `char`.
	pub text: String,
	/// Terminator that closed this field.
	pub end: FieldEnd,
}

impl RawField {
	/// Return `true` when ETX closed this field.
	pub fn is_terminator(&self) -> bool {
		self.end == FieldEnd::EndOfTransmission
	}
}

/// Forward-only field tokenizer over bytes that follow the STX marker.
pub struct FieldReader<'a> {
	bytes: &'a [u8],
	pos: usize,
	done: bool,
}

impl<'a> FieldReader<'a> {
	/// Create a reader over `bytes`, which must start just past STX.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0, done: false }
	}

	/// Return current byte offset relative to the reader start.
	pub fn pos(&self) -> usize {
		self.pos
	}
}

impl Iterator for FieldReader<'_> {
	type Item = RawField;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		let mut text = String::new();
		while let Some(&byte) = self.bytes.get(self.pos) {
			self.pos += 1;
			match byte {
				CR | LF => {}
				FIELD_TERMINATOR => {
					return Some(RawField {
						text,
						end: FieldEnd::Delimiter,
					});
				}
				ETX => {
					self.done = true;
					return Some(RawField {
						text,
						end: FieldEnd::EndOfTransmission,
					});
				}
				_ => text.push(char::from(byte)),
			}
		}

		self.done = true;
		if text.is_empty() {
			return None;
		}
		Some(RawField {
			text,
			end: FieldEnd::EndOfStream,
		})
	}
}
