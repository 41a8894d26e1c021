/// Default capacity of a single fuse-list record, in fuses.
pub const DEFAULT_MAX_FUSE_RUN: usize = 32;
/// Default ceiling for a declared `QF` fuse count.
pub const DEFAULT_MAX_FUSE_COUNT: u32 = 1 << 20;

/// Closed set of JEDEC field tags.
///
/// Only a handful carry a decoded payload; the rest are named so that
/// statistics and logs can refer to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
	/// Free-form note field.
	Comment,
	/// `C` fuse checksum.
	FuseChecksum,
	/// Hex-encoded fuse data.
	FuseData,
	/// End of fuse data.
	EndData,
	/// `L` fuse list.
	FuseList,
	/// Fuse state vectors.
	FuseState,
	/// `G` security fuse.
	SecurityFuse,
	/// `F` default fuse value.
	FuseDefault,
	/// `QF` fuse-map size.
	FuseSize,
	/// User code field.
	UserCode,
	/// `QP` pin count.
	PinCount,
	/// Feature row field.
	FeatureRow,
	/// ETX observed.
	Done,
	/// Unrecognized or malformed field.
	Unknown,
}

impl BlockKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Comment => "comment",
			Self::FuseChecksum => "fuse_checksum",
			Self::FuseData => "fuse_data",
			Self::EndData => "end_data",
			Self::FuseList => "fuse_list",
			Self::FuseState => "fuse_state",
			Self::SecurityFuse => "security_fuse",
			Self::FuseDefault => "fuse_default",
			Self::FuseSize => "fuse_size",
			Self::UserCode => "user_code",
			Self::PinCount => "pin_count",
			Self::FeatureRow => "feature_row",
			Self::Done => "done",
			Self::Unknown => "unknown",
		}
	}
}

/// Parsed `L<pos> <bits>` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuseList {
	/// Index of the first fuse in `bits`.
	pub position: u32,
	/// Fuse values, left to right.
	pub bits: Vec<bool>,
}

impl FuseList {
	/// Iterate `(fuse index, value)` pairs in record order.
	pub fn fuses(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
		self.bits.iter().enumerate().map(|(offset, bit)| (self.position + offset as u32, *bit))
	}
}

/// One classified field with its typed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
	/// Explicit fuse values.
	FuseList(FuseList),
	/// Value for fuses not listed explicitly.
	DefaultFuse(bool),
	/// Security fuse state.
	SecurityFuse(bool),
	/// Declared fuse checksum.
	Checksum(u32),
	/// Declared device pin count.
	PinCount(u32),
	/// Declared total fuse count.
	FuseSize(u32),
	/// End of transmission.
	Done,
	/// Field with no effect on the fuse map.
	Unknown,
}

impl Block {
	/// Return the tag for this block.
	pub fn kind(&self) -> BlockKind {
		match self {
			Self::FuseList(_) => BlockKind::FuseList,
			Self::DefaultFuse(_) => BlockKind::FuseDefault,
			Self::SecurityFuse(_) => BlockKind::SecurityFuse,
			Self::Checksum(_) => BlockKind::FuseChecksum,
			Self::PinCount(_) => BlockKind::PinCount,
			Self::FuseSize(_) => BlockKind::FuseSize,
			Self::Done => BlockKind::Done,
			Self::Unknown => BlockKind::Unknown,
		}
	}
}

/// Behavior switches for field classification.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Longest accepted fuse-list run; longer records are rejected whole.
	///
	/// `None` accepts runs of any length.
	pub max_fuse_run: Option<usize>,
	/// Largest accepted `QF` fuse count; larger declarations classify as unknown.
	pub max_fuse_count: u32,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_fuse_run: Some(DEFAULT_MAX_FUSE_RUN),
			max_fuse_count: DEFAULT_MAX_FUSE_COUNT,
		}
	}
}

impl DecodeOptions {
	/// Preset without a fuse-list run limit.
	pub fn unlimited() -> Self {
		Self {
			max_fuse_run: None,
			..Self::default()
		}
	}
}

/// Classify one field's text into a typed block.
///
/// Parse failures yield [`Block::Unknown`]; ETX handling belongs to the caller.
pub fn classify(text: &str, options: &DecodeOptions) -> Block {
	let chars: Vec<char> = text.chars().collect();
	if chars.len() < 2 {
		return Block::Unknown;
	}

	let lead = chars[0].to_ascii_uppercase();
	let second = chars[1].to_ascii_uppercase();
	let parsed = match lead {
		'L' => parse_fuse_list(&text[1..], options).map(Block::FuseList),
		'C' => parse_checksum(&text[1..]).map(Block::Checksum),
		'F' if chars.len() == 2 => Some(Block::DefaultFuse(chars[1] == '1')),
		'G' if chars.len() == 2 => Some(Block::SecurityFuse(chars[1] == '1')),
		_ if chars.len() >= 3 => match second {
			'P' => parse_decimal(&chars[2..]).map(Block::PinCount),
			'F' => parse_decimal(&chars[2..]).filter(|size| *size <= options.max_fuse_count).map(Block::FuseSize),
			_ => None,
		},
		_ => None,
	};

	parsed.unwrap_or(Block::Unknown)
}

fn parse_fuse_list(body: &str, options: &DecodeOptions) -> Option<FuseList> {
	let (position, run) = body.split_once(' ')?;
	let position = parse_decimal(&position.chars().collect::<Vec<_>>())?;

	let bits: Vec<bool> = run.chars().map(|ch| ch == '1').collect();
	if options.max_fuse_run.is_some_and(|max| bits.len() > max) {
		return None;
	}

	let len = u32::try_from(bits.len()).ok()?;
	position.checked_add(len)?;

	Some(FuseList { position, bits })
}

fn parse_checksum(body: &str) -> Option<u32> {
	if body.len() < 2 || !body.chars().all(|ch| ch.is_ascii_hexdigit()) {
		return None;
	}
	u32::from_str_radix(body, 16).ok()
}

fn parse_decimal(chars: &[char]) -> Option<u32> {
	if chars.is_empty() || !chars.iter().all(char::is_ascii_digit) {
		return None;
	}
	chars.iter().collect::<String>().parse().ok()
}
