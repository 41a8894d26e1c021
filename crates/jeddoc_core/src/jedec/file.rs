use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::jedec::{BlockKind, DecodeOptions, FieldReader, FuseMap, JedecError, PartialFuseMap, Result, STX, classify};

/// Decoded JEDEC stream.
#[derive(Debug, Clone)]
pub struct JedecFile {
	/// Accumulated fuse map.
	pub fuse_map: FuseMap,
	/// Whether ETX was reached; otherwise the map was never default-filled.
	pub terminated: bool,
	/// Field classification counts.
	pub stats: BlockStats,
}

impl JedecFile {
	/// Read and decode a JEDEC file from disk.
	pub fn open(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::parse(&bytes, options)
	}

	/// Drain `reader` and decode its contents.
	pub fn from_reader(mut reader: impl Read, options: &DecodeOptions) -> Result<Self> {
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes)?;
		Self::parse(&bytes, options)
	}

	/// Decode a full JEDEC byte stream, including any bytes before STX.
	pub fn parse(bytes: &[u8], options: &DecodeOptions) -> Result<Self> {
		let body_start = locate_stx(bytes)?;
		let mut stats = BlockStats {
			preamble_len: body_start - 1,
			..BlockStats::default()
		};

		let mut map = PartialFuseMap::new();
		for field in FieldReader::new(&bytes[body_start..]) {
			stats.field_count += 1;
			if field.is_terminator() {
				stats.record(BlockKind::Done);
				log::debug!("etx reached after {} fields", stats.field_count);
				return Ok(Self {
					fuse_map: map.finalize(),
					terminated: true,
					stats,
				});
			}

			let block = classify(&field.text, options);
			log::debug!("field {:?} -> {}", field.text, block.kind().as_str());
			stats.record(block.kind());
			map.apply(&block);
		}

		log::warn!("stream ended before ETX; unset fuses read as default");
		Ok(Self {
			fuse_map: map.into_unterminated(),
			terminated: false,
			stats,
		})
	}

	/// Shorthand for the fuse map's [`FuseMap::get_fuse`].
	pub fn get_fuse(&self, index: u32) -> bool {
		self.fuse_map.get_fuse(index)
	}
}

/// Aggregate field counts from one decode pass.
#[derive(Debug, Clone, Default)]
pub struct BlockStats {
	/// Bytes skipped before STX.
	pub preamble_len: usize,
	/// Number of fields read after STX, including the ETX-closed one.
	pub field_count: u32,
	/// Frequency table by block kind.
	pub kinds: HashMap<BlockKind, u32>,
}

impl BlockStats {
	/// Return how many fields classified as `kind`.
	pub fn count(&self, kind: BlockKind) -> u32 {
		self.kinds.get(&kind).copied().unwrap_or(0)
	}

	fn record(&mut self, kind: BlockKind) {
		*self.kinds.entry(kind).or_insert(0) += 1;
	}
}

/// Return the offset just past the first STX byte.
pub fn locate_stx(bytes: &[u8]) -> Result<usize> {
	for (offset, byte) in bytes.iter().enumerate() {
		log::trace!("probed 0x{byte:02x} at {offset}");
		if *byte == STX {
			return Ok(offset + 1);
		}
	}
	Err(JedecError::StxNotFound { scanned: bytes.len() })
}
