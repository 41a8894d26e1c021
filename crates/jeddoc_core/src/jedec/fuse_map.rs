use std::collections::BTreeMap;

use crate::jedec::Block;

/// Scalar header fields declared by a JEDEC stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuseHeader {
	/// Declared total fuse count (`QF`).
	pub bitstream_size: u32,
	/// Declared pin count (`QP`).
	pub pin_count: u32,
	/// Declared fuse checksum (`C`), not verified.
	pub checksum: u32,
	/// Value of fuses not listed explicitly (`F`).
	pub default_fuse: bool,
	/// Security fuse state (`G`).
	pub security_set: bool,
}

/// Fuse map under construction.
///
/// Only fuses named by fuse-list records are present until [`PartialFuseMap::finalize`].
#[derive(Debug, Clone, Default)]
pub struct PartialFuseMap {
	bits: BTreeMap<u32, bool>,
	header: FuseHeader,
}

impl PartialFuseMap {
	/// Create an empty map with zeroed header fields.
	pub fn new() -> Self {
		Self::default()
	}

	/// Apply one classified block; last write wins.
	pub fn apply(&mut self, block: &Block) {
		match block {
			Block::FuseList(list) => {
				for (index, value) in list.fuses() {
					self.bits.insert(index, value);
				}
			}
			Block::DefaultFuse(value) => self.header.default_fuse = *value,
			Block::SecurityFuse(value) => self.header.security_set = *value,
			Block::Checksum(value) => self.header.checksum = *value,
			Block::PinCount(value) => self.header.pin_count = *value,
			Block::FuseSize(value) => self.header.bitstream_size = *value,
			Block::Done | Block::Unknown => {}
		}
	}

	/// Read one fuse, falling back to the current default value.
	pub fn get_fuse(&self, index: u32) -> bool {
		self.bits.get(&index).copied().unwrap_or(self.header.default_fuse)
	}

	/// Return header fields seen so far.
	pub fn header(&self) -> FuseHeader {
		self.header
	}

	/// Fill every unset fuse in `[0, bitstream_size)` with the default value.
	pub fn finalize(mut self) -> FuseMap {
		let default_fuse = self.header.default_fuse;
		for index in 0..self.header.bitstream_size {
			self.bits.entry(index).or_insert(default_fuse);
		}

		FuseMap {
			bits: self.bits,
			header: self.header,
			filled: true,
		}
	}

	/// Freeze without default fill, for streams that ended before ETX.
	pub fn into_unterminated(self) -> FuseMap {
		FuseMap {
			bits: self.bits,
			header: self.header,
			filled: false,
		}
	}
}

/// Immutable fuse map ready for device decompilation.
#[derive(Debug, Clone)]
pub struct FuseMap {
	bits: BTreeMap<u32, bool>,
	header: FuseHeader,
	filled: bool,
}

impl FuseMap {
	/// Read one fuse; indices outside the stored set read as the default value.
	pub fn get_fuse(&self, index: u32) -> bool {
		self.bits.get(&index).copied().unwrap_or(self.header.default_fuse)
	}

	/// Return stored fuse entries.
	pub fn bits(&self) -> &BTreeMap<u32, bool> {
		&self.bits
	}

	/// Return declared header fields.
	pub fn header(&self) -> FuseHeader {
		self.header
	}

	/// Return `true` when the default fill ran.
	pub fn is_filled(&self) -> bool {
		self.filled
	}

	/// Number of stored fuse entries.
	pub fn len(&self) -> usize {
		self.bits.len()
	}

	/// Return `true` when no fuse entries are stored.
	pub fn is_empty(&self) -> bool {
		self.bits.is_empty()
	}
}
