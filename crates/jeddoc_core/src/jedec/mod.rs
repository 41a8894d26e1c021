mod block;
mod error;
mod field;
mod file;
mod fuse_map;

/// Typed block payloads, tags, and the field classifier.
pub use block::{Block, BlockKind, DEFAULT_MAX_FUSE_COUNT, DEFAULT_MAX_FUSE_RUN, DecodeOptions, FuseList, classify};
/// Error and result aliases.
pub use error::{JedecError, Result};
/// Field tokenizer over an STX-positioned byte slice.
pub use field::{ETX, FIELD_TERMINATOR, FieldEnd, FieldReader, RawField, STX};
/// File decoder and scan statistics.
pub use file::{BlockStats, JedecFile, locate_stx};
/// Two-phase fuse map types.
pub use fuse_map::{FuseHeader, FuseMap, PartialFuseMap};
