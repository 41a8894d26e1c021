use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, JedecError>;

/// Errors produced while reading and framing JEDEC data.
///
/// Malformed records are not errors: they classify as [`crate::jedec::Block::Unknown`].
#[derive(Debug, Error)]
pub enum JedecError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// No start-of-transmission byte was found.
	#[error("STX not found (scanned {scanned} bytes)")]
	StxNotFound {
		/// Number of bytes probed before the source ran out.
		scanned: usize,
	},
}
