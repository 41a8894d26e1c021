//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Start-of-transmission byte used by [`jedec_stream`].
pub const STX: u8 = 0x02;
/// End-of-transmission byte used by [`jedec_stream`].
pub const ETX: u8 = 0x03;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Frame `fields` as STX, each field followed by `*`, then ETX.
pub fn jedec_stream(fields: &[&str]) -> Vec<u8> {
	let mut out = vec![STX];
	for field in fields {
		out.extend_from_slice(field.as_bytes());
		out.push(b'*');
	}
	out.push(ETX);
	out
}

/// Like [`jedec_stream`] but without the closing ETX byte.
pub fn unterminated_stream(fields: &[&str]) -> Vec<u8> {
	let mut out = jedec_stream(fields);
	out.pop();
	out
}
