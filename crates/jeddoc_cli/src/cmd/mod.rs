/// Fuse-map decode and equation report command.
pub mod decompile;
/// Shared output helpers.
pub(crate) mod util;
