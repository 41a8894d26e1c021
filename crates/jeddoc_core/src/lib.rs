//! Public library API for decoding JEDEC fuse maps and decompiling GAL16V8 logic.

/// GAL device decompilers operating on finished fuse maps.
pub mod device;
/// JEDEC record tokenizing, block classification, and fuse-map accumulation.
pub mod jedec;
