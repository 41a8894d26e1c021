mod gal16v8;

/// GAL16V8 address tables, decompiler, and equation types.
pub use gal16v8::{
	AC0_FUSE, AC1_BASE, COLUMN_PINS, COLUMNS, ColumnInput, Decompiled, Equation, Gal16v8, Literal, Macrocell, MacrocellConfig, Mode, OLMC_COUNT, OUTPUT_PINS, PTD_BASE,
	Product, ROWS_PER_OLMC, SIGNATURE_BASE, SIGNATURE_BITS, SYN_FUSE, XOR_BASE,
};
