use crate::device::{COLUMN_PINS, Gal16v8, Literal, MacrocellConfig, Mode, Product};
use crate::jedec::{Block, FuseList, FuseMap, PartialFuseMap};

fn map_with(default_fuse: bool, fuses: &[(u32, bool)]) -> FuseMap {
	let mut map = PartialFuseMap::new();
	map.apply(&Block::FuseSize(Gal16v8::FUSE_COUNT));
	map.apply(&Block::DefaultFuse(default_fuse));
	for (index, value) in fuses {
		map.apply(&Block::FuseList(FuseList {
			position: *index,
			bits: vec![*value],
		}));
	}
	map.finalize()
}

// Macrocell 0 as an output with only row 0 enabled.
fn olmc0_fuses(xor: bool, connected: &[u32]) -> Vec<(u32, bool)> {
	let mut fuses = vec![(Gal16v8::ac1_fuse(0), false), (Gal16v8::xor_fuse(0), xor)];
	for row in 1..8 {
		fuses.push((Gal16v8::ptd_fuse(0, row), false));
	}
	for column in connected {
		fuses.push((Gal16v8::row_fuse(0, 0, *column), false));
	}
	fuses
}

#[test]
fn column_table_matches_group_layout() {
	for (column, input) in COLUMN_PINS.iter().enumerate() {
		let group = (column / 4) as u8;
		let expected_pin = if column % 4 < 2 { 2 + group } else { 19 - group };
		assert_eq!(input.pin, expected_pin, "column {column}");
		assert_eq!(input.inverted, column % 2 == 1, "column {column}");
	}
}

#[test]
fn address_helpers_follow_device_layout() {
	assert_eq!(Gal16v8::row_fuse(1, 2, 3), 323);
	assert_eq!(Gal16v8::row_fuse(7, 7, 31), 2047);
	assert_eq!(Gal16v8::xor_fuse(0), 2048);
	assert_eq!(Gal16v8::ac1_fuse(7), 2127);
	assert_eq!(Gal16v8::ptd_fuse(7, 7), 2191);
	assert_eq!(Gal16v8::output_pin(0), Some(19));
	assert_eq!(Gal16v8::output_pin(7), Some(12));
	assert_eq!(Gal16v8::output_pin(8), None);
	assert_eq!(Gal16v8::output_pin(20), None);
	assert_eq!(Gal16v8::output_pin(u32::MAX), None);
}

#[test]
fn renders_non_inverted_equation() {
	let decompiled = Gal16v8::decompile(&map_with(true, &olmc0_fuses(true, &[0, 5])));
	let equation = decompiled.macrocells[0].equation().expect("olmc0 is an output");

	assert_eq!(
		equation.products,
		vec![Product {
			row: 0,
			literals: vec![Literal { pin: 2, negated: false }, Literal { pin: 3, negated: true }],
		}]
	);
	assert_eq!(equation.to_string(), "pin19= (pin2 * !pin3)");
}

#[test]
fn clear_xor_wraps_whole_sum() {
	let decompiled = Gal16v8::decompile(&map_with(true, &olmc0_fuses(false, &[30])));
	let equation = decompiled.macrocells[0].equation().expect("olmc0 is an output");
	assert!(equation.is_inverted());
	assert_eq!(equation.to_string(), "pin19=/{ (pin12) }");
}

#[test]
fn input_select_suppresses_equation() {
	let mut fuses = olmc0_fuses(true, &[0, 5]);
	fuses.push((Gal16v8::ac1_fuse(0), true));

	let decompiled = Gal16v8::decompile(&map_with(true, &fuses));
	assert_eq!(decompiled.macrocells[0].config, MacrocellConfig::Input);
	assert_eq!(decompiled.macrocells[0].pin, 19);
	assert!(decompiled.equations().all(|equation| equation.pin != 19));
}

#[test]
fn fully_connected_rows_are_discarded() {
	let mut fuses: Vec<_> = (0..8).map(|row| (Gal16v8::ptd_fuse(2, row), true)).collect();
	fuses.push((Gal16v8::xor_fuse(2), true));

	let decompiled = Gal16v8::decompile(&map_with(false, &fuses));
	let equation = decompiled.macrocells[2].equation().expect("olmc2 is an output");
	assert!(equation.products.is_empty());
	assert_eq!(equation.to_string(), "pin17=");
}

#[test]
fn disabled_rows_contribute_nothing() {
	let decompiled = Gal16v8::decompile(&map_with(false, &[]));
	assert_eq!(decompiled.equations().count(), 8);
	for equation in decompiled.equations() {
		assert!(equation.products.is_empty());
		assert_eq!(equation.expression(), "/{ }");
	}
}

#[test]
fn reads_global_bits_and_signature() {
	let mut fuses = vec![(2192, true), (2193, false)];
	for bit in [0, 6, 8, 14, 16, 19, 63] {
		fuses.push((2056 + bit, true));
	}
	let decompiled = Gal16v8::decompile(&map_with(false, &fuses));

	assert!(decompiled.syn);
	assert!(!decompiled.ac0);
	assert_eq!(decompiled.mode, Some(Mode::Simple));
	assert_eq!(decompiled.signature, 0x8000_0000_0009_4141);
	let bits = decompiled.signature_bits();
	assert_eq!(bits.len(), 64);
	assert!(bits.starts_with('1'));
	assert!(bits.ends_with("0001"));
	assert_eq!(decompiled.signature_ascii(), "AA......");
}

#[test]
fn mode_labels() {
	assert_eq!(Mode::from_fuses(true, true), Some(Mode::Complex));
	assert_eq!(Mode::from_fuses(false, true).map(Mode::as_str), Some("registered"));
	assert_eq!(Mode::from_fuses(false, false), None);
}

#[test]
fn unfilled_map_reads_defaults() {
	let mut map = PartialFuseMap::new();
	map.apply(&Block::DefaultFuse(true));
	let decompiled = Gal16v8::decompile(&map.into_unterminated());
	assert!(decompiled.macrocells.iter().all(|cell| cell.config == MacrocellConfig::Input));
	assert_eq!(decompiled.signature, u64::MAX);
}
