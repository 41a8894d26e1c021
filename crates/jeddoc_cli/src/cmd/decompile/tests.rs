use jeddoc::device::Gal16v8;
use jeddoc::jedec::{DecodeOptions, JedecFile};
use jeddoc_testkit::{fixture_path, jedec_stream};

use crate::cmd::decompile::Report;

fn report_for(bytes: &[u8]) -> Report {
	let jed = JedecFile::parse(bytes, &DecodeOptions::default()).expect("stream decodes");
	let decompiled = Gal16v8::decompile(&jed.fuse_map);
	Report::build("test.jed".to_owned(), &jed, &decompiled)
}

#[test]
fn text_report_lists_header_then_macrocells() {
	let lines = report_for(&jedec_stream(&["QP20", "QF2194", "F0", "C1A2B", "L2120 00000001"])).text_lines();

	assert_eq!(lines[0], "path: test.jed");
	assert_eq!(lines[1], "pin_count: 20");
	assert_eq!(lines[2], "fuse_count: 2194");
	assert_eq!(lines[3], "checksum: 1A2B");
	assert_eq!(lines[6], "terminated: true");
	assert_eq!(lines[9], "mode: -");
	assert_eq!(lines[10], format!("signature: {}", "0".repeat(64)));
	assert_eq!(&lines[12..], &[
		"pin19=/{ }",
		"pin18=/{ }",
		"pin17=/{ }",
		"pin16=/{ }",
		"pin15=/{ }",
		"pin14=/{ }",
		"pin13=/{ }",
		"olmc7: input (pin12)",
	]);
}

#[test]
fn sample_fixture_report() {
	let bytes = std::fs::read(fixture_path("gal16v8_sample.jed")).expect("fixture readable");
	let lines = report_for(&bytes).text_lines();

	assert!(lines.contains(&"checksum: 3721".to_owned()));
	assert!(lines.contains(&"mode: simple".to_owned()));
	assert!(lines.contains(&"signature_ascii: JEDDOC01".to_owned()));
	assert!(lines.contains(&"pin19= (pin2 * !pin3) (pin4)".to_owned()));
	assert!(lines.contains(&"pin18=/{ (pin5 * pin6) }".to_owned()));
	assert_eq!(lines.last().map(String::as_str), Some("olmc7: input (pin12)"));
}
