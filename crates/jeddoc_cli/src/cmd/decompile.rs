use std::path::PathBuf;

use jeddoc::device::{Decompiled, Gal16v8, MacrocellConfig};
use jeddoc::jedec::{DecodeOptions, FuseHeader, JedecFile, Result};

use crate::cmd::util::{emit_json, hex16};

#[derive(clap::Args)]
pub struct Args {
	/// Path to a `.jed` file.
	pub path: PathBuf,
	/// Emit the report as JSON.
	#[arg(long)]
	pub json: bool,
	/// Accept fuse-list records longer than 32 fuses.
	#[arg(long = "no-run-limit")]
	pub no_run_limit: bool,
}

/// Decode a JEDEC file and print the reconstructed GAL16V8 equations.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, no_run_limit } = args;

	let options = if no_run_limit { DecodeOptions::unlimited() } else { DecodeOptions::default() };
	let jed = JedecFile::open(&path, &options)?;
	if !jed.terminated {
		log::warn!("{}: no ETX, fuses outside explicit records read as default", path.display());
	}

	let decompiled = Gal16v8::decompile(&jed.fuse_map);
	let report = Report::build(path.display().to_string(), &jed, &decompiled);

	if json {
		emit_json(&report)?;
		return Ok(());
	}

	for line in report.text_lines() {
		println!("{line}");
	}
	Ok(())
}

#[derive(serde::Serialize)]
pub(crate) struct MacrocellJson {
	index: u32,
	pin: u8,
	input: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	equation: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	products: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	inverted: Option<bool>,
}

#[derive(serde::Serialize)]
pub(crate) struct Report {
	path: String,
	pin_count: u32,
	fuse_count: u32,
	checksum: String,
	default_fuse: bool,
	security: bool,
	terminated: bool,
	syn: bool,
	ac0: bool,
	mode: Option<&'static str>,
	signature: String,
	signature_ascii: String,
	macrocells: Vec<MacrocellJson>,
}

impl Report {
	pub(crate) fn build(path: String, jed: &JedecFile, decompiled: &Decompiled) -> Self {
		let FuseHeader {
			bitstream_size,
			pin_count,
			checksum,
			default_fuse,
			security_set,
		} = jed.fuse_map.header();

		let macrocells = decompiled
			.macrocells
			.iter()
			.map(|cell| match &cell.config {
				MacrocellConfig::Input => MacrocellJson {
					index: cell.index,
					pin: cell.pin,
					input: true,
					equation: None,
					products: None,
					inverted: None,
				},
				MacrocellConfig::Output(equation) => MacrocellJson {
					index: cell.index,
					pin: cell.pin,
					input: false,
					equation: Some(equation.to_string()),
					products: Some(equation.products.iter().map(ToString::to_string).collect()),
					inverted: Some(equation.is_inverted()),
				},
			})
			.collect();

		Self {
			path,
			pin_count,
			fuse_count: bitstream_size,
			checksum: hex16(checksum),
			default_fuse,
			security: security_set,
			terminated: jed.terminated,
			syn: decompiled.syn,
			ac0: decompiled.ac0,
			mode: decompiled.mode.map(|mode| mode.as_str()),
			signature: decompiled.signature_bits(),
			signature_ascii: decompiled.signature_ascii(),
			macrocells,
		}
	}

	pub(crate) fn text_lines(&self) -> Vec<String> {
		let mut lines = vec![
			format!("path: {}", self.path),
			format!("pin_count: {}", self.pin_count),
			format!("fuse_count: {}", self.fuse_count),
			format!("checksum: {}", self.checksum),
			format!("default_fuse: {}", u8::from(self.default_fuse)),
			format!("security: {}", u8::from(self.security)),
			format!("terminated: {}", self.terminated),
			format!("syn: {}", u8::from(self.syn)),
			format!("ac0: {}", u8::from(self.ac0)),
			format!("mode: {}", self.mode.unwrap_or("-")),
			format!("signature: {}", self.signature),
			format!("signature_ascii: {}", self.signature_ascii),
		];

		for cell in &self.macrocells {
			match &cell.equation {
				Some(equation) => lines.push(equation.clone()),
				None => lines.push(format!("olmc{}: input (pin{})", cell.index, cell.pin)),
			}
		}
		lines
	}
}

#[cfg(test)]
mod tests;
