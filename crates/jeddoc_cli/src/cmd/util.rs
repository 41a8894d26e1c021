use jeddoc::jedec::Result;

/// Serialize `value` as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	let text = render_json(value)?;
	println!("{text}");
	Ok(())
}

/// Serialize `value` as pretty JSON, surfacing encoder failures as IO errors.
pub(crate) fn render_json<T: serde::Serialize>(value: &T) -> Result<String> {
	Ok(serde_json::to_string_pretty(value).map_err(std::io::Error::from)?)
}

/// Render a checksum the way JEDEC writes it.
pub(crate) fn hex16(value: u32) -> String {
	format!("{value:04X}")
}
