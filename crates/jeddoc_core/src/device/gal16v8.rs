use std::fmt;

use crate::jedec::FuseMap;

/// Number of output logic macrocells.
pub const OLMC_COUNT: u32 = 8;
/// Product-term rows per macrocell.
pub const ROWS_PER_OLMC: u32 = 8;
/// Input columns per product-term row.
pub const COLUMNS: u32 = 32;

/// First XOR polarity fuse.
pub const XOR_BASE: u32 = 2048;
/// First user signature fuse.
pub const SIGNATURE_BASE: u32 = 2056;
/// User signature width in fuses.
pub const SIGNATURE_BITS: u32 = 64;
/// First AC1 (dedicated input select) fuse.
pub const AC1_BASE: u32 = 2120;
/// First product-term disable fuse.
pub const PTD_BASE: u32 = 2128;
/// Global SYN fuse.
pub const SYN_FUSE: u32 = 2192;
/// Global AC0 fuse.
pub const AC0_FUSE: u32 = 2193;

/// Input literal fed by one AND-array column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnInput {
	/// Device pin number.
	pub pin: u8,
	/// Whether the column carries the inverted signal.
	pub inverted: bool,
}

const fn col(pin: u8, inverted: bool) -> ColumnInput {
	ColumnInput { pin, inverted }
}

/// Column to pin map: each group of four columns covers pin `2 + g` then pin `19 - g`.
pub const COLUMN_PINS: [ColumnInput; COLUMNS as usize] = [
	col(2, false),
	col(2, true),
	col(19, false),
	col(19, true),
	col(3, false),
	col(3, true),
	col(18, false),
	col(18, true),
	col(4, false),
	col(4, true),
	col(17, false),
	col(17, true),
	col(5, false),
	col(5, true),
	col(16, false),
	col(16, true),
	col(6, false),
	col(6, true),
	col(15, false),
	col(15, true),
	col(7, false),
	col(7, true),
	col(14, false),
	col(14, true),
	col(8, false),
	col(8, true),
	col(13, false),
	col(13, true),
	col(9, false),
	col(9, true),
	col(12, false),
	col(12, true),
];

/// Output pin of each macrocell, in macrocell order.
pub const OUTPUT_PINS: [u8; OLMC_COUNT as usize] = [19, 18, 17, 16, 15, 14, 13, 12];

/// Operating mode selected by the SYN and AC0 fuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Combinatorial outputs (SYN=1, AC0=0).
	Simple,
	/// Tristate outputs (SYN=1, AC0=1).
	Complex,
	/// Registered or tristate outputs (SYN=0, AC0=1).
	Registered,
}

impl Mode {
	/// Derive the mode from global fuses; `None` for the reserved combination.
	pub fn from_fuses(syn: bool, ac0: bool) -> Option<Self> {
		match (syn, ac0) {
			(true, false) => Some(Self::Simple),
			(true, true) => Some(Self::Complex),
			(false, true) => Some(Self::Registered),
			(false, false) => None,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Simple => "simple",
			Self::Complex => "complex",
			Self::Registered => "registered",
		}
	}
}

/// One possibly negated pin reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
	/// Device pin number.
	pub pin: u8,
	/// Whether the literal is negated.
	pub negated: bool,
}

impl fmt::Display for Literal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.negated {
			write!(f, "!pin{}", self.pin)
		} else {
			write!(f, "pin{}", self.pin)
		}
	}
}

impl From<ColumnInput> for Literal {
	fn from(input: ColumnInput) -> Self {
		Self {
			pin: input.pin,
			negated: input.inverted,
		}
	}
}

/// AND of literals from one product-term row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
	/// Row index within the macrocell.
	pub row: u32,
	/// Connected literals in column order.
	pub literals: Vec<Literal>,
}

impl fmt::Display for Product {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, literal) in self.literals.iter().enumerate() {
			if idx > 0 {
				f.write_str(" * ")?;
			}
			write!(f, "{literal}")?;
		}
		Ok(())
	}
}

/// Reconstructed sum-of-products for one output pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
	/// Output pin number.
	pub pin: u8,
	/// Retained product terms, OR-ed together.
	pub products: Vec<Product>,
	/// XOR polarity fuse; when clear the whole sum is negated.
	pub xor: bool,
}

impl Equation {
	/// Return `true` when the sum is wrapped in a negation.
	pub fn is_inverted(&self) -> bool {
		!self.xor
	}

	/// Render the right-hand side only.
	pub fn expression(&self) -> String {
		let mut out = String::new();
		if self.is_inverted() {
			out.push_str("/{");
		}
		for product in &self.products {
			out.push_str(&format!(" ({product})"));
		}
		if self.is_inverted() {
			out.push_str(" }");
		}
		out
	}
}

impl fmt::Display for Equation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "pin{}={}", self.pin, self.expression())
	}
}

/// Configuration of one macrocell's pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacrocellConfig {
	/// AC1 set: the pin is a dedicated input and has no equation.
	Input,
	/// The pin is driven by a reconstructed equation.
	Output(Equation),
}

/// Decompiled macrocell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macrocell {
	/// Macrocell index, `0..8`.
	pub index: u32,
	/// Pin served by this macrocell.
	pub pin: u8,
	/// Input or output configuration.
	pub config: MacrocellConfig,
}

impl Macrocell {
	/// Return the equation when the pin is an output.
	pub fn equation(&self) -> Option<&Equation> {
		match &self.config {
			MacrocellConfig::Output(equation) => Some(equation),
			MacrocellConfig::Input => None,
		}
	}
}

/// Everything recovered from a GAL16V8 fuse map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decompiled {
	/// SYN global fuse.
	pub syn: bool,
	/// AC0 global fuse.
	pub ac0: bool,
	/// Mode implied by SYN/AC0.
	pub mode: Option<Mode>,
	/// User signature; bit `k` is fuse `2056 + k`.
	pub signature: u64,
	/// All eight macrocells in index order.
	pub macrocells: Vec<Macrocell>,
}

impl Decompiled {
	/// Signature as a 64-character bit string, most significant bit first.
	pub fn signature_bits(&self) -> String {
		format!("{:064b}", self.signature)
	}

	/// Signature as eight bytes of text; byte `i` holds bits `8i..8i+8`.
	pub fn signature_ascii(&self) -> String {
		self.signature
			.to_le_bytes()
			.iter()
			.map(|byte| if byte.is_ascii_graphic() || *byte == b' ' { char::from(*byte) } else { '.' })
			.collect()
	}

	/// Iterate equations of output macrocells.
	pub fn equations(&self) -> impl Iterator<Item = &Equation> {
		self.macrocells.iter().filter_map(Macrocell::equation)
	}
}

/// GAL16V8 fuse layout and decompiler.
pub struct Gal16v8;

impl Gal16v8 {
	/// Total fuse count of the device.
	pub const FUSE_COUNT: u32 = 2194;
	/// Package pin count.
	pub const PIN_COUNT: u32 = 20;

	/// Output pin served by macrocell `olmc`, or `None` past the last macrocell.
	pub fn output_pin(olmc: u32) -> Option<u8> {
		OUTPUT_PINS.get(olmc as usize).copied()
	}

	/// Fuse for column `column` of row `row` in macrocell `olmc`.
	pub fn row_fuse(olmc: u32, row: u32, column: u32) -> u32 {
		COLUMNS * ROWS_PER_OLMC * olmc + COLUMNS * row + column
	}

	/// XOR polarity fuse of macrocell `olmc`.
	pub fn xor_fuse(olmc: u32) -> u32 {
		XOR_BASE + olmc
	}

	/// AC1 input-select fuse of macrocell `olmc`.
	pub fn ac1_fuse(olmc: u32) -> u32 {
		AC1_BASE + olmc
	}

	/// Product-term enable fuse of row `row` in macrocell `olmc`.
	pub fn ptd_fuse(olmc: u32, row: u32) -> u32 {
		PTD_BASE + ROWS_PER_OLMC * olmc + row
	}

	/// Read global bits, signature, and all macrocells from `map`.
	pub fn decompile(map: &FuseMap) -> Decompiled {
		let syn = map.get_fuse(SYN_FUSE);
		let ac0 = map.get_fuse(AC0_FUSE);

		let signature = (0..SIGNATURE_BITS)
			.filter(|bit| map.get_fuse(SIGNATURE_BASE + bit))
			.fold(0_u64, |acc, bit| acc | (1_u64 << bit));

		let macrocells = (0..OLMC_COUNT).zip(OUTPUT_PINS).map(|(olmc, pin)| Self::decompile_olmc(map, olmc, pin)).collect();

		Decompiled {
			syn,
			ac0,
			mode: Mode::from_fuses(syn, ac0),
			signature,
			macrocells,
		}
	}

	fn decompile_olmc(map: &FuseMap, olmc: u32, pin: u8) -> Macrocell {
		if map.get_fuse(Self::ac1_fuse(olmc)) {
			log::info!("olmc {olmc} disabled (pin {pin} marked as input)");
			return Macrocell {
				index: olmc,
				pin,
				config: MacrocellConfig::Input,
			};
		}

		let products = (0..ROWS_PER_OLMC)
			.filter(|row| map.get_fuse(Self::ptd_fuse(olmc, *row)))
			.filter_map(|row| Self::decompile_row(map, olmc, row))
			.collect();

		Macrocell {
			index: olmc,
			pin,
			config: MacrocellConfig::Output(Equation {
				pin,
				products,
				xor: map.get_fuse(Self::xor_fuse(olmc)),
			}),
		}
	}

	// A row with every column connected ANDs each input with its complement.
	fn decompile_row(map: &FuseMap, olmc: u32, row: u32) -> Option<Product> {
		let literals: Vec<Literal> = (0..COLUMNS)
			.filter(|column| !map.get_fuse(Self::row_fuse(olmc, row, *column)))
			.map(|column| Literal::from(COLUMN_PINS[column as usize]))
			.collect();

		if literals.len() == COLUMNS as usize {
			return None;
		}
		Some(Product { row, literals })
	}
}

#[cfg(test)]
mod tests;
