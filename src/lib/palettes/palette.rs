use std::fmt::{Display, Formatter};

use crate::palettes::color::Color;
use crate::palettes::{BYTES_PER_COLOR, PALETTE_BYTES, PALETTE_SIZE};

/// A fixed-size palette of [PALETTE_SIZE] colors.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Palette {
	colors: [Color; PALETTE_SIZE],
}

impl Palette {
	/// Parses one palette block. Every byte is a 6-bit level, stored as R, G, B per color
	/// with no padding in between.
	pub fn from_bytes(data: &[u8]) -> Result<Palette, PaletteError> {
		if data.len() != PALETTE_BYTES {
			return Err(PaletteError::WrongLength { expected: PALETTE_BYTES, actual: data.len() });
		}

		let mut pal = Palette::default();
		for (i, chunk) in data.chunks_exact(BYTES_PER_COLOR).enumerate() {
			let col = Color::from([chunk[0], chunk[1], chunk[2]]);
			if !col.is_valid() {
				return Err(PaletteError::InvalidBinaryData {
					position: i * BYTES_PER_COLOR,
					msg: format!("Color {i} ({}, {}, {}) exceeds the 6-bit range", col.r, col.g, col.b),
				});
			}

			pal.colors[i] = col;
		}

		Ok(pal)
	}

	pub fn to_bytes(&self) -> [u8; PALETTE_BYTES] {
		let mut data = [0_u8; PALETTE_BYTES];
		for (chunk, col) in data.chunks_exact_mut(BYTES_PER_COLOR).zip(self.colors.iter()) {
			chunk.copy_from_slice(&col.to_bytes());
		}
		data
	}

	pub fn color(&self, index: usize) -> Result<Color, PaletteError> {
		self.colors.get(index).copied().ok_or(PaletteError::InvalidIndex { index, limit: PALETTE_SIZE })
	}

	pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
		&self.colors
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

impl From<[Color; PALETTE_SIZE]> for Palette {
	fn from(colors: [Color; PALETTE_SIZE]) -> Self {
		Self { colors }
	}
}

#[derive(Debug)]
pub enum PaletteError {
	InvalidIndex { index: usize, limit: usize },
	WrongLength { expected: usize, actual: usize },
	InvalidBinaryData { position: usize, msg: String },
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::InvalidIndex { index, limit } => write!(f, "Bad index {index}, must be below {limit}"),
			PaletteError::WrongLength { expected, actual } => write!(f, "Expected {expected} bytes of palette data, got {actual}"),
			PaletteError::InvalidBinaryData { position, msg } => write!(f, "Invalid data at byte {position:#X}: {msg}"),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PaletteError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}
