use std::fmt::{Display, Formatter};

use crate::palettes::MAX_LEVEL;

/// A palette entry. The channels hold 6-bit VGA levels (0-63), not 8-bit values.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

/// Converts an 8-bit channel value into a 6-bit level.
///
/// The value is divided by 4 and stored in a byte before it is clamped, so everything from
/// 252 upwards ends up at the maximum level. Values outside 0..=255 aren't rejected: the
/// quotient wraps around to its low byte first, which turns -8 into 63 and 1024 into 0.
pub fn scale_8bits_to_6bits(v: i32) -> u8 {
	((v / 4) as u8).min(MAX_LEVEL)
}

fn scale_6bits_to_8bits(v: u8) -> u8 {
	(v & 0b111111) << 2
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl Color {
	pub fn from_8bits(v: [i32; 3]) -> Self {
		Self {
			r: scale_8bits_to_6bits(v[0]),
			g: scale_8bits_to_6bits(v[1]),
			b: scale_8bits_to_6bits(v[2]),
		}
	}

	/// The 8-bit representation of this color, as shown to the user. Always within 0..=252.
	pub fn to_8bits(&self) -> [u8; 3] {
		[scale_6bits_to_8bits(self.r), scale_6bits_to_8bits(self.g), scale_6bits_to_8bits(self.b)]
	}

	/// The bytes of this color in the order they're stored on disk.
	pub fn to_bytes(&self) -> [u8; 3] {
		[self.r, self.g, self.b]
	}

	pub fn is_valid(&self) -> bool {
		self.r <= MAX_LEVEL && self.g <= MAX_LEVEL && self.b <= MAX_LEVEL
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let [r, g, b] = self.to_8bits();
		let mut rgb = r as u32;
		rgb = (rgb << 8) | g as u32;
		rgb = (rgb << 8) | b as u32;
		write!(f, "#{:06X}", rgb)
	}
}
