use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

use crate::palettes::color::Color;
use crate::palettes::palette::{Palette, PaletteError};
use crate::palettes::{NUM_PALETTES, PALETTE_BYTES, PALETTE_SET_BYTES};
use crate::patch::error::PatchError;
use crate::patch::layout::{region_end, ImageLayout};

/// The palettes stored in the self image. Built once and only ever read afterwards;
/// changes go straight to disk through the patcher.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PaletteSet {
	palettes: [Palette; NUM_PALETTES],
}

impl PaletteSet {
	pub fn from_bytes(data: &[u8]) -> Result<PaletteSet, PaletteError> {
		if data.len() != PALETTE_SET_BYTES {
			return Err(PaletteError::WrongLength { expected: PALETTE_SET_BYTES, actual: data.len() });
		}

		let mut set = PaletteSet::default();
		for (i, block) in data.chunks_exact(PALETTE_BYTES).enumerate() {
			set.palettes[i] = Palette::from_bytes(block).map_err(|e| match e {
				PaletteError::InvalidBinaryData { position, msg } => PaletteError::InvalidBinaryData {
					position: position + i * PALETTE_BYTES,
					msg: format!("Palette {i}: {msg}"),
				},
				e => e,
			})?;
		}

		Ok(set)
	}

	/// Reads the palette block out of the self image. The file is only opened for reading.
	pub fn load(image: &ImageLayout) -> Result<PaletteSet, PatchError> {
		let needed = region_end(&image.path, image.base_offset, PALETTE_SET_BYTES as u64)?;
		let mut f = File::open(&image.path).map_err(|e| PatchError::FileAccess { path: image.path.clone(), source: e })?;

		let size = f.metadata().map_err(|e| PatchError::FileAccess { path: image.path.clone(), source: e })?.len();
		if size < needed {
			return Err(PatchError::SizeMismatch { path: image.path.clone(), expected: needed, actual: size, exact: false });
		}

		let mut buf = [0_u8; PALETTE_SET_BYTES];
		f.seek(SeekFrom::Start(image.base_offset))
			.and_then(|_| f.read_exact(&mut buf))
			.map_err(|e| PatchError::FileAccess { path: image.path.clone(), source: e })?;

		Ok(Self::from_bytes(&buf)?)
	}

	pub fn palette(&self, index: usize) -> Result<&Palette, PaletteError> {
		self.palettes.get(index).ok_or(PaletteError::InvalidIndex { index, limit: NUM_PALETTES })
	}

	pub fn color(&self, palette_index: usize, color_index: usize) -> Result<Color, PaletteError> {
		self.palette(palette_index)?.color(color_index)
	}

	pub fn palettes(&self) -> &[Palette; NUM_PALETTES] {
		&self.palettes
	}
}

impl From<[Palette; NUM_PALETTES]> for PaletteSet {
	fn from(palettes: [Palette; NUM_PALETTES]) -> Self {
		Self { palettes }
	}
}
