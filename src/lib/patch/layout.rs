//! Where the palette data lives in the two files this tool knows about.
//!
//! The defaults describe the files shipped with the Rally-Sport demo and SETPAL itself.
//! Other releases can be described in a JSON layout file instead of changing the constants.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::palettes::{BYTES_PER_COLOR, NUM_PALETTES, PALETTE_SIZE};
use crate::patch::error::{IndexKind, PatchError};

pub const SELF_IMAGE_NAME: &str = "SETPAL.EXE";
/// The byte offset of the palette block in SETPAL's own binary.
pub const SELF_PAL_BLOCK_OFFSET: u64 = 0x2527;

pub const DEFAULT_TARGET: &str = "rally-sport-demo";
pub const RALLYE_EXE_NAME: &str = "RALLYE.EXE";
pub const RALLYE_EXE_SIZE: u64 = 133452;
/// RALLYE.EXE holds four palettes; the one the game never uses is left out.
pub const RALLYE_PALETTE_OFFSETS: [u64; NUM_PALETTES] = [0x202d6, 0x20336, 0x203f6];

fn check_index(what: IndexKind, index: usize, limit: usize) -> Result<(), PatchError> {
	if index >= limit {
		return Err(PatchError::InvalidIndex { what, index, limit });
	}

	Ok(())
}

pub fn check_palette_index(index: usize) -> Result<(), PatchError> {
	check_index(IndexKind::Palette, index, NUM_PALETTES)
}

/// `offset + len`, for offsets that may come from a layout file.
pub fn region_end(path: &Path, offset: u64, len: u64) -> Result<u64, PatchError> {
	offset.checked_add(len).ok_or_else(|| PatchError::InvalidLayout {
		path: path.to_path_buf(),
		msg: format!("offset {offset:#X} is out of range"),
	})
}

/// The file this tool keeps its own copy of the palettes in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageLayout {
	pub path: PathBuf,
	pub base_offset: u64,
}

impl Default for ImageLayout {
	fn default() -> Self {
		Self {
			path: PathBuf::from(SELF_IMAGE_NAME),
			base_offset: SELF_PAL_BLOCK_OFFSET,
		}
	}
}

impl ImageLayout {
	/// Absolute offset of a color entry. Palettes and colors are stored back to back without padding.
	pub fn color_offset(&self, palette_index: usize, color_index: usize) -> Result<u64, PatchError> {
		check_palette_index(palette_index)?;
		check_index(IndexKind::Color, color_index, PALETTE_SIZE)?;

		let relative = color_index * BYTES_PER_COLOR + palette_index * PALETTE_SIZE * BYTES_PER_COLOR;
		region_end(&self.path, self.base_offset, relative as u64)
	}
}

/// An executable the palettes can be applied to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetLayout {
	pub name: String,
	pub path: PathBuf,
	pub expected_size: u64,
	pub palette_offsets: [u64; NUM_PALETTES],
}

impl Default for TargetLayout {
	fn default() -> Self {
		Self {
			name: DEFAULT_TARGET.to_string(),
			path: PathBuf::from(RALLYE_EXE_NAME),
			expected_size: RALLYE_EXE_SIZE,
			palette_offsets: RALLYE_PALETTE_OFFSETS,
		}
	}
}

impl TargetLayout {
	pub fn palette_offset(&self, palette_index: usize) -> Result<u64, PatchError> {
		check_palette_index(palette_index)?;
		Ok(self.palette_offsets[palette_index])
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
	pub self_image: ImageLayout,
	pub targets: Vec<TargetLayout>,
}

impl Default for Layout {
	fn default() -> Self {
		Self {
			self_image: ImageLayout::default(),
			targets: vec![TargetLayout::default()],
		}
	}
}

impl Layout {
	fn from_json_internal<R: Read>(reader: R, path: &Path) -> Result<Layout, PatchError> {
		serde_json::from_reader(reader)
			.map_err(|e| PatchError::InvalidLayout { path: path.to_path_buf(), msg: e.to_string() })
	}

	pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Layout, PatchError> {
		let path = path.as_ref();
		let f = File::open(path).map_err(|e| PatchError::FileAccess { path: path.to_path_buf(), source: e })?;
		Self::from_json_internal(BufReader::new(f), path)
	}

	pub fn load_from_string<S: Into<String>>(s: S) -> Result<Layout, PatchError> {
		let s = s.into();
		Self::from_json_internal(s.as_bytes(), Path::new("<string>"))
	}

	pub fn target(&self, name: &str) -> Result<&TargetLayout, PatchError> {
		self.targets.iter()
			.find(|t| t.name == name)
			.ok_or_else(|| PatchError::UnknownTarget { name: name.to_string() })
	}

	pub fn target_mut(&mut self, name: &str) -> Result<&mut TargetLayout, PatchError> {
		self.targets.iter_mut()
			.find(|t| t.name == name)
			.ok_or_else(|| PatchError::UnknownTarget { name: name.to_string() })
	}
}
