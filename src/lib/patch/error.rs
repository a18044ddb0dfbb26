use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

use crate::palettes::palette::PaletteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
	Palette,
	Color,
}

impl Display for IndexKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			IndexKind::Palette => write!(f, "palette"),
			IndexKind::Color => write!(f, "color"),
		}
	}
}

/// Everything that can go wrong while locating or patching palette data.
/// None of these are recoverable; a failed in-place write is not rolled back.
#[derive(Debug)]
pub enum PatchError {
	InvalidIndex { what: IndexKind, index: usize, limit: usize },
	FileAccess { path: PathBuf, source: io::Error },
	/// With `exact` set the file has to be exactly `expected` bytes long, otherwise at least that long.
	SizeMismatch { path: PathBuf, expected: u64, actual: u64, exact: bool },
	WriteIncomplete { path: PathBuf, offset: u64, source: io::Error },
	UnknownTarget { name: String },
	InvalidLayout { path: PathBuf, msg: String },
	Palette(PaletteError),
}

impl Display for PatchError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PatchError::InvalidIndex { what, index, limit } => {
				write!(f, "Bad {what} index {index}, must be between 0 and {}", limit.saturating_sub(1))
			}
			PatchError::FileAccess { path, source } => write!(f, "Failed to access {}: {source}", path.display()),
			PatchError::SizeMismatch { path, expected, actual, exact: true } => write!(
				f,
				"{} is not of the correct size ({actual} bytes instead of {expected}). Only the supported version of this file can be patched",
				path.display()
			),
			PatchError::SizeMismatch { path, expected, actual, exact: false } => write!(
				f,
				"{} is too small to hold the palette data ({actual} bytes, need at least {expected})",
				path.display()
			),
			PatchError::WriteIncomplete { path, offset, source } => write!(
				f,
				"Failed to write palette data into {} at offset {offset:#X}: {source}. The file may have become corrupted as a result",
				path.display()
			),
			PatchError::UnknownTarget { name } => write!(f, "No target layout named \"{name}\" is known"),
			PatchError::InvalidLayout { path, msg } => write!(f, "Invalid layout for {}: {msg}", path.display()),
			PatchError::Palette(e) => write!(f, "{e}"),
		}
	}
}

impl std::error::Error for PatchError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PatchError::FileAccess { source, .. } | PatchError::WriteIncomplete { source, .. } => Some(source),
			PatchError::Palette(e) => Some(e),
			_ => None,
		}
	}
}

impl From<PaletteError> for PatchError {
	fn from(e: PaletteError) -> Self {
		PatchError::Palette(e)
	}
}
