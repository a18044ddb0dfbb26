use std::fs::{File, OpenOptions};
use std::io;
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::palettes::color::Color;
use crate::palettes::palette_set::PaletteSet;
use crate::patch::error::PatchError;
use crate::patch::layout::{region_end, Layout};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum WriteMode {
	/// Seek and write directly into the file. A failed write is not rolled back.
	#[default] InPlace,
	/// Patch a copy of the file next to it, then move the copy over the original.
	Atomic,
}

/// Describes a completed write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchReport {
	pub path: PathBuf,
	pub offset: u64,
	pub bytes: Vec<u8>,
	pub file_size: u64,
}

pub struct Patcher<'a> {
	layout: &'a Layout,
	mode: WriteMode,
	debug: bool,
}

fn open_rw(path: &Path) -> Result<File, PatchError> {
	OpenOptions::new()
		.read(true)
		.write(true)
		.open(path)
		.map_err(|e| PatchError::FileAccess { path: path.to_path_buf(), source: e })
}

/// Checks the file size before anything gets written. The write region always has to lie
/// inside the file, so patching never grows it.
fn verify_size(f: &File, path: &Path, end: u64, expected_size: Option<u64>) -> Result<u64, PatchError> {
	let size = f.metadata()
		.map_err(|e| PatchError::FileAccess { path: path.to_path_buf(), source: e })?
		.len();

	if let Some(expected) = expected_size {
		if size != expected {
			return Err(PatchError::SizeMismatch { path: path.to_path_buf(), expected, actual: size, exact: true });
		}
	}

	if size < end {
		return Err(PatchError::SizeMismatch { path: path.to_path_buf(), expected: end, actual: size, exact: false });
	}

	Ok(size)
}

fn write_at<W: Write + Seek>(w: &mut W, path: &Path, offset: u64, bytes: &[u8]) -> Result<(), PatchError> {
	w.seek(SeekFrom::Start(offset))
		.and_then(|_| w.write_all(bytes))
		.and_then(|_| w.flush())
		.map_err(|e| PatchError::WriteIncomplete { path: path.to_path_buf(), offset, source: e })
}

impl<'a> Patcher<'a> {
	pub fn new(layout: &'a Layout) -> Self {
		Self { layout, mode: WriteMode::default(), debug: false }
	}

	pub fn with_mode(mut self, mode: WriteMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;
		self
	}

	/// Overwrites one color entry in the self image. `rgb` holds 8-bit values; they are
	/// scaled down to 6 bits before writing. Only the three bytes of that entry change.
	pub fn modify_color(&self, palette_index: usize, color_index: usize, rgb: [i32; 3]) -> Result<PatchReport, PatchError> {
		let image = &self.layout.self_image;
		let offset = image.color_offset(palette_index, color_index)?;
		let color = Color::from_8bits(rgb);

		self.write_block(&image.path, offset, &color.to_bytes(), None)
	}

	/// Copies one of `palettes` into the target executable named `target_name`.
	/// The target has to match the expected size exactly, otherwise nothing is written.
	pub fn apply_palette(&self, palettes: &PaletteSet, target_name: &str, palette_index: usize) -> Result<PatchReport, PatchError> {
		let target = self.layout.target(target_name)?;
		let offset = target.palette_offset(palette_index)?;
		let palette = palettes.palette(palette_index)?;

		self.write_block(&target.path, offset, &palette.to_bytes(), Some(target.expected_size))
	}

	fn write_block(&self, path: &Path, offset: u64, bytes: &[u8], expected_size: Option<u64>) -> Result<PatchReport, PatchError> {
		let end = region_end(path, offset, bytes.len() as u64)?;

		if self.debug {
			eprintln!("{:#^40}", " DEBUG MODE ");
			eprintln!("file: {}", path.display());
			eprintln!("mode: {:?}", self.mode);
			eprintln!("offset: {offset:#X} ({offset})");
			eprintln!("bytes ({}): {:02X?}", bytes.len(), bytes);
		}

		let mut f = open_rw(path)?;
		let file_size = verify_size(&f, path, end, expected_size)?;

		match self.mode {
			WriteMode::InPlace => write_at(&mut f, path, offset, bytes)?,
			WriteMode::Atomic => Self::write_via_temp_file(f, path, offset, bytes)?,
		}

		if self.debug {
			eprintln!("wrote {} bytes at {offset:#X}", bytes.len());
		}

		Ok(PatchReport { path: path.to_path_buf(), offset, bytes: bytes.to_vec(), file_size })
	}

	fn write_via_temp_file(mut original: File, path: &Path, offset: u64, bytes: &[u8]) -> Result<(), PatchError> {
		let dir = match path.parent() {
			Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
			_ => PathBuf::from("."),
		};

		let access_err = |p: &Path, e: io::Error| PatchError::FileAccess { path: p.to_path_buf(), source: e };

		let mut temp_file = Builder::new()
			.prefix(".setpal")
			.suffix(".tmp")
			.tempfile_in(&dir)
			.map_err(|e| access_err(&dir, e))?;

		io::copy(&mut original, temp_file.as_file_mut()).map_err(|e| access_err(temp_file.path(), e))?;
		write_at(temp_file.as_file_mut(), path, offset, bytes)?;

		let permissions = original.metadata().map_err(|e| access_err(path, e))?.permissions();
		temp_file.as_file().set_permissions(permissions).map_err(|e| access_err(temp_file.path(), e))?;
		temp_file.as_file().sync_all().map_err(|e| access_err(temp_file.path(), e))?;

		// the original has to be closed before it can be replaced on some platforms
		drop(original);

		temp_file.persist(path).map_err(|e| access_err(path, e.error))?;
		Ok(())
	}
}
