use std::fs;

use setpal_rs::palettes::color::Color;
use setpal_rs::palettes::export::ExportFormat;
use setpal_rs::palettes::palette::Palette;
use setpal_rs::palettes::palette_set::PaletteSet;
use setpal_rs::palettes::{PALETTE_BYTES, PALETTE_SET_BYTES, PALETTE_SIZE};
use setpal_rs::patch::error::PatchError;
use setpal_rs::patch::layout::ImageLayout;

fn palette_set_data() -> Vec<u8> {
	(0..PALETTE_SET_BYTES).map(|i| (i % 64) as u8).collect()
}

fn test_palette() -> Palette {
	let mut colors = [Color::default(); PALETTE_SIZE];
	colors[0] = Color { r: 63, g: 32, b: 1 };
	colors[31] = Color { r: 10, g: 20, b: 30 };
	Palette::from(colors)
}

#[test]
fn palette_parsing() {
	let data = palette_set_data();
	let pal = Palette::from_bytes(&data[..PALETTE_BYTES]).unwrap();

	assert_eq!(pal.len(), PALETTE_SIZE);
	assert_eq!(pal.color(0).unwrap(), Color { r: 0, g: 1, b: 2 });
	assert_eq!(pal.color(31).unwrap(), Color { r: 29, g: 30, b: 31 });
	assert_eq!(pal.to_bytes().to_vec(), data[..PALETTE_BYTES].to_vec());
}

#[test]
#[should_panic(expected = "WrongLength { expected: 96, actual: 95 }")]
fn palette_parsing_short() {
	Palette::from_bytes(&[0_u8; 95]).unwrap();
}

#[test]
#[should_panic(expected = "InvalidBinaryData { position: 6, msg: \"Color 2 (0, 64, 0) exceeds the 6-bit range\" }")]
fn palette_parsing_out_of_range() {
	let mut data = [0_u8; PALETTE_BYTES];
	data[7] = 64;
	Palette::from_bytes(&data).unwrap();
}

#[test]
#[should_panic(expected = "InvalidIndex { index: 32, limit: 32 }")]
fn palette_bad_color_index() {
	test_palette().color(32).unwrap();
}

#[test]
fn palette_set_parsing() {
	let data = palette_set_data();
	let set = PaletteSet::from_bytes(&data).unwrap();

	assert_eq!(set.palettes().len(), 3);
	// palette 1 starts at byte 96, which is 32 in the repeating 0..64 pattern
	assert_eq!(set.color(1, 0).unwrap(), Color { r: 32, g: 33, b: 34 });
	assert_eq!(set.color(2, 31).unwrap(), Color { r: 29, g: 30, b: 31 });
	assert_eq!(set.palette(2).unwrap().to_bytes().to_vec(), data[2 * PALETTE_BYTES..].to_vec());
}

#[test]
#[should_panic(expected = "InvalidBinaryData { position: 99, msg: \"Palette 1: Color 1 (0, 0, 64) exceeds the 6-bit range\" }")]
fn palette_set_parsing_out_of_range() {
	let mut data = [0_u8; PALETTE_SET_BYTES];
	data[101] = 64;
	PaletteSet::from_bytes(&data).unwrap();
}

#[test]
#[should_panic(expected = "InvalidIndex { index: 3, limit: 3 }")]
fn palette_set_bad_palette_index() {
	PaletteSet::default().color(3, 0).unwrap();
}

#[test]
fn palette_set_loading() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("SETPAL.EXE");

	let image = ImageLayout { path: path.clone(), base_offset: 0x40 };
	let mut file_data = vec![0xFF_u8; 0x40];
	file_data.extend(palette_set_data());
	file_data.extend([0xFF_u8; 16]);
	fs::write(&path, &file_data).unwrap();

	let set = PaletteSet::load(&image).unwrap();
	assert_eq!(set, PaletteSet::from_bytes(&palette_set_data()).unwrap());
}

#[test]
fn palette_set_loading_short_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("SETPAL.EXE");
	fs::write(&path, vec![0_u8; 0x2527 + 100]).unwrap();

	let err = PaletteSet::load(&ImageLayout { path, ..ImageLayout::default() }).unwrap_err();
	assert!(matches!(err, PatchError::SizeMismatch { expected: 0x2647, actual: 0x258B, exact: false, .. }), "{err:?}");
}

#[test]
fn palette_set_loading_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let image = ImageLayout { path: dir.path().join("missing.exe"), ..ImageLayout::default() };

	let err = PaletteSet::load(&image).unwrap_err();
	assert!(matches!(err, PatchError::FileAccess { .. }), "{err:?}");
}

#[test]
fn palette_export() {
	let pal = test_palette();

	let json = pal.export(ExportFormat::Json, "test");
	let colors: Vec<String> = serde_json::from_str(&json).unwrap();
	assert_eq!(colors.len(), PALETTE_SIZE);
	assert_eq!(colors[0], "#FC8004");
	assert_eq!(colors[1], "#000000");
	assert_eq!(colors[31], "#285078");

	let hex = pal.export(ExportFormat::Hex, "test");
	let lines = hex.lines().collect::<Vec<&str>>();
	assert_eq!(lines.len(), PALETTE_SIZE);
	assert_eq!(lines[0], "FC8004");
	assert_eq!(lines[31], "285078");

	let gpl = pal.export(ExportFormat::Gpl, "test");
	assert!(gpl.starts_with("GIMP Palette\nName: test\n"), "{gpl}");
	assert!(gpl.contains("252 128   4\tIndex 0"), "{gpl}");
	assert!(gpl.ends_with(" 40  80 120\tIndex 31"), "{gpl}");
	assert_eq!(gpl.lines().count(), 4 + PALETTE_SIZE);
}
