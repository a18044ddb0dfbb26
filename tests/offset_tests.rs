use setpal_rs::palettes::{BYTES_PER_COLOR, NUM_PALETTES, PALETTE_SET_BYTES, PALETTE_SIZE};
use setpal_rs::patch::error::{IndexKind, PatchError};
use setpal_rs::patch::layout::{ImageLayout, TargetLayout, RALLYE_PALETTE_OFFSETS, SELF_PAL_BLOCK_OFFSET};

#[test]
fn self_image_offsets() {
	let image = ImageLayout::default();

	assert_eq!(image.color_offset(0, 0).unwrap(), 0x2527);
	assert_eq!(image.color_offset(0, 1).unwrap(), 0x2527 + 3);
	assert_eq!(image.color_offset(1, 0).unwrap(), 0x2527 + 96);
	assert_eq!(image.color_offset(2, 31).unwrap(), 0x2527 + 2 * 96 + 31 * 3);
}

#[test]
fn self_image_offsets_are_contiguous() {
	let image = ImageLayout::default();

	let mut last_end: Option<u64> = None;
	for pal in 0..NUM_PALETTES {
		for col in 0..PALETTE_SIZE {
			let offset = image.color_offset(pal, col).unwrap();
			if let Some(end) = last_end {
				// each entry starts right where the previous one ended, so they never overlap
				assert_eq!(offset, end, "palette {pal} color {col}");
			}
			last_end = Some(offset + BYTES_PER_COLOR as u64);
		}
	}

	assert_eq!(last_end, Some(SELF_PAL_BLOCK_OFFSET + PALETTE_SET_BYTES as u64));
}

#[test]
fn self_image_offsets_follow_base_offset() {
	let image = ImageLayout { base_offset: 0, ..ImageLayout::default() };
	assert_eq!(image.color_offset(2, 0).unwrap(), 192);
}

#[test]
#[should_panic(expected = "InvalidIndex { what: Palette, index: 3, limit: 3 }")]
fn self_image_offset_bad_palette() {
	ImageLayout::default().color_offset(3, 0).unwrap();
}

#[test]
#[should_panic(expected = "InvalidIndex { what: Color, index: 32, limit: 32 }")]
fn self_image_offset_bad_color() {
	ImageLayout::default().color_offset(0, 32).unwrap();
}

#[test]
fn target_offsets() {
	let target = TargetLayout::default();

	for (i, expected) in RALLYE_PALETTE_OFFSETS.iter().enumerate() {
		assert_eq!(target.palette_offset(i).unwrap(), *expected);
	}
	assert_eq!(target.palette_offset(1).unwrap(), 0x20336);

	let err = target.palette_offset(NUM_PALETTES).unwrap_err();
	assert!(matches!(err, PatchError::InvalidIndex { what: IndexKind::Palette, index: 3, limit: 3 }), "{err:?}");
	assert_eq!(err.to_string(), "Bad palette index 3, must be between 0 and 2");
}

#[test]
fn self_image_offset_overflow() {
	let image = ImageLayout { base_offset: u64::MAX - 1, ..ImageLayout::default() };

	assert_eq!(image.color_offset(0, 0).unwrap(), u64::MAX - 1);
	let err = image.color_offset(2, 31).unwrap_err();
	assert!(matches!(err, PatchError::InvalidLayout { .. }), "{err:?}");
}
