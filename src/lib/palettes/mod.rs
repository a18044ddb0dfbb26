pub mod color;
pub mod export;
pub mod palette;
pub mod palette_set;

/// The number of user-addressable palettes. The game stores a fourth one that it never uses.
pub const NUM_PALETTES: usize = 3;
/// The number of colors in each palette.
pub const PALETTE_SIZE: usize = 32;
pub const BYTES_PER_COLOR: usize = 3;
/// The size in bytes of one palette block.
pub const PALETTE_BYTES: usize = PALETTE_SIZE * BYTES_PER_COLOR;
pub const PALETTE_SET_BYTES: usize = NUM_PALETTES * PALETTE_BYTES;

/// The highest level a channel can have in VGA mode 13h.
pub const MAX_LEVEL: u8 = 63;
