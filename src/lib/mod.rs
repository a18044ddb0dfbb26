pub mod palettes;
pub mod patch;
