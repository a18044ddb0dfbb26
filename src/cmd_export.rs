use anyhow::Result;
use setpal_rs::palettes::palette_set::PaletteSet;

use crate::commands::{ExportArgs, PROGRAM_NAME};

pub(crate) fn export_palette(args: &ExportArgs, palettes: &PaletteSet) -> Result<()> {
	let pal = palettes.palette(args.palette)?;
	println!("{}", pal.export(args.format, &format!("{PROGRAM_NAME} palette {}", args.palette)));
	Ok(())
}
