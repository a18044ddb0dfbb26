use anyhow::Result;
use humansize::DECIMAL;
use setpal_rs::palettes::palette_set::PaletteSet;
use setpal_rs::patch::layout::Layout;
use setpal_rs::patch::patcher::Patcher;

use crate::commands::{Cli, PatchArgs};
use crate::common::write_mode;

pub(crate) fn apply_palette(args: &PatchArgs, cli: &Cli, layout: &Layout, palettes: &PaletteSet) -> Result<()> {
	let patcher = Patcher::new(layout)
		.with_mode(write_mode(cli))
		.with_debug(cli.debug);

	let report = patcher.apply_palette(palettes, &args.release, args.palette)?;

	let size = humansize::format_size(report.file_size, DECIMAL);
	println!(
		"Patched palette {} into {} ({size}) at offset {:#X}.",
		args.palette,
		report.path.display(),
		report.offset
	);

	Ok(())
}
