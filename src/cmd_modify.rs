use anyhow::Result;
use setpal_rs::palettes::color::Color;
use setpal_rs::patch::layout::Layout;
use setpal_rs::patch::patcher::Patcher;

use crate::commands::{Cli, ModifyArgs};
use crate::common::write_mode;

pub(crate) fn modify_color(args: &ModifyArgs, cli: &Cli, layout: &Layout) -> Result<()> {
	let patcher = Patcher::new(layout)
		.with_mode(write_mode(cli))
		.with_debug(cli.debug);

	let report = patcher.modify_color(args.palette, args.color, [args.red, args.green, args.blue])?;

	let [r, g, b] = Color::from([report.bytes[0], report.bytes[1], report.bytes[2]]).to_8bits();
	println!(
		"Palette {} color {} in {} is now [{r} {g} {b}].",
		args.palette,
		args.color,
		report.path.display()
	);

	Ok(())
}
