use anyhow::Result;
use setpal_rs::patch::layout::Layout;
use setpal_rs::patch::patcher::WriteMode;

use crate::commands::{Cli, Commands};

/// Builds the layout for this run: the layout file if one was given, else the built-in
/// defaults, with the paths from the command line applied on top.
pub(crate) fn load_layout(cli: &Cli) -> Result<Layout> {
	let mut layout = match &cli.layout {
		Some(path) => Layout::load_from_file(path)?,
		None => Layout::default(),
	};

	if let Some(image) = &cli.image {
		layout.self_image.path = image.clone();
	}

	if let Some(target) = &cli.target {
		let Some(Commands::Patch(args)) = &cli.command else {
			anyhow::bail!("--target only applies to the patch command");
		};
		layout.target_mut(&args.release)?.path = target.clone();
	}

	if cli.debug {
		eprintln!("{:#^40}", " DEBUG MODE ");
		eprintln!("layout: {layout:#?}");
	}

	Ok(layout)
}

pub(crate) fn write_mode(cli: &Cli) -> WriteMode {
	if cli.atomic { WriteMode::Atomic } else { WriteMode::InPlace }
}
