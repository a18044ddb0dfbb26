use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use setpal_rs::palettes::palette_set::PaletteSet;
use setpal_rs::patch::layout::check_palette_index;

use crate::cmd_export::export_palette;
use crate::cmd_modify::modify_color;
use crate::cmd_patch::apply_palette;
use crate::cmd_report::print_report;
use crate::commands::{Cli, Commands, PROGRAM_NAME};
use crate::common::load_layout;

mod cmd_export;
mod cmd_modify;
mod cmd_patch;
mod cmd_report;
mod commands;
mod common;

fn run(cli: &Cli) -> Result<()> {
	let layout = load_layout(cli)?;

	// indices are checked before any palette file gets opened
	match &cli.command {
		None => {
			let palettes = PaletteSet::load(&layout.self_image)?;
			print_report(&layout, &palettes)
		}
		Some(Commands::Modify(args)) => modify_color(args, cli, &layout),
		Some(Commands::Patch(args)) => {
			layout.target(&args.release)?.palette_offset(args.palette)?;
			let palettes = PaletteSet::load(&layout.self_image)?;
			apply_palette(args, cli, &layout, &palettes)
		}
		Some(Commands::Export(args)) => {
			check_palette_index(args.palette)?;
			let palettes = PaletteSet::load(&layout.self_image)?;
			export_palette(args, &palettes)
		}
	}
}

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) => {
			// --help and --version end up here too
			let failed = e.use_stderr();
			let _ = e.print();
			return if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };
		}
	};

	match run(&cli) {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{} {e}", format!("{PROGRAM_NAME} ERROR:").as_str().red().bold());
			ExitCode::FAILURE
		}
	}
}
