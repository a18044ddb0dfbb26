use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use setpal_rs::palettes::export::ExportFormat;
use setpal_rs::patch::layout::DEFAULT_TARGET;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

pub(crate) const PROGRAM_NAME: &str = "SETPAL";

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Edits Rally-Sport's hard-coded palettes (demo version only). Run without a command to list the stored palettes.")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "The file the palettes are stored in. Overrides the layout file.")]
	pub image: Option<PathBuf>,
	#[arg(long, global = true, help = "The executable to patch. Overrides the layout file.")]
	pub target: Option<PathBuf>,
	#[arg(long, global = true, help = "A JSON file describing palette offsets and file sizes.")]
	pub layout: Option<PathBuf>,

	#[arg(long, global = true, help = "Writes into a temporary copy first and replaces the file only once that succeeded.")]
	pub atomic: bool,

	#[arg(long, global = true)]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ModifyArgs {
	#[arg(help = "The palette index. (0-2)")]
	pub palette: usize,
	#[arg(help = "The index of the color to modify. (0-31)")]
	pub color: usize,

	#[arg(help = "Red. (0-255)", allow_negative_numbers = true)]
	pub red: i32,
	#[arg(help = "Green. (0-255)", allow_negative_numbers = true)]
	pub green: i32,
	#[arg(help = "Blue. (0-255)", allow_negative_numbers = true)]
	pub blue: i32,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct PatchArgs {
	#[arg(help = "The palette index. (0-2)")]
	pub palette: usize,

	#[arg(long, help = "The name of the target layout to use.", default_value = DEFAULT_TARGET)]
	pub release: String,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ExportArgs {
	#[arg(help = "The palette index. (0-2)")]
	pub palette: usize,

	#[arg(short, long, value_enum, help = "The output format.", default_value_t = ExportFormat::default())]
	pub format: ExportFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(visible_alias = "m", about = "Modifies a color in one of the stored palettes.")]
	Modify(ModifyArgs),
	#[command(visible_alias = "p", about = "Patches the target executable with one of the stored palettes.")]
	Patch(PatchArgs),
	#[command(about = "Prints one of the stored palettes in a common palette format.")]
	Export(ExportArgs),
}
