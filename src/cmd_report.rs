use anyhow::Result;
use colored::Colorize;
use setpal_rs::palettes::color::Color;
use setpal_rs::palettes::palette_set::PaletteSet;
use setpal_rs::palettes::PALETTE_SIZE;
use setpal_rs::patch::layout::Layout;

fn format_cell(c: &Color) -> String {
	let [r, g, b] = c.to_8bits();
	let swatch = "  ".on_truecolor(r, g, b);
	format!("{swatch} [{r:<4}{g:<4}{b:<3}]")
}

/// Prints the stored palettes side by side, in 8-bit values.
pub(crate) fn print_report(layout: &Layout, palettes: &PaletteSet) -> Result<()> {
	println!("The palettes currently stored in {}:\n", layout.self_image.path.display());

	let mut header = vec!["INDEX".to_string()];
	for i in 0..palettes.palettes().len() {
		header.push(format!("{:<19}", format!("PALETTE {i}")));
	}
	println!("{}", header.join("\t").as_str().bold());

	for color_idx in 0..PALETTE_SIZE {
		let mut row = vec![format!("{color_idx:<5}")];
		for pal in palettes.palettes() {
			row.push(format_cell(&pal.color(color_idx)?));
		}
		println!("{}", row.join("\t"));
	}

	Ok(())
}
