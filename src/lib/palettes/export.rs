use std::fmt::{Display, Formatter};

use crate::palettes::palette::Palette;

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/gpl_file.cpp

const GIMP_MAGIC: &str = "GIMP Palette";

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq)]
pub enum ExportFormat {
	#[default] Json,
	Hex,
	Gpl,
}

impl Display for ExportFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ExportFormat::Json => write!(f, "json"),
			ExportFormat::Hex => write!(f, "hex"),
			ExportFormat::Gpl => write!(f, "gpl"),
		}
	}
}

impl Palette {
	fn to_json_string(&self) -> String {
		let colors = self.colors().iter().map(|c| c.to_string()).collect::<Vec<String>>();
		// a list of strings always serializes
		serde_json::to_string_pretty(&colors).unwrap_or_default()
	}

	fn to_hex_string(&self) -> String {
		self.colors().iter()
			.map(|c| c.to_string().trim_start_matches('#').to_string())
			.collect::<Vec<String>>()
			.join("\n")
	}

	fn to_gpl_string(&self, name: &str) -> String {
		let mut lines = vec![
			GIMP_MAGIC.to_string(),
			format!("Name: {name}"),
			"Columns: 8".to_string(),
			"#".to_string(),
		];

		for (i, c) in self.colors().iter().enumerate() {
			let [r, g, b] = c.to_8bits();
			lines.push(format!("{r:>3} {g:>3} {b:>3}\tIndex {i}"));
		}

		lines.join("\n")
	}

	/// Renders the palette as text, using the 8-bit values the user sees in the report.
	pub fn export(&self, format: ExportFormat, name: &str) -> String {
		match format {
			ExportFormat::Json => self.to_json_string(),
			ExportFormat::Hex => self.to_hex_string(),
			ExportFormat::Gpl => self.to_gpl_string(name),
		}
	}
}
