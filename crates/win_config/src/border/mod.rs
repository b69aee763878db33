//! Border and border-text resolution.
//!
//! Turns the loose request forms (a preset name, or a list of 1, 2, 4 or 8
//! cells) into the fixed eight-slot [`Border`], and plain or rich title and
//! footer text into [`BorderText`] chunks.
//!
//! Slots run clockwise from the top-left corner:
//!
//! ```text
//! 0 1 2
//! 7   3
//! 6 5 4
//! ```

mod text;
#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

pub use self::text::{BorderTextSpec, border_text_to_spec, resolve_border_text};
use crate::config::Border;
use crate::error::BorderError;

/// Highlight for the see-through corners of the shadow preset.
pub const SHADOW_THROUGH_HL: &str = "FloatShadowThrough";
/// Highlight for the blended edges of the shadow preset.
pub const SHADOW_BLEND_HL: &str = "FloatShadow";

/// Border as given in a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderSpec {
	/// A preset name, or `"none"`/`""` to remove the border.
	Named(String),
	/// Explicit cells, repeated to fill eight slots.
	Cells(Vec<BorderCellSpec>),
}

/// One explicit border cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderCellSpec {
	/// A bare glyph.
	Glyph(String),
	/// `[glyph]` or `[glyph, highlight]`.
	Tuple(Vec<String>),
}

/// Built-in border styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderPreset {
	/// Single line box.
	Single,
	/// Double line box.
	Double,
	/// Single line box with rounded corners.
	Rounded,
	/// One cell of padding on every side.
	Solid,
	/// Drop shadow along the right and bottom edges.
	Shadow,
}

impl BorderPreset {
	/// Looks up a preset by its exact name.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"single" => Some(Self::Single),
			"double" => Some(Self::Double),
			"rounded" => Some(Self::Rounded),
			"solid" => Some(Self::Solid),
			"shadow" => Some(Self::Shadow),
			_ => None,
		}
	}

	/// Glyphs of the preset in slot order.
	pub fn glyphs(self) -> [&'static str; 8] {
		match self {
			Self::Single => ["┌", "─", "┐", "│", "┘", "─", "└", "│"],
			Self::Double => ["╔", "═", "╗", "║", "╝", "═", "╚", "║"],
			Self::Rounded => ["╭", "─", "╮", "│", "╯", "─", "╰", "│"],
			Self::Solid => [" "; 8],
			Self::Shadow => ["", "", " ", " ", " ", " ", " ", ""],
		}
	}

	/// Highlights of the preset in slot order.
	pub fn highlights(self) -> [Option<&'static str>; 8] {
		match self {
			Self::Shadow => [
				None,
				None,
				Some(SHADOW_THROUGH_HL),
				Some(SHADOW_BLEND_HL),
				Some(SHADOW_BLEND_HL),
				Some(SHADOW_BLEND_HL),
				Some(SHADOW_THROUGH_HL),
				None,
			],
			_ => [None; 8],
		}
	}

	/// Builds the resolved border.
	pub fn border(self) -> Border {
		Border {
			chars: self.glyphs().map(str::to_string),
			highlights: self.highlights().map(|hl| hl.map(str::to_string)),
		}
	}
}

/// Resolves a requested border.
///
/// Returns `Ok(None)` when the request removes the border.
pub fn resolve_border(spec: &BorderSpec) -> Result<Option<Border>, BorderError> {
	match spec {
		BorderSpec::Named(name) if name.is_empty() || name == "none" => Ok(None),
		BorderSpec::Named(name) => BorderPreset::from_name(name)
			.map(|preset| Some(preset.border()))
			.ok_or_else(|| BorderError::UnknownStyle(name.clone())),
		BorderSpec::Cells(cells) => resolve_cells(cells).map(Some),
	}
}

fn resolve_cells(cells: &[BorderCellSpec]) -> Result<Border, BorderError> {
	let n = cells.len();
	if n == 0 || n > 8 || !n.is_power_of_two() {
		return Err(BorderError::InvalidCharCount);
	}

	let mut chars = Vec::with_capacity(8);
	let mut highlights = Vec::with_capacity(8);
	for cell in cells {
		let (glyph, highlight) = match cell {
			BorderCellSpec::Glyph(glyph) => (glyph, None),
			BorderCellSpec::Tuple(parts) => match parts.as_slice() {
				[glyph] => (glyph, None),
				[glyph, hl] => (glyph, Some(hl).filter(|hl| !hl.is_empty())),
				_ => return Err(BorderError::InvalidChar),
			},
		};
		if glyph.width() > 1 {
			return Err(BorderError::MultiCellChar);
		}
		chars.push(glyph.clone());
		highlights.push(highlight.cloned());
	}

	while chars.len() < 8 {
		chars.extend_from_within(..);
		highlights.extend_from_within(..);
	}

	let chars: [String; 8] = chars.try_into().map_err(|_| BorderError::InvalidCharCount)?;
	let highlights: [Option<String>; 8] = highlights.try_into().map_err(|_| BorderError::InvalidCharCount)?;

	for corner in [0usize, 2, 4, 6] {
		let before = &chars[(corner + 7) % 8];
		let after = &chars[corner + 1];
		if chars[corner].is_empty() && !before.is_empty() && !after.is_empty() {
			return Err(BorderError::MissingCorner);
		}
	}

	Ok(Border { chars, highlights })
}

/// Projects a resolved border back into request form.
///
/// Every slot is emitted; slots with a highlight become `[glyph, highlight]`.
pub fn border_to_spec(border: &Border) -> BorderSpec {
	BorderSpec::Cells(
		border
			.chars
			.iter()
			.zip(&border.highlights)
			.map(|(glyph, hl)| match hl {
				Some(hl) => BorderCellSpec::Tuple(vec![glyph.clone(), hl.clone()]),
				None => BorderCellSpec::Glyph(glyph.clone()),
			})
			.collect(),
	)
}
