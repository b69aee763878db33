//! The canonical window configuration record.
//!
//! [`WinConfig`] is what a window owns once a request has been validated.
//! Placement is a tagged union so that mode-specific fields only exist for
//! the mode they belong to: split direction for in-tree windows, anchor
//! space and coordinates for floats, nothing extra for external windows.

mod keywords;
#[cfg(test)]
mod tests;

use smallvec::SmallVec;

pub use self::keywords::{Anchor, RelativeKind, SplitDirection, TextAlign, WinStyle};
use crate::ids::WindowId;

/// Default stacking order for floating windows.
pub const DEFAULT_ZINDEX: u32 = 50;

/// Derived placement kind of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementKind {
	/// A leaf of the frame tree.
	Split,
	/// An overlay positioned by coordinates.
	Float,
	/// A top-level surface owned by the UI.
	External,
}

/// Where an in-tree window is inserted relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitTarget {
	/// Split the given window.
	Window(WindowId),
	/// Split the whole tabpage, placing the window at an outer edge.
	TopLevel,
}

/// Anchor space of a floating window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relative {
	/// The global editor grid.
	Editor,
	/// Another window; `(row, col)` are offsets inside it.
	Window(WindowId),
	/// The cursor position in the current window.
	Cursor,
	/// The mouse pointer position.
	Mouse,
}

impl Relative {
	/// Keyword used in requests and query results.
	pub fn kind(self) -> RelativeKind {
		match self {
			Relative::Editor => RelativeKind::Editor,
			Relative::Window(_) => RelativeKind::Window,
			Relative::Cursor => RelativeKind::Cursor,
			Relative::Mouse => RelativeKind::Mouse,
		}
	}
}

/// Zero-indexed buffer position a float is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufPos {
	/// Buffer line.
	pub line: i64,
	/// Byte column in the line.
	pub col: i64,
}

/// Geometry of a floating window.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatPlacement {
	/// Anchor space for `row`/`col`.
	pub relative: Relative,
	/// Which corner of the float sits at `(row, col)`.
	pub anchor: Anchor,
	/// Row offset in screen cells, may be fractional.
	pub row: f64,
	/// Column offset in screen cells, may be fractional.
	pub col: f64,
	/// Buffer position the offsets are relative to. Only for window-relative floats.
	pub bufpos: Option<BufPos>,
	/// Stacking order, higher on top.
	pub zindex: u32,
}

impl Default for FloatPlacement {
	fn default() -> Self {
		Self {
			relative: Relative::Editor,
			anchor: Anchor::NorthWest,
			row: 0.0,
			col: 0.0,
			bufpos: None,
			zindex: DEFAULT_ZINDEX,
		}
	}
}

/// Mode-specific part of a window configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
	/// In-tree window.
	Split {
		/// Side of the target the window occupies.
		direction: SplitDirection,
		/// Window (or whole tabpage) the split was made against.
		target: SplitTarget,
	},
	/// Floating overlay.
	Float(FloatPlacement),
	/// External top-level window.
	External,
}

/// Fully resolved border: eight slots clockwise from the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
	/// One-cell glyphs; an empty string leaves that slot undrawn.
	pub chars: [String; 8],
	/// Highlight group per slot; `None` uses the default border highlight.
	pub highlights: [Option<String>; 8],
}

/// One `(text, highlight)` piece of border text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
	/// Text to draw.
	pub text: String,
	/// Highlight group, if any.
	pub highlight: Option<String>,
}

/// Title or footer drawn into the border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderText {
	/// Chunks in drawing order.
	pub chunks: SmallVec<[TextChunk; 1]>,
	/// Total display width in cells.
	pub width: usize,
	/// Horizontal alignment in the border line.
	pub align: TextAlign,
}

/// Canonical placement record of a window.
#[derive(Debug, Clone, PartialEq)]
pub struct WinConfig {
	/// Split, float or external placement.
	pub placement: Placement,
	/// Width in cells.
	pub width: u32,
	/// Height in cells.
	pub height: u32,
	/// Whether user navigation may focus the window.
	pub focusable: bool,
	/// Keep a NW/SW float fixed even when it would be truncated.
	pub fixed: bool,
	/// Hide the window without closing it.
	pub hide: bool,
	/// Suppress buffer events while opening.
	pub noautocmd: bool,
	/// Border, when present.
	pub border: Option<Border>,
	/// Title text; requires a border.
	pub title: Option<BorderText>,
	/// Footer text; requires a border.
	pub footer: Option<BorderText>,
	/// Display style.
	pub style: WinStyle,
}

impl Default for WinConfig {
	fn default() -> Self {
		Self {
			placement: Placement::Split {
				direction: SplitDirection::Left,
				target: SplitTarget::TopLevel,
			},
			width: 0,
			height: 0,
			focusable: true,
			fixed: false,
			hide: false,
			noautocmd: false,
			border: None,
			title: None,
			footer: None,
			style: WinStyle::Default,
		}
	}
}

impl WinConfig {
	/// Returns the derived placement kind.
	pub fn kind(&self) -> PlacementKind {
		match self.placement {
			Placement::Split { .. } => PlacementKind::Split,
			Placement::Float(_) => PlacementKind::Float,
			Placement::External => PlacementKind::External,
		}
	}

	/// Returns `true` for in-tree windows.
	pub fn is_split(&self) -> bool {
		matches!(self.placement, Placement::Split { .. })
	}

	/// Returns `true` for windows outside the frame tree (float or external).
	pub fn is_floating(&self) -> bool {
		!self.is_split()
	}

	/// Returns `true` for external windows.
	pub fn is_external(&self) -> bool {
		matches!(self.placement, Placement::External)
	}

	/// Float geometry, when the window is a float.
	pub fn float(&self) -> Option<&FloatPlacement> {
		match &self.placement {
			Placement::Float(float) => Some(float),
			_ => None,
		}
	}

	/// Split direction, when the window is in the tree.
	pub fn split_direction(&self) -> Option<SplitDirection> {
		match self.placement {
			Placement::Split { direction, .. } => Some(direction),
			_ => None,
		}
	}
}
