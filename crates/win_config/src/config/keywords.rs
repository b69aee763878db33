//! Keyword enums shared by requests, configs and query results.

/// Anchor space keyword accepted by `relative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeKind {
	/// `"editor"`
	Editor,
	/// `"win"`
	Window,
	/// `"cursor"`
	Cursor,
	/// `"mouse"`
	Mouse,
}

impl RelativeKind {
	/// Parses a `relative` value, ignoring ASCII case.
	pub fn parse(s: &str) -> Option<Self> {
		[Self::Editor, Self::Window, Self::Cursor, Self::Mouse]
			.into_iter()
			.find(|kind| kind.name().eq_ignore_ascii_case(s))
	}

	/// Request keyword.
	pub fn name(self) -> &'static str {
		match self {
			Self::Editor => "editor",
			Self::Window => "win",
			Self::Cursor => "cursor",
			Self::Mouse => "mouse",
		}
	}
}

/// Corner of a float placed at its `(row, col)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
	/// `"NW"`
	#[default]
	NorthWest,
	/// `"NE"`
	NorthEast,
	/// `"SW"`
	SouthWest,
	/// `"SE"`
	SouthEast,
}

impl Anchor {
	/// Parses an `anchor` value, ignoring ASCII case.
	pub fn parse(s: &str) -> Option<Self> {
		[Self::NorthWest, Self::NorthEast, Self::SouthWest, Self::SouthEast]
			.into_iter()
			.find(|anchor| anchor.name().eq_ignore_ascii_case(s))
	}

	/// Request keyword.
	pub fn name(self) -> &'static str {
		match self {
			Self::NorthWest => "NW",
			Self::NorthEast => "NE",
			Self::SouthWest => "SW",
			Self::SouthEast => "SE",
		}
	}

	/// Returns `true` for the bottom corners.
	pub fn is_south(self) -> bool {
		matches!(self, Self::SouthWest | Self::SouthEast)
	}

	/// Returns `true` for the right corners.
	pub fn is_east(self) -> bool {
		matches!(self, Self::NorthEast | Self::SouthEast)
	}
}

/// Side of its target an in-tree window occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitDirection {
	/// `"above"`
	Above,
	/// `"below"`
	Below,
	/// `"left"`
	Left,
	/// `"right"`
	Right,
}

impl SplitDirection {
	/// Parses a `split` value, ignoring ASCII case.
	pub fn parse(s: &str) -> Option<Self> {
		[Self::Left, Self::Right, Self::Above, Self::Below]
			.into_iter()
			.find(|dir| dir.name().eq_ignore_ascii_case(s))
	}

	/// Request keyword.
	pub fn name(self) -> &'static str {
		match self {
			Self::Above => "above",
			Self::Below => "below",
			Self::Left => "left",
			Self::Right => "right",
		}
	}

	/// Returns `true` when the window sits beside its target (left/right).
	pub fn is_vertical(self) -> bool {
		matches!(self, Self::Left | Self::Right)
	}

	/// Returns `true` when the window comes first in reading order (above/left).
	pub fn is_leading(self) -> bool {
		matches!(self, Self::Above | Self::Left)
	}
}

/// Display style of a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WinStyle {
	/// Options untouched.
	#[default]
	Default,
	/// Most decorating window options disabled.
	Minimal,
}

impl WinStyle {
	/// Parses a `style` value. The empty string resets to the default style.
	pub fn parse(s: &str) -> Option<Self> {
		if s.is_empty() {
			Some(Self::Default)
		} else if s.eq_ignore_ascii_case("minimal") {
			Some(Self::Minimal)
		} else {
			None
		}
	}
}

/// Horizontal alignment of border text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
	/// `"left"`
	#[default]
	Left,
	/// `"center"`
	Center,
	/// `"right"`
	Right,
}

impl TextAlign {
	/// Parses an alignment. Matching is exact.
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"left" => Some(Self::Left),
			"center" => Some(Self::Center),
			"right" => Some(Self::Right),
			_ => None,
		}
	}

	/// Request keyword.
	pub fn name(self) -> &'static str {
		match self {
			Self::Left => "left",
			Self::Center => "center",
			Self::Right => "right",
		}
	}
}
