//! The sparse request vocabulary.
//!
//! A [`WinConfigRequest`] carries only what the caller supplied: every field
//! is optional and absence means "keep what the window has". The same type
//! is produced by query so that a query result can be fed back in.

mod parse;

use serde::{Deserialize, Serialize};

pub use self::parse::suggest_key;
use crate::border::{BorderSpec, BorderTextSpec};

/// Every key a request may carry, in documentation order.
pub const REQUEST_KEYS: &[&str] = &[
	"relative",
	"win",
	"anchor",
	"width",
	"height",
	"bufpos",
	"row",
	"col",
	"focusable",
	"external",
	"zindex",
	"style",
	"border",
	"title",
	"title_pos",
	"footer",
	"footer_pos",
	"noautocmd",
	"fixed",
	"hide",
	"vertical",
	"split",
];

/// A partially specified window configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WinConfigRequest {
	/// `"editor"`, `"win"`, `"cursor"`, `"mouse"`, or `""` for a split.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub relative: Option<String>,
	/// Window to split or float relative to; `0` is current, `-1` the tabpage.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub win: Option<i64>,
	/// `"NW"`, `"NE"`, `"SW"` or `"SE"`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub anchor: Option<String>,
	/// Width in cells.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub width: Option<i64>,
	/// Height in cells.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub height: Option<i64>,
	/// `[line, column]`, zero-indexed.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bufpos: Option<Vec<i64>>,
	/// Row offset, may be fractional.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub row: Option<f64>,
	/// Column offset, may be fractional.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub col: Option<f64>,
	/// Allow focus by user navigation.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub focusable: Option<bool>,
	/// Display as an external top-level window.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub external: Option<bool>,
	/// Stacking order.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub zindex: Option<i64>,
	/// `"minimal"` or `""`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub style: Option<String>,
	/// Border preset or explicit cells.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub border: Option<BorderSpec>,
	/// Title in the top border.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<BorderTextSpec>,
	/// `"left"`, `"center"` or `"right"`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title_pos: Option<String>,
	/// Footer in the bottom border.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub footer: Option<BorderTextSpec>,
	/// `"left"`, `"center"` or `"right"`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub footer_pos: Option<String>,
	/// Suppress buffer events while opening.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub noautocmd: Option<bool>,
	/// Keep a NW/SW float in place when truncated.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fixed: Option<bool>,
	/// Hide the window.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hide: Option<bool>,
	/// Split vertically.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub vertical: Option<bool>,
	/// `"left"`, `"right"`, `"above"` or `"below"`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub split: Option<String>,
}

impl WinConfigRequest {
	/// Renders the request as a JSON object holding only the present keys.
	pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
		serde_json::to_value(self)
	}

	/// Returns `true` when the request carries an explicit `relative`.
	pub fn has_relative(&self) -> bool {
		self.relative.as_deref().is_some_and(|r| !r.is_empty())
	}
}
