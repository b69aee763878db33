//! Global layout options and UI capabilities consulted during validation.

use serde::Deserialize;

use crate::error::OptionsError;

/// Global options that influence split placement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LayoutOptions {
	/// New vertical splits go to the right of their target.
	pub split_right: bool,
	/// New horizontal splits go below their target.
	pub split_below: bool,
	/// Width of the editor grid for new tabpages.
	pub columns: u16,
	/// Height of the editor grid for new tabpages.
	pub lines: u16,
}

impl Default for LayoutOptions {
	fn default() -> Self {
		Self {
			split_right: false,
			split_below: false,
			columns: 80,
			lines: 24,
		}
	}
}

impl LayoutOptions {
	/// Parses options from TOML. Missing keys keep their defaults.
	pub fn from_toml_str(input: &str) -> Result<Self, OptionsError> {
		Ok(toml::from_str(input)?)
	}
}

/// What the attached UIs can display.
///
/// Passed explicitly into validation; never looked up globally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiCapabilities {
	/// Every attached UI can host external top-level windows.
	pub external_windows: bool,
}
