//! Error types for window configuration requests.

use thiserror::Error;

/// Which piece of border text a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderTextKind {
	/// Text drawn in the top border.
	Title,
	/// Text drawn in the bottom border.
	Footer,
}

impl BorderTextKind {
	/// Request key holding the text.
	pub fn key(self) -> &'static str {
		match self {
			BorderTextKind::Title => "title",
			BorderTextKind::Footer => "footer",
		}
	}

	/// Request key holding the text alignment.
	pub fn pos_key(self) -> &'static str {
		match self {
			BorderTextKind::Title => "title_pos",
			BorderTextKind::Footer => "footer_pos",
		}
	}

	/// Highlight group applied to plain-string text.
	pub fn default_highlight(self) -> &'static str {
		match self {
			BorderTextKind::Title => "FloatTitle",
			BorderTextKind::Footer => "FloatFooter",
		}
	}
}

impl std::fmt::Display for BorderTextKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.key())
	}
}

/// Failures while resolving a border or its title/footer text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BorderError {
	/// The explicit glyph list is empty, longer than 8, or not a power of two.
	#[error("invalid number of border chars")]
	InvalidCharCount,
	/// A tuple cell is empty, has more than two entries, or is otherwise malformed.
	#[error("invalid border char")]
	InvalidChar,
	/// A glyph occupies more than one display cell.
	#[error("border chars must be one cell")]
	MultiCellChar,
	/// A corner is blank while both adjacent edges are drawn.
	#[error("corner between used edges must be specified")]
	MissingCorner,
	/// The style name is not one of the presets.
	#[error("invalid border style \"{0}\"")]
	UnknownStyle(String),
	/// Rich border text with no chunks.
	#[error("{0} cannot be an empty array")]
	EmptyText(BorderTextKind),
	/// A rich border text chunk is not `[text]` or `[text, highlight]`.
	#[error("invalid {0} chunk")]
	InvalidChunk(BorderTextKind),
	/// Alignment value other than left/center/right.
	#[error("invalid {}_pos value", .0.key())]
	InvalidAlign(BorderTextKind),
}

/// A request field that is malformed or incompatible with the target placement.
///
/// Validation is all-or-nothing: the first violated rule is reported and
/// nothing is applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// Unknown `relative` value.
	#[error("Invalid value of 'relative' key")]
	InvalidRelative,
	/// `relative` given without a position.
	#[error("'relative' requires 'row'/'col' or 'bufpos'")]
	RelativeRequiresPosition,
	/// A split-only key on a floating target.
	#[error("floating windows cannot have '{0}'")]
	FloatCannotHave(&'static str),
	/// Unknown `split` value.
	#[error("Invalid value of 'split' key")]
	InvalidSplit,
	/// Unknown `anchor` value.
	#[error("Invalid value of 'anchor' key")]
	InvalidAnchor,
	/// A float-only key on a split target, or without `relative`.
	#[error("non-float cannot have '{0}'")]
	NonFloatCannotHave(&'static str),
	/// `bufpos` is not a pair of integers.
	#[error("Invalid value of 'bufpos' key")]
	InvalidBufpos,
	/// `bufpos` together with a non-window anchor space.
	#[error("'bufpos' requires relative='win'")]
	BufposRequiresWindow,
	/// Non-positive `width`, `height` or `zindex`.
	#[error("'{0}' key must be a positive Integer")]
	NotPositive(&'static str),
	/// Missing size for a first-time float.
	#[error("Must specify '{0}'")]
	MissingSize(&'static str),
	/// `win` with a `relative` other than `win`.
	#[error("'win' key is only valid with relative='win' and relative=''")]
	WinRequiresWindowRelative,
	/// Both `relative` and `external` requested.
	#[error("Only one of 'relative' and 'external' must be used")]
	RelativeAndExternal,
	/// No attached UI can host external windows.
	#[error("UI doesn't support external windows")]
	ExternalUnsupported,
	/// Title or footer without a border.
	#[error("{0} requires border to be set")]
	TextRequiresBorder(BorderTextKind),
	/// Alignment without the text it aligns.
	#[error("{}_pos requires {} to be set", .0.key(), .0.key())]
	PosRequiresText(BorderTextKind),
	/// Border resolution failure.
	#[error(transparent)]
	Border(#[from] BorderError),
	/// Unknown `style` value.
	#[error("Invalid value of 'style' key")]
	InvalidStyle,
	/// `noautocmd` outside of opening a window.
	#[error("Invalid key: 'noautocmd'")]
	NoautocmdOnReconfigure,
}

/// Failures at the dictionary boundary, before validation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
	/// The request is not a dictionary.
	#[error("window config must be a dictionary, got {0}")]
	NotADictionary(&'static str),
	/// A key outside the recognized vocabulary.
	#[error("Invalid key: '{key}'{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownKey {
		/// The unrecognized key.
		key: String,
		/// A close match from the vocabulary, if any.
		suggestion: Option<String>,
	},
	/// A recognized key with a value of the wrong shape.
	#[error("invalid type for field '{field}': {reason}")]
	InvalidType {
		/// Field name.
		field: String,
		/// Decoder message.
		reason: String,
	},
}

/// Errors that can occur when loading layout options.
#[derive(Debug, Error)]
pub enum OptionsError {
	/// Error parsing TOML syntax or an unknown option.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}
