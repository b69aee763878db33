//! Window placement requests: parsing, validation, normalization and projection.
//!
//! A window is either a split (a leaf of its tabpage's frame tree), a float
//! (an overlay positioned relative to the editor, another window, the cursor
//! or the mouse) or an external window hosted by the UI. Requests arrive as
//! sparse dictionaries ([`WinConfigRequest`]); [`validate`] merges them into a
//! baseline [`WinConfig`] and [`serialize`] projects a config back.

/// Border presets, explicit border cells and title/footer text.
pub mod border;
/// The canonical window configuration record and its keywords.
pub mod config;
/// Error types.
pub mod error;
/// Window, tabpage and buffer handles.
pub mod ids;
/// Global layout options and UI capabilities consulted by validation.
pub mod options;
/// Config to request projection.
pub mod query;
/// Sparse request dictionary.
pub mod request;
/// Request validation.
pub mod validate;

pub use border::{BorderPreset, BorderSpec, BorderTextSpec};
pub use config::{
	Anchor, Border, BorderText, BufPos, DEFAULT_ZINDEX, FloatPlacement, Placement, PlacementKind, Relative, RelativeKind,
	SplitDirection, SplitTarget, TextAlign, TextChunk, WinConfig, WinStyle,
};
pub use error::{BorderError, BorderTextKind, OptionsError, RequestError, ValidationError};
pub use ids::{BufferId, TabpageId, WindowId};
pub use options::{LayoutOptions, UiCapabilities};
pub use query::serialize;
pub use request::{REQUEST_KEYS, WinConfigRequest};
pub use validate::{ValidateContext, ValidateMode, validate};
