//! Request validation and normalization.
//!
//! [`validate`] merges a sparse [`WinConfigRequest`] into a baseline
//! [`WinConfig`] and returns the candidate config, or the first rule the
//! request violates. Nothing is applied on failure.
//!
//! Rules are checked in a fixed order, which decides the reported error when
//! a request breaks several rules at once:
//!
//! relative, vertical, split, anchor, row, col, bufpos, width, height, win,
//! external, focusable, zindex, border on a split, title, footer, border,
//! style, noautocmd.


use crate::border::{resolve_border, resolve_border_text};
use crate::config::{
	Anchor, BufPos, DEFAULT_ZINDEX, FloatPlacement, Placement, Relative, RelativeKind, SplitDirection, SplitTarget, WinConfig,
	WinStyle,
};
use crate::error::{BorderTextKind, ValidationError};
use crate::ids::WindowId;
use crate::options::{LayoutOptions, UiCapabilities};
use crate::request::WinConfigRequest;

/// Whether the request opens a window or reconfigures an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateMode {
	/// First configuration of a brand-new window.
	Open,
	/// Update of a window that already has a config.
	Reconfigure,
}

/// Everything validation needs besides the request itself.
#[derive(Debug, Clone, Copy)]
pub struct ValidateContext<'a> {
	/// Config the request is merged into.
	pub baseline: &'a WinConfig,
	/// Open or reconfigure.
	pub mode: ValidateMode,
	/// Window used when `win` is absent or `0`.
	pub current_window: WindowId,
	/// Side the window currently occupies in the frame tree, if any.
	pub current_split: Option<SplitDirection>,
	/// Global split tie-breaks.
	pub options: &'a LayoutOptions,
	/// Capabilities of the attached UIs.
	pub capabilities: UiCapabilities,
}

type Result<T> = std::result::Result<T, ValidationError>;

/// Validates `request` against `ctx` and returns the normalized config.
pub fn validate(request: &WinConfigRequest, ctx: &ValidateContext<'_>) -> Result<WinConfig> {
	let baseline = ctx.baseline;
	let new_win = ctx.mode == ValidateMode::Open;

	let relative = parse_relative(request)?;
	let has_relative = relative.is_some();
	let is_split = !has_relative
		&& request.external != Some(true)
		&& (request.split.is_some()
			|| request.vertical.is_some()
			|| new_win || (ctx.mode == ValidateMode::Reconfigure && baseline.is_split()));

	if request.vertical.is_some() && !is_split {
		return Err(ValidationError::FloatCannotHave("vertical"));
	}
	let direction = split_direction(request, ctx, is_split)?;

	let base_float = baseline.float();
	let mut anchor = base_float.map_or(Anchor::default(), |f| f.anchor);
	if let Some(name) = &request.anchor {
		anchor = Anchor::parse(name).ok_or(ValidationError::InvalidAnchor)?;
	}

	let mut row = base_float.map_or(0.0, |f| f.row);
	if let Some(value) = request.row {
		if !has_relative || is_split {
			return Err(ValidationError::NonFloatCannotHave("row"));
		}
		row = value;
	}

	let mut col = base_float.map_or(0.0, |f| f.col);
	if let Some(value) = request.col {
		if !has_relative || is_split {
			return Err(ValidationError::NonFloatCannotHave("col"));
		}
		col = value;
	}

	let mut bufpos = if has_relative { None } else { base_float.and_then(|f| f.bufpos) };
	if let Some(pos) = &request.bufpos {
		if !has_relative || is_split {
			return Err(ValidationError::NonFloatCannotHave("bufpos"));
		}
		let &[line, column] = pos.as_slice() else {
			return Err(ValidationError::InvalidBufpos);
		};
		if relative != Some(RelativeKind::Window) {
			return Err(ValidationError::BufposRequiresWindow);
		}
		bufpos = Some(BufPos { line, col: column });
		if request.row.is_none() {
			row = if anchor.is_south() { 0.0 } else { 1.0 };
		}
		if request.col.is_none() {
			col = 0.0;
		}
	}

	let requires_size = !is_split && (new_win || baseline.is_split());
	let width = size(request.width, "width", requires_size, baseline.width)?;
	let height = size(request.height, "height", requires_size, baseline.height)?;

	let mut anchor_window = ctx.current_window;
	let mut top_level = false;
	if relative == Some(RelativeKind::Window) || is_split {
		if let Some(handle) = request.win {
			match WindowId::from_handle(handle) {
				Some(id) => anchor_window = id,
				None => top_level = is_split && handle == -1,
			}
		}
	} else if has_relative && request.win.is_some() {
		return Err(ValidationError::WinRequiresWindowRelative);
	}

	let mut external = baseline.is_external() && !has_relative;
	if let Some(value) = request.external {
		external = value;
		if has_relative && external {
			return Err(ValidationError::RelativeAndExternal);
		}
		if external && !ctx.capabilities.external_windows {
			return Err(ValidationError::ExternalUnsupported);
		}
	}

	let focusable = request.focusable.unwrap_or(baseline.focusable);

	let mut zindex = base_float.map_or(DEFAULT_ZINDEX, |f| f.zindex);
	if let Some(value) = request.zindex {
		if is_split {
			return Err(ValidationError::NonFloatCannotHave("zindex"));
		}
		zindex = positive(value).ok_or(ValidationError::NotPositive("zindex"))?;
	}

	if request.border.is_some() && is_split {
		return Err(ValidationError::NonFloatCannotHave("border"));
	}

	let mut border = baseline.border.clone();
	let mut title = baseline.title.clone();
	let mut footer = baseline.footer.clone();
	for kind in [BorderTextKind::Title, BorderTextKind::Footer] {
		let (spec, pos, slot) = match kind {
			BorderTextKind::Title => (&request.title, &request.title_pos, &mut title),
			BorderTextKind::Footer => (&request.footer, &request.footer_pos, &mut footer),
		};
		match spec {
			Some(spec) => {
				if is_split {
					return Err(ValidationError::NonFloatCannotHave(kind.key()));
				}
				if request.border.is_none() && border.is_none() {
					return Err(ValidationError::TextRequiresBorder(kind));
				}
				*slot = resolve_border_text(kind, spec, pos.as_deref())?;
			}
			None if pos.is_some() => return Err(ValidationError::PosRequiresText(kind)),
			None => {}
		}
	}

	if let Some(spec) = &request.border {
		border = resolve_border(spec)?;
		if border.is_none() {
			title = None;
			footer = None;
		}
	}

	let style = match request.style.as_deref() {
		Some(name) => WinStyle::parse(name).ok_or(ValidationError::InvalidStyle)?,
		None => baseline.style,
	};

	let mut noautocmd = baseline.noautocmd;
	if let Some(value) = request.noautocmd {
		if !new_win {
			return Err(ValidationError::NoautocmdOnReconfigure);
		}
		noautocmd = value;
	}

	let placement = if is_split {
		border = None;
		title = None;
		footer = None;
		Placement::Split {
			direction,
			target: if top_level {
				SplitTarget::TopLevel
			} else {
				SplitTarget::Window(anchor_window)
			},
		}
	} else if external {
		Placement::External
	} else {
		let relative = match relative {
			Some(kind) => resolve_relative(kind, anchor_window),
			None => base_float.map_or(Relative::Editor, |f| f.relative),
		};
		if !matches!(relative, Relative::Window(_)) {
			bufpos = None;
		}
		Placement::Float(FloatPlacement {
			relative,
			anchor,
			row,
			col,
			bufpos,
			zindex,
		})
	};

	let config = WinConfig {
		placement,
		width,
		height,
		focusable,
		fixed: request.fixed.unwrap_or(baseline.fixed),
		hide: request.hide.unwrap_or(baseline.hide),
		noautocmd,
		border,
		title,
		footer,
		style,
	};
	tracing::trace!(mode = ?ctx.mode, from = ?baseline.kind(), to = ?config.kind(), "validated window config");
	Ok(config)
}

fn parse_relative(request: &WinConfigRequest) -> Result<Option<RelativeKind>> {
	let Some(name) = request.relative.as_deref().filter(|r| !r.is_empty()) else {
		return Ok(None);
	};
	let kind = RelativeKind::parse(name).ok_or(ValidationError::InvalidRelative)?;
	if !(request.row.is_some() && request.col.is_some()) && request.bufpos.is_none() {
		return Err(ValidationError::RelativeRequiresPosition);
	}
	Ok(Some(kind))
}

/// Resolves the split side.
///
/// `vertical` alone keeps the window on its current side when it already
/// sits on one of the two candidate sides, so repeated updates do not flip
/// it; otherwise the global tie-break decides.
fn split_direction(request: &WinConfigRequest, ctx: &ValidateContext<'_>, is_split: bool) -> Result<SplitDirection> {
	let current = ctx
		.current_split
		.or(ctx.baseline.split_direction())
		.unwrap_or(SplitDirection::Left);

	if let Some(name) = &request.split {
		if !is_split {
			return Err(ValidationError::FloatCannotHave("split"));
		}
		return SplitDirection::parse(name).ok_or(ValidationError::InvalidSplit);
	}
	if !is_split {
		return Ok(current);
	}

	let options = ctx.options;
	Ok(match (request.vertical, ctx.mode) {
		(Some(true), _) if ctx.current_split == Some(SplitDirection::Right) || options.split_right => SplitDirection::Right,
		(Some(true), _) => SplitDirection::Left,
		(Some(false), _) if ctx.current_split == Some(SplitDirection::Below) || options.split_below => SplitDirection::Below,
		(Some(false), _) => SplitDirection::Above,
		(None, ValidateMode::Open) if options.split_below => SplitDirection::Below,
		(None, ValidateMode::Open) => SplitDirection::Above,
		(None, ValidateMode::Reconfigure) => current,
	})
}

fn resolve_relative(kind: RelativeKind, window: WindowId) -> Relative {
	match kind {
		RelativeKind::Editor => Relative::Editor,
		RelativeKind::Window => Relative::Window(window),
		RelativeKind::Cursor => Relative::Cursor,
		RelativeKind::Mouse => Relative::Mouse,
	}
}

fn size(value: Option<i64>, key: &'static str, required: bool, inherited: u32) -> Result<u32> {
	match value {
		Some(value) => positive(value).ok_or(ValidationError::NotPositive(key)),
		None if required => Err(ValidationError::MissingSize(key)),
		None => Ok(inherited),
	}
}

fn positive(value: i64) -> Option<u32> {
	u32::try_from(value).ok().filter(|v| *v > 0)
}
