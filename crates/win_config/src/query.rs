//! Projection of a [`WinConfig`] back into request vocabulary.
//!
//! The result can be passed to open or reconfigure again. Borders come back
//! as their eight resolved cells; preset names are not recoverable.

use crate::border::{border_text_to_spec, border_to_spec};
use crate::config::{Placement, Relative, WinConfig};
use crate::request::WinConfigRequest;

/// Projects `config` into a request describing the same placement.
///
/// For split windows `width`/`height`/`direction` should reflect the live
/// frame tree; callers refresh them before projecting.
pub fn serialize(config: &WinConfig) -> WinConfigRequest {
	let mut out = WinConfigRequest {
		focusable: Some(config.focusable),
		external: Some(config.is_external()),
		hide: Some(config.hide),
		width: Some(i64::from(config.width)),
		height: Some(i64::from(config.height)),
		relative: Some(String::new()),
		..WinConfigRequest::default()
	};

	match &config.placement {
		Placement::Split { direction, .. } => {
			out.split = Some(direction.name().to_string());
			return out;
		}
		Placement::Float(float) => {
			if let Relative::Window(win) = float.relative {
				out.win = Some(win.handle());
				out.bufpos = float.bufpos.map(|pos| vec![pos.line, pos.col]);
			}
			out.relative = Some(float.relative.kind().name().to_string());
			out.anchor = Some(float.anchor.name().to_string());
			out.row = Some(float.row);
			out.col = Some(float.col);
			out.zindex = Some(i64::from(float.zindex));
		}
		Placement::External => {}
	}

	if let Some(border) = &config.border {
		out.border = Some(border_to_spec(border));
		if let Some(title) = &config.title {
			out.title = Some(border_text_to_spec(title));
			out.title_pos = Some(title.align.name().to_string());
		}
		if let Some(footer) = &config.footer {
			out.footer = Some(border_text_to_spec(footer));
			out.footer_pos = Some(footer.align.name().to_string());
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;
	use serde_json::json;

	use super::*;
	use crate::border::BorderSpec;
	use crate::ids::WindowId;
	use crate::options::{LayoutOptions, UiCapabilities};
	use crate::validate::{ValidateContext, ValidateMode, validate};

	fn open(request: &WinConfigRequest) -> WinConfig {
		let options = LayoutOptions::default();
		let baseline = WinConfig::default();
		let ctx = ValidateContext {
			baseline: &baseline,
			mode: ValidateMode::Open,
			current_window: WindowId(1000),
			current_split: None,
			options: &options,
			capabilities: UiCapabilities { external_windows: true },
		};
		validate(request, &ctx).unwrap()
	}

	#[test]
	fn split_emits_size_direction_and_empty_relative() {
		let config = open(&WinConfigRequest {
			split: Some("right".into()),
			..WinConfigRequest::default()
		});
		let value = serialize(&config).to_value().unwrap();
		assert_eq!(
			value,
			json!({
				"relative": "",
				"width": 0,
				"height": 0,
				"split": "right",
				"focusable": true,
				"external": false,
				"hide": false,
			})
		);
	}

	#[test]
	fn window_relative_float_emits_win_and_bufpos() {
		let config = open(&WinConfigRequest {
			relative: Some("win".into()),
			win: Some(1001),
			bufpos: Some(vec![10, 2]),
			width: Some(5),
			height: Some(2),
			..WinConfigRequest::default()
		});
		let out = serialize(&config);
		assert_eq!(out.win, Some(1001));
		assert_eq!(out.bufpos, Some(vec![10, 2]));
		assert_eq!(out.row, Some(1.0));
		assert_eq!(out.relative.as_deref(), Some("win"));
	}

	#[test]
	fn editor_float_omits_win() {
		let config = open(&WinConfigRequest {
			relative: Some("editor".into()),
			row: Some(0.0),
			col: Some(0.0),
			width: Some(10),
			height: Some(3),
			border: Some(BorderSpec::Named("single".into())),
			title: Some("T".into()),
			..WinConfigRequest::default()
		});
		let out = serialize(&config);
		assert_eq!(out.win, None);
		assert_eq!(out.bufpos, None);
		assert_eq!(out.zindex, Some(50));
		assert_eq!(out.title_pos.as_deref(), Some("left"));
		let Some(BorderSpec::Cells(cells)) = out.border else {
			panic!("border must be projected as cells");
		};
		assert_eq!(cells.len(), 8);
	}

	#[test]
	fn external_emits_no_position() {
		let config = open(&WinConfigRequest {
			external: Some(true),
			width: Some(30),
			height: Some(10),
			..WinConfigRequest::default()
		});
		let out = serialize(&config);
		assert_eq!(out.relative.as_deref(), Some(""));
		assert_eq!(out.external, Some(true));
		assert_eq!(out.row, None);
		assert_eq!(out.zindex, None);
	}

	fn float_request() -> impl Strategy<Value = WinConfigRequest> {
		(
			prop::sample::select(vec!["editor", "win", "cursor", "mouse"]),
			prop::sample::select(vec!["NW", "NE", "SW", "SE"]),
			-50i32..50,
			-50i32..50,
			1i64..200,
			1i64..60,
			1i64..300,
			prop::option::of(prop::sample::select(vec!["single", "double", "rounded", "solid", "shadow"])),
			prop::option::of("[a-z]{1,6}"),
		)
			.prop_map(|(relative, anchor, row, col, width, height, zindex, border, title)| WinConfigRequest {
				relative: Some(relative.to_string()),
				anchor: Some(anchor.to_string()),
				row: Some(f64::from(row) / 2.0),
				col: Some(f64::from(col) / 2.0),
				width: Some(width),
				height: Some(height),
				zindex: Some(zindex),
				title: border.and(title.map(|t| t.as_str().into())),
				border: border.map(|b| BorderSpec::Named(b.to_string())),
				..WinConfigRequest::default()
			})
	}

	proptest! {
		#[test]
		fn float_round_trip_is_stable(request in float_request()) {
			let config = open(&request);
			let again = open(&serialize(&config));
			prop_assert_eq!(again, config);
		}
	}
}
