use serde_json::json;
use xeno_win_config::{BufferId, LayoutOptions, TabpageId, WinConfigRequest, WindowId};

use crate::error::WindowError;
use crate::frame::FrameTree;
use crate::hooks::NoHooks;
use crate::layout::{FIRST_WINDOW, WindowLayout};

const MAIN: WindowId = WindowId(FIRST_WINDOW);

fn layout() -> WindowLayout {
	WindowLayout::new(LayoutOptions::default(), BufferId(1))
}

fn req(value: serde_json::Value) -> WinConfigRequest {
	WinConfigRequest::from_value(&value).unwrap()
}

fn assert_placement_matches_membership(layout: &WindowLayout) {
	for id in layout.list_tabpages() {
		let tab = layout.tab(id);
		for win in tab.frames.windows() {
			let window = layout.win(win);
			assert!(window.config.is_split(), "{win} is in the tree but not a split");
			assert_eq!(window.tabpage, id);
		}
		for win in &tab.floats {
			let window = layout.win(*win);
			assert!(window.is_floating(), "{win} is a float entry but a split");
			assert!(!tab.frames.contains(*win));
		}
		assert!(tab.frames.is_consistent());
	}
}

/// Must reject a stale `FrameId` after the frame it named was released.
///
/// * Enforced in: `FrameTree::get`, `FrameTree::release`
/// * Failure symptom: A detached window's id resolves to whichever frame reused its slot.
#[cfg_attr(test, test)]
pub(crate) fn test_frame_generation_rejects_stale() {
	let mut tree = FrameTree::new(WindowId(1), 80, 24);
	tree.split_insert(Some(WindowId(1)), xeno_win_config::SplitDirection::Below, WindowId(2))
		.unwrap();
	let stale = tree.frame_of(WindowId(2)).unwrap();
	tree.detach(WindowId(2));
	tree.split_insert(Some(WindowId(1)), xeno_win_config::SplitDirection::Right, WindowId(3))
		.unwrap();

	assert!(!tree.is_valid(stale));
}

/// Must keep every window in exactly one of the frame tree or the float list,
/// matching its placement kind.
///
/// * Enforced in: `WindowLayout::set_config`, `WindowLayout::open_win`, `WindowLayout::close_window`
/// * Failure symptom: A float is drawn twice, or a split window has no screen area.
#[cfg_attr(test, test)]
pub(crate) fn test_placement_matches_membership() {
	let mut layout = layout();
	let split = layout
		.open_win(BufferId(2), false, &req(json!({ "split": "below" })), &mut NoHooks)
		.unwrap();
	assert_placement_matches_membership(&layout);

	layout
		.set_config(split, &req(json!({ "relative": "editor", "row": 0, "col": 0, "width": 5, "height": 5 })))
		.unwrap();
	assert_placement_matches_membership(&layout);

	layout.set_config(split, &req(json!({ "split": "left" }))).unwrap();
	assert_placement_matches_membership(&layout);

	layout.close_window(split).unwrap();
	assert_placement_matches_membership(&layout);
}

/// Must leave the layout untouched when a request is rejected.
///
/// * Enforced in: `validate`, `WindowLayout::set_config`
/// * Failure symptom: A rejected request half-applies, e.g. a border without its title.
#[cfg_attr(test, test)]
pub(crate) fn test_rejected_request_applies_nothing() {
	let mut layout = layout();
	let float = layout
		.open_win(
			BufferId(2),
			false,
			&req(json!({ "relative": "editor", "row": 0, "col": 0, "width": 5, "height": 5 })),
			&mut NoHooks,
		)
		.unwrap();
	let before = layout.win(float).config.clone();
	let revision = layout.tab(TabpageId(1)).frames.revision();

	let err = layout
		.set_config(float, &req(json!({ "width": 40, "title": "T" })))
		.unwrap_err();
	assert!(matches!(err, WindowError::Validation(_)));
	assert_eq!(layout.win(float).config, before);

	let err = layout
		.set_config(float, &req(json!({ "split": "left", "win": float.handle() })))
		.unwrap_err();
	assert!(matches!(err, WindowError::Structural(_)));
	assert_eq!(layout.win(float).config, before);
	assert_eq!(layout.tab(TabpageId(1)).floats, vec![float]);
	assert_eq!(layout.tab(TabpageId(1)).frames.revision(), revision);
}

/// Must bump the frame tree revision on insert and detach only.
///
/// * Enforced in: `FrameTree::split_insert`, `FrameTree::detach`, `FrameTree::resize`
/// * Failure symptom: Size-only updates invalidate layout caches keyed on the revision.
#[cfg_attr(test, test)]
pub(crate) fn test_resize_keeps_structure_revision() {
	let mut layout = layout();
	let split = layout
		.open_win(BufferId(2), false, &req(json!({ "split": "right" })), &mut NoHooks)
		.unwrap();
	let revision = layout.tab(TabpageId(1)).frames.revision();

	layout.set_config(split, &req(json!({ "width": 20 }))).unwrap();
	layout.set_config(split, &req(json!({ "width": 30, "split": "right" }))).unwrap();
	assert_eq!(layout.tab(TabpageId(1)).frames.revision(), revision);
	assert_eq!(layout.tab(TabpageId(1)).frames.window_size(split), Some((30, 24)));
}

/// Must point every tabpage's current window at a live window after a close.
///
/// * Enforced in: `WindowLayout::close_window`, `WindowLayout::repair_current_windows`
/// * Failure symptom: `tabpage_get_win` panics on a closed window.
#[cfg_attr(test, test)]
pub(crate) fn test_curwin_survives_close() {
	let mut layout = layout();
	let split = layout
		.open_win(BufferId(2), true, &req(json!({ "split": "below" })), &mut NoHooks)
		.unwrap();
	layout.new_tabpage(BufferId(3));

	layout.close_window(split).unwrap();
	assert_eq!(layout.tabpage_get_win(TabpageId(1)), Ok(MAIN));
	for id in layout.list_tabpages() {
		assert!(layout.is_valid_window(layout.tab(id).curwin));
	}
}
