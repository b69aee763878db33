use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

const W1: WindowId = WindowId(1);
const W2: WindowId = WindowId(2);
const W3: WindowId = WindowId(3);

fn stacked() -> FrameTree {
	let mut tree = FrameTree::new(W1, 80, 24);
	tree.split_insert(Some(W1), SplitDirection::Below, W2).unwrap();
	tree
}

#[test]
fn single_window_tree() {
	let tree = FrameTree::new(W1, 80, 24);
	assert_eq!(tree.windows(), vec![W1]);
	assert!(tree.is_root(W1));
	assert_eq!(tree.split_dir(W1), Some(SplitDirection::Left));
	assert_eq!(tree.window_size(W1), Some((80, 24)));
	assert_eq!(tree.revision(), 0);
}

#[test]
fn split_halves_the_target() {
	let tree = stacked();
	assert_eq!(tree.windows(), vec![W1, W2]);
	assert_eq!(tree.window_size(W1), Some((80, 12)));
	assert_eq!(tree.window_size(W2), Some((80, 12)));
	assert_eq!(tree.split_dir(W1), Some(SplitDirection::Above));
	assert_eq!(tree.split_dir(W2), Some(SplitDirection::Below));
	assert_eq!(tree.revision(), 1);
	assert!(tree.is_consistent());
}

#[test]
fn leading_direction_inserts_first() {
	let mut tree = stacked();
	tree.split_insert(Some(W1), SplitDirection::Left, W3).unwrap();
	assert_eq!(tree.windows(), vec![W3, W1, W2]);
	assert_eq!(tree.window_size(W3), Some((40, 12)));
	assert_eq!(tree.window_size(W1), Some((40, 12)));
	assert_eq!(tree.first_window(), W3);
	assert!(tree.is_consistent());
}

#[test]
fn top_level_split_spans_the_tree() {
	let mut tree = FrameTree::new(W1, 80, 24);
	tree.split_insert(Some(W1), SplitDirection::Right, W2).unwrap();
	tree.split_insert(None, SplitDirection::Below, W3).unwrap();

	assert_eq!(tree.windows(), vec![W1, W2, W3]);
	assert_eq!(tree.window_size(W3), Some((80, 12)));
	assert_eq!(tree.window_size(W1), Some((40, 12)));
	assert_eq!(tree.window_size(W2), Some((40, 12)));
	assert_eq!(tree.split_dir(W3), Some(SplitDirection::Below));
	assert!(tree.is_consistent());
}

#[test]
fn detach_returns_side_and_restores_sibling() {
	let mut tree = stacked();
	tree.split_insert(Some(W1), SplitDirection::Left, W3).unwrap();

	assert_eq!(tree.detach(W3), Some(SplitDirection::Left));
	assert_eq!(tree.windows(), vec![W1, W2]);
	assert_eq!(tree.window_size(W1), Some((80, 12)));
	assert_eq!(tree.revision(), 3);

	assert_eq!(tree.detach(W2), Some(SplitDirection::Below));
	assert!(tree.is_root(W1));
	assert_eq!(tree.window_size(W1), Some((80, 24)));
	assert!(tree.is_consistent());
}

#[test]
fn detach_only_window_is_refused() {
	let mut tree = FrameTree::new(W1, 80, 24);
	assert_eq!(tree.detach(W1), None);
	assert_eq!(tree.detach(W2), None);
	assert_eq!(tree.windows(), vec![W1]);
	assert_eq!(tree.revision(), 0);
}

#[test]
fn stale_frame_ids_are_rejected() {
	let mut tree = stacked();
	let id = tree.frame_of(W2).unwrap();
	assert!(tree.is_valid(id));

	tree.detach(W2);
	assert!(!tree.is_valid(id));

	tree.split_insert(Some(W1), SplitDirection::Right, W3).unwrap();
	assert!(!tree.is_valid(id));
	assert!(tree.is_valid(tree.frame_of(W3).unwrap()));
}

#[test]
fn resize_moves_the_separator_only() {
	let mut tree = stacked();
	let revision = tree.revision();

	assert!(tree.resize(W1, None, Some(5)));
	assert_eq!(tree.window_size(W1), Some((80, 5)));
	assert_eq!(tree.window_size(W2), Some((80, 19)));
	assert_eq!(tree.revision(), revision);

	assert!(!tree.resize(W1, Some(10), None));
	assert_eq!(tree.window_size(W1), Some((80, 5)));

	tree.resize(W2, None, Some(100));
	assert_eq!(tree.window_size(W2), Some((80, 23)));
	assert_eq!(tree.window_size(W1), Some((80, 1)));
	assert!(tree.is_consistent());
}

#[test]
fn resize_reaches_through_cross_axis_splits() {
	let mut tree = stacked();
	tree.split_insert(Some(W2), SplitDirection::Right, W3).unwrap();

	assert!(tree.resize(W3, None, Some(20)));
	assert_eq!(tree.window_size(W3), Some((40, 20)));
	assert_eq!(tree.window_size(W2), Some((40, 20)));
	assert_eq!(tree.window_size(W1), Some((80, 4)));
	assert!(tree.is_consistent());
}

#[test]
fn resize_keeps_nested_windows_visible() {
	let mut tree = FrameTree::new(W1, 80, 24);
	tree.split_insert(Some(W1), SplitDirection::Right, W2).unwrap();
	tree.split_insert(Some(W2), SplitDirection::Right, W3).unwrap();

	assert!(tree.resize(W1, Some(78), None));
	assert!(!tree.resize(W1, Some(79), None));
	assert_eq!(tree.window_size(W1), Some((78, 24)));
	assert_eq!(tree.window_size(W2), Some((1, 24)));
	assert_eq!(tree.window_size(W3), Some((1, 24)));
	assert!(tree.is_consistent());

	assert_eq!(
		tree.split_insert(Some(W2), SplitDirection::Left, WindowId(4)),
		Err(StructuralError::NotEnoughRoom)
	);
	tree.split_insert(None, SplitDirection::Left, WindowId(4)).unwrap();
	assert_eq!(tree.window_size(WindowId(4)), Some((40, 24)));
	assert!(tree.is_consistent());
}

#[test]
fn split_errors() {
	let mut tree = FrameTree::new(W1, 1, 1);
	assert_eq!(
		tree.split_insert(Some(W1), SplitDirection::Right, W2),
		Err(StructuralError::NotEnoughRoom)
	);
	assert_eq!(
		tree.split_insert(Some(W3), SplitDirection::Right, W2),
		Err(StructuralError::InvalidAnchorWindow(W3))
	);
	assert_eq!(tree.revision(), 0);
}

#[derive(Debug, Clone)]
enum Op {
	Insert { pick: usize, top_level: bool, direction: u8 },
	Detach { pick: usize },
	Resize { pick: usize, width: u32, height: u32 },
}

fn op() -> impl Strategy<Value = Op> {
	prop_oneof![
		(any::<usize>(), any::<bool>(), 0u8..4).prop_map(|(pick, top_level, direction)| Op::Insert {
			pick,
			top_level,
			direction
		}),
		any::<usize>().prop_map(|pick| Op::Detach { pick }),
		(any::<usize>(), 0u32..100, 0u32..30).prop_map(|(pick, width, height)| Op::Resize { pick, width, height }),
	]
}

proptest! {
	#[test]
	fn edits_keep_tree_consistent(ops in proptest::collection::vec(op(), 1..40)) {
		let mut tree = FrameTree::new(W1, 80, 24);
		let mut next = 2;
		for op in ops {
			let windows = tree.windows();
			match op {
				Op::Insert { pick, top_level, direction } => {
					let anchor = (!top_level).then(|| windows[pick % windows.len()]);
					let direction = [
						SplitDirection::Above,
						SplitDirection::Below,
						SplitDirection::Left,
						SplitDirection::Right,
					][direction as usize];
					if tree.split_insert(anchor, direction, WindowId(next)).is_ok() {
						next += 1;
					}
				}
				Op::Detach { pick } => {
					tree.detach(windows[pick % windows.len()]);
				}
				Op::Resize { pick, width, height } => {
					tree.resize(windows[pick % windows.len()], Some(width), Some(height));
				}
			}
			prop_assert!(tree.is_consistent());
			prop_assert_eq!(tree.size(), (80, 24));
			prop_assert_eq!(tree.windows().len(), tree.len());
		}
	}
}
