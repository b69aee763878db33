//! Frame tree of in-tree windows.
//!
//! Each tabpage owns one [`FrameTree`]: a binary tree whose leaves are split
//! windows and whose inner nodes divide their area along one [`Axis`]. Nodes
//! live in a generational arena and link to their parent by [`FrameId`], so
//! detaching a window is index rewiring and a stale id can never reach a
//! reused slot.
//!
//! Every node stores its own size. Sizes of two siblings always add up to the
//! extent of their parent along the parent's axis, and both siblings span the
//! parent's full extent along the other axis.

#[cfg(test)]
mod tests;

use rustc_hash::FxHashMap;
use xeno_win_config::{SplitDirection, WindowId};

use crate::error::StructuralError;

/// A generational frame identifier.
///
/// The generation is bumped whenever a slot is released, so ids held across
/// a structural edit are detected as stale instead of aliasing a new frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId {
	idx: u32,
	generation: u32,
}

impl FrameId {
	/// Returns the slot index.
	pub fn index(self) -> usize {
		self.idx as usize
	}
}

/// Axis along which a split frame divides its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
	/// Children side by side; widths add up.
	Horizontal,
	/// Children stacked; heights add up.
	Vertical,
}

impl Axis {
	/// Axis a window placed on `direction` of its target splits along.
	pub fn of(direction: SplitDirection) -> Self {
		if direction.is_vertical() {
			Axis::Horizontal
		} else {
			Axis::Vertical
		}
	}

	fn extent(self, width: u32, height: u32) -> u32 {
		match self {
			Axis::Horizontal => width,
			Axis::Vertical => height,
		}
	}

	fn with_extent(self, width: u32, height: u32, extent: u32) -> (u32, u32) {
		match self {
			Axis::Horizontal => (extent, height),
			Axis::Vertical => (width, extent),
		}
	}

	fn side(self, first: bool) -> SplitDirection {
		match (self, first) {
			(Axis::Horizontal, true) => SplitDirection::Left,
			(Axis::Horizontal, false) => SplitDirection::Right,
			(Axis::Vertical, true) => SplitDirection::Above,
			(Axis::Vertical, false) => SplitDirection::Below,
		}
	}
}

#[derive(Debug, Clone, Copy)]
enum FrameKind {
	Leaf(WindowId),
	Split { axis: Axis, first: FrameId, second: FrameId },
}

#[derive(Debug, Clone)]
struct Frame {
	kind: FrameKind,
	parent: Option<FrameId>,
	width: u32,
	height: u32,
}

struct FrameSlot {
	generation: u32,
	frame: Option<Frame>,
}

/// Arena-backed binary tree of split windows.
pub struct FrameTree {
	slots: Vec<FrameSlot>,
	free: Vec<u32>,
	leaves: FxHashMap<WindowId, FrameId>,
	root: FrameId,
	/// Incremented on every insert and detach, never on resize.
	revision: u64,
}

impl FrameTree {
	/// Creates a tree holding a single window that covers `width` x `height`.
	pub fn new(window: WindowId, width: u32, height: u32) -> Self {
		let root = FrameId { idx: 0, generation: 0 };
		let mut leaves = FxHashMap::default();
		leaves.insert(window, root);
		Self {
			slots: vec![FrameSlot {
				generation: 0,
				frame: Some(Frame {
					kind: FrameKind::Leaf(window),
					parent: None,
					width,
					height,
				}),
			}],
			free: Vec::new(),
			leaves,
			root,
			revision: 0,
		}
	}

	/// Returns the current structural revision.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	/// Returns the root frame.
	pub fn root(&self) -> FrameId {
		self.root
	}

	/// Returns `true` if `id` refers to a live frame.
	pub fn is_valid(&self, id: FrameId) -> bool {
		self.get(id).is_some()
	}

	/// Frame holding `window`, if it is in this tree.
	pub fn frame_of(&self, window: WindowId) -> Option<FrameId> {
		self.leaves.get(&window).copied()
	}

	/// Returns `true` if `window` is a leaf of this tree.
	pub fn contains(&self, window: WindowId) -> bool {
		self.leaves.contains_key(&window)
	}

	/// Number of windows in the tree.
	pub fn len(&self) -> usize {
		self.leaves.len()
	}

	/// Returns `true` if the tree has no windows. Only transiently possible.
	pub fn is_empty(&self) -> bool {
		self.leaves.is_empty()
	}

	/// Returns `true` if `window` is the only window of the tree.
	pub fn is_root(&self, window: WindowId) -> bool {
		self.frame_of(window) == Some(self.root)
	}

	/// Size of the whole tree.
	pub fn size(&self) -> (u32, u32) {
		let root = self.node(self.root);
		(root.width, root.height)
	}

	/// Size of the frame holding `window`.
	pub fn window_size(&self, window: WindowId) -> Option<(u32, u32)> {
		let frame = self.get(self.frame_of(window)?)?;
		Some((frame.width, frame.height))
	}

	/// Windows in layout order: left to right, top to bottom.
	pub fn windows(&self) -> Vec<WindowId> {
		let mut out = Vec::with_capacity(self.leaves.len());
		let mut stack = vec![self.root];
		while let Some(id) = stack.pop() {
			match self.node(id).kind {
				FrameKind::Leaf(window) => out.push(window),
				FrameKind::Split { first, second, .. } => {
					stack.push(second);
					stack.push(first);
				}
			}
		}
		out
	}

	/// Top-left window of the tree.
	pub fn first_window(&self) -> WindowId {
		let mut id = self.root;
		loop {
			match self.node(id).kind {
				FrameKind::Leaf(window) => return window,
				FrameKind::Split { first, .. } => id = first,
			}
		}
	}

	/// Side `window` occupies relative to its sibling.
	///
	/// The only window of a tree reports [`SplitDirection::Left`].
	pub fn split_dir(&self, window: WindowId) -> Option<SplitDirection> {
		let leaf = self.frame_of(window)?;
		let Some(parent) = self.node(leaf).parent else {
			return Some(SplitDirection::Left);
		};
		let FrameKind::Split { axis, first, .. } = self.node(parent).kind else {
			unreachable!("frame parent is always a split");
		};
		Some(axis.side(first == leaf))
	}

	/// Inserts `window` on `direction` of `anchor`, or at the outer edge of the
	/// whole tree when `anchor` is `None`.
	///
	/// The new window takes half of the target's extent along the split axis,
	/// or less when the target holds splits that need the room.
	pub fn split_insert(
		&mut self,
		anchor: Option<WindowId>,
		direction: SplitDirection,
		window: WindowId,
	) -> Result<(), StructuralError> {
		debug_assert!(!self.contains(window), "window {window} is already in the tree");
		let target = self.split_target(anchor, direction)?;
		let (width, height, parent) = {
			let frame = self.node(target);
			(frame.width, frame.height, frame.parent)
		};

		let axis = Axis::of(direction);
		let extent = axis.extent(width, height);
		let new_extent = (extent / 2).min(extent - self.min_extent(target, axis));
		let (new_w, new_h) = axis.with_extent(width, height, new_extent);
		let (old_w, old_h) = axis.with_extent(width, height, extent - new_extent);

		let leaf = self.alloc(Frame {
			kind: FrameKind::Leaf(window),
			parent: None,
			width: new_w,
			height: new_h,
		});
		self.set_size(target, old_w, old_h);

		let (first, second) = if direction.is_leading() { (leaf, target) } else { (target, leaf) };
		let split = self.alloc(Frame {
			kind: FrameKind::Split { axis, first, second },
			parent,
			width,
			height,
		});
		self.node_mut(leaf).parent = Some(split);
		self.node_mut(target).parent = Some(split);
		match parent {
			Some(parent) => self.replace_child(parent, target, split),
			None => self.root = split,
		}

		self.leaves.insert(window, leaf);
		self.bump_revision();
		tracing::trace!(?window, ?anchor, ?direction, "frame inserted");
		Ok(())
	}

	/// Checks that [`FrameTree::split_insert`] with the same target would succeed.
	pub fn can_split(&self, anchor: Option<WindowId>, direction: SplitDirection) -> Result<(), StructuralError> {
		self.split_target(anchor, direction).map(|_| ())
	}

	fn split_target(&self, anchor: Option<WindowId>, direction: SplitDirection) -> Result<FrameId, StructuralError> {
		let target = match anchor {
			Some(anchor) => self.frame_of(anchor).ok_or(StructuralError::InvalidAnchorWindow(anchor))?,
			None => self.root,
		};
		let axis = Axis::of(direction);
		let frame = self.node(target);
		if axis.extent(frame.width, frame.height) <= self.min_extent(target, axis) {
			return Err(StructuralError::NotEnoughRoom);
		}
		Ok(target)
	}

	/// Removes `window` from the tree; its sibling absorbs the freed area.
	///
	/// Returns the side the window occupied, or `None` when the window is not
	/// in the tree or is its only window. The tree is unchanged in that case.
	pub fn detach(&mut self, window: WindowId) -> Option<SplitDirection> {
		let leaf = self.frame_of(window)?;
		let parent = self.node(leaf).parent?;
		let (kind, width, height, grandparent) = {
			let frame = self.node(parent);
			(frame.kind, frame.width, frame.height, frame.parent)
		};
		let FrameKind::Split { axis, first, second } = kind else {
			unreachable!("frame parent is always a split");
		};
		let (sibling, side) = if first == leaf {
			(second, axis.side(true))
		} else {
			(first, axis.side(false))
		};

		self.set_size(sibling, width, height);
		self.node_mut(sibling).parent = grandparent;
		match grandparent {
			Some(grandparent) => self.replace_child(grandparent, parent, sibling),
			None => self.root = sibling,
		}
		self.release(leaf);
		self.release(parent);
		self.leaves.remove(&window);
		self.bump_revision();
		tracing::trace!(?window, ?side, "frame detached");
		Some(side)
	}

	/// Sets the width and/or height of `window`, taking the difference from
	/// the sibling of the nearest ancestor split along the matching axis.
	///
	/// Extents are clamped so that every window keeps at least one cell. A
	/// window spanning the whole tree along an axis cannot change that
	/// extent. Returns `true` if any size changed.
	pub fn resize(&mut self, window: WindowId, width: Option<u32>, height: Option<u32>) -> bool {
		let Some(leaf) = self.frame_of(window) else {
			return false;
		};
		let before = self.window_size(window);
		for (axis, value) in [(Axis::Horizontal, width), (Axis::Vertical, height)] {
			let Some(value) = value else { continue };
			let Some((split, child)) = self.ancestor_along(leaf, axis) else {
				continue;
			};
			let frame = self.node(split);
			let (total_w, total_h) = (frame.width, frame.height);
			let FrameKind::Split { first, second, .. } = frame.kind else {
				unreachable!("ancestor_along returns splits");
			};
			let total = axis.extent(total_w, total_h);
			let other = if child == first { second } else { first };
			let (min_child, min_other) = (self.min_extent(child, axis), self.min_extent(other, axis));
			if total < min_child + min_other {
				continue;
			}
			let value = value.clamp(min_child, total - min_other);
			let (cw, ch) = axis.with_extent(total_w, total_h, value);
			let (ow, oh) = axis.with_extent(total_w, total_h, total - value);
			self.set_size(child, cw, ch);
			self.set_size(other, ow, oh);
		}
		self.window_size(window) != before
	}

	/// Checks parent links, size sums and non-empty windows of the whole tree.
	pub(crate) fn is_consistent(&self) -> bool {
		if self.node(self.root).parent.is_some() {
			return false;
		}
		let mut leaves = 0;
		let mut stack = vec![self.root];
		while let Some(id) = stack.pop() {
			let Some(frame) = self.get(id) else {
				return false;
			};
			match frame.kind {
				FrameKind::Leaf(window) => {
					leaves += 1;
					if self.frame_of(window) != Some(id) || frame.width == 0 || frame.height == 0 {
						return false;
					}
				}
				FrameKind::Split { axis, first, second } => {
					let (Some(a), Some(b)) = (self.get(first), self.get(second)) else {
						return false;
					};
					let sums = axis.extent(a.width, a.height) + axis.extent(b.width, b.height)
						== axis.extent(frame.width, frame.height);
					let cross = match axis {
						Axis::Horizontal => a.height == frame.height && b.height == frame.height,
						Axis::Vertical => a.width == frame.width && b.width == frame.width,
					};
					if !sums || !cross || a.parent != Some(id) || b.parent != Some(id) {
						return false;
					}
					stack.push(first);
					stack.push(second);
				}
			}
		}
		leaves == self.leaves.len()
	}

	fn ancestor_along(&self, leaf: FrameId, axis: Axis) -> Option<(FrameId, FrameId)> {
		let mut child = leaf;
		while let Some(parent) = self.node(child).parent {
			if matches!(self.node(parent).kind, FrameKind::Split { axis: a, .. } if a == axis) {
				return Some((parent, child));
			}
			child = parent;
		}
		None
	}

	/// Smallest extent along `axis` that keeps every window of the subtree at
	/// one cell or more.
	fn min_extent(&self, id: FrameId, along: Axis) -> u32 {
		match self.node(id).kind {
			FrameKind::Leaf(_) => 1,
			FrameKind::Split { axis, first, second } if axis == along => {
				self.min_extent(first, along) + self.min_extent(second, along)
			}
			FrameKind::Split { first, second, .. } => self.min_extent(first, along).max(self.min_extent(second, along)),
		}
	}

	/// Resizes a subtree, distributing the change proportionally.
	///
	/// Callers never shrink a subtree below its [`FrameTree::min_extent`].
	fn set_size(&mut self, id: FrameId, width: u32, height: u32) {
		let (kind, old_w, old_h) = {
			let frame = self.node_mut(id);
			let old = (frame.kind, frame.width, frame.height);
			frame.width = width;
			frame.height = height;
			old
		};
		let FrameKind::Split { axis, first, second } = kind else {
			return;
		};
		let old_first = {
			let frame = self.node(first);
			axis.extent(frame.width, frame.height)
		};
		let old_total = axis.extent(old_w, old_h);
		let total = axis.extent(width, height);
		let first_extent = if old_total == 0 {
			total / 2
		} else {
			(u64::from(old_first) * u64::from(total) / u64::from(old_total)) as u32
		};
		let first_extent = first_extent
			.max(self.min_extent(first, axis))
			.min(total.saturating_sub(self.min_extent(second, axis)));
		let (fw, fh) = axis.with_extent(width, height, first_extent);
		let (sw, sh) = axis.with_extent(width, height, total - first_extent);
		self.set_size(first, fw, fh);
		self.set_size(second, sw, sh);
	}

	fn replace_child(&mut self, parent: FrameId, old: FrameId, new: FrameId) {
		if let FrameKind::Split { first, second, .. } = &mut self.node_mut(parent).kind {
			if *first == old {
				*first = new;
			} else if *second == old {
				*second = new;
			}
		}
	}

	fn alloc(&mut self, frame: Frame) -> FrameId {
		if let Some(idx) = self.free.pop() {
			let slot = &mut self.slots[idx as usize];
			slot.frame = Some(frame);
			return FrameId {
				idx,
				generation: slot.generation,
			};
		}
		let idx = self.slots.len() as u32;
		self.slots.push(FrameSlot {
			generation: 0,
			frame: Some(frame),
		});
		FrameId { idx, generation: 0 }
	}

	fn release(&mut self, id: FrameId) {
		let slot = &mut self.slots[id.index()];
		slot.frame = None;
		slot.generation = slot.generation.wrapping_add(1);
		self.free.push(id.idx);
	}

	fn bump_revision(&mut self) {
		self.revision = self.revision.wrapping_add(1);
	}

	fn get(&self, id: FrameId) -> Option<&Frame> {
		let slot = self.slots.get(id.index())?;
		if slot.generation != id.generation {
			return None;
		}
		slot.frame.as_ref()
	}

	fn node(&self, id: FrameId) -> &Frame {
		match self.get(id) {
			Some(frame) => frame,
			None => panic!("stale frame id {id:?} reached through a tree link"),
		}
	}

	fn node_mut(&mut self, id: FrameId) -> &mut Frame {
		match self.slots.get_mut(id.index()) {
			Some(FrameSlot {
				generation,
				frame: Some(frame),
			}) if *generation == id.generation => frame,
			_ => panic!("stale frame id {id:?} reached through a tree link"),
		}
	}
}
