use xeno_win_config::{Placement, WinConfigRequest, WindowId, serialize};

use super::{Result, WindowLayout};

impl WindowLayout {
	/// Returns the placement of `window` in request vocabulary.
	///
	/// Split windows report their live side and size from the frame tree.
	pub fn get_config(&self, window: WindowId) -> Result<WinConfigRequest> {
		let win = self.resolve_window(window)?;
		let w = self.win(win);
		let mut config = w.config.clone();
		if let Placement::Split { direction, .. } = &mut config.placement {
			let frames = &self.tab(w.tabpage).frames;
			if let Some(side) = frames.split_dir(win) {
				*direction = side;
			}
			if let Some((width, height)) = frames.window_size(win) {
				config.width = width;
				config.height = height;
			}
		}
		Ok(serialize(&config))
	}
}
