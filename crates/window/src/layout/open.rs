//! Opening windows.

use xeno_win_config::{BufferId, Placement, ValidateMode, WinConfig, WinConfigRequest, WinStyle, WindowId, validate};

use super::{Result, WindowLayout};
use crate::error::WindowError;
use crate::hooks::WindowHooks;
use crate::ui::RedrawRegion;
use crate::window::Window;

impl WindowLayout {
	/// Opens a window showing `buffer` (`BufferId::CURRENT` for the current
	/// buffer) placed as `request` describes.
	///
	/// With `enter`, the window becomes current. Hooks run after the window
	/// is in place and may close it; the handle is then reported through
	/// [`WindowError::ClosedImmediately`].
	pub fn open_win(
		&mut self,
		buffer: BufferId,
		enter: bool,
		request: &WinConfigRequest,
		hooks: &mut dyn WindowHooks,
	) -> Result<WindowId> {
		let explicit_buffer = !buffer.is_current();
		let buffer = if explicit_buffer { buffer } else { self.current_buffer() };
		let baseline = WinConfig::default();
		let config = validate(request, &self.validate_context(&baseline, ValidateMode::Open, None))?;

		let id = self.peek_window_id();
		let is_split = config.is_split();
		let noautocmd = config.noautocmd;
		let minimal = config.style == WinStyle::Minimal;

		match config.placement {
			Placement::Split { direction, target } => {
				let parent = self.split_parent(target)?;
				let tab = self.split_tabpage(parent);
				self.tab_mut(tab).frames.split_insert(parent, direction, id)?;
				self.commit_window_id();
				self.windows.insert(id, Window::new(id, buffer, tab, config));
				let width = request.width.map(|_| self.win(id).config.width);
				let height = request.height.map(|_| self.win(id).config.height);
				self.tab_mut(tab).frames.resize(id, width, height);
				self.sync_split_size(id);
				tracing::debug!(window = ?id, ?parent, ?direction, ?tab, "split window opened");
			}
			Placement::Float(_) | Placement::External => {
				self.check_float_anchor(&config)?;
				let tab = self.current_tab;
				self.commit_window_id();
				let external = config.is_external();
				self.windows.insert(id, Window::new(id, buffer, tab, config));
				self.tab_mut(tab).floats.push(id);
				tracing::debug!(window = ?id, external, ?tab, "floating window opened");
			}
		}
		self.notify(id, RedrawRegion::Layout);

		if enter {
			self.enter(id, hooks, noautocmd);
		}
		if self.is_valid_window(id) && (explicit_buffer || is_split) {
			if enter && !noautocmd {
				hooks.buf_win_enter(self, id);
			}
			if !noautocmd && self.is_valid_window(id) {
				hooks.win_new(self, id);
			}
		}
		if !self.is_valid_window(id) {
			tracing::warn!(window = ?id, "window closed while opening");
			return Err(WindowError::ClosedImmediately(id));
		}

		if minimal {
			self.win_mut(id).options.apply_minimal();
		}
		Ok(id)
	}

	/// Parses `request` from a dictionary value and opens a window.
	pub fn open_win_value(
		&mut self,
		buffer: BufferId,
		enter: bool,
		request: &serde_json::Value,
		hooks: &mut dyn WindowHooks,
	) -> Result<WindowId> {
		let request = WinConfigRequest::from_value(request)?;
		self.open_win(buffer, enter, &request, hooks)
	}
}
