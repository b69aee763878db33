//! Window records and their display options.

use xeno_win_config::{BufferId, TabpageId, WinConfig, WindowId};

/// Display options of a single window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
	/// Line numbers.
	pub number: bool,
	/// Relative line numbers.
	pub relativenumber: bool,
	/// Highlight the cursor line.
	pub cursorline: bool,
	/// Highlight the cursor column.
	pub cursorcolumn: bool,
	/// Fold column width, as the option string.
	pub foldcolumn: String,
	/// Spell checking.
	pub spell: bool,
	/// Show invisible characters.
	pub list: bool,
	/// Sign column mode.
	pub signcolumn: String,
	/// Highlighted columns.
	pub colorcolumn: String,
	/// Status column format.
	pub statuscolumn: String,
	/// Filler drawn after the last buffer line.
	pub fill_eob: char,
}

impl Default for WindowOptions {
	fn default() -> Self {
		Self {
			number: false,
			relativenumber: false,
			cursorline: false,
			cursorcolumn: false,
			foldcolumn: "0".to_string(),
			spell: false,
			list: false,
			signcolumn: "auto".to_string(),
			colorcolumn: String::new(),
			statuscolumn: String::new(),
			fill_eob: '~',
		}
	}
}

impl WindowOptions {
	/// Disables every decoration a minimal-style window must not show.
	///
	/// Idempotent. `signcolumn` keeps a value that is already an `auto`
	/// variant and otherwise becomes `auto`.
	pub fn apply_minimal(&mut self) {
		self.fill_eob = ' ';
		self.number = false;
		self.relativenumber = false;
		self.cursorline = false;
		self.cursorcolumn = false;
		self.spell = false;
		self.list = false;
		self.foldcolumn = "0".to_string();
		if !self.signcolumn.starts_with("auto") || self.signcolumn.len() > 8 {
			self.signcolumn = "auto".to_string();
		}
		self.colorcolumn.clear();
		self.statuscolumn.clear();
	}
}

/// A window: a view of a buffer with a placement.
#[derive(Debug, Clone)]
pub struct Window {
	pub(crate) id: WindowId,
	pub(crate) buffer: BufferId,
	pub(crate) tabpage: TabpageId,
	pub(crate) config: WinConfig,
	/// Display options.
	pub options: WindowOptions,
}

impl Window {
	pub(crate) fn new(id: WindowId, buffer: BufferId, tabpage: TabpageId, config: WinConfig) -> Self {
		Self {
			id,
			buffer,
			tabpage,
			config,
			options: WindowOptions::default(),
		}
	}

	/// Window handle.
	pub fn id(&self) -> WindowId {
		self.id
	}

	/// Buffer shown in the window.
	pub fn buffer(&self) -> BufferId {
		self.buffer
	}

	/// Tabpage the window belongs to.
	pub fn tabpage(&self) -> TabpageId {
		self.tabpage
	}

	/// Committed placement config.
	pub fn config(&self) -> &WinConfig {
		&self.config
	}

	/// Returns `true` for floating and external windows.
	pub fn is_floating(&self) -> bool {
		!self.config.is_split()
	}
}
