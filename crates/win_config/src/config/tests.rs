use super::*;

#[test]
fn keywords_ignore_case_except_alignment() {
	assert_eq!(RelativeKind::parse("EDITOR"), Some(RelativeKind::Editor));
	assert_eq!(RelativeKind::parse("Win"), Some(RelativeKind::Window));
	assert_eq!(RelativeKind::parse("window"), None);
	assert_eq!(Anchor::parse("se"), Some(Anchor::SouthEast));
	assert_eq!(SplitDirection::parse("Below"), Some(SplitDirection::Below));
	assert_eq!(WinStyle::parse("MINIMAL"), Some(WinStyle::Minimal));
	assert_eq!(WinStyle::parse(""), Some(WinStyle::Default));
	assert_eq!(TextAlign::parse("center"), Some(TextAlign::Center));
	assert_eq!(TextAlign::parse("Center"), None);
}

#[test]
fn anchor_corners() {
	assert!(Anchor::SouthWest.is_south());
	assert!(!Anchor::NorthEast.is_south());
	assert!(Anchor::NorthEast.is_east());
	assert!(!Anchor::SouthWest.is_east());
}

#[test]
fn default_config_is_focusable_split() {
	let config = WinConfig::default();
	assert_eq!(config.kind(), PlacementKind::Split);
	assert!(config.focusable);
	assert!(config.border.is_none());
	assert_eq!(config.split_direction(), Some(SplitDirection::Left));
}

#[test]
fn float_accessor_only_for_floats() {
	let config = WinConfig {
		placement: Placement::Float(FloatPlacement::default()),
		..WinConfig::default()
	};
	assert!(config.is_floating());
	assert_eq!(config.float().map(|f| f.zindex), Some(DEFAULT_ZINDEX));

	let external = WinConfig {
		placement: Placement::External,
		..WinConfig::default()
	};
	assert!(external.is_floating());
	assert!(external.is_external());
	assert!(external.float().is_none());
}
