use proptest::prelude::*;

use super::*;
use crate::config::TextAlign;
use crate::error::BorderTextKind;

fn glyphs(list: &[&str]) -> BorderSpec {
	BorderSpec::Cells(list.iter().map(|g| BorderCellSpec::Glyph(g.to_string())).collect())
}

#[test]
fn none_and_empty_remove_the_border() {
	assert_eq!(resolve_border(&BorderSpec::Named("none".into())), Ok(None));
	assert_eq!(resolve_border(&BorderSpec::Named(String::new())), Ok(None));
}

#[test]
fn presets_resolve_to_eight_slots() {
	let border = resolve_border(&BorderSpec::Named("double".into())).unwrap().unwrap();
	assert_eq!(border.chars[0], "╔");
	assert_eq!(border.chars[7], "║");
	assert!(border.highlights.iter().all(Option::is_none));
}

#[test]
fn shadow_preset_carries_gradient_highlights() {
	let border = resolve_border(&BorderSpec::Named("shadow".into())).unwrap().unwrap();
	let hl: Vec<_> = border.highlights.iter().map(|h| h.as_deref()).collect();
	assert_eq!(
		hl,
		vec![
			None,
			None,
			Some(SHADOW_THROUGH_HL),
			Some(SHADOW_BLEND_HL),
			Some(SHADOW_BLEND_HL),
			Some(SHADOW_BLEND_HL),
			Some(SHADOW_THROUGH_HL),
			None,
		]
	);
}

#[test]
fn unknown_style_is_rejected() {
	assert_eq!(
		resolve_border(&BorderSpec::Named("fancy".into())),
		Err(BorderError::UnknownStyle("fancy".into()))
	);
	assert_eq!(
		BorderError::UnknownStyle("fancy".into()).to_string(),
		"invalid border style \"fancy\""
	);
}

#[test]
fn cell_counts_must_divide_eight() {
	for n in [0usize, 3, 5, 6, 7, 9, 16] {
		let cells = vec!["x"; n];
		assert_eq!(resolve_border(&glyphs(&cells)), Err(BorderError::InvalidCharCount), "n = {n}");
	}
}

#[test]
fn four_cells_tile_corner_edge_pairs() {
	let border = resolve_border(&glyphs(&["/", "-", "\\", "|"])).unwrap().unwrap();
	assert_eq!(border.chars, ["/", "-", "\\", "|", "/", "-", "\\", "|"].map(String::from));
}

#[test]
fn tuple_cells_carry_highlights() {
	let spec = BorderSpec::Cells(vec![
		BorderCellSpec::Tuple(vec!["+".into(), "MyCorner".into()]),
		BorderCellSpec::Tuple(vec!["x".into(), "MyBorder".into()]),
	]);
	let border = resolve_border(&spec).unwrap().unwrap();
	assert_eq!(border.highlights[0].as_deref(), Some("MyCorner"));
	assert_eq!(border.highlights[1].as_deref(), Some("MyBorder"));
	assert_eq!(border.highlights[6].as_deref(), Some("MyCorner"));
	assert_eq!(border.chars[7], "x");
}

#[test]
fn malformed_tuple_cells_are_rejected() {
	let empty = BorderSpec::Cells(vec![BorderCellSpec::Tuple(vec![])]);
	assert_eq!(resolve_border(&empty), Err(BorderError::InvalidChar));

	let triple = BorderSpec::Cells(vec![BorderCellSpec::Tuple(vec!["a".into(), "b".into(), "c".into()])]);
	assert_eq!(resolve_border(&triple), Err(BorderError::InvalidChar));
}

#[test]
fn wide_glyphs_are_rejected() {
	assert_eq!(resolve_border(&glyphs(&["字"])), Err(BorderError::MultiCellChar));
	assert_eq!(resolve_border(&glyphs(&["ab"])), Err(BorderError::MultiCellChar));
}

#[test]
fn edges_only_border_is_allowed() {
	let border = resolve_border(&glyphs(&["", "", "", ">", "", "", "", "<"])).unwrap().unwrap();
	assert_eq!(border.chars[3], ">");
	assert_eq!(border.chars[7], "<");
}

#[test]
fn corner_between_drawn_edges_must_be_set() {
	assert_eq!(
		resolve_border(&glyphs(&["", "-", "+", "|", "+", "-", "+", "|"])),
		Err(BorderError::MissingCorner)
	);
	assert_eq!(resolve_border(&glyphs(&["", "x"])), Err(BorderError::MissingCorner));
}

#[test]
fn border_projection_emits_all_slots() {
	let border = resolve_border(&BorderSpec::Named("shadow".into())).unwrap().unwrap();
	let BorderSpec::Cells(cells) = border_to_spec(&border) else {
		panic!("projection must be a cell list");
	};
	assert_eq!(cells.len(), 8);
	assert_eq!(cells[0], BorderCellSpec::Glyph(String::new()));
	assert_eq!(
		cells[3],
		BorderCellSpec::Tuple(vec![" ".into(), SHADOW_BLEND_HL.into()])
	);
	assert_eq!(resolve_border(&border_to_spec(&border)), Ok(Some(border)));
}

#[test]
fn plain_title_uses_default_highlight_and_cell_width() {
	let text = resolve_border_text(BorderTextKind::Title, &"日本".into(), None).unwrap().unwrap();
	assert_eq!(text.width, 4);
	assert_eq!(text.align, TextAlign::Left);
	assert_eq!(text.chunks[0].highlight.as_deref(), Some("FloatTitle"));

	let footer = resolve_border_text(BorderTextKind::Footer, &"f".into(), Some("right")).unwrap().unwrap();
	assert_eq!(footer.chunks[0].highlight.as_deref(), Some("FloatFooter"));
	assert_eq!(footer.align, TextAlign::Right);
}

#[test]
fn rich_title_sums_widths_across_chunks() {
	let spec = BorderTextSpec::Chunks(vec![vec!["ab".into(), "A".into()], vec!["字".into()]]);
	let text = resolve_border_text(BorderTextKind::Title, &spec, Some("center")).unwrap().unwrap();
	assert_eq!(text.width, 4);
	assert_eq!(text.chunks.len(), 2);
	assert_eq!(text.chunks[1].highlight, None);
	assert_eq!(text.align, TextAlign::Center);
}

#[test]
fn empty_text_clears_and_empty_list_fails() {
	assert_eq!(resolve_border_text(BorderTextKind::Title, &"".into(), None), Ok(None));
	assert_eq!(
		resolve_border_text(BorderTextKind::Footer, &BorderTextSpec::Chunks(vec![]), None),
		Err(BorderError::EmptyText(BorderTextKind::Footer))
	);
	assert_eq!(
		resolve_border_text(BorderTextKind::Title, &BorderTextSpec::Chunks(vec![vec![]]), None),
		Err(BorderError::InvalidChunk(BorderTextKind::Title))
	);
}

#[test]
fn unknown_alignment_is_rejected() {
	let err = resolve_border_text(BorderTextKind::Footer, &"f".into(), Some("middle")).unwrap_err();
	assert_eq!(err, BorderError::InvalidAlign(BorderTextKind::Footer));
	assert_eq!(err.to_string(), "invalid footer_pos value");
}

#[test]
fn border_text_projection_round_trips() {
	let text = resolve_border_text(BorderTextKind::Title, &"T".into(), Some("center")).unwrap().unwrap();
	let again = resolve_border_text(BorderTextKind::Title, &border_text_to_spec(&text), Some("center"))
		.unwrap()
		.unwrap();
	assert_eq!(again, text);
}

fn cell() -> impl Strategy<Value = (String, Option<String>)> {
	(
		prop::sample::select(vec!["x", "-", "|", "+", "╭", " "]),
		prop::option::of(prop::sample::select(vec!["A", "B"])),
	)
		.prop_map(|(g, hl)| (g.to_string(), hl.map(str::to_string)))
}

proptest! {
	#[test]
	fn resolved_border_tiles_input(
		n in prop::sample::select(vec![1usize, 2, 4, 8]),
		cells in prop::collection::vec(cell(), 8),
	) {
		let input = &cells[..n];
		let spec = BorderSpec::Cells(
			input
				.iter()
				.map(|(g, hl)| match hl {
					Some(hl) => BorderCellSpec::Tuple(vec![g.clone(), hl.clone()]),
					None => BorderCellSpec::Glyph(g.clone()),
				})
				.collect(),
		);
		let border = resolve_border(&spec).unwrap().unwrap();
		for i in 0..8 {
			prop_assert_eq!(&border.chars[i], &input[i % n].0);
			prop_assert_eq!(&border.highlights[i], &input[i % n].1);
		}
	}

	#[test]
	fn non_divisor_lengths_always_fail(n in 0usize..20) {
		prop_assume!(![1usize, 2, 4, 8].contains(&n));
		let cells = vec![BorderCellSpec::Glyph("x".into()); n];
		prop_assert_eq!(resolve_border(&BorderSpec::Cells(cells)), Err(BorderError::InvalidCharCount));
	}
}
