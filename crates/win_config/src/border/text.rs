//! Title and footer text.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use unicode_width::UnicodeWidthStr;

use crate::config::{BorderText, TextAlign, TextChunk};
use crate::error::{BorderError, BorderTextKind};

/// Border text as given in a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderTextSpec {
	/// Plain text in the default title/footer highlight.
	Text(String),
	/// `[text]` or `[text, highlight]` chunks.
	Chunks(Vec<Vec<String>>),
}

impl From<&str> for BorderTextSpec {
	fn from(text: &str) -> Self {
		BorderTextSpec::Text(text.to_string())
	}
}

/// Resolves a title or footer together with its alignment.
///
/// An empty string clears the text (`Ok(None)`). A missing or empty
/// alignment means left.
pub fn resolve_border_text(
	kind: BorderTextKind,
	spec: &BorderTextSpec,
	align: Option<&str>,
) -> Result<Option<BorderText>, BorderError> {
	let chunks: SmallVec<[TextChunk; 1]> = match spec {
		BorderTextSpec::Text(text) if text.is_empty() => SmallVec::new(),
		BorderTextSpec::Text(text) => smallvec::smallvec![TextChunk {
			text: text.clone(),
			highlight: Some(kind.default_highlight().to_string()),
		}],
		BorderTextSpec::Chunks(list) if list.is_empty() => return Err(BorderError::EmptyText(kind)),
		BorderTextSpec::Chunks(list) => list
			.iter()
			.map(|chunk| match chunk.as_slice() {
				[text] => Ok(TextChunk {
					text: text.clone(),
					highlight: None,
				}),
				[text, hl] => Ok(TextChunk {
					text: text.clone(),
					highlight: Some(hl.clone()).filter(|hl| !hl.is_empty()),
				}),
				_ => Err(BorderError::InvalidChunk(kind)),
			})
			.collect::<Result<_, _>>()?,
	};

	let align = match align {
		None | Some("") => TextAlign::Left,
		Some(pos) => TextAlign::parse(pos).ok_or(BorderError::InvalidAlign(kind))?,
	};

	if chunks.is_empty() {
		return Ok(None);
	}

	let width = chunks.iter().map(|chunk| chunk.text.width()).sum();
	Ok(Some(BorderText { chunks, width, align }))
}

/// Projects resolved border text back into request form.
pub fn border_text_to_spec(text: &BorderText) -> BorderTextSpec {
	BorderTextSpec::Chunks(
		text.chunks
			.iter()
			.map(|chunk| {
				let mut tuple = vec![chunk.text.clone()];
				tuple.extend(chunk.highlight.clone());
				tuple
			})
			.collect(),
	)
}
