//! Dictionary boundary: JSON object to [`WinConfigRequest`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{REQUEST_KEYS, WinConfigRequest};
use crate::error::RequestError;

impl WinConfigRequest {
	/// Parses a request from a JSON object.
	///
	/// Unknown keys are rejected with a close match when there is one.
	/// `null` values count as absent.
	pub fn from_value(value: &Value) -> Result<Self, RequestError> {
		let record = expect_object(value)?;
		validate_allowed_keys(record)?;

		let mut request = WinConfigRequest::default();
		for (key, raw) in record.iter().filter(|(_, v)| !v.is_null()) {
			match key.as_str() {
				"relative" => request.relative = Some(decode(key, raw)?),
				"win" => request.win = Some(decode(key, raw)?),
				"anchor" => request.anchor = Some(decode(key, raw)?),
				"width" => request.width = Some(decode(key, raw)?),
				"height" => request.height = Some(decode(key, raw)?),
				"bufpos" => request.bufpos = Some(decode(key, raw)?),
				"row" => request.row = Some(decode(key, raw)?),
				"col" => request.col = Some(decode(key, raw)?),
				"focusable" => request.focusable = Some(decode(key, raw)?),
				"external" => request.external = Some(decode(key, raw)?),
				"zindex" => request.zindex = Some(decode(key, raw)?),
				"style" => request.style = Some(decode(key, raw)?),
				"border" => request.border = Some(decode(key, raw)?),
				"title" => request.title = Some(decode(key, raw)?),
				"title_pos" => request.title_pos = Some(decode(key, raw)?),
				"footer" => request.footer = Some(decode(key, raw)?),
				"footer_pos" => request.footer_pos = Some(decode(key, raw)?),
				"noautocmd" => request.noautocmd = Some(decode(key, raw)?),
				"fixed" => request.fixed = Some(decode(key, raw)?),
				"hide" => request.hide = Some(decode(key, raw)?),
				"vertical" => request.vertical = Some(decode(key, raw)?),
				"split" => request.split = Some(decode(key, raw)?),
				_ => unreachable!("key set checked by validate_allowed_keys"),
			}
		}
		Ok(request)
	}

	/// Parses a request from JSON text.
	pub fn from_json_str(input: &str) -> Result<Self, RequestError> {
		let value: Value = serde_json::from_str(input).map_err(|e| RequestError::InvalidType {
			field: "<root>".to_string(),
			reason: e.to_string(),
		})?;
		Self::from_value(&value)
	}
}

/// Suggests a recognized key close to `key`.
pub fn suggest_key(key: &str) -> Option<String> {
	REQUEST_KEYS
		.iter()
		.min_by_key(|k| strsim::levenshtein(key, k))
		.filter(|k| strsim::levenshtein(key, k) <= 3)
		.map(|k| k.to_string())
}

fn validate_allowed_keys(record: &Map<String, Value>) -> Result<(), RequestError> {
	for key in record.keys() {
		if !REQUEST_KEYS.contains(&key.as_str()) {
			return Err(RequestError::UnknownKey {
				key: key.clone(),
				suggestion: suggest_key(key),
			});
		}
	}
	Ok(())
}

fn expect_object(value: &Value) -> Result<&Map<String, Value>, RequestError> {
	value.as_object().ok_or(RequestError::NotADictionary(value_type(value)))
}

fn decode<T: DeserializeOwned>(field: &str, value: &Value) -> Result<T, RequestError> {
	T::deserialize(value).map_err(|e| RequestError::InvalidType {
		field: field.to_string(),
		reason: e.to_string(),
	})
}

fn value_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "nil",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "dictionary",
	}
}
