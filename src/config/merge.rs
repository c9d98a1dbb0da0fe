//! Merge rules: a partial YAML document overlaid onto a complete baseline.
//!
//! - Mappings merge key by key, recursively.
//! - Zero scalars in the patch (`null`, `false`, `0`, `""`) leave the
//!   baseline untouched.
//! - Sequences replace the baseline wholesale. A present sequence key with
//!   `null` or `[]` therefore erases the baseline list.
//! - A present section key with no children (`null`) resets the whole
//!   section, so its defaults are lost too. Existing config files rely on
//!   both of these.
//! - Keys missing from the baseline are taken from the patch, with `null`
//!   kept so the decoder can tell "present but empty" from "absent".
//! - Anything else replaces the baseline value; type errors surface when the
//!   merged document is decoded.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::warn;

/// Overlay `patch` onto `base` in place.
pub fn overlay(base: &mut Value, patch: Value) {
    match patch {
        Value::Mapping(patch_map) => {
            if !base.is_mapping() {
                *base = Value::Mapping(Mapping::new());
            }
            if let Value::Mapping(base_map) = base {
                for (key, value) in patch_map {
                    match base_map.get_mut(&key) {
                        Some(slot) => overlay(slot, value),
                        None => {
                            let mut slot = Value::Null;
                            overlay(&mut slot, value);
                            base_map.insert(key, slot);
                        }
                    }
                }
            }
        }
        Value::Sequence(items) => {
            *base = Value::Sequence(items.into_iter().map(strip_nulls).collect());
        }
        Value::Null if base.is_sequence() => {
            warn!("empty list in config replaces the default list");
            *base = Value::Sequence(Vec::new());
        }
        Value::Null if base.is_mapping() => {
            warn!("empty section in config replaces the default section");
            *base = Value::Null;
        }
        patch if is_zero(&patch) => {}
        patch => *base = patch,
    }
}

/// Decode `document` as a partial `T` overlaid onto `base`.
///
/// Whitespace-only documents yield `base` unchanged.
pub fn overlay_document<T>(base: &T, document: &str) -> Result<T, serde_yaml::Error>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_yaml::to_value(base)?;
    if !document.trim().is_empty() {
        let patch: Value = serde_yaml::from_str(document)?;
        // A comment-only document parses as null; it sets nothing.
        if !patch.is_null() {
            overlay(&mut merged, patch);
        }
    }
    serde_yaml::from_value(merged)
}

fn is_zero(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Null fields inside list entries decode as their zero value.
fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        other => other,
    }
}
