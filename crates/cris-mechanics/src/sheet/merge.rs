//! Recursive merge of partial sheet updates.
//!
//! Objects merge key by key. Any other patch value (arrays included)
//! replaces the existing value wholesale. `null` in a patch removes the
//! key, so the field falls back to its default when the sheet is read.

use serde_json::{Map, Value};

/// Merge `patch` into `base` in place.
pub fn deep_merge(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, value) in patch_map {
                if value.is_null() {
                    base_map.remove(key);
                    continue;
                }
                match base_map.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        let mut slot = if value.is_object() {
                            Value::Object(Map::new())
                        } else {
                            Value::Null
                        };
                        deep_merge(&mut slot, value);
                        base_map.insert(key.clone(), slot);
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}
