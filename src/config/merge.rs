//! Deep merge of nested TOML documents.

use toml::{Table, Value};

/// Recursively merge `overlay` into `base`, in place.
///
/// Merging is directional and destructive on `base`; callers must own the
/// destination document. Conflict rules, per key of `overlay`:
/// - both values are tables: merge recursively
/// - both values are arrays: append `overlay`'s elements to `base`'s,
///   preserving order and duplicates
/// - anything else (key absent in `base`, type mismatch, scalars):
///   `overlay`'s value replaces `base`'s entirely
///
/// Keys present only in `base` are left untouched.
pub fn deep_merge(base: &mut Table, overlay: &Table) {
    for (key, value) in overlay {
        if let Some(base_value) = base.get_mut(key) {
            match (base_value, value) {
                (Value::Table(base_table), Value::Table(overlay_table)) => {
                    deep_merge(base_table, overlay_table);
                    continue;
                }
                (Value::Array(base_items), Value::Array(overlay_items)) => {
                    base_items.extend(overlay_items.iter().cloned());
                    continue;
                }
                // type mismatch: fall through to full replacement
                _ => {}
            }
        }
        base.insert(key.clone(), value.clone());
    }
}
