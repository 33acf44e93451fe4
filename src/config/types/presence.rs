//! Tracks which option paths were explicitly set.

use rustc_hash::FxHashSet;
use serde_json::Value;

/// Dotted paths present in an options tree.
///
/// Entries of a sequence share their parent's path, so
/// `theme.navbar.items.label` is present when any nav item sets a label.
/// `null` leaves count as absent.
#[derive(Debug, Clone, Default)]
pub struct ConfigPresence {
    paths: FxHashSet<String>,
}

impl ConfigPresence {
    /// Build presence set from a serialized options tree.
    pub fn from_value(value: &Value) -> Self {
        let mut presence = Self::default();
        presence.collect_value("", value);
        presence
    }

    /// Check whether a field or section path was explicitly present.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        !path.is_empty() && self.paths.contains(path)
    }

    fn collect_value(&mut self, prefix: &str, value: &Value) {
        match value {
            Value::Null => {}
            Value::Object(map) => {
                if !prefix.is_empty() {
                    self.paths.insert(prefix.to_string());
                }
                for (key, child) in map {
                    let next = if prefix.is_empty() {
                        key.to_string()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    self.collect_value(&next, child);
                }
            }
            Value::Array(items) => {
                if !prefix.is_empty() {
                    self.paths.insert(prefix.to_string());
                }
                for item in items.iter().filter(|item| item.is_object()) {
                    self.collect_value(prefix, item);
                }
            }
            _ => {
                if !prefix.is_empty() {
                    self.paths.insert(prefix.to_string());
                }
            }
        }
    }
}
