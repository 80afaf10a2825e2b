//! Flattening helpers for collection-valued finding fields
use std::collections::BTreeMap;

/// Join a list of strings into a single cell value, skipping empty entries.
pub fn unroll_list(items: &[String]) -> String {
    items
        .iter()
        .filter(|item| !item.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Join a map into `key<separator>value` pairs.
pub fn unroll_dict(map: &BTreeMap<String, String>, separator: &str) -> String {
    map.iter()
        .map(|(key, value)| format!("{}{}{}", key, separator, value))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Join a map with list values into `key<separator>v1, v2` pairs.
pub fn unroll_dict_list(map: &BTreeMap<String, Vec<String>>, separator: &str) -> String {
    map.iter()
        .map(|(key, values)| format!("{}{}{}", key, separator, values.join(", ")))
        .collect::<Vec<_>>()
        .join(" | ")
}
