//! The in-memory Settings Index: schema name to ordered key/value entries.

use std::collections::HashMap;

use crate::record::{KeyValue, RawRecord};

/// Grouped view over the dump, built once per run and read-only afterwards.
///
/// Each schema maps to the ordered sequence of entries its lines produced,
/// one key per entry. Duplicate schema+key lines are all kept; ordering
/// inside a group follows the ascending `(schema, remainder)` sort applied
/// before grouping.
#[derive(Debug, Default)]
pub struct SettingsIndex {
    groups: HashMap<String, Vec<KeyValue>>,
}

impl SettingsIndex {
    /// Sort `records` by `(schema, remainder)` and group them by schema.
    pub fn build(mut records: Vec<RawRecord>) -> Self {
        records.sort();

        let mut groups: HashMap<String, Vec<KeyValue>> = HashMap::new();
        for record in records {
            let entry = record.key_value();
            groups.entry(record.schema).or_default().push(entry);
        }
        Self { groups }
    }

    /// First entry recorded for `schema`, if the schema is present.
    /// A present schema always has at least one entry.
    pub fn first_entry(&self, schema: &str) -> Option<&KeyValue> {
        self.groups.get(schema).and_then(|entries| entries.first())
    }

    /// All entries recorded for `schema`, in index order.
    pub fn entries(&self, schema: &str) -> Option<&[KeyValue]> {
        self.groups.get(schema).map(Vec::as_slice)
    }

    /// Number of distinct schemas.
    pub fn schema_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
