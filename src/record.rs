//! Match-result record type.
//!
//! A record is one row of the input: each header cell becomes a field name
//! and the row's cell in the same column becomes its value. Values are kept
//! as text; any numeric interpretation happens at comparison time.

use std::collections::HashMap;

/// One row of input as a field-name-to-value mapping.
///
/// Records are immutable once built. Lookups of absent fields return `None`
/// rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record by pairing names with values positionally.
    ///
    /// Pairing stops at the shorter of the two sequences, so surplus cells are
    /// dropped and missing trailing cells leave their field absent. A repeated
    /// name keeps the last value.
    pub fn from_cells<N, V>(names: &[N], values: &[V]) -> Self
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        names
            .iter()
            .zip(values)
            .map(|(n, v)| (n.as_ref(), v.as_ref()))
            .collect()
    }

    /// Value of `field`, or `None` if the record has no such field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Does the record carry `field`?
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names, in no particular order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
