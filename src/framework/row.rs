//! # Rows & Snapshots
//!
//! The backing store hands back a JSON object of objects (key → record). Display code
//! wants a list of records that each know their own id. This module owns that
//! translation.
//!
//! A [`RowCollection`] is only ever built in one piece from a [`StoredCollection`]: each
//! map key becomes the `id` of exactly one row. Because map keys are unique, row ids are
//! unique too, and there is no separate deduplication step that could disagree with the
//! store.

use crate::framework::SyncEntity;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// The store's own representation of a collection: opaque key → record.
///
/// Iteration is in key order. Store-generated push keys sort chronologically, so this is
/// also creation order for records the store created.
pub type StoredCollection<T> = BTreeMap<String, T>;

/// A read-only, shareable view of one [`RowCollection`], as published to observers.
pub type Snapshot<T> = Arc<RowCollection<T>>;

/// One record together with the store key it was read under.
///
/// Serializes as the record's own fields plus `id`, which is the shape a grid expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

/// An ordered, id-bearing projection of a [`StoredCollection`].
#[derive(Debug, Clone, PartialEq)]
pub struct RowCollection<T> {
    rows: Vec<Row<T>>,
}

impl<T> Default for RowCollection<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: SyncEntity> RowCollection<T> {
    /// Builds a fresh collection from a store response.
    ///
    /// `None` (an empty or `null` response) yields an empty collection.
    pub fn from_stored(stored: Option<StoredCollection<T>>) -> Self {
        let rows = stored
            .unwrap_or_default()
            .into_iter()
            .map(|(id, record)| Row { id, record })
            .collect();
        Self { rows }
    }
}

impl<T> RowCollection<T> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row<T>> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[Row<T>] {
        &self.rows
    }

    /// Looks up a row by its store key.
    pub fn get(&self, id: &str) -> Option<&Row<T>> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.id.as_str())
    }
}

impl<'a, T> IntoIterator for &'a RowCollection<T> {
    type Item = &'a Row<T>;
    type IntoIter = std::slice::Iter<'a, Row<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// The two states a synchronizer moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    Refreshing,
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncState::Idle => write!(f, "idle"),
            SyncState::Refreshing => write!(f, "refreshing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    impl SyncEntity for Note {
        const COLLECTION: &'static str = "notes";
    }

    fn note(text: &str) -> Note {
        Note { text: text.to_string() }
    }

    #[test]
    fn test_every_key_becomes_exactly_one_row() {
        let mut stored = StoredCollection::new();
        stored.insert("b".to_string(), note("second"));
        stored.insert("a".to_string(), note("first"));
        stored.insert("c".to_string(), note("third"));

        let rows = RowCollection::from_stored(Some(stored.clone()));

        assert_eq!(rows.len(), 3);
        for (key, record) in &stored {
            let row = rows.get(key).expect("row for key");
            assert_eq!(&row.id, key);
            assert_eq!(&row.record, record);
        }
        assert_eq!(rows.ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_absent_response_is_empty_collection() {
        let rows = RowCollection::<Note>::from_stored(None);
        assert!(rows.is_empty());
        assert_eq!(rows, RowCollection::default());

        let rows = RowCollection::<Note>::from_stored(Some(StoredCollection::new()));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_row_serializes_with_flattened_id() {
        let row = Row {
            id: "k1".to_string(),
            record: note("hello"),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "k1", "text": "hello" }));
    }

    #[test]
    fn test_lookup_of_unknown_id() {
        let rows = RowCollection::from_stored(Some(StoredCollection::from([(
            "k1".to_string(),
            note("x"),
        )])));
        assert!(rows.contains("k1"));
        assert!(!rows.contains("k2"));
        assert!(rows.get("k2").is_none());
    }
}
