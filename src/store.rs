/// MediaView Record Store
///
/// The immutable snapshot of records for one dataset load. A store is
/// replaced as a whole when a new dataset arrives; it is never mutated.
///
/// The dataset document is `{ "records": [...] }`. A missing or malformed
/// `records` entry yields an empty store rather than an error; only an
/// unreadable file or invalid JSON fails to load.
///
/// # Examples
///
/// ```
/// use mediaview::RecordStore;
///
/// let store = RecordStore::from_json_str(r#"{
///     "records": [
///         { "title": "Heat", "rating": 8.0 },
///         { "title": "Dark", "type": "tv", "rating": 9.0, "is_anomaly": true }
///     ]
/// }"#).unwrap();
///
/// assert_eq!(store.len(), 2);
///
/// let summary = store.summary();
/// assert_eq!(summary.anomaly_count, 1);
/// assert_eq!(summary.mean_rating, Some(8.5));
/// ```

use crate::error::LoadError;
use crate::record::Record;
use crate::stats;
use crate::vocabulary::GenreVocabulary;
use log::{info, warn};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Immutable collection of records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

/// Dataset-wide figures, independent of any view filters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total: usize,
    /// Record count per media type label
    pub type_counts: BTreeMap<String, usize>,
    pub anomaly_count: usize,
    /// Mean of all numeric ratings; `None` if there are none
    pub mean_rating: Option<f64>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        RecordStore { records }
    }

    /// Build a store from a parsed dataset document
    pub fn from_json_value(document: &JsonValue) -> Self {
        let records = match document.get("records") {
            Some(JsonValue::Array(items)) => items.iter().map(Record::from_json).collect(),
            Some(_) => {
                warn!("Dataset 'records' is not an array; using an empty dataset");
                Vec::new()
            }
            None => {
                warn!("Dataset has no 'records' entry; using an empty dataset");
                Vec::new()
            }
        };
        RecordStore { records }
    }

    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let document: JsonValue = serde_json::from_str(text)?;
        Ok(Self::from_json_value(&document))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let document: JsonValue = serde_json::from_reader(reader)?;
        Ok(Self::from_json_value(&document))
    }

    /// Load the dataset file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(BufReader::new(file))?;
        info!("Loaded {} records from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn genre_vocabulary(&self) -> GenreVocabulary {
        GenreVocabulary::from_records(&self.records)
    }

    pub fn summary(&self) -> DatasetSummary {
        let mut type_counts = BTreeMap::new();
        for record in &self.records {
            *type_counts.entry(record.media_type.as_str().to_string()).or_insert(0) += 1;
        }

        let ratings: Vec<f64> = self.records.iter().filter_map(Record::rating).collect();

        DatasetSummary {
            total: self.records.len(),
            type_counts,
            anomaly_count: self.records.iter().filter(|r| r.is_anomaly()).count(),
            mean_rating: stats::mean(&ratings),
        }
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> Self {
        RecordStore::new(records)
    }
}

impl DatasetSummary {
    /// Count for one type label, 0 when absent
    pub fn count_of(&self, media_type: &str) -> usize {
        self.type_counts.get(media_type).copied().unwrap_or(0)
    }
}
