/// MediaView Record Filter
///
/// A `RecordFilter` is the predicate compiled from a `ViewState`. Checks run
/// in a fixed order (type, anomaly, genre, free text) and stop at the first
/// failure; the free-text check is the expensive one and runs last.

use crate::record::Record;
use crate::state::{GenreFilter, TypeFilter, ViewState};

/// Predicate over records built from the filter fields of a view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    media_type: TypeFilter,
    only_anomalies: bool,
    genre: GenreFilter,
    /// Trimmed, lower-cased query; `None` when blank
    needle: Option<String>,
}

impl RecordFilter {
    pub fn from_state(state: &ViewState) -> Self {
        let needle = state.query.trim().to_lowercase();
        RecordFilter {
            media_type: state.media_type,
            only_anomalies: state.only_anomalies,
            genre: state.genre.clone(),
            needle: if needle.is_empty() { None } else { Some(needle) },
        }
    }

    /// Filter that accepts every record
    pub fn accept_all() -> Self {
        Self::from_state(&ViewState::default())
    }

    pub fn matches(&self, record: &Record) -> bool {
        if !self.media_type.accepts(&record.media_type) {
            return false;
        }

        if self.only_anomalies && !record.is_anomaly() {
            return false;
        }

        // Exact token match; genre values are not trimmed here
        if let GenreFilter::Genre(genre) = &self.genre {
            if !record.genres.iter().any(|g| g == genre) {
                return false;
            }
        }

        if let Some(needle) = &self.needle {
            if !record.search_haystack().to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }

        true
    }

    /// Records passing the filter, in their original order
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Box the filter as a plain predicate closure
    pub fn into_predicate(self) -> Box<dyn Fn(&Record) -> bool> {
        Box::new(move |record| self.matches(record))
    }
}
