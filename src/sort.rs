/// MediaView Sort Comparators
///
/// Sort keys are an explicit enumeration of the record fields a view can be
/// ordered by, each mapped to a typed accessor. Numeric keys keep missing
/// values at the end of the list whatever the direction.

use crate::record::{numeric, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Field a view is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    /// Anomalous vs normal records
    Anomaly,
    Year,
    #[default]
    Rating,
    Metascore,
    Votes,
    DurationMin,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::Title,
        SortKey::Anomaly,
        SortKey::Year,
        SortKey::Rating,
        SortKey::Metascore,
        SortKey::Votes,
        SortKey::DurationMin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Anomaly => "anomaly",
            SortKey::Year => "year",
            SortKey::Rating => "rating",
            SortKey::Metascore => "metascore",
            SortKey::Votes => "votes",
            SortKey::DurationMin => "duration_min",
        }
    }

    /// Value of a numeric key on a record. Always `None` for `Title` and
    /// `Anomaly`.
    pub fn numeric_value(&self, record: &Record) -> Option<f64> {
        match self {
            SortKey::Title | SortKey::Anomaly => None,
            SortKey::Year => record.year,
            SortKey::Rating => record.rating,
            SortKey::Metascore => record.metascore,
            SortKey::Votes => record.votes,
            SortKey::DurationMin => record.duration_min,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown sort key: '{}'. Use one of: {}",
                    s,
                    SortKey::ALL.map(|k| k.as_str()).join(", ")
                )
            })
    }
}

/// Total order over records for one sort key and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordComparator {
    key: SortKey,
    direction: SortDirection,
}

impl RecordComparator {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        RecordComparator { key, direction }
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self.key {
            SortKey::Title => self
                .direction
                .apply(collate(a.title_or_empty(), b.title_or_empty())),
            SortKey::Anomaly => self.direction.apply(a.is_anomaly().cmp(&b.is_anomaly())),
            key => compare_maybe_number(key.numeric_value(a), key.numeric_value(b), self.direction),
        }
    }

    /// Sort a list of record references in place
    pub fn sort(&self, records: &mut [&Record]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

/// Compare two optional numbers. Missing or NaN values sort after present
/// ones in both directions; two missing values are equal.
pub fn compare_maybe_number(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    match (numeric(a), numeric(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => direction.apply(a.partial_cmp(&b).unwrap_or(Ordering::Equal)),
    }
}

/// Collation for display strings: case-insensitive first, code points to
/// break ties.
pub(crate) fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(title: &str, rating: Option<f64>) -> Record {
        Record {
            title: Some(title.to_string()),
            rating,
            ..Record::default()
        }
    }

    fn sorted_titles(records: &[Record], key: SortKey, direction: SortDirection) -> Vec<String> {
        let mut refs: Vec<&Record> = records.iter().collect();
        RecordComparator::new(key, direction).sort(&mut refs);
        refs.iter().map(|r| r.title_or_empty().to_string()).collect()
    }

    #[test]
    fn test_missing_rating_sorts_last_descending() {
        let records = vec![rated("a", Some(7.0)), rated("b", None), rated("c", Some(3.0))];
        assert_eq!(sorted_titles(&records, SortKey::Rating, SortDirection::Descending), ["a", "c", "b"]);
    }

    #[test]
    fn test_missing_rating_sorts_last_ascending() {
        let records = vec![rated("a", Some(7.0)), rated("b", None), rated("c", Some(3.0))];
        assert_eq!(sorted_titles(&records, SortKey::Rating, SortDirection::Ascending), ["c", "a", "b"]);
    }

    #[test]
    fn test_nan_sorts_like_missing() {
        let records = vec![rated("nan", Some(f64::NAN)), rated("one", Some(1.0)), rated("two", Some(2.0))];
        assert_eq!(sorted_titles(&records, SortKey::Rating, SortDirection::Ascending), ["one", "two", "nan"]);
        assert_eq!(sorted_titles(&records, SortKey::Rating, SortDirection::Descending), ["two", "one", "nan"]);
    }

    #[test]
    fn test_compare_maybe_number() {
        use crate::sort::SortDirection::*;
        assert_eq!(compare_maybe_number(None, None, Ascending), Ordering::Equal);
        assert_eq!(compare_maybe_number(None, Some(1.0), Ascending), Ordering::Greater);
        assert_eq!(compare_maybe_number(None, Some(1.0), Descending), Ordering::Greater);
        assert_eq!(compare_maybe_number(Some(1.0), None, Descending), Ordering::Less);
        assert_eq!(compare_maybe_number(Some(1.0), Some(2.0), Ascending), Ordering::Less);
        assert_eq!(compare_maybe_number(Some(1.0), Some(2.0), Descending), Ordering::Greater);
    }

    #[test]
    fn test_title_sort() {
        let records = vec![rated("banana", None), rated("Apple", None), rated("cherry", None)];
        assert_eq!(sorted_titles(&records, SortKey::Title, SortDirection::Ascending), ["Apple", "banana", "cherry"]);
        assert_eq!(sorted_titles(&records, SortKey::Title, SortDirection::Descending), ["cherry", "banana", "Apple"]);
    }

    #[test]
    fn test_missing_title_is_empty_string() {
        let records = vec![rated("Zodiac", None), Record::default()];
        assert_eq!(sorted_titles(&records, SortKey::Title, SortDirection::Ascending), ["", "Zodiac"]);
    }

    #[test]
    fn test_anomaly_sort() {
        let records = vec![
            rated("normal", None),
            Record {
                title: Some("odd".to_string()),
                anomaly_duration_outlier: true,
                ..Record::default()
            },
        ];
        assert_eq!(sorted_titles(&records, SortKey::Anomaly, SortDirection::Descending), ["odd", "normal"]);
        assert_eq!(sorted_titles(&records, SortKey::Anomaly, SortDirection::Ascending), ["normal", "odd"]);
    }

    #[test]
    fn test_duration_key() {
        let mut short = rated("short", None);
        short.duration_min = Some(80.0);
        let mut long = rated("long", None);
        long.duration_min = Some(190.0);
        let records = vec![short, long];
        assert_eq!(sorted_titles(&records, SortKey::DurationMin, SortDirection::Descending), ["long", "short"]);
    }

    #[test]
    fn test_sort_key_parse() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert!("popularity".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_serde_names() {
        assert_eq!(serde_json::to_string(&SortKey::DurationMin).unwrap(), "\"duration_min\"");
        assert_eq!(serde_json::to_string(&SortDirection::Ascending).unwrap(), "\"asc\"");
        let dir: SortDirection = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(dir, SortDirection::Descending);
    }
}
