/// MediaView Record Model
///
/// A Record is one media entry (a movie or a TV title) as produced by the
/// upstream analysis pipeline. Records are decoded leniently from JSON: a
/// field of the wrong shape is treated as absent instead of failing the
/// whole dataset.
///
/// # Examples
///
/// ```
/// use mediaview::{MediaType, Record};
///
/// let record = Record::from_json(&serde_json::json!({
///     "title": "Heat",
///     "year": 1995,
///     "rating": 8.3,
///     "genres": ["Crime", "Drama"],
///     "anomaly_duration_outlier": true,
/// }));
///
/// assert_eq!(record.title.as_deref(), Some("Heat"));
/// assert_eq!(record.media_type, MediaType::Movie);
/// assert!(record.is_anomaly());
/// ```

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt;

/// Kind of media entry. Records without a type are movies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum MediaType {
    #[default]
    Movie,
    Tv,
    /// Any other type label found in the dataset
    Other(String),
}

impl MediaType {
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
            MediaType::Other(label) => label,
        }
    }

    /// Parse a type label. Empty labels fall back to `Movie`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "" | "movie" => MediaType::Movie,
            "tv" => MediaType::Tv,
            other => MediaType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MediaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Specific irregularity reported by one of the upstream anomaly flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyReason {
    /// High audience rating paired with a low critic metascore
    RatingHighMetaLow,
    /// Runtime outside the IQR fences of the dataset
    DurationOutlier,
    /// Rating inconsistent with the vote count (regression residual)
    RatingVotesInconsistent,
}

impl AnomalyReason {
    pub fn label(&self) -> &'static str {
        match self {
            AnomalyReason::RatingHighMetaLow => "High rating + low metascore",
            AnomalyReason::DurationOutlier => "Duration outlier (IQR)",
            AnomalyReason::RatingVotesInconsistent => "Rating-votes inconsistency (residual)",
        }
    }
}

impl fmt::Display for AnomalyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One media entry.
///
/// Numeric fields are `None` when the source value is missing or not a number.
/// The anomaly flags are computed upstream and are only read here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "JsonValue")]
pub struct Record {
    pub title: Option<String>,
    pub year: Option<f64>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub rating: Option<f64>,
    pub metascore: Option<f64>,
    pub votes: Option<f64>,
    pub duration_min: Option<f64>,
    pub genres: Vec<String>,
    pub url: Option<String>,
    pub is_anomaly: bool,
    pub anomaly_rating_high_meta_low: bool,
    pub anomaly_duration_outlier: bool,
    pub anomaly_rating_votes_inconsistent: bool,
}

impl Record {
    /// Decode a record from an arbitrary JSON value. Never fails: a value
    /// that is not an object yields a record with every field absent.
    pub fn from_json(value: &JsonValue) -> Self {
        let field = |name: &str| value.get(name);

        Record {
            title: field("title").and_then(json_to_string),
            year: field("year").and_then(json_to_number),
            media_type: field("type")
                .and_then(JsonValue::as_str)
                .map(MediaType::from_label)
                .unwrap_or_default(),
            rating: field("rating").and_then(json_to_number),
            metascore: field("metascore").and_then(json_to_number),
            votes: field("votes").and_then(json_to_number),
            duration_min: field("duration_min").and_then(json_to_number),
            genres: field("genres").map(json_to_genres).unwrap_or_default(),
            url: field("url").and_then(json_to_string),
            is_anomaly: field("is_anomaly").map(is_truthy).unwrap_or(false),
            anomaly_rating_high_meta_low: field("anomaly_rating_high_meta_low")
                .map(is_truthy)
                .unwrap_or(false),
            anomaly_duration_outlier: field("anomaly_duration_outlier")
                .map(is_truthy)
                .unwrap_or(false),
            anomaly_rating_votes_inconsistent: field("anomaly_rating_votes_inconsistent")
                .map(is_truthy)
                .unwrap_or(false),
        }
    }

    /// A record is anomalous when any of its four anomaly flags is set.
    pub fn is_anomaly(&self) -> bool {
        self.is_anomaly
            || self.anomaly_rating_high_meta_low
            || self.anomaly_duration_outlier
            || self.anomaly_rating_votes_inconsistent
    }

    /// Human-readable reasons for the specific flags that are set.
    /// The generic `is_anomaly` flag has no reason attached.
    pub fn anomaly_reasons(&self) -> Vec<AnomalyReason> {
        let mut reasons = Vec::new();
        if self.anomaly_rating_high_meta_low {
            reasons.push(AnomalyReason::RatingHighMetaLow);
        }
        if self.anomaly_duration_outlier {
            reasons.push(AnomalyReason::DurationOutlier);
        }
        if self.anomaly_rating_votes_inconsistent {
            reasons.push(AnomalyReason::RatingVotesInconsistent);
        }
        reasons
    }

    /// Title, or the empty string when absent
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn rating(&self) -> Option<f64> {
        numeric(self.rating)
    }

    pub fn metascore(&self) -> Option<f64> {
        numeric(self.metascore)
    }

    pub fn votes(&self) -> Option<f64> {
        numeric(self.votes)
    }

    /// Text searched by the free-text query: `"<title> <year> <genres>"`.
    /// Missing parts render as the empty string.
    pub fn search_haystack(&self) -> String {
        let year = self.year.map(|y| y.to_string()).unwrap_or_default();
        format!("{} {} {}", self.title_or_empty(), year, self.genres.join(" "))
    }
}

impl From<JsonValue> for Record {
    fn from(value: JsonValue) -> Self {
        Record::from_json(&value)
    }
}

/// A value counts as a number unless it is NaN.
pub(crate) fn numeric(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

fn json_to_number(value: &JsonValue) -> Option<f64> {
    value.as_f64()
}

fn json_to_string(value: &JsonValue) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn json_to_genres(value: &JsonValue) -> Vec<String> {
    match value {
        JsonValue::Array(items) => items
            .iter()
            .filter_map(|g| g.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Truthiness of an upstream flag: `true`, non-zero numbers and non-empty
/// strings are set.
fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().map(|v| v != 0.0 && !v.is_nan()).unwrap_or(false),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
        JsonValue::Null => false,
    }
}
