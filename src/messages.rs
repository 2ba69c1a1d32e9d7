/// WebSocket message types for client-server communication
use serde::{Deserialize, Serialize};

use crate::composer::{DerivedView, ScatterPoint};
use crate::record::Record;
use crate::state::{ViewAction, ViewState};
use crate::stats::BoxStats;
use crate::store::DatasetSummary;

/// Messages sent from client to server
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Request the view for the connection's current state
    Snapshot,

    /// Request dataset-wide figures and the genre list
    Summary,

    /// Apply one interaction and receive the new view
    Update { action: ViewAction },

    /// Replace the whole view state
    Reset {
        #[serde(default)]
        state: Option<ViewState>,
    },
}

/// One table row as shown to the client
#[derive(Debug, Serialize, Clone)]
pub struct RowPayload {
    #[serde(flatten)]
    pub record: Record,
    pub anomalous: bool,
    pub anomaly_reasons: Vec<String>,
}

impl RowPayload {
    pub fn from_record(record: &Record) -> Self {
        RowPayload {
            record: record.clone(),
            anomalous: record.is_anomaly(),
            anomaly_reasons: record
                .anomaly_reasons()
                .iter()
                .map(|reason| reason.label().to_string())
                .collect(),
        }
    }
}

/// Owned scatter point
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PointPayload {
    pub rating: f64,
    pub metascore: f64,
    pub title: Option<String>,
    pub is_anomaly: bool,
    #[serde(rename = "type")]
    pub media_type: String,
    pub votes: Option<f64>,
}

impl From<&ScatterPoint<'_>> for PointPayload {
    fn from(point: &ScatterPoint<'_>) -> Self {
        PointPayload {
            rating: point.rating,
            metascore: point.metascore,
            title: point.title.map(str::to_string),
            is_anomaly: point.is_anomaly,
            media_type: point.media_type.as_str().to_string(),
            votes: point.votes,
        }
    }
}

/// Serializable snapshot of a composed view
#[derive(Debug, Serialize, Clone)]
pub struct ViewPayload {
    pub state: ViewState,
    pub rows: Vec<RowPayload>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_window: Vec<usize>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub anomaly_count: usize,
    pub rating_stats: Option<BoxStats>,
    pub scatter: Vec<PointPayload>,
}

impl ViewPayload {
    pub fn new(state: &ViewState, view: &DerivedView<'_>) -> Self {
        ViewPayload {
            state: state.clone(),
            rows: view.page_slice().iter().map(|r| RowPayload::from_record(r)).collect(),
            current_page: view.current_page,
            total_pages: view.total_pages,
            page_window: view.page_window().collect(),
            filtered_count: view.filtered_count(),
            total_count: view.total_count,
            anomaly_count: view.anomaly_count,
            rating_stats: view.rating_stats,
            scatter: view.scatter_points.iter().map(PointPayload::from).collect(),
        }
    }
}

/// Messages sent from server to client
#[derive(Debug, Serialize, Clone)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Composed view in response to Snapshot, Update or Reset
    View { view: ViewPayload },

    /// Dataset figures in response to Summary
    Summary {
        summary: DatasetSummary,
        genres: Vec<String>,
    },

    /// Error occurred
    Error { message: String },
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
        }
    }

    /// Encode for the wire; falls back to a plain error message
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"type":"Error","message":"Failed to encode message: {}"}}"#, e)
        })
    }
}
