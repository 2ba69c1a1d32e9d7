/// MediaView View Composer
///
/// Turns a record snapshot and a view state into the complete derived view:
/// filtered and sorted records, the visible page, rating statistics and the
/// rating/metascore scatter points.
///
/// Composition is pure. The derived view borrows the records it lists and is
/// recomputed from scratch whenever the records or the view state change.
///
/// # Examples
///
/// ```
/// use mediaview::{compose, Record, SortKey, ViewAction, ViewState};
///
/// let records: Vec<Record> = (1..=23)
///     .map(|i| Record {
///         title: Some(format!("Movie {}", i)),
///         rating: Some(i as f64 / 3.0),
///         ..Record::default()
///     })
///     .collect();
///
/// let state = ViewState { page: 99, ..ViewState::default() };
/// let view = compose(&records, &state);
///
/// assert_eq!(view.total_pages, 3);
/// assert_eq!(view.current_page, 3);
/// assert_eq!(view.page_slice().len(), 3);
/// assert_eq!(view.rating_stats.unwrap().count, 23);
///
/// // The caller derives the next state and recomposes
/// let next = state.apply(ViewAction::ToggleSort { key: SortKey::Title }, view.total_pages);
/// let view = compose(&records, &next);
/// assert_eq!(view.current_page, 1);
/// assert_eq!(view.page_slice()[0].title.as_deref(), Some("Movie 1"));
/// ```

use crate::filter::RecordFilter;
use crate::paginate::{page_range, page_window};
use crate::record::{MediaType, Record};
use crate::sort::RecordComparator;
use crate::state::ViewState;
use crate::stats::BoxStats;
use log::debug;
use serde::Serialize;
use std::ops::{Range, RangeInclusive};

/// One point of the rating vs metascore scatter chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint<'a> {
    pub rating: f64,
    pub metascore: f64,
    pub title: Option<&'a str>,
    pub is_anomaly: bool,
    #[serde(rename = "type")]
    pub media_type: &'a MediaType,
    pub votes: Option<f64>,
}

impl<'a> ScatterPoint<'a> {
    /// Point for a record with both rating and metascore, else `None`
    pub fn from_record(record: &'a Record) -> Option<Self> {
        Some(ScatterPoint {
            rating: record.rating()?,
            metascore: record.metascore()?,
            title: record.title.as_deref(),
            is_anomaly: record.is_anomaly(),
            media_type: &record.media_type,
            votes: record.votes(),
        })
    }
}

/// Everything the presentation layer needs for one view state
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a> {
    /// Records passing the filter, in dataset order
    pub filtered: Vec<&'a Record>,
    /// `filtered` in sort order
    pub sorted: Vec<&'a Record>,
    /// Clamped 1-based page
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    /// Box statistics of the filtered ratings; `None` if no rating survives
    pub rating_stats: Option<BoxStats>,
    /// Anomalous records among `filtered`
    pub anomaly_count: usize,
    pub scatter_points: Vec<ScatterPoint<'a>>,
    /// Size of the whole dataset
    pub total_count: usize,
    page_range: Range<usize>,
}

impl<'a> DerivedView<'a> {
    /// Records on the current page
    pub fn page_slice(&self) -> &[&'a Record] {
        &self.sorted[self.page_range.clone()]
    }

    /// 0-based position of the first row of the page within `sorted`
    pub fn page_offset(&self) -> usize {
        self.page_range.start
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Numbered page buttons around the current page
    pub fn page_window(&self) -> RangeInclusive<usize> {
        page_window(self.current_page, self.total_pages)
    }

    /// Scatter points split into (normal, anomalous) series
    pub fn scatter_series(&self) -> (Vec<&ScatterPoint<'a>>, Vec<&ScatterPoint<'a>>) {
        self.scatter_points.iter().partition(|p| !p.is_anomaly)
    }
}

/// Compose the derived view of `records` under `state`
pub fn compose<'a>(records: &'a [Record], state: &ViewState) -> DerivedView<'a> {
    let filter = RecordFilter::from_state(state);
    let filtered = filter.apply(records);

    let mut sorted = filtered.clone();
    RecordComparator::new(state.sort_key, state.sort_dir).sort(&mut sorted);

    // Aggregates do not depend on order, so they come from `filtered`
    let rating_stats = BoxStats::compute(filtered.iter().filter_map(|r| r.rating()));
    let anomaly_count = filtered.iter().filter(|r| r.is_anomaly()).count();
    let scatter_points: Vec<ScatterPoint<'a>> = filtered
        .iter()
        .copied()
        .filter_map(ScatterPoint::from_record)
        .collect();

    let page_size = state.page_size.max(1);
    let (page_range, current_page, total_pages) = page_range(sorted.len(), state.page, page_size);

    debug!(
        "Composed view: {}/{} records, page {}/{}, sort {} {:?}",
        filtered.len(),
        records.len(),
        current_page,
        total_pages,
        state.sort_key,
        state.sort_dir
    );

    DerivedView {
        filtered,
        sorted,
        current_page,
        total_pages,
        page_size,
        rating_stats,
        anomaly_count,
        scatter_points,
        total_count: records.len(),
        page_range,
    }
}
