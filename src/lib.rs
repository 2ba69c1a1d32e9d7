/// MediaView - Analytical View Engine for Media Datasets
///
/// Turns a flat collection of movie and TV records into an interactive
/// analytical view: free-text search, genre and type filters, an anomaly-only
/// toggle, multi-key sorting with missing values last, clamped pagination and
/// box-plot statistics of the ratings.
///
/// The engine is pure. `compose` maps a record slice and a `ViewState` to a
/// `DerivedView`, and `ViewState::apply` produces the next state for a user
/// interaction. The optional `server` feature exposes the engine over HTTP
/// and WebSocket.

pub mod record;
pub mod stats;
pub mod sort;
pub mod filter;
pub mod paginate;
pub mod state;
pub mod vocabulary;
pub mod store;
pub mod composer;
pub mod error;
pub mod config;

pub use record::{AnomalyReason, MediaType, Record};
pub use stats::BoxStats;
pub use sort::{compare_maybe_number, RecordComparator, SortDirection, SortKey};
pub use filter::RecordFilter;
pub use paginate::{clamp_page, page_window, paginate, parse_jump_target, total_pages, Page};
pub use state::{GenreFilter, TypeFilter, ViewAction, ViewState};
pub use vocabulary::GenreVocabulary;
pub use store::{DatasetSummary, RecordStore};
pub use composer::{compose, DerivedView, ScatterPoint};
pub use error::{ConfigError, LoadError};
pub use config::ServerConfig;

// WebSocket server modules - only when server feature is enabled
#[cfg(feature = "server")]
pub mod messages;
#[cfg(feature = "server")]
pub mod websocket;
#[cfg(feature = "server")]
pub mod server;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use serde_json::json;

    fn dataset() -> RecordStore {
        RecordStore::from_json_value(&json!({
            "records": [
                { "title": "Heat", "year": 1995, "type": "movie", "rating": 8.3, "metascore": 76,
                  "votes": 700000, "genres": ["Crime", " Drama "] },
                { "title": "Cats", "year": 2019, "type": "movie", "rating": 2.8, "metascore": 32,
                  "genres": ["Comedy"], "anomaly_rating_high_meta_low": true },
                { "title": "The Wire", "year": 2002, "type": "tv", "rating": 9.3,
                  "genres": ["Drama", "Crime"] },
                { "title": "Shoah", "year": 1985, "type": "movie", "rating": 8.7, "duration_min": 566,
                  "genres": ["Documentary"], "anomaly_duration_outlier": true },
                { "title": "Untitled", "type": "movie", "rating": null }
            ]
        }))
    }

    #[test]
    fn test_complete_workflow() {
        let store = dataset();
        let vocabulary = store.genre_vocabulary();
        assert_eq!(vocabulary.options(), ["all", "Comedy", "Crime", "Documentary", "Drama"]);

        // Start from the default view: rating desc, missing ratings last
        let state = ViewState::default();
        let view = compose(store.records(), &state);
        let titles: Vec<&str> = view.page_slice().iter().map(|r| r.title_or_empty()).collect();
        assert_eq!(titles, ["The Wire", "Shoah", "Heat", "Cats", "Untitled"]);
        assert_eq!(view.anomaly_count, 2);

        // Narrow to anomalous movies
        let state = state.apply(ViewAction::SetOnlyAnomalies { enabled: true }, view.total_pages);
        let state = state.apply(ViewAction::SetType { media_type: TypeFilter::Movie }, 1);
        let view = compose(store.records(), &state);
        let titles: Vec<&str> = view.sorted.iter().map(|r| r.title_or_empty()).collect();
        assert_eq!(titles, ["Shoah", "Cats"]);

        let stats = view.rating_stats.unwrap();
        assert_eq!(stats.count, 2);
        assert!((stats.median - 5.75).abs() < 1e-9);

        let reasons: Vec<&str> = view.sorted[0].anomaly_reasons().iter().map(|r| r.label()).collect();
        assert_eq!(reasons, ["Duration outlier (IQR)"]);

        // Search matches the year as well as the title
        let state = ViewState {
            query: "2019".to_string(),
            ..ViewState::default()
        };
        let view = compose(store.records(), &state);
        assert_eq!(view.filtered_count(), 1);
        assert_eq!(view.sorted[0].title.as_deref(), Some("Cats"));
    }

    #[test]
    fn test_box_stats_of_one_to_ten() {
        let stats = BoxStats::compute((1..=10).map(f64::from)).unwrap();
        assert!((stats.q1 - 3.25).abs() < 1e-9);
        assert!((stats.median - 5.5).abs() < 1e-9);
        assert!((stats.q3 - 7.75).abs() < 1e-9);
        assert!((stats.iqr - 4.5).abs() < 1e-9);
        assert!((stats.lower - -3.5).abs() < 1e-9);
        assert!((stats.upper - 14.5).abs() < 1e-9);
    }

    #[test]
    fn test_box_stats_without_numbers() {
        assert_eq!(BoxStats::compute(Vec::<f64>::new()), None);
        assert_eq!(BoxStats::from_json_values(&[json!(f64::NAN), json!("x")]), None);
    }

    #[test]
    fn test_missing_ratings_sort_last_both_ways() {
        let records: Vec<Record> = [Some(7.0), None, Some(3.0)]
            .iter()
            .map(|rating| Record {
                rating: *rating,
                ..Record::default()
            })
            .collect();

        for (direction, expected) in [
            (SortDirection::Descending, [Some(7.0), Some(3.0), None]),
            (SortDirection::Ascending, [Some(3.0), Some(7.0), None]),
        ] {
            let state = ViewState {
                sort_dir: direction,
                ..ViewState::default()
            };
            let view = compose(&records, &state);
            let ratings: Vec<Option<f64>> = view.sorted.iter().map(|r| r.rating).collect();
            assert_eq!(ratings, expected);
        }
    }

    #[test]
    fn test_pagination_clamps_to_last_page() {
        let records: Vec<Record> = (0..23).map(|_| Record::default()).collect();
        let state = ViewState {
            page: 99,
            page_size: 10,
            ..ViewState::default()
        };
        let view = compose(&records, &state);
        assert_eq!(view.current_page, 3);
        assert_eq!(view.page_slice().len(), 3);
    }

    #[test]
    fn test_any_flag_makes_a_record_anomalous() {
        let flagged = Record::from_json(&json!({ "anomaly_duration_outlier": true }));
        assert!(flagged.is_anomaly());

        let clean = Record::from_json(&json!({ "title": "Plain", "is_anomaly": false }));
        assert!(!clean.is_anomaly());
    }

    #[test]
    fn test_compose_twice_is_identical() {
        let store = dataset();
        let state = ViewState {
            genre: GenreFilter::from("Drama"),
            sort_key: SortKey::Title,
            sort_dir: SortDirection::Ascending,
            ..ViewState::default()
        };
        assert_eq!(compose(store.records(), &state), compose(store.records(), &state));
    }

    #[test]
    fn test_genre_vocabulary_trims_and_dedups() {
        let records: Vec<Record> = [vec!["Drama"], vec![" Drama "], vec!["Comedy"]]
            .into_iter()
            .map(|genres| Record {
                genres: genres.into_iter().map(String::from).collect(),
                ..Record::default()
            })
            .collect();
        assert_eq!(GenreVocabulary::from_records(&records).options(), ["all", "Comedy", "Drama"]);
    }
}
