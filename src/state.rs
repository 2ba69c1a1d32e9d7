/// MediaView View State
///
/// The view state is an immutable value describing what the user is looking
/// at. User interactions are expressed as `ViewAction`s; `ViewState::apply`
/// produces the next state, including the page reset rules.
///
/// # Examples
///
/// ```
/// use mediaview::{SortDirection, SortKey, ViewAction, ViewState};
///
/// let state = ViewState::default().apply(ViewAction::SetPage { page: 4 }, 10);
/// assert_eq!(state.page, 4);
///
/// // Changing the sort goes back to the first page
/// let state = state.apply(ViewAction::ToggleSort { key: SortKey::Title }, 10);
/// assert_eq!(state.page, 1);
/// assert_eq!(state.sort_key, SortKey::Title);
/// assert_eq!(state.sort_dir, SortDirection::Ascending);
/// ```

use crate::paginate::{clamp_page, parse_jump_target};
use crate::record::MediaType;
use crate::sort::{SortDirection, SortKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel genre value meaning "no genre filter"
pub const ALL_GENRES: &str = "all";

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Genre filter: everything, or records carrying one exact genre token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GenreFilter {
    #[default]
    All,
    Genre(String),
}

impl From<&str> for GenreFilter {
    fn from(value: &str) -> Self {
        if value == ALL_GENRES {
            GenreFilter::All
        } else {
            GenreFilter::Genre(value.to_string())
        }
    }
}

impl From<String> for GenreFilter {
    fn from(value: String) -> Self {
        if value == ALL_GENRES {
            GenreFilter::All
        } else {
            GenreFilter::Genre(value)
        }
    }
}

impl From<GenreFilter> for String {
    fn from(value: GenreFilter) -> Self {
        match value {
            GenreFilter::All => ALL_GENRES.to_string(),
            GenreFilter::Genre(g) => g,
        }
    }
}

/// Media type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Movie,
    Tv,
}

impl TypeFilter {
    pub fn accepts(&self, media_type: &MediaType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Movie => *media_type == MediaType::Movie,
            TypeFilter::Tv => *media_type == MediaType::Tv,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("all"),
            TypeFilter::Movie => f.write_str("movie"),
            TypeFilter::Tv => f.write_str("tv"),
        }
    }
}

/// Everything that determines the current view of the dataset.
///
/// Missing fields take their defaults when deserialized, so partial query
/// strings like `?genre=Drama&page=2` are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub query: String,
    pub genre: GenreFilter,
    #[serde(rename = "type")]
    pub media_type: TypeFilter,
    pub only_anomalies: bool,
    pub sort_key: SortKey,
    pub sort_dir: SortDirection,
    /// Requested 1-based page; clamped against the data when composing
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            query: String::new(),
            genre: GenreFilter::All,
            media_type: TypeFilter::All,
            only_anomalies: false,
            sort_key: SortKey::Rating,
            sort_dir: SortDirection::Descending,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A single user interaction with the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewAction {
    SetQuery { query: String },
    SetGenre { genre: GenreFilter },
    SetType { media_type: TypeFilter },
    SetOnlyAnomalies { enabled: bool },
    SetSort { key: SortKey, direction: SortDirection },
    /// Column header click: ascending on a new key, flips asc -> desc on
    /// the active key
    ToggleSort { key: SortKey },
    SetPageSize { page_size: usize },
    SetPage { page: usize },
    NextPage,
    PreviousPage,
    /// Free-form page number typed by the user
    JumpToPage { input: String },
}

impl ViewState {
    /// Produce the state following `action`.
    ///
    /// `total_pages` is the page count of the view composed from the current
    /// state; it bounds relative navigation and jumps. Any filter, sort or
    /// page-size change resets the page to 1. Invalid jump input leaves the
    /// state unchanged.
    pub fn apply(&self, action: ViewAction, total_pages: usize) -> ViewState {
        let mut next = self.clone();
        let current = clamp_page(self.page, total_pages);

        match action {
            ViewAction::SetQuery { query } => {
                next.query = query;
                next.page = 1;
            }
            ViewAction::SetGenre { genre } => {
                next.genre = genre;
                next.page = 1;
            }
            ViewAction::SetType { media_type } => {
                next.media_type = media_type;
                next.page = 1;
            }
            ViewAction::SetOnlyAnomalies { enabled } => {
                next.only_anomalies = enabled;
                next.page = 1;
            }
            ViewAction::SetSort { key, direction } => {
                next.sort_key = key;
                next.sort_dir = direction;
                next.page = 1;
            }
            ViewAction::ToggleSort { key } => {
                next.sort_dir = if self.sort_key == key && self.sort_dir == SortDirection::Ascending {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                next.sort_key = key;
                next.page = 1;
            }
            ViewAction::SetPageSize { page_size } => {
                next.page_size = page_size.max(1);
                next.page = 1;
            }
            ViewAction::SetPage { page } => {
                next.page = page.max(1);
            }
            ViewAction::NextPage => {
                next.page = clamp_page(current + 1, total_pages);
            }
            ViewAction::PreviousPage => {
                next.page = clamp_page(current.saturating_sub(1), total_pages);
            }
            ViewAction::JumpToPage { input } => {
                if let Some(target) = parse_jump_target(&input, total_pages) {
                    next.page = target;
                }
            }
        }

        next
    }

    /// True when the view is not narrowed by any filter
    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty()
            && self.genre == GenreFilter::All
            && self.media_type == TypeFilter::All
            && !self.only_anomalies
    }
}
