/// Genre vocabulary for filter controls.
///
/// Distinct genre tokens across a dataset, trimmed and with blanks dropped,
/// sorted for display and led by the `"all"` sentinel.
///
/// # Examples
///
/// ```
/// use mediaview::{GenreVocabulary, Record};
///
/// let records = vec![
///     Record { genres: vec!["Drama".into(), " Drama ".into()], ..Record::default() },
///     Record { genres: vec!["Comedy".into()], ..Record::default() },
/// ];
///
/// let vocabulary = GenreVocabulary::from_records(&records);
/// assert_eq!(vocabulary.options(), ["all", "Comedy", "Drama"]);
/// ```

use crate::record::Record;
use crate::sort::collate;
use crate::state::ALL_GENRES;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GenreVocabulary {
    /// `"all"` followed by the sorted genres
    options: Vec<String>,
}

impl GenreVocabulary {
    pub fn from_records(records: &[Record]) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        for record in records {
            for genre in &record.genres {
                let genre = genre.trim();
                if !genre.is_empty() {
                    seen.insert(genre);
                }
            }
        }

        let mut genres: Vec<&str> = seen.into_iter().collect();
        genres.sort_by(|a, b| collate(a, b));

        let mut options = Vec::with_capacity(genres.len() + 1);
        options.push(ALL_GENRES.to_string());
        options.extend(genres.into_iter().map(str::to_string));

        GenreVocabulary { options }
    }

    /// All options, sentinel first
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The genres without the sentinel
    pub fn genres(&self) -> &[String] {
        &self.options[1..]
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.genres().iter().any(|g| g == genre)
    }

    /// Number of distinct genres, not counting the sentinel
    pub fn len(&self) -> usize {
        self.options.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
