/// Dashboard Example
///
/// This example demonstrates:
/// - Loading a dataset file into a RecordStore
/// - Reading the dataset summary and genre vocabulary
/// - Composing a filtered, sorted view with rating statistics
/// - Splitting the scatter chart into normal and anomalous series
///
/// Run with an optional dataset path:
/// `cargo run --example dashboard -- data/movies_final.json`

use mediaview::{compose, GenreFilter, RecordStore, SortKey, ViewAction, ViewState};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/movies_final.json".to_string());

    println!("=== MediaView Dashboard Example ===\n");

    // 1. Load the dataset
    println!("1. Loading {}...", path);
    let store = match RecordStore::load(&path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("   {}", e);
            std::process::exit(1);
        }
    };
    println!("   Loaded {} records\n", store.len());

    // 2. Dataset summary
    let summary = store.summary();
    println!("2. Summary");
    println!("   Movies: {}", summary.count_of("movie"));
    println!("   TV: {}", summary.count_of("tv"));
    println!("   Anomalies: {}", summary.anomaly_count);
    match summary.mean_rating {
        Some(mean) => println!("   Mean rating: {:.2}\n", mean),
        None => println!("   Mean rating: n/a\n"),
    }

    let vocabulary = store.genre_vocabulary();
    println!("   Genres: {}\n", vocabulary.options().join(", "));

    // 3. Default view
    println!("3. Top rated");
    let state = ViewState::default();
    let view = compose(store.records(), &state);
    for (i, record) in view.page_slice().iter().enumerate() {
        println!(
            "   {:>2}. {:<40} {:>4}",
            view.page_offset() + i + 1,
            record.title_or_empty(),
            record.rating().map(|r| format!("{:.1}", r)).unwrap_or_else(|| "-".to_string())
        );
    }
    println!();

    // 4. Drill into the first real genre, anomalies only
    if let Some(genre) = vocabulary.genres().first() {
        println!("4. Anomalies in {}", genre);
        let state = ViewState {
            genre: GenreFilter::from(genre.as_str()),
            ..state
        }
        .apply(ViewAction::SetOnlyAnomalies { enabled: true }, view.total_pages);
        let view = compose(store.records(), &state);

        for record in view.page_slice() {
            let reasons: Vec<&str> = record.anomaly_reasons().iter().map(|r| r.label()).collect();
            println!("   {} ({})", record.title_or_empty(), reasons.join("; "));
        }
        println!("   {} of {} records match\n", view.filtered_count(), view.total_count);
    }

    // 5. Rating distribution
    println!("5. Rating distribution");
    let view = compose(store.records(), &ViewState::default());
    match view.rating_stats {
        Some(stats) => {
            println!("   q1={:.2} median={:.2} q3={:.2}", stats.q1, stats.median, stats.q3);
            println!("   fences=[{:.2}, {:.2}] n={}", stats.lower, stats.upper, stats.count);
        }
        None => println!("   no ratings"),
    }

    let (normal, anomalous) = view.scatter_series();
    println!("   Scatter: {} normal, {} anomalous points\n", normal.len(), anomalous.len());

    // 6. Sort by title instead
    println!("6. Sorted by title");
    let state = ViewState::default().apply(ViewAction::ToggleSort { key: SortKey::Title }, view.total_pages);
    let view = compose(store.records(), &state);
    for record in view.page_slice().iter().take(5) {
        println!("   {}", record.title_or_empty());
    }

    println!("\n=== Example Complete ===");
}
