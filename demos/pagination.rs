/// Pagination Example
///
/// This example demonstrates:
/// - Driving a view with ViewAction messages
/// - Page clamping for out-of-range requests
/// - Jump-to-page input handling
/// - Page resets when filters or sorting change

use mediaview::paginate::PAGE_SIZE_CHOICES;
use mediaview::{compose, Record, SortKey, ViewAction, ViewState};

fn show(label: &str, records: &[Record], state: &ViewState) -> usize {
    let view = compose(records, state);
    let titles: Vec<&str> = view.page_slice().iter().map(|r| r.title_or_empty()).collect();
    let window: Vec<String> = view.page_window().map(|p| p.to_string()).collect();

    println!("{}", label);
    println!(
        "   page {}/{} [{}] -> {}",
        view.current_page,
        view.total_pages,
        window.join(" "),
        titles.join(", ")
    );
    view.total_pages
}

fn main() {
    println!("=== MediaView Pagination Example ===\n");

    let records: Vec<Record> = (1..=23)
        .map(|i| Record {
            title: Some(format!("Film {:02}", i)),
            rating: Some((i * 7 % 23) as f64 / 2.3),
            ..Record::default()
        })
        .collect();

    println!("Page sizes offered: {:?}\n", PAGE_SIZE_CHOICES);

    let mut state = ViewState {
        page_size: 5,
        ..ViewState::default()
    };
    let mut total = show("1. First page", &records, &state);

    let actions = vec![
        ("2. Next page", ViewAction::NextPage),
        ("3. Jump to \"4.7\"", ViewAction::JumpToPage { input: "4.7".to_string() }),
        ("4. Jump to \"abc\" (ignored)", ViewAction::JumpToPage { input: "abc".to_string() }),
        ("5. Request page 99", ViewAction::SetPage { page: 99 }),
        ("6. Sort by title (resets page)", ViewAction::ToggleSort { key: SortKey::Title }),
        ("7. Page size 10", ViewAction::SetPageSize { page_size: 10 }),
        ("8. Previous page on page 1", ViewAction::PreviousPage),
    ];

    for (label, action) in actions {
        state = state.apply(action, total);
        total = show(label, &records, &state);
    }

    println!("\n=== Example Complete ===");
}
