use celerity_core::db::open_db_in_memory;
use celerity_core::{
    IndexError, NoteIndex, NoteView, SortKey, SortOrder, SqliteNoteRepository, TUTORIAL_TITLE,
};
use rusqlite::Connection;

fn loaded_index(conn: &Connection) -> NoteIndex<SqliteNoteRepository<'_>> {
    let mut index = NoteIndex::new(SqliteNoteRepository::new(conn));
    index.load().unwrap();
    index
}

#[test]
fn create_persists_one_note_with_empty_content() {
    let conn = open_db_in_memory().unwrap();
    let mut index = loaded_index(&conn);

    let row = index.create("Daily Log").unwrap();
    assert_eq!(row, 0);

    let reloaded = loaded_index(&conn);
    let matching: Vec<_> = reloaded
        .notes()
        .iter()
        .filter(|note| note.title == "Daily Log")
        .collect();
    assert_eq!(matching.len(), 1);
    assert!(matching[0].content.is_empty());
}

#[test]
fn create_trims_and_rejects_blank_or_duplicate_titles() {
    let conn = open_db_in_memory().unwrap();
    let mut index = loaded_index(&conn);

    assert!(matches!(index.create("   "), Err(IndexError::EmptyTitle)));

    index.create("  Daily Log  ").unwrap();
    assert_eq!(index.get(0).unwrap().title, "Daily Log");

    let err = index.create("daily log").unwrap_err();
    assert!(matches!(err, IndexError::DuplicateTitle(_)));
    assert_eq!(index.len(), 1);
    assert_eq!(index.position_by_title_ci("DAILY LOG"), Some(0));
}

#[test]
fn rename_collision_leaves_both_titles_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut index = loaded_index(&conn);
    index.create("First").unwrap();
    index.create("Second").unwrap();

    let second = index.position_of_title("Second").unwrap();
    let err = index.rename(second, "FIRST").unwrap_err();
    assert!(matches!(err, IndexError::DuplicateTitle(_)));

    let titles: Vec<_> = index.notes().iter().map(|note| note.title.clone()).collect();
    assert!(titles.contains(&"First".to_string()));
    assert!(titles.contains(&"Second".to_string()));

    let reloaded = loaded_index(&conn);
    assert!(reloaded.contains_title("First"));
    assert!(reloaded.contains_title("Second"));
}

#[test]
fn rename_refreshes_title_everywhere() {
    let conn = open_db_in_memory().unwrap();
    let mut index = loaded_index(&conn);
    index.create("Draft").unwrap();

    index.rename(0, "Final").unwrap();
    assert_eq!(index.get(0).unwrap().title, "Final");

    let reloaded = loaded_index(&conn);
    assert!(reloaded.contains_title("Final"));
    assert!(!reloaded.contains_title("Draft"));
}

#[test]
fn filter_matches_title_and_content_case_insensitively() {
    let conn = open_db_in_memory().unwrap();
    let mut index = loaded_index(&conn);
    index.create("Groceries").unwrap();
    index.create("Meeting Notes").unwrap();
    let groceries = index.position_of_title("Groceries").unwrap();
    index.update_content(groceries, "buy APPLES and bread").unwrap();

    assert_eq!(index.filter("").len(), 2);
    assert_eq!(index.filter("meeting"), vec![index.position_of_title("Meeting Notes").unwrap()]);
    assert_eq!(index.filter("apples"), vec![index.position_of_title("Groceries").unwrap()]);
    assert!(index.filter("zebra").is_empty());
}

#[test]
fn sort_semantics_follow_header_clicks() {
    let conn = open_db_in_memory().unwrap();
    let mut index = loaded_index(&conn);
    index.create("banana").unwrap();
    index.create("Apple").unwrap();
    index.create("cherry").unwrap();

    let mut view = NoteView::default();
    index.refresh_view(&mut view);

    // Default: modified descending = creation order, newest first.
    let titles = |index: &NoteIndex<SqliteNoteRepository<'_>>, view: &NoteView| -> Vec<String> {
        view.rows
            .iter()
            .map(|&row| index.get(row).unwrap().title.clone())
            .collect()
    };
    assert_eq!(view.sort_key, SortKey::Modified);
    assert_eq!(view.sort_order, SortOrder::Descending);

    // Selecting Title resets to ascending, case-insensitively.
    index.select_column(&mut view, SortKey::Title);
    assert_eq!(titles(&index, &view), vec!["Apple", "banana", "cherry"]);

    // Selecting the active column again flips the order.
    index.select_column(&mut view, SortKey::Title);
    assert_eq!(titles(&index, &view), vec!["cherry", "banana", "Apple"]);

    // Moving back to Modified resets to descending.
    index.select_column(&mut view, SortKey::Modified);
    assert_eq!(view.sort_order, SortOrder::Descending);
}

#[test]
fn filtered_view_is_sorted_without_touching_canonical_order() {
    let conn = open_db_in_memory().unwrap();
    let mut index = loaded_index(&conn);
    index.create("banana split").unwrap();
    index.create("apple pie").unwrap();

    let canonical: Vec<_> = index.notes().iter().map(|note| note.title.clone()).collect();

    let mut view = NoteView::default();
    view.query = "p".to_string();
    view.select_column(SortKey::Title);
    index.refresh_view(&mut view);

    assert_eq!(view.rows.len(), 2);
    let after: Vec<_> = index.notes().iter().map(|note| note.title.clone()).collect();
    assert_eq!(canonical, after);
}

#[test]
fn update_content_skips_writes_when_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut index = loaded_index(&conn);
    index.create("Daily Log").unwrap();

    assert!(index.update_content(0, "entry").unwrap());
    let stamp = index.get(0).unwrap().modified;

    assert!(!index.update_content(0, "entry").unwrap());
    assert_eq!(index.get(0).unwrap().modified, stamp);
}

#[test]
fn delete_removes_note_from_store_and_all_future_filters() {
    let conn = open_db_in_memory().unwrap();
    let mut index = loaded_index(&conn);
    index.create("Keep").unwrap();
    index.create("Drop").unwrap();

    let drop_idx = index.position_of_title("Drop").unwrap();
    index.delete(drop_idx).unwrap();

    assert!(!index.contains_title("Drop"));
    assert!(index.filter("drop").is_empty());

    let reloaded = loaded_index(&conn);
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.contains_title("Keep"));
}

#[test]
fn delete_out_of_bounds_reports_no_such_note() {
    let conn = open_db_in_memory().unwrap();
    let mut index = loaded_index(&conn);

    let err = index.delete(7).unwrap_err();
    assert!(matches!(err, IndexError::NoSuchNote(7)));
}

#[test]
fn tutorial_note_is_created_idempotently() {
    let conn = open_db_in_memory().unwrap();
    let mut index = loaded_index(&conn);

    let first = index.create_tutorial().unwrap();
    assert_eq!(first, 0);
    assert!(index.contains_title(TUTORIAL_TITLE));
    let original_id = index.get(first).unwrap().id;

    let second = index.create_tutorial().unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.get(second).unwrap().id, original_id);

    let reloaded = loaded_index(&conn);
    assert_eq!(reloaded.len(), 1);
}
