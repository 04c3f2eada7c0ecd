use celerity_core::db::open_db_in_memory;
use celerity_core::{NoteIndex, PrefsStore, SessionPrefs, SqliteNoteRepository};

#[test]
fn defaults_match_documented_column_widths() {
    let prefs = SessionPrefs::default();
    assert_eq!(prefs.title_column_width, 250);
    assert_eq!(prefs.modified_column_width, 200);
    assert_eq!(prefs.last_open_note, None);
}

#[test]
fn partial_files_from_older_builds_fill_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{ "last_open_note": "Daily Log" }"#).unwrap();

    let prefs = PrefsStore::new(path).load().unwrap();
    assert_eq!(prefs.last_open_note.as_deref(), Some("Daily Log"));
    assert_eq!(prefs.title_column_width, 250);
    assert_eq!(prefs.modified_column_width, 200);
}

#[test]
fn last_open_note_restores_only_while_the_title_still_exists() {
    let conn = open_db_in_memory().unwrap();
    let mut index = NoteIndex::new(SqliteNoteRepository::new(&conn));
    index.load().unwrap();
    index.create("Daily Log").unwrap();

    let mut prefs = SessionPrefs::default();
    prefs.note_opened("Daily Log");

    let title = prefs.last_open_note.clone().unwrap();
    assert_eq!(index.position_of_title(&title), Some(0));

    let idx = index.position_of_title("Daily Log").unwrap();
    index.delete(idx).unwrap();
    assert_eq!(index.position_of_title(&title), None);
}

#[test]
fn saved_prefs_survive_a_second_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut prefs = SessionPrefs::default();
    prefs.note_opened("Daily Log");
    prefs.modified_column_width = 180;
    PrefsStore::new(path.clone()).save(&prefs).unwrap();

    let reloaded = PrefsStore::new(path).load().unwrap();
    assert_eq!(reloaded, prefs);
}
