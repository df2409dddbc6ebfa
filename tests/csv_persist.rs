use tempfile::TempDir;

use prep_tracker::{
    core::{
        store::StoreError,
        tracker::{Tracker, TrackerError},
    },
    persist::{CatalogSink, PersistError, csv::CsvCatalogSink},
    question::QuestionDraft,
    runtime::{events::TrackerEvent, session::Session},
};

fn draft(title: &str, topic: &str, notes: &str) -> QuestionDraft {
    QuestionDraft {
        title: title.to_string(),
        topic: topic.to_string(),
        difficulty: "Hard".to_string(),
        platform: "GFG".to_string(),
        notes: notes.to_string(),
    }
}

#[test]
fn writes_header_and_rows_in_id_order() {
    let mut tracker = Tracker::new();
    tracker.add_question(draft("Two Sum", "Array", "hash map"));
    let id = tracker.add_question(draft("Valid Parens", "Stack", ""));
    tracker.mark_solved(id, "15/03/2024".to_string()).unwrap();

    let mut buf = Vec::new();
    let rows = CsvCatalogSink::write_to(&mut buf, &mut tracker.questions()).unwrap();
    assert_eq!(rows, 2);
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "ID,Title,Topic,Difficulty,Platform,Notes,Solved,SolvedDate\n\
         1,Two Sum,Array,Hard,GFG,hash map,No,\n\
         2,Valid Parens,Stack,Hard,GFG,,Yes,15/03/2024\n"
    );
}

#[test]
fn commas_and_quotes_survive_a_reload() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("tracker_data.csv");

    let mut tracker = Tracker::new();
    tracker.add_question(draft("Merge \"k\" lists, fast", "Heap", "use a min-heap, then pop"));
    let mut sink = CsvCatalogSink::new(&path);
    sink.write_catalog(&mut tracker.questions()).expect("write");

    let loaded = sink.load_catalog().expect("load");
    assert_eq!(loaded, tracker.questions().cloned().collect::<Vec<_>>());
}

#[test]
fn accepts_the_always_quoted_legacy_layout() {
    let legacy = "ID,Title,Topic,Difficulty,Platform,Notes,Solved,SolvedDate\n\
                  3,\"Two Sum\",Array,Easy,LeetCode,\"classic\",Yes,01/02/2024\n\
                  7,\"LRU\",Design,Medium,LeetCode,\"\",No,\n";
    let loaded = CsvCatalogSink::read_from(legacy.as_bytes()).expect("parse");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, 3);
    assert_eq!(loaded[0].title, "Two Sum");
    assert!(loaded[0].is_solved);
    assert_eq!(loaded[0].solved_date, "01/02/2024");
    assert!(!loaded[1].is_solved);

    let tracker = Tracker::from_records(loaded).expect("rebuild");
    assert_eq!(tracker.next_id(), 8);
    assert_eq!(tracker.solved_by_topic(), vec![("Array".to_string(), 1)]);
    assert_eq!(tracker.topic_ids("Design"), &[7]);
}

#[test]
fn bad_rows_name_their_line() {
    let bad = "ID,Title,Topic,Difficulty,Platform,Notes,Solved,SolvedDate\n\
               x,Two Sum,Array,Easy,LeetCode,,No,\n";
    match CsvCatalogSink::read_from(bad.as_bytes()) {
        Err(PersistError::Parse { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.contains("invalid id"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn short_rows_name_their_line() {
    let short = "ID,Title,Topic,Difficulty,Platform,Notes,Solved,SolvedDate\n\
                 1,Two Sum,Array,Easy,LeetCode,No,\n";
    match CsvCatalogSink::read_from(short.as_bytes()) {
        Err(PersistError::Parse { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.contains("expected 8 fields, found 7"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn duplicate_ids_are_rejected_on_rebuild() {
    let rows = "ID,Title,Topic,Difficulty,Platform,Notes,Solved,SolvedDate\n\
                4,Two Sum,Array,Easy,LeetCode,,No,\n\
                4,3Sum,Array,Medium,LeetCode,,No,\n";
    let loaded = CsvCatalogSink::read_from(rows.as_bytes()).expect("parse");
    assert_eq!(
        Tracker::from_records(loaded).unwrap_err(),
        TrackerError::Store(StoreError::AlreadyExists(4))
    );
}

#[test]
fn missing_file_is_an_empty_catalog() {
    let tmp = TempDir::new().expect("tmp");
    let sink = CsvCatalogSink::new(tmp.path().join("absent.csv"));
    assert!(sink.load_catalog().expect("load").is_empty());
}

#[test]
fn session_writes_through_and_reloads() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("tracker_data.csv");

    let mut session = Session::load(Box::new(CsvCatalogSink::new(&path))).expect("load");
    let added = session.add_question(draft("Two Sum", "Array", ""));
    assert_eq!(added.event, TrackerEvent::Added { id: 1 });
    assert!(added.persist_error.is_none());
    session.add_question(draft("Valid Parens", "Stack", ""));
    session.mark_solved(1, "15/03/2024".to_string()).expect("solve");
    session.delete_question(2).expect("delete");
    drop(session);

    let reopened = Session::load(Box::new(CsvCatalogSink::new(&path))).expect("reopen");
    let tracker = reopened.tracker();
    assert_eq!(tracker.len(), 1);
    assert!(tracker.get(1).unwrap().is_solved);
    assert_eq!(tracker.solved_by_date(), vec![("15/03/2024".to_string(), 1)]);
    assert_eq!(tracker.next_id(), 2);
    assert!(tracker.last_action().is_none());
}

#[test]
fn write_failure_is_reported_but_the_change_stands() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("missing-dir").join("tracker_data.csv");

    let mut session = Session::new(Some(Box::new(CsvCatalogSink::new(&path))));
    let added = session.add_question(draft("Two Sum", "Array", ""));
    assert!(matches!(added.persist_error, Some(PersistError::Io(_))));
    assert_eq!(session.tracker().len(), 1);
    assert!(session.save().is_err());
}
