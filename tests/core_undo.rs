use prep_tracker::{
    core::tracker::{Tracker, TrackerError},
    op::Action,
    question::QuestionDraft,
};

fn draft(title: &str, topic: &str) -> QuestionDraft {
    QuestionDraft {
        title: title.to_string(),
        topic: topic.to_string(),
        difficulty: "Easy".to_string(),
        platform: "LeetCode".to_string(),
        notes: String::new(),
    }
}

#[test]
fn add_yields_monotonic_ids() {
    let mut tracker = Tracker::new();
    let id1 = tracker.add_question(draft("Two Sum", "Array"));
    let id2 = tracker.add_question(draft("Valid Parens", "Stack"));
    let id3 = tracker.add_question(draft("LRU Cache", "Design"));

    assert_eq!((id1, id2, id3), (1, 2, 3));
}

#[test]
fn undone_add_never_reuses_its_id() {
    let mut tracker = Tracker::new();
    let id1 = tracker.add_question(draft("Two Sum", "Array"));
    assert_eq!(tracker.undo_last_action().unwrap(), Action::Add { id: id1 });
    assert!(tracker.get(id1).is_none());
    assert!(tracker.topic_ids("Array").is_empty());

    let id2 = tracker.add_question(draft("Two Sum", "Array"));
    assert!(id2 > id1);
}

#[test]
fn solve_then_undo_restores_counters() {
    let mut tracker = Tracker::new();
    let id = tracker.add_question(draft("Two Sum", "Array"));

    tracker.mark_solved(id, "15/03/2024".to_string()).unwrap();
    let rec = tracker.get(id).unwrap();
    assert!(rec.is_solved);
    assert_eq!(rec.solved_date, "15/03/2024");
    assert_eq!(tracker.aggregates().topic_count("Array"), 1);
    assert_eq!(tracker.aggregates().date_count("15/03/2024"), 1);

    tracker.undo_last_action().unwrap();
    let rec = tracker.get(id).unwrap();
    assert!(!rec.is_solved);
    assert!(rec.solved_date.is_empty());
    assert_eq!(tracker.aggregates().topic_count("Array"), 0);
    assert_eq!(tracker.aggregates().date_count("15/03/2024"), 0);
    assert!(tracker.solved_by_date().is_empty());
}

#[test]
fn solving_twice_changes_nothing() {
    let mut tracker = Tracker::new();
    let id = tracker.add_question(draft("Two Sum", "Array"));
    tracker.mark_solved(id, "01/01/2024".to_string()).unwrap();

    let err = tracker.mark_solved(id, "02/01/2024".to_string()).unwrap_err();
    assert_eq!(err, TrackerError::AlreadySolved(id));
    assert_eq!(tracker.get(id).unwrap().solved_date, "01/01/2024");
    assert_eq!(tracker.solved_by_date(), vec![("01/01/2024".to_string(), 1)]);
    assert_eq!(tracker.last_action(), Some(Action::Solve { id }));
}

#[test]
fn unknown_ids_are_rejected_without_mutation() {
    let mut tracker = Tracker::new();
    tracker.add_question(draft("Two Sum", "Array"));

    assert_eq!(tracker.mark_solved(9, "x".to_string()), Err(TrackerError::NotFound(9)));
    assert_eq!(tracker.delete_question(9), Err(TrackerError::NotFound(9)));
    assert_eq!(tracker.last_action(), Some(Action::Add { id: 1 }));
    assert_eq!(tracker.len(), 1);
}

#[test]
fn delete_then_undo_restores_record_index_and_counters() {
    let mut tracker = Tracker::new();
    let a = tracker.add_question(draft("Two Sum", "Array"));
    let b = tracker.add_question(draft("3Sum", "Array"));
    let c = tracker.add_question(draft("Max Subarray", "Array"));
    tracker.mark_solved(b, "10/10/2024".to_string()).unwrap();
    let before = tracker.get(b).unwrap().clone();

    tracker.delete_question(b).unwrap();
    assert!(tracker.get(b).is_none());
    assert_eq!(tracker.topic_ids("Array"), &[a, c]);
    assert_eq!(tracker.aggregates().topic_count("Array"), 0);
    assert_eq!(tracker.tombstone(), Some(&before));

    assert_eq!(tracker.undo_last_action().unwrap(), Action::Delete { id: b });
    assert_eq!(tracker.get(b), Some(&before));
    assert_eq!(tracker.topic_ids("Array"), &[a, c, b]);
    assert_eq!(tracker.aggregates().topic_count("Array"), 1);
    assert_eq!(tracker.aggregates().date_count("10/10/2024"), 1);
    assert!(tracker.tombstone().is_none());
}

#[test]
fn undo_depth_is_one() {
    let mut tracker = Tracker::new();
    tracker.add_question(draft("Two Sum", "Array"));
    tracker.add_question(draft("Valid Parens", "Stack"));

    tracker.undo_last_action().unwrap();
    assert_eq!(tracker.undo_last_action(), Err(TrackerError::NothingToUndo));
    assert_eq!(tracker.len(), 1);
}

#[test]
fn undo_on_empty_log_is_a_no_op() {
    let mut tracker = Tracker::new();
    assert_eq!(tracker.undo_last_action(), Err(TrackerError::NothingToUndo));
    assert!(tracker.is_empty());
    assert_eq!(tracker.next_id(), 1);
}

#[test]
fn tombstone_is_dropped_once_another_action_is_recorded() {
    let mut tracker = Tracker::new();
    let id = tracker.add_question(draft("Two Sum", "Array"));
    tracker.delete_question(id).unwrap();
    assert!(tracker.tombstone().is_some());

    tracker.add_question(draft("Valid Parens", "Stack"));
    assert!(tracker.tombstone().is_none());
}

#[test]
fn walkthrough_scenario() {
    let mut tracker = Tracker::new();
    tracker.add_question(draft("Two Sum", "Array"));
    tracker.add_question(draft("Valid Parens", "Stack"));
    tracker.mark_solved(1, "15/03/2024".to_string()).unwrap();

    let found = tracker.search_by_topic("Array").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);
    assert_eq!(found[0].solved_label(), "Yes");
    assert_eq!(tracker.solved_by_topic(), vec![("Array".to_string(), 1)]);

    tracker.delete_question(2).unwrap();
    assert!(matches!(tracker.search_by_topic("Stack"), Err(TrackerError::NoMatch { .. })));
    tracker.undo_last_action().unwrap();
    assert_eq!(tracker.topic_ids("Stack"), &[2]);
}

#[test]
fn solved_on_sorts_by_title() {
    let mut tracker = Tracker::new();
    let z = tracker.add_question(draft("Zigzag", "String"));
    let a = tracker.add_question(draft("Anagram", "String"));
    let other = tracker.add_question(draft("Other day", "String"));
    tracker.add_question(draft("Unsolved", "String"));
    tracker.mark_solved(z, "01/02/2024".to_string()).unwrap();
    tracker.mark_solved(a, "01/02/2024".to_string()).unwrap();
    tracker.mark_solved(other, "02/02/2024".to_string()).unwrap();

    let titles: Vec<&str> = tracker
        .solved_on("01/02/2024")
        .unwrap()
        .iter()
        .map(|q| q.title.as_str())
        .collect();
    assert_eq!(titles, ["Anagram", "Zigzag"]);
    assert!(matches!(tracker.solved_on("31/12/1999"), Err(TrackerError::NoMatch { .. })));
}

#[test]
fn counts_are_listed_in_key_order() {
    let mut tracker = Tracker::new();
    for (title, topic) in [("a", "Tree"), ("b", "Array"), ("c", "Graph"), ("d", "Array")] {
        let id = tracker.add_question(draft(title, topic));
        tracker.mark_solved(id, "05/05/2024".to_string()).unwrap();
    }

    assert_eq!(
        tracker.solved_by_topic(),
        vec![
            ("Array".to_string(), 2),
            ("Graph".to_string(), 1),
            ("Tree".to_string(), 1),
        ]
    );
    assert_eq!(tracker.solved_by_date(), vec![("05/05/2024".to_string(), 4)]);
}
