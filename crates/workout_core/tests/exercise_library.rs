use workout_core::{DeleteOutcome, ExerciseDraft, NewExercise, WorkoutStore};

#[test]
fn seeded_library_lists_six_exercises_in_id_order() {
    let store = WorkoutStore::open_in_memory().unwrap();

    let exercises = store.list_exercises().unwrap();
    let names: Vec<&str> = exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Bench Press",
            "Squat",
            "Pull-up",
            "Shoulder Press",
            "Deadlift",
            "Bicep Curl"
        ]
    );
    assert!(exercises.windows(2).all(|pair| pair[0].id < pair[1].id));
    assert_eq!(exercises[2].equipment.as_deref(), Some("Body weight"));
}

#[test]
fn add_exercise_is_listed_and_fetchable_by_returned_id() {
    let store = WorkoutStore::open_in_memory().unwrap();

    let id = store
        .add_exercise("Lunge", "Legs", Some("Body weight"), Some("desc"))
        .unwrap();

    let listed = store.list_exercises().unwrap();
    let lunge = listed.iter().find(|e| e.name == "Lunge").unwrap();
    assert_eq!(lunge.id, id);
    assert_eq!(lunge.muscle_group, "Legs");

    let fetched = store.get_exercise(id).unwrap().unwrap();
    assert_eq!(fetched.name, "Lunge");
    assert_eq!(fetched.muscle_group, "Legs");
    assert_eq!(fetched.equipment.as_deref(), Some("Body weight"));
    assert_eq!(fetched.description.as_deref(), Some("desc"));
}

#[test]
fn duplicate_names_are_stored_separately() {
    let store = WorkoutStore::open_in_memory().unwrap();

    let first = store.add_exercise("Squat", "Legs", None, None).unwrap();
    let second = store.add_exercise("Squat", "Legs", None, None).unwrap();

    assert_ne!(first, second);
    let squats = store
        .list_exercises()
        .unwrap()
        .into_iter()
        .filter(|e| e.name == "Squat")
        .count();
    assert_eq!(squats, 3);
}

#[test]
fn store_does_not_validate_domain_values() {
    let store = WorkoutStore::open_in_memory().unwrap();

    let id = store.add_exercise("", "Not A Muscle", None, None).unwrap();
    let stored = store.get_exercise(id).unwrap().unwrap();
    assert_eq!(stored.name, "");
    assert_eq!(stored.muscle_group, "Not A Muscle");
}

#[test]
fn get_unknown_exercise_returns_none() {
    let store = WorkoutStore::open_in_memory().unwrap();
    assert!(store.get_exercise(9_999).unwrap().is_none());
}

#[test]
fn search_matches_name_muscle_group_and_equipment_case_insensitively() {
    let store = WorkoutStore::open_in_memory().unwrap();

    let by_name = store.search_exercises("press").unwrap();
    let names: Vec<&str> = by_name.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Bench Press", "Shoulder Press"]);

    let by_group = store.search_exercises("BACK").unwrap();
    assert_eq!(by_group.len(), 2);

    let by_equipment = store.search_exercises("dumbbell").unwrap();
    let names: Vec<&str> = by_equipment.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Shoulder Press", "Bicep Curl"]);
}

#[test]
fn blank_search_lists_everything_and_wildcards_are_literal() {
    let store = WorkoutStore::open_in_memory().unwrap();

    assert_eq!(store.search_exercises("  ").unwrap().len(), 6);
    assert!(store.search_exercises("%").unwrap().is_empty());

    store.add_exercise("100% Effort Sprint", "Legs", None, None).unwrap();
    let hits = store.search_exercises("100%").unwrap();
    assert_eq!(hits.len(), 1);
}

#[test]
fn update_exercise_replaces_attributes_and_reports_unknown_ids() {
    let store = WorkoutStore::open_in_memory().unwrap();
    let id = store.add_exercise("Lunge", "Legs", None, None).unwrap();

    let edited = NewExercise::new(
        "Walking Lunge",
        "Legs",
        Some("Dumbbells".to_string()),
        None,
    );
    assert!(store.update_exercise(id, &edited).unwrap());
    let stored = store.get_exercise(id).unwrap().unwrap();
    assert_eq!(stored.name, "Walking Lunge");
    assert_eq!(stored.equipment.as_deref(), Some("Dumbbells"));

    assert!(!store.update_exercise(9_999, &edited).unwrap());
}

#[test]
fn delete_unreferenced_exercise_succeeds() {
    let store = WorkoutStore::open_in_memory().unwrap();
    let id = store.add_exercise("Lunge", "Legs", None, None).unwrap();

    assert_eq!(store.delete_exercise(id).unwrap(), DeleteOutcome::Deleted);
    assert!(store.get_exercise(id).unwrap().is_none());
    assert_eq!(store.delete_exercise(id).unwrap(), DeleteOutcome::NotFound);
}

#[test]
fn delete_exercise_used_by_template_is_rejected_without_cascade() {
    let store = WorkoutStore::open_in_memory().unwrap();
    let bench_press = store.list_exercises().unwrap()[0].id;

    assert_eq!(
        store.delete_exercise(bench_press).unwrap(),
        DeleteOutcome::InUse
    );
    assert!(store.get_exercise(bench_press).unwrap().is_some());

    let template_id = store.list_workout_templates().unwrap()[0].id;
    assert_eq!(store.get_workout_exercises(template_id).unwrap().len(), 4);
}

#[test]
fn delete_exercise_referenced_only_by_a_set_log_is_kept() {
    let store = WorkoutStore::open_in_memory().unwrap();
    let id = store.add_exercise("Lunge", "Legs", None, None).unwrap();
    let session_id = store.start_workout_session(1).unwrap();
    store
        .log_exercise_set(session_id, id, 1, None, Some(12), true)
        .unwrap();

    assert_eq!(store.delete_exercise(id).unwrap(), DeleteOutcome::InUse);
    assert!(store.get_exercise(id).unwrap().is_some());
}

#[test]
fn validated_draft_feeds_insert() {
    let store = WorkoutStore::open_in_memory().unwrap();
    let draft = ExerciseDraft {
        name: " Plank ".to_string(),
        muscle_group: "Core".to_string(),
        equipment: String::new(),
        description: "Hold a straight line".to_string(),
    };

    let id = store.insert_exercise(&draft.validate().unwrap()).unwrap();
    let stored = store.get_exercise(id).unwrap().unwrap();
    assert_eq!(stored.name, "Plank");
    assert_eq!(stored.equipment, None);
}

#[test]
fn exercise_records_serialize_with_field_names() {
    let store = WorkoutStore::open_in_memory().unwrap();
    let first = store.list_exercises().unwrap().remove(0);

    let json = serde_json::to_value(&first).unwrap();
    assert_eq!(json["name"], "Bench Press");
    assert_eq!(json["muscle_group"], "Chest");
    assert_eq!(json["equipment"], "Barbell");
}
