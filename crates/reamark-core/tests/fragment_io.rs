use reamark_core::{
    EventToMarkerString,
    fixtures::demo_event,
    persistence::{load_event, save_event, save_marker_fragment},
};

#[test]
fn event_tree_round_trips_through_json() {
    let temp_dir = tempfile::tempdir().expect("tempdir should work");
    let path = temp_dir.path().join("tree.reamark.json");

    let event = demo_event();
    save_event(&path, &event).expect("saving event tree should succeed");
    let restored = load_event(&path).expect("loading event tree should succeed");

    assert_eq!(restored, event);
    assert_eq!(
        EventToMarkerString::new().convert(&restored),
        EventToMarkerString::new().convert(&event)
    );
}

#[test]
fn saved_fragment_ends_with_single_newline() {
    let temp_dir = tempfile::tempdir().expect("tempdir should work");
    let path = temp_dir.path().join("markers.txt");

    let fragment = EventToMarkerString::new().convert(&demo_event());
    save_marker_fragment(&path, &fragment).expect("saving fragment should succeed");

    let written = std::fs::read_to_string(&path).expect("fragment should be readable");
    assert_eq!(written, format!("{fragment}\n"));
}

#[test]
fn empty_fragment_saves_as_empty_file() {
    let temp_dir = tempfile::tempdir().expect("tempdir should work");
    let path = temp_dir.path().join("empty.txt");

    save_marker_fragment(&path, "").expect("saving empty fragment should succeed");

    let written = std::fs::read_to_string(&path).expect("fragment should be readable");
    assert!(written.is_empty());
}

#[test]
fn corrupt_event_json_is_an_error_not_a_panic() {
    let temp_dir = tempfile::tempdir().expect("tempdir should work");
    let path = temp_dir.path().join("corrupt.reamark.json");
    std::fs::write(&path, b"{\"sequence\": [tru").expect("writing corrupt payload should work");

    let outcome = std::panic::catch_unwind(|| load_event(&path).is_err());
    assert_eq!(outcome.ok(), Some(true));
}
