extern crate funnelbot;

use funnelbot::engine::geometry::Point;
use funnelbot::strategy::breaches::BreachLog;

fn action_frame(breaches: &str) -> String {
    format!(
        concat!(
            "{{\"turnInfo\":[1,4,12,122],",
            "\"p1Stats\":[28.0,4.0,6.2,70],\"p2Stats\":[30.0,12.0,8.1,70],",
            "\"p1Units\":[[],[],[],[],[],[],[],[]],\"p2Units\":[[],[],[],[],[],[],[],[]],",
            "\"events\":{{\"attack\":[],\"damage\":[],\"death\":[],\"melee\":[],",
            "\"move\":[],\"selfDestruct\":[],\"shield\":[],\"spawn\":[],",
            "\"breach\":{}}}}}"
        ),
        breaches
    )
}

#[test]
fn records_only_enemy_breaches() {
    let mut log = BreachLog::new();
    let frame = action_frame("[[[14,27],1.0,3,\"23\",1],[[13,0],1.0,3,\"57\",2]]");

    log.record_from_frame(&frame).expect("action frame did not parse");

    assert_eq!(log.len(), 1);
    assert_eq!(log.cells(), &[Point::new(13, 0)]);
}

#[test]
fn unknown_owner_codes_count_as_the_enemy() {
    let mut log = BreachLog::new();
    let frame = action_frame("[[[12,1],1.0,4,\"88\",3]]");

    log.record_from_frame(&frame).expect("action frame did not parse");

    assert_eq!(log.len(), 1);
}

#[test]
fn breaches_accumulate_across_frames_in_order() {
    let mut log = BreachLog::new();

    log.record_from_frame(&action_frame("[[[13,0],1.0,3,\"5\",2]]"))
        .expect("first frame did not parse");
    log.record_from_frame(&action_frame("[[[12,1],1.0,3,\"9\",2],[[13,0],1.0,3,\"11\",2]]"))
        .expect("second frame did not parse");

    assert_eq!(log.cells(), &[Point::new(13, 0), Point::new(12, 1), Point::new(13, 0)]);
}

#[test]
fn an_empty_event_list_changes_nothing() {
    let mut log = BreachLog::new();

    log.record_from_frame(&action_frame("[]")).expect("action frame did not parse");

    assert!(log.is_empty());
}

#[test]
fn malformed_frames_leave_the_log_unchanged() {
    let mut log = BreachLog::new();
    log.record_from_frame(&action_frame("[[[13,0],1.0,3,\"5\",2]]"))
        .expect("valid frame did not parse");

    // Breach entries missing the owner field.
    assert!(log.record_from_frame(&action_frame("[[[1,2],3.0]]")).is_err());
    assert!(log.record_from_frame("{\"events\":\"not an object\"}").is_err());

    assert_eq!(log.len(), 1);
}

#[test]
fn frames_without_events_are_rejected() {
    let mut log = BreachLog::new();

    assert!(log.record_from_frame("{\"turnInfo\":[1,4,12,122]}").is_err());
    assert!(log.is_empty());
}
