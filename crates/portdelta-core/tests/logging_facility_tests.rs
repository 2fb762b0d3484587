#![allow(clippy::unwrap_used, clippy::expect_used)]

use portdelta_core::errors::{ExError, ExErrorKind, PortDeltaError};
use portdelta_core::logging_facility::test_capture::init_test_capture;
use portdelta_core::{log_op_end, log_op_error, log_op_start};
use portdelta_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_END_MONTH, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_START_MONTH,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let events = capture.events();
    let start_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(
        end_events[0].fields.get(FIELD_DURATION_MS),
        Some(&"42".to_string())
    );
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = PortDeltaError::UnknownMonth {
        month_key: "Foo 2099".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(
        error_event.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_INVALID_INPUT".to_string())
    );
    assert_eq!(error_event.field(FIELD_ERR_KIND), Some("InvalidInput"));
    assert_eq!(error_event.level, tracing::Level::ERROR);
}

#[test]
fn test_boundary_ownership_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_ownership_unique_4";

    log_op_start!(op_name, start_month = "January 2024");
    log_op_end!(op_name, duration_ms = 42);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END)
    });

    assert_eq!(starts, 1, "Should have exactly one start event");
    assert_eq!(ends, 1, "Should have exactly one end event");
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_5";

    log_op_start!(op_name, start_month = "January 2024", end_month = "March 2024");

    let events = capture.events_for_op(op_name);
    let start_event = events.first().expect("Should have start event");

    assert_eq!(
        start_event.fields.get(FIELD_START_MONTH),
        Some(&"January 2024".to_string())
    );
    assert_eq!(
        start_event.fields.get(FIELD_END_MONTH),
        Some(&"March 2024".to_string())
    );
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();

    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_error_conversion_preserves_context() {
    let capture = init_test_capture();
    let op_name = "test_error_conversion_unique_6";

    let err = PortDeltaError::MonthOrder {
        start_month: "March 2024".to_string(),
        end_month: "January 2024".to_string(),
    };
    log_op_error!(op_name, err.clone(), duration_ms = 5);

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Ordering);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let events = capture.events_for_op(op_name);
    assert_eq!(
        events[0].fields.get(FIELD_ERR_CODE),
        Some(&"ERR_ORDERING".to_string())
    );
}
