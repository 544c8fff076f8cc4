use super::*;

#[test]
fn event_result_predicates() {
    assert!(EventResult::Consumed.is_consumed());
    assert!(EventResult::Consumed.needs_redraw());
    assert!(!EventResult::Ignored.needs_redraw());
    assert!(EventResult::Quit.is_quit());
    assert!(!EventResult::Quit.is_consumed());
}
