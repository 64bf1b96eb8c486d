use super::*;

const BUSY: &str = r#"<i class="fas fa-spinner fa-spin"></i> Processing..."#;

#[test]
fn busy_disables_and_swaps_label() {
    let state = SubmitButtonState::captured(Some("Save Task".to_owned()));
    let patch = state.busy(BUSY);
    assert!(patch.disabled);
    assert_eq!(patch.label, BUSY);
}

#[test]
fn restore_brings_back_exact_original_markup() {
    let original = r#"<i class="fas fa-save"></i> Save Task"#;
    let state = SubmitButtonState::captured(Some(original.to_owned()));
    let patch = state.restore(BUSY);
    assert!(!patch.disabled);
    assert_eq!(patch.label, original);
}

#[test]
fn restore_without_capture_keeps_current_label() {
    let state = SubmitButtonState::captured(None);
    let patch = state.restore(BUSY);
    assert!(!patch.disabled);
    assert_eq!(patch.label, BUSY);
}

#[test]
fn empty_capture_counts_as_missing() {
    let state = SubmitButtonState::captured(Some(String::new()));
    assert_eq!(state.restore("current").label, "current");
}

#[test]
fn repeated_submits_restore_same_label() {
    let state = SubmitButtonState::captured(Some("Log In".to_owned()));
    for _ in 0..3 {
        assert_eq!(state.busy(BUSY).label, BUSY);
        assert_eq!(state.restore(BUSY).label, "Log In");
    }
}
