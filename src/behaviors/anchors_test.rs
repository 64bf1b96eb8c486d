use super::*;

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#features"), Some("features"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_id("#"), None);
}

#[test]
fn non_fragment_href_has_no_target() {
    assert_eq!(fragment_id("/tasks/#list"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn fragment_id_keeps_characters_selectors_reject() {
    assert_eq!(fragment_id("#1-intro"), Some("1-intro"));
}
