use super::*;

#[test]
fn keyframes_end_off_screen_and_transparent() {
    let to = SLIDE_OUT_RIGHT.split("to {").nth(1).unwrap_or_default();
    assert!(to.contains("translateX(100%)"));
    assert!(to.contains("opacity: 0"));
}

#[test]
fn keyframe_name_matches_alert_animation() {
    let animation = crate::behaviors::alerts::slide_out_animation(300);
    let name = animation.split_whitespace().next().unwrap_or_default();
    assert!(SLIDE_OUT_RIGHT.contains(&format!("@keyframes {name} ")));
}

#[test]
fn keyframes_start_in_place_and_opaque() {
    let from = SLIDE_OUT_RIGHT.split("from {").nth(1).and_then(|rest| rest.split('}').next()).unwrap_or_default();
    assert!(from.contains("translateX(0)"));
    assert!(from.contains("opacity: 1"));
}
