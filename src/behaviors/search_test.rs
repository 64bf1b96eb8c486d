use super::*;

/// Replay keystrokes at the given times against `SearchDebounce`, running
/// every scheduled timer (cancelled or not) in time order. Returns the times
/// at which the form was submitted.
fn replay(search: &mut SearchDebounce, keystrokes_ms: &[u64]) -> Vec<u64> {
    let mut timers: Vec<(u64, Ticket)> = Vec::new();
    let mut submits = Vec::new();
    let mut keys = keystrokes_ms.iter().copied().peekable();

    loop {
        timers.sort_by_key(|(at, _)| *at);
        let next_timer = timers.first().map(|(at, _)| *at);
        match (keys.peek().copied(), next_timer) {
            (Some(key_at), Some(timer_at)) if timer_at < key_at => {
                let (at, ticket) = timers.remove(0);
                if search.should_submit(ticket) {
                    submits.push(at);
                }
            }
            (Some(key_at), _) => {
                keys.next();
                let (ticket, delay) = search.keystroke();
                timers.push((key_at + u64::from(delay), ticket));
            }
            (None, Some(_)) => {
                let (at, ticket) = timers.remove(0);
                if search.should_submit(ticket) {
                    submits.push(at);
                }
            }
            (None, None) => break,
        }
    }
    submits
}

#[test]
fn four_keystrokes_under_window_submit_once_after_last() {
    let mut search = SearchDebounce::from_config(&BehaviorConfig::default());
    let submits = replay(&mut search, &[0, 120, 450, 900]);
    assert_eq!(submits, vec![1400]);
}

#[test]
fn pause_between_words_submits_twice() {
    let mut search = SearchDebounce::new(500);
    let submits = replay(&mut search, &[0, 100, 1000, 1100]);
    assert_eq!(submits, vec![600, 1600]);
}

#[test]
fn single_keystroke_submits_after_delay() {
    let mut search = SearchDebounce::new(500);
    assert_eq!(replay(&mut search, &[250]), vec![750]);
}

#[test]
fn no_keystrokes_never_submit() {
    let mut search = SearchDebounce::new(500);
    assert!(replay(&mut search, &[]).is_empty());
}

#[test]
fn configured_delay_is_used() {
    let config = BehaviorConfig { search_debounce_ms: 300, ..BehaviorConfig::default() };
    let mut search = SearchDebounce::from_config(&config);
    let (_, delay) = search.keystroke();
    assert_eq!(delay, 300);
}

#[test]
fn stale_timer_firing_late_does_not_submit() {
    let mut search = SearchDebounce::new(500);
    let (first, _) = search.keystroke();
    let (second, _) = search.keystroke();
    assert!(!search.should_submit(first));
    assert!(search.should_submit(second));
    assert!(!search.should_submit(second));
}
