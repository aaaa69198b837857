use super::*;

#[test]
fn default_has_no_notice() {
    assert!(NoticeState::default().current.is_none());
}

#[test]
fn show_sets_the_current_notice() {
    let mut n = NoticeState::default();
    n.error("bad file");
    let notice = n.current.expect("notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.text, "bad file");
}

#[test]
fn a_new_notice_replaces_the_old_one() {
    let mut n = NoticeState::default();
    n.info("first");
    n.success("second");
    assert_eq!(n.current.expect("notice").text, "second");
}

#[test]
fn ids_are_unique_per_notice() {
    let mut n = NoticeState::default();
    let a = n.info("a");
    let b = n.info("b");
    assert_ne!(a, b);
}

#[test]
fn dismiss_clears_only_the_matching_notice() {
    let mut n = NoticeState::default();
    let stale = n.info("old");
    n.error("new");
    n.dismiss(stale);
    assert!(n.current.is_some(), "stale timer must not clear a newer notice");

    let current = n.current.as_ref().expect("notice").id;
    n.dismiss(current);
    assert!(n.current.is_none());
}

#[test]
fn clear_drops_any_notice() {
    let mut n = NoticeState::default();
    n.info("x");
    n.clear();
    assert!(n.current.is_none());
}
