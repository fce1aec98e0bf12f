use super::*;

#[test]
fn control_escapes() {
    assert_eq!(resolve_escape('n', '"'), Some('\n'));
    assert_eq!(resolve_escape('t', '"'), Some('\t'));
    assert_eq!(resolve_escape('r', '\''), Some('\r'));
}

#[test]
fn backslash_escape() {
    assert_eq!(resolve_escape('\\', '"'), Some('\\'));
    assert_eq!(resolve_escape('\\', '\''), Some('\\'));
}

#[test]
fn only_active_quote_is_escapable() {
    assert_eq!(resolve_escape('"', '"'), Some('"'));
    assert_eq!(resolve_escape('\'', '\''), Some('\''));
    assert_eq!(resolve_escape('\'', '"'), None);
    assert_eq!(resolve_escape('"', '\''), None);
}

#[test]
fn unknown_escapes_are_kept() {
    for c in ['d', '0', 'x', 'u', ' ', '/', 'é'] {
        assert_eq!(resolve_escape(c, '"'), None, "escape \\{c}");
    }
}
