use super::*;

#[test]
fn start_is_line_one_column_one() {
    assert_eq!(Position::START, Position::new(1, 1, 0));
    assert_eq!(Position::default(), Position::START);
}

#[test]
fn advance_ordinary_char_bumps_column() {
    let pos = Position::START.advance('a');
    assert_eq!(pos, Position::new(1, 2, 1));
}

#[test]
fn advance_line_feed_resets_column() {
    let pos = Position::START.advance('a').advance('\n');
    assert_eq!(pos, Position::new(2, 1, 2));
}

#[test]
fn advance_counts_code_points_not_bytes() {
    // U+00DC is two bytes in UTF-8, U+1F600 is four.
    let pos = Position::START.advance('Ü').advance('😀');
    assert_eq!(pos, Position::new(1, 3, 2));
}

#[test]
fn carriage_return_is_not_a_line_break() {
    let pos = Position::START.advance('\r');
    assert_eq!(pos, Position::new(1, 2, 1));
}

#[test]
fn display_is_line_colon_column() {
    assert_eq!(Position::new(3, 14, 40).to_string(), "3:14");
}

#[test]
fn advance_saturates_at_u32_max() {
    let last = Position::new(u32::MAX, u32::MAX, u32::MAX);
    assert_eq!(last.advance('a'), last);
    assert_eq!(last.advance('\n'), Position::new(u32::MAX, 1, u32::MAX));
}
