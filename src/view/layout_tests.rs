//! Tests for carousel layout calculation.

use super::*;

#[test]
fn layout_stacks_rows_top_to_bottom() {
    let layout = calculate_layout(Rect::new(0, 0, 80, 24));

    assert_eq!(layout.header, Rect::new(0, 0, 80, 1));
    assert_eq!(layout.track, Rect::new(0, 1, 80, 20));
    assert_eq!(layout.indicators, Rect::new(0, 21, 80, 1));
    assert_eq!(layout.controls, Rect::new(0, 22, 80, 1));
    assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
}

#[test]
fn indicator_dots_are_centered_with_spacing() {
    let row = Rect::new(0, 21, 80, 1);
    // 8 dots take 15 columns; (80 - 15) / 2 = 32
    assert_eq!(
        indicator_columns(row, 8),
        vec![32, 34, 36, 38, 40, 42, 44, 46]
    );
}

#[test]
fn single_indicator_sits_in_the_middle() {
    let row = Rect::new(0, 0, 11, 1);
    assert_eq!(indicator_columns(row, 1), vec![5]);
}

#[test]
fn indicators_that_do_not_fit_are_dropped() {
    let row = Rect::new(0, 0, 5, 1);
    assert_eq!(indicator_columns(row, 8), vec![0, 2, 4]);
}

#[test]
fn controls_sit_at_both_ends() {
    let row = Rect::new(0, 22, 80, 1);
    assert_eq!(previous_control_area(row), Rect::new(1, 22, 6, 1));
    assert_eq!(next_control_area(row), Rect::new(73, 22, 6, 1));
}
