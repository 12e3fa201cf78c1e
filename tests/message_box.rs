use ocio_common::message::{message_box, render_message_box, wrap, BoxStyle};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
    sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

fn collect(message: &str, width: usize, padding: usize) -> (Vec<String>, bool) {
    let mut rows = Vec::new();
    let done = message_box(message, width, padding, &mut |row| rows.push(row.to_owned()));
    (rows, done)
}

#[test]
fn lorem_ipsum_width_75() {
    let (rows, done) = collect(LOREM, 75, 3);
    assert!(done);
    assert_eq!(
        rows,
        vec![
            "===========================================================================",
            "*                                                                         *",
            "*   Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do       *",
            "*   eiusmod tempor incididunt ut labore et dolore magna aliqua.           *",
            "*                                                                         *",
            "===========================================================================",
        ]
    );
}

#[test]
fn lorem_ipsum_width_60() {
    let (rows, _) = collect(LOREM, 60, 3);
    assert_eq!(
        rows,
        vec![
            "============================================================",
            "*                                                          *",
            "*   Lorem ipsum dolor sit amet, consectetur adipiscing     *",
            "*   elit, sed do eiusmod tempor incididunt ut labore et    *",
            "*   dolore magna aliqua.                                   *",
            "*                                                          *",
            "============================================================",
        ]
    );
}

#[test]
fn lorem_ipsum_wide_padding() {
    let (rows, _) = collect(LOREM, 75, 16);
    assert_eq!(
        rows,
        vec![
            "===========================================================================",
            "*                                                                         *",
            "*                Lorem ipsum dolor sit amet, consectetur                  *",
            "*                adipiscing elit, sed do eiusmod tempor                   *",
            "*                incididunt ut labore et dolore magna                     *",
            "*                aliqua.                                                  *",
            "*                                                                         *",
            "===========================================================================",
        ]
    );
}

#[test]
fn empty_message_keeps_a_text_row() {
    for (width, padding) in [(20, 2), (79, 3), (12, 0)] {
        let (rows, done) = collect("", width, padding);
        assert!(done);
        // border, blank, single space, blank, border
        assert_eq!(rows.len(), 5, "width {width} padding {padding}");
        let blank = format!("*{}*", " ".repeat(width - 2));
        assert_eq!(rows[0], "=".repeat(width));
        assert_eq!(rows[1], blank);
        assert_eq!(rows[2], blank);
        assert_eq!(rows[3], blank);
        assert_eq!(rows[4], "=".repeat(width));
    }
}

#[test]
fn explicit_newlines_are_wrapped_separately() {
    let (rows, _) = collect("first\n\n  indented   runs  kept\nx", 30, 2);
    assert_eq!(
        rows,
        vec![
            "==============================",
            "*                            *",
            "*  first                     *",
            "*                            *",
            "*    indented   runs  kept   *",
            "*  x                         *",
            "*                            *",
            "==============================",
        ]
    );
}

#[test]
fn long_words_are_never_broken() {
    let (rows, _) = collect("tiny supercalifragilistic end", 20, 2);
    assert_eq!(rows[2], "*  tiny            *");
    assert_eq!(rows[3], "*  supercalifragilistic  *");
    assert_eq!(rows[4], "*  end             *");
}

#[test]
fn tabs_are_expanded_when_rendered() {
    let (rows, _) = collect("a\tb", 30, 2);
    assert_eq!(rows[2], "*  a       b                 *");
}

#[test]
fn wrap_drops_whitespace_at_breaks() {
    assert_eq!(wrap("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
    assert_eq!(wrap("aaa    bbb", 4), vec!["aaa", "bbb"]);
    assert!(wrap("   ", 10).is_empty());
    assert!(wrap("", 10).is_empty());
}

#[test]
fn default_style_matches_the_classic_box() {
    let style = BoxStyle::default();
    assert_eq!((style.width, style.padding), (79, 3));
    assert_eq!(style.inner_width(), 71);
    let rows = render_message_box("hello", &style);
    assert!(rows.iter().all(|row| row.chars().count() == 79));
}

#[test]
fn hyphenated_words_break_after_the_hyphen() {
    assert_eq!(
        wrap("sRGB-Texture color-management", 14),
        vec!["sRGB-Texture", "color-", "management"]
    );
    let (rows, _) = collect("Utility - Linear - sRGB-Texture", 20, 2);
    assert_eq!(rows[2], "*  Utility -       *");
    assert_eq!(rows[3], "*  Linear - sRGB-  *");
    assert_eq!(rows[4], "*  Texture         *");
}

#[test]
fn degenerate_width_still_renders() {
    let (rows, done) = collect("hi there", 5, 3);
    assert!(done);
    assert_eq!(
        rows,
        vec!["=====", "*      *", "*   hi   *", "*   there   *", "*      *", "====="]
    );
    assert_eq!(BoxStyle::new(5, 3).inner_width(), 1);
    assert_eq!(BoxStyle::new(79, usize::MAX).inner_width(), 1);
}
