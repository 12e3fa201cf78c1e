//! Messages printed inside a fixed-width box.
//!
//! ```text
//! ============================================================
//! *                                                          *
//! *   Lorem ipsum dolor sit amet, consectetur adipiscing     *
//! *   elit, sed do eiusmod tempor incididunt ut labore et    *
//! *   dolore magna aliqua.                                   *
//! *                                                          *
//! ============================================================
//! ```
//!
//! Each line of the message is wrapped on its own. Hyphenated words may break
//! after a hyphen sitting between letters, but words are otherwise never
//! broken, so a word longer than the inner width gets a line to itself and
//! pushes the right edge of that row outwards.

use serde::Deserialize;

pub const DEFAULT_WIDTH: usize = 79;
pub const DEFAULT_PADDING: usize = 3;

const BORDER: char = '=';
const EDGE: char = '*';
const TAB_SIZE: usize = 8;

/// Width and padding of a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    pub width: usize,
    pub padding: usize,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            padding: DEFAULT_PADDING,
        }
    }
}

impl BoxStyle {
    pub fn new(width: usize, padding: usize) -> Self {
        Self { width, padding }
    }
    /// Room left for text between the edges and their padding, never less than one column.
    pub fn inner_width(&self) -> usize {
        self.width.saturating_sub(self.edges()).max(1)
    }
    // both edges with their padding
    fn edges(&self) -> usize {
        self.padding.saturating_mul(2).saturating_add(2)
    }
    fn inner(&self, text: &str) -> String {
        let used = text.chars().count().saturating_add(self.edges());
        let padding = " ".repeat(self.padding);
        let fill = " ".repeat(self.width.saturating_sub(used));
        format!("{EDGE}{padding}{text}{fill}{padding}{EDGE}")
    }
    fn border(&self) -> String {
        BORDER.to_string().repeat(self.width)
    }
}

/// Renders `message` into box rows without printing them.
pub fn render_message_box(message: &str, style: &BoxStyle) -> Vec<String> {
    let mut rows = vec![style.border(), style.inner("")];
    for line in message.split('\n') {
        let mut wrapped = wrap(line, style.inner_width());
        if wrapped.is_empty() {
            // keep a row for blank lines so the box never collapses
            wrapped.push(String::from(" "));
        }
        rows.extend(wrapped.iter().map(|text| style.inner(&expand_tabs(text))));
    }
    rows.push(style.inner(""));
    rows.push(style.border());
    rows
}

/// Prints `message` inside a box, one row per call to `sink`.
///
/// Always returns `true` once the box has been rendered.
pub fn message_box(message: &str, width: usize, padding: usize, sink: &mut dyn FnMut(&str)) -> bool {
    for row in render_message_box(message, &BoxStyle::new(width, padding)) {
        sink(&row);
    }
    true
}

/// Prints `message` to standard output using the default box style.
pub fn print_message_box(message: &str) -> bool {
    message_box(message, DEFAULT_WIDTH, DEFAULT_PADDING, &mut |row| println!("{row}"))
}

/// Greedily wraps `text` into lines of at most `width` characters.
///
/// Whitespace runs inside a line are kept as they are and whitespace at a
/// break is dropped. Hyphenated words such as `color-management` may break
/// after the hyphen; other words longer than `width` are placed alone on a
/// line rather than broken.
///
/// ```
/// use ocio_common::message::wrap;
/// assert_eq!(wrap("scene-linear ACEScg", 10), vec!["scene-", "linear", "ACEScg"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chunks = split_chunks(text);
    let mut lines: Vec<String> = Vec::new();
    let mut next = 0;
    while next < chunks.len() {
        // leading whitespace is only kept on the first line
        if !lines.is_empty() && is_blank(chunks[next]) {
            next += 1;
        }
        let mut line: Vec<&str> = Vec::new();
        let mut length = 0;
        while let Some(chunk) = chunks.get(next).copied() {
            let chunk_length = chunk.chars().count();
            if length + chunk_length > width {
                break;
            }
            line.push(chunk);
            length += chunk_length;
            next += 1;
        }
        if let Some(chunk) = chunks.get(next).copied() {
            if line.is_empty() && chunk.chars().count() > width {
                line.push(chunk);
                next += 1;
            }
        }
        if line.last().is_some_and(|chunk| is_blank(chunk)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.concat());
        }
    }
    lines
}

fn is_wrap_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

fn is_blank(chunk: &str) -> bool {
    chunk.chars().all(char::is_whitespace)
}

// Word characters other than digits.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

// Alternating runs of whitespace and non-whitespace, words being further
// split after their breakable hyphens.
fn split_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (i, c) in text.char_indices() {
        let space = is_wrap_space(c);
        if in_space.is_some_and(|s| s != space) {
            push_run(&mut chunks, &text[start..i], in_space == Some(true));
            start = i;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        push_run(&mut chunks, &text[start..], in_space == Some(true));
    }
    chunks
}

fn push_run<'a>(chunks: &mut Vec<&'a str>, run: &'a str, space: bool) {
    if space {
        chunks.push(run);
        return;
    }
    let mut start = 0;
    for end in hyphen_breaks(run) {
        chunks.push(&run[start..end]);
        start = end;
    }
    chunks.push(&run[start..]);
}

// Byte offsets just after each hyphen a word may break at: the hyphen follows
// two letters (or a letter, a hyphen and a letter) and precedes a letter, an
// optional hyphen and another letter.
fn hyphen_breaks(word: &str) -> Vec<usize> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let letter = |i: usize| chars.get(i).is_some_and(|&(_, c)| is_letter(c));
    let hyphen = |i: usize| chars.get(i).is_some_and(|&(_, c)| c == '-');
    (2..chars.len())
        .filter(|&i| hyphen(i))
        .filter(|&i| {
            let before = (letter(i - 2) && letter(i - 1))
                || (i >= 3 && letter(i - 3) && hyphen(i - 2) && letter(i - 1));
            let after = letter(i + 1) && (letter(i + 2) || (hyphen(i + 2) && letter(i + 3)));
            before && after
        })
        .map(|i| chars[i].0 + 1)
        .collect()
}

fn expand_tabs(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let spaces = TAB_SIZE - column % TAB_SIZE;
                expanded.extend(std::iter::repeat_n(' ', spaces));
                column += spaces;
            }
            '\r' | '\n' => {
                expanded.push(c);
                column = 0;
            }
            _ => {
                expanded.push(c);
                column += 1;
            }
        }
    }
    expanded
}
