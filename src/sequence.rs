//! Common ancestors of sequences and paths.
//!
//! The ancestor of a set of sequences is their longest shared leading run.
//! The scan compares elements position by position up to the length of the
//! shortest input. When no position disagrees, the lexicographically smallest
//! input is returned instead, which is the shortest input since it is then a
//! prefix of all the others.

use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use crate::error::{Result, ToolkitError};

/// Returns the common ancestor of the given sequences.
///
/// ```
/// use ocio_common::sequence::common_ancestor;
/// let a = ["1", "2", "3"];
/// let b = ["1", "2", "0"];
/// let c = ["1", "2", "3", "4"];
/// assert_eq!(common_ancestor(&[&a[..], &b[..], &c[..]]).unwrap(), &["1", "2"]);
/// ```
pub fn common_ancestor<'a, T: Ord>(sequences: &[&'a [T]]) -> Result<&'a [T]> {
    let first = first_sequence(sequences)?;
    match divergence(sequences, |s| s.len(), |a, b, i| a[i] == b[i]) {
        Some(index) => Ok(&first[..index]),
        None => Ok(sequences.iter().copied().min().unwrap_or(first)),
    }
}

/// Same as [`common_ancestor`], treating each string as a sequence of `char`s.
///
/// ```
/// use ocio_common::sequence::common_str_ancestor;
/// assert_eq!(common_str_ancestor(&["azerty", "azetty", "azello"]).unwrap(), "aze");
/// ```
pub fn common_str_ancestor<'a>(strings: &[&'a str]) -> Result<&'a str> {
    let first = first_sequence(strings)?;
    let chars: Vec<Vec<char>> = strings.iter().map(|s| s.chars().collect()).collect();
    match divergence(&chars, |s| s.len(), |a, b, i| a[i] == b[i]) {
        Some(index) => {
            // index counts chars, slicing needs bytes
            let end = first
                .char_indices()
                .nth(index)
                .map(|(byte, _)| byte)
                .unwrap_or(first.len());
            Ok(&first[..end])
        }
        None => Ok(strings.iter().copied().min().unwrap_or(first)),
    }
}

/// Returns the common ancestor path of the given paths.
///
/// Paths are split on the platform separator and rejoined with it, without
/// any normalization of `.` or `..` segments.
pub fn paths_common_ancestor(paths: &[&str]) -> Result<String> {
    let segmented: Vec<Vec<&str>> = paths
        .iter()
        .map(|path| path.split(MAIN_SEPARATOR).collect())
        .collect();
    let borrowed: Vec<&[&str]> = segmented.iter().map(|s| s.as_slice()).collect();
    let ancestor = common_ancestor(&borrowed)?;
    Ok(ancestor.join(MAIN_SEPARATOR_STR))
}

fn first_sequence<S: Copy>(sequences: &[S]) -> Result<S> {
    sequences.first().copied().ok_or_else(|| {
        ToolkitError::InvalidArgument(String::from(
            "at least one sequence is needed to find a common ancestor",
        ))
    })
}

// First position, within the shortest length, where the sequences disagree.
fn divergence<S>(
    sequences: &[S],
    len: impl Fn(&S) -> usize,
    same: impl Fn(&S, &S, usize) -> bool,
) -> Option<usize> {
    let (first, rest) = sequences.split_first()?;
    let shortest = sequences.iter().map(&len).min().unwrap_or(0);
    (0..shortest).find(|&i| rest.iter().any(|s| !same(first, s, i)))
}
