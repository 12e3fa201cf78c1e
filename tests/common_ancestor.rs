use std::path::MAIN_SEPARATOR;

use ocio_common::error::ToolkitError;
use ocio_common::sequence::{common_ancestor, common_str_ancestor, paths_common_ancestor};

#[test]
fn tuples_of_strings() {
    let a = ["1", "2", "3"];
    let b = ["1", "2", "0"];
    let c = ["1", "2", "3", "4"];
    let ancestor = common_ancestor(&[&a[..], &b[..], &c[..]]).expect("ancestor");
    assert_eq!(ancestor, &["1", "2"]);
}

#[test]
fn strings() {
    assert_eq!(common_str_ancestor(&["azerty", "azetty", "azello"]).unwrap(), "aze");
}

#[test]
fn identical_sequences_are_their_own_ancestor() {
    let a = [3, 1, 4, 1, 5];
    assert_eq!(common_ancestor(&[&a[..], &a[..]]).unwrap(), &a);
    assert_eq!(common_str_ancestor(&["ACEScg", "ACEScg"]).unwrap(), "ACEScg");
}

#[test]
fn single_sequence_is_returned_unchanged() {
    let a = ["x", "y"];
    assert_eq!(common_ancestor(&[&a[..]]).unwrap(), &a);
    assert_eq!(common_str_ancestor(&["abc"]).unwrap(), "abc");
}

#[test]
fn undiverged_sequences_fall_back_to_the_smallest() {
    // no position disagrees, so the minimum (the shortest) is returned
    assert_eq!(common_str_ancestor(&["abcd", "ab", "abc"]).unwrap(), "ab");
    let long = [1, 2, 3];
    let short = [1, 2];
    assert_eq!(common_ancestor(&[&long[..], &short[..]]).unwrap(), &[1, 2]);
}

#[test]
fn immediate_divergence_gives_an_empty_ancestor() {
    let a = ["b"];
    let b = ["a", "c"];
    assert!(common_ancestor(&[&a[..], &b[..]]).unwrap().is_empty());
    assert_eq!(common_str_ancestor(&["xyz", "abc"]).unwrap(), "");
}

#[test]
fn multibyte_characters_are_sliced_on_boundaries() {
    assert_eq!(common_str_ancestor(&["Ω-naïve", "Ω-naïf"]).unwrap(), "Ω-naï");
}

#[test]
fn no_sequences_is_an_invalid_argument() {
    let none: [&[u8]; 0] = [];
    assert!(matches!(common_ancestor(&none), Err(ToolkitError::InvalidArgument(_))));
    assert!(matches!(common_str_ancestor(&[]), Err(ToolkitError::InvalidArgument(_))));
    assert!(matches!(paths_common_ancestor(&[]), Err(ToolkitError::InvalidArgument(_))));
}

#[test]
fn paths_share_their_leading_directory() {
    let s = MAIN_SEPARATOR;
    let documents = format!("{s}Users{s}JohnDoe{s}Documents");
    let file = format!("{documents}{s}Test.txt");
    assert_eq!(paths_common_ancestor(&[documents.as_str(), file.as_str()]).unwrap(), documents);

    let left = format!("{s}aces{s}input{s}arri");
    let right = format!("{s}aces{s}output{s}srgb");
    assert_eq!(paths_common_ancestor(&[left.as_str(), right.as_str()]).unwrap(), format!("{s}aces"));
}

#[test]
fn paths_are_not_normalized() {
    let s = MAIN_SEPARATOR;
    let dotted = format!("a{s}.{s}b");
    let plain = format!("a{s}b");
    assert_eq!(paths_common_ancestor(&[dotted.as_str(), plain.as_str()]).unwrap(), "a");
}
