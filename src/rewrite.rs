//! Successive regular expression substitutions.
//!
//! Patterns are applied one after the other, each on the output of the
//! previous one, so a later pattern may match text introduced by an earlier
//! replacement. Patterns are given as an ordered slice of pairs and are never
//! sorted or deduplicated.
//!
//! Replacements follow the `regex` crate syntax: `$1` or `${name}` refer to
//! capture groups and `$$` is a literal dollar sign.

use regex::Regex;
use tracing::trace;

use crate::error::{Result, ToolkitError};

/// Compiled, ordered list of substitutions.
#[derive(Debug, Clone)]
pub struct Rewriter {
    substitutions: Vec<(Regex, String)>,
}

impl Rewriter {
    pub fn new<P, R>(patterns: &[(P, R)]) -> Result<Self>
    where
        P: AsRef<str>,
        R: AsRef<str>,
    {
        let substitutions = patterns
            .iter()
            .map(|(pattern, replacement)| {
                let pattern = pattern.as_ref();
                let regex = Regex::new(pattern).map_err(|e| ToolkitError::InvalidPattern {
                    pattern: pattern.to_owned(),
                    message: e.to_string(),
                })?;
                Ok((regex, replacement.as_ref().to_owned()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { substitutions })
    }

    pub fn apply(&self, text: &str) -> String {
        let mut rewritten = text.to_owned();
        for (regex, replacement) in &self.substitutions {
            let next = regex.replace_all(&rewritten, replacement.as_str()).into_owned();
            trace!(pattern = regex.as_str(), before = %rewritten, after = %next, "substituted");
            rewritten = next;
        }
        rewritten
    }

    pub fn len(&self) -> usize {
        self.substitutions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }
}

/// Applies `patterns` to `text` in succession.
///
/// ```
/// use ocio_common::rewrite::multi_replace;
/// let name = multi_replace(
///     "Canon Luke Skywalker was weak and powerless.",
///     &[("Canon", "Legends"), ("weak", "strong"), (r"\w+less", "powerful")],
/// ).unwrap();
/// assert_eq!(name, "Legends Luke Skywalker was strong and powerful.");
/// ```
pub fn multi_replace<P, R>(text: &str, patterns: &[(P, R)]) -> Result<String>
where
    P: AsRef<str>,
    R: AsRef<str>,
{
    Ok(Rewriter::new(patterns)?.apply(text))
}
