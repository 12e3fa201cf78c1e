//! ocio-common – common utilities shared by the OpenColorIO ACES config generator.
//!
//! The crate holds the small, generic pieces the generator leans on while it
//! builds color spaces, classifies CTL transforms and writes configs. None of
//! them know anything about color; each module stands on its own:
//!
//! ## Modules
//! * [`sequence`] – Common ancestors of sequences, strings and paths.
//! * [`vivify`] – Auto-vivifying nested mappings and their plain, materialized form.
//! * [`message`] – Greedy word wrapping and fixed-width message boxes.
//! * [`requirement`] – Registry of optional requirements and the gate that
//!   defers an operation until they are available.
//! * [`rewrite`] – Ordered, successive regular expression substitutions.
//! * [`settings`] – Defaults read from a settings file and the environment.
//! * [`error`] – The [`error::ToolkitError`] type shared by all of the above.
//!
//! ## Quick Start
//! ```
//! use ocio_common::{message, rewrite, sequence, vivify::Vivified};
//!
//! let ancestor = sequence::common_str_ancestor(&["ACES2065-1", "ACEScg", "ACEScct"]).unwrap();
//! assert_eq!(ancestor, "ACES");
//!
//! let mut families = Vivified::new();
//! families["ACES"]["Input"].set("ARRI", 3);
//! assert_eq!(families.materialize().to_string(), r#"{"ACES": {"Input": {"ARRI": 3}}}"#);
//!
//! let name = rewrite::multi_replace("ACES - ACEScg", &[(r"\s+-\s+", "_"), ("_ACES", "_")]).unwrap();
//! assert_eq!(name, "ACES_cg");
//!
//! let mut rows = Vec::new();
//! message::message_box("Generating config", 40, 3, &mut |row| rows.push(row.to_owned()));
//! assert_eq!(rows.len(), 5);
//! ```
//!
//! ## Optional requirements
//! The default registry knows the `Colour`, `jsonpickle` and `NetworkX`
//! requirements. Each is available when the crate is built with the cargo
//! feature of the same name in lower case.

pub mod error;
pub mod message;
pub mod requirement;
pub mod rewrite;
pub mod sequence;
pub mod settings;
pub mod vivify;
