//! Optional requirements and the gate that enforces them.
//!
//! A [`Registry`] maps requirement names to [`Probe`]s. A probe answers
//! whether its capability is available; asked to raise, it fails with
//! [`ToolkitError::DependencyUnavailable`] instead of answering `false`.
//! Probes are told the name they were registered under, so errors always
//! name the registry key.
//!
//! [`Registry::require`] builds a [`Gate`] over a list of names. Wrapping an
//! operation with the gate defers it until every probe, in order, succeeds:
//!
//! ```
//! use ocio_common::requirement::{Registry, Detector};
//! let mut registry = Registry::new();
//! registry.register("Colour", Detector::new(|| Ok(())));
//! let double = registry.require(&["Colour"]).wrap(|x: i32| x * 2);
//! assert_eq!(double(21).unwrap(), 42);
//! ```
//!
//! Registration needs `&mut Registry`, so a registry must be fully populated
//! before it is shared. The process-wide [`REQUIREMENTS`] registry is built
//! once and never changes afterwards.

use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use tracing::{debug, warn};

use crate::error::{Result, ToolkitError};

pub const COLOUR: &str = "Colour";
pub const JSONPICKLE: &str = "jsonpickle";
pub const NETWORKX: &str = "NetworkX";

lazy_static! {
    /// Default requirements, decided by the cargo features the crate was built with.
    pub static ref REQUIREMENTS: Registry = Registry::with_defaults();
}

// ------------- Probe -------------
pub trait Probe: Send + Sync {
    /// Whether the capability registered as `name` is available.
    ///
    /// With `raise_on_failure` set, an unavailable capability is reported as
    /// [`ToolkitError::DependencyUnavailable`] rather than `Ok(false)`.
    fn available(&self, name: &str, raise_on_failure: bool) -> Result<bool>;
}

impl<F> Probe for F
where
    F: Fn(&str, bool) -> Result<bool> + Send + Sync,
{
    fn available(&self, name: &str, raise_on_failure: bool) -> Result<bool> {
        self(name, raise_on_failure)
    }
}

type Detection = Box<dyn Fn() -> std::result::Result<(), String> + Send + Sync>;

/// A probe built from a detection function returning the cause of absence.
pub struct Detector {
    features: Option<String>,
    detect: Detection,
}

impl Detector {
    pub fn new<F>(detect: F) -> Self
    where
        F: Fn() -> std::result::Result<(), String> + Send + Sync + 'static,
    {
        Self {
            features: None,
            detect: Box::new(detect),
        }
    }
    /// Names the features lost when the capability is missing, e.g. "serialization".
    pub fn with_features(mut self, features: &str) -> Self {
        self.features = Some(features.to_owned());
        self
    }
    fn unavailable(&self, name: &str, cause: &str) -> ToolkitError {
        let features = match &self.features {
            Some(features) => format!(", e.g. {features},"),
            None => String::new(),
        };
        ToolkitError::DependencyUnavailable {
            name: name.to_owned(),
            message: format!(
                "\"{name}\" related API features{features} are not available: \"{cause}\"."
            ),
        }
    }
}

impl Probe for Detector {
    fn available(&self, name: &str, raise_on_failure: bool) -> Result<bool> {
        match (self.detect)() {
            Ok(()) => Ok(true),
            Err(cause) if raise_on_failure => Err(self.unavailable(name, &cause)),
            Err(_) => Ok(false),
        }
    }
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Detector")
            .field("features", &self.features)
            .finish_non_exhaustive()
    }
}

// ------------- Registry -------------
#[derive(Default)]
pub struct Registry {
    probes: BTreeMap<String, Box<dyn Probe>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            probes: BTreeMap::new(),
        }
    }

    /// The known optional requirements of the config generator.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            COLOUR,
            Detector::new(|| feature_enabled(cfg!(feature = "colour"), "colour")),
        );
        registry.register(
            JSONPICKLE,
            Detector::new(|| feature_enabled(cfg!(feature = "jsonpickle"), "jsonpickle"))
                .with_features("serialization"),
        );
        registry.register(
            NETWORKX,
            Detector::new(|| feature_enabled(cfg!(feature = "networkx"), "networkx")),
        );
        registry
    }

    /// Adds a probe under `name`, returning whether the name was previously registered.
    ///
    /// The probe reports failures under `name`.
    pub fn register<P: Probe + 'static>(&mut self, name: &str, probe: P) -> bool {
        self.probes.insert(name.to_owned(), Box::new(probe)).is_some()
    }

    /// Runs the probe registered under `name`. Names are case-sensitive.
    pub fn check(&self, name: &str, raise_on_failure: bool) -> Result<bool> {
        let probe = self
            .probes
            .get(name)
            .ok_or_else(|| ToolkitError::UnknownCapability(name.to_owned()))?;
        probe.available(name, raise_on_failure)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.probes.contains_key(name)
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.probes.keys().map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.probes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Availability of every registered requirement, without raising.
    pub fn report(&self) -> Vec<(String, bool)> {
        self.probes
            .iter()
            .map(|(name, probe)| (name.clone(), probe.available(name, false).unwrap_or(false)))
            .collect()
    }

    pub fn require(&self, names: &[&str]) -> Gate<'_> {
        Gate {
            registry: self,
            names: names.iter().map(|name| (*name).to_owned()).collect(),
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.probes.keys()).finish()
    }
}

// ------------- Gate -------------
#[derive(Debug, Clone)]
pub struct Gate<'r> {
    registry: &'r Registry,
    names: Vec<String>,
}

impl<'r> Gate<'r> {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Probes every requirement in order, stopping at the first failure.
    pub fn check(&self) -> Result<()> {
        for name in &self.names {
            debug!(requirement = %name, "checking requirement");
            match self.registry.check(name, true) {
                Ok(true) => (),
                // a probe asked to raise should not answer false, treat it as absent anyway
                Ok(false) => {
                    warn!(requirement = %name, "requirement unavailable");
                    return Err(ToolkitError::DependencyUnavailable {
                        name: name.clone(),
                        message: format!("\"{name}\" related API features are not available."),
                    });
                }
                Err(e) => {
                    warn!(requirement = %name, error = %e, "requirement check failed");
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Checks the requirements, then runs `operation` once.
    pub fn call<R>(&self, operation: impl FnOnce() -> R) -> Result<R> {
        self.check()?;
        Ok(operation())
    }

    /// Wraps `operation` so that every call first checks the requirements.
    ///
    /// Operations taking several arguments receive them as a tuple.
    pub fn wrap<A, R, F>(self, operation: F) -> impl Fn(A) -> Result<R>
    where
        F: Fn(A) -> R,
    {
        move |argument| {
            self.check()?;
            Ok(operation(argument))
        }
    }
}

/// Gates `operation` on the default [`REQUIREMENTS`].
pub fn required<A, R, F>(names: &[&str], operation: F) -> impl Fn(A) -> Result<R> + use<A, R, F>
where
    F: Fn(A) -> R,
{
    REQUIREMENTS.require(names).wrap(operation)
}

fn feature_enabled(enabled: bool, feature: &str) -> std::result::Result<(), String> {
    if enabled {
        Ok(())
    } else {
        Err(format!("the \"{feature}\" cargo feature is not enabled"))
    }
}
