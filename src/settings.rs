//! Settings read with the `config` crate.
//!
//! Sources are layered: built-in defaults, then an optional settings file
//! (any format `config` understands, the extension may be left out), then
//! environment variables such as `OCIO_COMMON_MESSAGE_BOX__WIDTH=60`.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::message::{BoxStyle, DEFAULT_PADDING, DEFAULT_WIDTH};

pub const DEFAULT_SETTINGS_FILE: &str = "ocio-common";
pub const ENVIRONMENT_PREFIX: &str = "OCIO_COMMON";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub message_box: BoxStyle,
}

impl Settings {
    /// Loads settings from the file at `path`, if it exists, and the environment.
    pub fn load(path: &str) -> Result<Self> {
        debug!(path, "loading settings");
        let settings = defaults()?
            .add_source(File::with_name(path).required(false))
            .add_source(environment())
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Reads settings from text in the given format, ignoring the environment.
    pub fn from_text(text: &str, format: FileFormat) -> Result<Self> {
        let settings = defaults()?.add_source(File::from_str(text, format)).build()?;
        Ok(settings.try_deserialize()?)
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("message_box.width", DEFAULT_WIDTH as i64)?
        .set_default("message_box.padding", DEFAULT_PADDING as i64)?)
}

fn environment() -> Environment {
    Environment::with_prefix(ENVIRONMENT_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
