//! Carousel configuration.

use core::{str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{Error, Milliseconds, Result, DEFAULT_INTERVAL};

/// Defines who puts the active marker on the first element.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InitialMarker {
    /// The controller marks the first element as active right after the capture.
    #[default]
    Apply,
    /// The host has already marked the first element, the controller leaves it untouched
    /// until the first tick.
    External,
}

impl FromStr for InitialMarker {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "apply" => Ok(Self::Apply),
            "external" => Ok(Self::External),
            other => Err(Error::decode(other)),
        }
    }
}

/// A carousel configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    /// Period between two ticks.
    pub interval: Milliseconds,
    /// Initial active marker policy.
    pub initial_marker: InitialMarker,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            initial_marker: InitialMarker::default(),
        }
    }
}

impl Configuration {
    /// Checks that the configuration can drive a timer.
    pub fn validate(self) -> Result<Self> {
        if self.interval.0 == 0 {
            return Err(Error::InvalidInterval);
        }
        Ok(self)
    }

    /// Returns the tick period.
    pub fn period(&self) -> Duration {
        self.interval.into()
    }
}
