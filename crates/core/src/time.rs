//! Time units used to describe the tick period.

use core::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Frequency in ticks per second.
#[derive(Serialize, Deserialize, PartialEq, PartialOrd, Clone, Copy, Eq, Debug, Ord)]
#[serde(transparent)]
pub struct Hertz(pub u32);

macro_rules! impl_time_unit {
    ($name:ident, $hz_factor:expr, $suffix:literal) => {
        #[derive(Serialize, Deserialize, PartialEq, PartialOrd, Clone, Copy, Eq, Debug, Ord)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub const SECS_FACTOR: u32 = $hz_factor;
        }

        impl From<u32> for $name {
            fn from(inner: u32) -> Self {
                Self(inner)
            }
        }

        /// A zero frequency gives a zero period, which is rejected by the configuration.
        impl From<Hertz> for $name {
            fn from(hz: Hertz) -> Self {
                Self(Self::SECS_FACTOR.checked_div(hz.0).unwrap_or(0))
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim_end_matches($suffix)
                    .parse()
                    .map(Self)
                    .map_err(Error::decode)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", self.0, $suffix)
            }
        }
    };
}

impl_time_unit!(Milliseconds, 1_000, "ms");
impl From<Milliseconds> for Duration {
    fn from(ms: Milliseconds) -> Self {
        Duration::from_millis(u64::from(ms.0))
    }
}

impl FromStr for Hertz {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim_end_matches("Hz")
            .parse()
            .map(Self)
            .map_err(Error::decode)
    }
}

impl fmt::Display for Hertz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hertz_to_period() {
        assert_eq!(Milliseconds::from(Hertz(4)), Milliseconds(250));
        assert_eq!(Milliseconds::from(Hertz(0)), Milliseconds(0));
        assert_eq!(Milliseconds::from(Hertz(2_000)), Milliseconds(0));
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("1500".parse::<Milliseconds>(), Ok(Milliseconds(1500)));
        assert_eq!("1500ms".parse::<Milliseconds>(), Ok(Milliseconds(1500)));
        assert_eq!("2Hz".parse::<Hertz>(), Ok(Hertz(2)));
        assert_eq!("fast".parse::<Hertz>(), Err(Error::Decode));
    }

    #[test]
    fn test_duration_conversion() {
        assert_eq!(
            Duration::from(Milliseconds(1500)),
            Duration::from_millis(1500)
        );
    }
}
