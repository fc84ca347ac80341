use core::{fmt, str::FromStr};

use thiserror::Error as ThisError;

use crate::classify::{
    ANALOG_PINS, DIGITAL_PINS, PWM_PINS, is_analog_pin, is_digital_pin, is_pwm_pin,
};

/// The capability categories a pin can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum PinKind {
    Digital,
    Analog,
    Pwm,
}

impl PinKind {
    pub const ALL: [Self; 3] = [Self::Digital, Self::Analog, Self::Pwm];

    /// Returns every pin of this kind.
    #[must_use]
    pub const fn pins(self) -> &'static [i32] {
        match self {
            Self::Digital => &DIGITAL_PINS,
            Self::Analog => &ANALOG_PINS,
            Self::Pwm => &PWM_PINS,
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, pin: i32) -> bool {
        match self {
            Self::Digital => is_digital_pin(pin),
            Self::Analog => is_analog_pin(pin),
            Self::Pwm => is_pwm_pin(pin),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Digital => "digital",
            Self::Analog => "analog",
            Self::Pwm => "pwm",
        }
    }
}

impl fmt::Display for PinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PinKind {
    type Err = PinKindConvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(PinKindConvError)
    }
}

#[derive(Clone, Copy, Debug, ThisError)]
#[cfg_attr(test, derive(PartialEq))]
#[error("expected one of `digital`, `analog` or `pwm`")]
pub struct PinKindConvError;
