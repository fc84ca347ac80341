use core::{fmt, str::FromStr};

use thiserror::Error as ThisError;

use crate::{
    PinKind,
    classify::{ANALOG_PINS, is_analog_pin, is_pwm_pin},
};

/// A pin the board exposes, identified by its digital pin number.
///
/// Analog inputs keep their digital numbering (`A0` is pin 14) so that the
/// discriminant is always the number accepted by [`crate::is_digital_pin`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum BoardPin {
    D0 = 0,
    D1 = 1,
    D2 = 2,
    D9 = 9,
    D10 = 10,
    A0 = 14,
    A1 = 15,
    A2 = 16,
    A3 = 17,
}

impl BoardPin {
    #[inline]
    #[must_use]
    pub fn is_analog(self) -> bool {
        is_analog_pin(self.into())
    }

    #[inline]
    #[must_use]
    pub fn is_pwm(self) -> bool {
        is_pwm_pin(self.into())
    }

    /// Iterates over the kinds this pin belongs to.
    ///
    /// [`PinKind::Digital`] always comes first.
    pub fn kinds(self) -> impl Iterator<Item = PinKind> {
        let pin = i32::from(self);
        PinKind::ALL.into_iter().filter(move |kind| kind.contains(pin))
    }
}

impl From<BoardPin> for u8 {
    fn from(value: BoardPin) -> Self {
        value as Self
    }
}

impl From<BoardPin> for i32 {
    fn from(value: BoardPin) -> Self {
        u8::from(value).into()
    }
}

impl TryFrom<i32> for BoardPin {
    type Error = PinConvError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BoardPin::D0),
            1 => Ok(BoardPin::D1),
            2 => Ok(BoardPin::D2),
            9 => Ok(BoardPin::D9),
            10 => Ok(BoardPin::D10),
            14 => Ok(BoardPin::A0),
            15 => Ok(BoardPin::A1),
            16 => Ok(BoardPin::A2),
            17 => Ok(BoardPin::A3),
            n => Err(PinConvError::Unknown(n)),
        }
    }
}

/// Accepts a plain pin number (`"9"`), a digital label (`"D9"`) or an analog
/// alias (`"A0"`..`"A3"`). Labels are case-insensitive.
impl FromStr for BoardPin {
    type Err = PinConvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(index) = s.strip_prefix(['A', 'a']) {
            let index: usize = index.parse().map_err(|_| PinConvError::Parse)?;
            return ANALOG_PINS
                .get(index)
                .copied()
                .ok_or(PinConvError::UnknownAlias)?
                .try_into();
        }

        let number = s.strip_prefix(['D', 'd']).unwrap_or(s);
        number
            .parse::<i32>()
            .map_err(|_| PinConvError::Parse)?
            .try_into()
    }
}

impl fmt::Display for BoardPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pin = i32::from(*self);

        if self.is_analog() {
            write!(f, "A{}", pin - ANALOG_PINS[0])
        } else {
            write!(f, "D{pin}")
        }
    }
}

#[derive(Clone, Copy, Debug, ThisError)]
#[cfg_attr(test, derive(PartialEq))]
pub enum PinConvError {
    #[error("{0} is not a board pin")]
    Unknown(i32),
    #[error("analog alias out of range")]
    UnknownAlias,
    #[error("malformed pin")]
    Parse,
}
