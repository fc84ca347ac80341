//! Pin capability lookups for the board.
//!
//! The board exposes nine usable pins. Every one of them can do digital I/O,
//! pins 14 through 17 double as the analog inputs `A0`..`A3` and pins 9 and 10
//! are wired to a hardware PWM timer.

#![no_std]

#[cfg(test)]
extern crate std;

mod board_pin;
mod classify;
mod pin_kind;

pub use board_pin::{BoardPin, PinConvError};
pub use classify::{
    ANALOG_PINS, DIGITAL_PINS, PWM_PINS, is_analog_pin, is_digital_pin, is_pwm_pin,
};
pub use pin_kind::{PinKind, PinKindConvError};
