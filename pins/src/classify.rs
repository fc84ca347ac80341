/// Pins usable for digital I/O.
pub const DIGITAL_PINS: [i32; 9] = [0, 1, 2, 9, 10, 14, 15, 16, 17];
/// Pins wired to the ADC multiplexer.
pub const ANALOG_PINS: [i32; 4] = [14, 15, 16, 17];
/// Pins driven by a hardware PWM timer.
pub const PWM_PINS: [i32; 2] = [9, 10];

/// Returns `true` if `pin` can be used for digital I/O.
///
/// Any integer is accepted, values that are not board pins yield `false`.
#[inline]
#[must_use]
pub const fn is_digital_pin(pin: i32) -> bool {
    contains(&DIGITAL_PINS, pin)
}

/// Returns `true` if `pin` can be read through the ADC.
#[inline]
#[must_use]
pub const fn is_analog_pin(pin: i32) -> bool {
    contains(&ANALOG_PINS, pin)
}

/// Returns `true` if `pin` can output hardware PWM.
#[inline]
#[must_use]
pub const fn is_pwm_pin(pin: i32) -> bool {
    contains(&PWM_PINS, pin)
}

/// Linear scan, stops at the first match.
///
/// Written as a `while` loop because iterators are not usable in `const fn`.
const fn contains(pins: &[i32], pin: i32) -> bool {
    let mut i = 0;

    while i < pins.len() {
        if pins[i] == pin {
            return true;
        }
        i += 1;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{
        ANALOG_PINS, DIGITAL_PINS, PWM_PINS, is_analog_pin, is_digital_pin, is_pwm_pin,
    };

    const NOT_DIGITAL: [i32; 9] = [-1, 3, 8, 11, 13, 18, 100, i32::MIN, i32::MAX];

    #[test]
    fn test_digital_pins() {
        for pin in DIGITAL_PINS {
            assert!(is_digital_pin(pin), "pin {pin}");
        }

        for pin in NOT_DIGITAL {
            assert!(!is_digital_pin(pin), "pin {pin}");
        }

        assert!(is_digital_pin(2));
        assert!(!is_digital_pin(3));
    }

    #[test]
    fn test_analog_pins() {
        for pin in -20..120 {
            assert_eq!(is_analog_pin(pin), (14..=17).contains(&pin), "pin {pin}");
        }

        assert!(is_analog_pin(16));
        assert!(!is_analog_pin(10));
        assert!(!is_analog_pin(9));
    }

    #[test]
    fn test_pwm_pins() {
        for pin in -20..120 {
            assert_eq!(is_pwm_pin(pin), pin == 9 || pin == 10, "pin {pin}");
        }

        assert!(is_pwm_pin(10));
        assert!(!is_pwm_pin(0));
        assert!(!is_pwm_pin(14));
    }

    #[test]
    fn test_digital_is_superset() {
        for pin in ANALOG_PINS.into_iter().chain(PWM_PINS) {
            assert!(is_digital_pin(pin), "pin {pin}");
        }

        for pin in -20..120 {
            if is_analog_pin(pin) || is_pwm_pin(pin) {
                assert!(is_digital_pin(pin), "pin {pin}");
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for pin in -20..120 {
            assert_eq!(is_digital_pin(pin), is_digital_pin(pin));
            assert_eq!(is_analog_pin(pin), is_analog_pin(pin));
            assert_eq!(is_pwm_pin(pin), is_pwm_pin(pin));
        }
    }

    #[test]
    fn test_const_eval() {
        const A2: bool = is_analog_pin(16);
        const D3: bool = is_digital_pin(3);

        assert!(A2);
        assert!(!D3);
    }
}
