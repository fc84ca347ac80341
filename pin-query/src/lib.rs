//! Host side helper that answers which capabilities a board pin has.

use std::io::Write;

pub use anyhow::Result as AnyResult;
use anyhow::Context;
use clap::Parser;
use pins::{BoardPin, PinKind};
use tracing::instrument;

/// Classify board pins as digital, analog and/or PWM.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Pin numbers or labels (`9`, `D9`, `A0`..`A3`).
    #[arg(required_unless_present = "list", allow_negative_numbers = true)]
    pub pins: Vec<String>,

    /// Only answer whether each pin is of this kind (digital, analog or pwm).
    #[arg(short, long)]
    pub kind: Option<PinKind>,

    /// Print the pins of every kind and exit.
    #[arg(short, long, conflicts_with = "kind")]
    pub list: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Writes one line per requested pin to `out`, or the pin table when
/// [`Args::list`] is set.
///
/// # Errors
///
/// Fails on the first argument that is neither an integer nor a pin label,
/// or if writing to `out` fails.
#[instrument(skip_all, err(Debug))]
pub fn run(args: &Args, out: &mut impl Write) -> AnyResult<()> {
    if args.list {
        for kind in PinKind::ALL {
            writeln!(out, "{}", list_line(kind)).context("writing pin list")?;
        }
        return Ok(());
    }

    for arg in &args.pins {
        let pin = resolve_pin(arg)?;
        tracing::debug!(%arg, pin, "resolved pin");

        writeln!(out, "{}", report_line(arg, pin, args.kind)).context("writing report")?;
    }

    Ok(())
}

/// Resolves a command line argument to a pin number.
///
/// Integers are passed through untouched so that numbers the board does not
/// have still get an answer. Anything else must be a [`BoardPin`] label.
///
/// # Errors
///
/// Returns an error if `arg` is neither an integer nor a valid label.
pub fn resolve_pin(arg: &str) -> AnyResult<i32> {
    if let Ok(pin) = arg.trim().parse::<i32>() {
        return Ok(pin);
    }

    arg.parse::<BoardPin>()
        .map(i32::from)
        .with_context(|| format!("invalid pin `{arg}`"))
}

/// Every kind `pin` belongs to, in [`PinKind::ALL`] order.
#[must_use]
pub fn capabilities(pin: i32) -> Vec<PinKind> {
    PinKind::ALL
        .into_iter()
        .filter(|kind| kind.contains(pin))
        .collect()
}

#[must_use]
pub fn report_line(arg: &str, pin: i32, kind: Option<PinKind>) -> String {
    if let Some(kind) = kind {
        return format!("{arg}: {}", kind.contains(pin));
    }

    let kinds = capabilities(pin);
    if kinds.is_empty() {
        return format!("{arg}: none");
    }

    let kinds = kinds.into_iter().map(PinKind::as_str).collect::<Vec<_>>();
    format!("{arg}: {}", kinds.join(", "))
}

#[must_use]
pub fn list_line(kind: PinKind) -> String {
    let pins = kind
        .pins()
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>();

    format!("{kind}: {}", pins.join(" "))
}
