//! Interactive menu loop.
//!
//! The loop is owned by the caller (the binary entry point); no
//! process-wide state. Reader and writer are injected so the whole
//! interaction is testable against in-memory buffers.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use ms_stat::{Distribution, StatResult, expectation, standard_deviation, variance};

use crate::input::collect_distribution;

const MENU: &str = "
Choose an action
1 - compute expectation
2 - compute variance
3 - compute standard deviation
0 - exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Expectation,
    Variance,
    StdDeviation,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Expectation),
            "2" => Ok(MenuChoice::Variance),
            "3" => Ok(MenuChoice::StdDeviation),
            "0" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

impl MenuChoice {
    fn compute(self, dist: &Distribution) -> StatResult<f64> {
        match self {
            MenuChoice::Expectation => expectation(dist),
            MenuChoice::Variance => variance(dist),
            MenuChoice::StdDeviation => standard_deviation(dist),
            MenuChoice::Exit => unreachable!("exit is handled by the loop"),
        }
    }
}

/// Run the menu loop until the user exits or input ends.
///
/// Validation failures from the core are printed and the loop
/// continues; they are never fatal at the application level.
pub fn run<R, W>(input: &mut R, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "{MENU}")?;
        write!(out, ">>> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let choice = match MenuChoice::from_str(&line) {
            Ok(choice) => choice,
            Err(()) => {
                writeln!(out, "Unknown choice. Try again.")?;
                continue;
            }
        };
        if choice == MenuChoice::Exit {
            break;
        }

        let dist = collect_distribution(input, out)?;
        match choice.compute(&dist) {
            Ok(result) => writeln!(out, "Result: {result}")?,
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }
    Ok(())
}
