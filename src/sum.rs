//! Summing binary numbers from input
//!
//! Input is processed line by line: every line is validated, blank ones are skipped, and valid
//! ones are added to the running sum. First invalid line aborts everything - nothing is reported
//! then, so the report is built only after all input is consumed.

use crate::error::{Error, Result};
use log::{debug, info, trace};
use std::fmt;
use std::io::BufRead;

pub mod add;
pub mod line;
pub mod numeral;

pub use add::add;
pub use numeral::Numeral;

use line::Lines;
use numeral::Line;

/// Outcome of successful run
#[derive(Debug)]
pub struct Report {
    pub total: Numeral,
    /// Accepted numbers in input order, whitespace stripped
    pub inputs: Vec<Numeral>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Empty Input");
        }

        writeln!(f, "Sum:\n{}\nInput numbers:", self.total)?;
        for input in &self.inputs {
            writeln!(f, "{}", input)?;
        }

        Ok(())
    }
}

/// Reads the whole input and sums all numbers in it
pub fn accumulate(input: impl BufRead) -> Result<Report> {
    let mut total = Numeral::zero();
    let mut inputs = Vec::new();

    for (idx, line) in Lines::new(input).enumerate() {
        let line_no = idx + 1;
        let number = match numeral::parse(&line?) {
            Ok(Line::Numeral(number)) => number,
            Ok(Line::Blank) => {
                debug!("Line {}: blank, skipping", line_no);
                continue;
            }
            Err(reason) => {
                return Err(Error::InvalidFormat {
                    line: line_no,
                    reason,
                })
            }
        };

        inputs.try_reserve(1).map_err(|_| Error::Alloc {
            what: "input numbers",
        })?;
        // Sum is replaced, previous one is dropped here
        total = add(&total, &number)?;
        trace!("Line {}: {} accepted, sum is {}", line_no, number, total);
        inputs.push(number);
    }

    info!("Summed {} numbers", inputs.len());
    Ok(Report { total, inputs })
}
