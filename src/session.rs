//! Interactive session
//!
//! The menu-driven front end. This layer owns all parsing of raw user text:
//! malformed amounts, dates, and numbers are reported and re-prompted here,
//! so the registry and models only ever see well-typed values.
//!
//! The loop is generic over reader and writer so tests can script a whole
//! session; `main` wires it to stdin/stdout.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::display::format_full_report;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, Money};
use crate::registry::Registry;

/// One interactive expense-tracking session. All recorded state lives in
/// the session's registry and is discarded when the session ends.
#[derive(Debug, Default)]
pub struct Session {
    registry: Registry,
}

impl Session {
    /// Create a session with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry backing this session
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run the menu loop until the user quits or input reaches EOF.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> SpendlogResult<()> {
        loop {
            writeln!(output)?;
            writeln!(output, "1. Add expense")?;
            writeln!(output, "2. View report")?;
            writeln!(output, "3. Quit")?;

            let choice = match prompt_line(input, output, "Choose an option: ")? {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "1" => {
                    if self.add_expense(input, output)?.is_none() {
                        break;
                    }
                }
                "2" => self.view_report(output)?,
                "3" => break,
                _ => writeln!(output, "Invalid choice. Please try again.")?,
            }
        }

        Ok(())
    }

    /// Prompt for every expense field and record the result. Returns
    /// `None` if input hit EOF mid-entry.
    fn add_expense<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> SpendlogResult<Option<()>> {
        let description = match prompt_line(input, output, "Enter description: ")? {
            Some(description) => description,
            None => return Ok(None),
        };
        let amount = match prompt_parsed(input, output, "Enter amount: ", Money::parse)? {
            Some(amount) => amount,
            None => return Ok(None),
        };
        let date = match prompt_parsed(input, output, "Enter date (YYYY-MM-DD): ", parse_date)? {
            Some(date) => date,
            None => return Ok(None),
        };
        let name = match prompt_line(input, output, "Enter category name: ")? {
            Some(name) => name,
            None => return Ok(None),
        };
        let month = match prompt_parsed(input, output, "Enter month (1-12): ", parse_month)? {
            Some(month) => month,
            None => return Ok(None),
        };
        let year = match prompt_parsed(input, output, "Enter year: ", parse_year)? {
            Some(year) => year,
            None => return Ok(None),
        };

        self.registry
            .record_expense(&name, month, year, Expense::new(description, amount, date));
        writeln!(output, "Recorded {} under {} ({}/{}).", amount, name, month, year)?;

        Ok(Some(()))
    }

    fn view_report<W: Write>(&self, output: &mut W) -> SpendlogResult<()> {
        if self.registry.is_empty() {
            writeln!(output, "No expenses recorded yet.")?;
        } else {
            write!(output, "{}", format_full_report(&self.registry))?;
        }
        Ok(())
    }
}

/// Prompt for one line of input. Returns `None` at EOF.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> SpendlogResult<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the entered text parses, reporting each failure. Returns
/// `None` at EOF.
fn prompt_parsed<T, R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, SpendlogError>,
) -> SpendlogResult<Option<T>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = match prompt_line(input, output, prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, SpendlogError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| SpendlogError::ParseDate(input.to_string()))
}

fn parse_month(input: &str) -> Result<u32, SpendlogError> {
    input
        .parse()
        .map_err(|_| SpendlogError::ParseNumber(input.to_string()))
}

fn parse_year(input: &str) -> Result<i32, SpendlogError> {
    input
        .parse()
        .map_err(|_| SpendlogError::ParseNumber(input.to_string()))
}
