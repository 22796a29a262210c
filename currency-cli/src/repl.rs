use anyhow::{Context, Result};
use currency_core::{Input, RateSource, RateTable, classify, convert, menu_lines, resolve_choice};
use std::io::{BufRead, Write};

const HEADER: &str = "\nCAD to foreign currency converter\nEnter 'e' to quit anytime\n\n";

const AMOUNT_PROMPT: &str =
    "Enter amount of CAD to be converted (your value will be rounded to two decimals): ";

const CURRENCY_PROMPT: &str =
    "\nPlease enter the number associated with the currency you would like to convert to: ";

/// The interactive conversion loop.
///
/// Rates are re-fetched at the top of every iteration so each conversion uses
/// a fresh table. Fetch failures propagate out of the loop; user input
/// mistakes are reported and the loop continues. End of input counts as
/// quitting, like the sentinel.
pub async fn run_loop<R, W>(source: &dyn RateSource, input: &mut R, out: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        let table = source
            .fetch()
            .await
            .context("Failed to fetch the daily exchange rates")?;

        writeln!(out, "{HEADER}")?;
        write!(out, "{AMOUNT_PROMPT}")?;
        out.flush()?;

        let Some(line) = read_line(input)? else { break };

        match classify(&line) {
            Input::Quit => break,
            Input::Invalid => writeln!(out, "Invalid input...\n")?,
            Input::Amount(amount) => {
                if let Some(code) = prompt_currency(&table, input, out)? {
                    let conversion = convert(amount, &code, &table)
                        .context("Selected currency disappeared from the rate table")?;
                    writeln!(out, "\n{conversion}\n\n")?;
                }
            }
        }
    }

    writeln!(out, "Terminating currency converter...")?;
    Ok(())
}

/// Print the numbered menu and resolve the user's pick. Returns `None` (after
/// reporting) when the entered number is unusable, sending the caller back to
/// the amount prompt.
fn prompt_currency<R, W>(table: &RateTable, input: &mut R, out: &mut W) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    for line in menu_lines(table) {
        writeln!(out, "{line}")?;
    }
    write!(out, "{CURRENCY_PROMPT}")?;
    out.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(None);
    };

    match resolve_choice(&line, table.codes()) {
        Some(code) => Ok(Some(code.to_string())),
        None => {
            writeln!(out, "Invalid number.\n")?;
            Ok(None)
        }
    }
}

/// One line of input, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    let n = input.read_line(&mut buf)?;

    if n == 0 { Ok(None) } else { Ok(Some(buf)) }
}
