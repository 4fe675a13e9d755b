//! Plain-text rendering of quotes.
use std::io::Write;

use quote_common::{Quote, Result};

/// Write one quote as `Author: ..` / `Quote: ..` lines.
pub fn write_quote<W: Write + ?Sized>(out: &mut W, quote: &Quote) -> Result<()> {
    writeln!(out, "Author: {}", quote.author)?;
    writeln!(out, "Quote: {}", quote.body)?;
    Ok(())
}

/// Write each quote followed by a blank line.
pub fn write_quotes<W: Write + ?Sized>(out: &mut W, quotes: &[Quote]) -> Result<()> {
    for quote in quotes {
        write_quote(out, quote)?;
        writeln!(out)?;
    }
    Ok(())
}
