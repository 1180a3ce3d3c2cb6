// Power of 10 significand and exponent shift table generator for the
// Schubfach algorithm: https://fmt.dev/papers/Schubfach4.pdf.
// Copyright (c) 2025 - present, Victor Zverovich

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter, Write as _};

mod bignum;
mod pow10;
mod shifts;

/// Emits the constant tables consumed by the float formatting routines.
#[derive(Parser)]
struct Cli {
    /// "shifts" selects the exponent shift table; any other value, or no
    /// value at all, selects the power-of-ten significand table.
    mode: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.mode.as_deref() {
        Some("shifts") => shifts::write_table(&mut out)?,
        _ => pow10::write_table(&mut out)?,
    }
    out.flush()?;
    Ok(())
}
