//! Exponent shift table generator.
//!
//! The significand table has fixed 128-bit precision per decimal exponent,
//! but different binary exponents mapping to the same decimal exponent place
//! the decimal point at different bit positions. For example, both 3 * 2**59
//! and 3 * 2**60 have dec_exp = 2, while dividing by 10^dec_exp puts the
//! decimal point in different positions:
//!   3 * 2**59 / 100 = 1.72...e+16
//!   3 * 2**60 / 100 = 3.45...e+16
//! The table entry for a raw exponent field value is the number of bits the
//! formatter must shift to compensate.

use std::io::{self, Write};

/// Number of possible values of the 11-bit biased exponent field of a double.
pub const NUM_RAW_EXPS: usize = 1 << 11;

/// Exponent bias folded together with the 52 explicit significand bits.
const EXP_OFFSET: i32 = 52 + 1023;

/// Entries per string literal segment. Some compilers cap the length of a
/// single literal, so the emitted string is broken into chunks the consumer
/// concatenates back together.
const ENTRIES_PER_LINE: usize = 37;

/// Computes the decimal exponent as floor(log10(2**bin_exp)).
pub(crate) const fn compute_dec_exp(bin_exp: i32) -> i32 {
    // log10_2_sig = round(log10(2) * 2**log10_2_exp)
    const LOG10_2_SIG: i32 = 315_653;
    const LOG10_2_EXP: i32 = 20;
    (bin_exp * LOG10_2_SIG) >> LOG10_2_EXP
}

/// Computes the shift for one value of the raw exponent field. Raw exponent
/// zero encodes subnormals, which share the binary exponent of raw value one.
pub const fn compute_exp_shift(raw_exp: u32) -> u8 {
    let raw_exp = if raw_exp == 0 { 1 } else { raw_exp };
    let bin_exp = raw_exp as i32 - EXP_OFFSET;
    let dec_exp = compute_dec_exp(bin_exp);
    // log2_pow10_sig = round(log2(10) * 2**log2_pow10_exp) + 1
    const LOG2_POW10_SIG: i32 = 217_707;
    const LOG2_POW10_EXP: i32 = 16;
    // pow10_bin_exp = floor(log2(10**-dec_exp))
    let pow10_bin_exp = (-dec_exp * LOG2_POW10_SIG) >> LOG2_POW10_EXP;
    (bin_exp + pow10_bin_exp + 1) as u8
}

/// Writes the table as a chunked string literal, one escaped character code
/// per entry.
pub fn write_table(out: &mut dyn Write) -> io::Result<()> {
    write!(out, "\"")?;
    for raw_exp in 0..NUM_RAW_EXPS as u32 {
        if raw_exp != 0 && raw_exp as usize % ENTRIES_PER_LINE == 0 {
            write!(out, "\"\n\"")?;
        }
        write!(out, "\\{}", compute_exp_shift(raw_exp))?;
    }
    writeln!(out, "\"")?;
    Ok(())
}
