//! Power of 10 significand table generator.
//!
//! Emits one row per decimal exponent: the significand of 10**n, normalized
//! to [2**127, 2**128) and rounded down to 128 bits. The formatter's error
//! analysis assumes the table never overestimates a power of ten, so the
//! rounding direction here must stay floor.

use crate::bignum;
use std::f64::consts::LOG2_10;
use std::io::Write;
use thiserror::Error;

/// Range of decimal exponents [K_min, K_max] from the paper.
pub const DEC_EXP_MIN: i32 = -324;
pub const DEC_EXP_MAX: i32 = 292;

const NUM_BITS: i32 = 128;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Bignum(#[from] bignum::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One table row, tagged with the exponent it was computed for.
pub struct Entry {
    pub dec_exp: i32,
    pub hi: u64,
    pub lo: u64,
}

/// Computes the 128-bit significand of 10**dec_exp, rounded down.
pub fn compute(dec_exp: i32) -> Result<Entry, bignum::Error> {
    // dec_exp is -k in the paper.
    let bin_exp = (f64::from(dec_exp) * LOG2_10).floor() as i32 - (NUM_BITS - 1);
    let bin_pow = bignum::power(2, bin_exp.unsigned_abs());
    let dec_pow = bignum::power(10, dec_exp.unsigned_abs());
    let result = if dec_exp < 0 {
        bignum::floor_div(&bin_pow, &dec_pow)?
    } else if bin_exp < 0 {
        bignum::multiply(&dec_pow, &bin_pow)
    } else {
        bignum::floor_div(&dec_pow, &bin_pow)?
    };
    let (hi, lo) = bignum::split_hi_lo(&result)?;
    Ok(Entry { dec_exp, hi, lo })
}

/// All rows in increasing exponent order.
pub fn entries() -> impl Iterator<Item = Result<Entry, bignum::Error>> {
    // Negate DEC_EXP_MIN and DEC_EXP_MAX because we need negative powers
    // 10**-k.
    (-DEC_EXP_MAX..=-DEC_EXP_MIN).map(compute)
}

pub fn write_table(out: &mut dyn Write) -> Result<(), Error> {
    for entry in entries() {
        let Entry { dec_exp, hi, lo } = entry?;
        writeln!(out, "{{{hi:#x}, {lo:#018x}}}, // {dec_exp:4}")?;
    }
    Ok(())
}
