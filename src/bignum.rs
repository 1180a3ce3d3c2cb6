// Exact arbitrary-precision helpers shared by the table generators. The
// significand computation must not round anywhere except its final floor
// division, so every intermediate value stays in `BigUint`.

use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::{ToPrimitive as _, Zero as _};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,
    #[error("value does not fit in 128 bits")]
    Overflow,
}

/// base**exp as an exact integer.
pub fn power(base: u32, exp: u32) -> BigUint {
    BigUint::from(base).pow(exp)
}

/// Exact floor division. The generators only ever divide non-negative
/// values, so flooring and truncating toward zero coincide.
pub fn floor_div(num: &BigUint, den: &BigUint) -> Result<BigUint, Error> {
    if den.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(num.div_floor(den))
}

/// Exact product.
pub fn multiply(a: &BigUint, b: &BigUint) -> BigUint {
    a * b
}

/// Splits a value into its high and low 64-bit words.
pub fn split_hi_lo(value: &BigUint) -> Result<(u64, u64), Error> {
    let mask = power(2, 64) - 1u32;
    let lo = (value & &mask).to_u64().ok_or(Error::Overflow)?;
    let hi = (value >> 64u32).to_u64().ok_or(Error::Overflow)?;
    Ok((hi, lo))
}
