use crate::error;
use crate::lang::ast::{Arithmetic, Comparison};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Integer arithmetic on `i32`. Results that don't fit are an
/// `OVERFLOW` rather than wrapping. Division truncates toward zero.
pub struct Operation {}

impl Operation {
    pub fn arithmetic(op: Arithmetic, lhs: i32, rhs: i32) -> Result<i32> {
        use Arithmetic::*;
        match op {
            Add => Operation::sum(lhs, rhs),
            Subtract => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
        }
    }

    pub fn compare(op: Comparison, lhs: i32, rhs: i32) -> bool {
        use Comparison::*;
        match op {
            Equal => lhs == rhs,
            Less => lhs < rhs,
            Greater => lhs > rhs,
        }
    }

    pub fn sum(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }
}
