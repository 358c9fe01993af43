// ============================================================================
// BigInt Engine Library
// Exact arbitrary-precision signed decimal integer arithmetic
// ============================================================================

//! # BigInt Engine
//!
//! Exact arithmetic over signed decimal integers of unbounded magnitude.
//!
//! ## Features
//!
//! - **Exact addition, subtraction, multiplication** with no word-width limit
//! - **Total signed ordering** derived from a single magnitude comparison
//! - **Decimal string parsing and formatting** with canonical output
//! - **Native integer interop** (`From<i64>`, fallible `to_i64`)
//! - **Inline small-value storage** via `smallvec` (no heap below 17 digits)
//!
//! ## Example
//!
//! ```rust
//! use bigint_engine::prelude::*;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = BigInt::from(-42i64);
//!
//! let product = &a * &b;
//! assert_eq!(
//!     product.to_string(),
//!     "-5185185138518518513851851851380"
//! );
//!
//! let mut acc = a.clone();
//! acc += &b;
//! assert!(acc < a);
//! ```

pub mod driver;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::driver::DriverError;
    pub use crate::numeric::{BigInt, NumericError, NumericResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_arithmetic() {
        // 100! computed one factor at a time.
        let mut factorial = BigInt::one();
        for i in 1i64..=100 {
            factorial *= BigInt::from(i);
        }
        assert_eq!(factorial.digit_count(), 158);
        assert!(factorial.to_string().starts_with("93326215443944152681"));
        // 100! ends in 24 zeros (factors of 5 up to 100).
        assert!(factorial.to_string().ends_with("000000000000000000000000"));

        // Fibonacci via repeated addition.
        let (mut prev, mut curr) = (BigInt::zero(), BigInt::one());
        for _ in 0..300 {
            let next = &prev + &curr;
            prev = curr;
            curr = next;
        }
        assert_eq!(
            curr.to_string(),
            "359579325206583560961765665172189099052367214309267232255589801",
        );
    }

    #[test]
    fn test_parse_compute_render_round_trip() {
        let a: BigInt = "-99999999999999999999".parse().unwrap();
        let b: BigInt = "+99999999999999999999".parse().unwrap();
        let sum = &a + &b;
        assert!(sum.is_zero());
        assert_eq!(sum.to_string(), "0");
        assert_eq!((&a * &b).to_string(), (-(&b * &b)).to_string());
    }

    #[test]
    fn test_parse_errors_reach_caller() {
        let result: NumericResult<BigInt> = "12a3".parse();
        assert_eq!(result, Err(NumericError::InvalidFormat));
    }
}
