// ============================================================================
// Numeric Module
// Arbitrary-precision signed decimal integer arithmetic
// ============================================================================
//
// This module provides:
// - BigInt: Signed decimal integer of unbounded magnitude
// - NumericError: Error type for the string-parsing boundary
//
// Design principles:
// - Exact arithmetic, limited only by memory
// - Canonical digit representation maintained across every public operation
// - Schoolbook kernels (O(n) add/sub, O(n*m) multiply), no asymptotic tricks
// - Parsing returns Result; nothing else in the core can fail

mod big_int;
mod errors;

pub use big_int::BigInt;
pub use errors::{NumericError, NumericResult};
