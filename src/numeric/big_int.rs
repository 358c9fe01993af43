// ============================================================================
// Big Integer
// Arbitrary-precision signed decimal arithmetic with schoolbook kernels
// ============================================================================

use super::errors::{NumericError, NumericResult};
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Digit counts up to this size stay inline on the stack; larger values
/// spill to the heap.
const INLINE_DIGITS: usize = 16;

type DigitBuf = SmallVec<[u8; INLINE_DIGITS]>;

/// Arbitrary-precision signed decimal integer.
///
/// Internally stores the magnitude as a sequence of base-10 digits,
/// least-significant first, plus a sign flag. The representation is kept in
/// canonical form at all times: the digit buffer is never empty, carries no
/// most-significant zero unless the value is exactly `[0]`, and the sign
/// flag is `false` whenever the magnitude is zero (no signed zero).
///
/// All arithmetic is exact and limited only by available memory. Addition
/// and subtraction run in O(n) over the digit count; multiplication is the
/// O(n·m) schoolbook convolution.
///
/// # Example
/// ```
/// use bigint_engine::numeric::BigInt;
///
/// let a: BigInt = "99999999999999999999".parse().unwrap();
/// let b = BigInt::from(1i64);
/// assert_eq!((a + b).to_string(), "100000000000000000000");
/// ```
#[derive(Clone)]
pub struct BigInt {
    /// True means the value is negative. Never true for zero.
    negative: bool,
    /// Base-10 digits, least-significant at index 0.
    digits: DigitBuf,
}

impl BigInt {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a zero value.
    #[inline]
    pub fn new() -> Self {
        Self {
            negative: false,
            digits: smallvec![0],
        }
    }

    /// Zero (the additive identity).
    #[inline]
    pub fn zero() -> Self {
        Self::new()
    }

    /// One (the multiplicative identity).
    #[inline]
    pub fn one() -> Self {
        Self {
            negative: false,
            digits: smallvec![1],
        }
    }

    /// Create from a native 64-bit signed integer.
    ///
    /// Digits are extracted by repeated division by 10 on the unsigned
    /// magnitude, so `i64::MIN` converts without overflow.
    pub fn from_i64(value: i64) -> Self {
        let negative = value < 0;
        let mut magnitude = value.unsigned_abs();
        let mut digits = DigitBuf::new();
        if magnitude == 0 {
            digits.push(0);
        }
        while magnitude != 0 {
            digits.push((magnitude % 10) as u8);
            magnitude /= 10;
        }
        Self { negative, digits }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if the value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    /// Number of decimal digits in the magnitude (at least 1; zero has one
    /// digit).
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// The digit at position `idx`, counted from the least-significant end.
    #[inline]
    pub fn digit(&self, idx: usize) -> Option<u8> {
        self.digits.get(idx).copied()
    }

    /// Convert back to a native `i64`, or `None` if the value is out of
    /// range.
    pub fn to_i64(&self) -> Option<i64> {
        // Accumulate on the negative side so i64::MIN round-trips.
        let mut acc: i64 = 0;
        for &d in self.digits.iter().rev() {
            acc = acc.checked_mul(10)?;
            acc = acc.checked_sub(i64::from(d))?;
        }
        if self.negative {
            Some(acc)
        } else {
            acc.checked_neg()
        }
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Restore canonical form: trim most-significant zero digits down to a
    /// single digit, and clear the sign flag if the magnitude is zero.
    fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits[self.digits.len() - 1] == 0 {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
        if self.is_zero() {
            self.negative = false;
        }
    }

    // ========================================================================
    // Magnitude Comparison
    // ========================================================================

    /// Check whether `|self| >= |rhs|`, ignoring signs.
    ///
    /// A longer canonical digit sequence is always the larger magnitude; on
    /// equal lengths the digits are scanned from the most-significant end
    /// down. Every signed comparison in this type is derived from this
    /// single primitive.
    pub fn is_abs_ge(&self, rhs: &Self) -> bool {
        if self.digits.len() != rhs.digits.len() {
            return self.digits.len() > rhs.digits.len();
        }
        // Descending scan stops before index 0 so the usize counter cannot
        // underflow.
        for i in (1..self.digits.len()).rev() {
            if self.digits[i] != rhs.digits[i] {
                return self.digits[i] > rhs.digits[i];
            }
        }
        self.digits[0] >= rhs.digits[0]
    }

    /// Three-way magnitude comparison, derived from `is_abs_ge` both ways.
    pub fn cmp_abs(&self, rhs: &Self) -> Ordering {
        match (self.is_abs_ge(rhs), rhs.is_abs_ge(self)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            _ => Ordering::Less,
        }
    }

    // ========================================================================
    // Magnitude Kernels
    // ========================================================================

    /// Add `|rhs|` to `|self|` in place, ignoring both signs.
    ///
    /// Digit-wise carry loop; the buffer grows one digit at a time as the
    /// sum outruns it. Canonical operands cannot produce a spurious leading
    /// zero here, so no trailing normalization is needed.
    fn add_assign_abs(&mut self, rhs: &Self) {
        let length = self.digits.len().max(rhs.digits.len());
        let mut carry = 0u8;
        let mut i = 0;
        while i < length || carry != 0 {
            if i == self.digits.len() {
                self.digits.push(0);
            }
            let sum = self.digits[i] + rhs.digits.get(i).copied().unwrap_or(0) + carry;
            self.digits[i] = sum % 10;
            carry = sum / 10;
            i += 1;
        }
    }

    /// Subtract `|rhs|` from `|self|` in place, ignoring both signs.
    ///
    /// Precondition: `|self| >= |rhs|`. The kernel trusts the caller and
    /// never checks this; the sign-dispatch logic in `AddAssign`/`SubAssign`
    /// is the only caller and establishes it via `is_abs_ge`. Violating the
    /// precondition silently wraps the digit arithmetic into a wrong result
    /// rather than reporting an error.
    fn sub_assign_abs(&mut self, rhs: &Self) {
        let mut borrow = 0u8;
        for i in 0..self.digits.len() {
            let take = rhs.digits.get(i).copied().unwrap_or(0) + borrow;
            if self.digits[i] < take {
                self.digits[i] = self.digits[i] + 10 - take;
                borrow = 1;
            } else {
                self.digits[i] -= take;
                borrow = 0;
            }
        }
        // Cancellation can strip leading digits (e.g. 1000 - 999).
        self.normalize();
    }

    /// Multiply `|self|` by `|rhs|` in place, ignoring both signs.
    ///
    /// Schoolbook convolution into a zeroed working buffer of
    /// `len(self) + len(rhs)` digits. For each digit of `self` the inner
    /// loop walks `rhs`, continuing past its end while a carry remains; the
    /// product of an n-digit and an m-digit number never exceeds n+m
    /// digits, so the carry chain stays inside the buffer.
    fn mul_assign_abs(&mut self, rhs: &Self) {
        let mut product: DigitBuf = smallvec![0; self.digits.len() + rhs.digits.len()];
        for i in 0..self.digits.len() {
            let mut carry = 0u16;
            let mut j = 0;
            while j < rhs.digits.len() || carry != 0 {
                let cell = u16::from(product[i + j])
                    + carry
                    + rhs.digits
                        .get(j)
                        .map_or(0, |&d| u16::from(d) * u16::from(self.digits[i]));
                product[i + j] = (cell % 10) as u8;
                carry = cell / 10;
                j += 1;
            }
        }
        self.digits = product;
        // Trims the unused top of the buffer, and clears the sign when the
        // product is zero.
        self.normalize();
    }

    // ========================================================================
    // In-Place Operations
    // ========================================================================

    /// Flip the sign in place. Zero stays non-negative.
    #[inline]
    pub fn negate_in_place(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    /// Replace the value with the given native integer.
    #[inline]
    pub fn set_i64(&mut self, value: i64) {
        *self = Self::from_i64(value);
    }

    /// Replace the value with the parse of the given decimal string.
    ///
    /// # Errors
    /// Returns `InvalidFormat` without modifying `self` if the string is not
    /// a valid signed decimal integer.
    #[inline]
    pub fn set_str(&mut self, s: &str) -> NumericResult<()> {
        *self = s.parse()?;
        Ok(())
    }
}

// ============================================================================
// Signed Arithmetic Dispatch
// ============================================================================

impl AddAssign<&BigInt> for BigInt {
    /// Signed addition: same signs add magnitudes; differing signs subtract
    /// the smaller magnitude from the larger, the larger operand's sign
    /// winning.
    fn add_assign(&mut self, rhs: &BigInt) {
        if self.negative == rhs.negative {
            self.add_assign_abs(rhs);
        } else if self.is_abs_ge(rhs) {
            self.sub_assign_abs(rhs);
        } else {
            // |rhs| dominates: compute |rhs| - |self| and take rhs's sign,
            // which the clone already carries.
            let mut swapped = rhs.clone();
            swapped.sub_assign_abs(self);
            *self = swapped;
        }
    }
}

impl AddAssign for BigInt {
    #[inline]
    fn add_assign(&mut self, rhs: BigInt) {
        *self += &rhs;
    }
}

impl SubAssign<&BigInt> for BigInt {
    /// Signed subtraction: the mirror of `AddAssign` with the sign-equality
    /// test inverted.
    fn sub_assign(&mut self, rhs: &BigInt) {
        if self.negative != rhs.negative {
            self.add_assign_abs(rhs);
        } else if self.is_abs_ge(rhs) {
            self.sub_assign_abs(rhs);
        } else {
            // |rhs| dominates and the signs match, so the result's sign
            // flips. Strictly larger |rhs| means the result is nonzero.
            let flipped = !self.negative;
            let mut swapped = rhs.clone();
            swapped.sub_assign_abs(self);
            swapped.negative = flipped;
            *self = swapped;
        }
    }
}

impl SubAssign for BigInt {
    #[inline]
    fn sub_assign(&mut self, rhs: BigInt) {
        *self -= &rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    /// Signed multiplication: negative iff exactly one operand is negative.
    /// The magnitude kernel's normalization keeps a zero product
    /// non-negative.
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.negative = self.negative != rhs.negative;
        self.mul_assign_abs(rhs);
    }
}

impl MulAssign for BigInt {
    #[inline]
    fn mul_assign(&mut self, rhs: BigInt) {
        *self *= &rhs;
    }
}

impl Neg for BigInt {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.negate_in_place();
        self
    }
}

// ============================================================================
// Non-Mutating Arithmetic
// Each binary operator is a copy plus the corresponding compound assignment.
// ============================================================================

impl Add for BigInt {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn add(self, rhs: &BigInt) -> Self::Output {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Sub for BigInt {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= &rhs;
        self
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn sub(self, rhs: &BigInt) -> Self::Output {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl Mul for BigInt {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= &rhs;
        self
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, rhs: &BigInt) -> Self::Output {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}

// ============================================================================
// Comparison
// Signed order is sign dispatch over the single magnitude primitive; the
// negative branch swaps the operands instead of rescanning digits.
// ============================================================================

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_abs(other),
            (true, true) => other.cmp_abs(self),
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl Hash for BigInt {
    // Canonical form gives equal values identical fields, so field hashing
    // is consistent with Eq.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.digits.hash(state);
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl Default for BigInt {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<i64> for BigInt {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for BigInt {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

impl From<u32> for BigInt {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from_i64(i64::from(value))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for BigInt {
    type Err = NumericError;

    /// Parse from a signed decimal string.
    ///
    /// An optional leading `+` or `-` sets the sign; every remaining byte
    /// must be an ASCII digit. Leading zeros are accepted and collapse to
    /// canonical form, so `"007"` parses equal to `"7"`.
    ///
    /// # Errors
    /// Returns `InvalidFormat` on an empty string, a bare sign character,
    /// or any non-digit after the sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let (negative, rest) = match bytes.first() {
            Some(b'-') => (true, &bytes[1..]),
            Some(b'+') => (false, &bytes[1..]),
            Some(_) => (false, bytes),
            None => return Err(NumericError::InvalidFormat),
        };
        if rest.is_empty() {
            return Err(NumericError::InvalidFormat);
        }

        // The input is most-significant-first; storage is the reverse.
        let mut digits = DigitBuf::with_capacity(rest.len());
        for &b in rest.iter().rev() {
            if !b.is_ascii_digit() {
                return Err(NumericError::InvalidFormat);
            }
            digits.push(b - b'0');
        }

        let mut value = Self { negative, digits };
        value.normalize();
        Ok(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_zero() {
            f.write_str("-")?;
        }
        for &d in self.digits.iter().rev() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({}, digits={:?})", self, self.digits.as_slice())
    }
}

// ============================================================================
// Serde (string form, for API boundaries)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
