// ============================================================================
// Demo Driver
// File-based script runner exercising the BigInt operation surface
// ============================================================================
//
// Script format: every line but the last is a decimal operand; the last
// line is an operator token selecting the operation to perform. The driver
// parses the operands, applies the operation, and writes the operands and
// the result to the output stream. It touches the core only through
// parsing, the public operators, and Display.

use crate::numeric::{BigInt, NumericError};
use std::fmt;
use std::io::{self, BufRead, Write};

/// Errors surfaced by the demo driver.
///
/// These wrap script-level problems and I/O; the arithmetic core itself
/// only ever contributes `InvalidFormat` through the `Parse` variant.
#[derive(Debug)]
pub enum DriverError {
    /// Reading the script or writing the output failed.
    Io(io::Error),
    /// The script contained no lines.
    EmptyScript,
    /// The selected operation needs more operands than the script provided.
    MissingOperands { operation: String, found: usize },
    /// The final line is not a recognized operator token.
    UnknownOperation(String),
    /// An operand line failed to parse as a decimal integer.
    Parse { line: usize, source: NumericError },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Io(err) => write!(f, "i/o error: {}", err),
            DriverError::EmptyScript => write!(f, "script is empty"),
            DriverError::MissingOperands { operation, found } => write!(
                f,
                "operation '{}' needs more operands (found {})",
                operation, found
            ),
            DriverError::UnknownOperation(op) => {
                write!(f, "unknown operation '{}'", op)
            },
            DriverError::Parse { line, source } => {
                write!(f, "operand on line {}: {}", line, source)
            },
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Io(err) => Some(err),
            DriverError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(err: io::Error) -> Self {
        DriverError::Io(err)
    }
}

/// Run a demo script: parse operand lines, apply the operator named on the
/// final line, and write the operands and result to `writer`.
///
/// # Errors
/// Returns a `DriverError` for an empty script, an unparseable operand,
/// an unknown operator, a missing operand, or an I/O failure.
pub fn run<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<(), DriverError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    let operation = lines.pop().ok_or(DriverError::EmptyScript)?;
    let mut operands = Vec::with_capacity(lines.len());
    for (idx, line) in lines.iter().enumerate() {
        let value: BigInt = line
            .parse()
            .map_err(|source| DriverError::Parse { line: idx + 1, source })?;
        operands.push(value);
    }

    tracing::debug!(
        operation = %operation,
        operand_count = operands.len(),
        "running demo script"
    );

    // Unary negation shares the '-' token with subtraction and is selected
    // by operand count.
    if operation == "-" && operands.len() == 1 {
        let value = operands.into_iter().next().unwrap();
        writeln!(writer, "{}", value)?;
        writeln!(writer, "Result: {}", -value)?;
        return Ok(());
    }

    let [num1, num2] = take_two(&operation, operands)?;
    match operation.as_str() {
        "+" => {
            writeln!(writer, "{}+{}", num1, num2)?;
            writeln!(writer, "Result: {}", &num1 + &num2)?;
        },
        "+=" => {
            writeln!(writer, "{}+={}", num1, num2)?;
            let mut acc = num1;
            acc += &num2;
            writeln!(writer, "Result: {}", acc)?;
        },
        "-" => {
            writeln!(writer, "{}-{}", num1, num2)?;
            writeln!(writer, "Result: {}", &num1 - &num2)?;
        },
        "-=" => {
            writeln!(writer, "{}-={}", num1, num2)?;
            let mut acc = num1;
            acc -= &num2;
            writeln!(writer, "Result: {}", acc)?;
        },
        "*" => {
            writeln!(writer, "{}*{}", num1, num2)?;
            writeln!(writer, "Result: {}", &num1 * &num2)?;
        },
        "*=" => {
            writeln!(writer, "{}*={}", num1, num2)?;
            let mut acc = num1;
            acc *= &num2;
            writeln!(writer, "Result: {}", acc)?;
        },
        "==" => {
            writeln!(writer, "{}=={}", num1, num2)?;
            writeln!(writer, "Result: {}", num1 == num2)?;
        },
        "!=" => {
            writeln!(writer, "{}!={}", num1, num2)?;
            writeln!(writer, "Result: {}", num1 != num2)?;
        },
        "<" => {
            writeln!(writer, "{}<{}", num1, num2)?;
            writeln!(writer, "Result: {}", num1 < num2)?;
        },
        ">" => {
            writeln!(writer, "{}>{}", num1, num2)?;
            writeln!(writer, "Result: {}", num1 > num2)?;
        },
        "<=" => {
            writeln!(writer, "{}<={}", num1, num2)?;
            writeln!(writer, "Result: {}", num1 <= num2)?;
        },
        ">=" => {
            writeln!(writer, "{}>={}", num1, num2)?;
            writeln!(writer, "Result: {}", num1 >= num2)?;
        },
        "=" => {
            writeln!(writer, "num1:{}  num2:{}", num1, num2)?;
            writeln!(writer, "operation: num1 = num2")?;
            let num1 = num2.clone();
            writeln!(writer, "num1:{}  num2:{}", num1, num2)?;
        },
        other => return Err(DriverError::UnknownOperation(other.to_string())),
    }
    Ok(())
}

fn take_two(operation: &str, operands: Vec<BigInt>) -> Result<[BigInt; 2], DriverError> {
    let found = operands.len();
    let mut iter = operands.into_iter();
    match (iter.next(), iter.next()) {
        (Some(a), Some(b)) => Ok([a, b]),
        _ => Err(DriverError::MissingOperands {
            operation: operation.to_string(),
            found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> Result<String, DriverError> {
        let mut output = Vec::new();
        run(Cursor::new(script), &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_addition_script() {
        let out = run_script("123\n456\n+\n").unwrap();
        assert_eq!(out, "123+456\nResult: 579\n");
    }

    #[test]
    fn test_subtraction_script() {
        let out = run_script("100\n999\n-\n").unwrap();
        assert_eq!(out, "100-999\nResult: -899\n");
    }

    #[test]
    fn test_compound_multiply_script() {
        let out = run_script("-5\n3\n*=\n").unwrap();
        assert_eq!(out, "-5*=3\nResult: -15\n");
    }

    #[test]
    fn test_unary_negation_script() {
        let out = run_script("42\n-\n").unwrap();
        assert_eq!(out, "42\nResult: -42\n");
    }

    #[test]
    fn test_comparison_script() {
        let out = run_script("-10\n5\n<\n").unwrap();
        assert_eq!(out, "-10<5\nResult: true\n");

        let out = run_script("10\n10\n>=\n").unwrap();
        assert_eq!(out, "10>=10\nResult: true\n");
    }

    #[test]
    fn test_assignment_script() {
        let out = run_script("1\n2\n=\n").unwrap();
        assert_eq!(out, "num1:1  num2:2\noperation: num1 = num2\nnum1:2  num2:2\n");
    }

    #[test]
    fn test_empty_script() {
        assert!(matches!(run_script(""), Err(DriverError::EmptyScript)));
        assert!(matches!(run_script("\n\n"), Err(DriverError::EmptyScript)));
    }

    #[test]
    fn test_bad_operand() {
        let err = run_script("12a3\n4\n+\n").unwrap_err();
        match err {
            DriverError::Parse { line, source } => {
                assert_eq!(line, 1);
                assert_eq!(source, NumericError::InvalidFormat);
            },
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_operation() {
        let err = run_script("1\n2\n/\n").unwrap_err();
        assert!(matches!(err, DriverError::UnknownOperation(op) if op == "/"));
    }

    #[test]
    fn test_missing_operand() {
        let err = run_script("1\n+\n").unwrap_err();
        assert!(matches!(
            err,
            DriverError::MissingOperands { found: 1, .. }
        ));
    }
}
