// ============================================================================
// Basic Usage Example
// ============================================================================

use bigint_engine::prelude::*;

fn main() {
    println!("=== BigInt Engine Example ===\n");

    // Parse operands far beyond i64 range
    let a: BigInt = "123456789012345678901234567890".parse().unwrap();
    let b: BigInt = "-987654321098765432109876543210".parse().unwrap();

    println!("a = {}", a);
    println!("b = {}", b);

    println!("\nArithmetic:");
    println!("a + b = {}", &a + &b);
    println!("a - b = {}", &a - &b);
    println!("a * b = {}", &a * &b);

    println!("\nComparisons:");
    println!("a >  b : {}", a > b);
    println!("a == a : {}", a == a);
    println!("-a <  a : {}", -a.clone() < a);

    // Compound assignment mutates in place
    let mut acc = BigInt::from(1i64);
    for i in 2i64..=30 {
        acc *= BigInt::from(i);
    }
    println!("\n30! = {}", acc);

    // Parsing rejects malformed input instead of guessing
    match "12a3".parse::<BigInt>() {
        Ok(value) => println!("parsed: {}", value),
        Err(err) => println!("\nparse failure as expected: {}", err),
    }
}
