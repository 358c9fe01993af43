// ============================================================================
// BigInt Demo Binary
// Runs an operation script (see driver module) against stdout
// ============================================================================

use bigint_engine::driver;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "demo.txt".to_string());
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error opening {}: {}", path, err);
            return ExitCode::FAILURE;
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = driver::run(BufReader::new(file), &mut out) {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
