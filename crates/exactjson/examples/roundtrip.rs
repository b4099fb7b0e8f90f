//! Reads a JSON object from stdin, bumps `"revision"`, and writes it back with
//! member order and number text untouched.
//!
//! ```text
//! echo '{"name":"x","revision":1,"price":10.50}' | cargo run --example roundtrip
//! {"name":"x","revision":2,"price":10.50}
//! ```
//!
//! Pass `--ascii` to escape everything outside printable ASCII.
#![allow(missing_docs)]

use std::{
    io::{self, Read, Write},
    process::ExitCode,
};

use exactjson::{AsciiOnly, LookupError, Minimal, parse_object_bytes};

fn main() -> ExitCode {
    let ascii = std::env::args().skip(1).any(|arg| arg == "--ascii");

    let mut input = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut input) {
        eprintln!("error: failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }

    let mut object = match parse_object_bytes(&input) {
        Ok(object) => object,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match object.get_int::<u64>("revision") {
        Ok(revision) => object.set_int("revision", revision.saturating_add(1)),
        Err(LookupError::NoMatchingMember) => object.set_int("revision", 1u64),
        Err(err) => {
            eprintln!("error: \"revision\": {err}");
            return ExitCode::FAILURE;
        }
    }

    let output = if ascii {
        object.to_json_with(&AsciiOnly)
    } else {
        object.to_json_with(&Minimal)
    };
    if writeln!(io::stdout().lock(), "{output}").is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
