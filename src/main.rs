//! Command-line front end for the float128 emulator.
//!
//! Takes six positional arguments
//! (`aMan aExp bMan bExp operation largeResult`), runs one computation and
//! prints the ABI-encoded result pair to stdout without a trailing newline,
//! so the output can be compared byte-for-byte against a contract call.
//!
//! Malformed arguments and domain errors are reported on stderr with a
//! nonzero exit; the computation itself never sees unparsed input.

extern crate env_logger;
extern crate float128;
extern crate num_bigint;

use float128::{encode_pair, Emulator, FloatPair, Op};
use num_bigint::BigInt;
use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::process;

const USAGE: &str = "usage: float128 <aMan> <aExp> <bMan> <bExp> <operation> <largeResult>";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(encoded) => {
            if let Err(err) = write_output(&encoded) {
                eprintln!("float128: failed to write result: {}", err);
                process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("float128: {}", err);
            process::exit(1);
        }
    }
}

fn write_output(encoded: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(encoded.as_bytes())?;
    stdout.flush()
}

fn run(args: &[String]) -> Result<String, Box<dyn Error>> {
    if args.len() != 6 {
        return Err(USAGE.into());
    }

    let a = FloatPair::new(
        parse_mantissa(&args[0], "aMan")?,
        parse_exponent(&args[1], "aExp")?,
    );
    let b = FloatPair::new(
        parse_mantissa(&args[2], "bMan")?,
        parse_exponent(&args[3], "bExp")?,
    );
    let op: Op = args[4].parse()?;
    let large_result = parse_exponent(&args[5], "largeResult")? != 0;

    let mut emulator = Emulator::new();
    let result = emulator.compute(op, &a, &b, large_result)?;
    Ok(encode_pair(&result)?)
}

fn parse_mantissa(arg: &str, name: &str) -> Result<BigInt, String> {
    arg.parse()
        .map_err(|_| format!("{}: expected an integer, got `{}`", name, arg))
}

fn parse_exponent(arg: &str, name: &str) -> Result<i64, String> {
    arg.parse()
        .map_err(|_| format!("{}: expected an integer, got `{}`", name, arg))
}
