//! # tally
//!
//! Command-line front end for the summation and greeting crates.
//!
//! ## Quick Start
//!
//! ### 1. The classic listing
//! ```bash
//! tally demo
//! # Non-Generic Sums: 46 and 62.97
//! # Generic Sums: 46 and 62.97
//! # Generic Sums, type parameters inferred: 46 and 62.97
//! # Generic Sums with Constraint: 46 and 62.97
//! ```
//!
//! ### 2. Sum a JSON mapping
//! ```bash
//! echo '{"first": 34, "second": 12}' > ints.json
//! tally sum --input ints.json
//! # 46
//!
//! # Every entry point, checked against each other
//! tally sum --input ints.json --variant all
//!
//! # Read stdin, force the value kind, print JSON
//! cat prices.json | tally sum --input - --kind float64 --json
//! ```
//!
//! The input must be a JSON object whose values are all numbers of one kind.
//! Strings, booleans, nulls, nested values and a mix of integers and floats
//! are refused before anything is summed.
//!
//! ### 3. Greet someone
//! ```bash
//! tally greet Gladys
//! # Hi, Gladys. Welcome!
//! ```
//!
//! ## Logging
//! Diagnostics go to stderr. `RUST_LOG` sets the filter; `-v`, `-vv` and
//! `-vvv` override it with info, debug and trace.

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::collections::HashMap;
use std::fs;
use std::io;
use tally_core::{
    sum_floats, sum_ints, sum_ints_or_floats, sum_numbers, verify_agreement, KindHint, NumericMap,
};
use tally_greetings::greet;
use tally_models::{Greeting, NumericKind, SumReport, SumValue, SumVariant};
use tracing_subscriber::EnvFilter;

/// tally - sums of numeric mappings, and greetings.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

/// Value kind expected in the input mapping
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    /// Integers if all values are integers, floats if all are floats
    Auto,
    /// 64-bit signed integers
    Int64,
    /// 64-bit floats (integer literals are accepted)
    Float64,
}

impl KindArg {
    fn kind(self) -> Option<NumericKind> {
        match self {
            KindArg::Auto => None,
            KindArg::Int64 => Some(NumericKind::Int64),
            KindArg::Float64 => Some(NumericKind::Float64),
        }
    }
}

impl From<KindArg> for KindHint {
    fn from(k: KindArg) -> Self {
        k.kind().map(KindHint::from).unwrap_or_default()
    }
}

/// Entry point used to compute the sum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Run every entry point and check that they agree
    All,
    /// sum_ints / sum_floats
    NonGeneric,
    /// sum_ints_or_floats with explicit type arguments
    GenericExplicit,
    /// sum_ints_or_floats with inferred type arguments
    GenericInferred,
    /// sum_numbers, bounded by the Number constraint
    Constraint,
}

impl VariantArg {
    fn single(self) -> Option<SumVariant> {
        match self {
            VariantArg::All => None,
            VariantArg::NonGeneric => Some(SumVariant::NonGeneric),
            VariantArg::GenericExplicit => Some(SumVariant::GenericExplicit),
            VariantArg::GenericInferred => Some(SumVariant::GenericInferred),
            VariantArg::Constraint => Some(SumVariant::Constraint),
        }
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the classic listing: every entry point over built-in data.
    Demo,

    /// Sum the values of a JSON object.
    ///
    /// # Examples
    /// ```bash
    /// tally sum --input prices.json
    /// tally sum --input - --kind int64 --variant all
    /// ```
    Sum {
        /// JSON file holding the mapping, or `-` for stdin.
        #[arg(long, short, value_name = "PATH")]
        input: String,

        /// Value kind to expect.
        #[arg(long, value_name = "KIND", value_enum, default_value = "auto")]
        kind: KindArg,

        /// Entry point to sum with.
        #[arg(long, value_name = "VARIANT", value_enum, default_value = "constraint")]
        variant: VariantArg,

        /// Print JSON records instead of bare values.
        #[arg(long)]
        json: bool,
    },

    /// Print a greeting for NAME.
    Greet {
        /// Name to greet. May be empty.
        name: String,

        /// Print a JSON record instead of the bare message.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    match args.cmd {
        Cmd::Demo => demo(),
        Cmd::Sum {
            input,
            kind,
            variant,
            json,
        } => sum_file(&input, kind.into(), variant, json)?,
        Cmd::Greet { name, json } => greet_name(&name, json)?,
    }
    Ok(())
}

/// Installs the stderr subscriber. `log` records from the library crates are
/// forwarded to it.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Prints each entry point's sums over the two built-in mappings.
fn demo() {
    let ints: HashMap<String, i64> =
        HashMap::from([("first".to_string(), 34), ("second".to_string(), 12)]);
    let floats: HashMap<String, f64> =
        HashMap::from([("first".to_string(), 35.98), ("second".to_string(), 26.99)]);

    println!(
        "{}: {} and {}",
        SumVariant::NonGeneric.heading(),
        sum_ints(&ints),
        sum_floats(&floats)
    );
    println!(
        "{}: {} and {}",
        SumVariant::GenericExplicit.heading(),
        sum_ints_or_floats::<String, i64>(&ints),
        sum_ints_or_floats::<String, f64>(&floats)
    );
    println!(
        "{}: {} and {}",
        SumVariant::GenericInferred.heading(),
        sum_ints_or_floats(&ints),
        sum_ints_or_floats(&floats)
    );
    println!(
        "{}: {} and {}",
        SumVariant::Constraint.heading(),
        sum_numbers(&ints),
        sum_numbers(&floats)
    );
}

/// Reads, validates and sums a mapping.
///
/// # Arguments
/// * `input` - Path to a JSON file, or `-` for stdin
/// * `hint` - Value kind to expect
/// * `variant` - Entry point, or `All` to run and cross-check every one
/// * `json` - Print `SumReport` JSON instead of bare values
fn sum_file(input: &str, hint: KindHint, variant: VariantArg, json: bool) -> Result<()> {
    let text = if input == "-" {
        io::read_to_string(io::stdin()).context("failed to read stdin")?
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?
    };

    let map = NumericMap::from_json_str(&text, hint)
        .with_context(|| format!("invalid numeric mapping in {}", source_name(input)))?;
    log::info!(
        "loaded {} {} entries from {}",
        map.len(),
        map.kind(),
        source_name(input)
    );

    match variant.single() {
        Some(v) => {
            let report = map.report(v);
            if json {
                ensure_json_representable(&report)?;
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("{}", report.value);
            }
        }
        None => {
            let reports = map.sum_all();
            let agreed = verify_agreement(&reports)?;
            log::debug!("all {} entry points agree on {}", reports.len(), agreed);
            if json {
                ensure_json_representable(&reports[0])?;
                println!("{}", serde_json::to_string(&reports)?);
            } else {
                for r in &reports {
                    println!("{}: {}", r.variant, r.value);
                }
            }
        }
    }
    Ok(())
}

/// JSON has no infinity or NaN; serde_json would write `null`, which no
/// longer reads back as a `SumReport`.
fn ensure_json_representable(report: &SumReport) -> Result<()> {
    if let SumValue::Float(v) = report.value {
        if !v.is_finite() {
            bail!(
                "sum over {} entries is {}, which JSON cannot represent; rerun without --json",
                report.entries,
                v
            );
        }
    }
    Ok(())
}

fn greet_name(name: &str, json: bool) -> Result<()> {
    let message = greet(name);
    if json {
        let record = Greeting {
            name: name.to_string(),
            message,
        };
        println!("{}", serde_json::to_string(&record)?);
    } else {
        println!("{message}");
    }
    Ok(())
}

fn source_name(input: &str) -> &str {
    if input == "-" {
        "stdin"
    } else {
        input
    }
}
