//! Parse command implementation.

use anyhow::{Context, Result};
use patents_core::{PatentData, PatentRecord, PatentUniverseRecord, Symbol};
use patents_data::IdentifierResolver;
use serde::Serialize;
use std::fmt::Display;

use crate::cli::{OutputFormat, ParseArgs, RecordKind};

pub async fn run(args: ParseArgs) -> Result<()> {
    match args.kind {
        RecordKind::Series => {
            let symbol = Symbol::equity(&args.symbol);
            let record = PatentRecord::parse_line(&symbol, &args.line, args.date)
                .context("Failed to parse time series line")?;
            print_record(&record, args.output)
        }
        RecordKind::Universe => {
            let record =
                PatentUniverseRecord::parse_line(&args.line, args.date, &IdentifierResolver::new())
                    .context("Failed to parse universe line")?;
            print_record(&record, args.output)
        }
    }
}

fn print_record<R: PatentData + Display + Serialize>(record: &R, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Text => {
            println!("{}", record);
            println!("  Observed:  {}", record.time());
            println!("  Available: {}", record.end_time());
            println!("  Value:     {}", record.value());

            let violations = record.metrics().violations();
            if !violations.is_empty() {
                println!("  Inconsistent metrics:");
                for violation in violations {
                    println!("    - {}", violation);
                }
            }
        }
    }
    Ok(())
}
