use clap::{Parser, Subcommand};
use jouken::prelude::*;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

/// Inspect stored personalization rules
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a stored wire value and report its summary, validity and canonical form
    Inspect {
        /// Path to a file holding the stored value, or '-' for stdin
        #[arg(default_value = "-")]
        path: String,

        /// Print the canonical form as indented JSON
        #[arg(short, long)]
        pretty: bool,
    },
    /// List the known signal fields and operators
    Fields,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect { path, pretty } => run_inspect(&path, pretty),
        Command::Fields => run_fields(),
    }
}

fn run_inspect(path: &str, pretty: bool) {
    let stored = read_input(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read '{}': {}", path, e)));

    let group = decode_strict(Some(stored.as_str()))
        .unwrap_or_else(|e| exit_with_error(&format!("Malformed stored rule: {}", e)));

    println!("Logic:      {} ({})", group.logic, group.logic.label());
    println!("Conditions: {}", group.len());
    for (index, condition) in group.conditions.iter().enumerate() {
        let mut unknown = Vec::new();
        if !condition.field.is_known() {
            unknown.push("field");
        }
        if !condition.operator.is_known() {
            unknown.push("operator");
        }
        let marker = if unknown.is_empty() {
            String::new()
        } else {
            format!("  [unknown {}]", unknown.join(", "))
        };
        println!(
            "  {}. {}{}",
            index + 1,
            RuleSummary::describe_condition(condition),
            marker
        );
    }

    println!("\nSummary: {}", RuleSummary::describe(&group));
    match check(&group) {
        Ok(()) => println!("Valid:   yes"),
        Err(e) => println!("Valid:   no ({})", e),
    }

    let wire = encode(&group);
    if pretty {
        println!("\n{}", format_pretty(&wire));
    } else {
        println!("\n{}", wire);
    }
}

fn run_fields() {
    println!("--- Signal Fields ---");
    for field in SignalField::known() {
        let kind = match field.value_kind() {
            ValueKind::Text => "text",
            ValueKind::Select => "select",
            ValueKind::Boolean => "boolean",
        };
        println!("{:<18} {:<20} {}", field.as_str(), field.label(), kind);
        for option in field.options() {
            println!("    {:<14} {}", option.value, option.label);
        }
    }

    println!("\n--- Operators ---");
    for operator in Operator::known() {
        println!("{:<10} {}", operator.as_str(), operator.label());
    }
}

fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
