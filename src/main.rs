//! Formgate CLI - Declarative Form Validation
//!
//! This is a demonstration CLI for the formgate library.

use anyhow::{Context, Result};
use formgate::prelude::*;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("formgate");

    if args.len() < 2 {
        print_usage(program);
        return ExitCode::SUCCESS;
    }

    match args[1].as_str() {
        "rules" => list_rules(),
        "filters" => list_filters(),
        "check" => {
            if args.len() < 4 {
                eprintln!("Error: Please specify a definition and an input file");
                eprintln!(
                    "Usage: {} check <definition.toml|json> <input.json> [--locale <id>] [--messages <file.toml>]",
                    program
                );
                return ExitCode::from(2);
            }
            match check(&args[2], &args[3], &args[4..]) {
                Ok(true) => ExitCode::SUCCESS,
                Ok(false) => ExitCode::from(1),
                Err(error) => {
                    eprintln!("Error: {:#}", error);
                    if let Some(fix) = error
                        .downcast_ref::<FormError>()
                        .and_then(|e| match e {
                            FormError::Config(config) => Some(config.suggested_fix()),
                            _ => None,
                        })
                    {
                        eprintln!("Hint: {}", fix);
                    }
                    ExitCode::from(2)
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(program),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(program);
            ExitCode::from(2)
        }
    }
}

fn print_usage(program: &str) -> ExitCode {
    println!("Formgate v{}", formgate::VERSION);
    println!();
    println!("Usage: {} <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  rules                         List built-in rules");
    println!("  filters                       List built-in filters");
    println!("  check <definition> <input>    Validate a JSON object against a form definition");
    println!("  help                          Show this help message");
    println!();
    println!("Check options:");
    println!("  --locale <id>         Message locale (default: definition, then fr)");
    println!("  --messages <file>     Extra message catalog in TOML");
    println!();
    println!("Exit codes: 0 valid, 1 invalid, 2 configuration error");
    ExitCode::SUCCESS
}

fn list_rules() -> ExitCode {
    let registry = RuleRegistry::with_builtins();
    println!("Available rules ({} total):", registry.len());
    println!();
    for (id, entry) in registry.entries() {
        let id = if entry.takes_parameter {
            format!("{}[n]", id)
        } else {
            id.to_string()
        };
        println!("  • {:<22} {}", id, entry.description);
    }
    ExitCode::SUCCESS
}

fn list_filters() -> ExitCode {
    let registry = FilterRegistry::with_builtins();
    println!("Available filters ({} total):", registry.len());
    println!();
    for (id, entry) in registry.entries() {
        println!("  • {:<22} {}", id, entry.description);
    }
    ExitCode::SUCCESS
}

fn check(definition_path: &str, input_path: &str, options: &[String]) -> Result<bool> {
    let mut locale: Option<String> = None;
    let mut messages = CatalogSet::with_builtins();

    let mut i = 0;
    while i < options.len() {
        match options[i].as_str() {
            "--locale" if i + 1 < options.len() => {
                locale = Some(options[i + 1].clone());
                i += 2;
            }
            "--messages" if i + 1 < options.len() => {
                let extra = CatalogSet::from_file(&options[i + 1])
                    .with_context(|| format!("loading messages from {}", options[i + 1]))?;
                messages.merge(extra);
                i += 2;
            }
            other => {
                log::warn!("Ignoring unknown option: {}", other);
                i += 1;
            }
        }
    }

    let definition = FormDefinition::from_file(definition_path)
        .with_context(|| format!("loading definition from {}", definition_path))?;

    let mut config = definition.config(EngineConfig::default());
    if let Some(locale) = locale {
        config.locale = locale;
    }
    if !messages.has_locale(&config.locale) {
        log::warn!("No messages for locale '{}'", config.locale);
    }

    let mut engine = ValidationEngine::new(
        Arc::new(RuleRegistry::with_builtins()),
        Arc::new(FilterRegistry::with_builtins()),
        Arc::new(messages),
        config,
    );
    engine.apply_definition(&definition);
    engine.preflight()?;

    let input = read_json(Path::new(input_path))?;
    engine.bind_json(&input)?;

    let valid = engine.validate()?;
    if valid {
        println!("{}", serde_json::to_string_pretty(&engine.filtered_values())?);
    } else {
        print!("{}", engine.errors());
    }
    Ok(valid)
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading input from {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing input from {}", path.display()))
}
