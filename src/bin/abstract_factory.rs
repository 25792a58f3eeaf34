// Abstract factory driver: reads a document suite, then a document type,
// and creates that document through the suite.

use std::io::{self, BufRead, Write};
use std::process;

use colored::Colorize;
use design_patterns::config::Settings;
use design_patterns::{logging, process_creation, DocumentSuite, FactoryError, FamilyRegistry, SimpleFactory};
use itertools::Itertools;

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, question: &str) -> Option<String> {
    println!("{question}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line),
        Some(Err(err)) => {
            eprintln!("{} {err}", "failed to read input:".red());
            None
        }
        None => None,
    }
}

fn choose_suite(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    default_family: Option<&str>,
) -> Option<Box<dyn DocumentSuite>> {
    let registry = FamilyRegistry::global();
    let mut question = format!(
        "Enter the type of document suite to create ({}):",
        registry.tags().join("/")
    );
    if let Some(default) = default_family {
        question.push_str(&format!(" [{default}]"));
    }

    loop {
        let mut family = prompt(lines, &question)?;
        if family.trim().is_empty() {
            if let Some(default) = default_family {
                family = default.to_string();
            }
        }
        match registry.resolve(&family) {
            Ok(suite) => return Some(suite),
            Err(err) => println!("{} {err}", "Invalid document suite.".yellow()),
        }
    }
}

fn main() {
    let settings = Settings::from_env().unwrap_or_else(|err| {
        eprintln!("{} {err}", "config error:".red().bold());
        process::exit(2);
    });
    logging::init(&settings.logging);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let Some(suite) = choose_suite(&mut lines, settings.factory.default_family.as_deref()) else {
        return;
    };
    let family = suite.tag().selector();
    let question = format!(
        "Enter the specific document type to create ({}):",
        SimpleFactory::selectors().join("/")
    );

    while let Some(variant) = prompt(&mut lines, &question) {
        println!("\n--- Creating a {} document ---", variant.trim().to_lowercase());
        match process_creation(family, &variant) {
            Ok(report) => {
                println!(
                    "{} {} {} document went through {}",
                    "done:".green().bold(),
                    family,
                    report.kind,
                    report.stages.iter().join(" -> ")
                );
                return;
            }
            Err(err @ FactoryError::UnsupportedVariant { .. }) => {
                println!("{} {err}, pick another type", "unsupported:".yellow().bold());
            }
            Err(err) if err.is_recoverable() => {
                println!("{} {err}", "Invalid document type.".yellow());
            }
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
        }
    }
}
