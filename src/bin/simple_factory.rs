// Simple factory driver: reads a document type from stdin and runs the
// open/save/close template for it.

use std::io::{self, BufRead, Write};
use std::process;

use colored::Colorize;
use design_patterns::config::Settings;
use design_patterns::{logging, DocumentFactory, FactoryError, SimpleFactory};
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

fn main() {
    let settings = Settings::from_env().unwrap_or_else(|err| {
        eprintln!("{} {err}", "config error:".red().bold());
        process::exit(2);
    });
    logging::init(&settings.logging);

    let question = format!(
        "Enter the type of document to create ({}):",
        SimpleFactory::selectors().join("/")
    );
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(selector) = prompt(&mut lines, &question) {
        let factory = match SimpleFactory::resolve(&selector) {
            Ok(factory) => factory,
            Err(err @ FactoryError::UnknownSelector { .. }) => {
                println!("{} {err}", "Invalid document type.".yellow());
                continue;
            }
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
        };

        match factory.new_document() {
            Ok(report) => {
                println!(
                    "{} {} document went through {}",
                    "done:".green().bold(),
                    report.kind,
                    report.stages.iter().join(" -> ")
                );
                return;
            }
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
        }
    }
}
