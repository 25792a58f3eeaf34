// Builder driver: two listings, one with every field and one without a
// description.

use std::process;

use colored::Colorize;
use design_patterns::config::Settings;
use design_patterns::creational::builder::Listing;
use design_patterns::logging;

fn main() {
    let settings = Settings::from_env().unwrap_or_else(|err| {
        eprintln!("{} {err}", "config error:".red().bold());
        process::exit(2);
    });
    logging::init(&settings.logging);

    let laptop = Listing::builder()
        .name("Laptop")
        .price(1000.0)
        .features(["8GB RAM", "256GB SSD", "Intel Core i7"])
        .build();

    let mobile = Listing::builder()
        .name("Mobile")
        .price(500.0)
        .features(["8GB RAM", "128GB SSD", "Snapdragon 8"])
        .description("Samsung m36")
        .build();

    for listing in [&laptop, &mobile] {
        match serde_json::to_string_pretty(listing) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("{} {err}", "error:".red().bold()),
        }
    }
}
