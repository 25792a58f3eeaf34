// Singleton driver: shows that every route to a DatabaseConnection ends at
// the same instance or fails.

use std::process;
use std::thread;

use colored::Colorize;
use design_patterns::config::Settings;
use design_patterns::{logging, ConnectionHandle, DatabaseConnection};

fn main() {
    let settings = Settings::from_env().unwrap_or_else(|err| {
        eprintln!("{} {err}", "config error:".red().bold());
        process::exit(2);
    });
    logging::init(&settings.logging);

    println!("=== Lazy access ===");
    println!("state before: {}", DatabaseConnection::state());
    let first = DatabaseConnection::instance();
    let second = DatabaseConnection::instance();
    println!("state after: {}", DatabaseConnection::state());
    println!("same instance: {}", std::ptr::eq(first, second));
    println!("id: {} / {}", first.id(), second.id());
    println!("url: {} (pool of {})", first.url(), first.pool_size());

    println!("\n=== Concurrent access ===");
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| DatabaseConnection::instance().id()))
        .collect();
    let ids: Vec<_> = handles.into_iter().filter_map(|handle| handle.join().ok()).collect();
    println!("all threads saw {}: {}", first.id(), ids.iter().all(|id| *id == first.id()));
    println!("instances created: {}", DatabaseConnection::creation_count());

    println!("\n=== Bypass attempts ===");
    match DatabaseConnection::try_new() {
        Ok(_) => println!("{}", "direct construction succeeded".red()),
        Err(err) => println!("{} {err}", "direct construction:".yellow()),
    }
    match first.try_clone() {
        Ok(_) => println!("{}", "clone succeeded".red()),
        Err(err) => println!("{} {err}", "clone:".yellow()),
    }

    let json = match serde_json::to_string(&ConnectionHandle::current()) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
    };
    println!("serialized: {json}");
    match serde_json::from_str::<ConnectionHandle>(&json) {
        Ok(handle) => println!(
            "{} deserialized to the live instance: {}",
            "ok:".green(),
            std::ptr::eq(handle.connection(), first)
        ),
        Err(err) => eprintln!("{} {err}", "error:".red().bold()),
    }
}
