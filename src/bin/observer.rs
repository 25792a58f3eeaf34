// Observer driver: three subscribers on one channel, one of them leaving.

use std::process;

use colored::Colorize;
use design_patterns::behavioral::observer::{Channel, FeedSubscriber, NamedSubscriber};
use design_patterns::config::Settings;
use design_patterns::logging;

fn main() {
    let settings = Settings::from_env().unwrap_or_else(|err| {
        eprintln!("{} {err}", "config error:".red().bold());
        process::exit(2);
    });
    logging::init(&settings.logging);

    let mut channel = Channel::new("rust-weekly");
    channel.subscribe(Box::new(NamedSubscriber::new("chinmay")));
    let anvi = channel.subscribe(Box::new(NamedSubscriber::new("anvi")));
    channel.subscribe(Box::new(NamedSubscriber::new("raj")));
    let (feed, uploads) = FeedSubscriber::new();
    channel.subscribe(Box::new(feed));

    let notified = channel.publish("Ownership in ten minutes");
    println!("{} notified {notified} subscribers", channel.name().bold());

    channel.unsubscribe(anvi);
    let notified = channel.publish("Traits and generics");
    println!("{} notified {notified} subscribers", channel.name().bold());

    for upload in uploads.try_iter() {
        println!("feed: {} / {}", upload.channel, upload.title.green());
    }
}
