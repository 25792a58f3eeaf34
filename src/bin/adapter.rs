// Adapter driver: one phone, a native charger and an adapted one.

use std::process;

use colored::Colorize;
use design_patterns::config::Settings;
use design_patterns::logging;
use design_patterns::structural::adapter::{ChargerSrt, ChargerXyz, IPhone, UsbCToLightning};

fn main() {
    let settings = Settings::from_env().unwrap_or_else(|err| {
        eprintln!("{} {err}", "config error:".red().bold());
        process::exit(2);
    });
    logging::init(&settings.logging);

    println!("Program started");
    let native = IPhone::new(Box::new(ChargerXyz));
    println!("{}", native.charge());

    let adapted = IPhone::new(Box::new(UsbCToLightning::new(ChargerSrt)));
    println!("{}", adapted.charge().cyan());
}
