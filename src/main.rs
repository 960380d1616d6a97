use std::io;

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use coffee_machine::{config::MachineConfig, menu::Menu};

fn main() {
    if let Err(err) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("Error initializing the logger: {}", err);
    }

    let path = std::env::args().nth(1);
    let config = match MachineConfig::load(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut menu = Menu::new(config.machine, config.catalog, stdin.lock(), io::stdout());
    if let Err(err) = menu.run() {
        error!("{}", err);
        std::process::exit(1);
    }
}
