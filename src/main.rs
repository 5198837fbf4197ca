use std::process;
use log::{error, LevelFilter};

use ringwarp::utils::logger::Logger;
use ringwarp::commands::{cli, CommandFactory, RingwarpCommandFactory};

fn main() {
    let matches = cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file = "ringwarp.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l.with_level(level),
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("ringwarp-global.log", level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = RingwarpCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
