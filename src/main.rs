use clap::{Arg, ArgAction, Command as ClapCommand};
use std::process;
use log::error;

use pnmkit::commands::{CommandFactory, PnmkitCommandFactory};
use pnmkit::utils::logger::Logger;

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::SetTrue)
}

fn main() {
    let matches = ClapCommand::new("pnmkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Analyze, transform and draw on Netpbm (PBM/PGM/PPM) images")
        .arg(
            Arg::new("input")
                .help("Input Netpbm file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output image file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(flag("strict", "Reject sample data with fewer than width*height samples"))
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Send all log records to this file instead of the console")
                .value_name("FILE")
                .required(false),
        )
        .arg(flag("invert", "Invert every sample"))
        .arg(flag("flip-horizontal", "Mirror left to right"))
        .arg(flag("flip-vertical", "Mirror top to bottom"))
        .arg(
            Arg::new("rotate")
                .long("rotate")
                .help("Rotate clockwise by N quarter turns")
                .value_name("N")
                .required(false),
        )
        .arg(flag("to-gray", "Convert to a gray image"))
        .arg(flag("to-bitmap", "Convert to a bitmap"))
        .arg(flag("to-color", "Convert to a color image"))
        .arg(
            Arg::new("encoding")
                .long("encoding")
                .help("Output encoding (ascii or binary)")
                .value_name("ENCODING")
                .required(false),
        )
        .arg(
            Arg::new("scene")
                .long("scene")
                .help("Draw the shapes of this TOML scene onto the input")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .format_timestamp(None)
                .init();
        }
    }

    let logger = match Logger::new("pnmkit.log") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = PnmkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            process::exit(1);
        }
    };
}
