use std::{
    error::Error,
    io::{self, BufRead, Write},
};

use onboarding::{config::Config, State};
use tracing::{debug, info};

mod args;
mod command;
mod logger;
mod render;

use command::{parse_command, Command};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<(), Box<dyn Error>> {
    let args = args::parse_args(std::env::args().collect(), VERSION)?;
    let config = Config::from_file(args::config_path(&args)?)?;

    let log_level =
        logger::effective_level(std::env::var("LOG_LEVEL").ok().as_deref(), config.log_level)?;
    logger::setup_logger(log_level, config.log_file.as_deref())?;
    info!("onboard {} starting", VERSION);

    let mut state = State::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", render::render(&state));
    loop {
        print!("{}", render::prompt(&state));
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Apply(msg)) => {
                state.update(msg);
                print!("{}", render::render(&state));
            }
            Ok(Command::Help) => println!("{}", command::HELP),
            Ok(Command::Quit) => break,
            Err(e) => {
                debug!("rejected input {:?}: {}", line.trim_end(), e);
                eprintln!("{}", e);
            }
        }
    }

    info!("onboard exiting");
    Ok(())
}
