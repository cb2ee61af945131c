//! `guess` - think of a number and let the computer find it.

use std::env;
use std::io;
use std::process;

use anyhow::{Context, Result};
use guess_cli::logging::init_logger;
use guess_cli::{
    spawn_console, Args, CancelToken, CliError, ExitStatus, GameConfig, GuessCommand, CONFIG_ENV,
    USAGE,
};
use tracing::{debug, error};

fn main() {
    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}\n\n{}", err, USAGE);
            process::exit(ExitStatus::Usage.code());
        }
    };

    if args.help {
        println!("{}", USAGE);
        return;
    }

    let status = match run(&args) {
        Ok(status) => status,
        Err(err) => report(&err, args.diagnostic),
    };
    process::exit(status.code());
}

fn run(args: &Args) -> Result<ExitStatus> {
    let config = GameConfig::resolve(args, env::var_os(CONFIG_ENV))
        .context("failed to load configuration")?;
    init_logger(&config.log);
    debug!(?config, "configuration resolved");

    let engine = config
        .build_engine()
        .map_err(CliError::from)
        .context("cannot start a game with this range")?;

    let cancel = CancelToken::new();
    let input = spawn_console(&cancel).context("failed to start the console")?;
    let stdout = io::stdout();
    let mut command = GuessCommand::new(engine, config.protocol, input, stdout.lock())
        .with_diagnostics(args.diagnostic)
        .with_cancel(cancel);

    let status = command.execute().context("game aborted")?;
    Ok(status)
}

fn report(err: &anyhow::Error, diagnostic: bool) -> ExitStatus {
    let status = ExitStatus::for_error(err);
    if status == ExitStatus::Usage {
        eprintln!("{:#}", err);
        return status;
    }

    error!("unexpected error: {:#}", err);
    if diagnostic {
        eprintln!("{:?}", err);
    } else {
        eprintln!("Something improbable occurred. Try --diagnostic for more details.");
    }
    status
}
