mod args;
mod command;
mod hex;
mod render;
mod session;
mod shell;
#[cfg(test)]
mod testlog;
mod transport;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::LevelFilter;
use tokio::io::BufReader;

use session::{DisplayConfig, SessionConfig};
use shell::{Shell, NAME, VERSION};
use transport::TcpTransport;

#[derive(Parser)]
#[clap(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Debug mode
    #[clap(short, long, action)]
    debug: bool,

    /// Server host
    #[clap(short, long, value_parser, default_value = "localhost")]
    host: String,

    /// Server TCP port
    #[clap(short, long, value_parser = clap::value_parser!(u16).range(1..), default_value_t = 502)]
    port: u16,

    /// Server timeout delay in s
    #[clap(short, long, value_parser = parse_timeout_arg, default_value_t = 5.0)]
    timeout: f64,

    /// Unit-id
    #[clap(short, long, value_parser = clap::value_parser!(u8).range(1..), default_value_t = 1)]
    unit_id: u8,

    /// Commands to run, separated by ";"
    #[clap(short, long, value_parser)]
    cmd: Option<String>,

    /// Show values in hexadecimal
    #[clap(long, action)]
    dump_hex: bool,

    /// Show register pairs as 32-bit values
    #[clap(long, action)]
    dump_32b: bool,

    /// Swap the two bytes of each register
    #[clap(long, action)]
    swap_bytes: bool,

    /// Swap the two registers of 32-bit values
    #[clap(long, action)]
    swap_words: bool,

    /// Print version and exit
    #[clap(short = 'v', long = "version", action)]
    show_version: bool,

    /// Show this help message and exit
    #[clap(long = "help", action)]
    show_help: bool,

    /// Command to execute (one-shot mode)
    #[clap(value_parser)]
    command: Vec<String>,
}

impl Args {
    /// `-c` wins over trailing words.
    fn script(&self) -> Option<String> {
        match &self.cmd {
            Some(cmd) => Some(cmd.clone()),
            None if !self.command.is_empty() => Some(self.command.join(" ")),
            None => None,
        }
    }
}

fn parse_timeout_arg(arg: &str) -> Result<f64, String> {
    session::parse_timeout(arg).ok_or_else(|| format!("\"{arg}\" is not a positive number of seconds"))
}

/// Install env_logger and return the level to fall back to when debug mode is
/// off: `Warn`, or whatever `RUST_LOG` asks for when it is set.
fn init_logger() -> Result<LevelFilter> {
    let from_env = std::env::var_os("RUST_LOG").is_some();
    let logger = env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .format_timestamp(None)
        .build();
    let floor = if from_env {
        logger.filter()
    } else {
        LevelFilter::Warn
    };
    log::set_boxed_logger(Box::new(logger)).context("installing logger")?;
    Ok(floor)
}

#[tokio::main]
async fn main() -> Result<()> {
    let argv = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let cli = Args::parse_from(hex::preprocess(argv));
    let log_floor = init_logger()?;
    log::set_max_level(session::log_level(cli.debug, log_floor));

    if cli.show_help {
        Args::command().print_help().context("printing help")?;
        println!();
        return Ok(());
    }
    if cli.show_version {
        println!("{NAME} {VERSION}");
        return Ok(());
    }

    let session = SessionConfig {
        host: cli.host.clone(),
        port: cli.port,
        unit_id: cli.unit_id,
        timeout: cli.timeout,
        debug: cli.debug,
        log_floor,
    };
    let display = DisplayConfig {
        dump_hex: cli.dump_hex,
        dump_32b: cli.dump_32b,
        swap_bytes: cli.swap_bytes,
        swap_words: cli.swap_words,
    };
    log::debug!("session: {session:?}, display: {display:?}");

    let mut shell = Shell::new(session, display, TcpTransport::new(), std::io::stdout());
    let script = cli.script();
    let session_run = async {
        match script {
            Some(script) => shell.run_script(&script).await,
            None => shell.run_interactive(BufReader::new(tokio::io::stdin())).await,
        }
    };

    tokio::select! {
        result = session_run => result.context("shell session aborted"),
        _ = tokio::signal::ctrl_c() => {
            // a pending stdin read would keep the runtime from shutting down
            println!();
            std::process::exit(0);
        }
    }
}
