//! rafiq-auth - token and passcode tooling
//!
//! Operational CLI over the auth core: mint secrets, issue and inspect session
//! tokens, and check passcodes.

#![allow(missing_docs)]

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use rafiq_auth::auth::{BaseClaims, HasBaseClaims, totp};
use rafiq_auth::{AuthService, Config, LogFormat, LogLevel, SessionClaims, SharedSecret, TimeStep};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIME"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "rafiq-auth", version, long_version = LONG_VERSION, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "RAFIQ_AUTH_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a new random signing secret (standard base64)
    Secret,
    /// Issue a session token
    Issue {
        #[arg(long)]
        user_id: i64,
    },
    /// Verify a session token and print its claims
    Verify { token: String },
    /// Passcode operations
    #[command(subcommand)]
    Otp(OtpCommand),
    /// Validate and print the effective configuration
    Config,
}

#[derive(Debug, Subcommand)]
enum OtpCommand {
    /// Print a new passcode secret (standard base64)
    Secret,
    /// Print the passcode for the current window
    Generate {
        #[arg(long)]
        secret: String,
        #[arg(long, default_value_t = totp::DEFAULT_STEP_SECS)]
        step: u64,
    },
    /// Check a passcode against the current window
    Validate {
        #[arg(long)]
        secret: String,
        #[arg(long, default_value_t = totp::DEFAULT_STEP_SECS)]
        step: u64,
        code: String,
    },
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    rafiq_auth::init_logging(cli.log_level, format);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when a check ran cleanly but failed.
fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Command::Secret => {
            println!("{}", SharedSecret::generate().to_base64());
        }
        Command::Issue { user_id } => {
            let service = service(&cli.config)?;
            println!("{}", service.issue_session(user_id)?);
        }
        Command::Verify { token } => {
            let service = service(&cli.config)?;
            let token = service.codec().parse::<SessionClaims>(token.trim())?;
            println!("{}", serde_json::to_string_pretty(token.claims())?);

            let base = token.claims().base();
            if !base.verify() {
                println!("expired at {}", base.expires_at);
                return Ok(false);
            }
            print_remaining(base);
        }
        Command::Otp(otp) => return run_otp(otp),
        Command::Config => {
            let config = Config::load(cli.config.as_deref())?;
            print!("{}", config.to_yaml()?);
        }
    }
    Ok(true)
}

fn run_otp(command: OtpCommand) -> anyhow::Result<bool> {
    match command {
        OtpCommand::Secret => {
            println!("{}", SharedSecret::new(totp::generate_secret()).to_base64());
        }
        OtpCommand::Generate { secret, step } => {
            let secret = SharedSecret::from_base64(&secret).context("invalid --secret")?;
            let step = TimeStep::from_secs(step)?;
            println!("{}", totp::generate(secret.as_bytes(), Utc::now(), step));
        }
        OtpCommand::Validate { secret, step, code } => {
            let secret = SharedSecret::from_base64(&secret).context("invalid --secret")?;
            let step = TimeStep::from_secs(step)?;
            let code = rafiq_auth::Passcode::parse(&code)?;
            let valid = totp::validate(secret.as_bytes(), Utc::now(), step, code.value());
            println!("{}", if valid { "valid" } else { "invalid" });
            return Ok(valid);
        }
    }
    Ok(true)
}

fn service(config: &Option<PathBuf>) -> anyhow::Result<AuthService> {
    let config = Config::load(config.as_deref()).context("failed to load configuration")?;
    debug!("Using issuer {}", config.auth().issuer);
    Ok(AuthService::new(config.auth())?)
}

fn print_remaining(base: &BaseClaims) {
    if let Some(remaining) = base.remaining_at(Utc::now()) {
        println!("valid for another {}s", remaining.num_seconds());
    }
}
