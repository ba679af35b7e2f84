//! CLI command implementations

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use formgate_core::{
    AutoConfirmer, ConfirmationGate, Confirmer, GateConfig, GateError, RegistrationLog,
    RegistrationRecord, SubmitHandler,
};

use crate::confirm::LineConfirmer;

/// Formgate CLI - confirmation-gated registration
#[derive(Parser)]
#[command(name = "formgate")]
#[command(about = "Confirmation-gated registration from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a registration behind the confirmation gate
    Register {
        /// Name to register
        #[arg(long)]
        name: String,

        /// Registration log path (defaults to the configured path)
        #[arg(long)]
        log: Option<PathBuf>,

        /// Answer the confirmation prompt affirmatively without asking
        #[arg(long)]
        yes: bool,
    },

    /// List accepted registrations
    List {
        /// Registration log path (defaults to the configured path)
        #[arg(long)]
        log: Option<PathBuf>,
    },

    /// Show or update the persisted configuration
    Config {
        /// Set the default registration log path
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

/// The interaction that triggered a CLI submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTrigger;

/// The form control a submission acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Name entered into the form
    pub name: String,
}

/// Submit handler that appends the form's name to the registration log
///
/// Persistence failures are resolved to a `false` result, as the gate's
/// collaborator contract requires; the underlying error is kept so the
/// host can report it after the gate returns.
pub struct LogSubmit<'a> {
    log: &'a RegistrationLog,
    last_error: Option<GateError>,
}

impl<'a> LogSubmit<'a> {
    /// Create a handler writing to the given log
    pub fn new(log: &'a RegistrationLog) -> Self {
        Self {
            log,
            last_error: None,
        }
    }

    /// Take the error from the last failed submission, if any
    pub fn take_error(&mut self) -> Option<GateError> {
        self.last_error.take()
    }
}

impl SubmitHandler for LogSubmit<'_> {
    type Event = SubmitTrigger;
    type Element = RegistrationForm;

    fn submit(&mut self, _event: &SubmitTrigger, form: &RegistrationForm) -> bool {
        match self.log.append(RegistrationRecord::new(form.name.clone())) {
            Ok(()) => {
                info!("Recorded registration for '{}'", form.name);
                true
            }
            Err(e) => {
                error!("Failed to record registration: {}", e);
                self.last_error = Some(e);
                false
            }
        }
    }
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    let config = GateConfig::load();

    match cli.command {
        Commands::Register { name, log, yes } => {
            register(name, log.unwrap_or(config.log_path), yes)
        }
        Commands::List { log } => list(log.unwrap_or(config.log_path)),
        Commands::Config { log } => show_or_update_config(config, log),
    }
}

fn register(name: String, log_path: PathBuf, assume_yes: bool) -> Result<()> {
    let log = RegistrationLog::new(log_path);
    let mut handler = LogSubmit::new(&log);

    let confirmer: Box<dyn Confirmer> = if assume_yes {
        Box::new(AutoConfirmer::affirm())
    } else {
        Box::new(LineConfirmer::new(io::stdin().lock(), io::stdout()))
    };

    let form = RegistrationForm { name };
    let mut gate = ConfirmationGate::new(confirmer, &mut handler);
    let accepted = gate.confirm_and_maybe_submit(&SubmitTrigger, &form);

    if let Some(e) = handler.take_error() {
        return Err(e.into());
    }

    if accepted {
        println!("Registered '{}'", form.name);
    } else {
        println!("Registration cancelled");
    }

    Ok(())
}

fn list(log_path: PathBuf) -> Result<()> {
    let log = RegistrationLog::new(log_path);
    let records = log.load()?;

    if records.is_empty() {
        println!("No registrations recorded");
        return Ok(());
    }

    for record in &records {
        println!(
            "{}  {}",
            record.registered_at.format("%Y-%m-%d %H:%M:%S UTC"),
            record.name
        );
    }

    Ok(())
}

fn show_or_update_config(mut config: GateConfig, log: Option<PathBuf>) -> Result<()> {
    match log {
        Some(path) => {
            config.set_log_path(path)?;
            println!(
                "Default registration log set to {}",
                config.log_path.display()
            );
        }
        None => {
            println!("Registration log: {}", config.log_path.display());
            println!("Tick rate: {} ms", config.tick_rate_ms);
        }
    }

    Ok(())
}
