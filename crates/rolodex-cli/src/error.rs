use anyhow::Error;
use rolodex_config::ConfigError;
use rolodex_core::{CoreError, CoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub fn usage(text: &'static str) -> Error {
    CliError::Usage(text).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(error_code(err))
}

pub fn error_code(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(CliError::Usage(_)) = cause.downcast_ref::<CliError>() {
            return EXIT_INVALID_INPUT;
        }
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return match core_err.kind() {
                CoreErrorKind::Validation => EXIT_INVALID_INPUT,
                CoreErrorKind::NotFound => EXIT_NOT_FOUND,
            };
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
    }
    EXIT_FAILURE
}

/// Errors a single REPL command may recover from; anything else ends the loop.
pub fn is_recoverable(err: &Error) -> bool {
    err.chain().any(|cause| {
        cause.downcast_ref::<CliError>().is_some() || cause.downcast_ref::<CoreError>().is_some()
    })
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidWindowDays(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
