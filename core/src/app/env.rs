use std::env::VarError;
use std::str::FromStr;

use thiserror::Error;

/// Loads variables from a `.env` file in the current directory or its ancestors into the process environment.
/// Variables that are already set are kept. A missing `.env` file is not an error.
pub fn load_dotenv_into_env() {
  match dotenvy::dotenv() {
    Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
    Err(e) if e.not_found() => {}
    Err(cause) => tracing::warn!(%cause, "failed to load .env file; continuing without it"),
  }
}

#[derive(Debug, Error)]
pub enum EnvVarError {
  #[error("Environment variable '{name}' is not valid unicode")]
  NotUnicode { name: &'static str },
  #[error("Environment variable '{name}' with value '{value}' could not be parsed: {message}")]
  Parse { name: &'static str, value: String, message: String },
}

/// Reads and parses environment variable `name`, or returns `default` if it is not set.
pub fn parse_var_or<T>(name: &'static str, default: T) -> Result<T, EnvVarError> where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match std::env::var(name) {
    Ok(value) => value.parse().map_err(|e: T::Err| EnvVarError::Parse { name, message: e.to_string(), value }),
    Err(VarError::NotPresent) => Ok(default),
    Err(VarError::NotUnicode(_)) => Err(EnvVarError::NotUnicode { name }),
  }
}
