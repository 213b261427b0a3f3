use std::time::Duration;

use thiserror::Error;
use tracing::{debug, instrument};

use tagged_core::{FirstExt, Maybe, Outcome, OutcomeFutureExt, Pair};

use crate::config::DemoConfig;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum DivideError {
  #[error("'{input}' is not a number: {message}")]
  Parse { input: String, message: String },
  #[error("'{input}' is not divisible by {divisor}")]
  NotDivisible { input: String, divisor: i64 },
  #[error("divisor lookup failed: {0}")]
  Lookup(String),
  #[error("divisor is zero")]
  DivideByZero,
}

#[derive(Debug)]
pub struct Report {
  pub quotients: Vec<(String, i64)>,
  pub first: Maybe<i64>,
  pub failures: Vec<DivideError>,
}

/// Simulates fetching the divisor from somewhere that takes a while.
async fn lookup_divisor(divisor: i64, delay: Duration) -> Outcome<i64, DivideError> {
  let task = tokio::spawn(async move {
    tokio::time::sleep(delay).await;
    divisor
  });
  task.into_outcome(|e| DivideError::Lookup(e.to_string())).await
    .filter(|divisor| *divisor != 0, DivideError::DivideByZero)
}

fn parse(input: &str) -> Outcome<i64, DivideError> {
  Outcome::from(input.trim().parse::<i64>())
    .map_error(|e| DivideError::Parse { input: input.to_string(), message: e.to_string() })
}

fn divide(input: &str, divisor: i64) -> Outcome<Pair<String, i64>, DivideError> {
  parse(input)
    .filter(|value| value.checked_rem(divisor) == Some(0), DivideError::NotDivisible { input: input.to_string(), divisor })
    .map(|value| Pair::new(input.trim().to_string(), value / divisor))
}

#[instrument(skip_all)]
pub async fn divide_all(config: &DemoConfig) -> Report {
  let divisor = lookup_divisor(config.divisor, Duration::from_millis(config.delay_ms)).await
    .tap(|divisor| debug!(divisor, "looked up divisor"));

  let mut quotients = Vec::new();
  let mut failures = Vec::new();
  for input in config.inputs.split(',') {
    let outcome = divisor.clone().flat_map(|divisor| divide(input, divisor));
    match outcome {
      Outcome::Done(quotient) => quotients.push(quotient.into_tuple()),
      Outcome::Fail(error) => failures.push(error),
    }
  }
  let first = quotients.iter().first_maybe().map(|(_, quotient)| *quotient);
  Report { quotients, first, failures }
}
