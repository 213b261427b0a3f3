use std::error::Error;
use std::io::IsTerminal;
use std::time::Duration;

use tracing::{debug, info, warn};

use tagged_core::app::env;
use tagged_core::app::tracing::AppTracingBuilder;

use crate::config::DemoConfig;
use crate::pipeline::{divide_all, Report};

mod config;
mod pipeline;

fn main() -> Result<(), Box<dyn Error>> {
  env::load_dotenv_into_env();
  AppTracingBuilder::default()
    .with_ansi(std::io::stderr().is_terminal())
    .build()?;

  let config = DemoConfig::from_env()?;
  debug!(?config, "loaded configuration");

  let runtime = tokio::runtime::Builder::new_multi_thread()
    .enable_all()
    .build()?;
  let result = runtime.block_on(run(config));

  debug!("shutting down tokio runtime..");
  runtime.shutdown_timeout(Duration::from_secs(1));
  debug!("..done shutting down tokio runtime");

  result
}

async fn run(config: DemoConfig) -> Result<(), Box<dyn Error>> {
  let Report { quotients, first, failures } = divide_all(&config).await;
  for (input, quotient) in quotients {
    info!(%input, quotient, "divided");
  }
  for failure in &failures {
    warn!(%failure, "could not divide");
  }
  match first.into_option() {
    Some(first) => info!(first, "first quotient"),
    None => info!("no quotients"),
  }
  Ok(())
}
