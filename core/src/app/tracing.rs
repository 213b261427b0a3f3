use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Installs a global `tracing` subscriber that writes to stderr.
#[derive(Default)]
pub struct AppTracingBuilder {
  ansi: Option<bool>,
}
impl AppTracingBuilder {
  pub fn with_ansi(mut self, ansi: bool) -> Self {
    self.ansi = Some(ansi);
    self
  }

  /// Installs the subscriber. The filter is read from the `CONSOLE_LOG` environment variable, defaulting to errors
  /// only.
  pub fn build(self) -> Result<(), TryInitError> {
    let console_filter = EnvFilter::try_from_env("CONSOLE_LOG").unwrap_or_default();
    tracing_subscriber::registry()
      .with(
        tracing_subscriber::fmt::layer()
          .with_writer(std::io::stderr)
          .with_ansi(self.ansi.unwrap_or(true))
          .with_filter(console_filter)
      )
      .try_init()
  }
}
