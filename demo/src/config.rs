use tagged_core::app::env::{parse_var_or, EnvVarError};

#[derive(Clone, Debug)]
pub struct DemoConfig {
  /// Comma-separated numbers to divide.
  pub inputs: String,
  pub divisor: i64,
  /// Delay of the simulated asynchronous lookup of the divisor.
  pub delay_ms: u64,
}

impl DemoConfig {
  pub fn from_env() -> Result<Self, EnvVarError> {
    Ok(Self {
      inputs: parse_var_or("DEMO_INPUTS", "12,7,x,-4".to_string())?,
      divisor: parse_var_or("DEMO_DIVISOR", 2)?,
      delay_ms: parse_var_or("DEMO_DELAY_MS", 5)?,
    })
  }
}
