//! Handler for the `predict` command.

use crate::adapter::inbound::cli::command::PredictArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_context;
use crate::infrastructure::config::settings::Config;

/// Print the forecast for `args.date` as pretty JSON on stdout.
pub fn execute(config: &Config, args: &PredictArgs) -> Result<()> {
    let context = build_context(config)?;
    let forecast = context.predict_all(&args.date)?;
    println!("{}", serde_json::to_string_pretty(&forecast)?);
    Ok(())
}
