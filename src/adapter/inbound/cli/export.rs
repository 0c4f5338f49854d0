//! Handler for the `export-features` command.

use std::fs::File;
use std::io::BufWriter;

use tracing::info;

use crate::adapter::inbound::cli::command::ExportArgs;
use crate::adapter::outbound::csv::write_feature_table;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_feature_table;
use crate::infrastructure::config::settings::Config;

/// Encode the historical dataset and write it to `args.output`.
pub fn execute(config: &Config, args: &ExportArgs) -> Result<()> {
    let table = build_feature_table(config)?;
    let file = File::create(&args.output)?;
    write_feature_table(&table, BufWriter::new(file))?;
    info!(
        path = %args.output.display(),
        rows = table.len(),
        columns = table.schema().len(),
        "Feature table exported"
    );
    Ok(())
}
