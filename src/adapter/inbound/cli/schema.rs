//! Handler for the `schema` command.

use crate::error::Result;
use crate::infrastructure::bootstrap::build_feature_table;
use crate::infrastructure::config::settings::Config;

/// Print one `index<TAB>kind<TAB>name` line per schema column.
///
/// Only the dataset is loaded; the model artifact is not needed.
pub fn execute(config: &Config) -> Result<()> {
    let table = build_feature_table(config)?;
    for (idx, column) in table.schema().columns().iter().enumerate() {
        println!("{idx}\t{}\t{}", column.kind().label(), column.name());
    }
    Ok(())
}
