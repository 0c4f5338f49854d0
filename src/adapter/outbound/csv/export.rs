//! Feature-table export.
//!
//! Writes the encoded historical matrix as CSV: one column per schema
//! predictor followed by the three outcome columns.

use std::io::Write;

use crate::domain::table::FeatureTable;
use crate::error::Result;

const TARGET_COLUMNS: [&str; 3] = ["quantity_made", "quantity_sold", "quantity_surplus"];

/// Write `table` to `out` as CSV, header first.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_feature_table<W: Write>(table: &FeatureTable, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    let header: Vec<&str> = table.schema().names().chain(TARGET_COLUMNS).collect();
    writer.write_record(&header)?;

    for row in table.rows() {
        let q = row.quantities;
        let fields: Vec<String> = row
            .values
            .iter()
            .chain([q.made, q.sold, q.surplus].iter())
            .map(f64::to_string)
            .collect();
        writer.write_record(&fields)?;
    }

    writer.flush()?;
    Ok(())
}
