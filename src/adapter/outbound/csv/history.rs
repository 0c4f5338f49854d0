//! Historical sales dataset backed by a CSV file.
//!
//! The file must have a header row naming the seven fixed columns (in any
//! order). Every other column is treated as a numeric passthrough predictor,
//! except precomputed calendar columns, which are ignored and derived again
//! from `date`. Headers shaped like one-hot indicators are rejected.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::domain::calendar::parse_date;
use crate::domain::item::MenuItem;
use crate::domain::record::{HistoricalDataset, Quantities, SalesRecord};
use crate::domain::schema::{CalendarFeature, ITEM_PREFIX, WEEKDAY_PREFIX};
use crate::error::{DatasetError, Result};
use crate::port::outbound::history::SalesHistory;

const DATE: &str = "date";
const DAY: &str = "day";
const ITEM_NAME: &str = "item_name";
const ESTABLISHMENT_ID: &str = "establishmentId";
const QUANTITY_MADE: &str = "quantity_made";
const QUANTITY_SOLD: &str = "quantity_sold";
const QUANTITY_SURPLUS: &str = "quantity_surplus";

const REQUIRED: [&str; 7] = [
    DATE,
    DAY,
    ITEM_NAME,
    ESTABLISHMENT_ID,
    QUANTITY_MADE,
    QUANTITY_SOLD,
    QUANTITY_SURPLUS,
];

/// Positions of the fixed columns within a header row.
struct Layout {
    date: usize,
    day: usize,
    item_name: usize,
    establishment_id: usize,
    quantity_made: usize,
    quantity_sold: usize,
    quantity_surplus: usize,
    passthrough: Vec<(usize, String)>,
}

fn is_calendar_column(header: &str) -> bool {
    CalendarFeature::ALL
        .iter()
        .any(|feature| feature.column_name() == header)
}

impl Layout {
    fn from_headers(headers: &StringRecord) -> std::result::Result<Self, DatasetError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(DatasetError::MissingColumn { column })
        };
        let mut passthrough = Vec::new();
        for (idx, header) in headers.iter().enumerate() {
            if REQUIRED.contains(&header) || is_calendar_column(header) {
                continue;
            }
            if header.starts_with(ITEM_PREFIX) || header.starts_with(WEEKDAY_PREFIX) {
                return Err(DatasetError::ReservedColumn {
                    column: header.to_string(),
                });
            }
            passthrough.push((idx, header.to_string()));
        }

        Ok(Self {
            date: find(DATE)?,
            day: find(DAY)?,
            item_name: find(ITEM_NAME)?,
            establishment_id: find(ESTABLISHMENT_ID)?,
            quantity_made: find(QUANTITY_MADE)?,
            quantity_sold: find(QUANTITY_SOLD)?,
            quantity_surplus: find(QUANTITY_SURPLUS)?,
            passthrough,
        })
    }

    fn parse(&self, line: u64, row: &StringRecord) -> std::result::Result<SalesRecord, DatasetError> {
        let field = |idx: usize| row.get(idx).unwrap_or_default();
        let number = |idx: usize, column: &str| {
            let raw = field(idx);
            raw.parse::<f64>().map_err(|e| DatasetError::InvalidValue {
                line,
                column: column.to_string(),
                reason: format!("'{raw}' is not a number: {e}"),
            })
        };
        let text = |idx: usize, column: &str| {
            let raw = field(idx);
            if raw.is_empty() {
                Err(DatasetError::InvalidValue {
                    line,
                    column: column.to_string(),
                    reason: "value is empty".to_string(),
                })
            } else {
                Ok(raw.to_string())
            }
        };

        let date = parse_date(field(self.date)).map_err(|e| DatasetError::InvalidValue {
            line,
            column: DATE.to_string(),
            reason: e.to_string(),
        })?;

        Ok(SalesRecord {
            date,
            day: text(self.day, DAY)?,
            item: MenuItem::new(text(self.item_name, ITEM_NAME)?),
            establishment_id: field(self.establishment_id).to_string(),
            quantities: Quantities {
                made: number(self.quantity_made, QUANTITY_MADE)?,
                sold: number(self.quantity_sold, QUANTITY_SOLD)?,
                surplus: number(self.quantity_surplus, QUANTITY_SURPLUS)?,
            },
            passthrough: self
                .passthrough
                .iter()
                .map(|(idx, column)| number(*idx, column))
                .collect::<std::result::Result<_, _>>()?,
        })
    }
}

/// Loads [`HistoricalDataset`]s from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvHistory {
    path: PathBuf,
}

impl CsvHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SalesHistory for CsvHistory {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<HistoricalDataset> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_path(&self.path)
            .map_err(|source| DatasetError::Open {
                path: self.describe(),
                source,
            })?;

        let headers = reader.headers().map_err(DatasetError::Headers)?.clone();
        let layout = Layout::from_headers(&headers)?;

        let mut records = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            // Header is line 1.
            let line = idx as u64 + 2;
            let row = row.map_err(|source| DatasetError::Row { line, source })?;
            records.push(layout.parse(line, &row)?);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty.into());
        }

        debug!(
            path = %self.path.display(),
            rows = records.len(),
            passthrough = layout.passthrough.len(),
            "Loaded historical dataset"
        );

        Ok(HistoricalDataset {
            passthrough_columns: layout.passthrough.into_iter().map(|(_, name)| name).collect(),
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::Error;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_records_and_passthrough_columns() {
        let file = write_csv(
            "date,day,item_name,establishmentId,covers,quantity_made,quantity_sold,quantity_surplus\n\
             2024-01-01,Monday,Biryani,E1,40,30,28,2\n\
             2024-01-02, Tuesday ,Idli,E1,35,20,20,0\n",
        );

        let dataset = CsvHistory::new(file.path()).load().unwrap();

        assert_eq!(dataset.passthrough_columns, ["covers"]);
        assert_eq!(dataset.len(), 2);
        let second = &dataset.records[1];
        assert_eq!(second.day, "Tuesday");
        assert_eq!(second.item.as_str(), "Idli");
        assert_eq!(second.passthrough, [35.0]);
        assert_eq!(second.quantities.sold, 20.0);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let file = write_csv("date,day,item_name,quantity_made,quantity_sold,quantity_surplus\n");

        let err = CsvHistory::new(file.path()).load().unwrap_err();
        assert!(matches!(
            err,
            Error::Dataset(DatasetError::MissingColumn {
                column: "establishmentId"
            })
        ));
    }

    #[test]
    fn malformed_values_carry_line_numbers() {
        let file = write_csv(
            "date,day,item_name,establishmentId,quantity_made,quantity_sold,quantity_surplus\n\
             2024-01-01,Monday,Biryani,E1,30,28,2\n\
             2024-01-02,Tuesday,Idli,E1,twenty,20,0\n",
        );

        match CsvHistory::new(file.path()).load() {
            Err(Error::Dataset(DatasetError::InvalidValue { line, column, .. })) => {
                assert_eq!(line, 3);
                assert_eq!(column, "quantity_made");
            }
            other => panic!("expected invalid value error, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_is_empty() {
        let file = write_csv(
            "date,day,item_name,establishmentId,quantity_made,quantity_sold,quantity_surplus\n",
        );

        let err = CsvHistory::new(file.path()).load().unwrap_err();
        assert!(matches!(err, Error::Dataset(DatasetError::Empty)));
    }

    #[test]
    fn precomputed_calendar_columns_are_not_passthrough() {
        let file = write_csv(
            "date,day,item_name,establishmentId,day_of_week,veg_special,covers,quantity_made,quantity_sold,quantity_surplus\n\
             2024-12-24,Tuesday,Idli,E1,1,0,40,30,28,2\n",
        );

        let dataset = CsvHistory::new(file.path()).load().unwrap();

        assert_eq!(dataset.passthrough_columns, ["covers"]);
        assert_eq!(dataset.records[0].passthrough, [40.0]);
    }

    #[test]
    fn indicator_shaped_headers_are_rejected() {
        for header in ["item_name_Idli", "day_Tuesday"] {
            let file = write_csv(&format!(
                "date,day,item_name,establishmentId,{header},quantity_made,quantity_sold,quantity_surplus\n\
                 2024-12-24,Tuesday,Idli,E1,1,30,28,2\n"
            ));

            match CsvHistory::new(file.path()).load() {
                Err(Error::Dataset(DatasetError::ReservedColumn { column })) => {
                    assert_eq!(column, header);
                }
                other => panic!("expected reserved column error, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_file_fails_to_open() {
        let err = CsvHistory::new("/nonexistent/history.csv").load().unwrap_err();
        assert!(matches!(err, Error::Dataset(DatasetError::Open { .. })));
    }
}
