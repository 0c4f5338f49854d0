//! A one-week, four-item historical dataset and matching model artifacts.
//!
//! The week runs Monday 2024-12-23 to Sunday 2024-12-29, so 2024-12-25 is a
//! vegetarian special day under the default registry. Items sort as
//! Biryani < Dal Makhani < Paneer Tikka < Veg Pulao, making Biryani the
//! one-hot reference item and Friday the reference weekday.

use std::fmt::Write;
use std::sync::Arc;

use chrono::{Days, NaiveDate};

use crate::adapter::outbound::model::LinearModel;
use crate::application::context::ServiceContext;
use crate::application::features::FeatureTableBuilder;
use crate::domain::calendar::{weekday_name, SpecialDates};
use crate::domain::item::MenuItem;
use crate::domain::record::{HistoricalDataset, Quantities, SalesRecord};
use crate::domain::schema::{CalendarFeature, ColumnKind, FeatureSchema};
use crate::domain::table::FeatureTable;
use crate::port::outbound::boost::BoostSource;

pub const ITEMS: [&str; 4] = ["Biryani", "Dal Makhani", "Paneer Tikka", "Veg Pulao"];

const CSV_HEADER: &str =
    "date,day,item_name,establishmentId,quantity_made,quantity_sold,quantity_surplus";

fn week() -> impl Iterator<Item = NaiveDate> {
    let monday = NaiveDate::from_ymd_opt(2024, 12, 23).expect("valid fixture date");
    (0..7).filter_map(move |offset| monday.checked_add_days(Days::new(offset)))
}

/// Seven days times four items.
pub fn dataset() -> HistoricalDataset {
    let records = week()
        .enumerate()
        .flat_map(|(day_idx, date)| {
            ITEMS.iter().enumerate().map(move |(item_idx, item)| {
                let made = 20.0 + (day_idx * 4 + item_idx) as f64;
                SalesRecord {
                    date,
                    day: weekday_name(date).to_string(),
                    item: MenuItem::new(*item),
                    establishment_id: "EST-1".to_string(),
                    quantities: Quantities {
                        made,
                        sold: made - 2.0,
                        surplus: 2.0,
                    },
                    passthrough: Vec::new(),
                }
            })
        })
        .collect();

    HistoricalDataset {
        passthrough_columns: Vec::new(),
        records,
    }
}

/// The dataset as CSV text, header included.
pub fn history_csv() -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for r in dataset().records {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            r.date,
            r.day,
            r.item,
            r.establishment_id,
            r.quantities.made,
            r.quantities.sold,
            r.quantities.surplus
        );
    }
    out
}

/// Feature table built from [`dataset`] with the default special dates.
pub fn table() -> FeatureTable {
    FeatureTableBuilder::new(&SpecialDates::default())
        .build(&dataset())
        .unwrap_or_else(|e| panic!("fixture dataset must encode: {e}"))
}

pub fn schema() -> FeatureSchema {
    table().schema().clone()
}

/// Linear model fitted to `schema`'s exact columns.
///
/// Intercept 20; `day_of_week` 1; `veg_special` 5; `nonveg_special` 3; the
/// n-th item indicator 2n; every weekday indicator 0.5.
pub fn linear_model(schema: &FeatureSchema) -> LinearModel {
    let mut item_rank = 0.0;
    let coefficients = schema
        .columns()
        .iter()
        .map(|column| match column.kind() {
            ColumnKind::Passthrough => 0.0,
            ColumnKind::Calendar(CalendarFeature::DayOfWeek) => 1.0,
            ColumnKind::Calendar(CalendarFeature::VegSpecial) => 5.0,
            ColumnKind::Calendar(CalendarFeature::NonvegSpecial) => 3.0,
            ColumnKind::Item(_) => {
                item_rank += 1.0;
                2.0 * item_rank
            }
            ColumnKind::Weekday(_) => 0.5,
        })
        .collect();

    LinearModel {
        features: schema.names().map(str::to_owned).collect(),
        coefficients,
        intercept: 20.0,
    }
}

/// [`linear_model`] serialized as a model artifact.
pub fn linear_model_json(schema: &FeatureSchema) -> String {
    let model = linear_model(schema);
    serde_json::json!({
        "kind": "linear",
        "features": model.features,
        "coefficients": model.coefficients,
        "intercept": model.intercept,
    })
    .to_string()
}

/// Service context over the fixture table and [`linear_model`].
pub fn context(boost: Arc<dyn BoostSource>) -> ServiceContext {
    let table = table();
    let model = linear_model(table.schema());
    ServiceContext::new(table, Arc::new(model), SpecialDates::default(), boost)
}
