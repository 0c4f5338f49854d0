//! Canonical feature schema and per-request feature vectors.
//!
//! The schema is an ordered list of typed columns. It is built once from the
//! historical dataset and is the contract shared with the pre-trained model:
//! every feature vector has exactly these columns, in exactly this order.
//!
//! Column order:
//!
//! 1. passthrough numeric columns found in the dataset, in file order
//! 2. `day_of_week`, `veg_special`, `nonveg_special`
//! 3. one `item_name_<item>` indicator per item, sorted, first dropped
//! 4. one `day_<weekday>` indicator per weekday name, sorted, first dropped

use std::collections::{BTreeSet, HashSet};

use super::calendar::CalendarFeatures;
use super::error::DomainError;
use super::item::MenuItem;

/// Prefix of item indicator column names.
pub const ITEM_PREFIX: &str = "item_name_";

/// Prefix of weekday indicator column names.
pub const WEEKDAY_PREFIX: &str = "day_";

/// Numeric predictors derived from the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarFeature {
    DayOfWeek,
    VegSpecial,
    NonvegSpecial,
}

impl CalendarFeature {
    pub const ALL: [Self; 3] = [Self::DayOfWeek, Self::VegSpecial, Self::NonvegSpecial];

    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::DayOfWeek => "day_of_week",
            Self::VegSpecial => "veg_special",
            Self::NonvegSpecial => "nonveg_special",
        }
    }

    fn value(self, calendar: &CalendarFeatures) -> f64 {
        match self {
            Self::DayOfWeek => f64::from(calendar.day_of_week),
            Self::VegSpecial => f64::from(u8::from(calendar.special.veg)),
            Self::NonvegSpecial => f64::from(u8::from(calendar.special.nonveg)),
        }
    }
}

/// What a schema column represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    /// Extra numeric dataset column; zero at inference time.
    Passthrough,
    Calendar(CalendarFeature),
    /// One-hot indicator for a menu item.
    Item(MenuItem),
    /// One-hot indicator for a weekday name.
    Weekday(String),
}

impl ColumnKind {
    /// Short label used when printing the schema.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::Calendar(_) => "calendar",
            Self::Item(_) => "item",
            Self::Weekday(_) => "weekday",
        }
    }
}

/// A named, typed schema column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    kind: ColumnKind,
}

impl Column {
    fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> &ColumnKind {
        &self.kind
    }
}

/// The frozen, ordered predictor columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<Column>,
    passthrough: usize,
    reference_item: MenuItem,
    reference_weekday: String,
}

impl FeatureSchema {
    /// Build the schema from the categories observed in history.
    ///
    /// The first category of `items` and of `weekdays` (in sorted order) is
    /// the reference level and gets no indicator column.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCategory`] if either category set is empty,
    /// or [`DomainError::DuplicateColumn`] if two columns share a name.
    pub fn new(
        passthrough: Vec<String>,
        items: &BTreeSet<MenuItem>,
        weekdays: &BTreeSet<String>,
    ) -> Result<Self, DomainError> {
        let mut item_iter = items.iter();
        let reference_item = item_iter
            .next()
            .cloned()
            .ok_or(DomainError::EmptyCategory { column: "item_name" })?;
        let mut weekday_iter = weekdays.iter();
        let reference_weekday = weekday_iter
            .next()
            .cloned()
            .ok_or(DomainError::EmptyCategory { column: "day" })?;

        let passthrough_count = passthrough.len();
        let mut columns: Vec<Column> = passthrough
            .into_iter()
            .map(|name| Column::new(name, ColumnKind::Passthrough))
            .collect();
        columns.extend(
            CalendarFeature::ALL
                .iter()
                .map(|&feature| Column::new(feature.column_name(), ColumnKind::Calendar(feature))),
        );
        columns.extend(item_iter.map(|item| {
            Column::new(format!("{ITEM_PREFIX}{item}"), ColumnKind::Item(item.clone()))
        }));
        columns.extend(weekday_iter.map(|day| {
            Column::new(format!("{WEEKDAY_PREFIX}{day}"), ColumnKind::Weekday(day.clone()))
        }));

        let mut seen = HashSet::with_capacity(columns.len());
        if let Some(column) = columns.iter().find(|column| !seen.insert(column.name())) {
            return Err(DomainError::DuplicateColumn {
                column: column.name().to_string(),
            });
        }

        Ok(Self {
            columns,
            passthrough: passthrough_count,
            reference_item,
            reference_weekday,
        })
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of leading passthrough columns.
    #[must_use]
    pub const fn passthrough_len(&self) -> usize {
        self.passthrough
    }

    /// Items with an indicator column, in schema order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.columns.iter().filter_map(|column| match &column.kind {
            ColumnKind::Item(item) => Some(item),
            _ => None,
        })
    }

    /// Weekday names with an indicator column, in schema order.
    pub fn weekdays(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().filter_map(|column| match &column.kind {
            ColumnKind::Weekday(day) => Some(day.as_str()),
            _ => None,
        })
    }

    /// The item encoded as "all item indicators zero".
    #[must_use]
    pub const fn reference_item(&self) -> &MenuItem {
        &self.reference_item
    }

    /// The weekday encoded as "all weekday indicators zero".
    #[must_use]
    pub fn reference_weekday(&self) -> &str {
        &self.reference_weekday
    }

    /// Assemble one feature vector.
    ///
    /// Calendar columns come from `calendar`, the indicator matching `item`
    /// and the indicator matching `weekday` are set to 1, passthrough columns
    /// take `passthrough[i]` when given, and everything else is 0.
    #[must_use]
    pub fn assemble(
        &self,
        calendar: &CalendarFeatures,
        item: &MenuItem,
        weekday: &str,
        passthrough: &[f64],
    ) -> FeatureVector<'_> {
        let mut next_passthrough = passthrough.iter().copied();
        let values = self
            .columns
            .iter()
            .map(|column| match &column.kind {
                ColumnKind::Passthrough => next_passthrough.next().unwrap_or(0.0),
                ColumnKind::Calendar(feature) => feature.value(calendar),
                ColumnKind::Item(candidate) => indicator(candidate == item),
                ColumnKind::Weekday(day) => indicator(day == weekday),
            })
            .collect();
        FeatureVector {
            schema: self,
            values,
        }
    }
}

fn indicator(hit: bool) -> f64 {
    if hit {
        1.0
    } else {
        0.0
    }
}

/// One instantiation of a [`FeatureSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector<'a> {
    schema: &'a FeatureSchema,
    values: Vec<f64>,
}

impl<'a> FeatureVector<'a> {
    #[must_use]
    pub const fn schema(&self) -> &'a FeatureSchema {
        self.schema
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> {
        self.schema.names()
    }

    /// Value of the column called `name`, if the schema has one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.schema
            .columns
            .iter()
            .position(|column| column.name == name)
            .map(|idx| self.values[idx])
    }

    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
