//! Comma-separated catalog ingestion.
//!
//! Format: a header row whose first cell labels the name column, followed by
//! one row per berry. Remaining header cells name axes (`sweet`, `spicy`,
//! `sour`, `bitter`, `fresh`, `calories`), matched case-insensitively.
//! Columns that name no axis are ignored; axes with no column stay at 0.
//! Quoting follows RFC 4180, so a quoted name may contain commas.

use crate::error::BlendError;
use crate::flavor::{Axis, FlavorVector};

use super::item::{Catalog, CatalogItem};

impl Catalog {
    /// Parses a catalog from comma-separated text.
    ///
    /// Every loaded item starts with `available = 0`; quantities come from
    /// [`apply_availability`](Catalog::apply_availability).
    ///
    /// # Examples
    ///
    /// ```
    /// use berry_blend::catalog::Catalog;
    /// use berry_blend::flavor::Flavor;
    ///
    /// let catalog = Catalog::from_csv_str(
    ///     "Berry,Sweet,Spicy,Sour,Bitter,Fresh,Calories\n\
    ///      Oran,40,0,10,0,10,30\n",
    /// ).unwrap();
    /// let oran = catalog.get("Oran").unwrap();
    /// assert_eq!(oran.stats.flavor(Flavor::Sweet), 40);
    /// assert_eq!(oran.available, 0);
    /// ```
    pub fn from_csv_str(text: &str) -> Result<Self, BlendError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut records = reader.records().filter(|record| {
            record
                .as_ref()
                .map_or(true, |row| row.iter().any(|cell| !cell.is_empty()))
        });

        let header = records.next().ok_or(BlendError::EmptyCatalog)??;
        if header.get(0).map_or(true, str::is_empty) {
            return Err(BlendError::MissingHeader);
        }

        let columns: Vec<(String, Option<Axis>)> = header
            .iter()
            .skip(1)
            .map(|cell| (cell.to_ascii_lowercase(), cell.parse::<Axis>().ok()))
            .collect();

        for (name, axis) in &columns {
            if axis.is_none() {
                tracing::debug!(column = %name, "ignoring catalog column with no matching axis");
            }
        }

        let mut catalog = Catalog::new();
        for record in records {
            let record = record?;
            let line_no = record.position().map_or(0, |pos| pos.line() as usize);
            let name = record.get(0).unwrap_or_default();
            if name.is_empty() {
                tracing::warn!(line = line_no, "skipping catalog row without a berry name");
                continue;
            }

            let mut stats = FlavorVector::zero();
            for ((column, axis), cell) in columns.iter().zip(record.iter().skip(1)) {
                let Some(axis) = axis else { continue };
                let value = parse_value(cell).ok_or_else(|| BlendError::InvalidNumber {
                    line: line_no,
                    column: column.clone(),
                    value: cell.to_string(),
                })?;
                stats = stats.with_axis(*axis, value);
            }

            catalog.add_item(CatalogItem::new(name, stats, 0));
        }

        tracing::debug!(items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

/// Empty cells count as 0.
fn parse_value(cell: &str) -> Option<u32> {
    if cell.is_empty() {
        Some(0)
    } else {
        cell.parse().ok()
    }
}
