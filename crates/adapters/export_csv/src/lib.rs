//! # pricelist-adapter-export-csv
//!
//! CSV rendition of loaded catalog collections. The export consumes an
//! already-loaded (and, if desired, already-filtered) in-memory collection;
//! creating the output file belongs to the caller.

use std::io::Write;

use pricelist_domain::nomenclature::NomenclatureItem;
use pricelist_domain::service::ServiceItem;

/// Errors produced while writing an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV write error")]
    Csv(#[from] csv::Error),

    /// Flushing the underlying writer failed.
    #[error("IO error")]
    Io(#[from] std::io::Error),
}

/// Write `items` as CSV: a header row plus one record per service, costs
/// rendered with two decimals.
///
/// # Errors
///
/// Returns [`ExportError`] when writing to `writer` fails.
pub fn write_services<W: Write>(writer: W, items: &[ServiceItem]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "section",
        "subsection_1",
        "subsection_2",
        "code",
        "name",
        "price",
    ])?;
    for item in items {
        csv.write_record([
            item.section.as_str(),
            item.subsection1.as_str(),
            item.subsection2.as_str(),
            item.code.as_str(),
            item.name.as_str(),
            &format!("{:.2}", item.cost),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write nomenclature `items` as CSV.
///
/// # Errors
///
/// Returns [`ExportError`] when writing to `writer` fails.
pub fn write_nomenclature<W: Write>(
    writer: W,
    items: &[NomenclatureItem],
) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["section", "type", "class", "code", "name"])?;
    for item in items {
        csv.write_record([
            item.section.as_str(),
            item.service_type.as_str(),
            item.service_class.as_str(),
            item.code.as_str(),
            item.name.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
