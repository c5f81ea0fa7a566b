use std::io::Write;

use contracts::projections::p902_stock_report::dto::StockReportRow;

pub fn write_csv<W: Write>(rows: &[StockReportRow], writer: W) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "Model",
        "Category",
        "Location",
        "Available",
        "Reserved",
        "In transit",
        "Consigned",
        "On hand",
    ])?;
    for row in rows {
        csv.write_record([
            row.model_name.clone(),
            row.category_name.clone(),
            row.location.clone(),
            row.available.to_string(),
            row.reserved.to_string(),
            row.in_transit.to_string(),
            row.consigned.to_string(),
            row.on_hand().to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
