//! CSV export of the sales report

use std::io::Write;

use contracts::projections::p901_sales_report::dto::SalesReportRow;

const HEADER: [&str; 9] = [
    "Invoice",
    "Date",
    "Customer",
    "NIC",
    "Model",
    "Chassis",
    "Amount",
    "Paid",
    "Balance",
];

/// Write rows with a header line; money is rendered with two decimals
pub fn write_csv<W: Write>(rows: &[SalesReportRow], writer: W) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;
    for row in rows {
        csv.write_record([
            row.invoice_number.clone(),
            row.sale_date.clone(),
            row.customer_name.clone(),
            row.customer_nic.clone(),
            row.model_name.clone(),
            row.chassis_number.clone(),
            format!("{:.2}", row.amount),
            format!("{:.2}", row.paid),
            format!("{:.2}", row.balance()),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn to_csv_string(rows: &[SalesReportRow]) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
