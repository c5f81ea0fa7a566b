pub mod p901_sales_report;
pub mod p902_stock_report;
