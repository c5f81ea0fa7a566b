pub mod a001_category;
pub mod a002_bike_model;
pub mod a003_stock;
pub mod a004_customer;
pub mod a005_courier;
pub mod a006_transfer;
pub mod a007_payment;
pub mod a008_dealer_consignment;
pub mod a009_setting;
pub mod common;
