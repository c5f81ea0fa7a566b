pub mod api;
pub mod documents;
pub mod form;
