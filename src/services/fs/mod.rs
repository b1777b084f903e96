pub mod listing;
pub mod mode;
