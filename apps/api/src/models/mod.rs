pub mod activity;
pub mod listing;
pub mod profile;
