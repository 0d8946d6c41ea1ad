pub mod commands;
pub mod config;
pub mod dataset;
pub mod estimator;
pub mod fixtures;
pub mod formatting;
pub mod i18n;
pub mod layout_constants;
pub mod stats;
pub mod types;
