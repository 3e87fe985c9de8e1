pub mod celebration;
pub mod cli;
pub mod config;
pub mod counter;
pub mod i18n;
pub mod logging;
pub mod ui;
