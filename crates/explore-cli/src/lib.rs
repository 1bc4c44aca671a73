//! Library components of the `explore` command line tool.

pub mod config;
pub mod logging;
pub mod navigate;
pub mod summary;
pub mod values;
