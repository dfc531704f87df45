//! Library half of the `synthtab` binary: schema files, output targets and
//! logging setup.

pub mod config;
pub mod logging;
