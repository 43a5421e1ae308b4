//! CLI commands for graphwalk

pub mod cycle;
pub mod dispatch;
pub mod info;
pub mod output;
pub mod path;
pub mod traverse;
