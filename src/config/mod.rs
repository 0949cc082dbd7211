// src/config/mod.rs

pub mod aliases;
pub mod consts;
pub mod options;

pub use aliases::AliasTable;
pub use options::{AppOptions, ExportFormat, ExportOptions, ExportTarget, FetchOptions, LogOptions};
