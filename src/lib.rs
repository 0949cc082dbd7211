// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod compare;
pub mod data;
pub mod fetch;
pub mod file;
pub mod html;
pub mod json;
pub mod log;
pub mod names;
pub mod progress;
pub mod provider;
pub mod results;
pub mod runner;
pub mod summary;
