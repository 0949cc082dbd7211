// src/specs/mod.rs
//! # Provider "specs" module
//!
//! Each spec knows one endpoint of the results provider (an Ergast-compatible
//! REST API) and how to turn its JSON into the crate's own shapes.
//!
//! ## What lives here
//! - **URL construction** for the endpoint (`{base}/{year}.json`, …).
//! - **Payload decoding** through the wire types in [`wire`].
//! - **Light shaping** into `EventInfo` lists or a column-named `RawTable`.
//!
//! ## What does **not** live here
//! - **Event-name policy** beyond matching (see `provider`).
//! - **Validation, normalization, sorting** (see `fetch` / `results`).
//! - **Error collapsing.** Specs return typed `FetchError`s; the loader
//!   decides what an error means for the run.
//!
//! ## Typical call chain
//! ```text
//! runner → fetch::load_results → ResultsProvider::fetch_race
//!                                  ↘ specs::schedule::fetch  (resolve round)
//!                                  ↘ specs::results::fetch   (RawTable)
//! ```
//!
//! ## Testing notes
//! Every `fetch` is a thin GET around a `parse_doc` that takes the body as
//! `&str`, so specs are tested offline against inline fixtures.
pub mod results;
pub mod schedule;
pub mod wire;
