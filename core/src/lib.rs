//! Deterministic synthetic oceanographic datasets.
//!
//! Every generator is a pure function of a request-owned SeededStream
//! and a small configuration. Nothing here performs I/O apart from
//! SynthConfig::load.

pub mod activity_generator;
pub mod catalog;
pub mod collaborator;
pub mod compose;
pub mod composition_generator;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod forecast;
pub mod gauge_generator;
pub mod generator;
pub mod kpi_generator;
pub mod parameter_series;
pub mod profile_generator;
pub mod ranking_generator;
pub mod rng;
pub mod scatter_generator;
pub mod snapshot;
pub mod trend_generator;
pub mod types;
