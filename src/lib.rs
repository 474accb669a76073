//! Electoral-college forecasting from state-level opinion polls.
//!
//! The electoral table gives each state its electoral votes and a baseline lean. The poll listing
//! is parsed into polls grouped by state, each poll is weighted by age and pollster, and the
//! weighted numbers are normalised into per-state scores. States without usable polls fall back
//! to their baseline.

pub mod aggregate;
pub mod commands;
pub mod config;
pub mod electoral;
pub mod error;
pub mod opt;
pub mod polls;
pub mod prelude;
pub mod report;
pub mod utils;
pub mod weighting;

pub use aggregate::{Aggregator, Forecast, StateForecast, StateScores};
pub use config::ForecastConfig;
pub use electoral::{State, load_electoral, parse_electoral};
pub use error::Error;
pub use polls::{Poll, load_polls, parse_polls};
pub use weighting::{NoAdjustments, WeightHooks, WeightingEngine};
