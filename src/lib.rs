//! Demoscope - A terminal-based scatter plot explorer for U.S. state
//! demographic and health data.
//!
//! Demoscope renders an interactive scatter plot of state metrics in the
//! terminal: pick which demographic attribute drives the X axis and which
//! health attribute drives the Y axis, and the chart animates points,
//! axes, and labels to the new view.
//!
//! # Features
//!
//! - CSV dataset loading with strict parse errors
//! - Three X attributes (poverty, age, income) and three Y attributes
//!   (healthcare, smokes, obesity), switchable by mouse click or keyboard
//! - Animated 1-second transitions; a rapid second switch supersedes the
//!   first
//! - Hover tooltips with unit-aware value formatting
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use demoscope::chart::ChartState;
//! use demoscope::data::DatasetReader;
//! use std::path::Path;
//!
//! // Load the dataset and build the initial chart.
//! let rows = DatasetReader::read_file(Path::new("assets/data.csv"))?;
//! let chart = ChartState::new(&rows);
//! println!("{} states, X domain {:?}", rows.len(), chart.x_scale.domain());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod data;
pub mod error;
pub mod ui;

pub use error::{DemoscopeError, Result};
