#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! A terminal contact form with live field validation.

pub mod config;
pub mod logging;
pub mod model;
pub mod tui;
