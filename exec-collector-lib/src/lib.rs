#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for exec-collector
//!
//! exec-collector exposes metrics whose values come from running external
//! programs. A JSON *setfile* declares each metric: the program to run, its
//! arguments, and the type its standard output decodes to. Collecting a metric
//! runs its program and converts the output; many metrics are collected
//! concurrently and failures of one never affect the others.
//!
//! # Module Organization
//!
//! - [`setfile`]: Loading and validating setfiles
//! - [`convert`]: Value types and output conversion
//! - [`runner`]: Running programs and capturing their output
//! - [`settings`]: Configuration tables and the configuration policy
//! - [`collect`]: Enumeration and concurrent collection
//! - [`reports`]: Console and JSON reports
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod collect;
pub mod commands;
pub mod convert;
pub mod error;
pub mod reports;
pub mod runner;
pub mod setfile;
pub mod settings;

pub use crate::commands::{Host, run};
pub use crate::error::CollectError;
