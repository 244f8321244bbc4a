//! leafcare library - Treatment-schedule extraction and calendar allocation
//!
//! Converts AI-generated plant treatment advice into dated calendar tasks.

pub mod advice;
pub mod advisor;
pub mod cli;
pub mod config;
pub mod schedule;
pub mod store;
