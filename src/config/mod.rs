//! JSON configuration for the demo and batch tools.
pub mod batch;
pub mod quality_demo;
