//! # Content Analytics Engine
//!
//! This crate turns a collection of content performance records into grouped
//! averages, rankings, trend signals and recommendations.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** It depends only on `core-types`. Loading records and
//!   rendering reports belong to the caller.
//! - **Stateless Calculation:** The `AnalyticsEngine` takes a slice of
//!   `ContentItem`s and produces a fresh `PerformanceReport` on every call.
//!   Caller-owned collections are never mutated.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: grouping, ranking, trend detection and recommendations.
//! - `PerformanceReport`: the snapshot returned by `AnalyticsEngine::analyze`.
//! - `Trend` / `Recommendation`: typed statements with a `Display` rendering.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod benchmark;
pub mod engine;
pub mod error;
pub mod insights;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use benchmark::{Benchmark, BenchmarkStatus};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use insights::{Recommendation, Trend};
pub use report::{ContentTypeStats, GroupStats, PerformanceReport};
