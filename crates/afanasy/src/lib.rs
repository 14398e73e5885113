//! Afanasy render-farm binding.
//!
//! Binding-side job/block/task builder objects, their JSON
//! materialization, the HTTP client that delivers a job to an Afanasy
//! server, and the adapter translating a `renderfarm-core` job
//! description into binding calls.

pub mod client;
pub mod job;
pub mod submit;

pub use client::{AfClient, AfError};
