//! Core library for render-farm job submission.
//!
//! Configuration, the job/block/command data model, Redshift quality
//! presets, and Maya command-line construction. Everything here is
//! pure (the only I/O is reading environment variables in
//! [`config::FarmConfig::from_env`]); network submission lives in the
//! `renderfarm-afanasy` binding crate.

pub mod command;
pub mod config;
pub mod error;
pub mod job;
pub mod quality;
pub mod submitter;
