//! SchoolHelper Core Library
//!
//! Domain models and business logic for the SchoolHelper student portal:
//! homework tracking, weighted grade aggregation, the weekly schedule,
//! the study timer and the session gate, plus the data-access façade
//! shared by the demo and remote stores.

pub mod config;
pub mod error;
pub mod grades;
pub mod homework;
pub mod schedule;
pub mod session;
pub mod store;
pub mod timer;

pub use error::{CoreError, CoreResult};
