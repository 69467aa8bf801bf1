//! Jobmatch API: candidate-to-job match scoring, recommendation ranking and
//! apply-time score snapshots.

pub mod applications;
pub mod config;
pub mod db;
pub mod errors;
pub mod matching;
pub mod models;
pub mod profile;
pub mod routes;
pub mod state;

pub use matching::{rank, score};
