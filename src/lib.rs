//! Schedule-Compliance Engine for Norwegian Rotating Rosters
//!
//! This crate evaluates cyclical shift plans (turnusplaner) against working-time
//! rules from Norwegian collective agreements: the reduced weekly-hours
//! qualification and the placement of compensation days for Sunday and holiday
//! work.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod rules;
