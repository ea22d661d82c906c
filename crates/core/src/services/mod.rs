//! Lifecycle service modules.
//!
//! This module contains the services that orchestrate assessment state
//! transitions and client record side effects over the store seam.

pub mod assessments;
pub mod clients;
