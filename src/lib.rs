//! Course Registry - Course and student enrollment service
//!
//! This crate exposes a REST API for managing courses and the students
//! enrolled in them, with a configurable cap on course size.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
