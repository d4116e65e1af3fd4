//! Salary Conversion Engine
//!
//! This crate converts between gross and net salary under a flat income tax
//! with a tax-free allowance and fixed-rate employee contributions. The
//! [`calculation`] module is a pure function library; [`api`] wraps it in an
//! HTTP service.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
