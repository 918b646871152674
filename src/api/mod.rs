//! HTTP API Client
//!
//! Client functions for the expense-tracker REST API.

pub mod client;

pub use client::*;
