//! API Client
//!
//! HTTP access to the IoTWatch REST API.

pub mod client;

pub use client::*;
