//! Backend REST outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `BackendApi` port.

mod dto;
mod http_client;

pub use http_client::{BackendHttpClient, DEFAULT_REQUEST_TIMEOUT};
