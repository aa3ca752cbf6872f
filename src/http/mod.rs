//! HTTP transport module
//!
//! Provides the transport seam used by the page fetcher.
//!
//! # Features
//!
//! - **Transport Trait**: `HttpTransport` sends a GET and returns status + body
//! - **reqwest Client**: `HttpClient`, the production transport
//! - **Test Double**: `StubTransport`, scripted in-memory replies

mod client;
mod stub;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, HttpTransport, TransportResponse,
};
pub use stub::{StubReply, StubTransport};
