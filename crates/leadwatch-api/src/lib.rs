pub mod client;
pub mod http;

pub use client::HttpBackend;
