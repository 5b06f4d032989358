//! HTTP client layer — `DashboardHttp` with one method per remote endpoint.

pub mod client;

pub use client::{DashboardHttp, HistoryStoreConfig};
