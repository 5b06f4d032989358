//! # PromX Core
//!
//! The data core of the PromX crypto dashboard: market-data normalization,
//! a fixed-rate pair converter, live spot prices, and transaction history.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared types, domain models, pure transforms (no I/O)
//! 2. **HTTP API** — `DashboardHttp` with one method per remote endpoint
//! 3. **High-Level Client** — `DashboardClient` with nested sub-clients
//!
//! The pure core (normalizer, converter, state containers) compiles without
//! the `http` feature; the presentation layer above this crate owns a single
//! mutable instance of each state container and re-renders on transitions.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use promx_core::prelude::*;
//!
//! let client = DashboardClient::builder()
//!     .market_base_url("https://api.coingecko.com/api/v3")
//!     .build()?;
//!
//! let series = client
//!     .charts()
//!     .series(ChartAsset::Bitcoin, Window::OneHour, WindowPolicy::Full)
//!     .await?;
//! let spot = client.spot().get().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types used across all domains: coins, assets, windows, formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, transforms, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with per-endpoint methods.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `DashboardClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{ChartAsset, Coin, Window};

    // Domain types — chart
    pub use crate::domain::chart::state::ChartView;
    pub use crate::domain::chart::{
        normalize, normalize_in, ChartPoint, ChartSeries, RawSample, WindowPolicy,
    };

    // Domain types — converter
    pub use crate::domain::converter::{ConversionState, PairSide, RateTable};

    // Domain types — spot, history
    pub use crate::domain::history::Transaction;
    pub use crate::domain::spot::SpotPrices;

    // Errors
    pub use crate::error::CoreError;

    // Network
    pub use crate::network::DEFAULT_MARKET_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        ChartsClient, DashboardClient, DashboardClientBuilder, HistoryClient, SpotClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::HistoryStoreConfig;
}
