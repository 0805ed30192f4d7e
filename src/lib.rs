//! # dexinfo SDK
//!
//! Core data layer for a DEX analytics dashboard: typed models for the
//! indexing backend's pool/token/transaction statistics, chart series
//! aggregation, and the derived-state logic behind sortable, paginated
//! tables. Rendering, routing, and transport are the caller's business.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Shared** — Address newtypes and display formatting helpers
//! 2. **Domain** — Vertical slices (`protocol`, `pool`, `token`, `transaction`):
//!    wire structs, validated rich types, conversions
//! 3. **Charts** — Day-series re-bucketing to week/month + chart data store
//! 4. **Table** — Sort/paginate derived-state helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use dexinfo_sdk::prelude::*;
//!
//! let days: Vec<ChartDayData> = serde_json::from_str(
//!     r#"[{"date": 1704067200, "volumeUSD": 100.0, "tvlUSD": 900.0, "feesUSD": 1.0},
//!         {"date": 1704153600, "volumeUSD": 50.0,  "tvlUSD": 910.0, "feesUSD": 0.5}]"#,
//! ).unwrap();
//!
//! let monthly = volume_series(&days, Granularity::Month);
//! assert_eq!(monthly.len(), 1);
//! assert_eq!(monthly[0].value, 150.0);
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes and formatting helpers used across all domains.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Supported networks for per-network dashboard views.
pub mod network;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): rich types, wire types, conversions.
pub mod domain;

// ── Layer 3: Charts ──────────────────────────────────────────────────────────

/// Chart series aggregation: day records re-bucketed to week/month.
pub mod charts;

// ── Layer 4: Table ───────────────────────────────────────────────────────────

/// Derived-state helpers for sortable, paginated tables.
pub mod table;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{PoolAddress, TokenAddress};

    // Domain types — protocol
    pub use crate::domain::protocol::{
        fees_series, tvl_series, volume_series, ChartDayData, ProtocolData,
    };

    // Domain types — pool
    pub use crate::domain::pool::{PoolChartEntry, PoolData, TokenRef};

    // Domain types — token
    pub use crate::domain::token::{price_series, TokenChartEntry, TokenData};

    // Domain types — transaction
    pub use crate::domain::transaction::{filter_by_kind, Transaction, TransactionKind};

    // Response envelope
    pub use crate::domain::Envelope;

    // Charts
    pub use crate::charts::{
        aggregate, bucket_key, utc_day, BucketKey, ChartEntry, ChartStore, DatedRecord,
        Granularity, SeriesScope,
    };

    // Table
    pub use crate::table::{page_count, page_slice, sort_rows, SortDirection, TableView};

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::Network;
}
