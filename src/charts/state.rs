//! Chart data state containers — app-owned, SDK-provided update logic.

use super::{aggregate, ChartEntry, DatedRecord, Granularity};
use crate::network::Network;
use crate::shared::{PoolAddress, TokenAddress};
use std::collections::HashMap;

/// What a stored chart series describes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeriesScope {
    /// Protocol-wide daily stats for one network.
    Protocol,
    /// Daily stats of a single pool.
    Pool(PoolAddress),
    /// Daily stats of a single token.
    Token(TokenAddress),
}

/// Raw daily chart series per network and scope.
///
/// The app owns instances of this type and feeds them from its transport
/// layer; the SDK provides update methods and derived (re-bucketed) views.
#[derive(Debug, Clone, Default)]
pub struct ChartStore<R> {
    data: HashMap<(Network, SeriesScope), Vec<R>>,
}

impl<R: DatedRecord> ChartStore<R> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Replace the whole series for a scope (e.g. after a refetch).
    pub fn replace(&mut self, network: Network, scope: SeriesScope, series: Vec<R>) {
        tracing::debug!(network = %network, days = series.len(), "chart series replaced");
        self.data.insert((network, scope), series);
    }

    /// Append today's record, or overwrite the last record when it carries
    /// the same date (live refresh of the current day).
    pub fn upsert_day(&mut self, network: Network, scope: SeriesScope, record: R) {
        let series = self.data.entry((network, scope)).or_default();

        if let Some(last) = series.last_mut() {
            if last.date() == record.date() {
                *last = record;
                return;
            }
            if last.date() > record.date() {
                tracing::warn!(
                    last = last.date(),
                    incoming = record.date(),
                    "chart record arrived out of order"
                );
            }
        }
        series.push(record);
    }

    pub fn get(&self, network: Network, scope: &SeriesScope) -> Option<&[R]> {
        self.data.get(&(network, scope.clone())).map(Vec::as_slice)
    }

    /// Aggregated view of a stored series; empty when nothing is stored.
    pub fn transformed<F>(
        &self,
        network: Network,
        scope: &SeriesScope,
        granularity: Granularity,
        metric: F,
    ) -> Vec<ChartEntry>
    where
        F: Fn(&R) -> f64,
    {
        match self.get(network, scope) {
            Some(series) => aggregate(series, granularity, metric),
            None => Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
