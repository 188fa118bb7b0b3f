//! Third-party API endpoints and polling cadences.
//!
//! Base URLs for the aggregator services collaborators call, and the refresh
//! interval a scheduler should honor per data kind. No requests are made here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::error::{CatalogueError, Result};
use crate::urls::{check_url, HTTP_SCHEMES};

/// External service with a configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiService {
    /// DeFi TVL aggregator
    DefiLlama,
    /// Price quotes
    CoinGecko,
    /// Subgraph gateway
    TheGraph,
    /// Node provider gateway
    Alchemy,
}

impl ApiService {
    pub const ALL: [ApiService; 4] = [
        ApiService::DefiLlama,
        ApiService::CoinGecko,
        ApiService::TheGraph,
        ApiService::Alchemy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApiService::DefiLlama => "defiLlama",
            ApiService::CoinGecko => "coinGecko",
            ApiService::TheGraph => "theGraph",
            ApiService::Alchemy => "alchemy",
        }
    }
}

impl fmt::Display for ApiService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of polled data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    Tvl,
    Prices,
    Yields,
    Transactions,
}

impl DataKind {
    pub const ALL: [DataKind; 4] = [
        DataKind::Tvl,
        DataKind::Prices,
        DataKind::Yields,
        DataKind::Transactions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DataKind::Tvl => "tvl",
            DataKind::Prices => "prices",
            DataKind::Yields => "yields",
            DataKind::Transactions => "transactions",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpoints {
    pub defi_llama: String,
    pub coin_gecko: String,
    pub the_graph: String,
    pub alchemy: String,
}

/// Refresh intervals in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshIntervals {
    pub tvl: u64,
    pub prices: u64,
    pub yields: u64,
    pub transactions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub endpoints: ApiEndpoints,
    pub refresh_intervals: RefreshIntervals,
}

impl ApiConfig {
    /// Public endpoints used for Base mainnet data.
    pub fn base_defaults() -> Self {
        Self {
            endpoints: ApiEndpoints {
                defi_llama: "https://api.llama.fi".to_string(),
                coin_gecko: "https://api.coingecko.com/api/v3".to_string(),
                the_graph: "https://api.thegraph.com/subgraphs/name".to_string(),
                alchemy: "https://base-mainnet.g.alchemy.com/v2".to_string(),
            },
            refresh_intervals: RefreshIntervals {
                tvl: 30_000,
                prices: 10_000,
                yields: 60_000,
                transactions: 5_000,
            },
        }
    }

    /// Base URL of `service`.
    pub fn endpoint(&self, service: ApiService) -> &str {
        match service {
            ApiService::DefiLlama => &self.endpoints.defi_llama,
            ApiService::CoinGecko => &self.endpoints.coin_gecko,
            ApiService::TheGraph => &self.endpoints.the_graph,
            ApiService::Alchemy => &self.endpoints.alchemy,
        }
    }

    /// Polling cadence for `kind`.
    pub fn refresh_interval(&self, kind: DataKind) -> Duration {
        let millis = match kind {
            DataKind::Tvl => self.refresh_intervals.tvl,
            DataKind::Prices => self.refresh_intervals.prices,
            DataKind::Yields => self.refresh_intervals.yields,
            DataKind::Transactions => self.refresh_intervals.transactions,
        };
        Duration::from_millis(millis)
    }

    /// Append a service-specific path to the base URL of `service`.
    ///
    /// The base path is kept: `coinGecko` + `simple/price` gives
    /// `https://api.coingecko.com/api/v3/simple/price`.
    pub fn url_for(&self, service: ApiService, path: &str) -> Result<Url> {
        let base = self.endpoint(service).trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let joined = if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        };
        check_url(service.as_str(), &joined, HTTP_SCHEMES)
    }

    /// Every endpoint must be an http(s) URL and every interval non-zero.
    pub fn validate(&self) -> Result<()> {
        for service in ApiService::ALL {
            check_url(service.as_str(), self.endpoint(service), HTTP_SCHEMES)?;
        }
        for kind in DataKind::ALL {
            if self.refresh_interval(kind).is_zero() {
                return Err(CatalogueError::ConfigError(format!(
                    "Refresh interval for {kind} must be positive"
                )));
            }
        }
        Ok(())
    }
}
