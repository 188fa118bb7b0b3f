//! Built-in Base mainnet protocol tables.

use crate::protocol::{ProtocolCategory, ProtocolLiteral};

/// Decentralized exchanges.
pub const DEX_PROTOCOLS: &[ProtocolLiteral] = &[
    ProtocolLiteral {
        key: "uniswapV3",
        name: "Uniswap V3",
        address: "0x2626664c2603336E57B271c5C0b26F421741e481",
        category: ProtocolCategory::Dex,
        tvl_endpoint: Some("https://api.thegraph.com/subgraphs/name/uniswap/uniswap-v3-base"),
        subgraph_url: Some("https://api.thegraph.com/subgraphs/name/uniswap/uniswap-v3-base"),
        is_active: true,
        launch_date: "2023-08-09",
    },
    ProtocolLiteral {
        key: "aerodrome",
        name: "Aerodrome Finance",
        address: "0xcF77a3Ba9A5CA399B7c97c74d54e5b1Beb874E43",
        category: ProtocolCategory::Dex,
        tvl_endpoint: Some("https://api.aerodrome.finance/api/v1/pairs"),
        subgraph_url: None,
        is_active: true,
        launch_date: "2023-08-28",
    },
    ProtocolLiteral {
        key: "baseswap",
        name: "BaseSwap",
        address: "0x327Df1E6de05895d2ab08513aaDD9313Fe505d86",
        category: ProtocolCategory::Dex,
        tvl_endpoint: Some("https://api.baseswap.fi/api/v1/summary"),
        subgraph_url: None,
        is_active: true,
        launch_date: "2023-08-10",
    },
];

/// Lending markets.
pub const LENDING_PROTOCOLS: &[ProtocolLiteral] = &[
    ProtocolLiteral {
        key: "aaveV3",
        name: "Aave V3",
        address: "0xA238Dd80C259a72e81d7e4664a9801593F98d1c5",
        category: ProtocolCategory::Lending,
        tvl_endpoint: Some("https://aave-api-v2.aave.com/data/markets-data"),
        subgraph_url: Some("https://api.thegraph.com/subgraphs/name/aave/protocol-v3-base"),
        is_active: true,
        launch_date: "2023-09-07",
    },
    ProtocolLiteral {
        key: "compoundV3",
        name: "Compound V3",
        address: "0x9c4ec768c28520B50860ea7a15bd7213a9fF58bf",
        category: ProtocolCategory::Lending,
        tvl_endpoint: Some("https://api.compound.finance/api/v2/ctoken"),
        subgraph_url: None,
        is_active: true,
        launch_date: "2023-08-23",
    },
    ProtocolLiteral {
        key: "moonwell",
        name: "Moonwell",
        address: "0xfBb21d0380beE3312B33c4353c8936a0F13EF26C",
        category: ProtocolCategory::Lending,
        tvl_endpoint: Some("https://api.moonwell.fi/base/governance/proposals"),
        subgraph_url: None,
        is_active: true,
        launch_date: "2023-10-12",
    },
];

/// Yield aggregators. Neither has a single canonical contract, so both use
/// the zero address.
pub const YIELD_PROTOCOLS: &[ProtocolLiteral] = &[
    ProtocolLiteral {
        key: "beefy",
        name: "Beefy Finance",
        address: "0x0000000000000000000000000000000000000000",
        category: ProtocolCategory::Yield,
        tvl_endpoint: Some("https://api.beefy.finance/vaults/base"),
        subgraph_url: None,
        is_active: true,
        launch_date: "2023-08-15",
    },
    ProtocolLiteral {
        key: "yearn",
        name: "Yearn Finance",
        address: "0x0000000000000000000000000000000000000000",
        category: ProtocolCategory::Yield,
        tvl_endpoint: Some("https://api.yearn.finance/v1/chains/8453/vaults/all"),
        subgraph_url: None,
        is_active: true,
        launch_date: "2023-09-20",
    },
];

/// Bridges.
pub const BRIDGE_PROTOCOLS: &[ProtocolLiteral] = &[ProtocolLiteral {
    key: "baseBridge",
    name: "Base Bridge",
    address: "0x4200000000000000000000000000000000000010",
    category: ProtocolCategory::Bridge,
    tvl_endpoint: Some("https://api.base.org/api/v1/bridge/stats"),
    subgraph_url: None,
    is_active: true,
    launch_date: "2023-07-13",
}];
