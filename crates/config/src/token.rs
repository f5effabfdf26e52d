//! cToken symbols supported per network.

use crate::Network;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cToken symbol belonging to exactly one network's list.
pub trait CTokenSymbol:
    Copy + Eq + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static
{
    /// Network this symbol list belongs to.
    const NETWORK: Network;

    /// Supported symbols, in declaration order.
    const ALL: &'static [Self];

    /// Symbol as it appears in the fixture tables (e.g. `cUSDC`).
    fn symbol(&self) -> &'static str;

    /// Find the symbol matching a fixture key.
    fn from_symbol(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|token| token.symbol() == key)
    }
}

/// cTokens supported on mainnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainnetCToken {
    #[serde(rename = "cZRX")]
    CZrx,
    #[serde(rename = "cWBTC")]
    CWbtc,
    #[serde(rename = "cUSDT")]
    CUsdt,
    #[serde(rename = "cUSDC")]
    CUsdc,
    #[serde(rename = "cETH")]
    CEth,
    #[serde(rename = "cREP")]
    CRep,
    #[serde(rename = "cBAT")]
    CBat,
    #[serde(rename = "cCOMP")]
    CComp,
    #[serde(rename = "cLINK")]
    CLink,
    #[serde(rename = "cUNI")]
    CUni,
}

impl CTokenSymbol for MainnetCToken {
    const NETWORK: Network = Network::Mainnet;

    // cSAI is deprecated and not offered for migration.
    const ALL: &'static [Self] = &[
        Self::CZrx,
        Self::CWbtc,
        Self::CUsdt,
        Self::CUsdc,
        Self::CEth,
        Self::CRep,
        Self::CBat,
        Self::CComp,
        Self::CLink,
        Self::CUni,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Self::CZrx => "cZRX",
            Self::CWbtc => "cWBTC",
            Self::CUsdt => "cUSDT",
            Self::CUsdc => "cUSDC",
            Self::CEth => "cETH",
            Self::CRep => "cREP",
            Self::CBat => "cBAT",
            Self::CComp => "cCOMP",
            Self::CLink => "cLINK",
            Self::CUni => "cUNI",
        }
    }
}

/// cTokens supported on goerli.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoerliCToken {
    #[serde(rename = "cETH")]
    CEth,
    #[serde(rename = "cCOMP")]
    CComp,
    #[serde(rename = "cDAI")]
    CDai,
    #[serde(rename = "cUNI")]
    CUni,
    #[serde(rename = "cUSDC")]
    CUsdc,
    #[serde(rename = "cUSDT")]
    CUsdt,
    #[serde(rename = "cWBTC")]
    CWbtc,
}

impl CTokenSymbol for GoerliCToken {
    const NETWORK: Network = Network::Goerli;

    const ALL: &'static [Self] = &[
        Self::CEth,
        Self::CComp,
        Self::CDai,
        Self::CUni,
        Self::CUsdc,
        Self::CUsdt,
        Self::CWbtc,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            Self::CEth => "cETH",
            Self::CComp => "cCOMP",
            Self::CDai => "cDAI",
            Self::CUni => "cUNI",
            Self::CUsdc => "cUSDC",
            Self::CUsdt => "cUSDT",
            Self::CWbtc => "cWBTC",
        }
    }
}

impl fmt::Display for MainnetCToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for GoerliCToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
