use std::fmt::Display;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// A token quantity in the network's indivisible base unit.
///
/// Always integer-valued; never represented as a float. Serializes as a
/// decimal string so arbitrarily large quantities survive JSON round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TokenAmount(pub U256);

impl TokenAmount {
    pub const ZERO: TokenAmount = TokenAmount(U256::ZERO);

    /// Difference clamped at zero.
    pub fn saturating_sub(&self, other: &TokenAmount) -> TokenAmount {
        TokenAmount(self.0.saturating_sub(other.0))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Converts to the human-readable unit by shifting `decimals` places,
    /// trimming trailing fractional zeros. `1_500_000_000_000` with 12
    /// decimals renders as `1.5`.
    pub fn to_formatted(&self, decimals: u8) -> String {
        if decimals == 0 {
            return self.0.to_string();
        }
        let scale = U256::from(10u64).pow(U256::from(decimals));
        let int = self.0 / scale;
        let frac = self.0 % scale;
        if frac.is_zero() {
            return int.to_string();
        }
        let digits = frac.to_string();
        let padded = format!("{}{}", "0".repeat(decimals as usize - digits.len()), digits);
        format!("{}.{}", int, padded.trim_end_matches('0'))
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        TokenAmount(U256::from(value))
    }
}

impl From<u128> for TokenAmount {
    fn from(value: u128) -> Self {
        TokenAmount(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        TokenAmount(value)
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TokenAmount {
    type Err = alloy_primitives::ruint::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TokenAmount(U256::from_str_radix(s, 10)?))
    }
}

impl Serialize for TokenAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A base-unit amount paired with its human-readable conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub atomic: TokenAmount,
    pub formatted: String,
}

impl Amount {
    pub fn from_atomic(atomic: TokenAmount, decimals: u8) -> Self {
        Amount {
            formatted: atomic.to_formatted(decimals),
            atomic,
        }
    }
}

/// Settlement currency identity for a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token name as reported to callers, e.g. `arweave`.
    pub name: String,
    /// Number of base-unit digits in one whole token.
    pub decimals: u8,
}

impl TokenInfo {
    /// The chain's native currency on the direct path: 1 AR = 10^12 winston.
    pub fn native() -> Self {
        TokenInfo {
            name: "arweave".to_string(),
            decimals: 12,
        }
    }
}
