//! Miner payout address validation.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::anyhow;

static ADDRESS_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap());

/// An Ethereum-style address: `0x` followed by exactly 40 hex characters.
///
/// Format-only validation; no checksum. Parsing trims surrounding whitespace
/// and preserves the original hex casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthAddress(String);

impl EthAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EthAddress {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !ADDRESS_RE.is_match(trimmed) {
            return Err(anyhow!("address must look like 0x + 40 hex chars"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "0xABCDEF0123456789ABCDEF0123456789ABCDEF01";

    #[test]
    fn accepts_40_hex_chars() {
        let addr: EthAddress = VALID.parse().expect("valid address");
        assert_eq!(addr.as_str(), VALID);
    }

    #[test]
    fn accepts_mixed_and_lower_case() {
        assert!("0xabcdef0123456789abcdef0123456789abcdef01"
            .parse::<EthAddress>()
            .is_ok());
        assert!("0xAbCdEf0123456789aBcDeF0123456789AbCdEf01"
            .parse::<EthAddress>()
            .is_ok());
    }

    #[test]
    fn trims_whitespace() {
        let addr: EthAddress = format!("  {VALID}\n").parse().expect("valid address");
        assert_eq!(addr.as_str(), VALID);
    }

    #[test]
    fn rejects_non_hex() {
        assert!("0xZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZZ"
            .parse::<EthAddress>()
            .is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        let short = &VALID[..VALID.len() - 1]; // 39 hex chars
        let long = format!("{VALID}0"); // 41 hex chars
        assert!(short.parse::<EthAddress>().is_err());
        assert!(long.parse::<EthAddress>().is_err());
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!("ABCDEF0123456789ABCDEF0123456789ABCDEF0123"
            .parse::<EthAddress>()
            .is_err());
    }
}
