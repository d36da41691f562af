//! Node configuration.
//!
//! Everything tunable lives here and is passed explicitly through the app
//! state — no module-wide constants. Defaults target Andromeda mainnet.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP API listens on.
    pub port: u16,
    /// Fraction of royalties reserved for the creator, strictly in (0, 1).
    pub creator_share: f64,
    /// Token supply minted per idea at issuance.
    pub total_tokens_per_idea: u64,
    pub chain_id: String,
    pub chain_rpc_url: String,
    pub chain_rest_url: String,
    /// Andromeda kernel the Splitter is wired to at instantiation.
    pub kernel_address: String,
    /// Code ID of the Splitter ADO on mainnet.
    pub splitter_code_id: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            creator_share: 0.7,
            total_tokens_per_idea: 1000,
            chain_id: "andromeda-1".to_string(),
            chain_rpc_url: "https://rpc.andromeda-1.andromeda.io".to_string(),
            chain_rest_url: "https://rest.andromeda-1.andromeda.io".to_string(),
            kernel_address: "andr14hj2tavq8fpesdwxxcu44rty3hh90vhujrvcmstl4zr3txmfvw9s4anegh"
                .to_string(),
            splitter_code_id: 1215,
        }
    }
}

impl Config {
    /// Defaults overridden by `IPINVEST_*` environment variables. Malformed
    /// or out-of-range values are rejected so a bad creator share can never
    /// reach the allocator.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = env::var("IPINVEST_PORT") {
            config.port = port.parse()?;
        }
        if let Ok(share) = env::var("IPINVEST_CREATOR_SHARE") {
            config.creator_share = share.parse()?;
        }
        if let Ok(tokens) = env::var("IPINVEST_TOTAL_TOKENS") {
            config.total_tokens_per_idea = tokens.parse()?;
        }
        if let Ok(url) = env::var("IPINVEST_CHAIN_RPC_URL") {
            config.chain_rpc_url = url;
        }
        if let Ok(url) = env::var("IPINVEST_CHAIN_REST_URL") {
            config.chain_rest_url = url;
        }
        if let Ok(addr) = env::var("IPINVEST_KERNEL_ADDRESS") {
            config.kernel_address = addr;
        }
        if let Ok(code_id) = env::var("IPINVEST_SPLITTER_CODE_ID") {
            config.splitter_code_id = code_id.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.creator_share > 0.0 && self.creator_share < 1.0) {
            anyhow::bail!(
                "creator share must be strictly between 0 and 1, got {}",
                self.creator_share
            );
        }
        if self.total_tokens_per_idea == 0 {
            anyhow::bail!("token supply per idea must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.creator_share, 0.7);
        assert_eq!(config.total_tokens_per_idea, 1000);
        assert_eq!(config.chain_id, "andromeda-1");
    }

    #[test]
    fn rejects_out_of_range_creator_share() {
        let mut config = Config::default();
        config.creator_share = 1.0;
        assert!(config.validate().is_err());
        config.creator_share = 0.0;
        assert!(config.validate().is_err());
    }
}
