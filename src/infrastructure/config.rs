//! Application configuration

use std::env;

use anyhow::{Context, Result};

use crate::domain::value_objects::{AccountId, ItemGroupId, PollPolicy};

/// Default root of the externals API; the account id is appended
pub const DEFAULT_API_BASE_URL: &str = "https://line-saas.auka.jp/api/externals";
/// Items generated per run unless overridden
pub const DEFAULT_ITEM_COUNT: u32 = 20;

/// Application configuration loaded from environment
#[derive(Clone)]
pub struct AppConfig {
    /// Externals API root, without the account segment
    pub api_base_url: String,
    /// LINE account the item group belongs to
    pub account_id: AccountId,
    /// Item group receiving the batch
    pub item_group_id: ItemGroupId,
    /// Bearer token for the externals API
    pub auth_token: String,
    /// Number of items to generate and submit
    pub item_count: u32,
    /// Job polling pace and limits
    pub poll_policy: PollPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{} environment variable is required", key))
        };

        let account_id = required("LINE_ACCOUNT_UUID")?
            .parse::<AccountId>()
            .context("LINE_ACCOUNT_UUID must be a valid UUID")?;
        let item_group_id = required("ITEM_GROUP_UUID")?
            .parse::<ItemGroupId>()
            .context("ITEM_GROUP_UUID must be a valid UUID")?;
        let auth_token = required("AUTH_TOKEN")?;

        let item_count = match lookup("SYNC_ITEM_COUNT") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .context("SYNC_ITEM_COUNT must be a non-negative integer")?,
            None => DEFAULT_ITEM_COUNT,
        };

        Ok(Self {
            api_base_url: lookup("SYNC_API_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            account_id,
            item_group_id,
            auth_token,
            item_count,
            poll_policy: PollPolicy::from_lookup(&lookup),
        })
    }

    /// Account-scoped base URL every endpoint hangs off
    pub fn base_url(&self) -> String {
        format!("{}/{}", self.api_base_url, self.account_id)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field("account_id", &self.account_id)
            .field("item_group_id", &self.item_group_id)
            .field("auth_token", &"<redacted>")
            .field("item_count", &self.item_count)
            .field("poll_policy", &self.poll_policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;

    const ACCOUNT: &str = "6f1c1f3e-8a4b-4c1e-9d2a-3b5e7f9a1c2d";
    const GROUP: &str = "0b7d2c4e-1f3a-4e5b-8c6d-9a0b1c2d3e4f";

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    fn required_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("LINE_ACCOUNT_UUID", ACCOUNT),
            ("ITEM_GROUP_UUID", GROUP),
            ("AUTH_TOKEN", "secret-token"),
        ]
    }

    #[test]
    fn test_defaults() {
        let config = load(&required_vars()).unwrap();

        assert_eq!(
            config.base_url(),
            format!("https://line-saas.auka.jp/api/externals/{}", ACCOUNT)
        );
        assert_eq!(config.item_group_id.to_string(), GROUP);
        assert_eq!(config.item_count, 20);
        assert_eq!(config.poll_policy, PollPolicy::default());
    }

    #[test]
    fn test_overrides() {
        let mut vars = required_vars();
        vars.push(("SYNC_API_BASE_URL", "http://127.0.0.1:9000/api/"));
        vars.push(("SYNC_ITEM_COUNT", "3"));
        vars.push(("SYNC_POLL_INTERVAL_SECS", "1"));
        let config = load(&vars).unwrap();

        assert_eq!(config.base_url(), format!("http://127.0.0.1:9000/api/{}", ACCOUNT));
        assert_eq!(config.item_count, 3);
        assert_eq!(config.poll_policy.interval, Duration::from_secs(1));
    }

    #[test]
    fn test_missing_required() {
        for missing in ["LINE_ACCOUNT_UUID", "ITEM_GROUP_UUID", "AUTH_TOKEN"] {
            let vars: Vec<_> = required_vars()
                .into_iter()
                .filter(|(k, _)| *k != missing)
                .collect();
            let err = load(&vars).unwrap_err();
            assert!(err.to_string().contains(missing), "{err}");
        }
    }

    #[test]
    fn test_blank_token_is_missing() {
        let mut vars = required_vars();
        vars.retain(|(k, _)| *k != "AUTH_TOKEN");
        vars.push(("AUTH_TOKEN", "   "));
        assert!(load(&vars).is_err());
    }

    #[test]
    fn test_invalid_uuid() {
        let mut vars = required_vars();
        vars.retain(|(k, _)| *k != "ITEM_GROUP_UUID");
        vars.push(("ITEM_GROUP_UUID", "group-1"));

        let err = load(&vars).unwrap_err();
        assert!(err.to_string().contains("ITEM_GROUP_UUID must be a valid UUID"));
    }

    #[test]
    fn test_invalid_item_count() {
        let mut vars = required_vars();
        vars.push(("SYNC_ITEM_COUNT", "-1"));
        assert!(load(&vars).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = load(&required_vars()).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}
