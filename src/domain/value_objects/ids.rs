//! Strongly-typed identifiers for the remote catalog

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_uuid_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }
    };
}

define_uuid_id!(AccountId);
define_uuid_id!(ItemGroupId);

/// Opaque job handle issued by the sync endpoint
///
/// The server may send the id as a JSON string or number; both are kept as
/// text and always serialized back as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawJobId", into = "String")]
pub struct JobId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawJobId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawJobId> for JobId {
    fn from(raw: RawJobId) -> Self {
        match raw {
            RawJobId::Text(id) => Self(id),
            RawJobId::Number(id) => Self(id.to_string()),
        }
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_id() {
        let id: AccountId = " 6f1c1f3e-8a4b-4c1e-9d2a-3b5e7f9a1c2d ".parse().unwrap();
        assert_eq!(id.to_string(), "6f1c1f3e-8a4b-4c1e-9d2a-3b5e7f9a1c2d");
    }

    #[test]
    fn test_parse_rejects_non_uuid() {
        assert!("not-a-uuid".parse::<ItemGroupId>().is_err());
        assert!("".parse::<ItemGroupId>().is_err());
    }

    #[test]
    fn test_job_id_is_transparent_in_json() {
        let id: JobId = serde_json::from_str("\"J1\"").unwrap();
        assert_eq!(id.as_str(), "J1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"J1\"");
    }

    #[test]
    fn test_job_id_accepts_number() {
        let id: JobId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");

        assert!(serde_json::from_str::<JobId>("null").is_err());
        assert!(serde_json::from_str::<JobId>("[1]").is_err());
    }
}
