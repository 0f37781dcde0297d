use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The protocol versions whose block bodies this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub enum ForkName {
    Sharding,
}

impl ForkName {
    pub fn list_all() -> Vec<ForkName> {
        vec![ForkName::Sharding]
    }

    pub fn latest() -> ForkName {
        ForkName::Sharding
    }
}

impl FromStr for ForkName {
    type Err = String;

    fn from_str(fork_name: &str) -> Result<Self, String> {
        Ok(match fork_name.to_lowercase().as_ref() {
            "sharding" => ForkName::Sharding,
            _ => return Err(format!("unknown fork name: {}", fork_name)),
        })
    }
}

impl Display for ForkName {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ForkName::Sharding => "sharding".fmt(f),
        }
    }
}

impl From<ForkName> for String {
    fn from(fork: ForkName) -> String {
        fork.to_string()
    }
}

impl TryFrom<String> for ForkName {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fork_name_case_insensitive_match() {
        assert_eq!(ForkName::from_str("SHARDING"), Ok(ForkName::Sharding));
        assert_eq!(ForkName::from_str("sharding"), Ok(ForkName::Sharding));
    }

    #[test]
    fn fork_name_bad_string() {
        assert!(ForkName::from_str("phase7").is_err());
    }

    #[test]
    fn display_round_trips() {
        for fork in ForkName::list_all() {
            assert_eq!(ForkName::from_str(&fork.to_string()), Ok(fork));
        }
    }
}
