//! Tournament configuration: bye selection policy and optional RNG seed.
//!
//! Read from env: SWISS_BYE_POLICY (`random` or `lowest-ranked`), SWISS_SEED (u64).
//! Missing or unparsable values fall back to the defaults.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const BYE_POLICY_ENV: &str = "SWISS_BYE_POLICY";
pub const SEED_ENV: &str = "SWISS_SEED";

/// How the bye recipient is chosen among players who have not had one yet.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ByePolicy {
    /// Uniformly at random among eligible players.
    #[default]
    Random,
    /// The lowest-ranked eligible player in the current standings.
    LowestRanked,
}

impl FromStr for ByePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(ByePolicy::Random),
            "lowest-ranked" | "lowest_ranked" | "lowest" => Ok(ByePolicy::LowestRanked),
            other => Err(format!("unknown bye policy: {}", other)),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    #[serde(default)]
    pub bye_policy: ByePolicy,
    /// Seed for random bye selection. None seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TournamentConfig {
    pub fn new(bye_policy: ByePolicy, seed: Option<u64>) -> Self {
        Self { bye_policy, seed }
    }

    /// Load from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` for each variable (used by `from_env`; handy in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bye_policy = match lookup(BYE_POLICY_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("{}; using default bye policy", e);
                ByePolicy::default()
            }),
            None => ByePolicy::default(),
        };
        let seed = lookup(SEED_ENV).and_then(|raw| match raw.trim().parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("ignoring unparsable {}={:?}", SEED_ENV, raw);
                None
            }
        });
        Self { bye_policy, seed }
    }
}
