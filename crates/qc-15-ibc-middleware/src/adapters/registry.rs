//! In-Memory Asset Registry Adapter
//!
//! Implements `AssetRegistry` over a lock-protected map. Governance owns the
//! instance (usually behind an `Arc`) and mutates it; the middleware holds
//! a shared handle and only reads.

use crate::domain::{RegistryError, TRACE_SEPARATOR};
use crate::ports::outbound::AssetRegistry;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared_types::ChannelIdentity;
use std::collections::HashMap;
use tracing::info;

/// One registry row, as stored in genesis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Channel the asset arrives through.
    #[serde(flatten)]
    pub channel: ChannelIdentity,
    /// Base denomination after the leading hop.
    pub base_denom: String,
    /// Distinguished flag.
    pub distinguished: bool,
}

/// In-memory classification registry.
#[derive(Default)]
pub struct InMemoryAssetRegistry {
    /// channel -> base_denom -> distinguished.
    entries: RwLock<HashMap<ChannelIdentity, HashMap<String, bool>>>,
}

fn validate_base_denom(base_denom: &str) -> Result<(), RegistryError> {
    if base_denom.is_empty() {
        return Err(RegistryError::EmptyDenom);
    }
    if base_denom.starts_with(TRACE_SEPARATOR) {
        return Err(RegistryError::InvalidDenom(base_denom.to_string()));
    }
    Ok(())
}

impl InMemoryAssetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of entries; later duplicates win.
    pub fn from_entries(entries: Vec<RegistryEntry>) -> Result<Self, RegistryError> {
        let registry = Self::new();
        for entry in entries {
            registry.set_distinguished(entry.channel, entry.base_denom, entry.distinguished)?;
        }
        Ok(registry)
    }

    /// Load from a JSON genesis array of [`RegistryEntry`].
    pub fn from_json(genesis: &str) -> Result<Self, RegistryError> {
        let entries: Vec<RegistryEntry> = serde_json::from_str(genesis)
            .map_err(|e| RegistryError::InvalidGenesis(e.to_string()))?;
        Self::from_entries(entries)
    }

    /// Governance: set the flag for `(channel, base_denom)`.
    pub fn set_distinguished(
        &self,
        channel: ChannelIdentity,
        base_denom: impl Into<String>,
        distinguished: bool,
    ) -> Result<(), RegistryError> {
        let base_denom = base_denom.into();
        validate_base_denom(&base_denom)?;

        info!(
            channel = %channel,
            base_denom = %base_denom,
            distinguished,
            "[qc-15] Registry entry updated"
        );

        self.entries
            .write()
            .entry(channel)
            .or_default()
            .insert(base_denom, distinguished);
        Ok(())
    }

    /// Governance: drop an entry. Returns the previous flag.
    pub fn remove(&self, channel: &ChannelIdentity, base_denom: &str) -> Option<bool> {
        let mut entries = self.entries.write();
        let denoms = entries.get_mut(channel)?;
        let previous = denoms.remove(base_denom);
        if denoms.is_empty() {
            entries.remove(channel);
        }
        previous
    }

    /// Snapshot of all entries, sorted by channel then denom.
    pub fn entries(&self) -> Vec<RegistryEntry> {
        let mut entries: Vec<RegistryEntry> = self
            .entries
            .read()
            .iter()
            .flat_map(|(channel, denoms)| {
                denoms
                    .iter()
                    .map(move |(base_denom, distinguished)| RegistryEntry {
                        channel: channel.clone(),
                        base_denom: base_denom.clone(),
                        distinguished: *distinguished,
                    })
            })
            .collect();
        entries.sort_by(|a, b| {
            (&a.channel, &a.base_denom).cmp(&(&b.channel, &b.base_denom))
        });
        entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().values().map(HashMap::len).sum()
    }

    /// True if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl AssetRegistry for InMemoryAssetRegistry {
    fn is_distinguished(&self, channel: &ChannelIdentity, base_denom: &str) -> bool {
        self.entries
            .read()
            .get(channel)
            .and_then(|denoms| denoms.get(base_denom))
            .copied()
            .unwrap_or(false)
    }
}
