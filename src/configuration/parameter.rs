//! Per-layer participation records and their ordering.

use crate::error::{LayerConfError, Result};
use crate::platform::PlatformFlags;
use crate::settings::SettingDataSet;
use std::fmt;

/// On-disk rank meaning "unranked".
pub const NO_RANK: i64 = -1;

/// How a configuration treats one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerState {
    /// No override: the loader discovers the layer as usual.
    #[default]
    ApplicationControlled,
    /// Forced on, inserted according to its rank.
    Overridden,
    /// Forced off regardless of discovery.
    Excluded,
}

impl LayerState {
    pub fn token(self) -> &'static str {
        match self {
            LayerState::ApplicationControlled => "APPLICATION_CONTROLLED",
            LayerState::Overridden => "OVERRIDDEN",
            LayerState::Excluded => "EXCLUDED",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "APPLICATION_CONTROLLED" => Some(LayerState::ApplicationControlled),
            "OVERRIDDEN" => Some(LayerState::Overridden),
            "EXCLUDED" => Some(LayerState::Excluded),
            _ => None,
        }
    }
}

impl fmt::Display for LayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One layer's participation in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Layer name.
    pub key: String,
    pub state: LayerState,
    /// Insertion order among overridden layers; `None` when unranked.
    pub overridden_rank: Option<u32>,
    pub platform_flags: PlatformFlags,
    pub settings: SettingDataSet,
}

impl Parameter {
    pub fn new(key: impl Into<String>, state: LayerState) -> Self {
        Self {
            key: key.into(),
            state,
            overridden_rank: None,
            platform_flags: PlatformFlags::ALL,
            settings: SettingDataSet::new(),
        }
    }

    pub fn is_available_on_this_platform(&self) -> bool {
        self.platform_flags.includes_current()
    }
}

/// Convert an on-disk rank. Negative ranks mean unranked.
pub(crate) fn rank_from_disk(rank: i64) -> Result<Option<u32>> {
    if rank < 0 {
        return Ok(None);
    }
    u32::try_from(rank)
        .map(Some)
        .map_err(|_| LayerConfError::format(format!("layer rank {} is out of range", rank)))
}

pub(crate) fn rank_to_disk(rank: Option<u32>) -> i64 {
    rank.map_or(NO_RANK, i64::from)
}

pub fn find_parameter<'a>(parameters: &'a [Parameter], key: &str) -> Option<&'a Parameter> {
    parameters.iter().find(|p| p.key == key)
}

pub fn find_parameter_mut<'a>(
    parameters: &'a mut [Parameter],
    key: &str,
) -> Option<&'a mut Parameter> {
    parameters.iter_mut().find(|p| p.key == key)
}

/// Sort parameters into application order.
///
/// Overridden parameters come first by ascending rank, unranked overridden
/// parameters after the ranked ones. Excluded and application-controlled
/// parameters follow in their existing relative order.
pub fn order_parameters(parameters: &mut [Parameter]) {
    parameters.sort_by_key(|p| match (p.state, p.overridden_rank) {
        (LayerState::Overridden, Some(rank)) => (0u8, rank),
        (LayerState::Overridden, None) => (1, 0),
        _ => (2, 0),
    });
}
