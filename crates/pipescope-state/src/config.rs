use pipescope_types::GraphicsApi;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pipeline state config: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Settings for a [`PipelineState`](crate::PipelineState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineStateConfig {
    /// API whose terminology the stage utilities use while no capture is loaded.
    pub default_api: Option<GraphicsApi>,
}

impl PipelineStateConfig {
    pub fn with_default_api(api: GraphicsApi) -> Self {
        Self {
            default_api: Some(api),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
