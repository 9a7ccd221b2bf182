use std::sync::Arc;

use pipescope_snapshot::Snapshot;
use pipescope_types::{ApiFamily, GraphicsApi};
use tracing::debug;

use crate::config::PipelineStateConfig;

/// The query surface over the currently published snapshot.
///
/// The snapshot is shared behind an `Arc`: publishing a new one replaces the reference wholesale,
/// and clones handed out earlier keep answering from the snapshot they were created with.
#[derive(Debug, Clone, Default)]
pub struct PipelineState {
    snapshot: Option<Arc<Snapshot>>,
    config: PipelineStateConfig,
}

impl PipelineState {
    pub fn new(config: PipelineStateConfig) -> Self {
        Self {
            snapshot: None,
            config,
        }
    }

    pub fn with_snapshot(snapshot: impl Into<Arc<Snapshot>>, config: PipelineStateConfig) -> Self {
        Self {
            snapshot: Some(snapshot.into()),
            config,
        }
    }

    /// Makes `snapshot` the active one.
    pub fn publish(&mut self, snapshot: impl Into<Arc<Snapshot>>) {
        let snapshot = snapshot.into();
        debug!(api = %snapshot.api(), "publishing pipeline snapshot");
        self.snapshot = Some(snapshot);
    }

    /// Drops the active snapshot (capture closed).
    pub fn clear(&mut self) {
        self.snapshot = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn active_api(&self) -> Option<GraphicsApi> {
        self.snapshot().map(Snapshot::api)
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_deref()
    }

    pub fn shared_snapshot(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.clone()
    }

    pub fn config(&self) -> &PipelineStateConfig {
        &self.config
    }

    /// Terminology family: the loaded capture's, else the configured default.
    pub(crate) fn family(&self) -> Option<ApiFamily> {
        self.active_api()
            .or(self.config.default_api)
            .map(GraphicsApi::family)
    }
}
