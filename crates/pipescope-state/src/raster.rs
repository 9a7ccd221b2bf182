use pipescope_snapshot::Snapshot;
use pipescope_types::{Scissor, Viewport};
use tracing::debug;

use crate::state::PipelineState;

impl PipelineState {
    /// Viewport `index`, or the default for an index past the bound viewports.
    pub fn viewport(&self, index: usize) -> Viewport {
        let viewport = match self.snapshot() {
            None => return Viewport::default(),
            Some(Snapshot::D3D11(state)) => state.rasterizer.viewports.get(index).copied(),
            Some(Snapshot::D3D12(state)) => state.rasterizer.viewports.get(index).copied(),
            Some(Snapshot::OpenGl(state)) => state.rasterizer.viewports.get(index).copied(),
            Some(Snapshot::Vulkan(state)) => state
                .viewport_scissor
                .viewport_scissors
                .get(index)
                .map(|vs| vs.vp),
        };
        viewport.unwrap_or_else(|| {
            debug!(index, "viewport index out of range");
            Viewport::default()
        })
    }

    pub fn scissor(&self, index: usize) -> Scissor {
        let scissor = match self.snapshot() {
            None => return Scissor::default(),
            Some(Snapshot::D3D11(state)) => state.rasterizer.scissors.get(index).copied(),
            Some(Snapshot::D3D12(state)) => state.rasterizer.scissors.get(index).copied(),
            Some(Snapshot::OpenGl(state)) => state.rasterizer.scissors.get(index).copied(),
            Some(Snapshot::Vulkan(state)) => state
                .viewport_scissor
                .viewport_scissors
                .get(index)
                .map(|vs| vs.scissor),
        };
        scissor.unwrap_or_else(|| {
            debug!(index, "scissor index out of range");
            Scissor::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineStateConfig;
    use pipescope_snapshot::{d3d12, gl, vulkan};
    use pretty_assertions::assert_eq;

    fn loaded(snapshot: impl Into<Snapshot>) -> PipelineState {
        PipelineState::with_snapshot(snapshot.into(), PipelineStateConfig::default())
    }

    fn viewport(width: f32, height: f32) -> Viewport {
        Viewport {
            width,
            height,
            max_depth: 1.0,
            enabled: true,
            ..Default::default()
        }
    }

    #[test]
    fn indexes_rasterizer_arrays() {
        let mut state = d3d12::State::default();
        state.rasterizer.viewports = vec![viewport(1920.0, 1080.0), viewport(256.0, 256.0)];
        state.rasterizer.scissors = vec![Scissor {
            width: 64,
            height: 32,
            enabled: true,
            ..Default::default()
        }];
        let state = loaded(state);

        assert_eq!(state.viewport(1), viewport(256.0, 256.0));
        assert_eq!(state.scissor(0).width, 64);
        // Scissors are checked against their own array, not the viewports'.
        assert_eq!(state.scissor(1), Scissor::default());
        assert_eq!(state.viewport(2), Viewport::default());
    }

    #[test]
    fn vulkan_pairs_viewport_and_scissor() {
        let mut state = vulkan::State::default();
        state.viewport_scissor.viewport_scissors = vec![vulkan::ViewportScissor {
            vp: viewport(800.0, 600.0),
            scissor: Scissor {
                width: 800,
                height: 600,
                enabled: true,
                ..Default::default()
            },
        }];
        let state = loaded(state);

        assert_eq!(state.viewport(0), viewport(800.0, 600.0));
        assert_eq!(state.scissor(0).height, 600);
        assert_eq!(state.scissor(3), Scissor::default());
    }

    #[test]
    fn empty_or_unloaded_is_default() {
        assert_eq!(loaded(gl::State::default()).viewport(0), Viewport::default());
        assert_eq!(PipelineState::default().scissor(0), Scissor::default());
    }
}
