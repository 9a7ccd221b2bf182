use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Programmable pipeline stages.
///
/// The HLSL-family names (hull, domain, pixel) are the same stages as their GLSL-family
/// counterparts and are exposed as associated constants rather than separate variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShaderStage {
    Vertex,
    TessControl,
    TessEval,
    Geometry,
    Fragment,
    Compute,
}

impl ShaderStage {
    pub const HULL: Self = Self::TessControl;
    pub const DOMAIN: Self = Self::TessEval;
    pub const PIXEL: Self = Self::Fragment;

    pub const ALL: [Self; 6] = [
        Self::Vertex,
        Self::TessControl,
        Self::TessEval,
        Self::Geometry,
        Self::Fragment,
        Self::Compute,
    ];

    /// Decodes a raw stage index as stored by capture tooling (`0 = vertex` .. `5 = compute`).
    pub const fn from_raw(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Vertex),
            1 => Some(Self::TessControl),
            2 => Some(Self::TessEval),
            3 => Some(Self::Geometry),
            4 => Some(Self::Fragment),
            5 => Some(Self::Compute),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u32 {
        match self {
            Self::Vertex => 0,
            Self::TessControl => 1,
            Self::TessEval => 2,
            Self::Geometry => 3,
            Self::Fragment => 4,
            Self::Compute => 5,
        }
    }
}

impl TryFrom<u32> for ShaderStage {
    type Error = StageError;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        Self::from_raw(v).ok_or(StageError::InvalidStage(v))
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Vertex => "vertex",
            Self::TessControl => "tess_control",
            Self::TessEval => "tess_eval",
            Self::Geometry => "geometry",
            Self::Fragment => "fragment",
            Self::Compute => "compute",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StageError {
    #[error("invalid shader stage index {0}")]
    InvalidStage(u32),
}

bitflags! {
    /// Stage-visibility mask, as stored on descriptor bindings.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ShaderStageMask: u32 {
        const VERTEX = 1 << 0;
        const TESS_CONTROL = 1 << 1;
        const TESS_EVAL = 1 << 2;
        const GEOMETRY = 1 << 3;
        const FRAGMENT = 1 << 4;
        const COMPUTE = 1 << 5;
    }
}

impl From<ShaderStage> for ShaderStageMask {
    fn from(stage: ShaderStage) -> Self {
        match stage {
            ShaderStage::Vertex => Self::VERTEX,
            ShaderStage::TessControl => Self::TESS_CONTROL,
            ShaderStage::TessEval => Self::TESS_EVAL,
            ShaderStage::Geometry => Self::GEOMETRY,
            ShaderStage::Fragment => Self::FRAGMENT,
            ShaderStage::Compute => Self::COMPUTE,
        }
    }
}

/// Native graphics API a capture was recorded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphicsApi {
    D3D11,
    D3D12,
    OpenGL,
    Vulkan,
}

/// Terminology family shared by a group of APIs.
///
/// `Hlsl` APIs talk about hull/domain/pixel shaders and render targets; `Glsl` APIs about
/// tessellation control/evaluation/fragment shaders and framebuffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    Hlsl,
    Glsl,
}

impl GraphicsApi {
    pub const fn family(self) -> ApiFamily {
        match self {
            Self::D3D11 | Self::D3D12 => ApiFamily::Hlsl,
            Self::OpenGL | Self::Vulkan => ApiFamily::Glsl,
        }
    }
}

impl fmt::Display for GraphicsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::D3D11 => "D3D11",
            Self::D3D12 => "D3D12",
            Self::OpenGL => "OpenGL",
            Self::Vulkan => "Vulkan",
        };
        f.write_str(s)
    }
}
