use serde::{Deserialize, Serialize};

/// Numeric interpretation of a format's components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompType {
    #[default]
    Typeless,
    Float,
    UNorm,
    SNorm,
    UInt,
    SInt,
    UScaled,
    SScaled,
    Depth,
    UNormSRGB,
}

/// Memory layout class of a format.
///
/// `Regular` formats are described completely by component count/width/type; the packed and
/// block-compressed kinds are only carried through for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResourceFormatType {
    #[default]
    Regular,
    Undefined,
    BC1,
    BC2,
    BC3,
    BC4,
    BC5,
    BC6,
    BC7,
    R10G10B10A2,
    R11G11B10,
    R5G6B5,
    R5G5B5A1,
    R4G4B4A4,
    D16S8,
    D24S8,
    D32S8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceFormat {
    pub kind: ResourceFormatType,
    pub comp_count: u8,
    pub comp_byte_width: u8,
    pub comp_type: CompType,
    pub srgb_corrected: bool,
}

impl Default for ResourceFormat {
    fn default() -> Self {
        Self {
            kind: ResourceFormatType::Undefined,
            comp_count: 0,
            comp_byte_width: 0,
            comp_type: CompType::Typeless,
            srgb_corrected: false,
        }
    }
}

impl ResourceFormat {
    pub const fn regular(comp_count: u8, comp_byte_width: u8, comp_type: CompType) -> Self {
        Self {
            kind: ResourceFormatType::Regular,
            comp_count,
            comp_byte_width,
            comp_type,
            srgb_corrected: false,
        }
    }

    /// Bytes occupied by one element when laid out tightly in a vertex buffer.
    pub const fn element_byte_size(&self) -> u32 {
        self.comp_byte_width as u32 * self.comp_count as u32
    }
}

/// A four-lane 32-bit value that can be viewed as floats, unsigned or signed integers.
///
/// The lanes are stored as raw bits, so equality is bit-wise (`-0.0 != 0.0`, `NaN == NaN` for the
/// same payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PixelValue([u32; 4]);

impl PixelValue {
    pub const ZERO: Self = Self([0; 4]);

    pub fn from_f32(v: [f32; 4]) -> Self {
        Self(v.map(f32::to_bits))
    }

    pub const fn from_u32(v: [u32; 4]) -> Self {
        Self(v)
    }

    pub fn from_i32(v: [i32; 4]) -> Self {
        Self(v.map(|x| x as u32))
    }

    pub fn f32s(&self) -> [f32; 4] {
        self.0.map(f32::from_bits)
    }

    pub const fn u32s(&self) -> [u32; 4] {
        self.0
    }

    pub fn i32s(&self) -> [i32; 4] {
        self.0.map(|x| x as i32)
    }

    /// Lanes past the fourth are ignored.
    pub fn set_f32(&mut self, lane: usize, v: f32) {
        if let Some(slot) = self.0.get_mut(lane) {
            *slot = v.to_bits();
        }
    }

    pub fn set_u32(&mut self, lane: usize, v: u32) {
        if let Some(slot) = self.0.get_mut(lane) {
            *slot = v;
        }
    }

    pub fn set_i32(&mut self, lane: usize, v: i32) {
        if let Some(slot) = self.0.get_mut(lane) {
            *slot = v as u32;
        }
    }
}
