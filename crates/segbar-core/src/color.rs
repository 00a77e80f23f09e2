//! This module re-exports the types from the [`rgb`](https://crates.io/crates/rgb) crate.

pub use rgb::*;

/// Pure green, the default fill of segments and of the progress overlay.
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
/// Pure white.
pub const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};
/// A neutral mid gray.
pub const GRAY: RGB8 = RGB8 {
    r: 136,
    g: 136,
    b: 136,
};

/// A color packed as 4 floats representing RGBA channels.
///
/// Note that the color is assumed to be in SRGB format.
#[repr(C)]
#[derive(Default, Debug, Clone, Copy, PartialEq, bytemuck::Zeroable, bytemuck::Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedSrgb(pub [f32; 4]);

impl PackedSrgb {
    /// The color black with full opacity
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    /// The color white with full opacity
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    /// A color with no opacity
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);

    /// Creates a [`PackedSrgb`] from its SRGBA components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    /// Creates a [`PackedSrgb`] from 8 bit SRGB components and an alpha component.
    pub fn from_srgb8_alpha(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self([unit(r), unit(g), unit(b), a])
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }
    pub fn g(&self) -> f32 {
        self.0[1]
    }
    pub fn b(&self) -> f32 {
        self.0[2]
    }
    pub fn a(&self) -> f32 {
        self.0[3]
    }
}

impl From<RGB8> for PackedSrgb {
    fn from(color: RGB8) -> Self {
        Self::from_srgb8_alpha(color.r, color.g, color.b, 1.0)
    }
}

impl From<RGBA8> for PackedSrgb {
    fn from(color: RGBA8) -> Self {
        Self::from_srgb8_alpha(color.r, color.g, color.b, unit(color.a))
    }
}

impl From<[f32; 4]> for PackedSrgb {
    fn from(color: [f32; 4]) -> Self {
        Self(color)
    }
}

#[inline]
fn unit(c: u8) -> f32 {
    f32::from(c) / 255.0
}

/// The fill of one segment of the bar: a color and an opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentColor {
    pub color: RGB8,
    /// Opacity in the range `[0.0, 1.0]`.
    pub alpha: f32,
}

impl SegmentColor {
    /// Creates a new [`SegmentColor`].
    ///
    /// `alpha` is clamped into `[0.0, 1.0]`.
    pub fn new(color: RGB8, alpha: f32) -> Self {
        Self {
            color,
            alpha: clamp_alpha(alpha),
        }
    }

    /// A fully opaque [`SegmentColor`].
    pub const fn opaque(color: RGB8) -> Self {
        Self { color, alpha: 1.0 }
    }

    /// Returns a copy of this color with a different opacity.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.color, alpha)
    }

    /// The color ready to be written into vertices.
    pub fn packed(&self) -> PackedSrgb {
        PackedSrgb::from_srgb8_alpha(
            self.color.r,
            self.color.g,
            self.color.b,
            clamp_alpha(self.alpha),
        )
    }
}

impl Default for SegmentColor {
    fn default() -> Self {
        Self::opaque(GREEN)
    }
}

impl From<RGB8> for SegmentColor {
    fn from(color: RGB8) -> Self {
        Self::opaque(color)
    }
}

impl From<SegmentColor> for PackedSrgb {
    fn from(color: SegmentColor) -> Self {
        color.packed()
    }
}

fn clamp_alpha(alpha: f32) -> f32 {
    if (0.0..=1.0).contains(&alpha) {
        alpha
    } else {
        log::warn!("Segment alpha {alpha} must be within 0.0..=1.0 range.");

        if alpha.is_nan() {
            1.0
        } else {
            alpha.clamp(0.0, 1.0)
        }
    }
}
