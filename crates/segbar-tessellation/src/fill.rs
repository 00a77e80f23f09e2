use segbar_core::color::{PackedSrgb, SegmentColor};

/// The style used to fill geometry.
#[derive(Debug, Clone)]
pub struct Fill {
    /// The color of the fill.
    ///
    /// By default, it is set to [`FillStyle::Solid`] with [`PackedSrgb::BLACK`].
    pub style: FillStyle,

    /// The fill rule defines how to determine what is inside and what is
    /// outside of a shape.
    ///
    /// See the [SVG specification][1] for more details.
    ///
    /// By default, it is set to `NonZero`.
    ///
    /// [1]: https://www.w3.org/TR/SVG/painting.html#FillRuleProperty
    pub rule: FillRule,
}

impl Default for Fill {
    fn default() -> Self {
        Self {
            style: FillStyle::Solid(PackedSrgb::BLACK),
            rule: FillRule::NonZero,
        }
    }
}

impl From<FillStyle> for Fill {
    fn from(style: FillStyle) -> Fill {
        Fill {
            style,
            ..Fill::default()
        }
    }
}

impl From<PackedSrgb> for Fill {
    fn from(color: PackedSrgb) -> Fill {
        FillStyle::Solid(color).into()
    }
}

impl From<SegmentColor> for Fill {
    fn from(color: SegmentColor) -> Fill {
        FillStyle::from(color).into()
    }
}

/// The fill rule defines how to determine what is inside and what is outside of
/// a shape.
///
/// See the [SVG specification][1].
///
/// [1]: https://www.w3.org/TR/SVG/painting.html#FillRuleProperty
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl From<FillRule> for lyon::tessellation::FillRule {
    fn from(rule: FillRule) -> Self {
        match rule {
            FillRule::NonZero => lyon::tessellation::FillRule::NonZero,
            FillRule::EvenOdd => lyon::tessellation::FillRule::EvenOdd,
        }
    }
}

/// The coloring style of some drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillStyle {
    /// A solid color.
    Solid(PackedSrgb),
}

impl From<PackedSrgb> for FillStyle {
    fn from(color: PackedSrgb) -> Self {
        Self::Solid(color)
    }
}

impl From<SegmentColor> for FillStyle {
    fn from(color: SegmentColor) -> Self {
        Self::Solid(color.packed())
    }
}
