//! Layout configuration and built-in defaults

use crate::errors::MeasureError;
use crate::layout::{BlockExtent, TextBlock, TextLabel};
use crate::text::{CharMetrics, TextAttributes, TextMeasure};
use crate::types::{Alignment, Anchor, Point, Radians, Size};

/// Default settings
pub mod defaults {
    use crate::types::{Alignment, Anchor, Radians};

    pub const ANCHOR: Anchor = Anchor::CENTER;
    pub const ANGLE: Radians = Radians::ZERO;
    pub const ALIGNMENT: Alignment = Alignment::Left;
    pub const FONT_SIZE: f64 = 10.0;
    /// Character advance as a fraction of the font size
    pub const CHAR_WIDTH: f64 = 0.6;
    /// Line pitch as a fraction of the font size
    pub const LINE_HEIGHT: f64 = 1.2;
}

/// Defaults applied to labels built through this config
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub anchor: Anchor,
    pub angle: Radians,
    pub alignment: Alignment,
    pub attrs: TextAttributes,
    pub metrics: CharMetrics,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            anchor: defaults::ANCHOR,
            angle: defaults::ANGLE,
            alignment: defaults::ALIGNMENT,
            attrs: TextAttributes::default(),
            metrics: CharMetrics::default(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the default angle; accepts [`Degrees`](crate::Degrees) too
    pub fn with_angle(mut self, angle: impl Into<Radians>) -> Self {
        self.angle = angle.into();
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_attrs(mut self, attrs: TextAttributes) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_metrics(mut self, metrics: CharMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// A label of already measured `size` carrying this config's defaults
    pub fn label(&self, text: impl Into<String>, size: Size, target: Point) -> TextLabel {
        TextLabel::new(text, size, target)
            .with_anchor(self.anchor)
            .with_angle(self.angle)
            .with_alignment(self.alignment)
            .with_attrs(self.attrs.clone())
    }

    /// A label measured with this config's [`CharMetrics`]
    pub fn measured_label(
        &self,
        text: impl Into<String>,
        target: Point,
    ) -> Result<TextLabel, MeasureError> {
        let text = text.into();
        let size = self.metrics.measure(&text, &self.attrs)?;
        Ok(self.label(text, size, target))
    }

    /// A text block carrying this config's defaults
    pub fn block(&self, text: impl Into<String>, extent: BlockExtent, target: Point) -> TextBlock {
        TextBlock::new(text, extent, target)
            .with_anchor(self.anchor)
            .with_angle(self.angle)
            .with_attrs(self.attrs.clone())
    }
}
