//! Anchor and rotation layout.
//!
//! Given measured content, a target point, an [`Anchor`] and an angle, this
//! module works out where the content's top-left corner goes and which
//! transforms the surface needs to draw it there.
//!
//! Unrotated content is drawn directly at its origin. Rotated content is
//! drawn centered on a translated, rotated origin, and the anchor then refers
//! to the rotated bounding box: the visible footprint after rotation is what
//! lines up with the target, not the unrotated rectangle.

use enum_dispatch::enum_dispatch;

use crate::bitmap::{Image, Resample, ResizeCache};
use crate::errors::{DrawError, MeasureError, ResampleError};
use crate::geometry::rotated_size;
use crate::log::{debug, trace};
use crate::surface::{Surface, scoped};
use crate::text::{TextAttributes, TextMeasure};
use crate::types::{Alignment, Anchor, Point, Radians, Rect, Size};

// ============================================================================
// Placement math
// ============================================================================

/// Where and how to draw a piece of content
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Draw with the content's top-left corner at `origin`, no transforms
    Direct { origin: Point },
    /// Save, translate to `translate`, rotate by `angle`, draw at the local
    /// point `draw_offset`, restore
    Rotated {
        translate: Point,
        angle: Radians,
        draw_offset: Point,
    },
}

impl Placement {
    pub fn is_rotated(&self) -> bool {
        matches!(self, Placement::Rotated { .. })
    }

    /// The point the content's top-left corner is drawn at, in the
    /// coordinate system active during the draw call
    pub fn draw_origin(&self) -> Point {
        match *self {
            Placement::Direct { origin } => origin,
            Placement::Rotated { draw_offset, .. } => draw_offset,
        }
    }

    /// Replay this placement onto `surface`.
    ///
    /// `draw` is called exactly once with the surface and the draw origin.
    /// For rotated placements it runs inside a save/restore pair.
    pub fn apply<S, R>(&self, surface: &mut S, draw: impl FnOnce(&mut S, Point) -> R) -> R
    where
        S: Surface + ?Sized,
    {
        match *self {
            Placement::Direct { origin } => draw(surface, origin),
            Placement::Rotated { translate, angle, draw_offset } => scoped(surface, |s| {
                s.translate(translate.to_offset());
                s.rotate(angle);
                draw(s, draw_offset)
            }),
        }
    }
}

/// Top-left origin for unrotated text.
///
/// Alignment shifts the run left by 0, half, or all of its width; then,
/// unless the anchor is (0, 0), `size * anchor` is subtracted.
pub fn unrotated_origin(size: Size, target: Point, alignment: Alignment, anchor: Anchor) -> Point {
    let mut origin = target;
    origin.x -= alignment.shift(size.w);
    if anchor != Anchor::TOP_LEFT {
        origin -= size * anchor;
    }
    origin
}

/// Transforms for content of `size` rotated by `angle` about its center.
///
/// The content is centered on the local origin. The translation starts at
/// `target` and, unless the anchor is centered, moves by the rotated
/// bounding size scaled by the anchor's distance from center.
pub fn rotated_placement(size: Size, target: Point, anchor: Anchor, angle: Radians) -> Placement {
    let draw_offset = Point::ORIGIN - size.half();
    let mut translate = target;
    if anchor != Anchor::CENTER {
        let bounds = rotated_size(size, angle);
        translate -= bounds * anchor.from_center();
    }

    debug!(
        ?size,
        ?anchor,
        angle = angle.raw(),
        tx = translate.x,
        ty = translate.y,
        "rotated placement"
    );
    Placement::Rotated { translate, angle, draw_offset }
}

/// Placement for single-line text.
///
/// An angle of exactly zero takes the direct path with no transforms, so
/// `place_text(.., Radians::ZERO)` equals the unrotated layout. Alignment
/// only affects unrotated text.
pub fn place_text(
    size: Size,
    target: Point,
    alignment: Alignment,
    anchor: Anchor,
    angle: Radians,
) -> Placement {
    if angle.is_zero() {
        let origin = unrotated_origin(size, target, alignment, anchor);
        trace!(x = origin.x, y = origin.y, "direct placement");
        Placement::Direct { origin }
    } else {
        rotated_placement(size, target, anchor, angle)
    }
}

/// Placement for a multi-line block: the same math as [`place_text`] with
/// left alignment
pub fn place_block(size: Size, target: Point, anchor: Anchor, angle: Radians) -> Placement {
    place_text(size, target, Alignment::Left, anchor, angle)
}

/// Top-left origin of an image of `size` centered on `center`
pub fn image_origin(center: Point, size: Size) -> Point {
    center - size.half()
}

// ============================================================================
// Labels
// ============================================================================

/// A single line of already measured text
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    /// Measured size of `text`
    pub size: Size,
    pub target: Point,
    pub alignment: Alignment,
    pub anchor: Anchor,
    pub angle: Radians,
    pub attrs: TextAttributes,
}

impl TextLabel {
    /// Left-aligned, centered on `target`, unrotated
    pub fn new(text: impl Into<String>, size: Size, target: Point) -> Self {
        Self {
            text: text.into(),
            size,
            target,
            alignment: Alignment::default(),
            anchor: Anchor::default(),
            angle: Radians::ZERO,
            attrs: TextAttributes::default(),
        }
    }

    /// Measure `text` with `measurer` and build a label from the result
    pub fn measured(
        text: impl Into<String>,
        target: Point,
        attrs: TextAttributes,
        measurer: &dyn TextMeasure,
    ) -> Result<Self, MeasureError> {
        let text = text.into();
        let size = measurer.measure(&text, &attrs)?;
        Ok(Self::new(text, size, target).with_attrs(attrs))
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the rotation; accepts [`Degrees`](crate::Degrees) too
    pub fn with_angle(mut self, angle: impl Into<Radians>) -> Self {
        self.angle = angle.into();
        self
    }

    pub fn with_attrs(mut self, attrs: TextAttributes) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn placement(&self) -> Placement {
        place_text(self.size, self.target, self.alignment, self.anchor, self.angle)
    }
}

/// How big a [`TextBlock`] is
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlockExtent {
    /// Size already known; no measuring happens
    Known(Size),
    /// Measure the text wrapped to this constraining size first
    Constrained(Size),
}

/// Multi-line text laid out as one rectangular block
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub extent: BlockExtent,
    pub target: Point,
    pub anchor: Anchor,
    pub angle: Radians,
    pub attrs: TextAttributes,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, extent: BlockExtent, target: Point) -> Self {
        Self {
            text: text.into(),
            extent,
            target,
            anchor: Anchor::default(),
            angle: Radians::ZERO,
            attrs: TextAttributes::default(),
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_angle(mut self, angle: impl Into<Radians>) -> Self {
        self.angle = angle.into();
        self
    }

    pub fn with_attrs(mut self, attrs: TextAttributes) -> Self {
        self.attrs = attrs;
        self
    }

    /// The block's size, measuring against the constraint if needed
    pub fn block_size(&self, measurer: &dyn TextMeasure) -> Result<Size, MeasureError> {
        match self.extent {
            BlockExtent::Known(size) => Ok(size),
            BlockExtent::Constrained(constraint) => Ok(measurer
                .bounding_rect(&self.text, &self.attrs, constraint)?
                .size),
        }
    }

    /// Placement for a block of `size`
    pub fn placement(&self, size: Size) -> Placement {
        place_block(size, self.target, self.anchor, self.angle)
    }
}

/// An image drawn centered on a point at a requested size
#[derive(Clone, Debug, PartialEq)]
pub struct ImageLabel {
    pub image: Image,
    pub center: Point,
    pub size: Size,
}

impl ImageLabel {
    pub fn new(image: Image, center: Point, size: Size) -> Self {
        Self { image, center, size }
    }

    /// Drawn at the image's natural size
    pub fn natural(image: Image, center: Point) -> Self {
        let size = image.size();
        Self { image, center, size }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(image_origin(self.center, self.size), self.size)
    }
}

// ============================================================================
// Drawing
// ============================================================================

/// Draw a single-line label
pub fn draw_text<S: Surface + ?Sized>(surface: &mut S, label: &TextLabel) {
    label.placement().apply(surface, |s, origin| {
        s.draw_text(&label.text, origin, &label.attrs)
    });
}

/// Draw a multi-line block, measuring it first when its size is not known
pub fn draw_text_block<S: Surface + ?Sized>(
    surface: &mut S,
    measurer: &dyn TextMeasure,
    block: &TextBlock,
) -> Result<(), MeasureError> {
    let size = block.block_size(measurer)?;
    block.placement(size).apply(surface, |s, origin| {
        s.draw_text_block(&block.text, Rect::new(origin, size), &block.attrs)
    });
    Ok(())
}

/// Draw an image, resampling through `cache` when the requested size differs
/// from the natural one
pub fn draw_image<S: Surface + ?Sized>(
    surface: &mut S,
    cache: &mut ResizeCache,
    resampler: &dyn Resample,
    label: &ImageLabel,
) -> Result<(), ResampleError> {
    let image = cache.get_or_resample(&label.image, label.size, resampler)?;
    surface.draw_image(&image, label.rect());
    Ok(())
}

/// Everything a [`Label`] may need while drawing
pub struct DrawContext<'a> {
    pub surface: &'a mut dyn Surface,
    pub measurer: &'a dyn TextMeasure,
    pub resampler: &'a dyn Resample,
    pub cache: &'a mut ResizeCache,
}

/// Something that can draw itself through a [`DrawContext`]
#[enum_dispatch]
pub trait Draw {
    fn draw(&self, cx: &mut DrawContext<'_>) -> Result<(), DrawError>;
}

impl Draw for TextLabel {
    fn draw(&self, cx: &mut DrawContext<'_>) -> Result<(), DrawError> {
        draw_text(&mut *cx.surface, self);
        Ok(())
    }
}

impl Draw for TextBlock {
    fn draw(&self, cx: &mut DrawContext<'_>) -> Result<(), DrawError> {
        Ok(draw_text_block(&mut *cx.surface, cx.measurer, self)?)
    }
}

impl Draw for ImageLabel {
    fn draw(&self, cx: &mut DrawContext<'_>) -> Result<(), DrawError> {
        Ok(draw_image(&mut *cx.surface, &mut *cx.cache, cx.resampler, self)?)
    }
}

/// Any drawable label
#[enum_dispatch(Draw)]
#[derive(Clone, Debug, PartialEq)]
pub enum Label {
    TextLabel,
    TextBlock,
    ImageLabel,
}

/// Draw `labels` in order, stopping at the first failure
pub fn draw_all<'l>(
    cx: &mut DrawContext<'_>,
    labels: impl IntoIterator<Item = &'l Label>,
) -> Result<(), DrawError> {
    for label in labels {
        label.draw(cx)?;
    }
    Ok(())
}
