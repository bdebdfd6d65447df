//! Drawing surface abstraction.
//!
//! A [`Surface`] is the 2D canvas layout draws onto: a save/restore stack of
//! graphics state, translation, rotation, and primitive draw calls. All
//! methods take `&mut self`, so nothing else can draw on the same surface
//! between a [`scoped`] block's save and restore.

use crate::bitmap::{Image, ImageId};
use crate::text::TextAttributes;
use crate::types::{Offset, Point, Radians, Rect};

/// A 2D canvas
pub trait Surface {
    /// Push the current graphics state
    fn save(&mut self);

    /// Pop the graphics state pushed by the matching [`save`](Surface::save)
    fn restore(&mut self);

    /// Move the coordinate origin
    fn translate(&mut self, by: Offset);

    /// Rotate the coordinate system about the current origin
    fn rotate(&mut self, angle: Radians);

    /// Draw `image` stretched into `rect`
    fn draw_image(&mut self, image: &Image, rect: Rect);

    /// Draw a single run of text with its top-left corner at `at`
    fn draw_text(&mut self, text: &str, at: Point, attrs: &TextAttributes);

    /// Draw multi-line text wrapped into `rect` (line-fragment layout)
    fn draw_text_block(&mut self, text: &str, rect: Rect, attrs: &TextAttributes);
}

/// Run `f` between a save and its matching restore.
///
/// The restore is emitted even when `f` returns early with an error value.
pub fn scoped<S, R>(surface: &mut S, f: impl FnOnce(&mut S) -> R) -> R
where
    S: Surface + ?Sized,
{
    surface.save();
    let out = f(surface);
    surface.restore();
    out
}

/// One recorded surface call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Translate(Offset),
    Rotate(Radians),
    Image { image: ImageId, rect: Rect },
    Text { text: String, at: Point, attrs: TextAttributes },
    TextBlock { text: String, rect: Rect, attrs: TextAttributes },
}

impl DrawOp {
    /// Short name of the operation, handy for asserting call sequences
    pub fn kind(&self) -> &'static str {
        match self {
            DrawOp::Save => "save",
            DrawOp::Restore => "restore",
            DrawOp::Translate(_) => "translate",
            DrawOp::Rotate(_) => "rotate",
            DrawOp::Image { .. } => "image",
            DrawOp::Text { .. } => "text",
            DrawOp::TextBlock { .. } => "text_block",
        }
    }
}

/// A surface that records every call instead of drawing
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
    depth: usize,
    max_depth: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in call order
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Operation names in call order
    pub fn kinds(&self) -> Vec<&'static str> {
        self.ops.iter().map(DrawOp::kind).collect()
    }

    /// Current save depth; zero when every save has been restored
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Deepest save nesting seen
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl Surface for Recorder {
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, by: Offset) {
        self.ops.push(DrawOp::Translate(by));
    }

    fn rotate(&mut self, angle: Radians) {
        self.ops.push(DrawOp::Rotate(angle));
    }

    fn draw_image(&mut self, image: &Image, rect: Rect) {
        self.ops.push(DrawOp::Image { image: image.id(), rect });
    }

    fn draw_text(&mut self, text: &str, at: Point, attrs: &TextAttributes) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            attrs: attrs.clone(),
        });
    }

    fn draw_text_block(&mut self, text: &str, rect: Rect, attrs: &TextAttributes) {
        self.ops.push(DrawOp::TextBlock {
            text: text.to_string(),
            rect,
            attrs: attrs.clone(),
        });
    }
}
