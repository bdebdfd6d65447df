//! Anchor-aware placement of labels and images on a 2D drawing surface.
//!
//! The core computes where a piece of measured content goes, given a target
//! point, an [`Anchor`] fraction and a rotation:
//!
//! - unrotated text is shifted by its alignment and anchor and drawn directly;
//! - rotated text is centered on a translated, rotated origin, with the anchor
//!   applied to the *rotated* bounding box;
//! - images are centered on their point and resampled at most once per size.
//!
//! The surface, the text measurer and the resampler are traits
//! ([`Surface`], [`TextMeasure`], [`Resample`]); [`Recorder`], [`SvgSurface`],
//! [`CharMetrics`] and [`Resampler`] are ready-made implementations.
//!
//! ```
//! use label_anchor::{Degrees, Point, Recorder, Size, TextLabel, draw_text};
//!
//! let mut surface = Recorder::new();
//! let label = TextLabel::new("42", Size::new(12.0, 10.0), Point::new(50.0, 50.0))
//!     .with_angle(Degrees(-45.0));
//! draw_text(&mut surface, &label);
//! assert_eq!(surface.kinds(), ["save", "translate", "rotate", "text", "restore"]);
//! ```

pub mod bitmap;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod log;
pub mod magnitude;
pub mod numeric;
pub mod surface;
pub mod svg;
pub mod text;
pub mod types;

pub use bitmap::{Image, ImageId, Resample, Resampler, ResizeCache};
pub use config::LayoutConfig;
pub use errors::{DrawError, MeasureError, NumericError, ResampleError};
pub use geometry::{point_at, rotated_size, rotated_size_deg};
pub use layout::{
    BlockExtent, Draw, DrawContext, ImageLabel, Label, Placement, TextBlock, TextLabel, draw_all,
    draw_image, draw_text, draw_text_block, place_block, place_text,
};
pub use magnitude::{decimal_places, format_value, round_to_next_significant};
pub use numeric::{clamp, normalized_angle, to_degrees, to_radians};
pub use surface::{DrawOp, Recorder, Surface, scoped};
pub use svg::{SvgConfig, SvgSurface};
pub use text::{CharMetrics, TextAttributes, TextMeasure};
pub use types::{Alignment, Anchor, Degrees, Offset, Point, Radians, Rect, Size};
