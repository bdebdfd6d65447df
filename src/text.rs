//! Text attributes and measurement.
//!
//! Layout never looks inside [`TextAttributes`]; it only forwards them to the
//! surface. Measuring is behind the [`TextMeasure`] trait so a caller can plug
//! in real font metrics. [`CharMetrics`] is the built-in estimate: every
//! character is a fixed fraction of the font size wide, every line a fixed
//! fraction tall.

use crate::config::defaults;
use crate::errors::MeasureError;
use crate::types::{Point, Rect, Size};

/// Rendering attributes for a run of text
#[derive(Clone, Debug, PartialEq)]
pub struct TextAttributes {
    /// Font size in surface units
    pub font_size: f64,
    pub font_family: Option<String>,
    pub bold: bool,
    pub italic: bool,
    /// Fill color, passed through verbatim
    pub fill: Option<String>,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            font_size: defaults::FONT_SIZE,
            font_family: None,
            bold: false,
            italic: false,
            fill: None,
        }
    }
}

impl TextAttributes {
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// Text measurement service
pub trait TextMeasure {
    /// Size of `text` laid out on a single line per `\n`-separated paragraph
    fn measure(&self, text: &str, attrs: &TextAttributes) -> Result<Size, MeasureError>;

    /// Bounding rectangle of `text` wrapped to `constraint.w`.
    ///
    /// The origin is relative to the layout origin (line-fragment layout), so
    /// it is usually (0, 0).
    fn bounding_rect(
        &self,
        text: &str,
        attrs: &TextAttributes,
        constraint: Size,
    ) -> Result<Rect, MeasureError>;
}

/// Fixed-ratio character metrics.
///
/// Like a monospace font: a character is `char_width * font_size` wide and
/// a line is `line_height * font_size` tall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharMetrics {
    /// Advance of one character as a fraction of the font size
    pub char_width: f64,
    /// Line pitch as a fraction of the font size
    pub line_height: f64,
}

impl Default for CharMetrics {
    fn default() -> Self {
        Self {
            char_width: defaults::CHAR_WIDTH,
            line_height: defaults::LINE_HEIGHT,
        }
    }
}

impl CharMetrics {
    pub fn new(char_width: f64, line_height: f64) -> Self {
        Self { char_width, line_height }
    }

    fn check_font_size(attrs: &TextAttributes) -> Result<f64, MeasureError> {
        let size = attrs.font_size;
        if size.is_finite() && size > 0.0 {
            Ok(size)
        } else {
            Err(MeasureError::InvalidFontSize { size })
        }
    }

    fn line_width(&self, line: &str, font_size: f64) -> f64 {
        line.chars().count() as f64 * self.char_width * font_size
    }

    /// Break `text` into lines no wider than `max_width`.
    ///
    /// Paragraphs split on `\n` always start a new line. Within a paragraph
    /// words are packed greedily; a single word wider than `max_width` gets a
    /// line of its own and overflows.
    pub fn wrap(&self, text: &str, attrs: &TextAttributes, max_width: f64) -> Vec<String> {
        let font_size = attrs.font_size;
        let space = self.line_width(" ", font_size);
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut current = String::new();
            let mut current_width = 0.0;

            for word in paragraph.split_whitespace() {
                let word_width = self.line_width(word, font_size);
                if current.is_empty() {
                    current.push_str(word);
                    current_width = word_width;
                } else if current_width + space + word_width <= max_width {
                    current.push(' ');
                    current.push_str(word);
                    current_width += space + word_width;
                } else {
                    lines.push(std::mem::take(&mut current));
                    current.push_str(word);
                    current_width = word_width;
                }
            }

            // blank paragraphs still occupy a line
            lines.push(current);
        }

        lines
    }
}

impl TextMeasure for CharMetrics {
    fn measure(&self, text: &str, attrs: &TextAttributes) -> Result<Size, MeasureError> {
        let font_size = Self::check_font_size(attrs)?;
        if text.is_empty() {
            return Ok(Size::ZERO);
        }

        let (lines, widest) = text.split('\n').fold((0usize, 0.0_f64), |(n, widest), line| {
            (n + 1, widest.max(self.line_width(line, font_size)))
        });
        Ok(Size::new(widest, lines as f64 * self.line_height * font_size))
    }

    fn bounding_rect(
        &self,
        text: &str,
        attrs: &TextAttributes,
        constraint: Size,
    ) -> Result<Rect, MeasureError> {
        let font_size = Self::check_font_size(attrs)?;
        if constraint.w.is_nan() || constraint.w <= 0.0 {
            return Err(MeasureError::EmptyConstraint { width: constraint.w });
        }
        if text.is_empty() {
            return Ok(Rect::new(Point::ORIGIN, Size::ZERO));
        }

        let lines = self.wrap(text, attrs, constraint.w);
        let widest = lines
            .iter()
            .map(|line| self.line_width(line, font_size))
            .fold(0.0_f64, f64::max);
        let height = lines.len() as f64 * self.line_height * font_size;
        Ok(Rect::new(Point::ORIGIN, Size::new(widest, height)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> TextAttributes {
        TextAttributes::default().with_font_size(10.0)
    }

    fn metrics() -> CharMetrics {
        CharMetrics::new(0.5, 1.2)
    }

    #[test]
    fn measure_single_line() {
        let size = metrics().measure("hello", &attrs()).unwrap();
        assert_eq!(size, Size::new(25.0, 12.0));
    }

    #[test]
    fn measure_counts_chars_not_bytes() {
        let size = metrics().measure("héllo", &attrs()).unwrap();
        assert_eq!(size.w, 25.0);
    }

    #[test]
    fn measure_multiple_paragraphs_uses_widest() {
        let size = metrics().measure("ab\nabcd\n", &attrs()).unwrap();
        assert_eq!(size, Size::new(20.0, 36.0));
    }

    #[test]
    fn measure_empty_is_zero() {
        assert_eq!(metrics().measure("", &attrs()).unwrap(), Size::ZERO);
    }

    #[test]
    fn measure_rejects_bad_font_size() {
        let bad = TextAttributes::default().with_font_size(0.0);
        assert_eq!(
            metrics().measure("x", &bad),
            Err(MeasureError::InvalidFontSize { size: 0.0 })
        );
    }

    #[test]
    fn wrap_packs_words_greedily() {
        // each char is 5 wide; "aaa bb" = 30, "aaa bb c" = 40
        let lines = metrics().wrap("aaa bb c dddd", &attrs(), 35.0);
        assert_eq!(lines, vec!["aaa bb", "c dddd"]);
    }

    #[test]
    fn wrap_keeps_overlong_word_on_its_own_line() {
        let lines = metrics().wrap("a enormousword b", &attrs(), 20.0);
        assert_eq!(lines, vec!["a", "enormousword", "b"]);
    }

    #[test]
    fn wrap_honors_explicit_newlines() {
        let lines = metrics().wrap("one\n\ntwo", &attrs(), f64::INFINITY);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn bounding_rect_wraps_to_constraint() {
        let rect = metrics()
            .bounding_rect("aaa bb c dddd", &attrs(), Size::new(35.0, 100.0))
            .unwrap();
        assert_eq!(rect.origin, Point::ORIGIN);
        assert_eq!(rect.size, Size::new(30.0, 24.0));
    }

    #[test]
    fn bounding_rect_rejects_empty_constraint() {
        let err = metrics()
            .bounding_rect("abc", &attrs(), Size::new(0.0, 10.0))
            .unwrap_err();
        assert_eq!(err, MeasureError::EmptyConstraint { width: 0.0 });
    }
}
