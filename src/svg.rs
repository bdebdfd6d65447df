//! SVG output surface.
//!
//! [`SvgSurface`] turns the draw-call stream into SVG markup. Every
//! save/restore pair becomes a `<g>` carrying the translate/rotate issued
//! inside it; empty groups are dropped. A transform that follows draws in
//! the same save level opens a nested group, so it only reaches later draws. Text blocks are wrapped with the
//! configured [`CharMetrics`] and emitted as one `<tspan>` per line.

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::bitmap::Image;
use crate::log::warn;
use crate::surface::Surface;
use crate::text::{CharMetrics, TextAttributes};
use crate::types::{Offset, Point, Radians, Rect};

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    pub width: f64,
    pub height: f64,
    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,
    /// Metrics used to wrap text blocks into lines
    pub metrics: CharMetrics,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            pretty_print: true,
            metrics: CharMetrics::default(),
        }
    }
}

impl SvgConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_metrics(mut self, metrics: CharMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

/// One level of the save stack
#[derive(Debug, Default)]
struct Frame {
    transforms: Vec<String>,
    children: Vec<String>,
    /// Opened by a transform rather than a save; closed by the next restore
    implicit: bool,
}

/// A [`Surface`] that builds an SVG document
#[derive(Debug)]
pub struct SvgSurface {
    config: SvgConfig,
    frames: Vec<Frame>,
}

impl SvgSurface {
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            frames: vec![Frame::default()],
        }
    }

    fn current(&mut self) -> &mut Frame {
        // the root frame is never popped
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Add a transform that applies to the draws issued from now on
    fn push_transform(&mut self, transform: String) {
        if self.current().children.is_empty() {
            self.current().transforms.push(transform);
        } else {
            self.frames.push(Frame {
                transforms: vec![transform],
                children: Vec::new(),
                implicit: true,
            });
        }
    }

    /// Pop the innermost frame into its parent
    fn pop_frame(&mut self) {
        if self.frames.len() < 2 {
            return;
        }
        if let Some(frame) = self.frames.pop() {
            let elements = self.close(frame);
            self.current().children.extend(elements);
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print { "\n" } else { "" }
    }

    fn indent(&self, element: &str) -> String {
        if !self.config.pretty_print {
            return element.to_string();
        }
        element
            .lines()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Collapse a frame into the elements it contributes to its parent
    fn close(&self, frame: Frame) -> Vec<String> {
        if frame.children.is_empty() {
            return Vec::new();
        }
        if frame.transforms.is_empty() {
            return frame.children;
        }

        let nl = self.newline();
        let body = frame
            .children
            .iter()
            .map(|child| self.indent(child))
            .collect::<Vec<_>>()
            .join(nl);
        vec![format!(
            "<g transform=\"{}\">{nl}{body}{nl}</g>",
            frame.transforms.join(" ")
        )]
    }

    /// Close any unbalanced groups and render the document
    pub fn finish(mut self) -> String {
        while self.frames.len() > 1 {
            let implicit = self.frames.last().is_some_and(|frame| frame.implicit);
            if !implicit {
                warn!(depth = self.frames.len() - 1, "unbalanced save at finish");
            }
            self.pop_frame();
        }
        let root = self.frames.pop().unwrap_or_default();
        let elements = self.close(root);

        let nl = self.newline();
        let w = fmt_num(self.config.width);
        let h = fmt_num(self.config.height);
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">{nl}"
        );
        for element in &elements {
            out.push_str(&self.indent(element));
            out.push_str(nl);
        }
        out.push_str("</svg>");
        out.push_str(nl);
        out
    }

    fn text_attributes(attrs: &TextAttributes) -> String {
        let mut out = format!(" font-size=\"{}\"", fmt_num(attrs.font_size));
        if let Some(family) = &attrs.font_family {
            out.push_str(&format!(" font-family=\"{}\"", escape(family)));
        }
        if attrs.bold {
            out.push_str(" font-weight=\"bold\"");
        }
        if attrs.italic {
            out.push_str(" font-style=\"italic\"");
        }
        if let Some(fill) = &attrs.fill {
            out.push_str(&format!(" fill=\"{}\"", escape(fill)));
        }
        out.push_str(" dominant-baseline=\"hanging\"");
        out
    }
}

impl Surface for SvgSurface {
    fn save(&mut self) {
        self.frames.push(Frame::default());
    }

    fn restore(&mut self) {
        if self.frames.iter().skip(1).all(|frame| frame.implicit) {
            warn!("restore without matching save");
            return;
        }
        while self.frames.last().is_some_and(|frame| frame.implicit) {
            self.pop_frame();
        }
        self.pop_frame();
    }

    fn translate(&mut self, by: Offset) {
        self.push_transform(format!("translate({} {})", fmt_num(by.dx), fmt_num(by.dy)));
    }

    fn rotate(&mut self, angle: Radians) {
        self.push_transform(format!("rotate({})", fmt_num_hi(angle.to_degrees().raw())));
    }

    fn draw_image(&mut self, image: &Image, rect: Rect) {
        let mut png = Vec::new();
        if let Err(_err) = image
            .pixels()
            .write_to(&mut Cursor::new(&mut png), ::image::ImageFormat::Png)
        {
            warn!(error = %_err, image = image.id().raw(), "skipping image that failed to encode");
            return;
        }
        let element = format!(
            "<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" href=\"data:image/png;base64,{}\"/>",
            fmt_num(rect.origin.x),
            fmt_num(rect.origin.y),
            fmt_num(rect.size.w),
            fmt_num(rect.size.h),
            STANDARD.encode(&png)
        );
        self.current().children.push(element);
    }

    fn draw_text(&mut self, text: &str, at: Point, attrs: &TextAttributes) {
        let element = format!(
            "<text x=\"{}\" y=\"{}\"{}>{}</text>",
            fmt_num(at.x),
            fmt_num(at.y),
            Self::text_attributes(attrs),
            escape(text)
        );
        self.current().children.push(element);
    }

    fn draw_text_block(&mut self, text: &str, rect: Rect, attrs: &TextAttributes) {
        let metrics = self.config.metrics;
        let pitch = metrics.line_height * attrs.font_size;
        let spans: String = metrics
            .wrap(text, attrs, rect.size.w)
            .iter()
            .enumerate()
            .map(|(i, line)| {
                format!(
                    "<tspan x=\"{}\" y=\"{}\">{}</tspan>",
                    fmt_num(rect.origin.x),
                    fmt_num(rect.origin.y + i as f64 * pitch),
                    escape(line)
                )
            })
            .collect();
        let element = format!("<text{}>{}</text>", Self::text_attributes(attrs), spans);
        self.current().children.push(element);
    }
}

/// Escape text content and attribute values
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a number like C's %g (6 significant figures, trailing zeros trimmed)
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with 10 significant figures, for angles
pub(crate) fn fmt_num_hi(value: f64) -> String {
    fmt_num_precision(value, 10)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", value, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
