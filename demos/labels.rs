//! Render a dial of rotated labels to SVG on stdout.
//!
//! Run with: RUST_LOG=debug cargo run --example labels --features tracing

use label_anchor::{
    Alignment, Anchor, BlockExtent, Degrees, LayoutConfig, Point, SvgConfig, SvgSurface,
    draw_text, draw_text_block, format_value, point_at,
};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = LayoutConfig::new().with_alignment(Alignment::Center);
    let mut svg = SvgSurface::new(SvgConfig::new(320.0, 320.0));
    let center = Point::new(160.0, 160.0);

    // tick labels around the dial, each turned to face outward
    for step in 0..12 {
        let angle = Degrees(step as f64 * 30.0 - 90.0);
        let value = step as f64 * 0.125;
        let label = config
            .measured_label(format_value(value), point_at(center, 120.0, angle))?
            .with_angle(angle.normalized());
        draw_text(&mut svg, &label);
    }
    tracing::info!(ticks = 12, "dial drawn");

    let caption = config
        .block(
            "Values are rounded to the precision an axis label needs",
            BlockExtent::Constrained(label_anchor::Size::new(140.0, f64::INFINITY)),
            center,
        )
        .with_anchor(Anchor::CENTER);
    draw_text_block(&mut svg, &config.metrics, &caption)?;

    print!("{}", svg.finish());
    Ok(())
}
