//! Inline SVG bar chart of the raw advertising inputs.

use crate::api::templates::{escape_html, format_thousands};
use crate::domain::{AdSpend, Feature};

const WIDTH: f64 = 360.0;
const HEIGHT: f64 = 220.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 32.0;
const BAR_WIDTH: f64 = 72.0;
const COLORS: [&str; 3] = ["#2563eb", "#16a34a", "#f59e0b"];

/// Geometry of one bar, in SVG user units
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub height: f64,
}

/// Lay out one bar per feature, scaled to the largest magnitude.
///
/// Negative inputs are drawn by magnitude; an all-zero budget draws flat bars.
pub fn layout(spend: &AdSpend) -> Vec<Bar> {
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let max = Feature::ALL
        .iter()
        .map(|f| spend.get(*f).abs())
        .fold(0.0_f64, f64::max);
    let slot = WIDTH / Feature::ALL.len() as f64;

    Feature::ALL
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            let value = spend.get(*feature);
            let height = if max > 0.0 {
                value.abs() / max * plot_height
            } else {
                0.0
            };
            Bar {
                label: feature.as_str(),
                value,
                x: slot * i as f64 + (slot - BAR_WIDTH) / 2.0,
                y: MARGIN_TOP + plot_height - height,
                height,
            }
        })
        .collect()
}

pub fn render_svg(spend: &AdSpend) -> String {
    let baseline = HEIGHT - MARGIN_BOTTOM;
    let mut svg = format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" role="img" aria-label="Advertising spend by channel">"#
    );
    svg.push_str(&format!(
        r##"<line x1="0" y1="{baseline}" x2="{WIDTH}" y2="{baseline}" stroke="#9ca3af"/>"##
    ));

    for (bar, color) in layout(spend).iter().zip(COLORS) {
        let center = bar.x + BAR_WIDTH / 2.0;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{BAR_WIDTH}" height="{:.1}" fill="{color}"><title>{}: {}</title></rect>"#,
            bar.x,
            bar.y,
            bar.height,
            bar.label,
            format_thousands(bar.value)
        ));
        svg.push_str(&format!(
            r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
            bar.y - 6.0,
            escape_html(&format_thousands(bar.value))
        ));
        svg.push_str(&format!(
            r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle" font-size="13">{}</text>"#,
            baseline + 20.0,
            bar.label
        ));
    }

    svg.push_str("</svg>");
    svg
}
