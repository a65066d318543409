use compute::Statistics;
use foundation::Color;

/// Opacity bounds for the migration choropleth. A country at the domain
/// minimum renders at 0.3, at the maximum at 0.7.
pub const MIN_FILL_OPACITY: f32 = 0.3;
pub const MAX_FILL_OPACITY: f32 = 0.7;

/// The single choropleth hue (#2563eb); only its opacity varies.
pub const CHOROPLETH_HUE: Color = Color::rgb(0.145, 0.388, 0.922);

/// Fill for countries with no migration value (#f1f5f9). Never part of
/// the interpolation.
pub const NEUTRAL_FILL: Color = Color::rgb(0.945, 0.961, 0.976);

/// Country border strokes (#cbd5e1), and the selection accent (#2563eb).
pub const BORDER_STROKE: Color = Color::rgb(0.796, 0.835, 0.882);
pub const SELECTION_STROKE: Color = Color::rgb(0.145, 0.388, 0.922);
pub const BORDER_STROKE_WIDTH: f32 = 0.5;
pub const SELECTION_STROKE_WIDTH: f32 = 2.0;

/// Chart series palette, primary selection first.
pub const SERIES_COLORS: [Color; 6] = [
    Color::rgb(0.145, 0.388, 0.922), // blue
    Color::rgb(0.863, 0.149, 0.149), // red
    Color::rgb(0.086, 0.639, 0.290), // green
    Color::rgb(0.792, 0.541, 0.016), // yellow
    Color::rgb(0.576, 0.200, 0.918), // purple
    Color::rgb(0.761, 0.255, 0.047), // orange
];

pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Fill for one country's migration value.
///
/// - `value <= 0`: [`NEUTRAL_FILL`], regardless of domain;
/// - non-degenerate domain: opacity interpolates linearly between the
///   bounds;
/// - degenerate domain (`max == min`, or no positive values at all):
///   every positive value gets [`MAX_FILL_OPACITY`] instead of dividing
///   by zero.
pub fn choropleth_fill(value: f64, domain: Option<(f64, f64)>) -> Color {
    if value <= 0.0 {
        return NEUTRAL_FILL;
    }
    let opacity = match domain.and_then(|(lo, hi)| Statistics::unit_position(value, lo, hi)) {
        Some(t) => MIN_FILL_OPACITY + t as f32 * (MAX_FILL_OPACITY - MIN_FILL_OPACITY),
        None => MAX_FILL_OPACITY,
    };
    CHOROPLETH_HUE.with_alpha(opacity)
}

#[cfg(test)]
mod tests {
    use super::{
        CHOROPLETH_HUE, MAX_FILL_OPACITY, MIN_FILL_OPACITY, NEUTRAL_FILL, choropleth_fill,
        series_color,
    };

    #[test]
    fn interpolates_between_documented_bounds() {
        let domain = Some((10.0, 110.0));
        assert_eq!(choropleth_fill(10.0, domain).a, MIN_FILL_OPACITY);
        assert_eq!(choropleth_fill(110.0, domain).a, MAX_FILL_OPACITY);
        let mid = choropleth_fill(60.0, domain).a;
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_and_missing_get_neutral_fill() {
        assert_eq!(choropleth_fill(0.0, Some((10.0, 110.0))), NEUTRAL_FILL);
        assert_eq!(choropleth_fill(-5.0, None), NEUTRAL_FILL);
        assert_eq!(choropleth_fill(0.0, None), NEUTRAL_FILL);
    }

    #[test]
    fn degenerate_domain_uses_maximum_bound() {
        // max == min
        let c = choropleth_fill(7.0, Some((7.0, 7.0)));
        assert_eq!(c.a, MAX_FILL_OPACITY);
        assert_eq!((c.r, c.g, c.b), (CHOROPLETH_HUE.r, CHOROPLETH_HUE.g, CHOROPLETH_HUE.b));
        // no positive values anywhere
        assert_eq!(choropleth_fill(7.0, None).a, MAX_FILL_OPACITY);
    }

    #[test]
    fn series_palette_wraps() {
        assert_eq!(series_color(0), series_color(6));
        assert_ne!(series_color(0), series_color(1));
    }
}
