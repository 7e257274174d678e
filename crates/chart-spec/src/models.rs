use serde::{Deserialize, Serialize};

/// One bar of the grouped click-count chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountBar {
    /// "Control" or "Experimental".
    pub group: String,
    /// "Click" or "No Click".
    pub label: String,
    pub count: u64,
    /// Share of the group, 0-100.
    pub percent: f64,
    pub color: String,
}

/// Grouped bar chart of simulated click / no-click counts per group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickCountChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<CountBar>,
}

/// A sampled point on the standard normal density curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurvePoint {
    pub z: f64,
    pub density: f64,
}

/// Interval of z values whose area under the curve is shaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadedRegion {
    pub from_z: f64,
    pub to_z: f64,
    pub color: String,
}

/// Dashed vertical reference line on the distribution plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerticalMarker {
    pub z: f64,
    pub label: String,
    pub color: String,
}

/// Standard normal PDF with the two-tailed rejection region shaded and
/// markers at the critical values and the observed z-statistic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub curve: Vec<CurvePoint>,
    pub shaded: Vec<ShadedRegion>,
    pub markers: Vec<VerticalMarker>,
}
