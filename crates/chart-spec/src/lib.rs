pub mod models;

pub use models::*;

use abtest_core::{ExperimentInputs, SignificanceReport};

const CLICK_COLOR: &str = "orange";
const NO_CLICK_COLOR: &str = "blue";
const CRITICAL_COLOR: &str = "red";
const Z_STAT_COLOR: &str = "blue";

/// Span of the density plot and how finely it is sampled.
const Z_RANGE: f64 = 4.0;
const CURVE_POINTS: usize = 1000;

/// Build the grouped bar chart of simulated click / no-click counts.
///
/// Bars come in No Click / Click order within each group, each labeled with
/// its share of the group's visitors.
pub fn click_count_chart(inputs: &ExperimentInputs, report: &SignificanceReport) -> ClickCountChart {
    let n = inputs.sample_size;

    let group_bars = |group: &str, clicks: u64| -> [CountBar; 2] {
        let pct = |count: u64| count as f64 / n as f64 * 100.0;
        let no_clicks = n - clicks;
        [
            CountBar {
                group: group.to_string(),
                label: "No Click".to_string(),
                count: no_clicks,
                percent: pct(no_clicks),
                color: NO_CLICK_COLOR.to_string(),
            },
            CountBar {
                group: group.to_string(),
                label: "Click".to_string(),
                count: clicks,
                percent: pct(clicks),
                color: CLICK_COLOR.to_string(),
            },
        ]
    };

    let mut bars = Vec::with_capacity(4);
    bars.extend(group_bars("Control", report.clicks_control));
    bars.extend(group_bars("Experimental", report.clicks_experimental));

    ClickCountChart {
        title: "Clicks/No Clicks for each group".to_string(),
        x_label: "Group".to_string(),
        y_label: "Count".to_string(),
        bars,
    }
}

/// Build the standard normal density plot with the two-tailed critical
/// regions shaded and markers at ±z-critical and the observed z-statistic.
pub fn distribution_chart(report: &SignificanceReport) -> DistributionChart {
    use statrs::distribution::{Continuous, Normal};

    let normal = Normal::new(0.0, 1.0).unwrap();
    let step = 2.0 * Z_RANGE / (CURVE_POINTS - 1) as f64;
    let curve: Vec<CurvePoint> = (0..CURVE_POINTS)
        .map(|i| {
            let z = -Z_RANGE + i as f64 * step;
            CurvePoint {
                z,
                density: normal.pdf(z),
            }
        })
        .collect();

    let z_crit = report.z_critical;
    let shaded = vec![
        ShadedRegion {
            from_z: -Z_RANGE,
            to_z: -z_crit,
            color: CRITICAL_COLOR.to_string(),
        },
        ShadedRegion {
            from_z: z_crit,
            to_z: Z_RANGE,
            color: CRITICAL_COLOR.to_string(),
        },
    ];

    let markers = vec![
        VerticalMarker {
            z: -z_crit,
            label: format!("-Z critical ({:.2})", z_crit),
            color: CRITICAL_COLOR.to_string(),
        },
        VerticalMarker {
            z: z_crit,
            label: format!("Z critical ({:.2})", z_crit),
            color: CRITICAL_COLOR.to_string(),
        },
        VerticalMarker {
            z: report.z_statistic,
            label: format!("Z stat ({:.2})", report.z_statistic),
            color: Z_STAT_COLOR.to_string(),
        },
    ];

    DistributionChart {
        title: "Z-Statistic vs. Standard Normal Distribution".to_string(),
        x_label: "Z-value".to_string(),
        y_label: "Probability Density".to_string(),
        curve,
        shaded,
        markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abtest_core::{ConfidenceInterval, SignificanceReport};

    /// Report matching the default 0.2 vs 0.3 over 10k experiment.
    fn default_report() -> SignificanceReport {
        SignificanceReport {
            clicks_control: 2000,
            clicks_experimental: 3000,
            pooled_proportion: 0.25,
            standard_error: 0.006123724356957945,
            z_statistic: 16.32993161855452,
            p_value: 0.0,
            z_critical: 1.959963984540054,
            rate_difference: 0.1,
            confidence_interval: ConfidenceInterval {
                lower: 0.087997,
                upper: 0.112003,
                level_percent: 95.0,
            },
            statistically_significant: true,
            practically_significant: false,
            mde: 0.1,
        }
    }

    #[test]
    fn bar_chart_counts_and_percentages() {
        let inputs = abtest_core::ExperimentInputs::default();
        let chart = click_count_chart(&inputs, &default_report());

        assert_eq!(chart.bars.len(), 4);

        // No Click precedes Click within each group
        assert_eq!(chart.bars[0].label, "No Click");
        assert_eq!(chart.bars[1].label, "Click");
        assert_eq!(chart.bars[0].group, "Control");
        assert_eq!(chart.bars[2].group, "Experimental");

        assert_eq!(chart.bars[0].count, 8000);
        assert_eq!(chart.bars[1].count, 2000);
        assert_eq!(chart.bars[2].count, 7000);
        assert_eq!(chart.bars[3].count, 3000);

        assert!((chart.bars[1].percent - 20.0).abs() < 1e-9);
        assert!((chart.bars[3].percent - 30.0).abs() < 1e-9);

        assert_eq!(chart.bars[0].color, "blue");
        assert_eq!(chart.bars[1].color, "orange");
    }

    #[test]
    fn distribution_curve_spans_four_sigmas() {
        let chart = distribution_chart(&default_report());

        assert_eq!(chart.curve.len(), 1000);
        assert!((chart.curve[0].z + 4.0).abs() < 1e-12);
        assert!((chart.curve[999].z - 4.0).abs() < 1e-9);

        // Peak density at z = 0 is 1/sqrt(2*pi)
        let peak = chart
            .curve
            .iter()
            .map(|p| p.density)
            .fold(f64::MIN, f64::max);
        assert!((peak - 0.3989422804014327).abs() < 1e-5);
    }

    #[test]
    fn distribution_shading_follows_critical_value() {
        let report = default_report();
        let chart = distribution_chart(&report);

        assert_eq!(chart.shaded.len(), 2);
        assert!((chart.shaded[0].to_z + report.z_critical).abs() < 1e-12);
        assert!((chart.shaded[1].from_z - report.z_critical).abs() < 1e-12);

        // Regions carry an owned color and clone independently
        let region = chart.shaded[0].clone();
        assert_eq!(region.color, "red");
        assert_eq!(chart.shaded[1].color, "red");
    }

    #[test]
    fn distribution_markers_carry_formatted_labels() {
        let chart = distribution_chart(&default_report());

        assert_eq!(chart.markers.len(), 3);
        assert_eq!(chart.markers[0].label, "-Z critical (1.96)");
        assert_eq!(chart.markers[1].label, "Z critical (1.96)");
        assert_eq!(chart.markers[2].label, "Z stat (16.33)");
        assert_eq!(chart.markers[2].color, "blue");
    }
}
