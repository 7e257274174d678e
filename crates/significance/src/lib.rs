use abtest_core::{AbTestError, AbTestResult, ConfidenceInterval, ExperimentInputs, SignificanceReport};

/// Standard normal CDF.
fn normal_cdf(x: f64) -> f64 {
    use statrs::distribution::{ContinuousCDF, Normal};
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal quantile (PPF).
fn inverse_normal_cdf(p: f64) -> f64 {
    use statrs::distribution::{ContinuousCDF, Normal};
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.inverse_cdf(p)
}

/// Run the pooled two-proportion z-test for a CTR experiment.
///
/// The null hypothesis is "no difference in click-through rate". The pooled
/// proportion from the simulated click counts provides the standard error
/// under H0; the z-statistic standardizes the difference of the *observed*
/// rates against that error. The returned report carries both verdicts:
/// statistical (p < alpha) and practical (CI lower bound above the MDE).
pub fn run_significance_test(inputs: &ExperimentInputs) -> AbTestResult<SignificanceReport> {
    inputs.validate()?;

    let n = inputs.sample_size as f64;
    let clicks_control = inputs.clicks_control();
    let clicks_experimental = inputs.clicks_experimental();

    let pooled = (clicks_control + clicks_experimental) as f64 / (2.0 * n);
    let standard_error = (pooled * (1.0 - pooled) * (2.0 / n)).sqrt();

    if standard_error == 0.0 {
        return Err(AbTestError::DegenerateExperiment(format!(
            "pooled proportion {pooled} leaves zero standard error, the z-test is undefined"
        )));
    }

    let diff = inputs.experimental_rate - inputs.control_rate;
    let z_statistic = diff / standard_error;
    let p_value = 2.0 * (1.0 - normal_cdf(z_statistic.abs()));

    let z_critical = inverse_normal_cdf(1.0 - inputs.alpha / 2.0);
    let confidence_interval = ConfidenceInterval {
        lower: diff - z_critical * standard_error,
        upper: diff + z_critical * standard_error,
        level_percent: 100.0 * (1.0 - inputs.alpha),
    };

    let statistically_significant = p_value < inputs.alpha;
    let practically_significant = confidence_interval.lower > inputs.mde;

    tracing::debug!(
        z = z_statistic,
        p = p_value,
        stat_sig = statistically_significant,
        practical_sig = practically_significant,
        "significance test complete"
    );

    Ok(SignificanceReport {
        clicks_control,
        clicks_experimental,
        pooled_proportion: pooled,
        standard_error,
        z_statistic,
        p_value,
        z_critical,
        rate_difference: diff,
        confidence_interval,
        statistically_significant,
        practically_significant,
        mde: inputs.mde,
    })
}
