use abtest_core::{ExperimentInputs, SignificanceReport};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chart_spec::{ClickCountChart, DistributionChart};
use serde::Serialize;

use crate::{ApiResponse, AppError, AppState};

/// Everything the frontend needs to render one analysis.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub report: SignificanceReport,
    pub click_chart: ClickCountChart,
    pub distribution_chart: DistributionChart,
}

pub fn significance_routes() -> Router<AppState> {
    Router::new()
        .route("/api/significance", post(run_analysis))
        .route("/api/significance/defaults", get(get_defaults))
}

/// Run the z-test and build both chart specifications.
async fn run_analysis(
    Json(inputs): Json<ExperimentInputs>,
) -> Result<Json<ApiResponse<AnalysisResponse>>, AppError> {
    let report = significance::run_significance_test(&inputs)?;
    let click_chart = chart_spec::click_count_chart(&inputs, &report);
    let distribution_chart = chart_spec::distribution_chart(&report);

    tracing::info!(
        control = inputs.control_rate,
        experimental = inputs.experimental_rate,
        n = inputs.sample_size,
        z = report.z_statistic,
        p = report.p_value,
        "analysis served"
    );

    Ok(Json(ApiResponse::success(AnalysisResponse {
        report,
        click_chart,
        distribution_chart,
    })))
}

/// Default inputs for pre-filling the form.
async fn get_defaults(State(state): State<AppState>) -> Json<ApiResponse<ExperimentInputs>> {
    Json(ApiResponse::success(state.defaults))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_analysis_returns_report_and_charts() {
        let response = run_analysis(Json(ExperimentInputs::default())).await.unwrap();
        let body = response.0;

        assert!(body.success);
        let analysis = body.data.unwrap();
        assert!(analysis.report.statistically_significant);
        assert!(!analysis.report.practically_significant);
        assert_eq!(analysis.click_chart.bars.len(), 4);
        assert_eq!(analysis.distribution_chart.curve.len(), 1000);
    }

    #[tokio::test]
    async fn run_analysis_rejects_bad_alpha() {
        let inputs = ExperimentInputs {
            alpha: 0.0,
            ..Default::default()
        };
        assert!(run_analysis(Json(inputs)).await.is_err());
    }
}
