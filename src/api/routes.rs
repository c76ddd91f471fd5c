//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{extract::rejection::JsonRejection, routing::post, Extension, Json, Router};

use crate::domain::{GrowthRates, MetricsSnapshot, PredictiveInsights, RequestContext};
use crate::engine;
use crate::error::AppResult;

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/insights", post(predictive_insights))
        .route("/insights/growth-rates", post(growth_rates))
}

// =========================================================================
// POST /insights
// =========================================================================

/// Forecasts and growth trends for a metrics snapshot
async fn predictive_insights(
    context: Option<Extension<RequestContext>>,
    payload: Result<Json<MetricsSnapshot>, JsonRejection>,
) -> AppResult<Json<PredictiveInsights>> {
    let Json(snapshot) = payload?;
    let context = request_context(context);
    let insights = engine::assemble_insights(&snapshot);

    tracing::info!(
        correlation_id = ?context.correlation_id,
        client_ip = ?context.client_ip,
        mode = ?insights.mode,
        predicted_users = insights.predicted_next_month_users,
        predicted_bookings = insights.predicted_next_month_bookings,
        predicted_hostels = insights.predicted_next_month_hostels,
        "Computed predictive insights"
    );

    Ok(Json(insights))
}

// =========================================================================
// POST /insights/growth-rates
// =========================================================================

/// Fractional growth rates only
async fn growth_rates(
    context: Option<Extension<RequestContext>>,
    payload: Result<Json<MetricsSnapshot>, JsonRejection>,
) -> AppResult<Json<GrowthRates>> {
    let Json(snapshot) = payload?;
    let context = request_context(context);
    let rates = engine::estimate_growth_rates(&snapshot);

    tracing::info!(
        correlation_id = ?context.correlation_id,
        client_ip = ?context.client_ip,
        mode = ?rates.mode,
        "Computed growth rates"
    );

    Ok(Json(rates))
}

/// Context set by the middleware, or an empty one when the router runs bare
fn request_context(context: Option<Extension<RequestContext>>) -> RequestContext {
    context.map(|Extension(ctx)| ctx).unwrap_or_default()
}
