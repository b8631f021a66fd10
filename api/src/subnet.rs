use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use netkit_common::error::SubnetError;
use netkit_common::network::subnet::SubnetSummary;
use netkit_core::subnet;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ApiError;
use crate::params::QueryPairs;

pub fn router() -> Router {
    Router::new()
        .route("/calculate", get(calculate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn calculate(
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<SubnetSummary>, ApiError> {
    info!("Received /calculate request");

    let query = QueryPairs::from(query);
    let (Some(ip), Some(raw_prefix)) = (query.first("ip"), query.first("subnet")) else {
        return Err(SubnetError::MissingParameter.into());
    };

    let prefix_len = subnet::parse_prefix(&raw_prefix)?;
    Ok(Json(subnet::compute_subnet(&ip, prefix_len)?))
}
