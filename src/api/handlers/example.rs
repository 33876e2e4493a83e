/*
 * Responsibility
 * - GET /api/example
 * - request (query/header/body) は一切読まない
 */
use axum::Json;

use crate::api::dto::example::ExampleResponse;

pub async fn index() -> Json<ExampleResponse> {
    tracing::debug!("serving example payload");
    Json(ExampleResponse::new())
}
