/*
 * Responsibility
 * - /api の URL 構造を定義
 * - 呼び出し側 (app.rs) で "/api" に nest される
 */
use axum::{Router, routing::get};

use crate::api::handlers::example::index;

pub fn routes() -> Router {
    Router::new().route("/example", get(index))
}
