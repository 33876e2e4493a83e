/*
 * Responsibility
 * - Module tree shared by the binary and the integration tests
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
