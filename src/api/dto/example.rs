/*
 * Responsibility
 * - GET /api/example の response DTO
 */
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleResponse {
    pub name: &'static str,
    pub state: &'static str,
}

impl ExampleResponse {
    pub const fn new() -> Self {
        Self {
            name: "John",
            state: "TX",
        }
    }
}
