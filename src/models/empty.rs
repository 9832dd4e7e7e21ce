use serde::Serialize;

/// Render context for templates that take no data.
#[derive(Debug, Serialize)]
pub struct Empty {}
