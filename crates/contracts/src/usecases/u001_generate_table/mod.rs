pub mod model;
pub mod request;
pub mod response;

pub use model::{DEFAULT_MODEL, MODELS};
pub use request::GenerateRequest;
pub use response::GenerateResponse;

/// Endpoint that produces a synthetic table
pub const GENERATE_PATH: &str = "/api/generate";

/// Inclusive lower bound for the row count accepted by the form
pub const MIN_ROWS: f64 = 5.0;

/// Inclusive upper bound for the row count accepted by the form
pub const MAX_ROWS: f64 = 30.0;
