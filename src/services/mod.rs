// ============================================================================
// SERVICES - SOLO comunicación con el backend
// ============================================================================

pub mod api_client;

pub use api_client::{ApiClient, ApiError};
