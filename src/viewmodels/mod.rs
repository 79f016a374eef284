// ============================================================================
// VIEWMODELS - Estado derivado + lógica de UI
// ============================================================================

pub mod dashboard_viewmodel;
pub mod location_update_viewmodel;
pub mod shipment_form_viewmodel;
pub mod shipment_map_viewmodel;

pub use dashboard_viewmodel::DashboardViewModel;
pub use location_update_viewmodel::LocationUpdateViewModel;
pub use shipment_form_viewmodel::ShipmentFormViewModel;
pub use shipment_map_viewmodel::ShipmentMapViewModel;

use crate::services::ApiError;

/// Error al enviar un formulario: validación local (nunca llega a la red)
/// o fallo de transporte del repositorio
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    Validation(String),
    Api(ApiError),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Validation(msg) => write!(f, "{}", msg),
            SubmitError::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<ApiError> for SubmitError {
    fn from(err: ApiError) -> Self {
        SubmitError::Api(err)
    }
}
