// ============================================================================
// SHIPMENT FORM VIEWMODEL - Workflow de creación de shipments
// ============================================================================
// Máquina de estados {Closed, Open} del modal + draft plano del formulario.
// La validación es local: si falta un campo NO se toca la red.
// ============================================================================

use crate::models::{LocationPoint, Shipment, ShipmentStatus};
use crate::services::ApiClient;
use crate::state::DashboardState;
use crate::viewmodels::{DashboardViewModel, SubmitError};

/// Estado del modal de creación
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormState {
    #[default]
    Closed,
    Open,
}

/// Draft del formulario — campos planos, todos String salvo el status
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ShipmentDraft {
    pub shipment_id: String,
    pub container_id: String,
    pub latitude: String,
    pub longitude: String,
    pub location: String,
    pub current_eta: String,
    pub status: ShipmentStatus,
}

impl ShipmentDraft {
    /// Construir el shipment a enviar: currentLocation se arma a partir de
    /// los campos planos del draft
    pub fn to_shipment(&self) -> Shipment {
        Shipment {
            shipment_id: self.shipment_id.trim().to_string(),
            container_id: self.container_id.trim().to_string(),
            current_location: Some(LocationPoint::new(
                self.latitude.trim(),
                self.longitude.trim(),
                Some(self.location.trim()),
            )),
            current_eta: Some(self.current_eta.trim().to_string()),
            status: self.status,
            route: Vec::new(),
        }
    }
}

/// ViewModel del formulario de creación
pub struct ShipmentFormViewModel {
    api_client: ApiClient,
}

impl ShipmentFormViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Abrir el modal con draft limpio
    pub fn open_form(state: &DashboardState) {
        state.set_draft(ShipmentDraft::default());
        state.set_form_error(None);
        state.set_form(FormState::Open);
    }

    /// Cerrar el modal descartando el draft
    pub fn close_form(state: &DashboardState) {
        state.set_form(FormState::Closed);
        state.set_draft(ShipmentDraft::default());
        state.set_form_error(None);
    }

    /// Validación local: los seis campos requeridos no-vacíos tras trim
    /// (el status tiene default y no se valida)
    pub fn validate(draft: &ShipmentDraft) -> Result<(), String> {
        let required = [
            ("Shipment ID", &draft.shipment_id),
            ("Container ID", &draft.container_id),
            ("Latitude", &draft.latitude),
            ("Longitude", &draft.longitude),
            ("Location Name", &draft.location),
            ("ETA", &draft.current_eta),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(format!("Required field missing: {}", name));
            }
        }
        Ok(())
    }

    /// Enviar el draft. Validación fallida → error local sin tocar la red.
    /// Éxito → recargar la colección y cerrar el modal.
    /// Fallo de transporte → modal sigue Open y el draft se conserva.
    pub async fn submit(&self, state: &DashboardState) -> Result<(), SubmitError> {
        let draft = state.get_draft();

        if let Err(msg) = Self::validate(&draft) {
            log::warn!("⚠️ Formulario incompleto: {}", msg);
            state.set_form_error(Some(msg.clone()));
            return Err(SubmitError::Validation(msg));
        }

        let shipment = draft.to_shipment();

        match self.api_client.create_shipment(&shipment).await {
            Ok(created) => {
                log::info!("✅ Shipment creado: {}", created.shipment_id);
                DashboardViewModel::new().load(state).await;
                Self::close_form(state);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error creando shipment: {}", e);
                state.set_form_error(Some(e.to_string()));
                Err(SubmitError::Api(e))
            }
        }
    }
}

impl Default for ShipmentFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ShipmentDraft {
        ShipmentDraft {
            shipment_id: "S1".to_string(),
            container_id: "C1".to_string(),
            latitude: "51.9".to_string(),
            longitude: "4.5".to_string(),
            location: "Rotterdam".to_string(),
            current_eta: "2026-09-01".to_string(),
            status: ShipmentStatus::Pending,
        }
    }

    #[test]
    fn test_complete_draft_passes_validation() {
        assert!(ShipmentFormViewModel::validate(&complete_draft()).is_ok());
    }

    #[test]
    fn test_each_missing_field_fails_validation() {
        let clear: [fn(&mut ShipmentDraft); 6] = [
            |d| d.shipment_id.clear(),
            |d| d.container_id.clear(),
            |d| d.latitude.clear(),
            |d| d.longitude.clear(),
            |d| d.location.clear(),
            |d| d.current_eta.clear(),
        ];
        for clear_field in clear {
            let mut draft = complete_draft();
            clear_field(&mut draft);
            assert!(ShipmentFormViewModel::validate(&draft).is_err());
        }
    }

    #[test]
    fn test_whitespace_only_field_fails_validation() {
        let mut draft = complete_draft();
        draft.shipment_id = "   ".to_string();
        assert!(ShipmentFormViewModel::validate(&draft).is_err());
    }

    #[test]
    fn test_draft_builds_nested_location() {
        let shipment = complete_draft().to_shipment();
        let location = shipment.current_location.unwrap();
        assert_eq!(location.latitude, "51.9");
        assert_eq!(location.longitude, "4.5");
        assert_eq!(location.location.as_deref(), Some("Rotterdam"));
        assert_eq!(shipment.current_eta.as_deref(), Some("2026-09-01"));
        assert!(shipment.route.is_empty());
    }

    #[test]
    fn test_open_form_resets_draft_and_close_discards_it() {
        let state = DashboardState::new();
        state.set_draft(complete_draft());

        ShipmentFormViewModel::open_form(&state);
        assert_eq!(state.get_form(), FormState::Open);
        assert_eq!(state.get_draft(), ShipmentDraft::default());

        state.update_draft(|d| d.shipment_id = "S9".to_string());
        ShipmentFormViewModel::close_form(&state);
        assert_eq!(state.get_form(), FormState::Closed);
        assert_eq!(state.get_draft(), ShipmentDraft::default());
    }
}
