// ============================================================================
// LOCATION UPDATE VIEWMODEL - Workflow de actualización de ubicación/ETA
// ============================================================================
// Máquina de estados {Viewing, Editing}. Al abrir el editor el draft
// arranca VACÍO (reset deliberado, no un formulario pre-rellenado).
// ============================================================================

use crate::models::LocationPoint;
use crate::services::ApiClient;
use crate::state::DetailState;
use crate::viewmodels::{ShipmentMapViewModel, SubmitError};

/// Estado del editor de ubicación
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EditorState {
    #[default]
    Viewing,
    Editing,
}

/// Draft del editor — los cuatro campos arrancan vacíos
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LocationDraft {
    pub latitude: String,
    pub longitude: String,
    pub location: String,
    pub current_eta: String,
}

/// Campo del draft (para set_field desde los inputs)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DraftField {
    Latitude,
    Longitude,
    Location,
    CurrentEta,
}

/// ViewModel del workflow de actualización
pub struct LocationUpdateViewModel {
    api_client: ApiClient,
}

impl LocationUpdateViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Abrir el editor con draft vacío
    pub fn open_editor(state: &DetailState) {
        state.set_draft(LocationDraft::default());
        state.set_editor_error(None);
        state.set_editor(EditorState::Editing);
    }

    /// Cerrar el editor descartando el draft
    pub fn close_editor(state: &DetailState) {
        state.set_editor(EditorState::Viewing);
        state.set_draft(LocationDraft::default());
        state.set_editor_error(None);
    }

    /// Actualizar un solo campo del draft sin tocar los demás
    pub fn set_field(state: &DetailState, field: DraftField, value: &str) {
        state.update_draft(|draft| {
            let slot = match field {
                DraftField::Latitude => &mut draft.latitude,
                DraftField::Longitude => &mut draft.longitude,
                DraftField::Location => &mut draft.location,
                DraftField::CurrentEta => &mut draft.current_eta,
            };
            *slot = value.to_string();
        });
    }

    /// Validación local: los cuatro campos no-vacíos tras trim
    pub fn validate(draft: &LocationDraft) -> Result<(), String> {
        let required = [
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

    /// Enviar la actualización. Validación fallida → error local sin red.
    /// Éxito → recargar el detalle y volver a Viewing.
    /// Fallo de transporte → sigue Editing con el draft intacto.
    pub async fn submit(&self, state: &DetailState) -> Result<(), SubmitError> {
        let Some(shipment_id) = state.shipment_id() else {
            let msg = "No shipment loaded".to_string();
            state.set_editor_error(Some(msg.clone()));
            return Err(SubmitError::Validation(msg));
        };

        let draft = state.get_draft();
        if let Err(msg) = Self::validate(&draft) {
            log::warn!("⚠️ Editor incompleto: {}", msg);
            state.set_editor_error(Some(msg.clone()));
            return Err(SubmitError::Validation(msg));
        }

        let current_location = LocationPoint::new(
            draft.latitude.trim(),
            draft.longitude.trim(),
            Some(draft.location.trim()),
        );

        match self
            .api_client
            .update_location(&shipment_id, &current_location, draft.current_eta.trim())
            .await
        {
            Ok(_updated) => {
                log::info!("✅ Ubicación de {} actualizada", shipment_id);
                ShipmentMapViewModel::new().load(state, &shipment_id).await;
                Self::close_editor(state);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error actualizando ubicación: {}", e);
                state.set_editor_error(Some(e.to_string()));
                Err(SubmitError::Api(e))
            }
        }
    }
}

impl Default for LocationUpdateViewModel {
    fn default() -> Self {
        Self::new()
    }
}
