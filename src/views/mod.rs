// ============================================================================
// VIEWS - Renderizado DOM (sin lógica de negocio)
// ============================================================================

pub mod dashboard;
pub mod shipment_form;
pub mod shipment_map;

pub use dashboard::render_dashboard;
pub use shipment_form::render_shipment_form;
pub use shipment_map::render_shipment_map;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::state::{AppState, Route};

/// Renderizar la vista activa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    match state.get_route() {
        Route::Dashboard => render_dashboard(state),
        Route::ShipmentMap(shipment_id) => render_shipment_map(state, &shipment_id),
    }
}
