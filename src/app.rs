// ============================================================================
// APP - Aplicación principal
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::viewmodels::DashboardViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación montada sobre #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Carga inicial de la colección
        {
            let dashboard = state.dashboard.clone();
            wasm_bindgen_futures::spawn_local(async move {
                DashboardViewModel::new().load(&dashboard).await;
                crate::rerender_app();
            });
        }

        // Re-render automático ante cambios de estado, batcheado con un
        // Timeout de 0ms para agrupar múltiples updates del mismo tick
        state.subscribe_to_changes(move || {
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Re-render completo de la vista activa
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)
    }
}
