// ============================================================================
// SHIPMENT MAP VIEW - Detalle de un shipment + mapa + editor de ubicación
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::MapConfig;
use crate::dom::{
    append_child, event_input_value, on_click, on_input, ElementBuilder,
};
use crate::maps::{apply_map_view, LeafletMap};
use crate::state::{AppState, Route};
use crate::viewmodels::location_update_viewmodel::{DraftField, EditorState};
use crate::viewmodels::{LocationUpdateViewModel, ShipmentMapViewModel};

/// Renderizar la vista de mapa de un shipment
pub fn render_shipment_map(state: &AppState, shipment_id: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("shipment-map-page").build();

    // Volver al dashboard
    let back_btn = ElementBuilder::new("button")?
        .class("btn-back")
        .text("← Dashboard")
        .build();
    {
        let state_clone = state.clone();
        on_click(&back_btn, move |_| {
            state_clone.navigate(Route::Dashboard);
        })?;
    }
    append_child(&container, &back_btn)?;

    if let Some(error) = state.detail.get_error() {
        let banner = ElementBuilder::new("div")?
            .class("error-banner")
            .text(&format!("Error fetching shipment details: {}", error))
            .build();
        append_child(&container, &banner)?;
    }

    let Some(shipment) = state.detail.get_shipment() else {
        let loading = ElementBuilder::new("p")?
            .class("loading-indicator")
            .text("Loading shipment data...")
            .build();
        append_child(&container, &loading)?;
        return Ok(container);
    };

    let map_config = MapConfig::default();
    let view = ShipmentMapViewModel::derive(&shipment, &map_config);

    let title = ElementBuilder::new("h2")?
        .text(&format!("Shipment Location - {}", shipment_id))
        .build();
    append_child(&container, &title)?;

    // Línea de info: ubicación actual + ETA + botón de edición
    let info = ElementBuilder::new("div")?.class("shipment-info").build();

    let location_text = shipment
        .current_location
        .as_ref()
        .map(|l| l.display_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let location_p = ElementBuilder::new("p")?
        .text(&format!("Current Location: {}", location_text))
        .build();
    append_child(&info, &location_p)?;

    let eta_p = ElementBuilder::new("p")?
        .text(&format!("ETA: {}", view.formatted_eta))
        .build();
    append_child(&info, &eta_p)?;

    let update_btn = ElementBuilder::new("button")?
        .class("btn-update-location")
        .text("Update Location")
        .build();
    {
        let state_clone = state.clone();
        on_click(&update_btn, move |_| {
            LocationUpdateViewModel::open_editor(&state_clone.detail);
            crate::rerender_app();
        })?;
    }
    append_child(&info, &update_btn)?;
    append_child(&container, &info)?;

    // Con el editor abierto el mapa se oculta, no se superpone
    if state.detail.get_editor() == EditorState::Editing {
        let modal = render_update_form(state)?;
        append_child(&container, &modal)?;
        return Ok(container);
    }

    let map_div = ElementBuilder::new("div")?
        .id("map")?
        .class("map-container")
        .build();
    append_child(&container, &map_div)?;

    // Montar Leaflet cuando el contenedor ya está en el DOM.
    // initLeaflet (JS) reemplaza cualquier instancia previa del contenedor.
    {
        let zoom = map_config.default_zoom;
        Timeout::new(100, move || {
            let mut map = LeafletMap::new();
            map.initialize("map", view.map_center, &map_config);
            if let Err(e) = apply_map_view(&mut map, &view, zoom) {
                log::error!("❌ Error pintando el mapa: {}", e);
            }
            // Leaflet necesita recalcular tamaño cuando el contenedor
            // acaba de entrar al DOM
            crate::utils::leaflet_ffi::invalidate_map_size();
        })
        .forget();
    }

    Ok(container)
}

/// Modal de actualización de ubicación/ETA
fn render_update_form(state: &AppState) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    let content = ElementBuilder::new("div")?.class("modal-content").build();

    let title = ElementBuilder::new("h2")?.text("Update Location").build();
    append_child(&content, &title)?;

    if let Some(error) = state.detail.get_editor_error() {
        let banner = ElementBuilder::new("div")?
            .class("error-banner")
            .text(&error)
            .build();
        append_child(&content, &banner)?;
    }

    let draft = state.detail.get_draft();

    let fields: [(&str, &str, &str, &str, DraftField); 4] = [
        ("Latitude", "update-latitude", "text", &draft.latitude, DraftField::Latitude),
        ("Longitude", "update-longitude", "text", &draft.longitude, DraftField::Longitude),
        ("Location Name", "update-location", "text", &draft.location, DraftField::Location),
        ("ETA", "update-eta", "date", &draft.current_eta, DraftField::CurrentEta),
    ];

    for (label, id, input_type, value, field) in fields {
        let label_el = ElementBuilder::new("label")?.attr("for", id)?.text(label).build();
        append_child(&content, &label_el)?;

        let input = ElementBuilder::new("input")?
            .id(id)?
            .attr("type", input_type)?
            .attr("placeholder", label)?
            .attr("value", value)?
            .build();
        {
            let state_clone = state.clone();
            on_input(&input, move |e| {
                if let Some(value) = event_input_value(&e) {
                    LocationUpdateViewModel::set_field(&state_clone.detail, field, &value);
                }
            })?;
        }
        append_child(&content, &input)?;
    }

    let buttons = ElementBuilder::new("div")?.class("modal-buttons").build();

    let cancel_btn = ElementBuilder::new("button")?
        .class("btn-cancel")
        .text("Cancel")
        .build();
    {
        let state_clone = state.clone();
        on_click(&cancel_btn, move |_| {
            LocationUpdateViewModel::close_editor(&state_clone.detail);
            crate::rerender_app();
        })?;
    }
    append_child(&buttons, &cancel_btn)?;

    let submit_btn = ElementBuilder::new("button")?
        .class("btn-submit")
        .text("Update")
        .build();
    {
        let state_clone = state.clone();
        on_click(&submit_btn, move |_| {
            let detail = state_clone.detail.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Éxito recarga el detalle y vuelve a Viewing; fallo deja
                // el editor abierto con el draft intacto
                let _ = LocationUpdateViewModel::new().submit(&detail).await;
                crate::rerender_app();
            });
        })?;
    }
    append_child(&buttons, &submit_btn)?;

    append_child(&content, &buttons)?;
    append_child(&overlay, &content)?;
    Ok(overlay)
}
