// ============================================================================
// SHIPMENT FORM VIEW - Modal de alta de shipment
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, event_input_value, event_select_value, on_change, on_click, on_input,
    ElementBuilder,
};
use crate::models::ShipmentStatus;
use crate::state::AppState;
use crate::viewmodels::shipment_form_viewmodel::ShipmentDraft;
use crate::viewmodels::ShipmentFormViewModel;

/// Renderizar el modal de creación (solo con FormState::Open)
pub fn render_shipment_form(state: &AppState) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    let content = ElementBuilder::new("div")?.class("modal-content").build();

    let title = ElementBuilder::new("h2")?.text("Add Shipment").build();
    append_child(&content, &title)?;

    // Error de validación o de transporte del último submit
    if let Some(error) = state.dashboard.get_form_error() {
        let banner = ElementBuilder::new("div")?
            .class("error-banner")
            .text(&error)
            .build();
        append_child(&content, &banner)?;
    }

    let draft = state.dashboard.get_draft();

    // Cada input actualiza UN campo del draft, sin re-render
    add_field(&content, state, "Shipment ID", "form-shipment-id", "text", &draft.shipment_id, |d, v| d.shipment_id = v)?;
    add_field(&content, state, "Container ID", "form-container-id", "text", &draft.container_id, |d, v| d.container_id = v)?;
    add_field(&content, state, "Latitude", "form-latitude", "text", &draft.latitude, |d, v| d.latitude = v)?;
    add_field(&content, state, "Longitude", "form-longitude", "text", &draft.longitude, |d, v| d.longitude = v)?;
    add_field(&content, state, "Location Name", "form-location", "text", &draft.location, |d, v| d.location = v)?;
    add_field(&content, state, "ETA", "form-eta", "date", &draft.current_eta, |d, v| d.current_eta = v)?;

    // Status: select con los cinco estados del wire
    let status_label = ElementBuilder::new("label")?
        .attr("for", "form-status")?
        .text("Status")
        .build();
    append_child(&content, &status_label)?;

    let select = ElementBuilder::new("select")?.id("form-status")?.build();
    for status in ShipmentStatus::ALL {
        let option = ElementBuilder::new("option")?
            .attr("value", status.label())?
            .text(status.label())
            .build();
        if status == draft.status {
            option.set_attribute("selected", "selected")?;
        }
        append_child(&select, &option)?;
    }
    {
        let state_clone = state.clone();
        on_change(&select, move |e| {
            if let Some(value) = event_select_value(&e) {
                if let Some(status) = ShipmentStatus::from_label(&value) {
                    state_clone.dashboard.update_draft(|d| d.status = status);
                }
            }
        })?;
    }
    append_child(&content, &select)?;

    // Botonera
    let buttons = ElementBuilder::new("div")?.class("modal-buttons").build();

    let cancel_btn = ElementBuilder::new("button")?
        .class("btn-cancel")
        .text("Cancel")
        .build();
    {
        let state_clone = state.clone();
        on_click(&cancel_btn, move |_| {
            ShipmentFormViewModel::close_form(&state_clone.dashboard);
            crate::rerender_app();
        })?;
    }
    append_child(&buttons, &cancel_btn)?;

    let submit_btn = ElementBuilder::new("button")?
        .class("btn-submit")
        .text("Add")
        .build();
    {
        let state_clone = state.clone();
        on_click(&submit_btn, move |_| {
            let dashboard = state_clone.dashboard.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Éxito cierra el modal; fallo lo deja abierto con el draft
                let _ = ShipmentFormViewModel::new().submit(&dashboard).await;
                crate::rerender_app();
            });
        })?;
    }
    append_child(&buttons, &submit_btn)?;

    append_child(&content, &buttons)?;
    append_child(&overlay, &content)?;
    Ok(overlay)
}

/// Label + input de un campo del draft
fn add_field(
    parent: &Element,
    state: &AppState,
    label: &str,
    id: &str,
    input_type: &str,
    value: &str,
    apply: fn(&mut ShipmentDraft, String),
) -> Result<(), JsValue> {
    let label_el = ElementBuilder::new("label")?.attr("for", id)?.text(label).build();
    append_child(parent, &label_el)?;

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
                state_clone.dashboard.update_draft(|d| apply(d, value));
            }
        })?;
    }
    append_child(parent, &input)?;
    Ok(())
}
