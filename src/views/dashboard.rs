// ============================================================================
// DASHBOARD VIEW - Tabla de shipments con filtro y ordenación
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    append_child, event_input_value, on_click, on_input, set_inner_html, ElementBuilder,
};
use crate::state::{AppState, Route};
use crate::viewmodels::dashboard_viewmodel::SortField;
use crate::viewmodels::shipment_form_viewmodel::FormState;
use crate::viewmodels::shipment_map_viewmodel::format_eta;
use crate::viewmodels::{DashboardViewModel, ShipmentFormViewModel, ShipmentMapViewModel};

/// Renderizar el dashboard completo
pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("dashboard").build();

    let title = ElementBuilder::new("h2")?
        .class("dashboard-title")
        .text("Shipment Dashboard")
        .build();
    append_child(&container, &title)?;

    // Toolbar: filtro + botón de alta
    let toolbar = ElementBuilder::new("div")?.class("dashboard-toolbar").build();

    let filter_input = ElementBuilder::new("input")?
        .id("shipment-filter")?
        .attr("type", "text")?
        .attr("placeholder", "Filter by Shipment ID...")?
        .attr("value", &state.dashboard.get_filter_text())?
        .build();
    append_child(&toolbar, &filter_input)?;

    let add_btn = ElementBuilder::new("button")?
        .class("btn-add-shipment")
        .text("Add Shipment")
        .build();
    {
        let state_clone = state.clone();
        on_click(&add_btn, move |_| {
            ShipmentFormViewModel::open_form(&state_clone.dashboard);
            crate::rerender_app();
        })?;
    }
    append_child(&toolbar, &add_btn)?;
    append_child(&container, &toolbar)?;

    // Error de carga (la lista previa sigue visible)
    if let Some(error) = state.dashboard.get_error() {
        let banner = ElementBuilder::new("div")?
            .class("error-banner")
            .text(&format!("Error fetching shipments: {}", error))
            .build();
        append_child(&container, &banner)?;
    }

    if state.dashboard.get_loading() {
        let loading = ElementBuilder::new("p")?
            .class("loading-indicator")
            .text("Loading...")
            .build();
        append_child(&container, &loading)?;
    }

    // Tabla
    let table = ElementBuilder::new("table")?.class("shipment-table").build();
    let thead = ElementBuilder::new("thead")?.build();
    let header_row = ElementBuilder::new("tr")?.build();

    let tbody = ElementBuilder::new("tbody")?.id("shipment-rows")?.build();

    let columns: [(&str, SortField); 5] = [
        ("Shipment ID", SortField::ShipmentId),
        ("Container ID", SortField::ContainerId),
        ("Current Location", SortField::CurrentLocation),
        ("ETA", SortField::CurrentEta),
        ("Status", SortField::Status),
    ];

    for (label, field) in columns {
        let th = ElementBuilder::new("th")?
            .class("sortable-header")
            .text(label)
            .build();
        {
            let state_clone = state.clone();
            let tbody_clone = tbody.clone();
            on_click(&th, move |_| {
                DashboardViewModel::toggle_sort(&state_clone.dashboard, field);
                let _ = render_rows(&tbody_clone, &state_clone);
            })?;
        }
        append_child(&header_row, &th)?;
    }

    append_child(&thead, &header_row)?;
    append_child(&table, &thead)?;
    append_child(&table, &tbody)?;

    render_rows(&tbody, state)?;

    // El filtro re-renderiza solo las filas (el input conserva el foco)
    {
        let state_clone = state.clone();
        let tbody_clone = tbody.clone();
        on_input(&filter_input, move |e| {
            if let Some(value) = event_input_value(&e) {
                DashboardViewModel::set_filter(&state_clone.dashboard, &value);
                let _ = render_rows(&tbody_clone, &state_clone);
            }
        })?;
    }

    append_child(&container, &table)?;

    // Modal de creación
    if state.dashboard.get_form() == FormState::Open {
        let modal = crate::views::render_shipment_form(state)?;
        append_child(&container, &modal)?;
    }

    Ok(container)
}

/// Renderizar solo las filas de la tabla (vista derivada)
fn render_rows(tbody: &Element, state: &AppState) -> Result<(), JsValue> {
    set_inner_html(tbody, "");

    for shipment in DashboardViewModel::derived_view(&state.dashboard) {
        let row = ElementBuilder::new("tr")?.class("shipment-row").build();

        let location_text = shipment
            .current_location
            .as_ref()
            .map(|l| l.display_string())
            .unwrap_or_default();

        let cells = [
            shipment.shipment_id.clone(),
            shipment.container_id.clone(),
            location_text,
            format_eta(shipment.current_eta.as_deref()),
            shipment.status.label().to_string(),
        ];
        for cell_text in cells {
            let td = ElementBuilder::new("td")?.text(&cell_text).build();
            append_child(&row, &td)?;
        }

        // Click en la fila → vista de mapa del shipment
        {
            let state_clone = state.clone();
            let shipment_id = shipment.shipment_id.clone();
            on_click(&row, move |_| {
                // Instancia fresca del detalle, como al montar la vista
                state_clone.detail.set_shipment(None);
                state_clone.detail.set_error(None);
                crate::viewmodels::LocationUpdateViewModel::close_editor(&state_clone.detail);
                state_clone.navigate(Route::ShipmentMap(shipment_id.clone()));

                let detail = state_clone.detail.clone();
                let id = shipment_id.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    ShipmentMapViewModel::new().load(&detail, &id).await;
                    crate::rerender_app();
                });
            })?;
        }

        append_child(tbody, &row)?;
    }

    Ok(())
}
