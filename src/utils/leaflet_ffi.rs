// ============================================================================
// LEAFLET FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS del shim de Leaflet - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initLeaflet)]
    pub fn init_leaflet(container_id: &str, lat: f64, lng: f64, zoom: f64);

    #[wasm_bindgen(js_name = setMapView)]
    pub fn set_map_view(lat: f64, lng: f64, zoom: f64);

    #[wasm_bindgen(js_name = addMapMarker)]
    pub fn add_map_marker(lat: f64, lng: f64, popup_label: &str);

    #[wasm_bindgen(js_name = drawRoutePolyline)]
    pub fn draw_route_polyline(points_json: &str);

    #[wasm_bindgen(js_name = clearMapLayers)]
    pub fn clear_map_layers();
}

/// Helper: Forzar recálculo de tamaño del mapa (tras cambios de layout)
pub fn invalidate_map_size() {
    if let Some(window) = web_sys::window() {
        let function = js_sys::Function::new_no_args(
            "if (window.invalidateMapSize) window.invalidateMapSize();",
        );
        let _ = function.call0(&window.into());
    }
}
