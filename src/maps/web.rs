// ============================================================================
// WEB MAP - Renderizador Leaflet via FFI
// ============================================================================

use super::{MapError, MapRenderer};
use crate::config::MapConfig;
use crate::utils::leaflet_ffi::*;
use crate::viewmodels::shipment_map_viewmodel::MapMarker;

/// Renderizador de mapas para web usando Leaflet
pub struct LeafletMap {
    is_ready: bool,
}

impl LeafletMap {
    pub fn new() -> Self {
        Self { is_ready: false }
    }

    /// Inicializar Leaflet sobre el contenedor dado
    pub fn initialize(&mut self, container_id: &str, center: (f64, f64), config: &MapConfig) {
        log::info!(
            "🗺️ Inicializando Leaflet en #{} centrado en ({}, {})",
            container_id,
            center.0,
            center.1
        );
        init_leaflet(container_id, center.0, center.1, config.default_zoom);
        self.is_ready = true;
    }
}

impl MapRenderer for LeafletMap {
    fn set_view(&mut self, center: (f64, f64), zoom: f64) -> Result<(), MapError> {
        if !self.is_ready {
            return Err(MapError::NotReady);
        }
        set_map_view(center.0, center.1, zoom);
        Ok(())
    }

    fn add_marker(&mut self, marker: &MapMarker) -> Result<(), MapError> {
        if !self.is_ready {
            return Err(MapError::NotReady);
        }
        add_map_marker(marker.latitude, marker.longitude, &marker.label);
        Ok(())
    }

    fn draw_polyline(&mut self, points: &[(f64, f64)]) -> Result<(), MapError> {
        if !self.is_ready {
            return Err(MapError::NotReady);
        }
        let json =
            serde_json::to_string(points).map_err(|e| MapError::Serialization(e.to_string()))?;
        draw_route_polyline(&json);
        Ok(())
    }

    fn clear_layers(&mut self) -> Result<(), MapError> {
        if !self.is_ready {
            return Err(MapError::NotReady);
        }
        clear_map_layers();
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.is_ready
    }
}

impl Default for LeafletMap {
    fn default() -> Self {
        Self::new()
    }
}
