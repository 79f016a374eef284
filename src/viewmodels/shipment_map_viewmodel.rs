// ============================================================================
// SHIPMENT MAP VIEWMODEL - Detalle de un shipment + derivación del mapa
// ============================================================================
// SOLO lógica de preparación de datos: a partir del shipment crudo deriva
// centro, marcadores y polyline. Se recalcula cada vez que cambian los datos.
// ============================================================================

use crate::config::MapConfig;
use crate::models::{shipment::parse_eta, LocationPoint, Shipment};
use crate::services::ApiClient;
use crate::state::DetailState;

/// Marcador listo para el mapa (coordenadas ya parseadas)
#[derive(Clone, PartialEq, Debug)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// Todo lo que el widget de mapa necesita para pintar un shipment
#[derive(Clone, PartialEq, Debug)]
pub struct MapView {
    pub formatted_eta: String,
    pub valid_route: Vec<LocationPoint>,
    pub map_center: (f64, f64),
    pub markers: Vec<MapMarker>,
    /// Solo Some con valid_route no-vacía; pares en orden de ruta
    pub polyline: Option<Vec<(f64, f64)>>,
}

/// ViewModel del detalle
pub struct ShipmentMapViewModel {
    api_client: ApiClient,
}

impl ShipmentMapViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Cargar un shipment por ID. Respuestas obsoletas se descartan; en
    /// fallo el detalle previo se conserva y el error queda en el estado.
    pub async fn load(&self, state: &DetailState, shipment_id: &str) {
        let seq = state.next_request_seq();
        state.set_loading(true);

        match self.api_client.get_shipment(shipment_id).await {
            Ok(shipment) => {
                if !state.is_latest_request(seq) {
                    log::debug!("⏭️ Respuesta de detalle #{} obsoleta, descartada", seq);
                    return;
                }
                state.set_shipment(Some(shipment));
                state.set_error(None);
            }
            Err(e) => {
                if !state.is_latest_request(seq) {
                    return;
                }
                log::error!("❌ Error cargando detalle de {}: {}", shipment_id, e);
                state.set_error(Some(e.to_string()));
            }
        }

        state.set_loading(false);
    }

    /// Derivar la vista de mapa a partir del shipment crudo
    pub fn derive(shipment: &Shipment, config: &MapConfig) -> MapView {
        let valid_route = valid_route(&shipment.route);

        let current_coords = shipment
            .current_location
            .as_ref()
            .and_then(|l| l.parsed_coordinates());

        let map_center = current_coords.unwrap_or_else(|| config.fallback_center());

        let mut markers = Vec::with_capacity(valid_route.len() + 1);
        if let (Some((lat, lng)), Some(location)) = (current_coords, &shipment.current_location) {
            markers.push(MapMarker {
                latitude: lat,
                longitude: lng,
                label: format!(
                    "Current Location: {}, {}",
                    location.latitude, location.longitude
                ),
            });
        }
        for (index, point) in valid_route.iter().enumerate() {
            // valid_route solo contiene puntos mapeables
            if let Some((lat, lng)) = point.parsed_coordinates() {
                markers.push(MapMarker {
                    latitude: lat,
                    longitude: lng,
                    label: point
                        .label()
                        .map(|l| l.to_string())
                        .unwrap_or_else(|| format!("Key Location {}", index + 1)),
                });
            }
        }

        let polyline = if valid_route.is_empty() {
            None
        } else {
            Some(
                valid_route
                    .iter()
                    .filter_map(|p| p.parsed_coordinates())
                    .collect(),
            )
        };

        MapView {
            formatted_eta: format_eta(shipment.current_eta.as_deref()),
            valid_route,
            map_center,
            markers,
            polyline,
        }
    }
}

impl Default for ShipmentMapViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Subsecuencia de la ruta con ambas coordenadas presentes y parseables.
/// Los puntos que no pasan el chequeo se descartan en silencio.
pub fn valid_route(route: &[LocationPoint]) -> Vec<LocationPoint> {
    route.iter().filter(|p| p.is_mappable()).cloned().collect()
}

/// ETA formateada para display: "N/A" si falta, fecha local si parsea,
/// el string crudo si viene en un formato inesperado
pub fn format_eta(eta: Option<&str>) -> String {
    match eta.map(str::trim) {
        None | Some("") => "N/A".to_string(),
        Some(raw) => match parse_eta(raw) {
            Some(date) => date.format("%d/%m/%Y").to_string(),
            None => raw.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShipmentStatus;

    fn shipment_with(
        current: Option<LocationPoint>,
        eta: Option<&str>,
        route: Vec<LocationPoint>,
    ) -> Shipment {
        Shipment {
            shipment_id: "S1".to_string(),
            container_id: "C1".to_string(),
            current_location: current,
            current_eta: eta.map(|e| e.to_string()),
            status: ShipmentStatus::InTransit,
            route,
        }
    }

    #[test]
    fn test_valid_route_drops_incomplete_points() {
        let route = vec![
            LocationPoint::new("1", "2", None),
            LocationPoint::new("", "3", None),
            LocationPoint::new("4", "5", None),
        ];
        let valid = valid_route(&route);
        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].latitude, "1");
        assert_eq!(valid[1].latitude, "4");
    }

    #[test]
    fn test_polyline_follows_route_order() {
        let shipment = shipment_with(
            None,
            None,
            vec![
                LocationPoint::new("1", "2", None),
                LocationPoint::new("", "3", None),
                LocationPoint::new("4", "5", None),
            ],
        );
        let view = ShipmentMapViewModel::derive(&shipment, &MapConfig::default());
        assert_eq!(view.polyline, Some(vec![(1.0, 2.0), (4.0, 5.0)]));
    }

    #[test]
    fn test_no_polyline_without_valid_route() {
        let shipment = shipment_with(None, None, vec![LocationPoint::new("", "3", None)]);
        let view = ShipmentMapViewModel::derive(&shipment, &MapConfig::default());
        assert_eq!(view.polyline, None);
        assert!(view.valid_route.is_empty());
    }

    #[test]
    fn test_map_center_falls_back_without_coordinates() {
        let config = MapConfig::default();

        let missing = shipment_with(None, None, Vec::new());
        let view = ShipmentMapViewModel::derive(&missing, &config);
        assert_eq!(view.map_center, (51.505, -0.09));

        let partial = shipment_with(Some(LocationPoint::new("51.9", "", None)), None, Vec::new());
        let view = ShipmentMapViewModel::derive(&partial, &config);
        assert_eq!(view.map_center, (51.505, -0.09));

        let present = shipment_with(
            Some(LocationPoint::new("48.85", "2.35", Some("Paris"))),
            None,
            Vec::new(),
        );
        let view = ShipmentMapViewModel::derive(&present, &config);
        assert_eq!(view.map_center, (48.85, 2.35));
    }

    #[test]
    fn test_current_location_marker_uses_raw_coordinate_pair() {
        let shipment = shipment_with(
            Some(LocationPoint::new("48.85", "2.35", Some("Paris"))),
            None,
            Vec::new(),
        );
        let view = ShipmentMapViewModel::derive(&shipment, &MapConfig::default());
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.markers[0].label, "Current Location: 48.85, 2.35");
    }

    #[test]
    fn test_no_current_marker_without_coordinates() {
        let shipment = shipment_with(Some(LocationPoint::new("48.85", "", None)), None, Vec::new());
        let view = ShipmentMapViewModel::derive(&shipment, &MapConfig::default());
        assert!(view.markers.is_empty());
    }

    #[test]
    fn test_waypoint_labels_synthesized_when_absent() {
        let shipment = shipment_with(
            None,
            None,
            vec![
                LocationPoint::new("1", "2", Some("Origin Port")),
                LocationPoint::new("", "9", Some("Dropped")),
                LocationPoint::new("3", "4", None),
            ],
        );
        let view = ShipmentMapViewModel::derive(&shipment, &MapConfig::default());
        let labels: Vec<&str> = view.markers.iter().map(|m| m.label.as_str()).collect();
        // El índice sintetizado es 1-based sobre valid_route, no sobre route
        assert_eq!(labels, vec!["Origin Port", "Key Location 2"]);
    }

    #[test]
    fn test_format_eta() {
        assert_eq!(format_eta(None), "N/A");
        assert_eq!(format_eta(Some("")), "N/A");
        assert_eq!(format_eta(Some("  ")), "N/A");
        assert_eq!(format_eta(Some("2026-09-01")), "01/09/2026");
        assert_eq!(format_eta(Some("2026-09-01T12:30:00.000Z")), "01/09/2026");
        assert_eq!(format_eta(Some("next week")), "next week");
    }

    #[test]
    fn test_zero_coordinates_produce_marker_and_center() {
        let shipment = shipment_with(Some(LocationPoint::new("0", "0", None)), None, Vec::new());
        let view = ShipmentMapViewModel::derive(&shipment, &MapConfig::default());
        assert_eq!(view.map_center, (0.0, 0.0));
        assert_eq!(view.markers.len(), 1);
    }
}
