// ============================================================================
// MAPS - Abstracción del widget de mapa
// ============================================================================

pub mod traits;
pub mod web;

pub use traits::{MapError, MapRenderer};
pub use web::LeafletMap;

use crate::viewmodels::shipment_map_viewmodel::MapView;

/// Volcar una vista derivada al renderizador: limpiar capas, centrar,
/// marcadores y polyline (en ese orden)
pub fn apply_map_view(
    renderer: &mut dyn MapRenderer,
    view: &MapView,
    zoom: f64,
) -> Result<(), MapError> {
    renderer.clear_layers()?;
    renderer.set_view(view.map_center, zoom)?;
    for marker in &view.markers {
        renderer.add_marker(marker)?;
    }
    if let Some(points) = &view.polyline {
        renderer.draw_polyline(points)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodels::shipment_map_viewmodel::MapMarker;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<String>,
    }

    impl MapRenderer for RecordingRenderer {
        fn set_view(&mut self, center: (f64, f64), zoom: f64) -> Result<(), MapError> {
            self.calls.push(format!("view {:?} z{}", center, zoom));
            Ok(())
        }

        fn add_marker(&mut self, marker: &MapMarker) -> Result<(), MapError> {
            self.calls.push(format!("marker {}", marker.label));
            Ok(())
        }

        fn draw_polyline(&mut self, points: &[(f64, f64)]) -> Result<(), MapError> {
            self.calls.push(format!("polyline {} pts", points.len()));
            Ok(())
        }

        fn clear_layers(&mut self) -> Result<(), MapError> {
            self.calls.push("clear".to_string());
            Ok(())
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_apply_map_view_order() {
        let view = MapView {
            formatted_eta: "N/A".to_string(),
            valid_route: Vec::new(),
            map_center: (1.0, 2.0),
            markers: vec![MapMarker {
                latitude: 1.0,
                longitude: 2.0,
                label: "A".to_string(),
            }],
            polyline: Some(vec![(1.0, 2.0), (3.0, 4.0)]),
        };

        let mut renderer = RecordingRenderer::default();
        apply_map_view(&mut renderer, &view, 15.0).unwrap();
        assert_eq!(
            renderer.calls,
            vec!["clear", "view (1.0, 2.0) z15", "marker A", "polyline 2 pts"]
        );
    }

    #[test]
    fn test_apply_map_view_skips_absent_polyline() {
        let view = MapView {
            formatted_eta: "N/A".to_string(),
            valid_route: Vec::new(),
            map_center: (51.505, -0.09),
            markers: Vec::new(),
            polyline: None,
        };

        let mut renderer = RecordingRenderer::default();
        apply_map_view(&mut renderer, &view, 15.0).unwrap();
        assert_eq!(renderer.calls, vec!["clear", "view (51.505, -0.09) z15"]);
    }
}
