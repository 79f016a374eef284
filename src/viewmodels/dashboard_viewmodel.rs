// ============================================================================
// DASHBOARD VIEWMODEL - Colección de shipments (load, filtro, ordenación)
// ============================================================================
// Filtro y ordenación son proyecciones puras e independientes sobre la
// lista maestra: la vista se recalcula como sort(filter(master)) y ninguna
// de las dos muta la lista.
// ============================================================================

use std::cmp::Ordering;

use crate::models::Shipment;
use crate::services::ApiClient;
use crate::state::DashboardState;

/// Columna de ordenación del dashboard
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortField {
    ShipmentId,
    ContainerId,
    CurrentLocation,
    CurrentEta,
    Status,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Preferencia de ordenación activa
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SortPref {
    pub field: SortField,
    pub order: SortOrder,
}

/// ViewModel del dashboard
pub struct DashboardViewModel {
    api_client: ApiClient,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Cargar la lista de shipments. Una respuesta solo se aplica si su
    /// secuencia sigue siendo la última emitida; si falla, la lista previa
    /// queda intacta y el error se refleja en el estado.
    pub async fn load(&self, state: &DashboardState) {
        let seq = state.next_request_seq();
        state.set_loading(true);

        match self.api_client.list_shipments().await {
            Ok(shipments) => {
                if !state.is_latest_request(seq) {
                    log::debug!("⏭️ Respuesta de load #{} obsoleta, descartada", seq);
                    return;
                }
                log::info!("✅ {} shipments cargados", shipments.len());
                state.set_shipments(shipments);
                state.set_error(None);
            }
            Err(e) => {
                if !state.is_latest_request(seq) {
                    return;
                }
                log::error!("❌ Error cargando shipments: {}", e);
                state.set_error(Some(e.to_string()));
            }
        }

        state.set_loading(false);
    }

    /// Fijar el texto de filtro (la vista se recalcula al derivar)
    pub fn set_filter(state: &DashboardState, text: &str) {
        state.set_filter_text(text.to_string());
    }

    /// Click en una cabecera: misma columna invierte el orden, columna
    /// nueva arranca ascendente
    pub fn toggle_sort(state: &DashboardState, field: SortField) {
        let next = match state.get_sort() {
            Some(SortPref {
                field: active,
                order,
            }) if active == field => SortPref {
                field,
                order: match order {
                    SortOrder::Asc => SortOrder::Desc,
                    SortOrder::Desc => SortOrder::Asc,
                },
            },
            _ => SortPref {
                field,
                order: SortOrder::Asc,
            },
        };
        state.set_sort(Some(next));
    }

    /// Vista derivada para la tabla: sort(filter(master))
    pub fn derived_view(state: &DashboardState) -> Vec<Shipment> {
        let shipments = state.shipments.borrow();
        let filter = state.get_filter_text();
        let mut view = filter_shipments(&shipments, &filter);
        if let Some(pref) = state.get_sort() {
            sort_shipments(&mut view, pref);
        }
        view
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Predicado de filtro: shipment_id case-folded contiene el texto
/// case-folded; texto vacío matchea todo
pub fn filter_shipments(shipments: &[Shipment], filter: &str) -> Vec<Shipment> {
    let query = filter.to_lowercase();
    shipments
        .iter()
        .filter(|s| s.shipment_id.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Ordenación estable: claves iguales conservan el orden relativo de la
/// lista maestra
pub fn sort_shipments(shipments: &mut [Shipment], pref: SortPref) {
    shipments.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, pref.field);
        match pref.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_by_field(a: &Shipment, b: &Shipment, field: SortField) -> Ordering {
    match field {
        SortField::ShipmentId => a.shipment_id.cmp(&b.shipment_id),
        SortField::ContainerId => a.container_id.cmp(&b.container_id),
        SortField::CurrentLocation => a.location_sort_key().cmp(&b.location_sort_key()),
        // Cronológica; ETA ausente o no parseable ordena primero
        SortField::CurrentEta => a
            .parsed_eta()
            .cmp(&b.parsed_eta())
            .then_with(|| a.current_eta.cmp(&b.current_eta)),
        SortField::Status => a.status.label().cmp(b.status.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocationPoint, ShipmentStatus};

    fn shipment(id: &str, container: &str, status: ShipmentStatus, eta: Option<&str>) -> Shipment {
        Shipment {
            shipment_id: id.to_string(),
            container_id: container.to_string(),
            current_location: Some(LocationPoint::new("1", "2", Some(container))),
            current_eta: eta.map(|e| e.to_string()),
            status,
            route: Vec::new(),
        }
    }

    fn ids(view: &[Shipment]) -> Vec<&str> {
        view.iter().map(|s| s.shipment_id.as_str()).collect()
    }

    #[test]
    fn test_filter_is_case_folded_contains() {
        let list = vec![
            shipment("S1", "C1", ShipmentStatus::Pending, None),
            shipment("S2", "C2", ShipmentStatus::Pending, None),
            shipment("XS21", "C3", ShipmentStatus::Pending, None),
        ];
        assert_eq!(ids(&filter_shipments(&list, "s2")), vec!["S2", "XS21"]);
        assert_eq!(ids(&filter_shipments(&list, "")), vec!["S1", "S2", "XS21"]);
        assert!(filter_shipments(&list, "zzz").is_empty());
    }

    #[test]
    fn test_filter_scenario_s2() {
        let list = vec![
            shipment("S1", "C1", ShipmentStatus::Pending, None),
            shipment("S2", "C2", ShipmentStatus::Pending, None),
        ];
        let state = DashboardState::new();
        state.set_shipments(list);
        DashboardViewModel::set_filter(&state, "s2");
        assert_eq!(ids(&DashboardViewModel::derived_view(&state)), vec!["S2"]);
    }

    #[test]
    fn test_toggle_sort_same_field_flips_order() {
        let state = DashboardState::new();
        DashboardViewModel::toggle_sort(&state, SortField::Status);
        assert_eq!(
            state.get_sort(),
            Some(SortPref {
                field: SortField::Status,
                order: SortOrder::Asc
            })
        );
        DashboardViewModel::toggle_sort(&state, SortField::Status);
        assert_eq!(
            state.get_sort(),
            Some(SortPref {
                field: SortField::Status,
                order: SortOrder::Desc
            })
        );
        DashboardViewModel::toggle_sort(&state, SortField::Status);
        assert_eq!(
            state.get_sort(),
            Some(SortPref {
                field: SortField::Status,
                order: SortOrder::Asc
            })
        );
    }

    #[test]
    fn test_toggle_sort_new_field_starts_ascending() {
        let state = DashboardState::new();
        DashboardViewModel::toggle_sort(&state, SortField::Status);
        DashboardViewModel::toggle_sort(&state, SortField::Status);
        DashboardViewModel::toggle_sort(&state, SortField::ContainerId);
        assert_eq!(
            state.get_sort(),
            Some(SortPref {
                field: SortField::ContainerId,
                order: SortOrder::Asc
            })
        );
    }

    #[test]
    fn test_sort_by_status_then_filter_keeps_order() {
        let state = DashboardState::new();
        state.set_shipments(vec![
            shipment("S1", "C1", ShipmentStatus::Pending, None),
            shipment("S2", "C2", ShipmentStatus::Cancelled, None),
            shipment("S3", "C3", ShipmentStatus::Delivered, None),
        ]);

        DashboardViewModel::toggle_sort(&state, SortField::Status);
        assert_eq!(
            ids(&DashboardViewModel::derived_view(&state)),
            vec!["S2", "S3", "S1"]
        );

        DashboardViewModel::toggle_sort(&state, SortField::Status);
        assert_eq!(
            ids(&DashboardViewModel::derived_view(&state)),
            vec!["S1", "S3", "S2"]
        );

        // La preferencia persiste para filtros posteriores
        DashboardViewModel::set_filter(&state, "s");
        assert_eq!(
            ids(&DashboardViewModel::derived_view(&state)),
            vec!["S1", "S3", "S2"]
        );
    }

    #[test]
    fn test_sort_by_eta_is_chronological() {
        let mut list = vec![
            shipment("S1", "C1", ShipmentStatus::Pending, Some("2026-12-01")),
            shipment("S2", "C2", ShipmentStatus::Pending, Some("2026-02-05")),
            shipment("S3", "C3", ShipmentStatus::Pending, None),
        ];
        sort_shipments(
            &mut list,
            SortPref {
                field: SortField::CurrentEta,
                order: SortOrder::Asc,
            },
        );
        assert_eq!(ids(&list), vec!["S3", "S2", "S1"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut list = vec![
            shipment("S1", "C9", ShipmentStatus::Pending, None),
            shipment("S2", "C9", ShipmentStatus::Pending, None),
            shipment("S3", "C1", ShipmentStatus::Pending, None),
        ];
        sort_shipments(
            &mut list,
            SortPref {
                field: SortField::ContainerId,
                order: SortOrder::Asc,
            },
        );
        // S1 y S2 empatan en C9 y conservan su orden relativo
        assert_eq!(ids(&list), vec!["S3", "S1", "S2"]);
    }

    #[test]
    fn test_derived_view_does_not_mutate_master() {
        let state = DashboardState::new();
        state.set_shipments(vec![
            shipment("S2", "C2", ShipmentStatus::Pending, None),
            shipment("S1", "C1", ShipmentStatus::Pending, None),
        ]);
        DashboardViewModel::toggle_sort(&state, SortField::ShipmentId);
        let view = DashboardViewModel::derived_view(&state);
        assert_eq!(ids(&view), vec!["S1", "S2"]);
        // La lista maestra conserva el orden de llegada
        assert_eq!(ids(&state.get_shipments()), vec!["S2", "S1"]);
    }

    #[test]
    fn test_stale_request_sequence_is_discarded() {
        let state = DashboardState::new();
        let first = state.next_request_seq();
        let second = state.next_request_seq();
        assert!(!state.is_latest_request(first));
        assert!(state.is_latest_request(second));
    }
}
