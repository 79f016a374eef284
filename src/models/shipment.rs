// ============================================================================
// SHIPMENT MODEL - Entidad principal del dashboard
// ============================================================================

use serde::{Deserialize, Serialize};

use super::location::LocationPoint;

/// Estado de un shipment — set cerrado, strings del wire tal cual
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub enum ShipmentStatus {
    #[default]
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delayed,
    Delivered,
    Cancelled,
}

impl ShipmentStatus {
    /// Todos los estados, en el orden del <select> del formulario
    pub const ALL: [ShipmentStatus; 5] = [
        ShipmentStatus::Pending,
        ShipmentStatus::InTransit,
        ShipmentStatus::Delayed,
        ShipmentStatus::Delivered,
        ShipmentStatus::Cancelled,
    ];

    /// Etiqueta del wire — también clave de ordenación de la columna Status
    pub fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::Delayed => "Delayed",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Cancelled => "Cancelled",
        }
    }

    /// Inverso de label() (valor del <select>)
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Shipment tal como lo entrega el backend.
/// `shipment_id` lo aporta el usuario al crear (no lo genera el servidor).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub shipment_id: String,
    pub container_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<LocationPoint>,
    /// Fecha ISO-parseable; se formatea localmente para display
    #[serde(rename = "currentETA", default, skip_serializing_if = "Option::is_none")]
    pub current_eta: Option<String>,
    #[serde(default)]
    pub status: ShipmentStatus,
    /// Waypoints en orden cronológico, el primero es el origen
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub route: Vec<LocationPoint>,
}

impl Shipment {
    /// Clave de ordenación de la columna Current Location
    pub fn location_sort_key(&self) -> String {
        self.current_location
            .as_ref()
            .map(|l| l.display_string())
            .unwrap_or_default()
    }

    /// ETA parseada de forma perezosa (para ordenación cronológica)
    pub fn parsed_eta(&self) -> Option<chrono::NaiveDate> {
        parse_eta(self.current_eta.as_deref()?)
    }
}

/// Parsear una fecha ETA del wire: fecha ISO a secas o timestamp RFC 3339
pub fn parse_eta(raw: &str) -> Option<chrono::NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ShipmentStatus::InTransit).unwrap(),
            "\"In Transit\""
        );
        assert_eq!(
            serde_json::from_str::<ShipmentStatus>("\"Delayed\"").unwrap(),
            ShipmentStatus::Delayed
        );
        for status in ShipmentStatus::ALL {
            assert_eq!(ShipmentStatus::from_label(status.label()), Some(status));
        }
    }

    #[test]
    fn test_deserialize_without_route_or_location() {
        let json = r#"{"shipmentId":"S1","containerId":"C1","status":"Pending"}"#;
        let shipment: Shipment = serde_json::from_str(json).unwrap();
        assert_eq!(shipment.shipment_id, "S1");
        assert!(shipment.route.is_empty());
        assert!(shipment.current_location.is_none());
        assert!(shipment.current_eta.is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let shipment = Shipment {
            shipment_id: "S1".to_string(),
            container_id: "C1".to_string(),
            current_location: Some(LocationPoint::new("1", "2", Some("A"))),
            current_eta: Some("2026-09-01".to_string()),
            status: ShipmentStatus::InTransit,
            route: Vec::new(),
        };
        let json = serde_json::to_string(&shipment).unwrap();
        assert!(json.contains("\"shipmentId\":\"S1\""));
        assert!(json.contains("\"containerId\":\"C1\""));
        assert!(json.contains("\"currentETA\":\"2026-09-01\""));
        assert!(json.contains("\"currentLocation\""));
        assert!(json.contains("\"In Transit\""));
        // route vacía no viaja en el POST de creación
        assert!(!json.contains("\"route\""));
    }

    #[test]
    fn test_parse_eta_formats() {
        assert_eq!(
            parse_eta("2026-09-01"),
            chrono::NaiveDate::from_ymd_opt(2026, 9, 1)
        );
        assert_eq!(
            parse_eta("2026-09-01T00:00:00.000Z"),
            chrono::NaiveDate::from_ymd_opt(2026, 9, 1)
        );
        assert_eq!(parse_eta("mañana"), None);
        assert_eq!(parse_eta(""), None);
    }
}
