// ============================================================================
// LOCATION MODEL - Puntos geográficos (ubicación actual y waypoints de ruta)
// ============================================================================
// Las coordenadas viajan por el wire como String y se parsean de forma
// perezosa al preparar el mapa
// ============================================================================

use serde::{Deserialize, Serialize};

/// Punto geográfico tal como lo entrega el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LocationPoint {
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    /// Etiqueta legible ("Port of Rotterdam", etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl LocationPoint {
    pub fn new(latitude: &str, longitude: &str, location: Option<&str>) -> Self {
        Self {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            location: location.map(|l| l.to_string()),
        }
    }

    /// Chequeo EXPLÍCITO de presencia: ambas coordenadas no-vacías tras trim.
    /// "0" es una coordenada presente (un chequeo truthy la trataría como ausente).
    pub fn has_coordinates(&self) -> bool {
        !self.latitude.trim().is_empty() && !self.longitude.trim().is_empty()
    }

    /// Parseo perezoso a f64. Solo devuelve Some si ambas coordenadas están
    /// presentes y parsean a un valor finito.
    pub fn parsed_coordinates(&self) -> Option<(f64, f64)> {
        if !self.has_coordinates() {
            return None;
        }
        let lat = self.latitude.trim().parse::<f64>().ok()?;
        let lng = self.longitude.trim().parse::<f64>().ok()?;
        if lat.is_finite() && lng.is_finite() {
            Some((lat, lng))
        } else {
            None
        }
    }

    /// Un punto entra al mapa solo si sus coordenadas parsean
    pub fn is_mappable(&self) -> bool {
        self.parsed_coordinates().is_some()
    }

    /// Etiqueta presente y no-vacía tras trim
    pub fn label(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// String de display "label (lat, lng)" — también clave de ordenación
    /// de la columna Current Location
    pub fn display_string(&self) -> String {
        match self.label() {
            Some(label) => format!("{} ({}, {})", label, self.latitude, self.longitude),
            None => format!("({}, {})", self.latitude, self.longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_a_present_coordinate() {
        let point = LocationPoint::new("0", "0", None);
        assert!(point.has_coordinates());
        assert_eq!(point.parsed_coordinates(), Some((0.0, 0.0)));
    }

    #[test]
    fn test_empty_coordinate_is_absent() {
        let point = LocationPoint::new("", "3", None);
        assert!(!point.has_coordinates());
        assert_eq!(point.parsed_coordinates(), None);

        let blank = LocationPoint::new("   ", "3", None);
        assert!(!blank.has_coordinates());
    }

    #[test]
    fn test_unparseable_coordinate_is_not_mappable() {
        let point = LocationPoint::new("abc", "3", None);
        assert!(point.has_coordinates());
        assert!(!point.is_mappable());
    }

    #[test]
    fn test_display_string_with_and_without_label() {
        let labeled = LocationPoint::new("51.9", "4.5", Some("Rotterdam"));
        assert_eq!(labeled.display_string(), "Rotterdam (51.9, 4.5)");

        let unlabeled = LocationPoint::new("51.9", "4.5", None);
        assert_eq!(unlabeled.display_string(), "(51.9, 4.5)");
    }

    #[test]
    fn test_blank_label_counts_as_absent() {
        let point = LocationPoint::new("1", "2", Some("  "));
        assert_eq!(point.label(), None);
    }
}
