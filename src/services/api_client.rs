// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;
use serde::Serialize;

use crate::models::{LocationPoint, Shipment};
use crate::utils::constants::BACKEND_URL;

/// Error de transporte al hablar con el backend de shipments
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Body del POST de update-location
#[derive(Serialize)]
struct UpdateLocationRequest<'a> {
    #[serde(rename = "currentLocation")]
    current_location: &'a LocationPoint,
    #[serde(rename = "currentETA")]
    current_eta: &'a str,
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Listar shipments
    pub async fn list_shipments(&self) -> Result<Vec<Shipment>, ApiError> {
        let url = format!("{}/shipments", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                message: response.status_text(),
            });
        }
        response
            .json::<Vec<Shipment>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Crear shipment
    pub async fn create_shipment(&self, shipment: &Shipment) -> Result<Shipment, ApiError> {
        let url = format!("{}/shipment", self.base_url);

        log::info!("📦 Creando shipment: {}", shipment.shipment_id);

        let response = Request::post(&url)
            .json(shipment)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            response
                .json::<Shipment>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Http { status, message })
        }
    }

    /// Obtener shipment por ID (incluye route)
    pub async fn get_shipment(&self, shipment_id: &str) -> Result<Shipment, ApiError> {
        let url = format!("{}/shipment/{}", self.base_url, shipment_id);

        log::info!("🚢 Obteniendo shipment: {}", shipment_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Http { status, message });
        }

        let shipment = response
            .json::<Shipment>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!(
            "✅ Shipment obtenido: {} ({} waypoints)",
            shipment.shipment_id,
            shipment.route.len()
        );

        Ok(shipment)
    }

    /// Actualizar ubicación actual + ETA de un shipment
    pub async fn update_location(
        &self,
        shipment_id: &str,
        current_location: &LocationPoint,
        current_eta: &str,
    ) -> Result<Shipment, ApiError> {
        let url = format!("{}/shipment/{}/update-location", self.base_url, shipment_id);
        let request = UpdateLocationRequest {
            current_location,
            current_eta,
        };

        log::info!(
            "📍 Actualizando ubicación de {}: ({}, {})",
            shipment_id,
            current_location.latitude,
            current_location.longitude
        );

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            response
                .json::<Shipment>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Http { status, message })
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_location_body_wire_names() {
        let point = LocationPoint::new("48.85", "2.35", Some("Paris"));
        let request = UpdateLocationRequest {
            current_location: &point,
            current_eta: "2026-09-01",
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"currentLocation\""));
        assert!(json.contains("\"currentETA\":\"2026-09-01\""));
        assert!(json.contains("\"latitude\":\"48.85\""));
    }
}
