// ============================================================================
// MODELS - Estructuras compartidas con el backend (JSON)
// ============================================================================

pub mod location;
pub mod shipment;

pub use location::LocationPoint;
pub use shipment::{Shipment, ShipmentStatus};
