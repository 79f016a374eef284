// ============================================================================
// UTILS - Constantes y FFI hacia JavaScript
// ============================================================================

pub mod constants;
pub mod leaflet_ffi;
