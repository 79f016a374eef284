/// URL base del backend de shipments
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:4000 (por defecto)
/// - Producción: via BACKEND_URL en .env
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:4000",
};
