// ============================================================================
// STATE - State management con Rc<RefCell>
// ============================================================================

pub mod app_state;
pub mod dashboard_state;
pub mod detail_state;

pub use app_state::{AppState, Route};
pub use dashboard_state::DashboardState;
pub use detail_state::DetailState;
