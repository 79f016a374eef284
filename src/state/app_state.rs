// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::{DashboardState, DetailState};

/// Vista activa. Seleccionar una fila del dashboard navega al mapa del
/// shipment; el botón de volver regresa al dashboard.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Route {
    Dashboard,
    ShipmentMap(String),
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub dashboard: DashboardState,
    pub detail: DetailState,
    pub route: Rc<RefCell<Route>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dashboard: DashboardState::new(),
            detail: DetailState::new(),
            route: Rc::new(RefCell::new(Route::Dashboard)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get_route(&self) -> Route {
        self.route.borrow().clone()
    }

    /// Cambiar de vista y notificar
    pub fn navigate(&self, route: Route) {
        log::info!("🧭 Navegando a {:?}", route);
        *self.route.borrow_mut() = route;
        self.notify_change();
    }

    /// Suscribirse a cambios de estado (re-render)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_change(&self) {
        let subscribers = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
