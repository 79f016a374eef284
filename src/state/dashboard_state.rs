// ============================================================================
// DASHBOARD STATE - Estado de la colección de shipments
// ============================================================================
// Lista maestra inmutable + preferencias de filtro/ordenación como
// proyecciones independientes. Solo load() reemplaza la lista.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Shipment;
use crate::viewmodels::dashboard_viewmodel::SortPref;
use crate::viewmodels::shipment_form_viewmodel::{FormState, ShipmentDraft};

/// Estado del dashboard (colección + workflow de creación)
#[derive(Clone)]
pub struct DashboardState {
    /// Lista maestra - solo la reemplaza una respuesta de load() vigente
    pub shipments: Rc<RefCell<Vec<Shipment>>>,
    pub filter_text: Rc<RefCell<String>>,
    pub sort: Rc<RefCell<Option<SortPref>>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,

    // Workflow de creación
    pub form: Rc<RefCell<FormState>>,
    pub draft: Rc<RefCell<ShipmentDraft>>,
    pub form_error: Rc<RefCell<Option<String>>>,

    /// Secuencia de requests: la última emitida es la única cuya respuesta
    /// se aplica (respuestas obsoletas se descartan)
    request_seq: Rc<RefCell<u64>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            shipments: Rc::new(RefCell::new(Vec::new())),
            filter_text: Rc::new(RefCell::new(String::new())),
            sort: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
            form: Rc::new(RefCell::new(FormState::Closed)),
            draft: Rc::new(RefCell::new(ShipmentDraft::default())),
            form_error: Rc::new(RefCell::new(None)),
            request_seq: Rc::new(RefCell::new(0)),
        }
    }

    pub fn set_shipments(&self, shipments: Vec<Shipment>) {
        *self.shipments.borrow_mut() = shipments;
    }

    pub fn get_shipments(&self) -> Vec<Shipment> {
        self.shipments.borrow().clone()
    }

    pub fn set_filter_text(&self, text: String) {
        *self.filter_text.borrow_mut() = text;
    }

    pub fn get_filter_text(&self) -> String {
        self.filter_text.borrow().clone()
    }

    pub fn set_sort(&self, sort: Option<SortPref>) {
        *self.sort.borrow_mut() = sort;
    }

    pub fn get_sort(&self) -> Option<SortPref> {
        *self.sort.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn set_form(&self, form: FormState) {
        *self.form.borrow_mut() = form;
    }

    pub fn get_form(&self) -> FormState {
        *self.form.borrow()
    }

    pub fn set_draft(&self, draft: ShipmentDraft) {
        *self.draft.borrow_mut() = draft;
    }

    pub fn get_draft(&self) -> ShipmentDraft {
        self.draft.borrow().clone()
    }

    /// Actualizar el draft con un closure (un solo campo, sin tocar el resto)
    pub fn update_draft<F>(&self, updater: F)
    where
        F: FnOnce(&mut ShipmentDraft),
    {
        updater(&mut *self.draft.borrow_mut());
    }

    pub fn set_form_error(&self, error: Option<String>) {
        *self.form_error.borrow_mut() = error;
    }

    pub fn get_form_error(&self) -> Option<String> {
        self.form_error.borrow().clone()
    }

    /// Emitir una nueva secuencia de request (monótona creciente)
    pub fn next_request_seq(&self) -> u64 {
        let mut seq = self.request_seq.borrow_mut();
        *seq += 1;
        *seq
    }

    /// ¿Sigue siendo esta la última request emitida?
    pub fn is_latest_request(&self, seq: u64) -> bool {
        *self.request_seq.borrow() == seq
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
