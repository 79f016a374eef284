// ============================================================================
// DETAIL STATE - Estado del detalle de un shipment (vista de mapa)
// ============================================================================
// Copia independiente de la lista del dashboard: se fetchea por shipment_id
// y nunca se sincroniza con la colección salvo re-fetch.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Shipment;
use crate::viewmodels::location_update_viewmodel::{EditorState, LocationDraft};

/// Estado del detalle + workflow de actualización de ubicación
#[derive(Clone)]
pub struct DetailState {
    pub shipment: Rc<RefCell<Option<Shipment>>>,
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,

    // Workflow de actualización de ubicación
    pub editor: Rc<RefCell<EditorState>>,
    pub draft: Rc<RefCell<LocationDraft>>,
    pub editor_error: Rc<RefCell<Option<String>>>,

    request_seq: Rc<RefCell<u64>>,
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            shipment: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
            editor: Rc::new(RefCell::new(EditorState::Viewing)),
            draft: Rc::new(RefCell::new(LocationDraft::default())),
            editor_error: Rc::new(RefCell::new(None)),
            request_seq: Rc::new(RefCell::new(0)),
        }
    }

    pub fn set_shipment(&self, shipment: Option<Shipment>) {
        *self.shipment.borrow_mut() = shipment;
    }

    pub fn get_shipment(&self) -> Option<Shipment> {
        self.shipment.borrow().clone()
    }

    /// ID del shipment cargado actualmente
    pub fn shipment_id(&self) -> Option<String> {
        self.shipment.borrow().as_ref().map(|s| s.shipment_id.clone())
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

    pub fn set_editor(&self, editor: EditorState) {
        *self.editor.borrow_mut() = editor;
    }

    pub fn get_editor(&self) -> EditorState {
        *self.editor.borrow()
    }

    pub fn set_draft(&self, draft: LocationDraft) {
        *self.draft.borrow_mut() = draft;
    }

    pub fn get_draft(&self) -> LocationDraft {
        self.draft.borrow().clone()
    }

    pub fn update_draft<F>(&self, updater: F)
    where
        F: FnOnce(&mut LocationDraft),
    {
        updater(&mut *self.draft.borrow_mut());
    }

    pub fn set_editor_error(&self, error: Option<String>) {
        *self.editor_error.borrow_mut() = error;
    }

    pub fn get_editor_error(&self) -> Option<String> {
        self.editor_error.borrow().clone()
    }

    pub fn next_request_seq(&self) -> u64 {
        let mut seq = self.request_seq.borrow_mut();
        *seq += 1;
        *seq
    }

    pub fn is_latest_request(&self, seq: u64) -> bool {
        *self.request_seq.borrow() == seq
    }
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}
