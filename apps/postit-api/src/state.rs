use std::sync::Arc;

use postit_service::NoteService;
use postit_storage::store::NoteStore;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<NoteService>,
}
impl AppState {
	pub fn new(store: Arc<dyn NoteStore>) -> Self {
		Self { service: Arc::new(NoteService::new(store)) }
	}
}
