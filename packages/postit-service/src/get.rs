use serde::{Deserialize, Serialize};

use crate::{Error, NoteItem, NoteService, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetNoteResponse {
	pub note: NoteItem,
}

impl NoteService {
	pub async fn get_note(&self, raw_id: &str) -> Result<GetNoteResponse> {
		let id = crate::parse_note_id(raw_id)?;
		let note = self.store.get(id).await.map_err(|err| Error::from_store("get", err))?;

		Ok(GetNoteResponse { note: note.into() })
	}
}
