use postit_storage::models::NoteFields;

use crate::{Error, NoteIdResponse, NoteService, Result};

impl NoteService {
	/// Replaces title, body and tags of an existing note. The id is checked before the body.
	pub async fn update_note(&self, raw_id: &str, body: &[u8]) -> Result<NoteIdResponse> {
		let id = crate::parse_note_id(raw_id)?;
		let fields: NoteFields = crate::parse_note_input(body)?.into();

		self.store.update(id, &fields).await.map_err(|err| Error::from_store("update", err))?;

		tracing::debug!(id, "Updated note.");

		Ok(NoteIdResponse { id })
	}
}
