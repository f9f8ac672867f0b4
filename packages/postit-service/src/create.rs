use postit_storage::models::NoteFields;

use crate::{Error, NoteIdResponse, NoteService, Result};

impl NoteService {
	/// Creates a note from a JSON body. Empty strings are accepted for every field.
	pub async fn create_note(&self, body: &[u8]) -> Result<NoteIdResponse> {
		let fields: NoteFields = crate::parse_note_input(body)?.into();
		let id = self.store.insert(&fields).await.map_err(|err| Error::internal("insert", err))?;

		tracing::debug!(id, "Created note.");

		Ok(NoteIdResponse { id })
	}
}
