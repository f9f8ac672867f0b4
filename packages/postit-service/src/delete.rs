use crate::{Error, NoteIdResponse, NoteService, Result};

impl NoteService {
	pub async fn delete_note(&self, raw_id: &str) -> Result<NoteIdResponse> {
		let id = crate::parse_note_id(raw_id)?;

		self.store.delete(id).await.map_err(|err| Error::from_store("delete", err))?;

		tracing::debug!(id, "Deleted note.");

		Ok(NoteIdResponse { id })
	}
}
