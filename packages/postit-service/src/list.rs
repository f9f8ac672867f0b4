use serde::{Deserialize, Serialize};

use postit_domain::{
	links::{self, Links},
	paging::Page,
};

use crate::{Error, NoteItem, NoteService, Result};

/// Raw query values. Anything that is not an integer falls back to the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListNotesRequest {
	pub offset: Option<String>,
	pub limit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNotesResponse {
	#[serde(rename = "_links")]
	pub links: Links,
	pub notes: Vec<NoteItem>,
}

impl NoteService {
	pub async fn list_notes(&self, req: ListNotesRequest) -> Result<ListNotesResponse> {
		let page = Page::from_query(req.offset.as_deref(), req.limit.as_deref())
			.map_err(|err| Error::InvalidArgument { message: err.to_string() })?;
		let notes = self
			.store
			.list(page.offset, page.limit)
			.await
			.map_err(|err| Error::internal("list", err))?;
		let total = self.store.count().await.map_err(|err| Error::internal("count", err))?;

		tracing::debug!(
			offset = page.offset,
			limit = page.limit,
			returned = notes.len(),
			total,
			"Listed notes."
		);

		Ok(ListNotesResponse {
			links: links::build_links(page.offset, page.limit, total),
			notes: notes.into_iter().map(NoteItem::from).collect(),
		})
	}
}
