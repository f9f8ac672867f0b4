pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

mod error;

pub use error::{Error, Result};
pub use get::GetNoteResponse;
pub use list::{ListNotesRequest, ListNotesResponse};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use postit_storage::{
	models::{Note, NoteFields},
	store::NoteStore,
};

pub const INVALID_ID_MESSAGE: &str = "id must be an integer";

/// A note as it appears in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteItem {
	pub id: i64,
	pub title: String,
	pub body: String,
	pub tags: String,
}
impl From<Note> for NoteItem {
	fn from(note: Note) -> Self {
		Self { id: note.id, title: note.title, body: note.body, tags: note.tags }
	}
}

/// Request body for create and update. Missing fields are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub body: String,
	#[serde(default)]
	pub tags: String,
}
impl From<NoteInput> for NoteFields {
	fn from(input: NoteInput) -> Self {
		Self { title: input.title, body: input.body, tags: input.tags }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteIdResponse {
	pub id: i64,
}

pub struct NoteService {
	store: Arc<dyn NoteStore>,
}
impl NoteService {
	pub fn new(store: Arc<dyn NoteStore>) -> Self {
		Self { store }
	}
}

pub fn parse_note_id(raw: &str) -> Result<i64> {
	raw.parse().map_err(|_| Error::InvalidArgument { message: INVALID_ID_MESSAGE.to_string() })
}

pub fn parse_note_input(body: &[u8]) -> Result<NoteInput> {
	serde_json::from_slice(body).map_err(|err| Error::InvalidArgument { message: err.to_string() })
}
