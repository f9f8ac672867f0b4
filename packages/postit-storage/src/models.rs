#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Note {
	pub id: i64,
	pub title: String,
	pub body: String,
	pub tags: String,
}

/// The mutable content of a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFields {
	pub title: String,
	pub body: String,
	pub tags: String,
}
impl NoteFields {
	pub fn into_note(self, id: i64) -> Note {
		Note { id, title: self.title, body: self.body, tags: self.tags }
	}
}
