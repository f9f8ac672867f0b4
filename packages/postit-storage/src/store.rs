use std::{future::Future, pin::Pin};

use crate::{
	Result,
	db::Db,
	models::{Note, NoteFields},
	queries,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Persistence for notes.
///
/// `update` and `delete` fail with [`crate::Error::NotFound`] when the id does not exist.
pub trait NoteStore
where
	Self: Send + Sync,
{
	/// Returns up to `limit` notes starting at row `offset * limit`, ordered by id.
	fn list(&self, offset: i64, limit: i64) -> BoxFuture<'_, Result<Vec<Note>>>;

	fn count(&self) -> BoxFuture<'_, Result<i64>>;

	/// Stores a new note and returns its assigned id.
	fn insert<'a>(&'a self, fields: &'a NoteFields) -> BoxFuture<'a, Result<i64>>;

	fn get(&self, id: i64) -> BoxFuture<'_, Result<Note>>;

	fn update<'a>(&'a self, id: i64, fields: &'a NoteFields) -> BoxFuture<'a, Result<()>>;

	fn delete(&self, id: i64) -> BoxFuture<'_, Result<()>>;
}

impl NoteStore for Db {
	fn list(&self, offset: i64, limit: i64) -> BoxFuture<'_, Result<Vec<Note>>> {
		Box::pin(queries::list_notes(self, offset, limit))
	}

	fn count(&self) -> BoxFuture<'_, Result<i64>> {
		Box::pin(queries::count_notes(self))
	}

	fn insert<'a>(&'a self, fields: &'a NoteFields) -> BoxFuture<'a, Result<i64>> {
		Box::pin(queries::insert_note(self, fields))
	}

	fn get(&self, id: i64) -> BoxFuture<'_, Result<Note>> {
		Box::pin(queries::get_note(self, id))
	}

	fn update<'a>(&'a self, id: i64, fields: &'a NoteFields) -> BoxFuture<'a, Result<()>> {
		Box::pin(queries::update_note(self, id, fields))
	}

	fn delete(&self, id: i64) -> BoxFuture<'_, Result<()>> {
		Box::pin(queries::delete_note(self, id))
	}
}
