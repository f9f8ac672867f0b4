use std::{
	collections::BTreeMap,
	future,
	sync::{Mutex, MutexGuard},
};

use crate::{
	Error, Result,
	models::{Note, NoteFields},
	store::{BoxFuture, NoteStore},
};

/// An in-process [`NoteStore`] with the same paging and ordering rules as the Postgres store.
pub struct MemoryStore {
	inner: Mutex<Notes>,
}

struct Notes {
	next_id: i64,
	rows: BTreeMap<i64, NoteFields>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self { inner: Mutex::new(Notes { next_id: 1, rows: BTreeMap::new() }) }
	}

	fn lock(&self) -> MutexGuard<'_, Notes> {
		self.inner.lock().unwrap_or_else(|err| err.into_inner())
	}

	fn list_sync(&self, offset: i64, limit: i64) -> Vec<Note> {
		let first_row = offset.saturating_mul(limit);
		let (Ok(skip), Ok(take)) = (usize::try_from(first_row), usize::try_from(limit)) else {
			return Vec::new();
		};

		self.lock()
			.rows
			.iter()
			.skip(skip)
			.take(take)
			.map(|(id, fields)| fields.clone().into_note(*id))
			.collect()
	}

	fn insert_sync(&self, fields: &NoteFields) -> i64 {
		let mut notes = self.lock();
		let id = notes.next_id;

		notes.next_id += 1;
		notes.rows.insert(id, fields.clone());

		id
	}

	fn get_sync(&self, id: i64) -> Result<Note> {
		self.lock()
			.rows
			.get(&id)
			.map(|fields| fields.clone().into_note(id))
			.ok_or_else(|| Error::NotFound(format!("note {id}")))
	}

	fn update_sync(&self, id: i64, fields: &NoteFields) -> Result<()> {
		let mut notes = self.lock();
		let Some(row) = notes.rows.get_mut(&id) else {
			return Err(Error::NotFound(format!("note {id}")));
		};

		*row = fields.clone();

		Ok(())
	}

	fn delete_sync(&self, id: i64) -> Result<()> {
		self.lock()
			.rows
			.remove(&id)
			.map(|_| ())
			.ok_or_else(|| Error::NotFound(format!("note {id}")))
	}
}
impl Default for MemoryStore {
	fn default() -> Self {
		Self::new()
	}
}

impl NoteStore for MemoryStore {
	fn list(&self, offset: i64, limit: i64) -> BoxFuture<'_, Result<Vec<Note>>> {
		Box::pin(future::ready(Ok(self.list_sync(offset, limit))))
	}

	fn count(&self) -> BoxFuture<'_, Result<i64>> {
		let count = self.lock().rows.len() as i64;

		Box::pin(future::ready(Ok(count)))
	}

	fn insert<'a>(&'a self, fields: &'a NoteFields) -> BoxFuture<'a, Result<i64>> {
		Box::pin(future::ready(Ok(self.insert_sync(fields))))
	}

	fn get(&self, id: i64) -> BoxFuture<'_, Result<Note>> {
		Box::pin(future::ready(self.get_sync(id)))
	}

	fn update<'a>(&'a self, id: i64, fields: &'a NoteFields) -> BoxFuture<'a, Result<()>> {
		Box::pin(future::ready(self.update_sync(id, fields)))
	}

	fn delete(&self, id: i64) -> BoxFuture<'_, Result<()>> {
		Box::pin(future::ready(self.delete_sync(id)))
	}
}
