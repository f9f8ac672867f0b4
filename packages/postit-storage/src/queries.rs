use crate::{
	Error, Result,
	db::Db,
	models::{Note, NoteFields},
};

/// Lists one page of notes. `offset` is a page number: the page starts at row `offset * limit`.
pub async fn list_notes(db: &Db, offset: i64, limit: i64) -> Result<Vec<Note>> {
	let first_row = offset.saturating_mul(limit);

	db.bounded("list", async {
		let notes = sqlx::query_as::<_, Note>(
			"\
SELECT id, title, body, tags
FROM notes
ORDER BY id
LIMIT $1 OFFSET $2",
		)
		.bind(limit)
		.bind(first_row)
		.fetch_all(&db.pool)
		.await?;

		Ok::<_, Error>(notes)
	})
	.await
}

pub async fn count_notes(db: &Db) -> Result<i64> {
	db.bounded("count", async {
		let count: i64 =
			sqlx::query_scalar("SELECT count(*) FROM notes").fetch_one(&db.pool).await?;

		Ok::<_, Error>(count)
	})
	.await
}

pub async fn insert_note(db: &Db, fields: &NoteFields) -> Result<i64> {
	db.bounded("insert", async {
		let id: i64 = sqlx::query_scalar(
			"\
INSERT INTO notes (title, body, tags)
VALUES ($1, $2, $3)
RETURNING id",
		)
		.bind(fields.title.as_str())
		.bind(fields.body.as_str())
		.bind(fields.tags.as_str())
		.fetch_one(&db.pool)
		.await?;

		Ok::<_, Error>(id)
	})
	.await
}

pub async fn get_note(db: &Db, id: i64) -> Result<Note> {
	db.bounded("get", async {
		sqlx::query_as::<_, Note>("SELECT id, title, body, tags FROM notes WHERE id = $1")
			.bind(id)
			.fetch_optional(&db.pool)
			.await?
			.ok_or_else(|| Error::NotFound(format!("note {id}")))
	})
	.await
}

pub async fn update_note(db: &Db, id: i64, fields: &NoteFields) -> Result<()> {
	get_note(db, id).await?;

	db.bounded("update", async {
		sqlx::query(
			"\
UPDATE notes
SET
	title = $1,
	body = $2,
	tags = $3
WHERE id = $4",
		)
		.bind(fields.title.as_str())
		.bind(fields.body.as_str())
		.bind(fields.tags.as_str())
		.bind(id)
		.execute(&db.pool)
		.await?;

		Ok::<_, Error>(())
	})
	.await
}

pub async fn delete_note(db: &Db, id: i64) -> Result<()> {
	get_note(db, id).await?;

	db.bounded("delete", async {
		sqlx::query("DELETE FROM notes WHERE id = $1").bind(id).execute(&db.pool).await?;

		Ok::<_, Error>(())
	})
	.await
}
