use std::{future, sync::Arc, time::Duration};

use postit_service::{Error, INVALID_ID_MESSAGE, ListNotesRequest, NoteItem, NoteService};
use postit_storage::{
	Result,
	memory::MemoryStore,
	models::{Note, NoteFields},
	store::{BoxFuture, NoteStore},
};

struct TimeoutStore;
impl TimeoutStore {
	fn fail<'a, T: Send + 'a>() -> BoxFuture<'a, Result<T>> {
		Box::pin(future::ready(Err(postit_storage::Error::Timeout(Duration::from_secs(15)))))
	}
}
impl NoteStore for TimeoutStore {
	fn list(&self, _offset: i64, _limit: i64) -> BoxFuture<'_, Result<Vec<Note>>> {
		Self::fail()
	}

	fn count(&self) -> BoxFuture<'_, Result<i64>> {
		Self::fail()
	}

	fn insert<'a>(&'a self, _fields: &'a NoteFields) -> BoxFuture<'a, Result<i64>> {
		Self::fail()
	}

	fn get(&self, _id: i64) -> BoxFuture<'_, Result<Note>> {
		Self::fail()
	}

	fn update<'a>(&'a self, _id: i64, _fields: &'a NoteFields) -> BoxFuture<'a, Result<()>> {
		Self::fail()
	}

	fn delete(&self, _id: i64) -> BoxFuture<'_, Result<()>> {
		Self::fail()
	}
}

fn memory_service() -> NoteService {
	NoteService::new(Arc::new(MemoryStore::new()))
}

fn list_request(offset: Option<&str>, limit: Option<&str>) -> ListNotesRequest {
	ListNotesRequest { offset: offset.map(str::to_string), limit: limit.map(str::to_string) }
}

fn note_body(title: &str, body: &str, tags: &str) -> Vec<u8> {
	serde_json::json!({ "title": title, "body": body, "tags": tags }).to_string().into_bytes()
}

async fn create(service: &NoteService, title: &str) -> i64 {
	service
		.create_note(&note_body(title, "body", "tag"))
		.await
		.expect("Create should succeed.")
		.id
}

#[tokio::test]
async fn empty_store_lists_nothing_with_page_zero_links() {
	let service = memory_service();
	let response = service.list_notes(list_request(Some("0"), Some("100"))).await.expect("List.");

	assert!(response.notes.is_empty());
	assert_eq!(response.links.first, "/api/notes?offset=0&limit=100");
	assert_eq!(response.links.self_link, "/api/notes?offset=0&limit=100");
	assert_eq!(response.links.last, "/api/notes?offset=0&limit=100");
}

#[tokio::test]
async fn list_uses_defaults_when_query_is_missing_or_garbage() {
	let service = memory_service();

	for request in [list_request(None, None), list_request(Some("x"), Some("y"))] {
		let response = service.list_notes(request).await.expect("List should succeed.");

		assert_eq!(response.links.self_link, "/api/notes?offset=0&limit=100");
	}
}

#[tokio::test]
async fn list_rejects_limit_outside_range() {
	let service = memory_service();

	for limit in ["0", "501", "-1"] {
		let err = service
			.list_notes(list_request(Some("3"), Some(limit)))
			.await
			.expect_err("Limit must be rejected.");

		assert!(matches!(err, Error::InvalidArgument { .. }));
		assert_eq!(err.message(), "limit must be between 1 and 500");
	}
}

#[tokio::test]
async fn list_pages_by_page_number_and_links_last_page() {
	let service = memory_service();
	let mut ids = Vec::new();

	for title in ["a", "b", "c"] {
		ids.push(create(&service, title).await);
	}

	let first = service.list_notes(list_request(Some("0"), Some("2"))).await.expect("List.");
	let second = service.list_notes(list_request(Some("1"), Some("2"))).await.expect("List.");
	let beyond = service.list_notes(list_request(Some("9"), Some("2"))).await.expect("List.");

	assert_eq!(first.notes.iter().map(|note| note.id).collect::<Vec<_>>(), ids[..2].to_vec());
	assert_eq!(second.notes.iter().map(|note| note.id).collect::<Vec<_>>(), ids[2..].to_vec());
	assert_eq!(second.links.self_link, "/api/notes?offset=1&limit=2");
	assert_eq!(second.links.last, "/api/notes?offset=1&limit=2");
	assert!(beyond.notes.is_empty());
	assert_eq!(beyond.links.self_link, "/api/notes?offset=9&limit=2");
}

#[tokio::test]
async fn create_then_get_round_trips_fields() {
	let service = memory_service();
	let created = service
		.create_note(&note_body("Groceries", "milk\neggs", "home, errands"))
		.await
		.expect("Create should succeed.");
	let fetched = service.get_note(&created.id.to_string()).await.expect("Get should succeed.");

	assert_eq!(
		fetched.note,
		NoteItem {
			id: created.id,
			title: "Groceries".to_string(),
			body: "milk\neggs".to_string(),
			tags: "home, errands".to_string(),
		}
	);
}

#[tokio::test]
async fn create_accepts_empty_and_missing_fields() {
	let service = memory_service();
	let created = service.create_note(b"{}").await.expect("Empty object is accepted.");
	let fetched = service.get_note(&created.id.to_string()).await.expect("Get should succeed.");

	assert_eq!(fetched.note.title, "");
	assert_eq!(fetched.note.body, "");
	assert_eq!(fetched.note.tags, "");
}

#[tokio::test]
async fn create_rejects_malformed_body() {
	let service = memory_service();
	let err = service.create_note(b"{\"title\":").await.expect_err("Body must be rejected.");

	assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn update_is_idempotent_and_keeps_id() {
	let service = memory_service();
	let id = create(&service, "draft").await;
	let body = note_body("final", "done", "work");
	let raw_id = id.to_string();

	assert_eq!(service.update_note(&raw_id, &body).await.expect("Update.").id, id);

	let once = service.get_note(&raw_id).await.expect("Get should succeed.").note;

	service.update_note(&raw_id, &body).await.expect("Second update should succeed.");

	let twice = service.get_note(&raw_id).await.expect("Get should succeed.").note;

	assert_eq!(once, twice);
	assert_eq!(twice.title, "final");
	assert_eq!(twice.id, id);
}

#[tokio::test]
async fn update_checks_id_before_body() {
	let service = memory_service();
	let err = service.update_note("abc", b"not json").await.expect_err("Id must be rejected.");

	assert_eq!(err.message(), INVALID_ID_MESSAGE);

	let id = create(&service, "x").await;
	let err = service
		.update_note(&id.to_string(), b"not json")
		.await
		.expect_err("Body must be rejected.");

	assert!(matches!(err, Error::InvalidArgument { .. }));
	assert_ne!(err.message(), INVALID_ID_MESSAGE);
}

#[tokio::test]
async fn missing_ids_are_not_found() {
	let service = memory_service();
	let body = note_body("t", "b", "g");

	assert!(matches!(service.get_note("77").await, Err(Error::NotFound { .. })));
	assert!(matches!(service.update_note("77", &body).await, Err(Error::NotFound { .. })));
	assert!(matches!(service.delete_note("77").await, Err(Error::NotFound { .. })));
}

#[tokio::test]
async fn non_integer_ids_are_invalid_arguments() {
	let service = memory_service();
	let body = note_body("t", "b", "g");
	let errors = [
		service.get_note("one").await.expect_err("Get must fail."),
		service.update_note("one", &body).await.expect_err("Update must fail."),
		service.delete_note("one").await.expect_err("Delete must fail."),
	];

	for err in errors {
		assert!(matches!(err, Error::InvalidArgument { .. }));
		assert_eq!(err.message(), INVALID_ID_MESSAGE);
	}
}

#[tokio::test]
async fn delete_removes_note() {
	let service = memory_service();
	let id = create(&service, "temp").await;
	let raw_id = id.to_string();

	assert_eq!(service.delete_note(&raw_id).await.expect("Delete should succeed.").id, id);
	assert!(matches!(service.get_note(&raw_id).await, Err(Error::NotFound { .. })));
	assert!(matches!(service.delete_note(&raw_id).await, Err(Error::NotFound { .. })));
}

#[tokio::test]
async fn store_failures_are_internal() {
	let service = NoteService::new(Arc::new(TimeoutStore));
	let body = note_body("t", "b", "g");
	let errors = [
		service.list_notes(ListNotesRequest::default()).await.expect_err("List must fail."),
		service.create_note(&body).await.expect_err("Create must fail."),
		service.get_note("1").await.expect_err("Get must fail."),
		service.update_note("1", &body).await.expect_err("Update must fail."),
		service.delete_note("1").await.expect_err("Delete must fail."),
	];

	for err in errors {
		assert!(matches!(err, Error::Internal { .. }), "Unexpected error: {err:?}");
		assert!(err.message().contains("timed out"), "Unexpected message: {err}");
	}
}
