pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Service failures. The variant is the error kind; `message` is what callers see.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{message}")]
	InvalidArgument { message: String },
	#[error("{message}")]
	NotFound { message: String },
	#[error("{message}")]
	Internal { message: String },
}
impl Error {
	pub fn message(&self) -> &str {
		match self {
			Self::InvalidArgument { message }
			| Self::NotFound { message }
			| Self::Internal { message } => message,
		}
	}

	/// Reports any store failure as internal, including a not-found from the store.
	pub(crate) fn internal(op: &'static str, err: postit_storage::Error) -> Self {
		tracing::warn!(op, error = %err, "Store operation failed.");

		Self::Internal { message: err.to_string() }
	}

	/// Keeps the store's not-found kind and reports everything else as internal.
	pub(crate) fn from_store(op: &'static str, err: postit_storage::Error) -> Self {
		match err {
			postit_storage::Error::NotFound(_) => Self::NotFound { message: err.to_string() },
			other => Self::internal(op, other),
		}
	}
}
