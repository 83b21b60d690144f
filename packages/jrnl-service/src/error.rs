pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid argument: {message}")]
	InvalidArgument { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Embedding provider unavailable: {message}")]
	EmbeddingUnavailable { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<jrnl_domain::Error> for Error {
	fn from(err: jrnl_domain::Error) -> Self {
		Self::InvalidArgument { message: err.to_string() }
	}
}
impl From<jrnl_providers::Error> for Error {
	fn from(err: jrnl_providers::Error) -> Self {
		Self::EmbeddingUnavailable { message: err.to_string() }
	}
}
impl From<jrnl_storage::Error> for Error {
	fn from(err: jrnl_storage::Error) -> Self {
		match err {
			jrnl_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			jrnl_storage::Error::NotFound(message) => Self::NotFound { message },
			jrnl_storage::Error::Integrity(message) => Self::Storage { message },
		}
	}
}
