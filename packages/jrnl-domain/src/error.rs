pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Page size must be a positive integer, got {0}.")]
	InvalidPageSize(i64),
	#[error("Page index must be zero or greater, got {0}.")]
	InvalidPageIndex(i64),
}
