pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error(transparent)]
	InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),
	#[error(transparent)]
	InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
	#[error("{message}")]
	InvalidConfig { message: String },
	#[error("Embedding provider returned status {status}: {body}")]
	Status { status: u16, body: String },
	#[error("Embedding provider reported failure: {message}")]
	Failed { message: String },
	#[error("{message}")]
	InvalidResponse { message: String },
}
