use serde::Serialize;

/// The canonical journal record, read-only from this service's perspective.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Journal {
	pub pmid: i64,
	pub title: String,
	pub r#abstract: String,
	pub body: String,
	pub tags: Vec<String>,
}

/// A journal row plus its ranking score. `distance` is `1 - cosine distance`
/// for semantic queries and `0` otherwise.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RankedJournal {
	pub pmid: i64,
	pub title: String,
	pub r#abstract: String,
	pub body: String,
	pub tags: Vec<String>,
	pub distance: f64,
}
