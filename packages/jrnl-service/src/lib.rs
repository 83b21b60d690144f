pub mod journal;
pub mod search;

mod error;

pub use error::{Error, Result};

use std::{future::Future, pin::Pin, sync::Arc};

use jrnl_config::Config;
use jrnl_domain::EmbeddingVariant;
use jrnl_providers::embedding::EmbeddingClient;
use jrnl_storage::{
	db::Db,
	models::{Journal, RankedJournal},
	plan::QueryPlan,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Resolves free text into an embedding vector. The production impl is the
/// HTTP [`EmbeddingClient`]; tests substitute fakes.
pub trait EmbeddingSource
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		text: &'a str,
		variant: EmbeddingVariant,
	) -> BoxFuture<'a, jrnl_providers::Result<Vec<f32>>>;
}

/// Read-only journal store: ranked-list retrieval plus single-record fetch.
pub trait JournalStore
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		plan: &'a QueryPlan,
	) -> BoxFuture<'a, jrnl_storage::Result<Vec<RankedJournal>>>;

	fn get(&self, pmid: i64) -> BoxFuture<'_, jrnl_storage::Result<Journal>>;
}

impl EmbeddingSource for EmbeddingClient {
	fn embed<'a>(
		&'a self,
		text: &'a str,
		variant: EmbeddingVariant,
	) -> BoxFuture<'a, jrnl_providers::Result<Vec<f32>>> {
		Box::pin(EmbeddingClient::embed(self, text, variant))
	}
}

impl JournalStore for Db {
	fn search<'a>(
		&'a self,
		plan: &'a QueryPlan,
	) -> BoxFuture<'a, jrnl_storage::Result<Vec<RankedJournal>>> {
		Box::pin(jrnl_storage::journals::search(self, plan))
	}

	fn get(&self, pmid: i64) -> BoxFuture<'_, jrnl_storage::Result<Journal>> {
		Box::pin(jrnl_storage::journals::get(self, pmid))
	}
}

pub struct JournalService {
	pub cfg: Config,
	pub store: Arc<dyn JournalStore>,
	pub embeddings: Arc<dyn EmbeddingSource>,
}
impl JournalService {
	pub fn new(
		cfg: Config,
		store: Arc<dyn JournalStore>,
		embeddings: Arc<dyn EmbeddingSource>,
	) -> Self {
		Self { cfg, store, embeddings }
	}
}
