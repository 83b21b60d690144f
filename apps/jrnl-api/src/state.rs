use std::sync::Arc;

use jrnl_providers::embedding::EmbeddingClient;
use jrnl_service::JournalService;
use jrnl_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<JournalService>,
}
impl AppState {
	pub async fn new(config: jrnl_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema(config.providers.embedding.dimensions).await?;

		let embeddings = EmbeddingClient::new(&config.providers.embedding)?;
		let service = JournalService::new(config, Arc::new(db), Arc::new(embeddings));

		Ok(Self { service: Arc::new(service) })
	}
}
