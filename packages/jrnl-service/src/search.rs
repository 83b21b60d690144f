use tracing::warn;

use jrnl_domain::SearchFilter;
use jrnl_storage::{models::RankedJournal, plan};

use crate::{JournalService, Result};

impl JournalService {
	/// Ranked, paginated retrieval: validate and default the filter, resolve
	/// the semantic text into an embedding when present, compose one plan, and
	/// execute it.
	///
	/// A semantic query whose embedding call fails aborts the whole search; it
	/// never degrades to an unranked result set, since that would change what
	/// the caller asked for without telling them.
	pub async fn search(&self, filter: SearchFilter) -> Result<Vec<RankedJournal>> {
		let query = filter.resolve(self.cfg.search.default_page_size)?;
		let embedding = match query.semantic.as_deref() {
			Some(text) => {
				let vector =
					self.embeddings.embed(text, query.variant).await.inspect_err(|err| {
						warn!(variant = query.variant.as_str(), "Embedding call failed: {err}.");
					})?;

				Some(vector)
			},
			None => None,
		};
		let plan = plan::build(&query, embedding.as_deref());

		Ok(self.store.search(&plan).await?)
	}
}
