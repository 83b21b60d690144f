use jrnl_storage::models::Journal;

use crate::{Error, JournalService, Result};

impl JournalService {
	/// Fetches one journal by its pmid. The identifier arrives as the raw path
	/// segment; anything that does not parse as a pmid is the caller's fault,
	/// distinct from a well-formed pmid that simply is not in the store.
	pub async fn get_journal(&self, id: &str) -> Result<Journal> {
		let pmid: i64 = id.parse().map_err(|_| Error::InvalidArgument {
			message: format!("Invalid journal id {id:?}."),
		})?;

		Ok(self.store.get(pmid).await?)
	}
}
