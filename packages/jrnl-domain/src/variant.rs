use serde::{Deserialize, Serialize};

/// Which embedding space a semantic query searches. Each variant maps to its
/// own similarity table keyed by pmid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingVariant {
	#[default]
	Generalist,
	Specialist,
}
impl EmbeddingVariant {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Generalist => "generalist",
			Self::Specialist => "specialist",
		}
	}

	/// The similarity table backing this variant. A closed mapping; table
	/// names never come from request input.
	pub fn embedding_table(self) -> &'static str {
		match self {
			Self::Generalist => "journal_generalist_embeddings",
			Self::Specialist => "journal_specialist_embeddings",
		}
	}
}
