use jrnl_domain::SearchQuery;

/// A bind value carried alongside the SQL text, replayed through sqlx in
/// positional order at execution time.
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
	Text(String),
	Int(i64),
}

/// A fully composed, parameter-bound retrieval statement. User-controlled
/// values only ever travel as binds; the SQL text is assembled from fixed
/// fragments plus the closed [`EmbeddingVariant`] table mapping, so request
/// input can never reshape the statement.
///
/// [`EmbeddingVariant`]: jrnl_domain::EmbeddingVariant
#[derive(Debug, Clone)]
pub struct QueryPlan {
	sql: String,
	binds: Vec<Bind>,
}
impl QueryPlan {
	pub fn sql(&self) -> &str {
		&self.sql
	}

	pub fn binds(&self) -> &[Bind] {
		&self.binds
	}
}

/// Builds the single read-only statement for a resolved search query.
///
/// Three independent axes compose: semantic ranking (vector join plus a
/// `1 - cosine distance` expression), lexical filtering (an ILIKE predicate
/// over title, abstract, and body), and pagination. Ranking only engages when
/// both the semantic text and an embedding are present; the service never
/// passes one without the other.
pub fn build(query: &SearchQuery, embedding: Option<&[f32]>) -> QueryPlan {
	let mut binds = Vec::new();
	let ranked = match (&query.semantic, embedding) {
		(Some(_), Some(embedding)) => {
			binds.push(Bind::Text(vector_literal(embedding)));

			true
		},
		_ => false,
	};
	let mut sql = if ranked {
		let table = query.variant.embedding_table();

		format!(
			"SELECT j.pmid, j.title, j.abstract, j.body, j.tags, \
			1 - (e.embedding <=> $1::text::vector) AS distance \
			FROM journals j INNER JOIN {table} e ON j.pmid = e.pmid"
		)
	} else {
		"SELECT pmid, title, abstract, body, tags, 0::float8 AS distance FROM journals"
			.to_string()
	};

	if let Some(lexical) = query.lexical.as_deref() {
		binds.push(Bind::Text(format!("%{lexical}%")));

		let p = binds.len();

		sql.push_str(&format!(
			" WHERE (title ILIKE ${p} OR abstract ILIKE ${p} OR body ILIKE ${p})"
		));
	}
	if ranked {
		// Cosine distance ascending puts the most similar row first and keeps
		// the ordering monotone with the reported distance score. Ties keep
		// the store's natural row order.
		sql.push_str(" ORDER BY e.embedding <=> $1::text::vector");
	}
	if let Some(page) = query.page {
		binds.push(Bind::Int(page.size.value()));

		let limit = binds.len();

		binds.push(Bind::Int(page.offset()));

		let offset = binds.len();

		sql.push_str(&format!(" LIMIT ${limit} OFFSET ${offset}"));
	}

	QueryPlan { sql, binds }
}

/// pgvector's text form, bound as a parameter and cast server-side. Binding
/// the literal keeps the vector out of the SQL text like every other
/// user-supplied value.
fn vector_literal(embedding: &[f32]) -> String {
	let mut out = String::with_capacity(embedding.len() * 8 + 2);

	out.push('[');

	for (i, value) in embedding.iter().enumerate() {
		if i > 0 {
			out.push(',');
		}

		out.push_str(&value.to_string());
	}

	out.push(']');

	out
}

#[cfg(test)]
mod tests {
	use jrnl_domain::{EmbeddingVariant, Page, SearchQuery, Setting};

	use super::*;

	fn base_query() -> SearchQuery {
		SearchQuery {
			page: None,
			lexical: None,
			semantic: None,
			variant: EmbeddingVariant::Generalist,
		}
	}

	#[test]
	fn unfiltered_query_selects_constant_distance() {
		let plan = build(&base_query(), None);

		assert_eq!(
			plan.sql(),
			"SELECT pmid, title, abstract, body, tags, 0::float8 AS distance FROM journals"
		);
		assert!(plan.binds().is_empty());
	}

	#[test]
	fn lexical_text_only_appears_as_a_bind() {
		let query = SearchQuery {
			lexical: Some("cancer'; DROP TABLE journals; --".to_string()),
			..base_query()
		};
		let plan = build(&query, None);

		assert!(!plan.sql().contains("cancer"));
		assert!(!plan.sql().contains("DROP"));
		assert!(plan.sql().contains("WHERE (title ILIKE $1 OR abstract ILIKE $1 OR body ILIKE $1)"));
		assert_eq!(
			plan.binds(),
			&[Bind::Text("%cancer'; DROP TABLE journals; --%".to_string())]
		);
	}

	#[test]
	fn semantic_query_joins_the_variant_table() {
		let query = SearchQuery {
			semantic: Some("tumor suppressor gene".to_string()),
			variant: EmbeddingVariant::Specialist,
			..base_query()
		};
		let plan = build(&query, Some(&[0.25, -1.0, 2.0]));

		assert!(plan.sql().contains("INNER JOIN journal_specialist_embeddings e"));
		assert!(plan.sql().contains("1 - (e.embedding <=> $1::text::vector) AS distance"));
		assert!(plan.sql().ends_with("ORDER BY e.embedding <=> $1::text::vector"));
		assert!(!plan.sql().contains("tumor"));
		assert_eq!(plan.binds(), &[Bind::Text("[0.25,-1,2]".to_string())]);
	}

	#[test]
	fn semantic_text_without_embedding_stays_unranked() {
		let query = SearchQuery { semantic: Some("tumor".to_string()), ..base_query() };
		let plan = build(&query, None);

		assert!(!plan.sql().contains("ORDER BY"));
		assert!(plan.sql().contains("0::float8 AS distance"));
	}

	#[test]
	fn pagination_binds_limit_and_computed_offset() {
		let query = SearchQuery {
			page: Some(Page { size: Setting::Given(2), index: Setting::Given(3) }),
			..base_query()
		};
		let plan = build(&query, None);

		assert!(plan.sql().ends_with(" LIMIT $1 OFFSET $2"));
		assert_eq!(plan.binds(), &[Bind::Int(2), Bind::Int(6)]);
	}

	#[test]
	fn all_axes_compose_in_order() {
		let query = SearchQuery {
			page: Some(Page { size: Setting::Defaulted(10), index: Setting::Defaulted(0) }),
			lexical: Some("cancer".to_string()),
			semantic: Some("tumor".to_string()),
			variant: EmbeddingVariant::Generalist,
		};
		let plan = build(&query, Some(&[1.0, 0.0]));
		let sql = plan.sql();
		let where_at = sql.find("WHERE").expect("Missing WHERE clause.");
		let order_at = sql.find("ORDER BY").expect("Missing ORDER BY clause.");
		let limit_at = sql.find("LIMIT").expect("Missing LIMIT clause.");

		assert!(sql.contains("journal_generalist_embeddings"));
		assert!(where_at < order_at && order_at < limit_at);
		assert!(sql.contains("title ILIKE $2"));
		assert!(sql.ends_with("LIMIT $3 OFFSET $4"));
		assert_eq!(
			plan.binds(),
			&[
				Bind::Text("[1,0]".to_string()),
				Bind::Text("%cancer%".to_string()),
				Bind::Int(10),
				Bind::Int(0),
			]
		);
	}
}
