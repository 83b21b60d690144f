use crate::{
	Result,
	db::Db,
	error::Error,
	models::{Journal, RankedJournal},
	plan::{Bind, QueryPlan},
};

/// Executes a composed plan as one read-only statement. Zero matches is an
/// empty vec, never an error; store errors propagate unchanged.
pub async fn search(db: &Db, plan: &QueryPlan) -> Result<Vec<RankedJournal>> {
	let mut query = sqlx::query_as::<_, RankedJournal>(plan.sql());

	for bind in plan.binds() {
		query = match bind {
			Bind::Text(value) => query.bind(value.as_str()),
			Bind::Int(value) => query.bind(*value),
		};
	}

	Ok(query.fetch_all(&db.pool).await?)
}

/// Fetches a single journal by pmid. The statement pulls up to two rows so a
/// uniqueness violation surfaces as [`Error::Integrity`] instead of a silent
/// first-row pick.
pub async fn get(db: &Db, pmid: i64) -> Result<Journal> {
	let rows: Vec<Journal> = sqlx::query_as(
		"SELECT pmid, title, abstract, body, tags FROM journals WHERE pmid = $1 LIMIT 2",
	)
	.bind(pmid)
	.fetch_all(&db.pool)
	.await?;
	let mut rows = rows.into_iter();

	match (rows.next(), rows.next()) {
		(Some(journal), None) => Ok(journal),
		(None, _) => Err(Error::NotFound(format!("No journal with pmid {pmid}."))),
		(Some(_), Some(_)) =>
			Err(Error::Integrity(format!("Multiple journals share pmid {pmid}."))),
	}
}
