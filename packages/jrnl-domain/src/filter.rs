use serde::Deserialize;

use crate::{EmbeddingVariant, Error, Result};

/// Raw filter as it arrives from the routing layer's query string. Everything
/// is optional; [`SearchFilter::resolve`] validates and applies defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilter {
	pub limit: Option<i64>,
	pub page: Option<i64>,
	pub search: Option<String>,
	pub v_search: Option<String>,
	#[serde(rename = "type")]
	pub variant: Option<EmbeddingVariant>,
}

/// A pagination knob that remembers whether the caller supplied it or the
/// service defaulted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
	Given(i64),
	Defaulted(i64),
}
impl Setting {
	pub fn value(self) -> i64 {
		match self {
			Self::Given(value) | Self::Defaulted(value) => value,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
	pub size: Setting,
	pub index: Setting,
}
impl Page {
	pub fn offset(self) -> i64 {
		self.index.value() * self.size.value()
	}
}

/// The validated, defaulted form of [`SearchFilter`]. Empty query strings are
/// treated as absent.
#[derive(Debug, Clone)]
pub struct SearchQuery {
	pub page: Option<Page>,
	pub lexical: Option<String>,
	pub semantic: Option<String>,
	pub variant: EmbeddingVariant,
}

impl SearchFilter {
	/// Validates bounds and fills service defaults: `default_page_size` for a
	/// missing limit, page index zero for a missing page. Absence of either
	/// knob is never an error.
	pub fn resolve(self, default_page_size: i64) -> Result<SearchQuery> {
		let size = match self.limit {
			Some(limit) if limit < 1 => return Err(Error::InvalidPageSize(limit)),
			Some(limit) => Setting::Given(limit),
			None => Setting::Defaulted(default_page_size),
		};
		let index = match self.page {
			Some(page) if page < 0 => return Err(Error::InvalidPageIndex(page)),
			Some(page) => Setting::Given(page),
			None => Setting::Defaulted(0),
		};
		let lexical = self.search.filter(|text| !text.is_empty());
		let semantic = self.v_search.filter(|text| !text.is_empty());
		let variant = self.variant.unwrap_or_default();

		Ok(SearchQuery { page: Some(Page { size, index }), lexical, semantic, variant })
	}
}
