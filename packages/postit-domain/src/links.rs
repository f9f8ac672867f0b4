use serde::{Deserialize, Serialize};

/// Canonical collection URL used by every hypermedia link.
pub const NOTES_URL: &str = "/api/notes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
	pub first: String,
	#[serde(rename = "self")]
	pub self_link: String,
	pub last: String,
}

/// Builds the first/self/last links for a list page.
///
/// `offset` is echoed verbatim into `self`, even past the last page. `last` points at page
/// `total / limit` (floor division).
pub fn build_links(offset: i64, limit: i64, total: i64) -> Links {
	let last_page = total.checked_div(limit).unwrap_or(0);

	Links {
		first: page_url(0, limit),
		self_link: page_url(offset, limit),
		last: page_url(last_page, limit),
	}
}

fn page_url(offset: i64, limit: i64) -> String {
	format!("{NOTES_URL}?offset={offset}&limit={limit}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn last_page_uses_floor_division() {
		assert_eq!(build_links(0, 2, 5).last, "/api/notes?offset=2&limit=2");
		assert_eq!(build_links(0, 2, 4).last, "/api/notes?offset=2&limit=2");
		assert_eq!(build_links(0, 2, 1).last, "/api/notes?offset=0&limit=2");
	}

	#[test]
	fn zero_limit_does_not_panic() {
		assert_eq!(build_links(3, 0, 10).last, "/api/notes?offset=0&limit=0");
	}
}
