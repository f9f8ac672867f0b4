use std::fmt;

pub const DEFAULT_OFFSET: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 100;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 500;

/// A validated list cursor. `offset` is a page number, not a row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
	pub offset: i64,
	pub limit: i64,
}
impl Page {
	pub fn new(offset: i64, limit: i64) -> Result<Self, PageError> {
		if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
			return Err(PageError::LimitOutOfRange { limit });
		}
		if offset < 0 {
			return Err(PageError::NegativeOffset { offset });
		}

		Ok(Self { offset, limit })
	}

	/// Parses raw query values. Missing or non-integer values fall back to the defaults.
	pub fn from_query(offset: Option<&str>, limit: Option<&str>) -> Result<Self, PageError> {
		Self::new(parse_or(offset, DEFAULT_OFFSET), parse_or(limit, DEFAULT_LIMIT))
	}
}
impl Default for Page {
	fn default() -> Self {
		Self { offset: DEFAULT_OFFSET, limit: DEFAULT_LIMIT }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
	LimitOutOfRange { limit: i64 },
	NegativeOffset { offset: i64 },
}

impl fmt::Display for PageError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::LimitOutOfRange { .. } =>
				write!(f, "limit must be between {MIN_LIMIT} and {MAX_LIMIT}"),
			Self::NegativeOffset { .. } => write!(f, "offset must be zero or greater"),
		}
	}
}

impl std::error::Error for PageError {}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
	raw.and_then(|value| value.parse().ok()).unwrap_or(default)
}
