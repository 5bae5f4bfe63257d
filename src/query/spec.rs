//! Filter specification
//!
//! The closed set of predicates a search may carry. Every field is already
//! normalized: text is lowercased with collapsed whitespace, numbers are
//! finite, pagination is clamped.

/// Default page size
pub const DEFAULT_LIMIT: usize = 100;

/// Largest page a caller may request
pub const MAX_LIMIT: usize = 1000;

/// Case-insensitive substring match on one field
#[derive(Debug, Clone, PartialEq)]
pub struct TextPredicate {
    /// Dotted field path
    pub field: String,
    /// Lowercased needle
    pub needle: String,
}

/// Inclusive numeric range on one field; an absent bound is unbounded
#[derive(Debug, Clone, PartialEq)]
pub struct RangePredicate {
    pub field: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Field present and non-null (`present = true`) or absent/null (`false`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresencePredicate {
    pub field: String,
    pub present: bool,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// `desc` in any case selects descending; anything else is ascending.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Sort specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Clamped pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: usize,
    offset: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Clamps `limit` into `1..=MAX_LIMIT` and `offset` to `>= 0`.
    /// Missing values take their defaults.
    pub fn clamped(limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = match limit {
            Some(l) => l.clamp(1, MAX_LIMIT as i64) as usize,
            None => DEFAULT_LIMIT,
        };
        let offset = offset.map(|o| o.max(0) as usize).unwrap_or(0);
        Self { limit, offset }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// A fully normalized search request against one dataset
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    /// Lowercased code prefix
    pub code: Option<String>,
    /// Lowercased full-text needle, matched against every string field
    pub query: Option<String>,
    pub text: Vec<TextPredicate>,
    pub ranges: Vec<RangePredicate>,
    pub presence: Vec<PresencePredicate>,
    /// Explicit request for every record
    pub match_all: bool,
    pub sort: Option<SortSpec>,
    pub page: Page,
}

/// Trims, collapses inner whitespace and lowercases. Empty input yields `None`.
pub fn normalize_text(value: &str) -> Option<String> {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then(|| collapsed.to_lowercase())
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = normalize_text(code);
        self
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = normalize_text(query);
        self
    }

    pub fn with_text(mut self, field: impl Into<String>, needle: &str) -> Self {
        if let Some(needle) = normalize_text(needle) {
            self.text.push(TextPredicate {
                field: field.into(),
                needle,
            });
        }
        self
    }

    /// Adds or tightens the range on `field`. Non-finite bounds are dropped.
    pub fn with_range(mut self, field: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        let field = field.into();
        let min = min.filter(|v| v.is_finite());
        let max = max.filter(|v| v.is_finite());

        match self.ranges.iter_mut().find(|r| r.field == field) {
            Some(existing) => {
                if min.is_some() {
                    existing.min = min;
                }
                if max.is_some() {
                    existing.max = max;
                }
            }
            None if min.is_some() || max.is_some() => {
                self.ranges.push(RangePredicate { field, min, max });
            }
            None => {}
        }
        self
    }

    pub fn with_presence(mut self, field: impl Into<String>, present: bool) -> Self {
        self.presence.push(PresencePredicate {
            field: field.into(),
            present,
        });
        self
    }

    pub fn match_all(mut self) -> Self {
        self.match_all = true;
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, limit: i64, offset: i64) -> Self {
        self.page = Page::clamped(Some(limit), Some(offset));
        self
    }

    /// True when at least one predicate or the match-all flag is set.
    ///
    /// Sort and pagination alone do not constrain a search.
    pub fn is_constrained(&self) -> bool {
        self.match_all
            || self.code.is_some()
            || self.query.is_some()
            || !self.text.is_empty()
            || !self.ranges.is_empty()
            || !self.presence.is_empty()
    }

    /// True when predicates beyond the code prefix are present
    pub fn has_refinements(&self) -> bool {
        self.query.is_some()
            || !self.text.is_empty()
            || !self.ranges.is_empty()
            || !self.presence.is_empty()
    }
}
