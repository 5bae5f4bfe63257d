//! Query parameter parser
//!
//! Turns transport-level key/value parameters into a `FilterSpec`. Parsing is
//! total: unknown keys and unparsable values are dropped, never reported as
//! errors.

use std::collections::BTreeMap;

use crate::dataset::{DatasetKind, FilterKind};

use super::spec::{normalize_text, FilterSpec, Page, SortDirection, SortSpec};

/// Raw query parameters as received from a caller
pub type RawQuery = BTreeMap<String, String>;

const CODE_KEYS: &[&str] = &["iataCode", "code"];
const RESERVED_KEYS: &[&str] = &["query", "all", "sortBy", "sortOrder", "limit", "offset"];

impl FilterSpec {
    /// Parses raw parameters against the dataset's filter catalog.
    pub fn parse(kind: DatasetKind, params: &RawQuery) -> Self {
        let mut spec = FilterSpec::new();
        let mut limit = None;
        let mut offset = None;
        let mut sort_by = None;
        let mut direction = SortDirection::Asc;

        for (key, value) in params {
            match key.as_str() {
                k if CODE_KEYS.contains(&k) => {
                    if let Some(code) = normalize_text(value) {
                        spec.code = Some(code);
                    }
                }
                "query" => spec.query = normalize_text(value),
                "all" => spec.match_all = parse_flag(value).unwrap_or(false),
                "sortBy" => sort_by = Some(value.trim()),
                "sortOrder" => direction = SortDirection::parse(value),
                "limit" => limit = parse_integer(value),
                "offset" => offset = parse_integer(value),
                k => {
                    let Some(filter) = kind.filter(k) else {
                        continue;
                    };
                    spec = match filter.kind {
                        FilterKind::Text(field) => spec.with_text(field, value),
                        FilterKind::Min(field) => spec.with_range(field, parse_number(value), None),
                        FilterKind::Max(field) => spec.with_range(field, None, parse_number(value)),
                        FilterKind::Presence(field) => match parse_flag(value) {
                            Some(present) => spec.with_presence(field, present),
                            None => spec,
                        },
                    };
                }
            }
        }

        spec.sort = sort_by
            .filter(|field| kind.field(field).is_some_and(|f| f.is_sortable()))
            .map(|field| SortSpec {
                field: field.to_string(),
                direction,
            });
        spec.page = Page::clamped(limit, offset);

        spec
    }
}

/// Keys the dataset does not recognize. They are ignored by `FilterSpec::parse`.
pub fn unrecognized_keys<'a>(kind: DatasetKind, params: &'a RawQuery) -> Vec<&'a str> {
    params
        .keys()
        .map(String::as_str)
        .filter(|k| !CODE_KEYS.contains(k) && !RESERVED_KEYS.contains(k) && kind.filter(k).is_none())
        .collect()
}

/// Integers too large for `i64` saturate so clamping still applies.
fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(parsed) = value.parse() {
        return Some(parsed);
    }

    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::spec::{PresencePredicate, RangePredicate, TextPredicate, DEFAULT_LIMIT, MAX_LIMIT};

    fn params(pairs: &[(&str, &str)]) -> RawQuery {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_code_and_pagination() {
        let spec = FilterSpec::parse(
            DatasetKind::Airports,
            &params(&[("iataCode", " LHR "), ("limit", "50"), ("offset", "100")]),
        );
        assert_eq!(spec.code.as_deref(), Some("lhr"));
        assert_eq!(spec.page.limit(), 50);
        assert_eq!(spec.page.offset(), 100);
    }

    #[test]
    fn test_overflowing_pagination_saturates() {
        let spec = FilterSpec::parse(
            DatasetKind::Airports,
            &params(&[("limit", "99999999999999999999"), ("offset", "-99999999999999999999")]),
        );
        assert_eq!(spec.page.limit(), MAX_LIMIT);
        assert_eq!(spec.page.offset(), 0);

        let spec = FilterSpec::parse(DatasetKind::Airports, &params(&[("limit", "-99999999999999999999")]));
        assert_eq!(spec.page.limit(), 1);

        let spec = FilterSpec::parse(DatasetKind::Airports, &params(&[("limit", "9999x")]));
        assert_eq!(spec.page.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_code_alias() {
        let spec = FilterSpec::parse(DatasetKind::Airlines, &params(&[("code", "BA")]));
        assert_eq!(spec.code.as_deref(), Some("ba"));
    }

    #[test]
    fn test_catalog_filters() {
        let spec = FilterSpec::parse(
            DatasetKind::Airports,
            &params(&[
                ("city", "New  York"),
                ("minLatitude", "40"),
                ("maxLatitude", "41.5"),
                ("hasTimeZone", "yes"),
            ]),
        );

        assert_eq!(
            spec.text,
            vec![TextPredicate {
                field: "city.name".into(),
                needle: "new york".into()
            }]
        );
        assert_eq!(
            spec.ranges,
            vec![RangePredicate {
                field: "latitude".into(),
                min: Some(40.0),
                max: Some(41.5)
            }]
        );
        assert_eq!(
            spec.presence,
            vec![PresencePredicate {
                field: "timeZone".into(),
                present: true
            }]
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let raw = params(&[("iataCode", "L"), ("colour", "blue"), ("minSeats", "100")]);
        let spec = FilterSpec::parse(DatasetKind::Airports, &raw);

        assert!(spec.ranges.is_empty());
        assert_eq!(unrecognized_keys(DatasetKind::Airports, &raw), vec!["colour", "minSeats"]);
        assert!(unrecognized_keys(DatasetKind::Aircraft, &raw).contains(&"colour"));
        assert!(!unrecognized_keys(DatasetKind::Aircraft, &raw).contains(&"minSeats"));
    }

    #[test]
    fn test_unparsable_values_dropped() {
        let spec = FilterSpec::parse(
            DatasetKind::Aircraft,
            &params(&[
                ("minSeats", "lots"),
                ("hasRange", "maybe"),
                ("limit", "ten"),
                ("offset", "-4"),
            ]),
        );
        assert!(spec.ranges.is_empty());
        assert!(spec.presence.is_empty());
        assert_eq!(spec.page.limit(), DEFAULT_LIMIT);
        assert_eq!(spec.page.offset(), 0);
    }

    #[test]
    fn test_sort_requires_known_field() {
        let spec = FilterSpec::parse(
            DatasetKind::Airports,
            &params(&[("sortBy", "name"), ("sortOrder", "DESC")]),
        );
        assert_eq!(spec.sort, Some(SortSpec::desc("name")));

        let spec = FilterSpec::parse(DatasetKind::Airports, &params(&[("sortBy", "runways")]));
        assert_eq!(spec.sort, None);

        let spec = FilterSpec::parse(DatasetKind::Airports, &params(&[("sortBy", "city")]));
        assert_eq!(spec.sort, None);
    }

    #[test]
    fn test_match_all_flag() {
        let spec = FilterSpec::parse(DatasetKind::Airlines, &params(&[("all", "true")]));
        assert!(spec.match_all);
        assert!(spec.is_constrained());

        let spec = FilterSpec::parse(DatasetKind::Airlines, &params(&[("limit", "10")]));
        assert!(!spec.is_constrained());
    }

    #[test]
    fn test_blank_code_ignored() {
        let spec = FilterSpec::parse(DatasetKind::Airports, &params(&[("iataCode", "  ")]));
        assert_eq!(spec.code, None);
    }
}
