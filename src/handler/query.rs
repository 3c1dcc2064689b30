//! Query-string parsing for `GET /products`.
//!
//! `limit` and `offset` are reserved for paging; every other key must name one of
//! the fields of [`ProductFilter`]. When a key is repeated the first value wins and
//! later ones are ignored, for paging and filter keys alike.
//!
//! A `limit` or `offset` that is not a non-negative integer is rejected with
//! `400` instead of falling back to a default, and so is any key outside the
//! filter vocabulary.

use crate::handler::error::ApiError;
use crate::model::{Page, ProductFilter};

pub const LIMIT_KEY: &str = "limit";
pub const OFFSET_KEY: &str = "offset";

/// Filter and page extracted from a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub filter: ProductFilter,
    pub page: Page,
}

impl ListParams {
    /// Builds the parameters from decoded `(key, value)` pairs in query-string order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ApiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut limit: Option<String> = None;
        let mut offset: Option<String> = None;
        let mut filter = ProductFilter::default();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                LIMIT_KEY => &mut limit,
                OFFSET_KEY => &mut offset,
                "name" => &mut filter.name,
                "category" => &mut filter.category,
                "color" => &mut filter.color,
                unknown => return Err(ApiError::bad_request(format!("Unknown filter: {unknown}"))),
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        let page = Page {
            limit: parse_count(LIMIT_KEY, limit)?.unwrap_or(Page::DEFAULT_LIMIT),
            offset: parse_count(OFFSET_KEY, offset)?.unwrap_or(0),
        };
        Ok(Self { filter, page })
    }
}

fn parse_count(key: &str, raw: Option<String>) -> Result<Option<usize>, ApiError> {
    raw.map(|raw| {
        raw.trim()
            .parse::<usize>()
            .map_err(|_| ApiError::bad_request(format!("Invalid {key}: {raw}")))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::error::ApiErrorKind;

    fn parse(pairs: &[(&str, &str)]) -> Result<ListParams, ApiError> {
        ListParams::from_pairs(pairs.iter().map(|(k, v)| (*k, v.to_string())))
    }

    #[test]
    fn test_defaults_without_query() {
        let params = parse(&[]).unwrap();
        assert_eq!(params.page, Page { limit: 10, offset: 0 });
        assert!(params.filter.is_empty());
    }

    #[test]
    fn test_paging_and_first_value_wins() {
        let params = parse(&[
            ("limit", "5"),
            ("offset", "2"),
            ("color", "red"),
            ("color", "blue"),
        ])
        .unwrap();
        assert_eq!(params.page, Page { limit: 5, offset: 2 });
        assert_eq!(
            params.filter,
            ProductFilter {
                color: Some("red".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_repeated_limit_keeps_first() {
        let params = parse(&[("limit", "3"), ("limit", "50")]).unwrap();
        assert_eq!(params.page.limit, 3);
    }

    #[test]
    fn test_unknown_filter_is_client_fault() {
        let err = parse(&[("flavour", "mint")]).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::BadRequest);
        assert_eq!(err.message, "Unknown filter: flavour");
    }

    #[test]
    fn test_malformed_paging_is_client_fault() {
        for (key, value) in [("limit", "ten"), ("limit", "-1"), ("offset", "1.5")] {
            let err = parse(&[(key, value)]).unwrap_err();
            assert_eq!(err.kind, ApiErrorKind::BadRequest, "{key}={value}");
        }
    }
}
