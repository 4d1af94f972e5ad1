//! Query parameters shared by every list endpoint

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::FilterError;

/// Comparison applied between a property and its filter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Equals
    #[default]
    Eq,
    /// Wildcard match
    Lk,
    /// Membership in a set
    In,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Lk => "lk",
            Operator::In => "in",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    /// Operator tokens are matched case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eq" => Ok(Operator::Eq),
            "lk" => Ok(Operator::Lk),
            "in" => Ok(Operator::In),
            _ => Err(FilterError::UnknownOperator(s.to_string())),
        }
    }
}

/// A `{property, operator, values}` constraint on a list query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Filtering {
    pub property: String,
    pub operator: Operator,
    pub values: Vec<String>,
}

impl Filtering {
    /// The zero value produced by an empty filter string
    pub fn is_empty(&self) -> bool {
        self.property.is_empty() && self.values.is_empty()
    }
}

/// Ordering requested for a list query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Sorting {
    pub property: String,
    pub descending: bool,
}

impl Sorting {
    pub fn is_empty(&self) -> bool {
        self.property.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

/// Filters, sort and paging for a single list call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RequestParameters {
    pub sorting: Sorting,
    pub filtering: Vec<Filtering>,
    pub pagination: Pagination,
}

impl RequestParameters {
    pub fn with_filter(&mut self, filter: Filtering) -> &mut Self {
        self.filtering.push(filter);
        self
    }

    pub fn with_page(&self, page: u32) -> Self {
        let mut params = self.clone();
        params.pagination.page = page;
        params
    }

    /// Render as API query pairs, e.g. `name:lk=web*`, `sort=name:desc`
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        for filter in self.filtering.iter().filter(|f| !f.is_empty()) {
            pairs.push((
                format!("{}:{}", filter.property, filter.operator),
                filter.values.join(","),
            ));
        }

        if !self.sorting.is_empty() {
            let direction = if self.sorting.descending { "desc" } else { "asc" };
            pairs.push((
                "sort".to_string(),
                format!("{}:{}", self.sorting.property, direction),
            ));
        }

        if self.pagination.per_page > 0 {
            pairs.push(("per_page".to_string(), self.pagination.per_page.to_string()));
        }
        if self.pagination.page > 0 {
            pairs.push(("page".to_string(), self.pagination.page.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn operator_parses_case_insensitively() {
        assert_eq!("eq".parse::<Operator>(), Ok(Operator::Eq));
        assert_eq!("LK".parse::<Operator>(), Ok(Operator::Lk));
        assert_eq!("In".parse::<Operator>(), Ok(Operator::In));
    }

    #[test]
    fn operator_rejects_unknown_token() {
        assert_eq!(
            "bogus".parse::<Operator>(),
            Err(FilterError::UnknownOperator("bogus".to_string()))
        );
    }

    #[test]
    fn query_pairs_render_filters_sort_and_paging() {
        let mut params = RequestParameters {
            sorting: Sorting {
                property: "name".to_string(),
                descending: true,
            },
            pagination: Pagination {
                page: 2,
                per_page: 50,
            },
            ..Default::default()
        };
        params.with_filter(Filtering {
            property: "id".to_string(),
            operator: Operator::In,
            values: vec!["1".to_string(), "2".to_string()],
        });

        assert_eq!(
            params.query_pairs(),
            vec![
                pair("id:in", "1,2"),
                pair("sort", "name:desc"),
                pair("per_page", "50"),
                pair("page", "2"),
            ]
        );
    }

    #[test]
    fn query_pairs_skip_defaults() {
        let mut params = RequestParameters::default();
        params.with_filter(Filtering::default());

        assert!(params.query_pairs().is_empty());
    }

    #[test]
    fn ascending_sort_is_explicit() {
        let params = RequestParameters {
            sorting: Sorting {
                property: "status".to_string(),
                descending: false,
            },
            ..Default::default()
        };

        assert_eq!(params.query_pairs(), vec![pair("sort", "status:asc")]);
    }
}
