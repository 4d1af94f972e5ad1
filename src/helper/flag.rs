//! Translation of `--filter` / `--sort` flag strings into request parameters
//!
//! Filter grammar: `property[:operator]=value[,value...]`, e.g. `name:eq=foo`,
//! `name=foo*` (inferred `lk`) or `id=1,2,3` (inferred `in`).
//! Sort grammar: `property[:desc]`.

use serde::Serialize;

use crate::api::params::{Filtering, Operator, Pagination, RequestParameters, Sorting};
use crate::errors::{FilterError, InvalidFlagValue};

pub const FILTER_FLAG: &str = "filter";

/// A flag value coerced to the narrowest matching type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InferredValue {
    Int(i64),
    Bool(bool),
    Str(String),
}

/// Integer first, then boolean, otherwise the input unchanged
pub fn infer_type(flag: &str) -> InferredValue {
    if let Ok(i) = flag.parse::<i64>() {
        return InferredValue::Int(i);
    }

    if let Some(b) = parse_bool(flag) {
        return InferredValue::Bool(b);
    }

    InferredValue::Str(flag.to_string())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Comma wins over asterisk; anything else is an equality match
pub fn infer_operator(value: &str) -> Operator {
    if value.contains(',') {
        return Operator::In;
    }
    if value.contains('*') {
        return Operator::Lk;
    }

    Operator::Eq
}

/// Single-value filter for dedicated flags such as `--state`. The value is not
/// split on commas.
pub fn filtering_infer_operator(property: &str, value: &str) -> Filtering {
    Filtering {
        property: property.to_string(),
        operator: infer_operator(value),
        values: vec![value.to_string()],
    }
}

/// Parse one `--filter` value. An empty string yields the zero value.
pub fn parse_filter(filter: &str) -> Result<Filtering, FilterError> {
    if filter.is_empty() {
        return Ok(Filtering::default());
    }

    // Every `=` splits, so `a=b=c` has no single value part
    let kv: Vec<&str> = filter.split('=').collect();
    if kv.len() != 2 || kv[1].is_empty() {
        return Err(FilterError::MissingValue);
    }
    let (lhs, rhs) = (kv[0], kv[1]);

    let property_operator: Vec<&str> = lhs.split(':').collect();
    let property = property_operator[0];
    if property.is_empty() {
        return Err(FilterError::MissingProperty);
    }

    let operator = match property_operator.as_slice() {
        [_] => infer_operator(rhs),
        [_, token] if !token.is_empty() => token.parse()?,
        _ => return Err(FilterError::MissingOperator),
    };

    let values = rhs.split(',').map(|v| v.trim().to_string()).collect();

    Ok(Filtering {
        property: property.to_string(),
        operator,
        values,
    })
}

/// Parse every `--filter` occurrence in order, stopping at the first failure
pub fn parse_filters<S: AsRef<str>>(filters: &[S]) -> Result<Vec<Filtering>, InvalidFlagValue> {
    filters
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            parse_filter(raw).map_err(|err| InvalidFlagValue::new(FILTER_FLAG, raw, err))
        })
        .collect()
}

/// Parse a `--sort` value. Unrecognised directions sort ascending.
pub fn parse_sort(sort: &str) -> Sorting {
    if sort.is_empty() {
        return Sorting::default();
    }

    let mut parts = sort.split(':');
    let property = parts.next().unwrap_or_default().to_string();
    let descending = parts
        .next()
        .is_some_and(|direction| direction.eq_ignore_ascii_case("desc"));

    Sorting {
        property,
        descending,
    }
}

/// Build list parameters from the raw `--filter`, `--sort` and page size values
pub fn request_parameters<S: AsRef<str>>(
    filters: &[S],
    sort: &str,
    per_page: u32,
) -> Result<RequestParameters, InvalidFlagValue> {
    let filtering = parse_filters(filters)?;

    Ok(RequestParameters {
        sorting: parse_sort(sort),
        filtering,
        pagination: Pagination {
            page: 0,
            per_page,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtering(property: &str, operator: Operator, values: &[&str]) -> Filtering {
        Filtering {
            property: property.to_string(),
            operator,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn infer_type_prefers_int_then_bool() {
        assert_eq!(infer_type("123"), InferredValue::Int(123));
        assert_eq!(infer_type("-7"), InferredValue::Int(-7));
        assert_eq!(infer_type("1"), InferredValue::Int(1));
        assert_eq!(infer_type("true"), InferredValue::Bool(true));
        assert_eq!(infer_type("F"), InferredValue::Bool(false));
        assert_eq!(infer_type("abc"), InferredValue::Str("abc".to_string()));
        assert_eq!(infer_type("yes"), InferredValue::Str("yes".to_string()));
    }

    #[test]
    fn infer_operator_rules() {
        assert_eq!(infer_operator("foo"), Operator::Eq);
        assert_eq!(infer_operator("foo*"), Operator::Lk);
        assert_eq!(infer_operator("1,2"), Operator::In);
        assert_eq!(infer_operator("a*,b"), Operator::In);
    }

    #[test]
    fn filtering_infer_operator_keeps_value_whole() {
        assert_eq!(
            filtering_infer_operator("state", "Complete,Failed"),
            filtering("state", Operator::In, &["Complete,Failed"])
        );
        assert_eq!(
            filtering_infer_operator("state", "Comp*"),
            filtering("state", Operator::Lk, &["Comp*"])
        );
    }

    #[test]
    fn parse_filter_empty_is_zero_value() {
        assert_eq!(parse_filter(""), Ok(Filtering::default()));
    }

    #[test]
    fn parse_filter_inferred_eq() {
        assert_eq!(
            parse_filter("name=foo"),
            Ok(filtering("name", Operator::Eq, &["foo"]))
        );
    }

    #[test]
    fn parse_filter_inferred_lk_and_in() {
        assert_eq!(
            parse_filter("name=foo*"),
            Ok(filtering("name", Operator::Lk, &["foo*"]))
        );
        assert_eq!(
            parse_filter("id=1,2,3"),
            Ok(filtering("id", Operator::In, &["1", "2", "3"]))
        );
    }

    #[test]
    fn parse_filter_explicit_operator_trims_values() {
        assert_eq!(
            parse_filter("id:in=1, 2, 3"),
            Ok(filtering("id", Operator::In, &["1", "2", "3"]))
        );
        assert_eq!(
            parse_filter("name:EQ=foo"),
            Ok(filtering("name", Operator::Eq, &["foo"]))
        );
    }

    #[test]
    fn parse_filter_explicit_operator_overrides_inference() {
        assert_eq!(
            parse_filter("name:eq=a,a"),
            Ok(filtering("name", Operator::Eq, &["a", "a"]))
        );
    }

    #[test]
    fn parse_filter_missing_value() {
        assert_eq!(parse_filter("name="), Err(FilterError::MissingValue));
        assert_eq!(parse_filter("invalidfilter"), Err(FilterError::MissingValue));
        assert_eq!(parse_filter("a=b=c"), Err(FilterError::MissingValue));
    }

    #[test]
    fn parse_filter_missing_property() {
        assert_eq!(parse_filter(":eq=foo"), Err(FilterError::MissingProperty));
        assert_eq!(parse_filter("=foo"), Err(FilterError::MissingProperty));
    }

    #[test]
    fn parse_filter_missing_operator() {
        assert_eq!(parse_filter("name:=foo"), Err(FilterError::MissingOperator));
        assert_eq!(
            parse_filter("name:eq:lk=foo"),
            Err(FilterError::MissingOperator)
        );
    }

    #[test]
    fn parse_filter_unknown_operator() {
        assert_eq!(
            parse_filter("name:bogus=foo"),
            Err(FilterError::UnknownOperator("bogus".to_string()))
        );
    }

    #[test]
    fn parse_filters_preserves_order() {
        let parsed = parse_filters(&["name=foo", "id:in=1,2"]).unwrap();

        assert_eq!(
            parsed,
            vec![
                filtering("name", Operator::Eq, &["foo"]),
                filtering("id", Operator::In, &["1", "2"]),
            ]
        );
    }

    #[test]
    fn parse_filters_fails_fast_with_flag_context() {
        let err = parse_filters(&["name=foo", "invalidfilter", ":eq=x"]).unwrap_err();

        assert_eq!(
            err,
            InvalidFlagValue::new("filter", "invalidfilter", FilterError::MissingValue)
        );
    }

    #[test]
    fn parse_filters_empty_input() {
        let none: [&str; 0] = [];
        assert_eq!(parse_filters(&none), Ok(vec![]));
    }

    #[test]
    fn parse_sort_variants() {
        assert_eq!(parse_sort(""), Sorting::default());
        assert_eq!(
            parse_sort("name"),
            Sorting {
                property: "name".to_string(),
                descending: false
            }
        );
        assert!(parse_sort("name:desc").descending);
        assert!(parse_sort("name:DESC").descending);
        assert!(!parse_sort("name:asc").descending);
        assert!(!parse_sort("name:sideways").descending);
        assert_eq!(parse_sort("name:desc").property, "name");
    }

    #[test]
    fn request_parameters_combines_flags() {
        let params = request_parameters(&["name=web*"], "name:desc", 25).unwrap();

        assert_eq!(params.filtering, vec![filtering("name", Operator::Lk, &["web*"])]);
        assert!(params.sorting.descending);
        assert_eq!(params.pagination.per_page, 25);
    }

    #[test]
    fn request_parameters_propagates_filter_error() {
        let err = request_parameters(&["name:=x"], "", 0).unwrap_err();

        assert_eq!(err.source, FilterError::MissingOperator);
        assert_eq!(err.value, "name:=x");
    }
}
