//! Flag helpers shared by command handlers

pub mod flag;

pub use flag::{
    filtering_infer_operator, infer_operator, infer_type, parse_filter, parse_filters,
    parse_sort, request_parameters, InferredValue,
};
