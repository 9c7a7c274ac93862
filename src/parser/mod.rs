//! Target pattern parsing

mod pattern_parser;
mod token_parser_base;

pub use pattern_parser::{parse_database_name, parse_table_pattern};
