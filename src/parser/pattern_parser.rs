//! Token-based parsing of target pattern text
//!
//! ## Supported Syntax
//!
//! ```text
//! database.table
//! table
//! database.*
//! *
//! ```
//!
//! Each identifier may be bare, `[bracketed]` or `"double quoted"`. The parser
//! does not judge the shape of the parts; `*.table` parses and is rejected
//! later when the pattern is classified.

use sqlparser::tokenizer::Token;

use super::token_parser_base::TokenParser;
use crate::error::TargetError;
use crate::targets::{NamePart, UnresolvedName};

/// Parse a table pattern into its dot-separated parts.
pub fn parse_table_pattern(text: &str) -> Result<UnresolvedName, TargetError> {
    let syntax_error = |message: String| TargetError::PatternSyntaxError {
        pattern: text.to_string(),
        message,
    };

    let mut parser = TokenParser::new(text).map_err(|e| syntax_error(e.to_string()))?;
    parser.skip_whitespace();
    if parser.is_at_end() {
        return Err(syntax_error("empty pattern".to_string()));
    }

    let mut parts = Vec::new();
    loop {
        parser.skip_whitespace();
        if parser.expect_token(&Token::Mul).is_some() {
            parts.push(NamePart::Star);
        } else if let Some(ident) = parser.parse_identifier() {
            parts.push(NamePart::Ident(ident));
        } else {
            return Err(syntax_error(parser.describe_current()));
        }

        parser.skip_whitespace();
        if parser.is_at_end() {
            break;
        }
        if parser.expect_token(&Token::Period).is_none() {
            return Err(syntax_error(parser.describe_current()));
        }
    }

    Ok(UnresolvedName::new(parts))
}

/// Parse a database target: a single identifier, optionally delimited.
pub fn parse_database_name(text: &str) -> Result<String, TargetError> {
    let syntax_error = |message: String| TargetError::PatternSyntaxError {
        pattern: text.to_string(),
        message,
    };

    let mut parser = TokenParser::new(text).map_err(|e| syntax_error(e.to_string()))?;
    parser.skip_whitespace();
    let name = parser
        .parse_identifier()
        .ok_or_else(|| syntax_error(parser.describe_current()))?;
    parser.skip_whitespace();
    if !parser.is_at_end() {
        return Err(syntax_error(parser.describe_current()));
    }

    Ok(name)
}
