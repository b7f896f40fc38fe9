//! Script parser
//!
//! Converts raw script text into a `CommandScript`, one command per
//! well-formed line. Recovery policy is log-and-skip, uniformly: an
//! unrecognized keyword or a malformed field drops that line with a
//! warning and never aborts the rest of the parse.

use std::path::Path;

use crate::command::{Command, CommandScript};
use crate::errors::{Result, ScriptError};

/// Length of the textual prefix on MOVE's optional start-position token.
///
/// The prefix is stripped before float-parsing the remainder. The exact
/// offset is a compatibility contract with existing script files; do not
/// change it.
pub const MOVE_START_PREFIX_LEN: usize = 12;

/// Non-fatal diagnostic for one dropped script line
#[derive(Debug, Clone, PartialEq)]
pub enum ParseWarning {
    /// First token did not match any known command keyword
    UnknownKeyword { line: usize, keyword: String },
    /// Known keyword, but the line's fields failed arity or type checks
    MalformedCommand {
        line: usize,
        keyword: String,
        reason: String,
    },
}

impl ParseWarning {
    /// 1-based source line number this warning refers to
    pub fn line(&self) -> usize {
        match self {
            ParseWarning::UnknownKeyword { line, .. } => *line,
            ParseWarning::MalformedCommand { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::UnknownKeyword { line, keyword } => {
                write!(f, "line {}: unrecognized command: {}", line, keyword)
            }
            ParseWarning::MalformedCommand {
                line,
                keyword,
                reason,
            } => {
                write!(f, "line {}: malformed {} command: {}", line, keyword, reason)
            }
        }
    }
}

/// Result of parsing one script text
///
/// Parsing never fails as a whole; bad lines surface here as warnings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedScript {
    /// Commands from well-formed lines, in source order
    pub script: CommandScript,
    /// One warning per dropped line
    pub warnings: Vec<ParseWarning>,
}

/// Parse script text into a `CommandScript`
///
/// - Lines are split on `\n`; blank lines produce nothing and shift nothing.
/// - Fields within a line are split on whitespace (space, tab, `\r`, `\n`
///   are uniform separators).
/// - The first token selects the command by exact, case-sensitive match.
/// - Dropped lines are reported in `warnings` and via `tracing::warn!`;
///   surrounding lines still parse.
pub fn parse_script(text: &str) -> ParsedScript {
    let mut script = CommandScript::new();
    let mut warnings = Vec::new();

    for (idx, raw_line) in text.split('\n').enumerate() {
        let line = idx + 1;
        if raw_line.trim().is_empty() {
            continue; // Skip empty lines
        }

        let tokens: Vec<&str> = raw_line.split_whitespace().collect();
        let keyword = tokens[0];

        let parsed = match keyword {
            "CREATE" => parse_create(&tokens),
            "SETOBJCELL" => parse_set_obj_cell(&tokens),
            "MOVE" => parse_move(&tokens),
            "DESTROY" => parse_destroy(&tokens),
            "DYNUPDATECELL" => parse_dyn_update_cell(&tokens),
            _ => {
                tracing::warn!(line, keyword, "unrecognized command");
                warnings.push(ParseWarning::UnknownKeyword {
                    line,
                    keyword: keyword.to_string(),
                });
                continue;
            }
        };

        match parsed {
            Ok(command) => script.push(command),
            Err(reason) => {
                tracing::warn!(line, keyword, %reason, "malformed command, skipping line");
                warnings.push(ParseWarning::MalformedCommand {
                    line,
                    keyword: keyword.to_string(),
                    reason,
                });
            }
        }
    }

    ParsedScript { script, warnings }
}

/// Read and parse a script file
///
/// # Errors
///
/// Returns `ScriptError::Io` if the file cannot be read. Parse problems are
/// never errors; they surface as warnings on the returned `ParsedScript`.
pub fn parse_script_file(path: &Path) -> Result<ParsedScript> {
    let text = std::fs::read_to_string(path).map_err(|e| ScriptError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(parse_script(&text))
}

/// Parse a float field, rejecting non-finite values
fn parse_f32(token: &str, field: &str) -> std::result::Result<f32, String> {
    let value: f32 = token
        .parse()
        .map_err(|_| format!("field '{}' is not a number: {}", field, token))?;
    if !value.is_finite() {
        return Err(format!("field '{}' is not finite: {}", field, token));
    }
    Ok(value)
}

/// Check that the token count (excluding the keyword) matches exactly
fn expect_fields(tokens: &[&str], expected: usize) -> std::result::Result<(), String> {
    let got = tokens.len() - 1;
    if got != expected {
        return Err(format!("expected {} fields, got {}", expected, got));
    }
    Ok(())
}

// CREATE <import_name> <display_name> <x> <y> <z>
fn parse_create(tokens: &[&str]) -> std::result::Result<Command, String> {
    expect_fields(tokens, 5)?;
    Ok(Command::Create {
        import_name: tokens[1].to_string(),
        display_name: tokens[2].to_string(),
        x: parse_f32(tokens[3], "x")?,
        y: parse_f32(tokens[4], "y")?,
        z: parse_f32(tokens[5], "z")?,
    })
}

// SETOBJCELL <object_name> <cell_name> <formula>
fn parse_set_obj_cell(tokens: &[&str]) -> std::result::Result<Command, String> {
    expect_fields(tokens, 3)?;
    Ok(Command::SetObjCell {
        object_name: tokens[1].to_string(),
        cell_name: tokens[2].to_string(),
        // Formula is retained as opaque text, not evaluated
        formula: tokens[3].to_string(),
    })
}

// MOVE <object_name> <path_name> <duration> [<prefix:start_position>]
fn parse_move(tokens: &[&str]) -> std::result::Result<Command, String> {
    let got = tokens.len() - 1;
    if got != 3 && got != 4 {
        return Err(format!("expected 3 or 4 fields, got {}", got));
    }

    let start_position = if got == 4 {
        Some(parse_move_start(tokens[4])?)
    } else {
        None
    };

    Ok(Command::Move {
        object_name: tokens[1].to_string(),
        path_name: tokens[2].to_string(),
        duration_secs: parse_f32(tokens[3], "duration")?,
        start_position,
    })
}

/// Strip the fixed-length prefix from MOVE's optional token and float-parse
/// the remainder
fn parse_move_start(token: &str) -> std::result::Result<f32, String> {
    let remainder = token.get(MOVE_START_PREFIX_LEN..).ok_or_else(|| {
        format!(
            "start position token shorter than {}-character prefix: {}",
            MOVE_START_PREFIX_LEN, token
        )
    })?;
    if remainder.is_empty() {
        return Err(format!(
            "start position token has no value after prefix: {}",
            token
        ));
    }
    parse_f32(remainder, "start_position")
}

// DESTROY <object_name>
fn parse_destroy(tokens: &[&str]) -> std::result::Result<Command, String> {
    expect_fields(tokens, 1)?;
    Ok(Command::Destroy {
        object_name: tokens[1].to_string(),
    })
}

// DYNUPDATECELL <object_name> <cell_name> <duration> <start> <end> [<unit>]
fn parse_dyn_update_cell(tokens: &[&str]) -> std::result::Result<Command, String> {
    let got = tokens.len() - 1;
    if got != 5 && got != 6 {
        return Err(format!("expected 5 or 6 fields, got {}", got));
    }

    Ok(Command::DynUpdateCell {
        object_name: tokens[1].to_string(),
        cell_name: tokens[2].to_string(),
        duration_secs: parse_f32(tokens[3], "duration")?,
        start_value: parse_f32(tokens[4], "start_value")?,
        end_value: parse_f32(tokens[5], "end_value")?,
        // Absent unit is the explicit "no unit" marker
        unit: tokens.get(6).map(|u| u.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_start_prefix_strip() {
        // "offsetvalue:" is exactly 12 characters
        assert_eq!(parse_move_start("offsetvalue:0.75"), Ok(0.75));
    }

    #[test]
    fn test_move_start_token_too_short() {
        assert!(parse_move_start("short").is_err());
        // Exactly the prefix, no value
        assert!(parse_move_start("offsetvalue:").is_err());
    }

    #[test]
    fn test_parse_f32_rejects_non_finite() {
        assert!(parse_f32("NaN", "x").is_err());
        assert!(parse_f32("inf", "x").is_err());
        assert!(parse_f32("-inf", "x").is_err());
        assert_eq!(parse_f32("-2.5", "x"), Ok(-2.5));
    }

    #[test]
    fn test_keyword_match_is_case_sensitive() {
        let parsed = parse_script("create box box1 1 2 3");
        assert!(parsed.script.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
        match &parsed.warnings[0] {
            ParseWarning::UnknownKeyword { keyword, .. } => assert_eq!(keyword, "create"),
            other => panic!("Wrong warning: {:?}", other),
        }
    }

    #[test]
    fn test_tabs_and_carriage_returns_are_separators() {
        let parsed = parse_script("CREATE\tbox box1\t1 2 3\r");
        assert!(parsed.warnings.is_empty());
        assert_eq!(parsed.script.len(), 1);
    }

    #[test]
    fn test_extra_trailing_tokens_are_malformed() {
        let parsed = parse_script("DESTROY box1 extra");
        assert!(parsed.script.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
        match &parsed.warnings[0] {
            ParseWarning::MalformedCommand { keyword, .. } => assert_eq!(keyword, "DESTROY"),
            other => panic!("Wrong warning: {:?}", other),
        }
    }

    #[test]
    fn test_warning_carries_source_line_number() {
        let parsed = parse_script("\n\nBOGUS x\n");
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].line(), 3);
    }
}
