//! normalize
//!
//! Reshaping the host's raw split arguments for the parser.
//!
//! # Design
//!
//! Hosts split the chat line on whitespace and hand over everything after
//! the command name. The two consumers want different shapes:
//!
//! - **Execution** wants the finished command line. Trailing empty tokens
//!   are whitespace artifacts and are stripped; a lone empty token is a
//!   bare command with no arguments at all.
//! - **Completion** wants the line as typed, anchored on the partial final
//!   token, which may legitimately be empty (cursor right after a space)
//!   and must never be stripped.
//!
//! Interior empty tokens are intentional empty arguments in both forms and
//! pass through untouched.

/// Arguments for a full execution: trailing empty tokens stripped.
pub fn execution_args(raw: &[String]) -> Vec<String> {
    let end = raw
        .iter()
        .rposition(|tok| !tok.is_empty())
        .map_or(0, |idx| idx + 1);
    raw[..end].to_vec()
}

/// Arguments for completion: the partial final token is preserved
/// verbatim, and empty input gains a single empty anchor token.
pub fn completion_args(raw: &[String]) -> Vec<String> {
    if raw.is_empty() {
        return vec![String::new()];
    }
    raw.to_vec()
}
