//! complete
//!
//! Tab-completion candidates from the clap command model.
//!
//! # Design
//!
//! Game hosts ask for completions on every keystroke, against whatever the
//! requester has typed so far. Candidates are derived from the built clap
//! `Command` by introspection: long flags, subcommand names and visible
//! aliases, and the declared possible values of whichever option or
//! positional the cursor sits on. Both `--flag value` and `--flag=value`
//! forms complete their value.
//!
//! Declared values only cover what is known at compile time. For values
//! that live in host state (world names, online players) the caller
//! supplies a [`LiveCandidates`] source, queried per call with the
//! pending argument's id; its names are merged with the declared set.
//!
//! Candidates are returned as **suffixes** relative to the partial final
//! token; the binding concatenates them back so the host can substitute
//! each result as the full next token. Anything unknowable from the model
//! (dynamic values with no declared set) simply yields no candidates;
//! completion is best-effort and never errors.

use clap::{Arg, ArgAction, Command};

/// Per-call source of completion names computed from host state, keyed
/// by the pending argument's id.
pub type LiveCandidates<'a> = &'a dyn Fn(&str) -> Option<Vec<String>>;

/// Derive completion suffixes for the partial last token of `args`.
///
/// `args` must be in completion form (non-empty, final token partial).
/// The command is built for introspection as a side effect.
pub fn candidates(cmd: &mut Command, args: &[String], live: LiveCandidates<'_>) -> Vec<String> {
    let Some((partial, before)) = args.split_last() else {
        return Vec::new();
    };

    cmd.build();

    // Descend into subcommands named by the already-typed tokens. A
    // token consumed as a value-taking flag's value never matches, even
    // when it spells a subcommand name.
    let mut current: &Command = cmd;
    let mut level_start = 0;
    let mut idx = 0;
    while idx < before.len() {
        let tok = &before[idx];
        if let Some(name) = tok.strip_prefix("--") {
            if !name.contains('=') {
                if let Some(arg) = long_arg(current, name) {
                    if takes_value(arg) {
                        idx += 1;
                    }
                }
            }
        } else if let Some(sub) = current.find_subcommand(tok) {
            current = sub;
            level_start = idx + 1;
        }
        idx += 1;
    }
    let level = &before[level_start..];

    // Cursor on the value of a `--flag value` pair?
    if let Some(prev) = level.last() {
        if let Some(name) = prev.strip_prefix("--") {
            if !name.contains('=') {
                if let Some(arg) = long_arg(current, name) {
                    if takes_value(arg) {
                        return value_suffixes(arg, partial, live);
                    }
                }
            }
        }
    }

    // Cursor inside a `--flag=value` token?
    if let Some(rest) = partial.strip_prefix("--") {
        if let Some((name, typed)) = rest.split_once('=') {
            return match long_arg(current, name) {
                Some(arg) if takes_value(arg) => value_suffixes(arg, typed, live),
                _ => Vec::new(),
            };
        }
    }

    // Cursor on a flag: complete long flag names.
    if partial.starts_with('-') {
        return current
            .get_arguments()
            .filter(|arg| !arg.is_hide_set())
            .filter_map(|arg| arg.get_long())
            .map(|long| format!("--{long}"))
            .filter_map(|flag| suffix_of(&flag, partial))
            .collect();
    }

    // Cursor on a bare word: subcommands first, then the pending
    // positional's declared values.
    let mut out: Vec<String> = current
        .get_subcommands()
        .filter(|sub| !sub.is_hide_set())
        .flat_map(|sub| {
            std::iter::once(sub.get_name())
                .chain(sub.get_visible_aliases())
                .collect::<Vec<_>>()
        })
        .filter_map(|name| suffix_of(name, partial))
        .collect();

    if let Some(arg) = pending_positional(current, level) {
        out.extend(value_suffixes(arg, partial, live));
    }

    out
}

/// Find an argument by its long flag name.
fn long_arg<'a>(cmd: &'a Command, name: &str) -> Option<&'a Arg> {
    cmd.get_arguments().find(|arg| arg.get_long() == Some(name))
}

/// Whether an argument consumes a value token.
fn takes_value(arg: &Arg) -> bool {
    matches!(arg.get_action(), ArgAction::Set | ArgAction::Append)
}

/// Declared and live values of `arg` extending `typed`, as suffixes.
fn value_suffixes(arg: &Arg, typed: &str, live: LiveCandidates<'_>) -> Vec<String> {
    let mut names: Vec<String> = arg
        .get_possible_values()
        .iter()
        .filter(|value| !value.is_hide_set())
        .map(|value| value.get_name().to_string())
        .collect();

    if let Some(computed) = live(arg.get_id().as_str()) {
        names.extend(computed);
    }

    names
        .iter()
        .filter_map(|name| suffix_of(name, typed))
        .collect()
}

/// The first positional not yet consumed by the tokens at this level.
fn pending_positional<'a>(cmd: &'a Command, level: &[String]) -> Option<&'a Arg> {
    let mut consumed = 0;
    let mut toks = level.iter();
    while let Some(tok) = toks.next() {
        if let Some(name) = tok.strip_prefix("--") {
            // A value-taking flag eats the next token.
            if !name.contains('=') {
                if let Some(arg) = long_arg(cmd, name) {
                    if takes_value(arg) {
                        toks.next();
                    }
                }
            }
        } else if !tok.starts_with('-') {
            consumed += 1;
        }
    }
    cmd.get_positionals().nth(consumed)
}

/// `candidate` minus the `partial` prefix, or `None` when it is not a
/// strict extension of what was typed.
fn suffix_of(candidate: &str, partial: &str) -> Option<String> {
    match candidate.strip_prefix(partial) {
        Some("") => None,
        Some(rest) => Some(rest.to_string()),
        None => None,
    }
}
