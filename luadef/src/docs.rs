//! Doc-comment scan — a three-state line machine.
//!
//! `Searching` looks for a `/**` opener, `Collecting` accumulates the block
//! (rewriting the ` * ` prefix to `---` and picking up `@param` names in
//! encounter order), and `CheckingFunc` pairs the finished block with the
//! function declared on the very next line. Each registered function is
//! consumed at most once; whatever is left in `pending` after the scan has
//! no doc comment.

use crate::model::FunctionStub;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static RE_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/\*\*").unwrap());

static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@param\s+(\S+)").unwrap());

static RE_FUNC_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*static.*\b(applib_\w+)\(").unwrap());

/// The C comment prefix ` * ` replaced by the LuaLS `---` prefix.
static RE_COMMENT_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s\*\s?").unwrap());

enum State {
    Searching,
    Collecting,
    CheckingFunc,
}

#[derive(Default)]
struct Block {
    comments: Vec<String>,
    params: Vec<String>,
}

/// Scan `source` for doc-comment blocks and pair each with the registered
/// function declared immediately after it.
///
/// Matched functions are removed from `pending`; stubs are returned in
/// encounter order.
pub fn scan_docs(source: &str, pending: &mut HashMap<String, String>) -> Vec<FunctionStub> {
    let mut state = State::Searching;
    let mut block = Block::default();
    let mut stubs = Vec::new();

    for line in source.lines() {
        match state {
            State::Searching => {
                if let Some(open) = RE_OPEN.find(line) {
                    // The opener may carry text, `@param`s, or even the
                    // closing marker on the same line.
                    state = block.collect(line[open.end()..].trim_start(), true);
                }
            }
            State::Collecting => {
                state = block.collect(line, false);
            }
            State::CheckingFunc => {
                if let Some(caps) = RE_FUNC_DECL.captures(line) {
                    if let Some(exposed) = pending.remove(&caps[1]) {
                        stubs.push(FunctionStub {
                            exposed,
                            comments: std::mem::take(&mut block.comments),
                            params: std::mem::take(&mut block.params),
                        });
                    }
                }
                block = Block::default();
                state = State::Searching;
            }
        }
    }
    stubs
}

impl Block {
    /// Process one line of the comment body; returns the next state.
    ///
    /// A `*/` marker consumes only the text before it (including any
    /// `@param` there) and hands over to the declaration check. Empty
    /// remainders of the opening and closing lines are suppressed; an empty
    /// interior line still contributes a bare `---`.
    fn collect(&mut self, line: &str, opener: bool) -> State {
        let mut text = line;
        let mut suppress_empty = opener;
        let mut next = State::Collecting;
        if let Some(pos) = text.find("*/") {
            text = text[..pos].trim_end();
            suppress_empty = true;
            next = State::CheckingFunc;
        }
        if let Some(caps) = RE_PARAM.captures(text) {
            self.params.push(caps[1].to_string());
        }
        let stripped = RE_COMMENT_PREFIX
            .find(text)
            .map_or(text, |m| &text[m.end()..]);
        if stripped.is_empty() {
            if !suppress_empty {
                self.comments.push("---".to_string());
            }
        } else {
            self.comments.push(format!("--- {stripped}"));
        }
        next
    }
}
