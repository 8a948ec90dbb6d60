//! Pulls the code portion out of a model's free-text reply.
//!
//! Extraction never fails: a delimited reply without the start marker yields
//! an empty string, and a fence scan that finds no fence falls back to the
//! whole raw reply so the caller at least sees something.

use crate::translate::prompt::{CODE_END, CODE_START};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Keep lines between the `<CODE START>` / `<CODE END>` sentinels.
    Delimited,
    /// Keep lines inside the first markdown code fence; no fence means the
    /// raw reply is passed through unchanged.
    Fenced,
}

pub fn extract(strategy: ExtractionStrategy, raw: &str) -> String {
    match strategy {
        ExtractionStrategy::Delimited => extract_delimited(raw),
        ExtractionStrategy::Fenced => extract_fenced(raw),
    }
}

/// Accumulate the lines between the start and end markers, excluding the
/// marker lines themselves. A missing end marker keeps everything up to the
/// end of input; a missing start marker yields an empty string.
fn extract_delimited(raw: &str) -> String {
    let mut code = String::new();
    let mut in_code_block = false;

    for line in raw.lines() {
        if line.contains(CODE_START) {
            in_code_block = true;
            continue;
        }
        if line.contains(CODE_END) {
            break;
        }
        if in_code_block {
            code.push_str(line);
            code.push('\n');
        }
    }

    code
}

/// Scan for the first line opening a code fence (with or without a language
/// tag) and keep lines until the bare closing fence. If no fence ever opens,
/// return the raw reply unmodified.
fn extract_fenced(raw: &str) -> String {
    let mut lines = raw.lines();

    while let Some(line) = lines.next() {
        if line.starts_with("```") {
            let mut code = String::new();
            for code_line in lines.by_ref() {
                if code_line == "```" {
                    break;
                }
                code.push_str(code_line);
                code.push('\n');
            }
            return code;
        }
    }

    raw.to_string()
}
