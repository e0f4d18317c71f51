//! TypeScript output formatting.
//!
//! A small brace-depth formatter applied to every assembled declaration
//! before it is written. It normalizes indentation and rejects text with
//! unbalanced braces, which is how malformed assembly surfaces as an
//! error instead of a broken file. Options come from the `[formatter]`
//! config section and are passed through without interpretation by the
//! generator.

use crate::error::FormatError;
use serde::Deserialize;

/// Formatter options, forwarded opaquely from configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Spaces per indentation level.
    pub indent_width: usize,

    /// Ensure the output ends with a newline.
    pub insert_final_newline: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            insert_final_newline: true,
        }
    }
}

/// Brace-depth formatter for generated TypeScript.
#[derive(Debug)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    /// Create a formatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Re-indent the source by brace depth.
    ///
    /// Fails when braces are unbalanced. Idempotent: formatting already
    /// formatted text returns it unchanged.
    pub fn format(&self, source: &str) -> Result<String, FormatError> {
        let indent = " ".repeat(self.options.indent_width);
        let mut open_lines: Vec<usize> = Vec::new();
        let mut output = String::new();

        for (index, raw) in source.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.trim();

            if line.is_empty() {
                output.push('\n');
                continue;
            }

            let mut level = open_lines.len();
            if line.starts_with('}') {
                level = level.saturating_sub(1);
            }

            for c in code_chars(line) {
                match c {
                    '{' => open_lines.push(line_number),
                    '}' => {
                        if open_lines.pop().is_none() {
                            return Err(FormatError::UnexpectedBrace { line: line_number });
                        }
                    }
                    _ => {}
                }
            }

            for _ in 0..level {
                output.push_str(&indent);
            }
            output.push_str(line);
            output.push('\n');
        }

        if let Some(line) = open_lines.pop() {
            return Err(FormatError::UnclosedBrace { line });
        }

        if !self.options.insert_final_newline {
            while output.ends_with('\n') {
                output.pop();
            }
        }

        Ok(output)
    }
}

/// Iterate the characters of a line that count for brace balancing,
/// skipping line-comment tails and string literals.
fn code_chars(line: &str) -> impl Iterator<Item = char> + '_ {
    let mut in_string: Option<char> = None;
    let mut prev = '\0';
    let mut done = false;

    line.chars().filter_map(move |c| {
        if done {
            return None;
        }
        match in_string {
            Some(quote) => {
                if c == quote && prev != '\\' {
                    in_string = None;
                }
                prev = c;
                None
            }
            None => {
                if c == '/' && prev == '/' {
                    done = true;
                    return None;
                }
                if c == '"' || c == '\'' || c == '`' {
                    in_string = Some(c);
                    prev = c;
                    return None;
                }
                prev = c;
                Some(c)
            }
        }
    })
}
