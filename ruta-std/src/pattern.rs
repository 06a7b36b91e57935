//! Path-template compilation and matching.
//!
//! A template is a sequence of literal text, `:name` parameters and `*`
//! wildcards:
//!
//! - literal text (including `/` separators) matches itself,
//! - `:name` captures one non-separator segment (at least one character),
//! - `*` greedily captures the remaining characters, across separators.
//!
//! Every compiled [`PathPattern`] owns its ordered parameter-name list.
//! Parameter lookup is keyed by the pattern instance, never by the template
//! text, so two routes registered from identical templates can never clobber
//! each other's captures.

use ruta_core::TemplateError;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Param(String),
    Wildcard,
}

/// A compiled path template: an acceptance test over normalized paths plus
/// the ordered list of parameter names the template captures.
#[derive(Debug, Clone)]
pub struct PathPattern {
    template: String,
    tokens: Vec<Token>,
    param_names: Vec<String>,
    allow_trailing_slash: bool,
}

impl PathPattern {
    /// Compile a template.
    ///
    /// With `allow_trailing_slash` (the router's `append_slash` policy) the
    /// matcher accepts exactly one optional trailing `/`; otherwise a trailing
    /// separator is not part of the match.
    pub fn compile(template: &str, allow_trailing_slash: bool) -> Result<Self, TemplateError> {
        if template.is_empty() {
            return Err(TemplateError::Empty);
        }

        let mut tokens = Vec::new();
        let mut param_names = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                ':' => {
                    let mut name = String::new();
                    while let Some(&(_, next)) = chars.peek() {
                        if next.is_ascii_alphanumeric() || next == '_' {
                            name.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    if name.is_empty() {
                        return Err(TemplateError::UnterminatedPlaceholder { position });
                    }
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    param_names.push(name.clone());
                    tokens.push(Token::Param(name));
                }
                '*' => {
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(Token::Wildcard);
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(Self {
            template: template.to_string(),
            tokens,
            param_names,
            allow_trailing_slash,
        })
    }

    /// The template this pattern was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The parameter names this pattern captures, in order of appearance.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Whether the pattern accepts `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.find_captures(path).is_some()
    }

    /// Extract this pattern's captures from `path`.
    ///
    /// Named parameters are keyed by their placeholder name; a wildcard
    /// capture is stored under `"*"`. Returns `None` when the path does not
    /// match.
    pub fn capture(&self, path: &str) -> Option<HashMap<String, String>> {
        let captures = self.find_captures(path)?;
        Some(
            captures
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Walk the token list over `path`, collecting `(name, value)` capture
    /// pairs in token order.
    fn find_captures<'s, 'p>(&'s self, path: &'p str) -> Option<Vec<(&'s str, &'p str)>> {
        let mut rest = path;
        let mut captures = Vec::new();
        let mut idx = 0;

        while idx < self.tokens.len() {
            match &self.tokens[idx] {
                Token::Literal(lit) => {
                    rest = rest.strip_prefix(lit.as_str())?;
                }
                Token::Param(name) => {
                    let end = rest.find('/').unwrap_or(rest.len());
                    if end == 0 {
                        return None;
                    }
                    captures.push((name.as_str(), &rest[..end]));
                    rest = &rest[end..];
                }
                Token::Wildcard => {
                    // Greedy to the end of the path; literal text after the
                    // wildcard anchors as a required suffix. A parameter after
                    // a wildcard can never capture anything.
                    let mut suffix = String::new();
                    for token in &self.tokens[idx + 1..] {
                        match token {
                            Token::Literal(lit) => suffix.push_str(lit),
                            Token::Param(_) | Token::Wildcard => return None,
                        }
                    }
                    if !rest.ends_with(suffix.as_str()) {
                        return None;
                    }
                    captures.push(("*", &rest[..rest.len() - suffix.len()]));
                    return self.finish(captures, "");
                }
            }
            idx += 1;
        }

        self.finish(captures, rest)
    }

    fn finish<'s, 'p>(
        &'s self,
        captures: Vec<(&'s str, &'p str)>,
        rest: &'p str,
    ) -> Option<Vec<(&'s str, &'p str)>> {
        if rest.is_empty() || (self.allow_trailing_slash && rest == "/") {
            Some(captures)
        } else {
            None
        }
    }
}
