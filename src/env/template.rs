//! Lazily rendered variable templates.
//!
//! A template is an ordered list of literal and variable-reference tokens,
//! parsed once and resolved against the environment at the point of use.
//! `$NAME` and `${NAME}` reference variables, `$$` escapes a dollar sign.
//! Unknown variables render as the empty string; only substitution cycles
//! are an error.

use std::fmt;

use crate::env::{Environment, Value};
use crate::error::{Result, ToolsmithError};

/// Expansion recursion limit; exceeding it means a reference cycle.
const MAX_DEPTH: usize = 16;

/// One parsed template token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text copied verbatim into the rendered output.
    Literal(String),
    /// Reference to a construction variable, resolved at render time.
    Var(String),
}

/// A parsed template with its original source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
}

impl Template {
    /// Parse `source` into tokens.
    ///
    /// Parsing is total: a lone `$`, or a `${` without a closing brace,
    /// stays in the output as literal text.
    pub fn parse(source: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                literal.push(c);
                continue;
            }
            match chars.peek() {
                Some('$') => {
                    chars.next();
                    literal.push('$');
                }
                Some('{') => {
                    chars.next();
                    let mut name = String::new();
                    let mut closed = false;
                    for n in chars.by_ref() {
                        if n == '}' {
                            closed = true;
                            break;
                        }
                        name.push(n);
                    }
                    if closed && is_var_name(&name) {
                        if !literal.is_empty() {
                            tokens.push(Token::Literal(std::mem::take(&mut literal)));
                        }
                        tokens.push(Token::Var(name));
                    } else {
                        literal.push_str("${");
                        literal.push_str(&name);
                        if closed {
                            literal.push('}');
                        }
                    }
                }
                Some(&next) if next.is_ascii_alphanumeric() || next == '_' => {
                    let mut name = String::new();
                    while let Some(&n) = chars.peek() {
                        if n.is_ascii_alphanumeric() || n == '_' {
                            name.push(n);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(Token::Var(name));
                }
                _ => literal.push('$'),
            }
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Self {
            source: source.to_string(),
            tokens,
        }
    }

    /// The original template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Render against `env`, resolving variable references at this moment.
    pub fn render(&self, env: &Environment) -> Result<String> {
        self.render_depth(env, 0)
    }

    pub(crate) fn render_depth(&self, env: &Environment, depth: usize) -> Result<String> {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Var(name) => out.push_str(&resolve_var(env, name, depth)?),
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Resolve one variable reference to its rendered string.
///
/// Missing variables resolve to the empty string. Strings and flag lists may
/// themselves carry references, so they are re-parsed one level deeper.
pub(crate) fn resolve_var(env: &Environment, name: &str, depth: usize) -> Result<String> {
    if depth >= MAX_DEPTH {
        return Err(ToolsmithError::Template(format!(
            "substitution loop while expanding '${}'",
            name
        )));
    }
    match env.get(name) {
        None => Ok(String::new()),
        Some(Value::Str(s)) => Template::parse(s).render_depth(env, depth + 1),
        Some(Value::Flags(flags)) => Template::parse(&flags.to_string()).render_depth(env, depth + 1),
        Some(Value::List(items)) => Ok(items.join(" ")),
        Some(Value::Template(t)) => t.render_depth(env, depth + 1),
        Some(Value::Computed(f)) => f(env),
    }
}

fn is_var_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
