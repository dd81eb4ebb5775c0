//! Prompt templates with named `{placeholder}` substitution.
//!
//! A [`PromptTemplate`] is an ordered sequence of (role, template text) pairs.
//! Formatting substitutes every placeholder from a caller-supplied variable
//! map and produces a message sequence ready for a chat completion request.
//! `{{` and `}}` render literal braces.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::{Message, Role};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// One or more placeholders referenced by the template were not supplied.
    /// Names are sorted and deduplicated.
    #[error("missing template variables: {}", .0.join(", "))]
    MissingVariables(Vec<String>),
}

/// One templated message within a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub role: Role,
    pub template: String,
}

/// An ordered prompt template. Immutable after construction; formatting is a
/// pure function of the template and the supplied variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    messages: Vec<MessageTemplate>,
}

impl PromptTemplate {
    pub fn from_messages<S: Into<String>>(messages: Vec<(Role, S)>) -> Self {
        Self {
            messages: messages
                .into_iter()
                .map(|(role, template)| MessageTemplate {
                    role,
                    template: template.into(),
                })
                .collect(),
        }
    }

    pub fn messages(&self) -> &[MessageTemplate] {
        &self.messages
    }

    /// Every placeholder name referenced anywhere in the template.
    pub fn required_variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        for message in &self.messages {
            scan(&message.template, |name| {
                names.insert(name.to_string());
            });
        }
        names
    }

    /// Substitute every placeholder and produce the message sequence.
    ///
    /// Fails with [`TemplateError::MissingVariables`] listing every absent
    /// placeholder. Variables supplied but not referenced are ignored.
    pub fn format(
        &self,
        variables: &HashMap<String, String>,
    ) -> Result<Vec<Message>, TemplateError> {
        let missing: BTreeSet<String> = self
            .required_variables()
            .into_iter()
            .filter(|name| !variables.contains_key(name))
            .collect();
        if !missing.is_empty() {
            return Err(TemplateError::MissingVariables(
                missing.into_iter().collect(),
            ));
        }

        Ok(self
            .messages
            .iter()
            .map(|message| Message::new(message.role, render(&message.template, variables)))
            .collect())
    }
}

/// Walk a template, invoking `on_placeholder` for each `{name}` found.
/// `{{` and `}}` are escapes and do not contain placeholders; an empty
/// `{}` is not a placeholder either.
fn scan(template: &str, mut on_placeholder: impl FnMut(&str)) {
    let mut chars = template.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
            }
            '{' => {
                let mut end = None;
                for (i, c) in chars.by_ref() {
                    if c == '}' {
                        end = Some(i);
                        break;
                    }
                }
                // Unterminated braces and empty `{}` are literal text.
                if let Some(end) = end {
                    let name = &template[start + 1..end];
                    if !name.is_empty() {
                        on_placeholder(name);
                    }
                }
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
            }
            _ => {}
        }
    }
}

/// Render a single template text. Callers must have verified that every
/// referenced placeholder is present in `variables`.
fn render(template: &str, variables: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut end = None;
                for (i, c) in chars.by_ref() {
                    if c == '}' {
                        end = Some(i);
                        break;
                    }
                }
                match end {
                    Some(end) => {
                        let name = &template[start + 1..end];
                        match variables.get(name) {
                            Some(value) => out.push_str(value),
                            None => {
                                out.push('{');
                                out.push_str(name);
                                out.push('}');
                            }
                        }
                    }
                    None => {
                        out.push_str(&template[start..]);
                        break;
                    }
                }
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                out.push('}');
            }
            _ => out.push(c),
        }
    }
    out
}
