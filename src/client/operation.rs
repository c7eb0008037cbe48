//! Operation type detection for GraphQL documents.
//!
//! Only the top level of the document is scanned: comments and string
//! literals are skipped, fragment definitions are ignored and selection
//! sets are stepped over by brace depth.

use serde::{Deserialize, Serialize};

/// The root type an operation runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }
}

/// A top level operation definition.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Definition {
    kind: OperationKind,
    name: Option<String>,
}

/// Kind of the operation that runs for `document`.
///
/// With `operation_name` the matching definition is used, otherwise the first
/// operation. `None` when no such operation exists.
#[must_use]
pub fn operation_kind(document: &str, operation_name: Option<&str>) -> Option<OperationKind> {
    let definitions = definitions(document);
    match operation_name {
        Some(name) => definitions
            .iter()
            .find(|def| def.name.as_deref() == Some(name))
            .map(|def| def.kind),
        None => definitions.first().map(|def| def.kind),
    }
}

fn definitions(document: &str) -> Vec<Definition> {
    let mut found = Vec::new();
    // Words seen at the top level since the last definition closed
    let mut header: Vec<String> = Vec::new();
    let mut word = String::new();
    let mut braces = 0usize;
    let mut parens = 0usize;
    let mut chars = document.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if braces == 0 && parens == 0 {
                word.push(c);
            }
            continue;
        }
        if !word.is_empty() {
            header.push(std::mem::take(&mut word));
        }

        match c {
            '#' => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
            }
            '"' => {
                let mut escaped = false;
                for skipped in chars.by_ref() {
                    match skipped {
                        '\\' if !escaped => escaped = true,
                        '"' if !escaped => break,
                        _ => escaped = false,
                    }
                }
            }
            '(' => parens += 1,
            ')' => parens = parens.saturating_sub(1),
            '{' => {
                if braces == 0 && parens == 0 {
                    let mut words = header.drain(..);
                    match words.next() {
                        // `{ ... }` shorthand
                        None => found.push(Definition {
                            kind: OperationKind::Query,
                            name: None,
                        }),
                        Some(keyword) => {
                            if let Some(kind) = OperationKind::from_keyword(&keyword) {
                                found.push(Definition {
                                    kind,
                                    name: words.next(),
                                });
                            }
                        }
                    }
                }
                braces += 1;
            }
            '}' => braces = braces.saturating_sub(1),
            _ => {}
        }
    }

    found
}
