//! Declaration visibility
//!
//! Visibility decides whether a node's documentation block is produced
//! at all. It is read from the node's own modifiers and doc tags; a
//! variable declaration also inherits the tags of its statement.

use crate::config::DocConfig;
use crate::syntax::{Accessibility, NodeRef, SyntaxKind};
use serde::{Deserialize, Serialize};

/// Symbol visibility level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    /// Documented unconditionally
    #[default]
    Public,

    /// `protected` members, documented like public ones
    Protected,

    /// `private`, `#name`, `@private` or `@hidden`
    Private,

    /// Marked `@internal`
    Internal,
}

impl Visibility {
    /// Visibility of a node
    pub fn of(node: NodeRef<'_>) -> Self {
        let modifiers = node.modifiers();
        if modifiers.private_name || modifiers.accessibility == Some(Accessibility::Private) {
            return Visibility::Private;
        }

        let docs = node.doc().into_iter().chain(
            node.parent()
                .filter(|_| node.kind() == SyntaxKind::VariableDeclaration)
                .and_then(|statement| statement.doc()),
        );
        let mut visibility = match modifiers.accessibility {
            Some(Accessibility::Protected) => Visibility::Protected,
            _ => Visibility::Public,
        };
        for doc in docs {
            if doc.is_private() {
                return Visibility::Private;
            }
            if doc.is_internal() {
                visibility = Visibility::Internal;
            }
        }
        visibility
    }

    /// Check if this is publicly visible
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public | Visibility::Protected)
    }

    /// Whether blocks of this visibility are produced under `config`
    pub fn should_document(&self, config: &DocConfig) -> bool {
        match self {
            Visibility::Public | Visibility::Protected => true,
            Visibility::Private => config.document_private,
            Visibility::Internal => config.document_internal,
        }
    }

    /// Get display string
    pub fn display(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
            Visibility::Internal => "internal",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::parse_tree;

    fn visibility_of(source: &str, name: &str) -> Visibility {
        let tree = parse_tree("/project/src/a.ts", source);
        let node = tree
            .nodes()
            .find(|n| n.name() == Some(name))
            .unwrap_or_else(|| panic!("no node named {}", name));
        Visibility::of(node)
    }

    #[test]
    fn test_modifiers() {
        let source = r#"
class C {
    a = 1;
    private b = 2;
    protected c = 3;
    #d = 4;
}
"#;
        assert_eq!(visibility_of(source, "a"), Visibility::Public);
        assert_eq!(visibility_of(source, "b"), Visibility::Private);
        assert_eq!(visibility_of(source, "c"), Visibility::Protected);
        assert_eq!(visibility_of(source, "#d"), Visibility::Private);
    }

    #[test]
    fn test_doc_tags() {
        let source = r#"
/** @internal */
export function helper() {}
/** @hidden */
export type Secret = string;
/** @private */
export const key = "k";
"#;
        assert_eq!(visibility_of(source, "helper"), Visibility::Internal);
        assert_eq!(visibility_of(source, "Secret"), Visibility::Private);
        assert_eq!(visibility_of(source, "key"), Visibility::Private);
    }

    #[test]
    fn test_should_document() {
        let mut config = DocConfig::default();
        assert!(Visibility::Protected.should_document(&config));
        assert!(!Visibility::Private.should_document(&config));
        assert!(!Visibility::Internal.should_document(&config));

        config.document_private = true;
        assert!(Visibility::Private.should_document(&config));
        assert!(!Visibility::Internal.should_document(&config));
    }
}
