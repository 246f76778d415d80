//! Declaration traversal
//!
//! The traveler is the third kind table. It walks a file from its root
//! and yields `(kind label, node)` for every documentable declaration:
//! top-level declarations, variable declarations and the contents of
//! namespaces. Its output feeds the symbol table and the manifest.

use crate::dispatch::{Fallback, KindMap};
use crate::syntax::{
    ListData, ModuleData, NodeRef, SourceFileData, SyntaxKind, VariableData, VariableStatementData,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref LINK_REGEX: Regex = Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap();
}

/// What the traveler learns about one node
pub struct Travel<'t> {
    /// Kind label when the node is a documentable declaration
    pub label: Option<&'static str>,
    /// Nodes to visit next
    pub children: Vec<NodeRef<'t>>,
}

impl<'t> Travel<'t> {
    fn declaration(label: &'static str) -> Self {
        Self {
            label: Some(label),
            children: Vec::new(),
        }
    }

    fn descend(children: Vec<NodeRef<'t>>) -> Self {
        Self {
            label: None,
            children,
        }
    }

    fn stop() -> Self {
        Self::descend(Vec::new())
    }
}

/// Walks files for documentable declarations
pub struct Traveler<'t> {
    table: KindMap<'t, (), Travel<'t>>,
}

impl<'t> Traveler<'t> {
    pub fn new() -> Self {
        use SyntaxKind::*;

        let table = KindMap::new()
            .on::<SourceFileData>(SourceFile, |_, file, _| Travel::descend(vec![file.at(file.list)]))
            .on::<ListData>(SyntaxList, |_, list, _| {
                Travel::descend(list.each(&list.data.items).collect())
            })
            .on_node(TypeAliasDeclaration, |_, _, _| Travel::declaration("type"))
            .on_node(InterfaceDeclaration, |_, _, _| Travel::declaration("interface"))
            .on_node(ClassDeclaration, |_, _, _| Travel::declaration("class"))
            .on_node(EnumDeclaration, |_, _, _| Travel::declaration("enum"))
            .on_node(FunctionDeclaration, |_, _, _| Travel::declaration("function"))
            .on::<ModuleData>(ModuleDeclaration, |_, module, _| Travel {
                label: Some("namespace"),
                children: module.each(&module.data.body).collect(),
            })
            .on::<VariableStatementData>(VariableStatement, |_, statement, _| {
                Travel::descend(statement.each(&statement.data.declarations).collect())
            })
            .on::<VariableData>(VariableDeclaration, |_, decl, _| {
                let label = decl
                    .node
                    .parent()
                    .and_then(|s| s.narrow::<VariableStatementData>())
                    .map(|s| s.declaration_kind.label())
                    .unwrap_or("const");
                Travel::declaration(label)
            })
            .on_nodes(
                &[
                    ImportDeclaration,
                    ExportDeclaration,
                    ExportAssignment,
                    ExpressionStatement,
                ],
                |_, _, _| Travel::stop(),
            );

        Self { table }
    }

    /// Visit one node
    pub fn visit(&self, node: NodeRef<'t>) -> Travel<'t> {
        let default: &Fallback<'_, 't, Travel<'t>> = &|node| {
            if let Some(node) = node {
                tracing::debug!(kind = %node.kind(), "not a documentable declaration");
            }
            Travel::stop()
        };
        self.table.dispatch(&(), Some(node), default)
    }

    /// Every documentable declaration under `root`, in source order
    pub fn travel(&self, root: NodeRef<'t>) -> Vec<(&'static str, NodeRef<'t>)> {
        let mut found = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let travel = self.visit(node);
            if let Some(label) = travel.label {
                found.push((label, node));
            }
            stack.extend(travel.children.into_iter().rev());
        }
        found
    }
}

impl Default for Traveler<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// One documented declaration, as listed in `index.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRecord {
    /// Title of the page the declaration is on
    pub title: String,
    pub qualified_name: String,
    /// Kind label (`type`, `class`, `const`, ...)
    pub kind: String,
    /// Documentation path
    pub path: String,
    /// Signature as plain text
    #[serde(rename = "type")]
    pub type_: String,
}

impl DeclarationRecord {
    pub fn new(
        title: impl Into<String>,
        qualified_name: impl Into<String>,
        kind: impl Into<String>,
        path: impl Into<String>,
        signature: &str,
    ) -> Self {
        Self {
            title: title.into(),
            qualified_name: qualified_name.into(),
            kind: kind.into(),
            path: path.into(),
            type_: plain_text(signature),
        }
    }
}

/// Signature markup reduced to the text a reader sees
pub fn plain_text(markup: &str) -> String {
    let without_links = LINK_REGEX.replace_all(markup, "$1");
    let without_tags = TAG_REGEX.replace_all(&without_links, "");
    let braces = without_tags.replace("&lcub;", "{").replace("&rcub;", "}");
    html_escape::decode_html_entities(&braces).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::parse_tree;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_travel_yields_declarations_in_order() {
        let tree = parse_tree(
            "/project/src/a.ts",
            r#"
import { X } from "./x";
export type A = string;
export interface B {}
let c = 1, d = 2;
if (c) {}
export namespace N { export const e = 1; export class F {} }
export enum G { one }
export function h() {}
export { A as AA };
"#,
        );
        let traveler = Traveler::new();
        let found: Vec<_> = traveler
            .travel(tree.root())
            .into_iter()
            .map(|(label, node)| format!("{} {}", label, node.name().unwrap_or("?")))
            .collect();
        assert_eq!(
            found,
            vec![
                "type A",
                "interface B",
                "let c",
                "let d",
                "namespace N",
                "const e",
                "class F",
                "enum G",
                "function h",
            ]
        );
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            plain_text(r#": <span className="ts-doc-type">Array</span>&lt;<span className="ts-doc-type">number</span>&gt;"#),
            ": Array<number>"
        );
        assert_eq!(
            plain_text(r#"[Point](/docs/src-a#point)[] | <span className="ts-doc-type">&lcub;...&rcub;</span>"#),
            "Point[] | {...}"
        );
        assert_eq!(plain_text("<span className=\"ts-doc-lit\">&quot;a&quot;</span>"), "\"a\"");
    }

    #[test]
    fn test_record_serializes_type_field() {
        let record = DeclarationRecord::new("src/a", "A", "type", "/docs/src-a#a", ": <span className=\"ts-doc-type\">string</span>");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], ": string");
        assert_eq!(json["qualifiedName"], "A");
    }
}
