//! Documentation block rendering
//!
//! [`Renderer::render`] turns a node into its documentation block: a
//! heading built from the kind label, the local name and the signature,
//! the node's doc comment, and the blocks of whatever it contains. Like
//! signatures, blocks are routed through a [`KindMap`]. Expressions and
//! type syntax are connectors with nothing to document and render empty;
//! kinds nobody registered render empty with a `missing-support`
//! diagnostic, except the ignorable statements (imports and re-exports).

use crate::classify::is_primitive;
use crate::context::DocContext;
use crate::decorate::{
    block, escape_prose, example, heading, kind_label, name_label, section, BLOCK_DELIMITER,
    SEPARATOR,
};
use crate::diagnostics::MISSING_SUPPORT;
use crate::dispatch::{Fallback, KindMap};
use crate::js_doc::{strip_links, JsDoc};
use crate::naming::qualified_name;
use crate::signature::SignatureResolver;
use crate::syntax::{
    ClassData, EnumData, FunctionData, InterfaceData, ListData, ModuleData, NodeRef,
    ParameterData, PropertyData, SourceFileData, SyntaxKind, TypeAliasData, TypeParameterData,
    Typed, VariableData, VariableStatementData, WrapperData,
};

/// Statements that are skipped without a diagnostic
const IGNORED: &[SyntaxKind] = &[
    SyntaxKind::ImportDeclaration,
    SyntaxKind::ExportDeclaration,
    SyntaxKind::ExportAssignment,
];

/// Expressions and type syntax: parts of signatures, never blocks
const CONNECTORS: &[SyntaxKind] = &[
    SyntaxKind::Identifier,
    SyntaxKind::QualifiedName,
    SyntaxKind::TypeReference,
    SyntaxKind::ExpressionWithTypeArguments,
    SyntaxKind::ArrayType,
    SyntaxKind::TupleType,
    SyntaxKind::NamedTupleMember,
    SyntaxKind::UnionType,
    SyntaxKind::IntersectionType,
    SyntaxKind::FunctionType,
    SyntaxKind::ConstructorType,
    SyntaxKind::ConditionalType,
    SyntaxKind::InferType,
    SyntaxKind::IndexedAccessType,
    SyntaxKind::TypeOperator,
    SyntaxKind::TypeQuery,
    SyntaxKind::TypePredicate,
    SyntaxKind::MappedType,
    SyntaxKind::RestType,
    SyntaxKind::OptionalType,
    SyntaxKind::ThisType,
    SyntaxKind::ThisKeyword,
    SyntaxKind::ImportType,
    SyntaxKind::IntrinsicKeyword,
    SyntaxKind::TemplateLiteral,
    SyntaxKind::RegularExpressionLiteral,
    SyntaxKind::ObjectBindingPattern,
    SyntaxKind::ArrayBindingPattern,
    SyntaxKind::BindingElement,
    SyntaxKind::ArrayLiteralExpression,
    SyntaxKind::CallExpression,
    SyntaxKind::NewExpression,
    SyntaxKind::BinaryExpression,
    SyntaxKind::PrefixUnaryExpression,
    SyntaxKind::PropertyAccessExpression,
    SyntaxKind::AsExpression,
    SyntaxKind::NonNullExpression,
    SyntaxKind::AwaitExpression,
    SyntaxKind::ConditionalExpression,
    SyntaxKind::SpreadElement,
];

/// Heading level of declarations
const DECLARATION: usize = 2;
/// Heading level of members, parameters and return types
const MEMBER: usize = 4;

/// Block handlers and the signature resolver they build headings with
pub struct Renderer<'p> {
    cx: &'p DocContext<'p>,
    signatures: SignatureResolver<'p>,
    table: KindMap<'p, Renderer<'p>, String>,
}

impl<'p> Renderer<'p> {
    pub fn new(cx: &'p DocContext<'p>) -> Self {
        use SyntaxKind::*;

        let table = KindMap::<'p, Self, String>::new()
            .on::<SourceFileData>(SourceFile, |r, file, _| r.render(file.at(file.list)))
            .on::<ListData>(SyntaxList, |r, list, _| {
                r.join_blocks(list.each(&list.data.items))
            })
            .on::<TypeAliasData>(TypeAliasDeclaration, Self::type_alias)
            .on::<InterfaceData>(InterfaceDeclaration, Self::interface)
            .on::<ClassData>(ClassDeclaration, |r, class, _| {
                block([
                    r.heading(class.node, "class", DECLARATION),
                    r.docs(class.node),
                    r.class_sections(class),
                ])
            })
            .on::<ClassData>(ClassExpression, |r, class, _| r.class_sections(class))
            .on::<EnumData>(EnumDeclaration, |r, e, _| {
                block([
                    r.heading(e.node, "enum", DECLARATION),
                    r.docs(e.node),
                    r.each(e.each(&e.data.members)),
                ])
            })
            .on_node(EnumMember, |r, member, _| {
                block([r.heading(member, "enum item", MEMBER), r.docs(member)])
            })
            .on::<ModuleData>(ModuleDeclaration, |r, module, _| {
                block([
                    r.heading(module.node, "namespace", DECLARATION),
                    r.docs(module.node),
                    r.join_blocks(module.each(&module.data.body)),
                ])
            })
            .on::<FunctionData>(FunctionDeclaration, |r, func, _| {
                block([
                    r.heading(func.node, "function", DECLARATION),
                    r.docs(func.node),
                    r.function_sections(func),
                ])
            })
            .on_each::<FunctionData>(&[FunctionExpression, ArrowFunction], |r, func, _| {
                r.function_sections(func)
            })
            .on_each::<FunctionData>(
                &[
                    MethodDeclaration,
                    MethodSignature,
                    Constructor,
                    GetAccessor,
                    SetAccessor,
                    CallSignature,
                    ConstructSignature,
                    IndexSignature,
                ],
                Self::member_function,
            )
            .on_each::<PropertyData>(
                &[
                    PropertyDeclaration,
                    PropertySignature,
                    PropertyAssignment,
                    ShorthandPropertyAssignment,
                ],
                Self::property,
            )
            .on_node(ClassStaticBlockDeclaration, |r, static_block, _| {
                let docs = r.docs(static_block);
                if docs.is_empty() {
                    return String::new();
                }
                block([r.heading(static_block, "static block", MEMBER), docs])
            })
            .on::<VariableStatementData>(VariableStatement, |r, statement, _| {
                r.join_blocks(statement.each(&statement.data.declarations))
            })
            .on::<VariableData>(VariableDeclaration, Self::variable)
            .on::<ParameterData>(Parameter, Self::parameter)
            .on::<TypeParameterData>(TypeParameter, |r, param, _| {
                block([r.heading(param.node, "type parameter", MEMBER), r.docs(param.node)])
            })
            .on_each::<ListData>(&[TypeLiteral, ObjectLiteralExpression], |r, object, _| {
                r.each(object.each(&object.data.items))
            })
            .on_each::<WrapperData>(&[ParenthesizedType, ParenthesizedExpression], |r, paren, _| {
                r.render(paren.at(paren.inner))
            })
            .on_nodes(CONNECTORS, |_, _, _| String::new());

        Self {
            cx,
            signatures: SignatureResolver::new(cx),
            table,
        }
    }

    pub fn signatures(&self) -> &SignatureResolver<'p> {
        &self.signatures
    }

    /// Documentation block of a node
    pub fn render(&self, node: NodeRef<'p>) -> String {
        self.render_opt(Some(node))
    }

    /// Documentation block of an optional node
    ///
    /// Hidden nodes render empty unless the configuration asks for them.
    pub fn render_opt(&self, node: Option<NodeRef<'p>>) -> String {
        if let Some(node) = node {
            if !self.cx.should_document(node) {
                tracing::debug!(name = %qualified_name(node), "skipping hidden declaration");
                return String::new();
            }
        }
        let fallback: &Fallback<'_, 'p, String> = &|node| self.fallback(node);
        self.table.dispatch(self, node, fallback)
    }

    fn fallback(&self, node: Option<NodeRef<'p>>) -> String {
        let Some(node) = node else {
            return String::new();
        };
        if is_primitive(node) || IGNORED.contains(&node.kind()) {
            return String::new();
        }
        self.cx.report(
            MISSING_SUPPORT,
            format!(
                "cannot render {} `{}`",
                node.kind(),
                label_name(node).unwrap_or_else(|| node.text().trim().to_string())
            ),
            Some(node),
        );
        String::new()
    }

    /// Blocks of several nodes, one after another
    fn each(&self, nodes: impl Iterator<Item = NodeRef<'p>>) -> String {
        block(nodes.map(|n| self.render(n)))
    }

    /// Blocks of sibling declarations, separated like page blocks
    fn join_blocks(&self, nodes: impl Iterator<Item = NodeRef<'p>>) -> String {
        nodes
            .map(|n| self.render(n))
            .filter(|b| !b.trim().is_empty())
            .collect::<Vec<_>>()
            .join(BLOCK_DELIMITER)
    }

    /// `kind name signature` heading, anchored at the qualified name
    fn heading(&self, node: NodeRef<'p>, kind: &str, level: usize) -> String {
        let tail = match node.kind() {
            SyntaxKind::VariableDeclaration => {
                let signature = self.signatures.signature(node);
                if signature.is_empty() {
                    signature
                } else {
                    format!(": {}", signature)
                }
            }
            SyntaxKind::PropertyDeclaration
            | SyntaxKind::PropertySignature
            | SyntaxKind::PropertyAssignment
            | SyntaxKind::ShorthandPropertyAssignment
            | SyntaxKind::Parameter
            | SyntaxKind::TypeParameter
            | SyntaxKind::EnumMember => self.signatures.annotation(node),
            _ => self.signatures.signature(node),
        };
        self.titled_heading(node, kind, &tail, level)
    }

    fn titled_heading(&self, node: NodeRef<'p>, kind: &str, tail: &str, level: usize) -> String {
        let mut title = kind_label(kind);
        if let Some(name) = label_name(node) {
            title.push(' ');
            title.push_str(&name_label(&name));
        }
        title.push_str(tail);
        let anchor = qualified_name(node);
        heading(level, &title, (!anchor.is_empty()).then_some(anchor.as_str()))
    }

    /// Description, deprecation notice, examples and references
    fn docs(&self, node: NodeRef<'p>) -> String {
        match doc_of(node) {
            Some(doc) => doc_block(doc),
            None => String::new(),
        }
    }

    fn type_alias(&self, alias: Typed<'p, TypeAliasData>, _: &Fallback<'_, 'p, String>) -> String {
        block([
            self.heading(alias.node, "type", DECLARATION),
            self.docs(alias.node),
            titled_section(
                "Type Parameters:",
                alias.each(&alias.data.type_params).map(|p| self.render(p)),
            ),
            self.render(alias.at(alias.ty)),
        ])
    }

    fn interface(&self, iface: Typed<'p, InterfaceData>, _: &Fallback<'_, 'p, String>) -> String {
        block([
            self.heading(iface.node, "interface", DECLARATION),
            self.docs(iface.node),
            titled_section(
                "Type Parameters:",
                iface.each(&iface.data.type_params).map(|p| self.render(p)),
            ),
            titled_section(
                "Extends:",
                iface
                    .each(&iface.data.extends)
                    .map(|e| format!("- {}", self.signatures.signature(e))),
            ),
            titled_section(
                "Members:",
                iface.each(&iface.data.members).map(|m| self.render(m)),
            ),
        ])
    }

    /// Constructors, static blocks, static properties, static methods,
    /// then instance properties and methods
    fn class_sections(&self, class: Typed<'p, ClassData>) -> String {
        let mut constructors = Vec::new();
        let mut static_blocks = Vec::new();
        let mut static_properties = Vec::new();
        let mut static_methods = Vec::new();
        let mut properties = Vec::new();
        let mut methods = Vec::new();

        for member in class.each(&class.data.members) {
            let is_static = member.modifiers().is_static;
            let bucket = match member.kind() {
                SyntaxKind::Constructor => &mut constructors,
                SyntaxKind::ClassStaticBlockDeclaration => &mut static_blocks,
                SyntaxKind::PropertyDeclaration | SyntaxKind::IndexSignature if is_static => {
                    &mut static_properties
                }
                SyntaxKind::PropertyDeclaration | SyntaxKind::IndexSignature => &mut properties,
                _ if is_static => &mut static_methods,
                _ => &mut methods,
            };
            bucket.push(self.render(member));
        }

        block([
            titled_section("Constructors:", constructors),
            titled_section("Static Blocks:", static_blocks),
            titled_section("Static Properties:", static_properties),
            titled_section("Static Methods:", static_methods),
            titled_section("Properties:", properties),
            titled_section("Methods:", methods),
        ])
    }

    /// Type arguments, arguments and return sections of a function
    fn function_sections(&self, func: Typed<'p, FunctionData>) -> String {
        let returns = match func.node.kind() {
            SyntaxKind::Constructor | SyntaxKind::SetAccessor | SyntaxKind::IndexSignature => {
                String::new()
            }
            _ => self.returns(func),
        };
        block([
            titled_section(
                "Type Arguments:",
                func.each(&func.data.type_params).map(|p| self.render(p)),
            ),
            titled_section(
                "Arguments:",
                func.each(&func.data.params).map(|p| self.render(p)),
            ),
            returns,
        ])
    }

    fn returns(&self, func: Typed<'p, FunctionData>) -> String {
        let signature = self.signatures.return_signature(func);
        let title = format!("{} {}", kind_label("returns"), signature);
        let description = func
            .node
            .doc()
            .and_then(JsDoc::returns)
            .map(|doc| escape_prose(&strip_links(doc)))
            .unwrap_or_default();
        titled_section(
            "Returns:",
            [
                heading(MEMBER, &title, None),
                description,
                self.render_opt(func.at_opt(func.return_type)),
            ],
        )
    }

    fn member_function(
        &self,
        func: Typed<'p, FunctionData>,
        _: &Fallback<'_, 'p, String>,
    ) -> String {
        let base = match func.node.kind() {
            SyntaxKind::Constructor => "constructor",
            SyntaxKind::GetAccessor => "get",
            SyntaxKind::SetAccessor => "set",
            SyntaxKind::CallSignature => "call signature",
            SyntaxKind::ConstructSignature => "construct signature",
            SyntaxKind::IndexSignature => "index signature",
            _ => "method",
        };
        let kind = modified_kind(func.node, base);
        block([
            self.heading(func.node, &kind, MEMBER),
            self.docs(func.node),
            self.function_sections(func),
        ])
    }

    fn property(&self, prop: Typed<'p, PropertyData>, _: &Fallback<'_, 'p, String>) -> String {
        let nested = match prop.at_opt(prop.type_annotation) {
            Some(ty) => self.render(ty),
            None if prop.node.kind() == SyntaxKind::ShorthandPropertyAssignment => String::new(),
            None => self.render_opt(prop.at_opt(prop.initializer)),
        };
        block([
            self.heading(prop.node, &modified_kind(prop.node, "property"), MEMBER),
            self.docs(prop.node),
            nested,
        ])
    }

    fn variable(&self, decl: Typed<'p, VariableData>, _: &Fallback<'_, 'p, String>) -> String {
        let kind = decl
            .node
            .parent()
            .and_then(|s| s.narrow::<VariableStatementData>())
            .map(|s| s.declaration_kind.label())
            .unwrap_or("const");
        let nested = match decl.at_opt(decl.type_annotation) {
            Some(ty) => self.render(ty),
            None => self.render_opt(decl.at_opt(decl.initializer)),
        };
        block([
            self.heading(decl.node, kind, DECLARATION),
            self.docs(decl.node),
            nested,
        ])
    }

    fn parameter(&self, param: Typed<'p, ParameterData>, _: &Fallback<'_, 'p, String>) -> String {
        let description = match (param.node.name(), param.node.parent().and_then(|f| f.doc())) {
            (Some(name), Some(doc)) => doc
                .param(name)
                .map(|d| escape_prose(&strip_links(d)))
                .unwrap_or_default(),
            _ => String::new(),
        };
        block([
            self.heading(param.node, "argument", MEMBER),
            description,
            self.render_opt(param.at_opt(param.type_annotation)),
        ])
    }
}

/// The doc comment of a node; variable declarations use their statement's
fn doc_of(node: NodeRef<'_>) -> Option<&JsDoc> {
    node.doc().or_else(|| {
        node.parent()
            .filter(|_| node.kind() == SyntaxKind::VariableDeclaration)
            .and_then(|statement| statement.doc())
    })
}

fn doc_block(doc: &JsDoc) -> String {
    let mut parts = Vec::new();
    if let Some(description) = doc.description() {
        parts.push(escape_prose(&strip_links(description)));
    }
    if let Some(message) = doc.deprecated() {
        let message = escape_prose(&strip_links(message));
        parts.push(format!("> **Deprecated** {}", message).trim_end().to_string());
    }
    for code in doc.examples() {
        parts.push(example(code));
    }
    let see: Vec<String> = doc
        .see_also()
        .map(|r| format!("- {}", escape_prose(&strip_links(r))))
        .collect();
    if !see.is_empty() {
        parts.push(format!("See also:\n{}", see.join("\n")));
    }
    block(parts)
}

/// Name shown in a heading: the declared name, or the pattern text of a
/// destructuring declaration
fn label_name(node: NodeRef<'_>) -> Option<String> {
    if let Some(name) = node.name() {
        return Some(name.to_string());
    }
    match node.kind() {
        SyntaxKind::VariableDeclaration | SyntaxKind::Parameter => node
            .children()
            .into_iter()
            .next()
            .map(|pattern| pattern.text().to_string()),
        _ => None,
    }
}

fn modified_kind(node: NodeRef<'_>, kind: &str) -> String {
    let modifiers = node.modifiers();
    let mut words = Vec::new();
    if modifiers.is_static {
        words.push("static");
    }
    if modifiers.is_abstract {
        words.push("abstract");
    }
    if modifiers.readonly {
        words.push("readonly");
    }
    words.push(kind);
    words.join(" ")
}

/// Separator, title and items; empty when every item is
fn titled_section<I, S>(title: &str, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let body = block(items);
    if body.is_empty() {
        return String::new();
    }
    section(&block([
        SEPARATOR.to_string(),
        format!(r#"<h5 className="ts-doc-section-title">{}</h5>"#, title),
        body,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MISSING_SUPPORT;
    use crate::test::Fixture;
    use pretty_assertions::assert_eq;

    fn render_named(source: &str, name: &str) -> String {
        Fixture::new(&[("src/a.ts", source)]).with(|fixture| {
            let node = fixture.named("src/a.ts", name);
            Renderer::new(fixture.cx()).render(node)
        })
    }

    #[test]
    fn test_type_alias_heading() {
        let block = render_named("type Id = string;", "Id");
        assert_eq!(
            block,
            heading(
                2,
                r#"<span className="ts-doc-kind">type</span> <span className="ts-doc-name">Id</span>: <span className="ts-doc-type">string</span>"#,
                Some("Id"),
            )
        );
    }

    #[test]
    fn test_function_sections() {
        let block = render_named(
            "/**\n * Adds.\n * @param a first\n * @returns the sum\n */\nfunction add(a: number, b: number): number { return a + b; }",
            "add",
        );
        assert!(block.contains("Adds."));
        assert!(block.contains("Arguments:"));
        assert!(block.contains(r#"<span className="ts-doc-name">a</span>"#));
        assert!(block.contains(r#"<span className="ts-doc-name">b</span>"#));
        assert!(block.contains("first"));
        assert!(block.contains("Returns:"));
        assert!(block.contains("the sum"));
        assert!(!block.contains("Type Arguments:"));
    }

    #[test]
    fn test_class_without_members_has_no_sections() {
        let block = render_named("class C extends Array<number> {}", "C");
        assert!(block.contains(r#"<h2 className="ts-doc-header">"#));
        assert!(block.contains(" extends "));
        assert!(!block.contains(SEPARATOR));
    }

    #[test]
    fn test_class_section_order() {
        let block = render_named(
            r#"
class Shape {
    static count = 0;
    area(): number { return 0; }
    name = "shape";
    static create(): Shape { return new Shape(); }
    constructor() {}
    get size(): number { return 1; }
}
"#,
            "Shape",
        );
        let order: Vec<usize> = [
            "Constructors:",
            "Static Properties:",
            "Static Methods:",
            "Properties:",
            "Methods:",
        ]
        .iter()
        .map(|title| block.find(&format!(">{}<", title)).unwrap())
        .collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
        assert!(block.contains(r#"<span className="ts-doc-kind">get</span>"#));
        assert!(block.contains(r#"<span className="ts-doc-kind">static property</span>"#));
    }

    #[test]
    fn test_private_members_gated() {
        let source = "class K { private secret = 1; /** @internal */ hidden = 2; shown = 3; }";
        let fixture = Fixture::new(&[("src/a.ts", source)]);
        let default = fixture.with(|s| {
            Renderer::new(s.cx()).render(s.named("src/a.ts", "secret"))
        });
        assert_eq!(default, "");

        let fixture = fixture.configure(|c| c.document_private = true);
        let (secret, hidden) = fixture.with(|s| {
            let renderer = Renderer::new(s.cx());
            (
                renderer.render(s.named("src/a.ts", "secret")),
                renderer.render(s.named("src/a.ts", "hidden")),
            )
        });
        assert!(secret.contains(r#"<span className="ts-doc-name">secret</span>"#));
        assert_eq!(hidden, "");

        let class = render_named(source, "K");
        assert!(class.contains("shown"));
        assert!(!class.contains("secret"));
    }

    #[test]
    fn test_object_literal_variable_expands_properties() {
        let block = render_named("/** Options. */\nexport const o = { a: 1, b: \"x\" };", "o");
        assert!(block.contains(r#"<span className="ts-doc-kind">const</span>"#));
        assert!(block.contains("&lcub;...&rcub;"));
        assert!(block.contains("Options."));
        assert!(block.contains(r#"<span className="ts-doc-name">a</span>"#));
        assert!(block.contains(r#"<span className="ts-doc-name">b</span>"#));
    }

    #[test]
    fn test_quoted_member_names_are_escaped() {
        let block = render_named("interface I { \"a<b>{c}\": string }", "I");
        assert!(block.contains("#### I.a&lt;b&gt;&lcub;c&rcub;"));
        assert!(block.contains(r#"<span className="ts-doc-name">a&lt;b&gt;&lcub;c&rcub;</span>"#));
        assert!(!block.contains("<b>"));
        assert!(!block.contains("{c}"));
    }

    #[test]
    fn test_enum_items() {
        let block = render_named("enum Level { low = 1, high }", "Level");
        assert!(block.contains(r#"<span className="ts-doc-kind">enum</span>"#));
        assert_eq!(block.matches(r#"<span className="ts-doc-kind">enum item</span>"#).count(), 2);
        assert!(block.contains(r#" = <span className="ts-doc-lit">1</span>"#));
    }

    #[test]
    fn test_docs_block() {
        let block = render_named(
            "/**\n * Old {x}.\n * @deprecated use y\n * @example\n * old(1)\n * @see y\n */\nexport function old(n: number) {}",
            "old",
        );
        assert!(block.contains("Old &lcub;x&rcub;."));
        assert!(block.contains("> **Deprecated** use y"));
        assert!(block.contains("```ts\nold(1)\n```"));
        assert!(block.contains("- y"));
    }

    #[test]
    fn test_unregistered_statement_reports_once() {
        Fixture::new(&[("src/a.ts", "a + b;\nimport { x } from \"./x\";")]).with(|s| {
            let renderer = Renderer::new(s.cx());
            let statements = crate::project::statements(s.tree("src/a.ts").root());
            let blocks: Vec<String> = statements.iter().map(|n| renderer.render(*n)).collect();
            assert_eq!(blocks, vec![String::new(), String::new()]);
            let diagnostics = s.cx().diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(diagnostics[0].has_code(MISSING_SUPPORT));
        });
    }

    #[test]
    fn test_primitives_render_empty_silently() {
        Fixture::new(&[("src/a.ts", "type A = number;")]).with(|s| {
            let renderer = Renderer::new(s.cx());
            let keyword = s
                .tree("src/a.ts")
                .nodes()
                .find(|n| n.kind() == SyntaxKind::NumberKeyword)
                .unwrap();
            assert_eq!(renderer.render(keyword), "");
            assert_eq!(renderer.render_opt(None), "");
            assert_eq!(s.cx().diagnostic_count(), 0);
        });
    }

    #[test]
    fn test_render_is_idempotent() {
        Fixture::new(&[("src/a.ts", "export interface P { x: number; m(a?: string): void }")]).with(
            |s| {
                let renderer = Renderer::new(s.cx());
                let node = s.named("src/a.ts", "P");
                assert_eq!(renderer.render(node), renderer.render(node));
            },
        );
    }
}
