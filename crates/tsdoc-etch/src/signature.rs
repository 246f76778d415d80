//! Signature resolution
//!
//! A signature is the inline markup describing a node's type: `[x:
//! number, y: number]` for a tuple, `(a: number) => number` for a
//! function, ` extends Array<number>` for a class. Every node kind has a
//! handler in the resolver's [`KindMap`]; kinds without one fall back to
//! their escaped source text and a `missing-type` diagnostic, and foreign
//! or malformed nodes to an empty string and a `missing-support`
//! diagnostic. Declarations without an annotation are described from the
//! checker's [`CheckedType`].

use crate::checker::CheckedType;
use crate::classify::validate;
use crate::context::DocContext;
use crate::decorate::{escape, link, literal_label, type_label, wrap};
use crate::diagnostics::{MISSING_SUPPORT, MISSING_TYPE, UNRESOLVED_TYPE};
use crate::dispatch::{Fallback, KindMap};
use crate::syntax::{
    BindingElementData, ClassData, ConditionalData, EnumMemberData, FunctionData,
    IdentifierData, IndexedAccessData, InterfaceData, ListData, MappedTypeData, NodeData,
    NodeRef, ParameterData, PropertyAccessData, PropertyData, QualifiedNameData, SyntaxKind,
    TypeAliasData, TypeParameterData, TypePredicateData, TypeReferenceData, Typed, UnaryData,
    VariableData, VariableStatementData, WrapperData,
};

/// Opaque marker standing in for object shapes
pub const OBJECT_MARKER: &str = "&lcub;...&rcub;";

/// Arrow between a parameter list and a return type
const ARROW: &str = " =&gt; ";

const KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::StringKeyword,
    SyntaxKind::NumberKeyword,
    SyntaxKind::BooleanKeyword,
    SyntaxKind::BigIntKeyword,
    SyntaxKind::SymbolKeyword,
    SyntaxKind::ObjectKeyword,
    SyntaxKind::AnyKeyword,
    SyntaxKind::UnknownKeyword,
    SyntaxKind::NeverKeyword,
    SyntaxKind::VoidKeyword,
    SyntaxKind::UndefinedKeyword,
    SyntaxKind::NullKeyword,
    SyntaxKind::IntrinsicKeyword,
    SyntaxKind::ThisKeyword,
    SyntaxKind::ThisType,
    SyntaxKind::ImportType,
];

const LITERALS: &[SyntaxKind] = &[
    SyntaxKind::StringLiteral,
    SyntaxKind::NumericLiteral,
    SyntaxKind::BigIntLiteral,
    SyntaxKind::TrueKeyword,
    SyntaxKind::FalseKeyword,
    SyntaxKind::TemplateLiteral,
    SyntaxKind::RegularExpressionLiteral,
];

const FUNCTIONS: &[SyntaxKind] = &[
    SyntaxKind::FunctionDeclaration,
    SyntaxKind::FunctionExpression,
    SyntaxKind::ArrowFunction,
    SyntaxKind::MethodDeclaration,
    SyntaxKind::MethodSignature,
    SyntaxKind::Constructor,
    SyntaxKind::GetAccessor,
    SyntaxKind::SetAccessor,
    SyntaxKind::CallSignature,
    SyntaxKind::ConstructSignature,
    SyntaxKind::IndexSignature,
    SyntaxKind::FunctionType,
    SyntaxKind::ConstructorType,
];

const PROPERTIES: &[SyntaxKind] = &[
    SyntaxKind::PropertySignature,
    SyntaxKind::PropertyDeclaration,
    SyntaxKind::PropertyAssignment,
    SyntaxKind::ShorthandPropertyAssignment,
    SyntaxKind::NamedTupleMember,
];

/// Expressions whose signature is their inferred type
const INFERRED: &[SyntaxKind] = &[
    SyntaxKind::ArrayLiteralExpression,
    SyntaxKind::CallExpression,
    SyntaxKind::NewExpression,
    SyntaxKind::BinaryExpression,
    SyntaxKind::PrefixUnaryExpression,
    SyntaxKind::ParenthesizedExpression,
    SyntaxKind::AsExpression,
    SyntaxKind::NonNullExpression,
    SyntaxKind::AwaitExpression,
    SyntaxKind::ConditionalExpression,
];

/// Signature handlers and the context they resolve against
pub struct SignatureResolver<'p> {
    cx: &'p DocContext<'p>,
    table: KindMap<'p, SignatureResolver<'p>, String>,
}

impl<'p> SignatureResolver<'p> {
    pub fn new(cx: &'p DocContext<'p>) -> Self {
        use SyntaxKind::*;

        let table = KindMap::<'p, Self, String>::new()
            .on_nodes(KEYWORDS, |_, node, _| type_label(&escape(node.text())))
            .on_nodes(LITERALS, |_, node, _| literal_label(&escape(node.text())))
            .on::<WrapperData>(LiteralType, |s, lit, _| s.signature(lit.at(lit.inner)))
            .on::<TypeAliasData>(TypeAliasDeclaration, Self::type_alias)
            .on::<ListData>(TupleType, |s, tuple, _| {
                format!("[{}]", s.join(tuple.each(&tuple.data.items), ", "))
            })
            .on::<ListData>(UnionType, |s, union, _| s.join(union.each(&union.data.items), " | "))
            .on::<ListData>(IntersectionType, |s, inter, _| {
                s.join(inter.each(&inter.data.items), " &amp; ")
            })
            .on_nodes(
                &[TypeLiteral, ObjectLiteralExpression, ObjectBindingPattern],
                |_, _, _| type_label(OBJECT_MARKER),
            )
            .on::<ListData>(ArrayBindingPattern, |s, pattern, _| {
                format!("[{}]", s.join(pattern.each(&pattern.data.items), ", "))
            })
            .on::<WrapperData>(ArrayType, |s, array, _| {
                format!("{}[]", s.signature(array.at(array.inner)))
            })
            .on::<WrapperData>(ParenthesizedType, |s, paren, _| {
                format!("({})", s.signature(paren.at(paren.inner)))
            })
            .on::<WrapperData>(RestType, |s, rest, _| format!("...{}", s.signature(rest.at(rest.inner))))
            .on::<WrapperData>(OptionalType, |s, opt, _| format!("{}?", s.signature(opt.at(opt.inner))))
            .on::<WrapperData>(SpreadElement, |s, spread, _| {
                format!("...{}", s.signature(spread.at(spread.inner)))
            })
            .on::<WrapperData>(TypeOperator, |s, op, _| {
                let inner = s.signature(op.at(op.inner));
                match &op.operator {
                    Some(operator) => format!("{} {}", type_label(&escape(operator)), inner),
                    None => inner,
                }
            })
            .on::<WrapperData>(TypeQuery, |s, query, _| {
                format!("{} {}", type_label("typeof"), s.signature(query.at(query.inner)))
            })
            .on::<TypeReferenceData>(TypeReference, Self::type_reference)
            .on::<TypeReferenceData>(ExpressionWithTypeArguments, |s, heritage, _| {
                format!(
                    "{}{}",
                    s.signature(heritage.at(heritage.target)),
                    s.type_args(heritage)
                )
            })
            .on::<IdentifierData>(Identifier, Self::identifier)
            .on::<IdentifierData>(InferType, |_, infer, _| {
                format!("{} {}", type_label("infer"), type_label(&escape(&infer.name)))
            })
            .on::<QualifiedNameData>(QualifiedName, |s, name, _| {
                format!("{}.{}", s.signature(name.at(name.left)), type_label(&escape(&name.right)))
            })
            .on::<PropertyAccessData>(PropertyAccessExpression, |s, access, _| {
                format!("{}.{}", s.signature(access.at(access.object)), type_label(&escape(&access.name)))
            })
            .on::<TypeParameterData>(TypeParameter, |s, param, _| {
                format!("{}{}", escape(&param.name), s.annotation(param.node))
            })
            .on_each::<PropertyData>(PROPERTIES, |s, prop, _| {
                format!("{}{}", escape(&prop.name), s.annotation(prop.node))
            })
            .on::<ParameterData>(Parameter, |s, param, _| {
                format!(
                    "{}{}{}",
                    if param.rest { "..." } else { "" },
                    s.binding_name(param.at(param.name)),
                    s.annotation(param.node)
                )
            })
            .on::<BindingElementData>(BindingElement, |s, element, _| {
                let mut out = String::new();
                if element.rest {
                    out.push_str("...");
                }
                out.push_str(&s.binding_name(element.at(element.name)));
                if let Some(init) = element.at_opt(element.initializer) {
                    out.push_str(" = ");
                    out.push_str(&s.value(init));
                }
                out
            })
            .on_each::<FunctionData>(FUNCTIONS, Self::function)
            .on_each::<ClassData>(&[ClassDeclaration, ClassExpression], Self::class)
            .on::<InterfaceData>(InterfaceDeclaration, |s, iface, _| {
                let mut out = s.type_params(iface.each(&iface.data.type_params));
                if !iface.extends.is_empty() {
                    out.push_str(" extends ");
                    out.push_str(&s.join(iface.each(&iface.data.extends), ", "));
                }
                out
            })
            .on::<EnumMemberData>(EnumMember, |s, member, _| s.annotation(member.node))
            .on_nodes(
                &[
                    EnumDeclaration,
                    ModuleDeclaration,
                    ClassStaticBlockDeclaration,
                    SourceFile,
                    SyntaxList,
                    ImportDeclaration,
                    ExportDeclaration,
                ],
                |_, _, _| String::new(),
            )
            .on::<VariableStatementData>(VariableStatement, |s, statement, _| {
                s.join(statement.each(&statement.data.declarations), ", ")
            })
            .on::<VariableData>(VariableDeclaration, |s, decl, _| match decl.at_opt(decl.type_annotation) {
                Some(ty) => s.signature(ty),
                None => s.from_type(&s.cx.checker.type_of(decl.node), decl.node),
            })
            .on::<ConditionalData>(ConditionalType, |s, cond, _| {
                format!(
                    "{} extends {} ? {} : {}",
                    s.signature(cond.at(cond.check)),
                    s.signature_opt(cond.at_opt(cond.extends)),
                    s.signature(cond.at(cond.when_true)),
                    s.signature(cond.at(cond.when_false))
                )
            })
            .on::<IndexedAccessData>(IndexedAccessType, |s, access, _| {
                format!(
                    "{}[{}]",
                    s.signature(access.at(access.object)),
                    s.signature(access.at(access.index))
                )
            })
            .on::<TypePredicateData>(TypePredicate, |s, pred, _| {
                let mut out = String::new();
                if pred.asserts {
                    out.push_str(&type_label("asserts"));
                    out.push(' ');
                }
                out.push_str(&escape(&pred.parameter));
                if let Some(ty) = pred.at_opt(pred.ty) {
                    out.push_str(" is ");
                    out.push_str(&s.signature(ty));
                }
                out
            })
            .on::<MappedTypeData>(MappedType, |s, mapped, _| {
                let mut key = format!(
                    "{} in {}",
                    escape(&mapped.parameter),
                    s.signature_opt(mapped.at_opt(mapped.constraint))
                );
                if let Some(name) = mapped.at_opt(mapped.name_type) {
                    key.push_str(" as ");
                    key.push_str(&s.signature(name));
                }
                format!(
                    "&lcub; [{}]: {} &rcub;",
                    key,
                    s.signature_opt(mapped.at_opt(mapped.value))
                )
            })
            .on_nodes(INFERRED, |s, node, _| s.from_type(&s.cx.checker.infer(node), node));

        Self { cx, table }
    }

    pub fn context(&self) -> &'p DocContext<'p> {
        self.cx
    }

    /// Signature of a node
    pub fn signature(&self, node: NodeRef<'p>) -> String {
        self.signature_opt(Some(node))
    }

    /// Signature of an optional node; absent nodes have none
    pub fn signature_opt(&self, node: Option<NodeRef<'p>>) -> String {
        let fallback: &Fallback<'_, 'p, String> = &|node| self.fallback(node);
        self.table.dispatch(self, node, fallback)
    }

    fn fallback(&self, node: Option<NodeRef<'p>>) -> String {
        let Some(node) = node else {
            return String::new();
        };
        if node.kind() == SyntaxKind::Unknown || !validate(node) {
            self.cx.report(
                MISSING_SUPPORT,
                format!("no signature support for {}", node.kind()),
                Some(node),
            );
            return String::new();
        }
        self.cx.report(
            MISSING_TYPE,
            format!("missing type handler for {}", node.kind()),
            Some(node),
        );
        type_label(&escape(node.text()))
    }

    /// The part of a named member's signature after its name: optional
    /// marker, type and initializer
    pub fn annotation(&self, node: NodeRef<'p>) -> String {
        let optional = if node.modifiers().optional { "?" } else { "" };
        match node.data() {
            NodeData::Property(d) => {
                let ty = match node.at_opt(d.type_annotation) {
                    Some(ty) => self.signature(ty),
                    None if d.initializer.is_some() => {
                        self.from_type(&self.cx.checker.type_of(node), node)
                    }
                    None => String::new(),
                };
                format!("{}{}", optional, prefixed(": ", &ty))
            }
            NodeData::Parameter(d) => {
                let ty = match node.at_opt(d.type_annotation) {
                    Some(ty) => self.signature(ty),
                    None => self.from_type(&self.cx.checker.type_of(node), node),
                };
                let init = node
                    .at_opt(d.initializer)
                    .map(|init| self.value(init))
                    .unwrap_or_default();
                format!("{}{}{}", optional, prefixed(": ", &ty), prefixed(" = ", &init))
            }
            NodeData::TypeParameter(d) => format!(
                "{}{}",
                prefixed(" extends ", &self.signature_opt(node.at_opt(d.constraint))),
                prefixed(" = ", &self.signature_opt(node.at_opt(d.default)))
            ),
            NodeData::EnumMember(d) => prefixed(
                " = ",
                &node.at_opt(d.initializer).map(|init| self.value(init)).unwrap_or_default(),
            ),
            _ => self.signature(node),
        }
    }

    /// Markup for a checked type
    ///
    /// `at` is the node the type was computed for; an unresolved type is
    /// reported against it.
    pub fn from_type(&self, ty: &CheckedType<'p>, at: NodeRef<'p>) -> String {
        match ty {
            CheckedType::Primitive(name) => type_label(name),
            CheckedType::Literal { text, .. } => literal_label(&escape(text)),
            CheckedType::Reference {
                name,
                declaration,
                type_args,
            } => {
                let head = match declaration.and_then(|d| self.cx.link_target(d)) {
                    Some(path) => link(name, path),
                    None => type_label(&escape(name)),
                };
                let args = type_args
                    .iter()
                    .map(|arg| self.from_type(arg, at))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}{}", head, wrap(&args, "<", ">"))
            }
            CheckedType::Anonymous(node) => match node.kind() {
                SyntaxKind::ClassExpression => {
                    format!("{}{}", type_label("class"), self.signature(*node))
                }
                _ => self.signature(*node),
            },
            CheckedType::Annotated(node) => self.signature(*node),
            CheckedType::Union(members) => members
                .iter()
                .map(|m| self.from_type(m, at))
                .collect::<Vec<_>>()
                .join(" | "),
            CheckedType::Intersection(members) => members
                .iter()
                .map(|m| match m {
                    CheckedType::Union(_) => format!("({})", self.from_type(m, at)),
                    _ => self.from_type(m, at),
                })
                .collect::<Vec<_>>()
                .join(" &amp; "),
            CheckedType::Array(inner) => match inner.as_ref() {
                CheckedType::Union(_) | CheckedType::Intersection(_) => {
                    format!("({})[]", self.from_type(inner, at))
                }
                other => format!("{}[]", self.from_type(other, at)),
            },
            CheckedType::Tuple { elements, readonly } => {
                let elements = elements
                    .iter()
                    .map(|e| self.from_type(e, at))
                    .collect::<Vec<_>>()
                    .join(", ");
                if *readonly {
                    format!("{} [{}]", type_label("readonly"), elements)
                } else {
                    format!("[{}]", elements)
                }
            }
            CheckedType::Unresolved => {
                self.cx.report(
                    UNRESOLVED_TYPE,
                    format!("could not determine the type of {}", at.kind()),
                    Some(at),
                );
                String::new()
            }
        }
    }

    /// Return type markup of a function-like node
    ///
    /// The annotation when present, else the inferred type, else `void`.
    pub fn return_signature(&self, func: Typed<'p, FunctionData>) -> String {
        if let Some(ty) = func.at_opt(func.return_type) {
            return self.signature(ty);
        }
        let inferred = self.from_type(&self.cx.checker.return_type(func.node), func.node);
        if inferred.is_empty() {
            literal_label("void")
        } else {
            inferred
        }
    }

    /// Shown value of an initializer
    fn value(&self, init: NodeRef<'p>) -> String {
        let negative_literal = init
            .narrow::<UnaryData>()
            .map(|u| u.at(u.operand).kind().is_literal())
            .unwrap_or(false);
        match init.kind() {
            kind if kind.is_literal() || negative_literal || kind == SyntaxKind::NullKeyword => {
                literal_label(&escape(init.text()))
            }
            SyntaxKind::Identifier
            | SyntaxKind::PropertyAccessExpression
            | SyntaxKind::ObjectLiteralExpression => self.signature(init),
            _ => type_label(&escape(init.text())),
        }
    }

    /// A binding name: plain for identifiers, a pattern signature else
    fn binding_name(&self, name: NodeRef<'p>) -> String {
        match name.identifier() {
            Some(ident) => escape(ident),
            None => self.signature(name),
        }
    }

    fn join(&self, nodes: impl Iterator<Item = NodeRef<'p>>, separator: &str) -> String {
        nodes
            .map(|n| self.signature(n))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn type_params(&self, params: impl Iterator<Item = NodeRef<'p>>) -> String {
        wrap(&self.join(params, ", "), "<", ">")
    }

    fn type_args(&self, reference: Typed<'p, TypeReferenceData>) -> String {
        wrap(
            &self.join(reference.each(&reference.data.type_args), ", "),
            "<",
            ">",
        )
    }

    fn type_alias(&self, alias: Typed<'p, TypeAliasData>, _: &Fallback<'_, 'p, String>) -> String {
        format!(
            "{}: {}",
            self.type_params(alias.each(&alias.data.type_params)),
            self.signature(alias.at(alias.ty))
        )
    }

    fn type_reference(
        &self,
        reference: Typed<'p, TypeReferenceData>,
        _: &Fallback<'_, 'p, String>,
    ) -> String {
        let target = reference.at(reference.target);
        if target.identifier() == Some("Array") && reference.type_args.len() == 1 {
            let element = reference.at(reference.type_args[0]);
            let inner = self.signature(element);
            return match element.kind() {
                SyntaxKind::UnionType
                | SyntaxKind::IntersectionType
                | SyntaxKind::FunctionType
                | SyntaxKind::ConstructorType => format!("({})[]", inner),
                _ => format!("{}[]", inner),
            };
        }
        format!("{}{}", self.signature(target), self.type_args(reference))
    }

    fn identifier(&self, ident: Typed<'p, IdentifierData>, _: &Fallback<'_, 'p, String>) -> String {
        let target = self
            .cx
            .project
            .definition(ident.node)
            .and_then(|def| self.cx.link_target(def));
        match target {
            Some(path) => link(&ident.name, path),
            None => type_label(&escape(&ident.name)),
        }
    }

    fn function(&self, func: Typed<'p, FunctionData>, _: &Fallback<'_, 'p, String>) -> String {
        let params = self.join(func.each(&func.data.params), ", ");
        match func.node.kind() {
            SyntaxKind::IndexSignature => {
                format!("[{}]: {}", params, self.return_signature(func))
            }
            SyntaxKind::ConstructSignature | SyntaxKind::ConstructorType => format!(
                "new {}({}){}{}",
                self.type_params(func.each(&func.data.type_params)),
                params,
                ARROW,
                self.return_signature(func)
            ),
            _ => format!(
                "{}({}){}{}",
                self.type_params(func.each(&func.data.type_params)),
                params,
                ARROW,
                self.return_signature(func)
            ),
        }
    }

    fn class(&self, class: Typed<'p, ClassData>, _: &Fallback<'_, 'p, String>) -> String {
        let mut out = self.type_params(class.each(&class.data.type_params));
        if let Some(base) = class.at_opt(class.extends) {
            out.push_str(" extends ");
            out.push_str(&self.signature(base));
        }
        if !class.implements.is_empty() {
            out.push_str(" implements ");
            out.push_str(&self.join(class.each(&class.data.implements), ", "));
        }
        out
    }
}

fn prefixed(prefix: &str, text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("{}{}", prefix, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::Fixture;
    use pretty_assertions::assert_eq;

    fn ty(text: &str) -> String {
        format!(r#"<span className="ts-doc-type">{}</span>"#, text)
    }

    fn lit(text: &str) -> String {
        format!(r#"<span className="ts-doc-lit">{}</span>"#, text)
    }

    fn signature_of(source: &str, name: &str) -> String {
        Fixture::new(&[("src/a.ts", source)]).with(|fixture| {
            let node = fixture.named("src/a.ts", name);
            SignatureResolver::new(fixture.cx()).signature(node)
        })
    }

    fn type_signature_of(source: &str, name: &str) -> String {
        Fixture::new(&[("src/a.ts", source)]).with(|fixture| {
            let node = fixture.named("src/a.ts", name);
            let alias = node.narrow::<TypeAliasData>().unwrap();
            SignatureResolver::new(fixture.cx()).signature(alias.at(alias.ty))
        })
    }

    #[test]
    fn test_type_alias_to_keyword() {
        assert_eq!(type_signature_of("type Id = string;", "Id"), ty("string"));
        assert_eq!(
            signature_of("type Id = string;", "Id"),
            format!(": {}", ty("string"))
        );
    }

    #[test]
    fn test_named_tuple() {
        assert_eq!(
            type_signature_of("type P = [x: number, y: number];", "P"),
            format!("[x: {}, y: {}]", ty("number"), ty("number"))
        );
    }

    #[test]
    fn test_function_declaration() {
        assert_eq!(
            signature_of("function add(a: number, b: number): number { return a + b; }", "add"),
            format!("(a: {n}, b: {n}) =&gt; {n}", n = ty("number"))
        );
    }

    #[test]
    fn test_function_without_annotation() {
        assert_eq!(
            signature_of("function plot(x, y) {}", "plot"),
            format!("(x: {a}, y: {a}) =&gt; {v}", a = ty("any"), v = ty("void"))
        );
        assert_eq!(
            signature_of("const f = () => new Date().getTime();", "f"),
            format!("() =&gt; {}", lit("void"))
        );
    }

    #[test]
    fn test_literal_const() {
        assert_eq!(signature_of("const x = 5;", "x"), lit("5"));
        assert_eq!(
            signature_of("export const s = \"Hello, World\";", "s"),
            lit("&quot;Hello, World&quot;")
        );
        assert_eq!(signature_of("let n = 5;", "n"), ty("number"));
    }

    #[test]
    fn test_const_assertion_and_intersection() {
        assert_eq!(
            signature_of("const t = [1, \"a\"] as const;", "t"),
            format!("{} [{}, {}]", ty("readonly"), lit("1"), lit("&quot;a&quot;"))
        );
        assert_eq!(
            signature_of("const xs = [1, \"a\"];", "xs"),
            format!("({} | {})[]", ty("number"), ty("string"))
        );
        assert_eq!(
            signature_of(
                "class A {}\nclass B {}\nconst m = Object.assign(new A(), new B());",
                "m"
            ),
            "[A](/docs/src-a#a) &amp; [B](/docs/src-a#b)"
        );
    }

    #[test]
    fn test_class_heritage_keeps_array_reference() {
        assert_eq!(
            signature_of("class C extends Array<number> {}", "C"),
            format!(" extends {}&lt;{}&gt;", ty("Array"), ty("number"))
        );
    }

    #[test]
    fn test_array_reference_in_type_position() {
        assert_eq!(
            type_signature_of("type A = Array<string | number>;", "A"),
            format!("({} | {})[]", ty("string"), ty("number"))
        );
        assert_eq!(type_signature_of("type A = Array<Date>;", "A"), format!("{}[]", ty("Date")));
    }

    #[test]
    fn test_object_shapes_are_opaque() {
        assert_eq!(
            type_signature_of("type U = { name: string; age?: number };", "U"),
            ty("&lcub;...&rcub;")
        );
        assert_eq!(signature_of("const o = { a: 1 };", "o"), ty("&lcub;...&rcub;"));
    }

    #[test]
    fn test_members() {
        let source = "interface I { readonly a?: string; m(x?: number): void; }";
        assert_eq!(signature_of(source, "a"), format!("a?: {}", ty("string")));
        assert_eq!(
            signature_of(source, "m"),
            format!("(x?: {}) =&gt; {}", ty("number"), ty("void"))
        );
    }

    #[test]
    fn test_links_to_documented_declarations() {
        let source = "export interface Point { x: number }\nexport type Line = [Point, Point];";
        let point = "[Point](/docs/src-a#point)";
        assert_eq!(
            type_signature_of(source, "Line"),
            format!("[{}, {}]", point, point)
        );
    }

    #[test]
    fn test_type_syntax() {
        let source = r#"
type A<T> = T extends string ? keyof T : T[number];
type B = { [K in "a" | "b"]: K };
type C = typeof x;
type D = (x: unknown) => x is string;
"#;
        assert_eq!(
            type_signature_of(source, "A"),
            format!(
                "{t} extends {s} ? {k} {t} : {t}[{n}]",
                t = ty("T"),
                s = ty("string"),
                k = ty("keyof"),
                n = ty("number")
            )
        );
        assert_eq!(
            type_signature_of(source, "B"),
            format!(
                "&lcub; [K in {} | {}]: {} &rcub;",
                lit("&quot;a&quot;"),
                lit("&quot;b&quot;"),
                ty("K")
            )
        );
        assert_eq!(type_signature_of(source, "C"), format!("{} {}", ty("typeof"), ty("x")));
        assert_eq!(
            type_signature_of(source, "D"),
            format!("(x: {}) =&gt; x is {}", ty("unknown"), ty("string"))
        );
    }

    #[test]
    fn test_enum_member_initializer() {
        assert_eq!(signature_of("enum E { a = 1 }", "a"), format!(" = {}", lit("1")));
        assert_eq!(signature_of("enum E { a }", "a"), "");
    }

    #[test]
    fn test_unknown_node_degrades_with_diagnostic() {
        Fixture::new(&[("src/a.ts", "if (a) {}")]).with(|fixture| {
            let node = fixture
                .tree("src/a.ts")
                .nodes()
                .find(|n| n.kind() == SyntaxKind::Unknown)
                .unwrap();
            let resolver = SignatureResolver::new(fixture.cx());
            assert_eq!(resolver.signature(node), "");
            assert_eq!(resolver.signature_opt(None), "");
            let diagnostics = fixture.cx().diagnostics();
            assert_eq!(diagnostics.len(), 1);
            assert!(diagnostics[0].has_code(MISSING_SUPPORT));
        });
    }
}
