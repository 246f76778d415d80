//! Arena syntax trees
//!
//! Each source file is lowered from the SWC AST into a [`SourceTree`]: a
//! flat vector of [`Node`]s addressed by [`NodeId`], with parent links so
//! names can be qualified by walking upwards. A node's [`NodeData`]
//! statically fixes which facets (name, type annotation, members, ...)
//! it has; handlers ask for a facet by narrowing to its payload type.

mod kind;
mod lower;

pub use kind::SyntaxKind;
pub use lower::lower;

use crate::js_doc::JsDoc;
use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Index of a node within its [`SourceTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    /// Position in the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a file within a [`Project`](crate::project::Project)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u32);

impl FileId {
    pub(crate) fn new(index: usize) -> Self {
        FileId(index as u32)
    }

    /// Position in the project
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Byte range of a node in its file's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Member accessibility keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    Public,
    Protected,
    Private,
}

/// Declaration modifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub exported: bool,
    pub default_export: bool,
    pub declare: bool,
    pub is_static: bool,
    pub readonly: bool,
    pub is_abstract: bool,
    pub is_async: bool,
    pub optional: bool,
    /// `#name` members
    pub private_name: bool,
    pub accessibility: Option<Accessibility>,
}

/// `const`, `let` or `var`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
}

impl DeclarationKind {
    /// The keyword
    pub fn label(self) -> &'static str {
        match self {
            DeclarationKind::Const => "const",
            DeclarationKind::Let => "let",
            DeclarationKind::Var => "var",
        }
    }
}

/// How a function's body is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionBody {
    /// Signatures, overloads and ambient declarations
    None,
    Block,
    /// Arrow function with an expression body
    Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceFileData {
    pub list: NodeId,
}

/// Ordered children: statements, union members, tuple elements,
/// type-literal members, object-literal properties, ...
#[derive(Debug, Clone, PartialEq)]
pub struct ListData {
    pub items: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasData {
    pub name: String,
    pub type_params: Vec<NodeId>,
    pub ty: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceData {
    pub name: String,
    pub type_params: Vec<NodeId>,
    pub extends: Vec<NodeId>,
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassData {
    pub name: Option<String>,
    pub type_params: Vec<NodeId>,
    pub extends: Option<NodeId>,
    pub implements: Vec<NodeId>,
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumData {
    pub name: String,
    pub is_const: bool,
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMemberData {
    pub name: String,
    pub initializer: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionData {
    pub name: Option<String>,
    pub type_params: Vec<NodeId>,
    pub params: Vec<NodeId>,
    pub return_type: Option<NodeId>,
    pub body: FunctionBody,
    /// Returned expressions, not counting nested functions
    pub returns: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyData {
    pub name: String,
    pub type_annotation: Option<NodeId>,
    pub initializer: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableStatementData {
    pub declaration_kind: DeclarationKind,
    pub declarations: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableData {
    /// Identifier or binding pattern
    pub name: NodeId,
    pub type_annotation: Option<NodeId>,
    pub initializer: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterData {
    /// Identifier or binding pattern
    pub name: NodeId,
    pub type_annotation: Option<NodeId>,
    pub initializer: Option<NodeId>,
    pub rest: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameterData {
    pub name: String,
    pub constraint: Option<NodeId>,
    pub default: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BindingElementData {
    pub property_name: Option<String>,
    pub name: NodeId,
    pub initializer: Option<NodeId>,
    pub rest: bool,
}

/// `Foo<A>` in type position, or `Base<A>` in a heritage clause
#[derive(Debug, Clone, PartialEq)]
pub struct TypeReferenceData {
    /// Identifier, qualified name or expression
    pub target: NodeId,
    pub type_args: Vec<NodeId>,
}

/// A node with a single child: parenthesized and array types, type
/// operators, literal types, spreads, ...
#[derive(Debug, Clone, PartialEq)]
pub struct WrapperData {
    pub inner: NodeId,
    /// `keyof`, `readonly`, `unique`
    pub operator: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedNameData {
    pub left: NodeId,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierData {
    pub name: String,
}

/// `A extends B ? C : D` and `a ? b : c`
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalData {
    pub check: NodeId,
    /// Absent for conditional expressions
    pub extends: Option<NodeId>,
    pub when_true: NodeId,
    pub when_false: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedAccessData {
    pub object: NodeId,
    pub index: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypePredicateData {
    pub parameter: String,
    pub ty: Option<NodeId>,
    pub asserts: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MappedTypeData {
    pub parameter: String,
    pub constraint: Option<NodeId>,
    pub name_type: Option<NodeId>,
    pub value: Option<NodeId>,
}

/// Call and `new` expressions
#[derive(Debug, Clone, PartialEq)]
pub struct CallData {
    pub callee: NodeId,
    pub type_args: Vec<NodeId>,
    pub args: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryData {
    pub left: NodeId,
    pub operator: String,
    pub right: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryData {
    pub operator: String,
    pub operand: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAccessData {
    pub object: NodeId,
    pub name: String,
}

/// `x as T`, `x as const`, `x satisfies T`, `<T>x`
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionData {
    pub expression: NodeId,
    /// Absent for `as const`
    pub ty: Option<NodeId>,
    pub satisfies: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    pub local: String,
    /// `default`, `*` or the exported name
    pub imported: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportData {
    pub source: String,
    pub bindings: Vec<ImportBinding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleData {
    pub name: String,
    pub body: Vec<NodeId>,
}

/// Kind-specific payload of a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    SourceFile(SourceFileData),
    List(ListData),
    TypeAlias(TypeAliasData),
    Interface(InterfaceData),
    Class(ClassData),
    Enum(EnumData),
    EnumMember(EnumMemberData),
    Function(FunctionData),
    Property(PropertyData),
    VariableStatement(VariableStatementData),
    Variable(VariableData),
    Parameter(ParameterData),
    TypeParameter(TypeParameterData),
    BindingElement(BindingElementData),
    TypeReference(TypeReferenceData),
    Wrapper(WrapperData),
    QualifiedName(QualifiedNameData),
    Identifier(IdentifierData),
    Conditional(ConditionalData),
    IndexedAccess(IndexedAccessData),
    TypePredicate(TypePredicateData),
    MappedType(MappedTypeData),
    Call(CallData),
    Binary(BinaryData),
    Unary(UnaryData),
    PropertyAccess(PropertyAccessData),
    Assertion(AssertionData),
    Import(ImportData),
    Module(ModuleData),
    /// Keywords, literals and anything described by its text alone
    Leaf,
}

/// Discriminant of [`NodeData`], used to validate kind/payload pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    SourceFile,
    List,
    TypeAlias,
    Interface,
    Class,
    Enum,
    EnumMember,
    Function,
    Property,
    VariableStatement,
    Variable,
    Parameter,
    TypeParameter,
    BindingElement,
    TypeReference,
    Wrapper,
    QualifiedName,
    Identifier,
    Conditional,
    IndexedAccess,
    TypePredicate,
    MappedType,
    Call,
    Binary,
    Unary,
    PropertyAccess,
    Assertion,
    Import,
    Module,
    Leaf,
}

fn push_opt(out: &mut Vec<NodeId>, id: Option<NodeId>) {
    if let Some(id) = id {
        out.push(id);
    }
}

impl NodeData {
    /// The payload's shape
    pub fn shape(&self) -> Shape {
        match self {
            NodeData::SourceFile(_) => Shape::SourceFile,
            NodeData::List(_) => Shape::List,
            NodeData::TypeAlias(_) => Shape::TypeAlias,
            NodeData::Interface(_) => Shape::Interface,
            NodeData::Class(_) => Shape::Class,
            NodeData::Enum(_) => Shape::Enum,
            NodeData::EnumMember(_) => Shape::EnumMember,
            NodeData::Function(_) => Shape::Function,
            NodeData::Property(_) => Shape::Property,
            NodeData::VariableStatement(_) => Shape::VariableStatement,
            NodeData::Variable(_) => Shape::Variable,
            NodeData::Parameter(_) => Shape::Parameter,
            NodeData::TypeParameter(_) => Shape::TypeParameter,
            NodeData::BindingElement(_) => Shape::BindingElement,
            NodeData::TypeReference(_) => Shape::TypeReference,
            NodeData::Wrapper(_) => Shape::Wrapper,
            NodeData::QualifiedName(_) => Shape::QualifiedName,
            NodeData::Identifier(_) => Shape::Identifier,
            NodeData::Conditional(_) => Shape::Conditional,
            NodeData::IndexedAccess(_) => Shape::IndexedAccess,
            NodeData::TypePredicate(_) => Shape::TypePredicate,
            NodeData::MappedType(_) => Shape::MappedType,
            NodeData::Call(_) => Shape::Call,
            NodeData::Binary(_) => Shape::Binary,
            NodeData::Unary(_) => Shape::Unary,
            NodeData::PropertyAccess(_) => Shape::PropertyAccess,
            NodeData::Assertion(_) => Shape::Assertion,
            NodeData::Import(_) => Shape::Import,
            NodeData::Module(_) => Shape::Module,
            NodeData::Leaf => Shape::Leaf,
        }
    }

    /// Direct children in source order
    pub fn children(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        match self {
            NodeData::SourceFile(d) => out.push(d.list),
            NodeData::List(d) => out.extend(&d.items),
            NodeData::TypeAlias(d) => {
                out.extend(&d.type_params);
                out.push(d.ty);
            }
            NodeData::Interface(d) => {
                out.extend(&d.type_params);
                out.extend(&d.extends);
                out.extend(&d.members);
            }
            NodeData::Class(d) => {
                out.extend(&d.type_params);
                push_opt(&mut out, d.extends);
                out.extend(&d.implements);
                out.extend(&d.members);
            }
            NodeData::Enum(d) => out.extend(&d.members),
            NodeData::EnumMember(d) => push_opt(&mut out, d.initializer),
            NodeData::Function(d) => {
                out.extend(&d.type_params);
                out.extend(&d.params);
                push_opt(&mut out, d.return_type);
                out.extend(&d.returns);
            }
            NodeData::Property(d) => {
                push_opt(&mut out, d.type_annotation);
                push_opt(&mut out, d.initializer);
            }
            NodeData::VariableStatement(d) => out.extend(&d.declarations),
            NodeData::Variable(d) => {
                out.push(d.name);
                push_opt(&mut out, d.type_annotation);
                push_opt(&mut out, d.initializer);
            }
            NodeData::Parameter(d) => {
                out.push(d.name);
                push_opt(&mut out, d.type_annotation);
                push_opt(&mut out, d.initializer);
            }
            NodeData::TypeParameter(d) => {
                push_opt(&mut out, d.constraint);
                push_opt(&mut out, d.default);
            }
            NodeData::BindingElement(d) => {
                out.push(d.name);
                push_opt(&mut out, d.initializer);
            }
            NodeData::TypeReference(d) => {
                out.push(d.target);
                out.extend(&d.type_args);
            }
            NodeData::Wrapper(d) => out.push(d.inner),
            NodeData::QualifiedName(d) => out.push(d.left),
            NodeData::Conditional(d) => {
                out.push(d.check);
                push_opt(&mut out, d.extends);
                out.push(d.when_true);
                out.push(d.when_false);
            }
            NodeData::IndexedAccess(d) => {
                out.push(d.object);
                out.push(d.index);
            }
            NodeData::TypePredicate(d) => push_opt(&mut out, d.ty),
            NodeData::MappedType(d) => {
                push_opt(&mut out, d.constraint);
                push_opt(&mut out, d.name_type);
                push_opt(&mut out, d.value);
            }
            NodeData::Call(d) => {
                out.push(d.callee);
                out.extend(&d.type_args);
                out.extend(&d.args);
            }
            NodeData::Binary(d) => {
                out.push(d.left);
                out.push(d.right);
            }
            NodeData::Unary(d) => out.push(d.operand),
            NodeData::PropertyAccess(d) => out.push(d.object),
            NodeData::Assertion(d) => {
                out.push(d.expression);
                push_opt(&mut out, d.ty);
            }
            NodeData::Module(d) => out.extend(&d.body),
            NodeData::Identifier(_) | NodeData::Import(_) | NodeData::Leaf => {}
        }
        out
    }
}

/// A node in the arena
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: SyntaxKind,
    pub range: TextRange,
    pub parent: Option<NodeId>,
    pub modifiers: Modifiers,
    pub doc: Option<JsDoc>,
    pub data: NodeData,
}

/// One lowered source file
#[derive(Debug)]
pub struct SourceTree {
    id: FileId,
    path: PathBuf,
    text: Arc<str>,
    nodes: Vec<Node>,
    root: NodeId,
    line_starts: Vec<usize>,
}

impl SourceTree {
    pub(crate) fn new(
        id: FileId,
        path: PathBuf,
        text: Arc<str>,
        nodes: Vec<Node>,
        root: NodeId,
    ) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            id,
            path,
            text,
            nodes,
            root,
            line_starts,
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The `SourceFile` node
    pub fn root(&self) -> NodeRef<'_> {
        self.node(self.root)
    }

    /// Node by id; ids always come from this tree
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    /// Node by id, if it exists
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then(|| self.node(id))
    }

    /// Every node, in allocation order (parents before children)
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |i| self.node(NodeId::new(i)))
    }

    /// 1-indexed line and 0-indexed column of a byte offset
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        (line + 1, offset - self.line_starts[line])
    }
}

/// A borrowed handle to a node and the tree that owns it
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t SourceTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn tree(self) -> &'t SourceTree {
        self.tree
    }

    pub fn file(self) -> FileId {
        self.tree.id
    }

    fn raw(self) -> &'t Node {
        &self.tree.nodes[self.id.index()]
    }

    pub fn kind(self) -> SyntaxKind {
        self.raw().kind
    }

    pub fn data(self) -> &'t NodeData {
        &self.raw().data
    }

    pub fn range(self) -> TextRange {
        self.raw().range
    }

    pub fn modifiers(self) -> &'t Modifiers {
        &self.raw().modifiers
    }

    pub fn doc(self) -> Option<&'t JsDoc> {
        self.raw().doc.as_ref()
    }

    /// The node's source text
    pub fn text(self) -> &'t str {
        let range = self.range();
        self.tree.text.get(range.start..range.end).unwrap_or("")
    }

    pub fn parent(self) -> Option<NodeRef<'t>> {
        self.raw().parent.map(|id| self.tree.node(id))
    }

    /// Parent, grandparent, ... up to the source file
    pub fn ancestors(self) -> impl Iterator<Item = NodeRef<'t>> {
        std::iter::successors(self.parent(), |n| n.parent())
    }

    /// Another node of the same tree
    pub fn at(self, id: NodeId) -> NodeRef<'t> {
        self.tree.node(id)
    }

    pub fn at_opt(self, id: Option<NodeId>) -> Option<NodeRef<'t>> {
        id.map(|id| self.at(id))
    }

    pub fn children(self) -> Vec<NodeRef<'t>> {
        self.data()
            .children()
            .into_iter()
            .map(|id| self.at(id))
            .collect()
    }

    /// View the payload as `D` if the node has that shape
    pub fn narrow<D: Narrow>(self) -> Option<Typed<'t, D>> {
        D::narrow(self.data()).map(|data| Typed { node: self, data })
    }

    /// 1-indexed line and 0-indexed column
    pub fn line_col(self) -> (usize, usize) {
        self.tree.line_col(self.range().start)
    }

    /// The declared name, for nodes that have one
    pub fn name(self) -> Option<&'t str> {
        match self.data() {
            NodeData::TypeAlias(d) => Some(&d.name),
            NodeData::Interface(d) => Some(&d.name),
            NodeData::Enum(d) => Some(&d.name),
            NodeData::EnumMember(d) => Some(&d.name),
            NodeData::TypeParameter(d) => Some(&d.name),
            NodeData::Property(d) => Some(&d.name),
            NodeData::Module(d) => Some(&d.name),
            NodeData::Class(d) => d.name.as_deref(),
            NodeData::Function(d) => d.name.as_deref(),
            NodeData::Variable(d) => self.at(d.name).identifier(),
            NodeData::Parameter(d) => self.at(d.name).identifier(),
            NodeData::BindingElement(d) => self.at(d.name).identifier(),
            _ => None,
        }
    }

    /// The identifier text, for `Identifier` nodes
    pub fn identifier(self) -> Option<&'t str> {
        match self.data() {
            NodeData::Identifier(d) if self.kind() == SyntaxKind::Identifier => Some(&d.name),
            _ => None,
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.range();
        write!(
            f,
            "{}@{}[{}..{}]",
            self.kind(),
            self.tree.path.display(),
            range.start,
            range.end
        )
    }
}

/// Payload types a node can be narrowed to
pub trait Narrow: Sized + 'static {
    fn narrow(data: &NodeData) -> Option<&Self>;
}

macro_rules! narrow {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl Narrow for $ty {
                fn narrow(data: &NodeData) -> Option<&Self> {
                    match data {
                        NodeData::$variant(d) => Some(d),
                        _ => None,
                    }
                }
            }
        )*
    };
}

narrow! {
    SourceFileData => SourceFile,
    ListData => List,
    TypeAliasData => TypeAlias,
    InterfaceData => Interface,
    ClassData => Class,
    EnumData => Enum,
    EnumMemberData => EnumMember,
    FunctionData => Function,
    PropertyData => Property,
    VariableStatementData => VariableStatement,
    VariableData => Variable,
    ParameterData => Parameter,
    TypeParameterData => TypeParameter,
    BindingElementData => BindingElement,
    TypeReferenceData => TypeReference,
    WrapperData => Wrapper,
    QualifiedNameData => QualifiedName,
    IdentifierData => Identifier,
    ConditionalData => Conditional,
    IndexedAccessData => IndexedAccess,
    TypePredicateData => TypePredicate,
    MappedTypeData => MappedType,
    CallData => Call,
    BinaryData => Binary,
    UnaryData => Unary,
    PropertyAccessData => PropertyAccess,
    AssertionData => Assertion,
    ImportData => Import,
    ModuleData => Module,
}

/// A node narrowed to its payload type
pub struct Typed<'t, D> {
    pub node: NodeRef<'t>,
    pub data: &'t D,
}

impl<D> Clone for Typed<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Typed<'_, D> {}

impl<'t, D> Typed<'t, D> {
    /// Another node of the same tree
    pub fn at(&self, id: NodeId) -> NodeRef<'t> {
        self.node.at(id)
    }

    pub fn at_opt(&self, id: Option<NodeId>) -> Option<NodeRef<'t>> {
        self.node.at_opt(id)
    }

    /// Resolve a list of child ids
    pub fn each(&self, ids: &'t [NodeId]) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let node = self.node;
        ids.iter().map(move |id| node.at(*id))
    }
}

impl<D> Deref for Typed<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::parse_tree;

    #[test]
    fn test_parent_links() {
        let tree = parse_tree("/project/src/a.ts", "type A = { x: string };");
        for node in tree.nodes() {
            if node.kind() != SyntaxKind::SourceFile {
                assert!(node.parent().is_some(), "{:?} has no parent", node);
            }
            for child in node.children() {
                assert_eq!(child.parent(), Some(node));
            }
        }
    }

    #[test]
    fn test_narrow() {
        let tree = parse_tree("/project/src/a.ts", "type A = string;");
        let alias = tree
            .nodes()
            .find(|n| n.kind() == SyntaxKind::TypeAliasDeclaration)
            .unwrap();
        let typed = alias.narrow::<TypeAliasData>().unwrap();
        assert_eq!(typed.name, "A");
        assert_eq!(typed.at(typed.ty).kind(), SyntaxKind::StringKeyword);
        assert!(alias.narrow::<ClassData>().is_none());
        assert_eq!(alias.name(), Some("A"));
    }

    #[test]
    fn test_line_col() {
        let tree = parse_tree("/project/src/a.ts", "\n\nconst x = 1;");
        let decl = tree
            .nodes()
            .find(|n| n.kind() == SyntaxKind::VariableStatement)
            .unwrap();
        assert_eq!(decl.line_col(), (3, 0));
        assert_eq!(decl.text(), "const x = 1;");
    }
}
