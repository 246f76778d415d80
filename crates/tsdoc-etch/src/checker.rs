//! Local type inference
//!
//! There is no TypeScript checker to ask, so declarations without an
//! annotation get their type from a small inference pass over the
//! lowered tree: literals, array and object literals, references to
//! other declarations, `new` and calls of known functions, operators and
//! assertions. Whatever falls outside that is [`CheckedType::Unresolved`].

use crate::project::Project;
use crate::syntax::{
    AssertionData, BinaryData, CallData, ConditionalData, DeclarationKind, EnumData, FileId,
    FunctionBody, FunctionData, ListData, NodeData, NodeId, NodeRef, PropertyAccessData,
    SyntaxKind, UnaryData, VariableStatementData, WrapperData,
};
use std::cell::RefCell;
use std::collections::HashSet;

/// A type produced without a syntactic annotation
#[derive(Debug, Clone, PartialEq)]
pub enum CheckedType<'p> {
    /// `string`, `number`, `boolean`, `void`, ...
    Primitive(&'static str),
    /// A literal, keeping its source text
    Literal { text: String, base: &'static str },
    /// A named type, with its declaration when it is in the project
    Reference {
        name: String,
        declaration: Option<NodeRef<'p>>,
        type_args: Vec<CheckedType<'p>>,
    },
    /// The type of an object literal, function or class expression
    Anonymous(NodeRef<'p>),
    /// An annotation found on a declaration
    Annotated(NodeRef<'p>),
    Union(Vec<CheckedType<'p>>),
    Intersection(Vec<CheckedType<'p>>),
    Array(Box<CheckedType<'p>>),
    /// A fixed-length array, readonly when asserted `as const`
    Tuple {
        elements: Vec<CheckedType<'p>>,
        readonly: bool,
    },
    Unresolved,
}

impl<'p> CheckedType<'p> {
    fn reference(name: impl Into<String>, declaration: Option<NodeRef<'p>>) -> Self {
        CheckedType::Reference {
            name: name.into(),
            declaration,
            type_args: Vec::new(),
        }
    }

    /// Flattened, deduplicated union; unresolved if any member is
    pub fn union(members: Vec<CheckedType<'p>>) -> Self {
        let mut flat: Vec<CheckedType<'p>> = Vec::new();
        for member in members {
            let parts = match member {
                CheckedType::Union(parts) => parts,
                CheckedType::Unresolved => return CheckedType::Unresolved,
                other => vec![other],
            };
            for part in parts {
                if !flat.contains(&part) {
                    flat.push(part);
                }
            }
        }
        match flat.len() {
            0 => CheckedType::Unresolved,
            1 => flat.remove(0),
            _ => CheckedType::Union(flat),
        }
    }

    /// Flattened, deduplicated intersection; unresolved if any member is
    pub fn intersection(members: Vec<CheckedType<'p>>) -> Self {
        let mut flat: Vec<CheckedType<'p>> = Vec::new();
        for member in members {
            let parts = match member {
                CheckedType::Intersection(parts) => parts,
                CheckedType::Unresolved => return CheckedType::Unresolved,
                other => vec![other],
            };
            for part in parts {
                if !flat.contains(&part) {
                    flat.push(part);
                }
            }
        }
        match flat.len() {
            0 => CheckedType::Unresolved,
            1 => flat.remove(0),
            _ => CheckedType::Intersection(flat),
        }
    }

    /// Replace literal types by their primitive base
    pub fn widen(self) -> Self {
        match self {
            CheckedType::Literal { base, .. } => CheckedType::Primitive(base),
            CheckedType::Union(members) => {
                CheckedType::union(members.into_iter().map(CheckedType::widen).collect())
            }
            other => other,
        }
    }

    /// Whether the type, and everything inside it, is known
    pub fn is_resolved(&self) -> bool {
        match self {
            CheckedType::Unresolved => false,
            CheckedType::Union(members) | CheckedType::Intersection(members) => {
                members.iter().all(CheckedType::is_resolved)
            }
            CheckedType::Tuple { elements, .. } => elements.iter().all(CheckedType::is_resolved),
            CheckedType::Array(inner) => inner.is_resolved(),
            CheckedType::Reference { type_args, .. } => type_args.iter().all(CheckedType::is_resolved),
            _ => true,
        }
    }

    /// The node that declares the type, if any
    pub fn declaration(&self) -> Option<NodeRef<'p>> {
        match self {
            CheckedType::Reference { declaration, .. } => *declaration,
            CheckedType::Anonymous(node) => Some(*node),
            _ => None,
        }
    }

    /// The primitive a type is, or is a literal of
    fn base(&self) -> Option<&'static str> {
        match self {
            CheckedType::Primitive(p) => Some(*p),
            CheckedType::Literal { base, .. } => Some(*base),
            CheckedType::Annotated(node) => match node.kind() {
                SyntaxKind::StringKeyword => Some("string"),
                SyntaxKind::NumberKeyword => Some("number"),
                SyntaxKind::BooleanKeyword => Some("boolean"),
                SyntaxKind::BigIntKeyword => Some("bigint"),
                SyntaxKind::LiteralType => node
                    .narrow::<WrapperData>()
                    .and_then(|w| literal_base(w.at(w.inner).kind())),
                _ => None,
            },
            _ => None,
        }
    }
}

fn literal_base(kind: SyntaxKind) -> Option<&'static str> {
    match kind {
        SyntaxKind::StringLiteral | SyntaxKind::TemplateLiteral => Some("string"),
        SyntaxKind::NumericLiteral => Some("number"),
        SyntaxKind::BigIntLiteral => Some("bigint"),
        SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => Some("boolean"),
        _ => None,
    }
}

/// Inference over a loaded project
pub struct Checker<'p> {
    project: &'p Project,
    active: RefCell<HashSet<(FileId, NodeId)>>,
}

impl<'p> Checker<'p> {
    pub fn new(project: &'p Project) -> Self {
        Self {
            project,
            active: RefCell::new(HashSet::new()),
        }
    }

    pub fn project(&self) -> &'p Project {
        self.project
    }

    /// Run `f` unless `node` is already being inferred
    fn guarded(&self, node: NodeRef<'p>, f: impl FnOnce() -> CheckedType<'p>) -> CheckedType<'p> {
        let key = (node.file(), node.id());
        if !self.active.borrow_mut().insert(key) {
            return CheckedType::Unresolved;
        }
        let ty = f();
        self.active.borrow_mut().remove(&key);
        ty
    }

    /// The type of a declaration
    pub fn type_of(&self, node: NodeRef<'p>) -> CheckedType<'p> {
        self.guarded(node, || self.declared(node))
    }

    fn declared(&self, node: NodeRef<'p>) -> CheckedType<'p> {
        match node.data() {
            NodeData::Variable(d) => {
                if let Some(ty) = node.at_opt(d.type_annotation) {
                    return CheckedType::Annotated(ty);
                }
                let Some(init) = node.at_opt(d.initializer) else {
                    return CheckedType::Primitive("any");
                };
                let constant = node
                    .parent()
                    .and_then(|s| s.narrow::<VariableStatementData>())
                    .map(|s| s.declaration_kind == DeclarationKind::Const)
                    .unwrap_or(false);
                let ty = self.infer(init);
                if constant {
                    ty
                } else {
                    ty.widen()
                }
            }
            NodeData::Parameter(d) => match (node.at_opt(d.type_annotation), node.at_opt(d.initializer)) {
                (Some(ty), _) => CheckedType::Annotated(ty),
                (None, Some(init)) => self.infer(init).widen(),
                (None, None) => CheckedType::Primitive("any"),
            },
            NodeData::Property(d) => match (node.at_opt(d.type_annotation), node.at_opt(d.initializer)) {
                (Some(ty), _) => CheckedType::Annotated(ty),
                (None, Some(init)) if node.modifiers().readonly => self.infer(init),
                (None, Some(init)) => self.infer(init).widen(),
                (None, None) if node.kind() == SyntaxKind::ShorthandPropertyAssignment => {
                    CheckedType::Unresolved
                }
                (None, None) => CheckedType::Primitive("any"),
            },
            NodeData::BindingElement(d) => node
                .at_opt(d.initializer)
                .map(|init| self.infer(init).widen())
                .unwrap_or(CheckedType::Unresolved),
            NodeData::EnumMember(d) => match node.at_opt(d.initializer) {
                Some(init) => self.infer(init),
                None => CheckedType::Primitive("number"),
            },
            NodeData::Function(_) => CheckedType::Anonymous(node),
            NodeData::Class(_) if node.kind() == SyntaxKind::ClassExpression => {
                CheckedType::Anonymous(node)
            }
            NodeData::Class(d) => {
                CheckedType::reference(d.name.as_deref().unwrap_or("default"), Some(node))
            }
            NodeData::Interface(d) => CheckedType::reference(d.name.as_str(), Some(node)),
            NodeData::TypeAlias(d) => CheckedType::reference(d.name.as_str(), Some(node)),
            NodeData::Enum(d) => CheckedType::reference(d.name.as_str(), Some(node)),
            NodeData::TypeParameter(d) => CheckedType::reference(d.name.as_str(), Some(node)),
            _ => CheckedType::Unresolved,
        }
    }

    /// The type of an expression
    pub fn infer(&self, expr: NodeRef<'p>) -> CheckedType<'p> {
        use SyntaxKind::*;

        match expr.kind() {
            StringLiteral | NumericLiteral | BigIntLiteral | TrueKeyword | FalseKeyword => {
                match literal_base(expr.kind()) {
                    Some(base) => CheckedType::Literal {
                        text: expr.text().to_string(),
                        base,
                    },
                    None => CheckedType::Unresolved,
                }
            }
            TemplateLiteral => CheckedType::Primitive("string"),
            NullKeyword => CheckedType::Primitive("null"),
            RegularExpressionLiteral => CheckedType::reference("RegExp", None),
            Identifier if expr.text() == "undefined" => CheckedType::Primitive("undefined"),
            Identifier => self
                .project
                .definition(expr)
                .map(|def| self.type_of(def))
                .unwrap_or(CheckedType::Unresolved),
            ObjectLiteralExpression | FunctionExpression | ArrowFunction | ClassExpression => {
                CheckedType::Anonymous(expr)
            }
            ArrayLiteralExpression => match expr.narrow::<ListData>() {
                Some(list) => self.array(list.each(&list.data.items).collect()),
                None => CheckedType::Unresolved,
            },
            NewExpression => expr
                .narrow::<CallData>()
                .map(|call| {
                    let callee = call.at(call.callee);
                    if callee.kind() != Identifier {
                        return CheckedType::Unresolved;
                    }
                    CheckedType::Reference {
                        name: callee.text().to_string(),
                        declaration: self.project.definition(callee),
                        type_args: call
                            .each(&call.data.type_args)
                            .map(CheckedType::Annotated)
                            .collect(),
                    }
                })
                .unwrap_or(CheckedType::Unresolved),
            CallExpression => expr
                .narrow::<CallData>()
                .map(|call| {
                    let callee = call.at(call.callee);
                    if callee.text() == "Object.assign" && !call.data.args.is_empty() {
                        return CheckedType::intersection(
                            call.each(&call.data.args).map(|arg| self.infer(arg)).collect(),
                        );
                    }
                    self.callee_function(callee)
                        .map(|func| self.return_type(func))
                        .unwrap_or(CheckedType::Unresolved)
                })
                .unwrap_or(CheckedType::Unresolved),
            BinaryExpression => expr
                .narrow::<BinaryData>()
                .map(|b| self.binary(b.at(b.left), &b.operator, b.at(b.right)))
                .unwrap_or(CheckedType::Unresolved),
            PrefixUnaryExpression => expr
                .narrow::<UnaryData>()
                .map(|u| self.unary(&u.operator, u.at(u.operand)))
                .unwrap_or(CheckedType::Unresolved),
            ParenthesizedExpression | NonNullExpression | SpreadElement => expr
                .narrow::<WrapperData>()
                .map(|w| self.infer(w.at(w.inner)))
                .unwrap_or(CheckedType::Unresolved),
            AwaitExpression => match expr.narrow::<WrapperData>() {
                Some(w) => match self.infer(w.at(w.inner)) {
                    CheckedType::Reference { name, mut type_args, .. }
                        if name == "Promise" && type_args.len() == 1 =>
                    {
                        type_args.remove(0)
                    }
                    other => other,
                },
                None => CheckedType::Unresolved,
            },
            AsExpression => expr
                .narrow::<AssertionData>()
                .map(|a| match a.at_opt(a.ty) {
                    Some(ty) if !a.satisfies => CheckedType::Annotated(ty),
                    Some(_) => self.infer(a.at(a.expression)),
                    None => self.constant(a.at(a.expression)),
                })
                .unwrap_or(CheckedType::Unresolved),
            ConditionalExpression => expr
                .narrow::<ConditionalData>()
                .map(|c| {
                    CheckedType::union(vec![self.infer(c.at(c.when_true)), self.infer(c.at(c.when_false))])
                })
                .unwrap_or(CheckedType::Unresolved),
            PropertyAccessExpression => expr
                .narrow::<PropertyAccessData>()
                .map(|access| self.member_access(access.at(access.object), &access.name))
                .unwrap_or(CheckedType::Unresolved),
            _ => CheckedType::Unresolved,
        }
    }

    /// The declared or inferred return type of a function-like node
    pub fn return_type(&self, func: NodeRef<'p>) -> CheckedType<'p> {
        let Some(f) = func.narrow::<FunctionData>() else {
            return CheckedType::Unresolved;
        };
        if let Some(ty) = f.at_opt(f.return_type) {
            return CheckedType::Annotated(ty);
        }
        match func.kind() {
            SyntaxKind::Constructor => {
                return func
                    .parent()
                    .map(|class| self.type_of(class))
                    .unwrap_or(CheckedType::Unresolved);
            }
            SyntaxKind::SetAccessor => return CheckedType::Primitive("void"),
            _ => {}
        }
        if f.body == FunctionBody::None {
            return CheckedType::Primitive("any");
        }

        let inferred = self.guarded(func, || {
            let returns: Vec<_> = f
                .each(&f.data.returns)
                .map(|r| self.infer(r).widen())
                .collect();
            if returns.is_empty() {
                CheckedType::Primitive("void")
            } else {
                CheckedType::union(returns)
            }
        });

        if func.modifiers().is_async {
            CheckedType::Reference {
                name: "Promise".to_string(),
                declaration: None,
                type_args: vec![inferred],
            }
        } else {
            inferred
        }
    }

    /// The function a callee expression refers to
    fn callee_function(&self, callee: NodeRef<'p>) -> Option<NodeRef<'p>> {
        let target = match callee.kind() {
            SyntaxKind::Identifier => self.project.definition(callee)?,
            SyntaxKind::ParenthesizedExpression => callee.children().into_iter().next()?,
            _ => callee,
        };
        if target.kind().is_function_like() {
            return Some(target);
        }
        match self.type_of(target) {
            CheckedType::Anonymous(node) if node.kind().is_function_like() => Some(node),
            _ => None,
        }
    }

    fn array(&self, elements: Vec<NodeRef<'p>>) -> CheckedType<'p> {
        if elements.is_empty() {
            return CheckedType::Array(Box::new(CheckedType::Primitive("any")));
        }
        let members = elements
            .into_iter()
            .map(|e| match e.kind() {
                SyntaxKind::SpreadElement => match self.infer(e) {
                    CheckedType::Array(inner) => *inner,
                    _ => CheckedType::Unresolved,
                },
                _ => self.infer(e).widen(),
            })
            .collect();
        match CheckedType::union(members) {
            CheckedType::Unresolved => CheckedType::Unresolved,
            element => CheckedType::Array(Box::new(element)),
        }
    }

    /// The type of an expression asserted `as const`
    ///
    /// Array literals become readonly tuples and literals keep their
    /// literal types all the way down.
    fn constant(&self, expr: NodeRef<'p>) -> CheckedType<'p> {
        match expr.kind() {
            SyntaxKind::ArrayLiteralExpression => {
                let Some(list) = expr.narrow::<ListData>() else {
                    return CheckedType::Unresolved;
                };
                let mut elements = Vec::new();
                for item in list.each(&list.data.items) {
                    if item.kind() != SyntaxKind::SpreadElement {
                        elements.push(self.constant(item));
                        continue;
                    }
                    let inner = item
                        .narrow::<WrapperData>()
                        .map(|w| self.infer(w.at(w.inner)));
                    match inner {
                        Some(CheckedType::Tuple { elements: spread, .. }) => elements.extend(spread),
                        _ => return CheckedType::Unresolved,
                    }
                }
                CheckedType::Tuple {
                    elements,
                    readonly: true,
                }
            }
            SyntaxKind::ParenthesizedExpression => expr
                .narrow::<WrapperData>()
                .map(|w| self.constant(w.at(w.inner)))
                .unwrap_or(CheckedType::Unresolved),
            _ => self.infer(expr),
        }
    }

    fn binary(&self, left: NodeRef<'p>, operator: &str, right: NodeRef<'p>) -> CheckedType<'p> {
        match operator {
            "==" | "!=" | "===" | "!==" | "<" | ">" | "<=" | ">=" | "instanceof" | "in" => {
                CheckedType::Primitive("boolean")
            }
            "-" | "*" | "/" | "%" | "**" | "<<" | ">>" | ">>>" | "&" | "|" | "^" => {
                let both_bigint = [left, right]
                    .iter()
                    .all(|side| self.infer(*side).base() == Some("bigint"));
                CheckedType::Primitive(if both_bigint { "bigint" } else { "number" })
            }
            "+" => {
                let (l, r) = (self.infer(left), self.infer(right));
                match (l.base(), r.base()) {
                    (Some("string"), _) | (_, Some("string")) => CheckedType::Primitive("string"),
                    (Some("number"), Some("number")) => CheckedType::Primitive("number"),
                    (Some("bigint"), Some("bigint")) => CheckedType::Primitive("bigint"),
                    _ => CheckedType::Unresolved,
                }
            }
            "&&" | "||" | "??" => {
                CheckedType::union(vec![self.infer(left).widen(), self.infer(right).widen()])
            }
            op if op.ends_with('=') => self.infer(right),
            _ => CheckedType::Unresolved,
        }
    }

    fn unary(&self, operator: &str, operand: NodeRef<'p>) -> CheckedType<'p> {
        match operator {
            "!" | "delete" => CheckedType::Primitive("boolean"),
            "typeof" => CheckedType::Primitive("string"),
            "void" => CheckedType::Primitive("undefined"),
            "-" | "+" | "~" | "++" | "--" => match self.infer(operand) {
                CheckedType::Literal { text, base } if operator == "-" && base != "string" => {
                    CheckedType::Literal {
                        text: format!("-{}", text),
                        base,
                    }
                }
                ty if ty.base() == Some("bigint") => CheckedType::Primitive("bigint"),
                _ => CheckedType::Primitive("number"),
            },
            _ => CheckedType::Unresolved,
        }
    }

    fn member_access(&self, object: NodeRef<'p>, name: &str) -> CheckedType<'p> {
        if object.kind() == SyntaxKind::Identifier {
            if let Some(def) = self.project.definition(object) {
                if let Some(e) = def.narrow::<EnumData>() {
                    return CheckedType::reference(e.name.as_str(), Some(def));
                }
            }
        }
        match self.infer(object) {
            CheckedType::Anonymous(node) if node.kind() == SyntaxKind::ObjectLiteralExpression => node
                .children()
                .into_iter()
                .find(|p| p.name() == Some(name))
                .map(|p| self.type_of(p))
                .unwrap_or(CheckedType::Unresolved),
            ty if name == "length"
                && (matches!(ty, CheckedType::Array(_)) || ty.base() == Some("string")) =>
            {
                CheckedType::Primitive("number")
            }
            _ => CheckedType::Unresolved,
        }
    }
}
