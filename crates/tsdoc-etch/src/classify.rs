//! Node classification
//!
//! [`classify`] reads a node's kind tag; [`validator`] tells which
//! payload shape a kind must carry, so the dispatcher can refuse a node
//! whose payload drifted from its tag before narrowing it.

use crate::syntax::{NodeRef, Shape, SyntaxKind};

/// The node's kind
pub fn classify(node: NodeRef<'_>) -> SyntaxKind {
    node.kind()
}

/// The payload shape every node of `kind` carries
///
/// `Unknown` has no validator: nothing can be said about foreign nodes.
pub fn validator(kind: SyntaxKind) -> Option<Shape> {
    use SyntaxKind::*;

    let shape = match kind {
        Unknown => return None,
        SourceFile => Shape::SourceFile,

        SyntaxList | TupleType | UnionType | IntersectionType | TypeLiteral
        | ObjectLiteralExpression | ArrayLiteralExpression | ObjectBindingPattern
        | ArrayBindingPattern => Shape::List,

        TypeAliasDeclaration => Shape::TypeAlias,
        InterfaceDeclaration => Shape::Interface,
        ClassDeclaration | ClassExpression => Shape::Class,
        EnumDeclaration => Shape::Enum,
        EnumMember => Shape::EnumMember,
        ModuleDeclaration => Shape::Module,

        FunctionDeclaration | FunctionExpression | ArrowFunction | MethodDeclaration
        | MethodSignature | Constructor | GetAccessor | SetAccessor | CallSignature
        | ConstructSignature | IndexSignature | FunctionType | ConstructorType => Shape::Function,

        PropertyDeclaration | PropertySignature | PropertyAssignment
        | ShorthandPropertyAssignment | NamedTupleMember => Shape::Property,

        VariableStatement => Shape::VariableStatement,
        VariableDeclaration => Shape::Variable,
        Parameter => Shape::Parameter,
        TypeParameter => Shape::TypeParameter,
        BindingElement => Shape::BindingElement,

        TypeReference | ExpressionWithTypeArguments => Shape::TypeReference,

        LiteralType | ArrayType | ParenthesizedType | RestType | OptionalType | TypeOperator
        | TypeQuery | ParenthesizedExpression | SpreadElement | NonNullExpression
        | AwaitExpression | ExpressionStatement | ExportAssignment => Shape::Wrapper,

        QualifiedName => Shape::QualifiedName,
        Identifier | InferType => Shape::Identifier,
        ConditionalType | ConditionalExpression => Shape::Conditional,
        IndexedAccessType => Shape::IndexedAccess,
        TypePredicate => Shape::TypePredicate,
        MappedType => Shape::MappedType,
        CallExpression | NewExpression => Shape::Call,
        BinaryExpression => Shape::Binary,
        PrefixUnaryExpression => Shape::Unary,
        PropertyAccessExpression => Shape::PropertyAccess,
        AsExpression => Shape::Assertion,
        ImportDeclaration => Shape::Import,

        StringKeyword | NumberKeyword | BooleanKeyword | BigIntKeyword | SymbolKeyword
        | ObjectKeyword | AnyKeyword | UnknownKeyword | NeverKeyword | VoidKeyword
        | UndefinedKeyword | NullKeyword | IntrinsicKeyword | TrueKeyword | FalseKeyword
        | ThisKeyword | ThisType | ImportType | StringLiteral | NumericLiteral | BigIntLiteral
        | TemplateLiteral | RegularExpressionLiteral | ClassStaticBlockDeclaration
        | ExportDeclaration => Shape::Leaf,
    };
    Some(shape)
}

/// Whether the node's payload matches its kind
pub fn validate(node: NodeRef<'_>) -> bool {
    validator(classify(node)) == Some(node.data().shape())
}

/// Scalar, keyword and literal types with no structure worth rendering
pub fn is_primitive(node: NodeRef<'_>) -> bool {
    use SyntaxKind::*;

    matches!(
        classify(node),
        StringKeyword
            | NumberKeyword
            | BooleanKeyword
            | BigIntKeyword
            | SymbolKeyword
            | ObjectKeyword
            | AnyKeyword
            | UnknownKeyword
            | NeverKeyword
            | VoidKeyword
            | UndefinedKeyword
            | NullKeyword
            | StringLiteral
            | NumericLiteral
            | BigIntLiteral
            | TrueKeyword
            | FalseKeyword
            | LiteralType
    )
}
