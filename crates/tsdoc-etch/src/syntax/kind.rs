//! Syntax kinds
//!
//! Every node of a [`SourceTree`](super::SourceTree) carries exactly one
//! kind. The names follow the TypeScript compiler's `SyntaxKind` so
//! diagnostics read the way TypeScript users expect.

use serde::{Deserialize, Serialize};

macro_rules! syntax_kinds {
    ($($kind:ident),* $(,)?) => {
        /// The closed set of node kinds the generator distinguishes
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum SyntaxKind {
            $($kind),*
        }

        impl SyntaxKind {
            /// Every kind, in declaration order
            pub const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$kind),*];

            /// The kind's name as TypeScript spells it
            pub fn name(self) -> &'static str {
                match self {
                    $(SyntaxKind::$kind => stringify!($kind)),*
                }
            }
        }
    };
}

syntax_kinds! {
    // structure
    SourceFile,
    SyntaxList,
    Unknown,

    // declarations
    TypeAliasDeclaration,
    InterfaceDeclaration,
    ClassDeclaration,
    ClassExpression,
    EnumDeclaration,
    EnumMember,
    FunctionDeclaration,
    FunctionExpression,
    ArrowFunction,
    MethodDeclaration,
    MethodSignature,
    Constructor,
    GetAccessor,
    SetAccessor,
    CallSignature,
    ConstructSignature,
    IndexSignature,
    PropertyDeclaration,
    PropertySignature,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    ClassStaticBlockDeclaration,
    VariableStatement,
    VariableDeclaration,
    Parameter,
    TypeParameter,
    ModuleDeclaration,
    ImportDeclaration,
    ExportDeclaration,
    ExportAssignment,
    ExpressionStatement,

    // binding patterns
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,

    // type nodes
    TypeReference,
    ExpressionWithTypeArguments,
    QualifiedName,
    Identifier,
    LiteralType,
    ArrayType,
    TupleType,
    NamedTupleMember,
    UnionType,
    IntersectionType,
    TypeLiteral,
    FunctionType,
    ConstructorType,
    ParenthesizedType,
    ConditionalType,
    InferType,
    IndexedAccessType,
    TypeOperator,
    TypeQuery,
    TypePredicate,
    MappedType,
    RestType,
    OptionalType,
    ThisType,
    ImportType,

    // keywords
    StringKeyword,
    NumberKeyword,
    BooleanKeyword,
    BigIntKeyword,
    SymbolKeyword,
    ObjectKeyword,
    AnyKeyword,
    UnknownKeyword,
    NeverKeyword,
    VoidKeyword,
    UndefinedKeyword,
    NullKeyword,
    IntrinsicKeyword,
    TrueKeyword,
    FalseKeyword,
    ThisKeyword,

    // literals
    StringLiteral,
    NumericLiteral,
    BigIntLiteral,
    TemplateLiteral,
    RegularExpressionLiteral,

    // expressions
    ObjectLiteralExpression,
    ArrayLiteralExpression,
    CallExpression,
    NewExpression,
    BinaryExpression,
    PrefixUnaryExpression,
    PropertyAccessExpression,
    ParenthesizedExpression,
    AsExpression,
    NonNullExpression,
    AwaitExpression,
    ConditionalExpression,
    SpreadElement,
}

impl SyntaxKind {
    /// Kinds whose nodes are functions (declarations, expressions,
    /// members and type-level signatures)
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunctionDeclaration
                | SyntaxKind::FunctionExpression
                | SyntaxKind::ArrowFunction
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::MethodSignature
                | SyntaxKind::Constructor
                | SyntaxKind::GetAccessor
                | SyntaxKind::SetAccessor
                | SyntaxKind::CallSignature
                | SyntaxKind::ConstructSignature
                | SyntaxKind::IndexSignature
                | SyntaxKind::FunctionType
                | SyntaxKind::ConstructorType
        )
    }

    /// Kinds that declare a named member with an optional type and
    /// initializer
    pub fn is_property_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::PropertyDeclaration
                | SyntaxKind::PropertySignature
                | SyntaxKind::PropertyAssignment
                | SyntaxKind::ShorthandPropertyAssignment
                | SyntaxKind::NamedTupleMember
        )
    }

    /// Keyword type kinds
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::StringKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::BigIntKeyword
                | SyntaxKind::SymbolKeyword
                | SyntaxKind::ObjectKeyword
                | SyntaxKind::AnyKeyword
                | SyntaxKind::UnknownKeyword
                | SyntaxKind::NeverKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::UndefinedKeyword
                | SyntaxKind::NullKeyword
                | SyntaxKind::IntrinsicKeyword
        )
    }

    /// Literal value kinds, including `true`/`false`
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::StringLiteral
                | SyntaxKind::NumericLiteral
                | SyntaxKind::BigIntLiteral
                | SyntaxKind::TemplateLiteral
                | SyntaxKind::RegularExpressionLiteral
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
        )
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = SyntaxKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), SyntaxKind::ALL.len());
    }

    #[test]
    fn test_display() {
        assert_eq!(SyntaxKind::TypeAliasDeclaration.to_string(), "TypeAliasDeclaration");
    }

    #[test]
    fn test_categories() {
        assert!(SyntaxKind::ArrowFunction.is_function_like());
        assert!(!SyntaxKind::ArrowFunction.is_property_like());
        assert!(SyntaxKind::NamedTupleMember.is_property_like());
        assert!(SyntaxKind::NullKeyword.is_keyword());
        assert!(SyntaxKind::TrueKeyword.is_literal());
    }
}
