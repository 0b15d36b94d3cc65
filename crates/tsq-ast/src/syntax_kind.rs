//! Node kind tags.
//!
//! `u16`-repr so hosts with a wider grammar can map their own kind
//! numbering onto this one without renumbering.

use serde::Serialize;

/// Kind tag for every AST node the query layer can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown = 0,

    // Tokens and atoms
    Identifier,
    ThisKeyword,
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,

    // Expressions
    TemplateExpression,
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    TaggedTemplateExpression,
    ParenthesizedExpression,
    FunctionExpression,
    ArrowFunction,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    ConditionalExpression,

    // Statements
    Block,
    EmptyStatement,
    VariableStatement,
    ExpressionStatement,
    IfStatement,
    ReturnStatement,

    // Declarations
    VariableDeclaration,
    VariableDeclarationList,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    ModuleDeclaration,

    // Module surface
    ImportDeclaration,
    ExportAssignment,
    ExportDeclaration,

    SourceFile,
}
