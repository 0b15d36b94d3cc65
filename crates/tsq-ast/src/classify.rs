//! Kind classification predicates.
//!
//! Pure functions over `SyntaxKind`; the export analyzer and the purity
//! classifier are built on these.

use crate::syntax_kind::SyntaxKind;

/// Literal expression kinds: numeric, bigint, string, template without
/// substitutions, regex, and the boolean/null keyword literals.
pub fn is_literal_expression_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::RegularExpressionLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
    )
}

/// Statement-level declaration kinds whose export modifier lives on the
/// statement itself. Variable statements are deliberately excluded: their
/// export flags sit on the individual declarators.
pub fn is_declaration_statement_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::FunctionDeclaration
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::ModuleDeclaration
    )
}

/// Any kind that introduces a named binding.
pub fn is_declaration_kind(kind: SyntaxKind) -> bool {
    is_declaration_statement_kind(kind) || kind == SyntaxKind::VariableDeclaration
}

pub fn is_source_file_kind(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::SourceFile
}
