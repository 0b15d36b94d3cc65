//! Export analyzer tests: every statement kind is enumerated, and the
//! declarator-vs-statement flag asymmetry for variable statements is
//! pinned down.

use tsq_ast::{AstBuilder, ModifierFlags, NodeArena, NodeIndex, SyntaxKind};
use tsq_checker::{has_export_equals, is_file_module, is_statement_exported};

fn named_decl(
    b: &mut AstBuilder,
    kind: SyntaxKind,
    name: &str,
    flags: ModifierFlags,
) -> NodeIndex {
    let name = b.identifier(name);
    b.named_declaration(kind, name, flags)
}

fn var_stmt(b: &mut AstBuilder, bindings: &[(&str, ModifierFlags)]) -> NodeIndex {
    let declarations = bindings
        .iter()
        .map(|&(name, flags)| {
            let name = b.identifier(name);
            b.variable_declaration(name, NodeIndex::NONE, flags)
        })
        .collect();
    b.variable_statement(declarations)
}

fn single_statement_file(build: impl FnOnce(&mut AstBuilder) -> NodeIndex) -> (NodeArena, NodeIndex, NodeIndex) {
    let mut b = AstBuilder::new();
    let stmt = build(&mut b);
    let file = b.source_file("main.ts", vec![stmt]);
    (b.finish(), file, stmt)
}

#[test]
fn exported_declaration_statements_of_every_kind() {
    for kind in [
        SyntaxKind::FunctionDeclaration,
        SyntaxKind::ClassDeclaration,
        SyntaxKind::InterfaceDeclaration,
        SyntaxKind::TypeAliasDeclaration,
        SyntaxKind::EnumDeclaration,
        SyntaxKind::ModuleDeclaration,
    ] {
        let (arena, file, stmt) =
            single_statement_file(|b| named_decl(b, kind, "a", ModifierFlags::EXPORT));
        assert!(is_statement_exported(&arena, stmt), "{kind:?}");
        assert!(is_file_module(&arena, file), "{kind:?}");

        let (arena, file, stmt) =
            single_statement_file(|b| named_decl(b, kind, "a", ModifierFlags::NONE));
        assert!(!is_statement_exported(&arena, stmt), "{kind:?}");
        assert!(!is_file_module(&arena, file), "{kind:?}");
    }
}

#[test]
fn export_assignment_and_reexport_are_always_significant() {
    let (arena, file, stmt) = single_statement_file(|b| {
        let expr = b.identifier("value");
        b.export_assignment(expr, false)
    });
    assert!(is_statement_exported(&arena, stmt));
    assert!(is_file_module(&arena, file));

    let (arena, file, stmt) = single_statement_file(|b| b.export_declaration(vec![]));
    assert!(is_statement_exported(&arena, stmt));
    assert!(is_file_module(&arena, file));
}

#[test]
fn variable_statement_checks_each_declarator() {
    // One exported binding among plain ones is enough.
    let (arena, file, stmt) = single_statement_file(|b| {
        var_stmt(
            b,
            &[
                ("plain", ModifierFlags::NONE),
                ("shared", ModifierFlags::EXPORT),
            ],
        )
    });
    assert!(is_statement_exported(&arena, stmt));
    assert!(is_file_module(&arena, file));

    let (arena, file, stmt) = single_statement_file(|b| {
        var_stmt(b, &[("a", ModifierFlags::NONE), ("b", ModifierFlags::NONE)])
    });
    assert!(!is_statement_exported(&arena, stmt));
    assert!(!is_file_module(&arena, file));
}

#[test]
fn variable_statement_ignores_its_own_statement_level_flag() {
    // Only the declarators carry export significance; a flag cached on
    // the statement node itself must not count.
    let (mut arena, file, stmt) = single_statement_file(|b| {
        var_stmt(b, &[("a", ModifierFlags::NONE), ("b", ModifierFlags::NONE)])
    });
    if let Some(node) = arena.get_mut(stmt) {
        node.base.modifier_flags = ModifierFlags::EXPORT.bits();
    }

    assert!(arena
        .combined_modifier_flags(stmt)
        .contains(ModifierFlags::EXPORT));
    assert!(!is_statement_exported(&arena, stmt));
    assert!(!is_file_module(&arena, file));
}

#[test]
fn non_declaration_statements_are_never_significant() {
    let (arena, file, stmt) = single_statement_file(|b| {
        let callee = b.identifier("run");
        let call = b.call(callee, vec![]);
        b.expression_statement(call)
    });
    assert!(!is_statement_exported(&arena, stmt));
    assert!(!is_file_module(&arena, file));

    let (arena, file, stmt) = single_statement_file(|b| b.empty_statement());
    assert!(!is_statement_exported(&arena, stmt));
    assert!(!is_file_module(&arena, file));

    // Imports alone do not make a file export anything.
    let (arena, file, stmt) = single_statement_file(|b| {
        let spec = b.string_literal("./dep");
        b.import_declaration(spec)
    });
    assert!(!is_statement_exported(&arena, stmt));
    assert!(!is_file_module(&arena, file));
}

#[test]
fn mixed_file_is_a_module_when_any_statement_is_significant() {
    // [export declaration D1, non-exported statement S2, export-assignment EA3]
    let mut b = AstBuilder::new();
    let d1 = named_decl(
        &mut b,
        SyntaxKind::FunctionDeclaration,
        "f",
        ModifierFlags::EXPORT,
    );
    let lit = b.numeric_literal("1");
    let s2 = b.expression_statement(lit);
    let expr = b.identifier("f");
    let ea3 = b.export_assignment(expr, true);
    let file = b.source_file("main.ts", vec![d1, s2, ea3]);
    let arena = b.finish();

    assert!(is_file_module(&arena, file));
    assert!(is_statement_exported(&arena, d1));
    assert!(!is_statement_exported(&arena, s2));
    assert!(is_statement_exported(&arena, ea3));
}

#[test]
fn export_equals_distinguished_from_export_default() {
    let (arena, file, _) = single_statement_file(|b| {
        let expr = b.identifier("api");
        b.export_assignment(expr, true)
    });
    assert!(has_export_equals(&arena, file));

    let (arena, file, _) = single_statement_file(|b| {
        let expr = b.identifier("api");
        b.export_assignment(expr, false)
    });
    assert!(!has_export_equals(&arena, file));
}

#[test]
fn empty_file_is_not_a_module() {
    let mut b = AstBuilder::new();
    let file = b.source_file("empty.ts", vec![]);
    let arena = b.finish();

    assert!(!is_file_module(&arena, file));
    assert!(!has_export_equals(&arena, file));
}
