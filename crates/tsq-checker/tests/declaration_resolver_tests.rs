//! Canonical declaration resolution across merged and multi-file symbols.

use tsq_ast::{AstBuilder, ModifierFlags, NodeArena, NodeIndex, SyntaxKind};
use tsq_binder::{symbol_flags, BinderState, SymbolId};
use tsq_checker::{first_declaration_in_file, CheckerState};
use tsq_solver::TypeInterner;

struct Fixture {
    arena: NodeArena,
    binder: BinderState,
    file_a: NodeIndex,
    file_b: NodeIndex,
    symbol: SymbolId,
    decl_a1: NodeIndex,
    decl_a2: NodeIndex,
    decl_b: NodeIndex,
}

/// Symbol `Thing` declared twice in file A (interface merged with module)
/// and once more in file B.
fn merged_symbol_fixture() -> Fixture {
    let mut b = AstBuilder::new();

    let name_a1 = b.identifier("Thing");
    let decl_a1 = b.named_declaration(
        SyntaxKind::InterfaceDeclaration,
        name_a1,
        ModifierFlags::NONE,
    );
    let name_a2 = b.identifier("Thing");
    let decl_a2 = b.named_declaration(SyntaxKind::ModuleDeclaration, name_a2, ModifierFlags::NONE);
    let file_a = b.source_file("a.ts", vec![decl_a1, decl_a2]);

    let name_b = b.identifier("Thing");
    let decl_b = b.named_declaration(
        SyntaxKind::InterfaceDeclaration,
        name_b,
        ModifierFlags::NONE,
    );
    let file_b = b.source_file("b.ts", vec![decl_b]);

    let arena = b.finish();

    let mut binder = BinderState::new();
    let symbol = binder.declare_symbol("Thing", symbol_flags::TYPE, name_a1, decl_a1);
    binder.declare_symbol("Thing", symbol_flags::TYPE, name_a2, decl_a2);
    binder.declare_symbol("Thing", symbol_flags::TYPE, name_b, decl_b);

    Fixture {
        arena,
        binder,
        file_a,
        file_b,
        symbol,
        decl_a1,
        decl_a2,
        decl_b,
    }
}

#[test]
fn picks_textually_first_declaration_per_file() {
    let f = merged_symbol_fixture();

    assert_eq!(
        first_declaration_in_file(&f.arena, &f.binder.symbols, f.symbol, f.file_a),
        Some(f.decl_a1)
    );
    assert_eq!(
        first_declaration_in_file(&f.arena, &f.binder.symbols, f.symbol, f.file_b),
        Some(f.decl_b)
    );
}

#[test]
fn declarations_outside_the_file_are_excluded() {
    let mut b = AstBuilder::new();
    let name = b.identifier("only");
    let decl = b.named_declaration(SyntaxKind::FunctionDeclaration, name, ModifierFlags::NONE);
    let _file_with_decl = b.source_file("with.ts", vec![decl]);
    let empty = b.source_file("without.ts", vec![]);
    let arena = b.finish();

    let mut binder = BinderState::new();
    let symbol = binder.declare_symbol("only", symbol_flags::VALUE, name, decl);

    assert_eq!(
        first_declaration_in_file(&arena, &binder.symbols, symbol, empty),
        None
    );
}

#[test]
fn is_first_declaration_true_only_for_the_canonical_one() {
    let f = merged_symbol_fixture();
    let types = TypeInterner::new();
    let checker = CheckerState::new(&f.arena, &f.binder, &types, f.file_a);

    assert!(checker.is_first_declaration(f.decl_a1));
    assert!(!checker.is_first_declaration(f.decl_a2));
    // decl_b lives in another file entirely.
    assert!(!checker.is_first_declaration(f.decl_b));
}

#[test]
fn is_first_declaration_follows_the_checker_file() {
    let f = merged_symbol_fixture();
    let types = TypeInterner::new();
    let checker = CheckerState::new(&f.arena, &f.binder, &types, f.file_b);

    assert!(checker.is_first_declaration(f.decl_b));
    assert!(!checker.is_first_declaration(f.decl_a1));
}

#[test]
fn unresolvable_name_fails_closed() {
    let mut b = AstBuilder::new();
    let name = b.identifier("unbound");
    let decl = b.variable_declaration(name, NodeIndex::NONE, ModifierFlags::NONE);
    let stmt = b.variable_statement(vec![decl]);
    let file = b.source_file("main.ts", vec![stmt]);
    let arena = b.finish();

    // Binder never saw this declaration (e.g. a destructuring pattern it
    // could not bind).
    let binder = BinderState::new();
    let types = TypeInterner::new();
    let checker = CheckerState::new(&arena, &binder, &types, file);

    assert!(!checker.is_first_declaration(decl));
}
