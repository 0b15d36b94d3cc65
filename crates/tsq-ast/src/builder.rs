//! Construction helper for well-formed arenas.
//!
//! The host frontend owns parsing; this builder stands in for it wherever
//! a tree has to be assembled by hand (tests, embedding hosts). It upholds
//! the two structural invariants the query layer relies on: positions are
//! unique and monotonically increasing in creation order, and every child
//! gets its parent back-reference wired exactly once.

use crate::arena::{Node, NodeArena, NodeBase, NodeData, NodeIndex, NodeList};
use crate::flags::{ModifierFlags, NodeFlags};
use crate::syntax_kind::SyntaxKind;

#[derive(Debug, Default)]
pub struct AstBuilder {
    arena: NodeArena,
    next_pos: u32,
}

impl AstBuilder {
    pub fn new() -> AstBuilder {
        AstBuilder {
            arena: NodeArena::new(),
            next_pos: 0,
        }
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn finish(self) -> NodeArena {
        self.arena
    }

    fn push(&mut self, kind: SyntaxKind, data: NodeData) -> NodeIndex {
        let pos = self.next_pos;
        self.next_pos += 1;
        let mut base = NodeBase::new(kind, pos, pos + 1);
        base.id = self.arena.len() as u32;
        self.arena.add(Node { base, data })
    }

    fn adopt(&mut self, parent: NodeIndex, child: NodeIndex) {
        if let Some(node) = self.arena.get_mut(child) {
            debug_assert!(node.base.parent.is_none(), "parent wired twice");
            node.base.parent = parent;
        }
    }

    fn adopt_all(&mut self, parent: NodeIndex, children: &[NodeIndex]) {
        for &child in children {
            self.adopt(parent, child);
        }
    }

    fn set_modifier_flags(&mut self, index: NodeIndex, flags: ModifierFlags) {
        if let Some(node) = self.arena.get_mut(index) {
            node.base.modifier_flags = flags.bits();
        }
    }

    // Atoms

    pub fn identifier(&mut self, text: &str) -> NodeIndex {
        self.push(
            SyntaxKind::Identifier,
            NodeData::Identifier {
                escaped_text: text.to_string(),
            },
        )
    }

    pub fn numeric_literal(&mut self, text: &str) -> NodeIndex {
        self.push(
            SyntaxKind::NumericLiteral,
            NodeData::Literal {
                text: text.to_string(),
            },
        )
    }

    pub fn string_literal(&mut self, text: &str) -> NodeIndex {
        self.push(
            SyntaxKind::StringLiteral,
            NodeData::Literal {
                text: text.to_string(),
            },
        )
    }

    /// Keyword token node (`this`, `true`, `false`, `null`).
    pub fn keyword(&mut self, kind: SyntaxKind) -> NodeIndex {
        self.push(kind, NodeData::Token)
    }

    // Expressions

    pub fn call(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::CallExpression,
            NodeData::Call {
                expression: callee,
                arguments: NodeList::new(arguments.clone()),
            },
        );
        self.adopt(idx, callee);
        self.adopt_all(idx, &arguments);
        idx
    }

    pub fn property_access(&mut self, expression: NodeIndex, name: NodeIndex) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::PropertyAccessExpression,
            NodeData::PropertyAccess { expression, name },
        );
        self.adopt(idx, expression);
        self.adopt(idx, name);
        idx
    }

    pub fn element_access(
        &mut self,
        expression: NodeIndex,
        argument_expression: NodeIndex,
    ) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::ElementAccessExpression,
            NodeData::ElementAccess {
                expression,
                argument_expression,
            },
        );
        self.adopt(idx, expression);
        self.adopt(idx, argument_expression);
        idx
    }

    pub fn prefix_unary(&mut self, operand: NodeIndex) -> NodeIndex {
        let idx = self.push(SyntaxKind::PrefixUnaryExpression, NodeData::Unary { operand });
        self.adopt(idx, operand);
        idx
    }

    pub fn conditional(
        &mut self,
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    ) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::ConditionalExpression,
            NodeData::Conditional {
                condition,
                when_true,
                when_false,
            },
        );
        self.adopt(idx, condition);
        self.adopt(idx, when_true);
        self.adopt(idx, when_false);
        idx
    }

    pub fn paren(&mut self, expression: NodeIndex) -> NodeIndex {
        let idx = self.push(SyntaxKind::ParenthesizedExpression, NodeData::Paren { expression });
        self.adopt(idx, expression);
        idx
    }

    pub fn array_literal(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::ArrayLiteralExpression,
            NodeData::ArrayLiteral {
                elements: NodeList::new(elements.clone()),
            },
        );
        self.adopt_all(idx, &elements);
        idx
    }

    pub fn object_literal(&mut self, properties: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::ObjectLiteralExpression,
            NodeData::ObjectLiteral {
                properties: NodeList::new(properties.clone()),
            },
        );
        self.adopt_all(idx, &properties);
        idx
    }

    pub fn binary(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        let idx = self.push(SyntaxKind::BinaryExpression, NodeData::Binary { left, right });
        self.adopt(idx, left);
        self.adopt(idx, right);
        idx
    }

    pub fn template_expression(&mut self, spans: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::TemplateExpression,
            NodeData::TemplateExpression {
                spans: NodeList::new(spans.clone()),
            },
        );
        self.adopt_all(idx, &spans);
        idx
    }

    // Statements and declarations

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::Block,
            NodeData::Block {
                statements: NodeList::new(statements.clone()),
            },
        );
        self.adopt_all(idx, &statements);
        idx
    }

    pub fn empty_statement(&mut self) -> NodeIndex {
        self.push(SyntaxKind::EmptyStatement, NodeData::Token)
    }

    pub fn import_declaration(&mut self, module_specifier: NodeIndex) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::ImportDeclaration,
            NodeData::ImportDeclaration { module_specifier },
        );
        self.adopt(idx, module_specifier);
        idx
    }

    pub fn expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::ExpressionStatement,
            NodeData::ExpressionStatement { expression },
        );
        self.adopt(idx, expression);
        idx
    }

    pub fn variable_declaration(
        &mut self,
        name: NodeIndex,
        initializer: NodeIndex,
        modifier_flags: ModifierFlags,
    ) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::VariableDeclaration,
            NodeData::VariableDeclaration { name, initializer },
        );
        self.set_modifier_flags(idx, modifier_flags);
        self.adopt(idx, name);
        if initializer.is_some() {
            self.adopt(idx, initializer);
        }
        idx
    }

    pub fn variable_statement(&mut self, declarations: Vec<NodeIndex>) -> NodeIndex {
        let list = self.push(
            SyntaxKind::VariableDeclarationList,
            NodeData::VariableDeclarationList {
                declarations: NodeList::new(declarations.clone()),
            },
        );
        if let Some(node) = self.arena.get_mut(list) {
            node.base.flags = NodeFlags::LET.bits();
        }
        self.adopt_all(list, &declarations);
        let stmt = self.push(
            SyntaxKind::VariableStatement,
            NodeData::VariableStatement {
                declaration_list: list,
            },
        );
        self.adopt(stmt, list);
        stmt
    }

    /// Named declaration statement (function, class, interface, enum,
    /// type alias, module) with its combined modifier flags.
    pub fn named_declaration(
        &mut self,
        kind: SyntaxKind,
        name: NodeIndex,
        modifier_flags: ModifierFlags,
    ) -> NodeIndex {
        let idx = self.push(kind, NodeData::NamedDeclaration { name });
        self.set_modifier_flags(idx, modifier_flags);
        if name.is_some() {
            self.adopt(idx, name);
        }
        idx
    }

    pub fn export_assignment(&mut self, expression: NodeIndex, is_export_equals: bool) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::ExportAssignment,
            NodeData::ExportAssignment {
                expression,
                is_export_equals,
            },
        );
        self.adopt(idx, expression);
        idx
    }

    pub fn export_declaration(&mut self, export_clause: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::ExportDeclaration,
            NodeData::ExportDeclaration {
                export_clause: NodeList::new(export_clause.clone()),
            },
        );
        self.adopt_all(idx, &export_clause);
        idx
    }

    pub fn source_file(&mut self, file_name: &str, statements: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.push(
            SyntaxKind::SourceFile,
            NodeData::SourceFile {
                statements: NodeList::new(statements.clone()),
                file_name: file_name.to_string(),
            },
        );
        self.adopt_all(idx, &statements);
        idx
    }
}
