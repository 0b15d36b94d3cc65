//! Node arena for AST storage.
//!
//! Nodes are stored contiguously and referenced by index. Ownership is a
//! tree: a parent exclusively owns its children, and every node carries a
//! non-owning `parent` index (NONE only on the file root) so upward walks
//! never need a separate side table.

use crate::flags::{ModifierFlags, NodeFlags};
use crate::syntax_kind::SyntaxKind;
use serde::Serialize;

/// Index of a node inside a `NodeArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    pub fn is_none(self) -> bool {
        self == NodeIndex::NONE
    }

    pub fn is_some(self) -> bool {
        self != NodeIndex::NONE
    }
}

/// Ordered list of child node indices.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter().copied()
    }
}

/// Common fields present in all AST nodes.
///
/// `flags` and `modifier_flags` are stored as raw `u32` (the host caches
/// combined modifier flags here at construction time); typed views are
/// exposed through `NodeArena` accessors.
#[derive(Debug, Clone, Serialize)]
pub struct NodeBase {
    pub kind: SyntaxKind,
    pub flags: u32,
    pub modifier_flags: u32,
    pub pos: u32,
    pub end: u32,
    pub parent: NodeIndex,
    pub id: u32,
}

impl NodeBase {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> NodeBase {
        NodeBase {
            kind,
            flags: 0,
            modifier_flags: 0,
            pos,
            end,
            parent: NodeIndex::NONE,
            id: 0,
        }
    }
}

/// Kind-specific payload. The `kind` tag on `NodeBase` disambiguates
/// payloads shared between several kinds (all literal tokens use
/// `Literal`, all named declaration statements use `NamedDeclaration`).
#[derive(Debug, Clone, Serialize)]
pub enum NodeData {
    SourceFile {
        statements: NodeList,
        file_name: String,
    },
    Identifier {
        escaped_text: String,
    },
    Literal {
        text: String,
    },
    /// Payload-free nodes: keyword tokens (`this`, `true`, `false`,
    /// `null`) and empty statements.
    Token,
    TemplateExpression {
        spans: NodeList,
    },
    ArrayLiteral {
        elements: NodeList,
    },
    ObjectLiteral {
        properties: NodeList,
    },
    PropertyAccess {
        expression: NodeIndex,
        name: NodeIndex,
    },
    ElementAccess {
        expression: NodeIndex,
        argument_expression: NodeIndex,
    },
    Call {
        expression: NodeIndex,
        arguments: NodeList,
    },
    Paren {
        expression: NodeIndex,
    },
    Unary {
        operand: NodeIndex,
    },
    Binary {
        left: NodeIndex,
        right: NodeIndex,
    },
    Conditional {
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    },
    Block {
        statements: NodeList,
    },
    VariableStatement {
        declaration_list: NodeIndex,
    },
    VariableDeclarationList {
        declarations: NodeList,
    },
    VariableDeclaration {
        name: NodeIndex,
        initializer: NodeIndex,
    },
    ExpressionStatement {
        expression: NodeIndex,
    },
    /// Function, class, interface, enum, type alias and module
    /// declarations; also function expressions and arrow functions,
    /// whose `name` may be NONE.
    NamedDeclaration {
        name: NodeIndex,
    },
    ExportAssignment {
        expression: NodeIndex,
        /// `export = expr` when true, `export default expr` otherwise.
        is_export_equals: bool,
    },
    ExportDeclaration {
        export_clause: NodeList,
    },
    ImportDeclaration {
        module_specifier: NodeIndex,
    },
}

/// An AST node: shared base fields plus a kind-specific payload.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub base: NodeBase,
    pub data: NodeData,
}

impl Node {
    pub fn kind(&self) -> SyntaxKind {
        self.base.kind
    }

    pub fn pos(&self) -> u32 {
        self.base.pos
    }
}

/// Arena-based storage for AST nodes.
#[derive(Debug, Default, Serialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node to the arena and return its index.
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeIndex(index)
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|n| n.kind())
    }

    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |n| n.base.parent)
    }

    /// Host-assigned node id, stable across arena reallocation.
    pub fn node_id(&self, index: NodeIndex) -> Option<u32> {
        self.get(index).map(|n| n.base.id)
    }

    /// Combined modifier flags cached on the node by the host frontend.
    /// Missing nodes report an empty flag set.
    pub fn combined_modifier_flags(&self, index: NodeIndex) -> ModifierFlags {
        self.get(index)
            .map_or(ModifierFlags::NONE, |n| {
                ModifierFlags::from_bits_truncate(n.base.modifier_flags)
            })
    }

    pub fn node_flags(&self, index: NodeIndex) -> NodeFlags {
        self.get(index)
            .map_or(NodeFlags::NONE, |n| NodeFlags::from_bits_truncate(n.base.flags))
    }

    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        match &self.get(index)?.data {
            NodeData::Identifier { escaped_text } => Some(escaped_text),
            _ => None,
        }
    }

    pub fn literal_text(&self, index: NodeIndex) -> Option<&str> {
        match &self.get(index)?.data {
            NodeData::Literal { text } => Some(text),
            _ => None,
        }
    }

    /// Top-level statements of a source file node.
    pub fn statements_of(&self, file: NodeIndex) -> Option<&NodeList> {
        match &self.get(file)?.data {
            NodeData::SourceFile { statements, .. } => Some(statements),
            _ => None,
        }
    }

    pub fn file_name_of(&self, file: NodeIndex) -> Option<&str> {
        match &self.get(file)?.data {
            NodeData::SourceFile { file_name, .. } => Some(file_name),
            _ => None,
        }
    }

    /// Declarations of a variable statement, reaching through its
    /// declaration list. Empty for other kinds.
    pub fn variable_declarations_of(&self, stmt: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(stmt) else {
            return Vec::new();
        };
        let NodeData::VariableStatement { declaration_list } = &node.data else {
            return Vec::new();
        };
        match self.get(*declaration_list).map(|n| &n.data) {
            Some(NodeData::VariableDeclarationList { declarations }) => {
                declarations.nodes.clone()
            }
            _ => Vec::new(),
        }
    }

    /// Name node of a declaration, NONE for nodes that bind no name
    /// (anonymous functions, non-declarations).
    pub fn name_of_declaration(&self, index: NodeIndex) -> NodeIndex {
        match self.get(index).map(|n| &n.data) {
            Some(NodeData::VariableDeclaration { name, .. }) => *name,
            Some(NodeData::NamedDeclaration { name }) => *name,
            _ => NodeIndex::NONE,
        }
    }
}
