//! Composite: files and folders treated through one interface.
//!
//! A [`Node`] is either a leaf file or a folder holding an ordered list of
//! children. Every operation on a folder recurses into its children in
//! insertion order and touches each of them exactly once.

use serde::Serialize;

use crate::model::{File, Folder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File(File),
    Folder(Folder),
}

/// Callback interface for walking a tree.
pub trait NodeVisitor {
    fn visit_file(&mut self, file: &File, depth: usize);
    fn visit_folder(&mut self, folder: &Folder, depth: usize);
}

impl Node {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Node::File(File::new(name, size))
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Node::Folder(Folder::new(name))
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Folder(folder) => &folder.name,
        }
    }

    /// Append a child. Returns `false` when called on a file; leaves have no
    /// children.
    pub fn add(&mut self, child: Node) -> bool {
        match self {
            Node::Folder(folder) => {
                folder.children.push(child);
                true
            }
            Node::File(_) => false,
        }
    }

    /// Builder-style variant of [`Node::add`].
    pub fn with(mut self, child: Node) -> Self {
        self.add(child);
        self
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Folder(folder) => &folder.children,
            Node::File(_) => &[],
        }
    }

    /// Pre-order walk: the folder itself first, then each child in order.
    pub fn accept(&self, visitor: &mut dyn NodeVisitor) {
        self.walk(visitor, 0);
    }

    fn walk(&self, visitor: &mut dyn NodeVisitor, depth: usize) {
        match self {
            Node::File(file) => visitor.visit_file(file, depth),
            Node::Folder(folder) => {
                visitor.visit_folder(folder, depth);
                for child in &folder.children {
                    child.walk(visitor, depth + 1);
                }
            }
        }
    }

    /// One line per node, indented two spaces per level.
    pub fn display(&self) -> Vec<String> {
        let mut printer = Printer { lines: Vec::new() };
        self.accept(&mut printer);
        printer.lines
    }

    /// Total size of all files below (and including) this node.
    pub fn size(&self) -> u64 {
        match self {
            Node::File(file) => file.size,
            Node::Folder(folder) => folder.children.iter().map(Node::size).sum(),
        }
    }
}

struct Printer {
    lines: Vec<String>,
}

impl NodeVisitor for Printer {
    fn visit_file(&mut self, file: &File, depth: usize) {
        self.lines
            .push(format!("{}File: {} ({} bytes)", "  ".repeat(depth), file.name, file.size));
    }

    fn visit_folder(&mut self, folder: &Folder, depth: usize) {
        self.lines
            .push(format!("{}Folder: {}", "  ".repeat(depth), folder.name));
    }
}

pub fn demo() -> Vec<String> {
    let tree = Node::folder("root")
        .with(Node::file("readme.md", 120))
        .with(
            Node::folder("src")
                .with(Node::file("main.rs", 300))
                .with(Node::file("lib.rs", 80)),
        );

    let mut lines = tree.display();
    lines.push(format!("total size: {}", tree.size()));
    lines
}
