use tree_sitter::{Node, TreeCursor};

/// Get text content of a node from source
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Visit all nodes in the tree with a callback, using a provided cursor for advanced usage
pub fn visit_nodes_with_cursor<F>(node: Node, cursor: &mut TreeCursor, callback: &mut F)
where
    F: FnMut(Node),
{
    callback(node);

    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            visit_nodes_with_cursor(child, cursor, callback);

            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
}

/// Named children of a node, comments excluded
pub fn named_children_without_comments<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

/// Whether a node has a direct anonymous child token of the given kind (e.g. `readonly`)
pub fn has_token(node: &Node, token: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token)
}
