//! Tree Utilities
//!
//! Copy-on-write mutations over the file/folder forest, plus flattening for
//! rendering.
//!
//! Nodes are looked up by name. Names are not unique across folders, so
//! every lookup takes the first match in depth-first pre-order.

use std::collections::HashSet;

use crate::models::Node;

/// Depth-first pre-order search for the first node matching `pred`
fn find_mut<'a, P: Fn(&Node) -> bool>(nodes: &'a mut [Node], pred: &P) -> Option<&'a mut Node> {
    for node in nodes.iter_mut() {
        if pred(node) {
            return Some(node);
        }
        if let Some(found) = find_mut(&mut node.children, pred) {
            return Some(found);
        }
    }
    None
}

/// First node named `name`, anywhere in the tree
pub fn find<'a>(nodes: &'a [Node], name: &str) -> Option<&'a Node> {
    for node in nodes {
        if node.name == name {
            return Some(node);
        }
        if let Some(found) = find(&node.children, name) {
            return Some(found);
        }
    }
    None
}

/// Node at an index path (as produced by `flatten_tree`)
pub fn node_at<'a>(nodes: &'a [Node], path: &[usize]) -> Option<&'a Node> {
    let (first, rest) = path.split_first()?;
    let node = nodes.get(*first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        node_at(&node.children, rest)
    }
}

/// Total number of nodes
pub fn count(nodes: &[Node]) -> usize {
    nodes.iter().map(|n| 1 + count(&n.children)).sum()
}

/// Append `new_node` to the first folder named `parent_name`.
/// Missing parent (or a leaf with that name) leaves the tree unchanged.
pub fn insert(tree: &[Node], parent_name: &str, new_node: Node) -> Vec<Node> {
    let mut next = tree.to_vec();
    match find_mut(&mut next, &|n: &Node| n.is_folder() && n.name == parent_name) {
        Some(folder) => folder.children.push(new_node),
        None => log::debug!("[TREE] insert: no folder named {:?}", parent_name),
    }
    next
}

/// Append `new_node` at the top level
pub fn insert_root(tree: &[Node], new_node: Node) -> Vec<Node> {
    let mut next = tree.to_vec();
    next.push(new_node);
    next
}

fn remove_first(nodes: &mut Vec<Node>, target: &str) -> bool {
    for i in 0..nodes.len() {
        if nodes[i].name == target {
            nodes.remove(i);
            return true;
        }
        if remove_first(&mut nodes[i].children, target) {
            return true;
        }
    }
    false
}

/// Remove a node by name.
///
/// With `parent_name`, only children named `target` of the first folder
/// named `parent_name` are removed. Without it, the first node named
/// `target` in depth-first pre-order is removed together with its subtree,
/// whichever folder it lives in.
pub fn remove(tree: &[Node], target: &str, parent_name: Option<&str>) -> Vec<Node> {
    let mut next = tree.to_vec();
    let removed = match parent_name {
        Some(parent) => match find_mut(&mut next, &|n: &Node| n.is_folder() && n.name == parent) {
            Some(folder) => {
                let before = folder.children.len();
                folder.children.retain(|child| child.name != target);
                folder.children.len() != before
            }
            None => false,
        },
        None => remove_first(&mut next, target),
    };
    if !removed {
        log::debug!("[TREE] remove: {:?} not found", target);
    }
    next
}

/// Replace the content of the first leaf named `name`
pub fn set_content(tree: &[Node], name: &str, content: &str) -> Vec<Node> {
    let mut next = tree.to_vec();
    if let Some(leaf) = find_mut(&mut next, &|n: &Node| !n.is_folder() && n.name == name) {
        leaf.content = Some(content.to_string());
    }
    next
}

/// Rename the first node named `old_name`
pub fn rename(tree: &[Node], old_name: &str, new_name: &str) -> Vec<Node> {
    let mut next = tree.to_vec();
    if let Some(node) = find_mut(&mut next, &|n: &Node| n.name == old_name) {
        node.name = new_name.to_string();
    }
    next
}

/// One visible row of the sidebar
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub name: String,
    pub is_folder: bool,
    pub depth: usize,
    /// Containing folder (None = top level)
    pub parent: Option<String>,
    /// Index path from the root, stable for this snapshot
    pub path: Vec<usize>,
    pub expanded: bool,
}

/// Render nodes as indented rows using recursive DFS.
/// Children of collapsed folders are skipped.
pub fn flatten_tree(nodes: &[Node], expanded: &HashSet<String>) -> Vec<TreeRow> {
    fn collect(
        nodes: &[Node],
        parent: Option<&str>,
        prefix: &[usize],
        expanded: &HashSet<String>,
        result: &mut Vec<TreeRow>,
    ) {
        for (idx, node) in nodes.iter().enumerate() {
            let mut path = prefix.to_vec();
            path.push(idx);
            let is_open = node.is_folder() && expanded.contains(&node.name);
            result.push(TreeRow {
                name: node.name.clone(),
                is_folder: node.is_folder(),
                depth: prefix.len(),
                parent: parent.map(str::to_string),
                path: path.clone(),
                expanded: is_open,
            });
            if is_open {
                collect(&node.children, Some(&node.name), &path, expanded, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(nodes, None, &[], expanded, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeafKind;

    fn leaf(name: &str) -> Node {
        Node { name: name.to_string(), ..Node::file("tmp", LeafKind::PlainText) }
    }

    fn folder(name: &str, children: Vec<Node>) -> Node {
        let mut f = Node::folder(name);
        f.children = children;
        f
    }

    fn sample() -> Vec<Node> {
        vec![
            folder("docs", vec![leaf("x.ed"), folder("deep", vec![leaf("y.ed")])]),
            leaf("a.ed"),
        ]
    }

    #[test]
    fn test_insert_appends_to_matching_folder() {
        let tree = sample();
        let next = insert(&tree, "deep", leaf("z.ed"));

        let deep = find(&next, "deep").unwrap();
        assert_eq!(deep.children.last().unwrap().name, "z.ed");
        assert_eq!(deep.children.len(), 2);
        // Everything else untouched
        assert_eq!(next[1], tree[1]);
        assert_eq!(next[0].children[0], tree[0].children[0]);
    }

    #[test]
    fn test_insert_missing_parent_is_identity() {
        let tree = sample();
        assert_eq!(insert(&tree, "missing", leaf("n.ed")), tree);
        // A leaf is never a parent
        assert_eq!(insert(&tree, "a.ed", leaf("n.ed")), tree);
    }

    #[test]
    fn test_docs_scenario() {
        let tree = vec![Node::folder("docs"), leaf("a.ed")];
        let next = insert(&tree, "docs", Node::file("b", LeafKind::Kanban));

        let docs = find(&next, "docs").unwrap();
        assert_eq!(docs.children.len(), 1);
        assert_eq!(docs.children[0].name, "b.note");
        assert_eq!(next[1].name, "a.ed");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let tree = sample();
        let once = remove(&tree, "x.ed", None);
        let twice = remove(&once, "x.ed", None);
        assert_eq!(once, twice);
        assert!(find(&once, "x.ed").is_none());
        assert_eq!(count(&once), count(&tree) - 1);
    }

    #[test]
    fn test_remove_nested_without_parent() {
        let tree = sample();
        let next = remove(&tree, "y.ed", None);
        assert!(find(&next, "y.ed").is_none());
        assert!(find(&next, "deep").unwrap().children.is_empty());
    }

    #[test]
    fn test_remove_folder_drops_subtree() {
        let next = remove(&sample(), "docs", None);
        assert_eq!(next.len(), 1);
        assert_eq!(count(&next), 1);
    }

    #[test]
    fn test_remove_duplicate_takes_first_in_dfs_order() {
        let tree = vec![
            folder("one", vec![leaf("dup")]),
            folder("two", vec![leaf("dup")]),
        ];
        let next = remove(&tree, "dup", None);

        assert!(next[0].children.is_empty());
        assert_eq!(next[1].children.len(), 1);
        assert_eq!(count(&next), 3);
    }

    #[test]
    fn test_remove_scoped_to_parent() {
        let tree = vec![
            folder("one", vec![leaf("dup"), leaf("keep.ed")]),
            folder("two", vec![leaf("dup")]),
            leaf("top.ed"),
        ];
        let next = remove(&tree, "dup", Some("two"));

        assert_eq!(next[0].children.len(), 2);
        assert!(next[1].children.is_empty());
        // Sibling leaves of the scanned levels survive
        assert_eq!(next[2].name, "top.ed");
    }

    #[test]
    fn test_remove_scoped_missing_parent_is_identity() {
        let tree = sample();
        assert_eq!(remove(&tree, "x.ed", Some("nowhere")), tree);
    }

    #[test]
    fn test_set_content_round_trip() {
        let next = set_content(&sample(), "y.ed", "hello\nworld");
        assert_eq!(find(&next, "y.ed").unwrap().content.as_deref(), Some("hello\nworld"));
    }

    #[test]
    fn test_set_content_skips_folders_and_missing() {
        let tree = sample();
        assert_eq!(set_content(&tree, "docs", "nope"), tree);
        assert_eq!(set_content(&tree, "ghost", "nope"), tree);
    }

    #[test]
    fn test_rename_first_match() {
        let next = rename(&sample(), "x.ed", "renamed.ed");
        assert!(find(&next, "x.ed").is_none());
        assert_eq!(next[0].children[0].name, "renamed.ed");
    }

    #[test]
    fn test_flatten_tree_respects_expansion() {
        let tree = sample();

        let collapsed = flatten_tree(&tree, &HashSet::new());
        let names: Vec<_> = collapsed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["docs", "a.ed"]);

        let expanded: HashSet<String> = ["docs".to_string(), "deep".to_string()].into_iter().collect();
        let rows = flatten_tree(&tree, &expanded);
        let shape: Vec<_> = rows.iter().map(|r| (r.name.as_str(), r.depth)).collect();
        assert_eq!(shape, vec![("docs", 0), ("x.ed", 1), ("deep", 1), ("y.ed", 2), ("a.ed", 0)]);
        assert_eq!(rows[3].parent.as_deref(), Some("deep"));
        assert_eq!(rows[3].path, vec![0, 1, 0]);
        assert_eq!(node_at(&tree, &rows[3].path).unwrap().name, "y.ed");
    }
}
