/// a handle to a node in a scene hierarchy carrying an active flag.
///
/// implementors are handles in the engine-object sense: cheap to clone, with
/// interior mutability, so set_active takes &self
pub trait ActiveNode: Clone {
    fn set_active(&self, value: bool);
    fn parent(&self) -> Option<Self>;
    fn children(&self) -> Vec<Self>;
}

/// the node and its immediate parent, when it has one
pub fn set_active_with_parent<N: ActiveNode>(node: &N, value: bool) {
    node.set_active(value);
    if let Some(parent) = node.parent() {
        parent.set_active(value);
    }
}

/// the node and its first level children
pub fn set_active_with_children<N: ActiveNode>(node: &N, value: bool) {
    node.set_active(value);
    for child in node.children() {
        child.set_active(value);
    }
}

/// the node and every ancestor up to the root. loops instead of recursing
pub fn set_active_with_ancestors<N: ActiveNode>(node: &N, value: bool) {
    node.set_active(value);
    let mut current = node.parent();
    while let Some(ancestor) = current {
        ancestor.set_active(value);
        current = ancestor.parent();
    }
}

/// the node and its entire subtree. iterative, with an explicit work list
/// instead of recursion
pub fn set_active_with_descendants<N: ActiveNode>(node: &N, value: bool) {
    let mut work_list = vec![node.clone()];
    while let Some(next) = work_list.pop() {
        let stopped = set_active_chain(next, value);
        work_list.extend(stopped.children());
    }
}

/// activates the node, then keeps stepping while there is exactly one child,
/// activating along the way. chains of single children are common (nested
/// wrapper objects), and walking them directly keeps the work list short.
/// returns the node it stopped at: one with zero children or several
fn set_active_chain<N: ActiveNode>(node: N, value: bool) -> N {
    let mut current = node;
    current.set_active(value);
    loop {
        let mut children = current.children();
        if children.len() != 1 {
            return current;
        }
        match children.pop() {
            Some(only) => {
                only.set_active(value);
                current = only;
            }
            None => return current,
        }
    }
}
