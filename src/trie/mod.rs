//! Arena-backed symbol trie.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`].
//! A node owns its children through the `children` map; the `parent` link is
//! a plain index used only to rebuild a node's path. Nodes created by
//! [`Trie::duplicate`] or [`Trie::graft`] start detached and join the tree
//! through [`Trie::attach`].


use std::collections::{HashMap, HashSet};

/// Index of a node inside one [`Trie`]'s arena.
///
/// Ids are only meaningful for the trie that produced them; passing an id
/// from another trie panics or addresses an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    #[error("duplicate key {symbol:?} under {path:?}")]
    DuplicateKey { path: String, symbol: char },
    #[error("node {0:?} already has a parent")]
    AlreadyAttached(NodeId),
    #[error("node {0:?} has no symbol to attach under")]
    Unkeyed(NodeId),
}

#[derive(Debug, Clone)]
struct Node<V> {
    symbol: Option<char>,
    value: V,
    parent: Option<NodeId>,
    children: HashMap<char, NodeId>,
}

impl<V> Node<V> {
    fn new(symbol: Option<char>, value: V) -> Self {
        Self {
            symbol,
            value,
            parent: None,
            children: HashMap::new(),
        }
    }
}

/// Prefix tree keyed by `char`, one value per node.
///
/// Every node carries a value; nodes created implicitly along an inserted
/// path hold `V::default()` (the empty token for `String`).
#[derive(Debug, Clone)]
pub struct Trie<V = String> {
    nodes: Vec<Node<V>>,
}

const ROOT: NodeId = NodeId(0);

impl<V: Clone + Default> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Default> Trie<V> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(None, V::default())],
        }
    }

    /// Merge `base` and then `overlay` into a fresh trie. Overlay values win.
    /// Neither operand is touched.
    pub fn merged(base: &Trie<V>, overlay: &Trie<V>) -> Self {
        Self::merged_with(base, overlay, |_, overlay| overlay.clone())
    }

    /// Like [`Trie::merged`] with a custom value resolver. The resolver receives
    /// `(target, source)` values and is applied to every shared keyed node.
    pub fn merged_with<F>(base: &Trie<V>, overlay: &Trie<V>, resolver: F) -> Self
    where
        F: Fn(&V, &V) -> V,
    {
        let mut trie = Self::new();
        trie.merge(ROOT, base, base.root(), &resolver);
        trie.merge(ROOT, overlay, overlay.root(), &resolver);
        trie
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Number of nodes in the arena, detached copies included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A trie is empty when its root has no children.
    pub fn is_empty(&self) -> bool {
        self.node(ROOT).children.is_empty()
    }

    pub fn value(&self, id: NodeId) -> &V {
        &self.node(id).value
    }

    /// The root is keyless and always holds `V::default()`; writes to it are
    /// ignored.
    pub fn set_value(&mut self, id: NodeId, value: V) {
        if id == ROOT {
            return;
        }
        self.node_mut(id).value = value;
    }

    pub fn symbol(&self, id: NodeId) -> Option<char> {
        self.node(id).symbol
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// O(1) average child lookup.
    pub fn get_child(&self, id: NodeId, symbol: char) -> Option<NodeId> {
        self.node(id).children.get(&symbol).copied()
    }

    /// Children of `id` in arbitrary order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.node(id).children.iter().map(|(&c, &n)| (c, n))
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }

    /// Symbols from the root down to `id`. Detached nodes yield the path
    /// from their own top.
    pub fn path(&self, id: NodeId) -> String {
        let mut symbols = Vec::new();
        let mut current = Some(id);
        while let Some(n) = current {
            let node = self.node(n);
            symbols.extend(node.symbol);
            current = node.parent;
        }
        symbols.iter().rev().collect()
    }

    /// Walk `path` from the root.
    pub fn find<I>(&self, path: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = char>,
    {
        path.into_iter()
            .try_fold(ROOT, |node, symbol| self.get_child(node, symbol))
    }

    pub fn get(&self, path: &str) -> Option<&V> {
        self.find(path.chars()).map(|id| self.value(id))
    }

    /// Walk `path` from the root, creating missing nodes with the default
    /// value, and set the value of the last node. Existing values along the
    /// way are kept; an existing terminal value is replaced. An empty path
    /// names the root and stores nothing.
    pub fn insert<I>(&mut self, path: I, value: V) -> NodeId
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = ROOT;
        for symbol in path {
            node = match self.get_child(node, symbol) {
                Some(child) => child,
                None => {
                    let child = self.alloc(Node::new(Some(symbol), V::default()));
                    self.link(node, symbol, child);
                    child
                }
            };
        }
        self.set_value(node, value);
        node
    }

    /// Add a single child under `parent`. Unlike [`Trie::insert`], an
    /// existing child under the same symbol is an error.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        symbol: char,
        value: V,
    ) -> Result<NodeId, TrieError> {
        self.check_vacant(parent, symbol)?;
        let child = self.alloc(Node::new(Some(symbol), value));
        self.link(parent, symbol, child);
        Ok(child)
    }

    /// Attach a detached node (from [`Trie::duplicate`] or [`Trie::graft`])
    /// under `parent`, keyed by the node's own symbol.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, TrieError> {
        let node = self.node(child);
        if node.parent.is_some() || child == ROOT {
            return Err(TrieError::AlreadyAttached(child));
        }
        let symbol = node.symbol.ok_or(TrieError::Unkeyed(child))?;
        self.check_vacant(parent, symbol)?;
        self.link(parent, symbol, child);
        Ok(child)
    }

    /// Copy `id` into a new detached node with the same symbol and value.
    /// With `copy_children` the whole subtree is copied as well.
    pub fn duplicate(&mut self, id: NodeId, copy_children: bool) -> NodeId {
        let node = self.node(id);
        let (symbol, value) = (node.symbol, node.value.clone());
        let children: Vec<(char, NodeId)> = if copy_children {
            self.children(id).collect()
        } else {
            Vec::new()
        };
        let copy = self.alloc(Node::new(symbol, value));
        for (symbol, child) in children {
            let child_copy = self.duplicate(child, true);
            self.link(copy, symbol, child_copy);
        }
        copy
    }

    /// Copy `id` out of another trie into this one as a detached node.
    pub fn graft(&mut self, source: &Trie<V>, id: NodeId, copy_children: bool) -> NodeId {
        let src = source.node(id);
        let copy = self.alloc(Node::new(src.symbol, src.value.clone()));
        if copy_children {
            for (&symbol, &child) in &src.children {
                let child_copy = self.graft(source, child, true);
                self.link(copy, symbol, child_copy);
            }
        }
        copy
    }

    /// Every node below `id` up to `max_depth` edges away, children before
    /// their parents. Each node is reported once.
    pub fn descendants(&self, id: NodeId, max_depth: Option<usize>) -> Vec<NodeId> {
        let mut visited = HashSet::new();
        let mut out = Vec::new();
        self.collect_descendants(id, 0, max_depth, &mut visited, &mut out);
        out
    }

    fn collect_descendants(
        &self,
        id: NodeId,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeId>,
        out: &mut Vec<NodeId>,
    ) {
        if max_depth.is_some_and(|max| depth >= max) {
            return;
        }
        for &child in self.node(id).children.values() {
            if !visited.insert(child) {
                continue;
            }
            self.collect_descendants(child, depth + 1, max_depth, visited, out);
            out.push(child);
        }
    }

    /// Apply `visitor` to every descendant of `id` (see [`Trie::descendants`]).
    /// The node set is fixed before the first call, so nodes the visitor adds
    /// are not visited.
    pub fn traverse_children<F>(&mut self, id: NodeId, max_depth: Option<usize>, mut visitor: F)
    where
        F: FnMut(&mut Trie<V>, NodeId),
    {
        for node in self.descendants(id, max_depth) {
            visitor(self, node);
        }
    }

    /// Recursively unify `source_node` of `source` into `target`.
    ///
    /// `target`'s value becomes `resolver(target, source)`. Children only in
    /// `source` are copied in whole; shared children are merged. `source` is
    /// only read.
    pub fn merge<F>(&mut self, target: NodeId, source: &Trie<V>, source_node: NodeId, resolver: &F)
    where
        F: Fn(&V, &V) -> V,
    {
        let merged = resolver(self.value(target), source.value(source_node));
        self.set_value(target, merged);
        for (&symbol, &source_child) in &source.node(source_node).children {
            match self.get_child(target, symbol) {
                Some(target_child) => self.merge(target_child, source, source_child, resolver),
                None => {
                    let copy = self.graft(source, source_child, true);
                    self.link(target, symbol, copy);
                }
            }
        }
    }

    /// Merge all of `overlay` into this trie, overlay values winning.
    pub fn merge_from(&mut self, overlay: &Trie<V>) {
        self.merge(ROOT, overlay, overlay.root(), &|_: &V, o: &V| o.clone());
    }

    fn check_vacant(&self, parent: NodeId, symbol: char) -> Result<(), TrieError> {
        if self.node(parent).children.contains_key(&symbol) {
            return Err(TrieError::DuplicateKey {
                path: self.path(parent),
                symbol,
            });
        }
        Ok(())
    }

    fn alloc(&mut self, node: Node<V>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn link(&mut self, parent: NodeId, symbol: char, child: NodeId) {
        let node = self.node_mut(child);
        node.symbol = Some(symbol);
        node.parent = Some(parent);
        self.node_mut(parent).children.insert(symbol, child);
    }
}

impl<V> Trie<V> {
    fn node(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<V> {
        &mut self.nodes[id.0]
    }

    fn subtree_eq(&self, id: NodeId, other: &Trie<V>, other_id: NodeId) -> bool
    where
        V: PartialEq,
    {
        let (a, b) = (self.node(id), other.node(other_id));
        a.value == b.value
            && a.children.len() == b.children.len()
            && a.children.iter().all(|(symbol, &child)| {
                b.children
                    .get(symbol)
                    .is_some_and(|&o| self.subtree_eq(child, other, o))
            })
    }
}

impl<V: Clone + Default + PartialEq> Trie<V> {
    /// Copy of this trie with every key symbol passed through `f`.
    ///
    /// Paths that collide after mapping are merged. A non-default value wins
    /// over a placeholder; between two real values the last one visited wins.
    pub fn map_symbols<F>(&self, f: F) -> Trie<V>
    where
        F: Fn(char) -> char,
    {
        let mut out = Trie::new();
        out.copy_mapped(ROOT, self, ROOT, &f);
        out
    }

    fn copy_mapped<F>(&mut self, target: NodeId, source: &Trie<V>, source_node: NodeId, f: &F)
    where
        F: Fn(char) -> char,
    {
        for (&symbol, &source_child) in &source.node(source_node).children {
            let key = f(symbol);
            let value = source.value(source_child);
            let target_child = match self.get_child(target, key) {
                Some(id) => {
                    if *value != V::default() {
                        self.set_value(id, value.clone());
                    }
                    id
                }
                None => {
                    let id = self.alloc(Node::new(Some(key), value.clone()));
                    self.link(target, key, id);
                    id
                }
            };
            self.copy_mapped(target_child, source, source_child, f);
        }
    }
}

/// Structural equality of the trees reachable from both roots. Arena layout
/// and detached nodes are ignored.
impl<V: PartialEq> PartialEq for Trie<V> {
    fn eq(&self, other: &Self) -> bool {
        self.subtree_eq(ROOT, other, ROOT)
    }
}

impl<V: Eq> Eq for Trie<V> {}

impl<K, V> FromIterator<(K, V)> for Trie<V>
where
    K: AsRef<str>,
    V: Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for (path, value) in iter {
            trie.insert(path.as_ref().chars(), value);
        }
        trie
    }
}
