//! Identifier trie
//!
//! Exact-match classification of identifier spellings. Lookups walk one
//! node per character and never allocate, so they can run directly on a
//! glyph buffer inside the per-frame coloring loop as well as on plain
//! text for tooltip queries.

/// A node keyed by character; children are kept sorted for binary search
#[derive(Debug)]
struct TrieNode<T> {
    children: Vec<(char, TrieNode<T>)>,
    entry: Option<T>,
}

impl<T> TrieNode<T> {
    fn new() -> Self {
        Self {
            children: Vec::new(),
            entry: None,
        }
    }

    fn child(&self, ch: char) -> Option<&TrieNode<T>> {
        self.children
            .binary_search_by_key(&ch, |(key, _)| *key)
            .ok()
            .map(|index| &self.children[index].1)
    }

    fn child_or_insert(&mut self, ch: char) -> &mut TrieNode<T> {
        let index = match self.children.binary_search_by_key(&ch, |(key, _)| *key) {
            Ok(index) => index,
            Err(index) => {
                self.children.insert(index, (ch, TrieNode::new()));
                index
            }
        };
        &mut self.children[index].1
    }
}

fn fold(case_sensitive: bool, ch: char) -> char {
    if case_sensitive {
        ch
    } else {
        ch.to_lowercase().next().unwrap_or(ch)
    }
}

/// Prefix tree from identifier spelling to an entry
#[derive(Debug)]
pub struct IdentifierTrie<T> {
    root: TrieNode<T>,
    case_sensitive: bool,
    len: usize,
}

impl<T> IdentifierTrie<T> {
    /// Create an empty, case-sensitive trie
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            case_sensitive: true,
            len: 0,
        }
    }

    /// Create an empty trie that folds case on insert and lookup
    pub fn case_insensitive() -> Self {
        Self {
            case_sensitive: false,
            ..Self::new()
        }
    }

    /// Insert a spelling, replacing any entry already stored for it
    pub fn insert(&mut self, spelling: &str, entry: T) {
        let mut node = &mut self.root;
        for ch in spelling.chars() {
            node = node.child_or_insert(fold(self.case_sensitive, ch));
        }
        if node.entry.replace(entry).is_none() {
            self.len += 1;
        }
    }

    /// Look up a plain string
    pub fn get(&self, spelling: &str) -> Option<&T> {
        self.walk(spelling.chars())
    }

    /// Look up any slice, extracting a character from each element
    ///
    /// This is how glyph buffers are probed in place:
    /// `trie.get_with(&line[..n], |g| g.ch)`.
    pub fn get_with<G>(&self, view: &[G], char_of: impl Fn(&G) -> char) -> Option<&T> {
        self.walk(view.iter().map(char_of))
    }

    fn walk(&self, chars: impl Iterator<Item = char>) -> Option<&T> {
        let mut node = &self.root;
        for ch in chars {
            node = node.child(fold(self.case_sensitive, ch))?;
        }
        node.entry.as_ref()
    }

    /// Number of stored spellings
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for IdentifierTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}
