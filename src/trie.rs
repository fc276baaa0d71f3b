const ALPHABET_SIZE: usize = 26;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("cannot insert the empty word")]
    EmptyWord,

    #[error("invalid character {character:?} at position {position} in {word:?}")]
    InvalidCharacter {
        word: String,
        character: char,
        position: usize,
    },
}

/// Maps `'a'..='z'` to `0..26`. Anything else has no slot.
pub fn letter_index(c: char) -> Option<usize> {
    c.is_ascii_lowercase().then(|| c as usize - 'a' as usize)
}

fn indices(word: &str) -> Result<Vec<usize>, Error> {
    word.chars()
        .enumerate()
        .map(|(position, character)| {
            letter_index(character).ok_or_else(|| Error::InvalidCharacter {
                word: word.to_string(),
                character,
                position,
            })
        })
        .collect()
}

#[derive(Default, Debug)]
pub struct Node {
    children: [Option<Box<Node>>; ALPHABET_SIZE],
    count: usize,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)?.as_deref()
    }

    fn child_or_insert(&mut self, index: usize) -> &mut Node {
        self.children[index].get_or_insert_with(|| Box::new(Node::new()))
    }

    pub fn node_count(&self) -> usize {
        let mut pending = vec![self];
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter().flatten().map(|child| &**child));
        }
        count
    }

    fn detach_children(&mut self) -> impl Iterator<Item = Box<Node>> + '_ {
        self.children.iter_mut().filter_map(Option::take)
    }

    /// Frees children before the node itself and returns how many nodes went.
    fn release(self: Box<Self>) -> usize {
        let mut pending = vec![self];
        let mut detached = vec![];
        while let Some(mut node) = pending.pop() {
            pending.extend(node.detach_children());
            detached.push(node);
        }

        // every node sits before its descendants
        let freed = detached.len();
        detached.into_iter().rev().for_each(drop);
        freed
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = self.detach_children().collect::<Vec<_>>();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.detach_children());
        }
    }
}

#[derive(Default, Debug)]
pub struct Trie {
    root: Box<Node>,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `word`.
    ///
    /// The whole word is validated before the first node is created, so a
    /// rejected word leaves the trie as it was.
    pub fn insert(&mut self, word: &str) -> Result<(), Error> {
        if word.is_empty() {
            return Err(Error::EmptyWord);
        }

        let mut node = &mut *self.root;
        for index in indices(word)? {
            node = node.child_or_insert(index);
        }
        node.count += 1;

        Ok(())
    }

    /// The empty word is never counted.
    pub fn number_of_occurrences(&self, word: &str) -> Result<usize, Error> {
        let mut node = Some(&*self.root);
        for (position, character) in word.chars().enumerate() {
            let index = letter_index(character).ok_or_else(|| Error::InvalidCharacter {
                word: word.to_string(),
                character,
                position,
            })?;
            node = node.and_then(|node| node.child(index));
        }
        Ok(node.map_or(0, |node| node.count))
    }

    /// Root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.iter().all(Option::is_none)
    }

    /// Tears the trie down post-order and hands back an absent handle.
    ///
    /// Passing `None` does nothing.
    pub fn destroy(trie: Option<Trie>) -> Option<Trie> {
        if let Some(trie) = trie {
            let freed = trie.root.release();
            log::debug!(freed = freed; "trie destroyed");
        }
        None
    }
}

/// Like [`Trie::insert`], but an absent trie or word is a no-op.
pub fn insert(trie: Option<&mut Trie>, word: Option<&str>) -> Result<(), Error> {
    match (trie, word) {
        (Some(trie), Some(word)) => trie.insert(word),
        _ => Ok(()),
    }
}

/// Like [`Trie::number_of_occurrences`], but an absent trie or word counts 0.
pub fn number_of_occurrences(trie: Option<&Trie>, word: Option<&str>) -> Result<usize, Error> {
    match (trie, word) {
        (Some(trie), Some(word)) => trie.number_of_occurrences(word),
        _ => Ok(0),
    }
}
