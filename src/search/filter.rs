use crate::notes::Note;

/// Notes passing the current query, as indices into the note set, in note set
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultList {
    /// Every note matches (empty query); no index list is built.
    All(usize),
    Only(Vec<usize>),
}

impl Default for ResultList {
    fn default() -> Self {
        ResultList::All(0)
    }
}

impl ResultList {
    pub fn len(&self) -> usize {
        match self {
            ResultList::All(len) => *len,
            ResultList::Only(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Note index of the result at `position`.
    pub fn get(&self, position: usize) -> Option<usize> {
        match self {
            ResultList::All(len) => (position < *len).then_some(position),
            ResultList::Only(indices) => indices.get(position).copied(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let (all, only) = match self {
            ResultList::All(len) => (0..*len, &[][..]),
            ResultList::Only(indices) => (0..0, indices.as_slice()),
        };
        all.chain(only.iter().copied())
    }
}

/// Keep the notes where any space-separated token of `query` occurs in the
/// name or the body. Matching is case-sensitive. Repeated or trailing spaces
/// yield empty tokens, and an empty token matches every note.
pub fn filter_notes(notes: &[Note], query: &str) -> ResultList {
    if query.is_empty() {
        return ResultList::All(notes.len());
    }

    let tokens: Vec<&str> = query.split(' ').collect();
    let matched = notes
        .iter()
        .enumerate()
        .filter(|(_, note)| {
            tokens
                .iter()
                .any(|token| note.name.contains(token) || note.body.contains(token))
        })
        .map(|(i, _)| i)
        .collect();

    ResultList::Only(matched)
}
