use crate::word_index::{SearchResult, WordIndex};

pub fn render(result: &SearchResult) -> serde_json::Result<String> {
    serde_json::to_string(result)
}

pub fn render_tree(index: &WordIndex) -> serde_json::Result<String> {
    serde_json::to_string(index.root())
}
