use crate::keypad;
use crate::word_index::{SearchResult, TrieNode, WordIndex};

pub const NO_RESULTS: &str = "No results";

pub fn render(result: &SearchResult, show_digits: bool) -> String {
    if result.is_empty() {
        return NO_RESULTS.to_string();
    }

    let width = result.words.iter().map(|w| w.chars().count()).max().unwrap_or(0);

    result
        .words
        .iter()
        .map(|word| match keypad::spell(word) {
            Some(digits) if show_digits => format!("{word:<width$} {digits}"),
            _ => word.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_tree(index: &WordIndex) -> String {
    let mut lines = Vec::new();
    print_tree(&mut lines, index.root(), "".to_string(), true, false);
    lines.join("\n")
}

fn print_tree(lines: &mut Vec<String>, node: &TrieNode, prefix: String, root: bool, last: bool) {
    let prefix_current = if last { " └─ " } else { " ├─ " };
    let marker = if node.is_word_end() { " *" } else { "" };

    if root {
        lines.push("ALL".to_string());
    } else {
        lines.push(format!("{}{}{}{}", prefix, prefix_current, node.letter(), marker));
    }

    let prefix_child = if root {
        ""
    } else if last {
        "    "
    } else {
        " │  "
    };
    let prefix = prefix + prefix_child;

    if let Some(last_child) = node.children().len().checked_sub(1) {
        for (i, child) in node.children().iter().enumerate() {
            print_tree(lines, child, prefix.to_string(), false, i == last_child);
        }
    }
}
