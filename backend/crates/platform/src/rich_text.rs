//! Rich Text Extraction
//!
//! Plain-text extraction from serialized TipTap / ProseMirror documents.
//! Output follows the editor's `getText()`: text nodes are concatenated,
//! every block node after the first one visited is preceded by a blank line,
//! and hard breaks become a single newline.

use serde::Deserialize;

/// Separator emitted before a block node
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Node types rendered inline; everything else is a block.
const INLINE_NODES: &[&str] = &["text", "hardBreak", "mention", "emoji"];

#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    #[error("Malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Expected a `doc` root node, found `{0}`")]
    NotADocument(String),
}

#[derive(Debug, Deserialize)]
struct Node {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    content: Vec<Node>,
}

impl Node {
    fn is_block(&self) -> bool {
        !INLINE_NODES.contains(&self.kind.as_str())
    }
}

/// Extract plain text from a serialized document.
pub fn extract_text(serialized: &str) -> Result<String, RichTextError> {
    let root: Node = serde_json::from_str(serialized)?;
    if root.kind != "doc" {
        return Err(RichTextError::NotADocument(root.kind));
    }

    let mut out = String::new();
    let mut first = true;
    for child in &root.content {
        walk(child, &mut out, &mut first);
    }
    Ok(out)
}

fn walk(node: &Node, out: &mut String, first: &mut bool) {
    if node.is_block() && !*first {
        out.push_str(BLOCK_SEPARATOR);
    }
    *first = false;

    match node.kind.as_str() {
        "hardBreak" => out.push('\n'),
        "text" => {
            if let Some(text) = &node.text {
                out.push_str(text);
            }
        }
        _ => {
            for child in &node.content {
                walk(child, out, first);
            }
        }
    }
}
