//! Picking a document reader for a path.

use rlistview::{DocumentReader, JsonlDocumentReader};
use std::path::Path;

/// Extensions offered by the open dialog.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["jsonl", "blocks", "br"];

/// Returns true if the path looks like a block document.
///
/// `.br` files are accepted on their own; the inner extension is not checked.
pub fn is_supported_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| DOCUMENT_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Returns the reader used for document files.
///
/// Every supported format is JSON Lines (optionally Brotli-compressed), and
/// the reader detects compression from the suffix itself.
pub fn document_reader() -> Box<dyn DocumentReader + Send> {
    Box::new(JsonlDocumentReader::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_document(Path::new("post.jsonl")));
        assert!(is_supported_document(Path::new("post.BLOCKS")));
        assert!(is_supported_document(Path::new("post.blocks.br")));
        assert!(!is_supported_document(Path::new("post.txt")));
        assert!(!is_supported_document(Path::new("post")));
    }

    #[test]
    fn test_document_reader_handles_compressed_files() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join("rlistview_file_loader.blocks.br");
        let path = path.to_string_lossy().into_owned();
        {
            let mut writer = rlistview::DocumentWriter::new(&path)?;
            writer.write_header("1", serde_json::json!({}))?;
            writer.write_block(1, None, "core/paragraph", None)?;
            writer.write_footer()?;
        }

        let doc = document_reader().read(&path)?;
        assert_eq!(rlistview::BlockDocument::block_count(&doc), 1);

        std::fs::remove_file(&path)?;
        Ok(())
    }
}
