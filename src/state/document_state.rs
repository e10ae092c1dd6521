//! Loaded document state.
//!
//! This module owns the block document shown by the viewer together with
//! where it came from.

use rlistview::BlockDocumentData;
use std::path::PathBuf;

/// Where the current document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Virtual { seed: u64 },
}

/// State related to the loaded block document.
///
/// Responsibilities:
/// - Managing document lifetime
/// - Tracking the document source
/// - Counting loads so caches can tell documents apart
#[derive(Default)]
pub struct DocumentState {
    document: Option<BlockDocumentData>,
    source: Option<DocumentSource>,
    /// Bumped on every load or clear.
    generation: u64,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current document.
    ///
    /// # Arguments
    /// * `document` - The document to show
    /// * `source` - File path or virtual seed it came from
    pub fn load(&mut self, document: BlockDocumentData, source: DocumentSource) {
        self.document = Some(document);
        self.source = Some(source);
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.document = None;
        self.source = None;
        self.generation += 1;
    }

    pub fn document(&self) -> Option<&BlockDocumentData> {
        self.document.as_ref()
    }

    pub fn document_mut(&mut self) -> Option<&mut BlockDocumentData> {
        self.document.as_mut()
    }

    pub fn source(&self) -> Option<&DocumentSource> {
        self.source.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Short description for the status bar.
    pub fn source_label(&self) -> String {
        match &self.source {
            Some(DocumentSource::File(path)) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Some(DocumentSource::Virtual { seed }) => format!("Virtual document (seed {})", seed),
            None => "No document".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlistview::DocumentHeader;

    fn empty_document() -> BlockDocumentData {
        BlockDocumentData::new(DocumentHeader {
            version: "1".to_string(),
            metadata: serde_json::json!({}),
        })
    }

    #[test]
    fn test_load_and_clear_bump_generation() {
        let mut state = DocumentState::new();
        assert_eq!(state.generation(), 0);

        state.load(empty_document(), DocumentSource::Virtual { seed: 3 });
        assert!(state.document().is_some());
        assert_eq!(state.generation(), 1);

        state.clear();
        assert!(state.document().is_none());
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_source_label() {
        let mut state = DocumentState::new();
        assert_eq!(state.source_label(), "No document");

        state.load(empty_document(), DocumentSource::File(PathBuf::from("/tmp/post.blocks")));
        assert_eq!(state.source_label(), "post.blocks");

        state.load(empty_document(), DocumentSource::Virtual { seed: 7 });
        assert_eq!(state.source_label(), "Virtual document (seed 7)");
    }
}
