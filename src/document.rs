use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::Arc;
use anyhow::{Result, Context};
use brotli::Decompressor;
use crate::name_intern::NameInterner;
use crate::traits::{BlockDocument, BlockId, BlockNode, DocumentMetadata, DocumentReader};

/// Structural problems found while building or editing a block document.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("missing header line")]
    MissingHeader,
    #[error("header must be the first line (found at line {line})")]
    HeaderNotFirst { line: usize },
    #[error("duplicate block id {id} at line {line}")]
    DuplicateBlockId { id: BlockId, line: usize },
    #[error("block {id} at line {line} references parent {parent_id} which has not been declared yet")]
    UnknownParent { id: BlockId, parent_id: BlockId, line: usize },
    #[error("unknown block {0}")]
    UnknownBlock(BlockId),
    #[error("no block ids left to assign")]
    IdsExhausted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentHeader {
    pub version: String,
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFooter {
    pub total_blocks: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub header: DocumentHeader,
    pub footer: Option<DocumentFooter>,
}

/// One block in the arena. Children are stored as arena indices in
/// sibling order.
#[derive(Debug, Clone)]
pub struct BlockRecord {
    pub id: BlockId,
    pub parent_id: Option<BlockId>,
    pub name: Arc<str>,
    pub attributes: serde_json::Value,
    child_indices: Vec<usize>,
}

/// Direction for moving a block among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// In-memory block document: a flat arena plus root order.
#[derive(Debug, Clone)]
pub struct BlockDocumentData {
    pub metadata: DocumentInfo,
    root_indices: Vec<usize>,
    index_by_id: HashMap<BlockId, usize>,
    blocks: Vec<BlockRecord>,
    names: NameInterner,
    /// None once the largest id is in use.
    next_id: Option<BlockId>,
    revision: u64,
}

pub struct JsonlDocumentReader;

impl JsonlDocumentReader {
    pub fn new() -> Self {
        JsonlDocumentReader
    }
}

impl Default for JsonlDocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum DocumentLine {
    #[serde(rename = "header")]
    Header {
        version: String,
        #[serde(default)]
        metadata: serde_json::Value,
    },
    #[serde(rename = "block")]
    Block {
        id: BlockId,
        #[serde(default)]
        parent_id: Option<BlockId>,
        name: String,
        #[serde(default)]
        attributes: serde_json::Value,
    },
    #[serde(rename = "footer")]
    Footer {
        total_blocks: Option<usize>,
    },
}

/// Parses a block document from disk.
///
/// Brotli decompression is selected by the `.br` suffix.
///
/// # Supported Formats
///
/// - `.jsonl` / `.blocks` — JSON Lines
/// - `.jsonl.br` / `.blocks.br` — Brotli-compressed JSON Lines
///
/// # Examples
///
/// ```no_run
/// # use rlistview::parse_document;
/// # fn main() -> anyhow::Result<()> {
/// let doc = parse_document("post.blocks")?;
/// let compressed = parse_document("post.blocks.br")?;
/// # Ok(())
/// # }
/// ```
pub fn parse_document(file_path: &str) -> Result<BlockDocumentData> {
    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file: {}", file_path))?;

    let reader: Box<dyn BufRead> = if file_path.ends_with(".br") {
        Box::new(BufReader::new(Decompressor::new(file, 4096)))
    } else {
        Box::new(BufReader::new(file))
    };

    let doc = parse_document_from_reader(reader)
        .with_context(|| format!("Failed to parse document: {}", file_path))?;
    log::info!("Loaded {} blocks from {}", doc.block_count(), file_path);
    Ok(doc)
}

/// Parses a block document held in memory.
pub fn parse_document_str(text: &str) -> Result<BlockDocumentData> {
    parse_document_from_reader(text.as_bytes())
}

/// Parses JSON Lines from any buffered reader.
///
/// A parent line must precede the lines of its children; sibling order is
/// the order of appearance. This keeps every loaded document a finite tree.
pub fn parse_document_from_reader<R: BufRead>(reader: R) -> Result<BlockDocumentData> {
    let mut names = NameInterner::with_capacity(64);
    let mut header: Option<DocumentHeader> = None;
    let mut footer: Option<DocumentFooter> = None;
    let mut blocks: Vec<BlockRecord> = Vec::new();
    let mut index_by_id: HashMap<BlockId, usize> = HashMap::new();
    let mut root_indices = Vec::new();
    let mut seen_content = false;

    for (line_num, line_result) in reader.lines().enumerate() {
        let line_no = line_num + 1;
        let line = line_result
            .with_context(|| format!("Failed to read line {}", line_no))?;

        if line.trim().is_empty() {
            log::debug!("Skipping blank line {}", line_no);
            continue;
        }

        let parsed: DocumentLine = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse JSON at line {}", line_no))?;

        match parsed {
            DocumentLine::Header { version, metadata } => {
                if seen_content {
                    return Err(DocumentError::HeaderNotFirst { line: line_no }.into());
                }
                header = Some(DocumentHeader { version, metadata });
            }

            DocumentLine::Block { id, parent_id, name, attributes } => {
                if header.is_none() {
                    return Err(DocumentError::MissingHeader.into());
                }
                if index_by_id.contains_key(&id) {
                    return Err(DocumentError::DuplicateBlockId { id, line: line_no }.into());
                }

                let index = blocks.len();
                match parent_id {
                    Some(pid) => {
                        let &parent_index = index_by_id.get(&pid).ok_or(
                            DocumentError::UnknownParent { id, parent_id: pid, line: line_no },
                        )?;
                        blocks[parent_index].child_indices.push(index);
                    }
                    None => root_indices.push(index),
                }

                blocks.push(BlockRecord {
                    id,
                    parent_id,
                    name: names.intern(&name),
                    attributes: normalize_attributes(attributes),
                    child_indices: Vec::new(),
                });
                index_by_id.insert(id, index);
            }

            DocumentLine::Footer { total_blocks } => {
                footer = Some(DocumentFooter { total_blocks });
            }
        }
        seen_content = true;
    }

    let header = header.ok_or(DocumentError::MissingHeader)?;
    let next_id = blocks.iter().map(|b| b.id).max().map_or(Some(1), |max| max.checked_add(1));

    Ok(BlockDocumentData {
        metadata: DocumentInfo { header, footer },
        root_indices,
        index_by_id,
        blocks,
        names,
        next_id,
        revision: 0,
    })
}

fn normalize_attributes(attributes: serde_json::Value) -> serde_json::Value {
    if attributes.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        attributes
    }
}

impl BlockDocumentData {
    /// Creates an empty document with the given header.
    pub fn new(header: DocumentHeader) -> Self {
        Self {
            metadata: DocumentInfo { header, footer: None },
            root_indices: Vec::new(),
            index_by_id: HashMap::new(),
            blocks: Vec::new(),
            names: NameInterner::new(),
            next_id: Some(1),
            revision: 0,
        }
    }

    /// Edit counter, bumped by every structural change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns all blocks in depth-first pre-order (parents before children).
    pub fn blocks_in_order(&self) -> Vec<BlockRef<'_>> {
        let mut out = Vec::with_capacity(self.blocks.len());
        let mut stack: Vec<usize> = self.root_indices.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            out.push(BlockRef { doc: self, index });
            stack.extend(self.blocks[index].child_indices.iter().rev().copied());
        }
        out
    }

    /// Appends a new block as the last child of `parent_id` (or as the last
    /// top-level block when `None`) and returns its ID.
    pub fn append_block(
        &mut self,
        parent_id: Option<BlockId>,
        name: &str,
        attributes: serde_json::Value,
    ) -> Result<BlockId, DocumentError> {
        let parent_index = match parent_id {
            Some(pid) => Some(*self.index_by_id.get(&pid).ok_or(DocumentError::UnknownBlock(pid))?),
            None => None,
        };

        let id = self.next_id.ok_or(DocumentError::IdsExhausted)?;
        let index = self.blocks.len();
        let name = self.names.intern(name);
        self.blocks.push(BlockRecord {
            id,
            parent_id,
            name,
            attributes: normalize_attributes(attributes),
            child_indices: Vec::new(),
        });
        match parent_index {
            Some(p) => self.blocks[p].child_indices.push(index),
            None => self.root_indices.push(index),
        }
        self.index_by_id.insert(id, index);
        self.next_id = id.checked_add(1);
        self.revision += 1;
        Ok(id)
    }

    /// Swaps a block with its previous or next sibling.
    ///
    /// Returns `Ok(false)` when the block is already first (or last).
    pub fn move_block(&mut self, id: BlockId, direction: MoveDirection) -> Result<bool, DocumentError> {
        let &index = self.index_by_id.get(&id).ok_or(DocumentError::UnknownBlock(id))?;
        let parent_index = match self.blocks[index].parent_id {
            Some(pid) => Some(*self.index_by_id.get(&pid).ok_or(DocumentError::UnknownBlock(pid))?),
            None => None,
        };

        let siblings = match parent_index {
            Some(p) => &mut self.blocks[p].child_indices,
            None => &mut self.root_indices,
        };
        let Some(slot) = siblings.iter().position(|&i| i == index) else {
            return Err(DocumentError::UnknownBlock(id));
        };
        let target = match direction {
            MoveDirection::Up if slot > 0 => slot - 1,
            MoveDirection::Down if slot + 1 < siblings.len() => slot + 1,
            _ => return Ok(false),
        };
        siblings.swap(slot, target);
        self.revision += 1;
        Ok(true)
    }
}

// Wrapper type for GAT references

/// Borrowed handle to one block of a `BlockDocumentData`.
#[derive(Clone, Copy)]
pub struct BlockRef<'a> {
    doc: &'a BlockDocumentData,
    index: usize,
}

impl<'a> BlockRef<'a> {
    pub fn record(&self) -> &'a BlockRecord {
        &self.doc.blocks[self.index]
    }
}

impl<'a> std::fmt::Debug for BlockRef<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockRef")
            .field("id", &self.record().id)
            .field("name", &self.record().name)
            .finish()
    }
}

impl<'a> BlockNode<'a> for BlockRef<'a> {
    fn id(&self) -> BlockId {
        self.record().id
    }

    fn name(&self) -> &str {
        &self.record().name
    }

    fn attributes(&self) -> &serde_json::Value {
        &self.record().attributes
    }

    fn parent_id(&self) -> Option<BlockId> {
        self.record().parent_id
    }

    fn num_children(&self) -> usize {
        self.record().child_indices.len()
    }

    fn child_at(&self, index: usize) -> Option<Self> {
        let &child = self.record().child_indices.get(index)?;
        Some(BlockRef { doc: self.doc, index: child })
    }
}

impl DocumentReader for JsonlDocumentReader {
    fn read(&self, file_path: &str) -> Result<BlockDocumentData> {
        parse_document(file_path)
    }
}

impl<'a> DocumentMetadata for &'a DocumentInfo {
    fn version(&self) -> String {
        self.header.version.clone()
    }

    fn header_data(&self) -> &serde_json::Value {
        &self.header.metadata
    }

    fn declared_blocks(&self) -> Option<usize> {
        self.footer.as_ref().and_then(|f| f.total_blocks)
    }
}

impl BlockDocument for BlockDocumentData {
    type Metadata<'a> = &'a DocumentInfo where Self: 'a;
    type Block<'a> = BlockRef<'a> where Self: 'a;

    fn metadata(&self) -> Self::Metadata<'_> {
        &self.metadata
    }

    fn root_ids(&self) -> Vec<BlockId> {
        self.root_indices.iter().map(|&i| self.blocks[i].id).collect()
    }

    fn get_block(&self, id: BlockId) -> Option<Self::Block<'_>> {
        let &index = self.index_by_id.get(&id)?;
        Some(BlockRef { doc: self, index })
    }

    fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"type":"header","version":"1","metadata":{"title":"Sample"}}
{"type":"block","id":1,"name":"core/group","attributes":{"layout":"flex"}}
{"type":"block","id":2,"parent_id":1,"name":"core/paragraph","attributes":{"content":"a"}}
{"type":"block","id":3,"parent_id":1,"name":"core/paragraph"}

{"type":"block","id":4,"name":"core/heading","attributes":{"level":2}}
{"type":"footer","total_blocks":4}
"#;

    fn header() -> DocumentHeader {
        DocumentHeader { version: "1".to_string(), metadata: serde_json::json!({}) }
    }

    #[test]
    fn test_parse_builds_hierarchy_in_file_order() {
        let doc = parse_document_str(SAMPLE).unwrap();

        assert_eq!(doc.block_count(), 4);
        assert_eq!(doc.root_ids(), vec![1, 4]);
        assert_eq!(doc.metadata().declared_blocks(), Some(4));
        assert_eq!(doc.metadata().header_data()["title"], "Sample");

        let group = doc.get_block(1).unwrap();
        assert_eq!(group.name(), "core/group");
        let child_ids: Vec<_> = group.children().iter().map(|c| c.id()).collect();
        assert_eq!(child_ids, vec![2, 3]);
        assert_eq!(group.child_at(1).unwrap().parent_id(), Some(1));
        assert!(group.child_at(2).is_none());
    }

    #[test]
    fn test_missing_attributes_become_empty_object() {
        let doc = parse_document_str(SAMPLE).unwrap();
        let block = doc.get_block(3).unwrap();
        assert_eq!(block.attributes(), &serde_json::json!({}));
    }

    #[test]
    fn test_parent_must_precede_child() {
        let text = r#"{"type":"header","version":"1"}
{"type":"block","id":2,"parent_id":1,"name":"core/paragraph"}
{"type":"block","id":1,"name":"core/group"}
"#;
        let err = parse_document_str(text).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DocumentError>(),
            Some(&DocumentError::UnknownParent { id: 2, parent_id: 1, line: 2 })
        );
    }

    #[test]
    fn test_self_parent_is_rejected() {
        let text = r#"{"type":"header","version":"1"}
{"type":"block","id":7,"parent_id":7,"name":"core/group"}
"#;
        assert!(parse_document_str(text).is_err());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let text = r#"{"type":"header","version":"1"}
{"type":"block","id":1,"name":"core/group"}
{"type":"block","id":1,"name":"core/group"}
"#;
        let err = parse_document_str(text).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DocumentError>(),
            Some(&DocumentError::DuplicateBlockId { id: 1, line: 3 })
        );
    }

    #[test]
    fn test_header_required() {
        let err = parse_document_str(r#"{"type":"block","id":1,"name":"core/group"}"#).unwrap_err();
        assert_eq!(err.downcast_ref::<DocumentError>(), Some(&DocumentError::MissingHeader));

        let err = parse_document_str("").unwrap_err();
        assert_eq!(err.downcast_ref::<DocumentError>(), Some(&DocumentError::MissingHeader));
    }

    #[test]
    fn test_stale_root_id_resolves_to_none() {
        let doc = parse_document_str(SAMPLE).unwrap();
        assert!(doc.get_block(99).is_none());
        assert_eq!(doc.root_blocks().len(), 2);
    }

    #[test]
    fn test_blocks_in_order_is_preorder() {
        let doc = parse_document_str(SAMPLE).unwrap();
        let ids: Vec<_> = doc.blocks_in_order().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_move_block_swaps_siblings() {
        let mut doc = parse_document_str(SAMPLE).unwrap();

        assert_eq!(doc.move_block(3, MoveDirection::Up), Ok(true));
        let ids: Vec<_> = doc.get_block(1).unwrap().children().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(doc.revision(), 1);

        assert_eq!(doc.move_block(3, MoveDirection::Up), Ok(false));
        assert_eq!(doc.move_block(4, MoveDirection::Up), Ok(true));
        assert_eq!(doc.root_ids(), vec![4, 1]);
        assert_eq!(doc.move_block(42, MoveDirection::Down), Err(DocumentError::UnknownBlock(42)));
    }

    #[test]
    fn test_append_block_assigns_fresh_ids() {
        let mut doc = BlockDocumentData::new(header());
        let group = doc.append_block(None, "core/group", serde_json::Value::Null).unwrap();
        let para = doc.append_block(Some(group), "core/paragraph", serde_json::json!({"content": "x"})).unwrap();

        assert_ne!(group, para);
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.get_block(para).unwrap().parent_id(), Some(group));
        assert_eq!(doc.revision(), 2);
        assert_eq!(
            doc.append_block(Some(1000), "core/paragraph", serde_json::Value::Null),
            Err(DocumentError::UnknownBlock(1000))
        );
    }

    #[test]
    fn test_largest_id_parses_and_blocks_appends() {
        let text = r#"{"type":"header","version":"1"}
{"type":"block","id":18446744073709551615,"name":"core/group"}
"#;
        let mut doc = parse_document_str(text).unwrap();
        assert_eq!(doc.root_ids(), vec![u64::MAX]);

        assert_eq!(
            doc.append_block(Some(u64::MAX), "core/paragraph", serde_json::Value::Null),
            Err(DocumentError::IdsExhausted)
        );
        assert_eq!(doc.block_count(), 1);
        assert_eq!(doc.revision(), 0);
    }
}
