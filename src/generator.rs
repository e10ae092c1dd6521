use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use crate::document::{BlockDocumentData, DocumentHeader};
use crate::traits::{BlockDocument, BlockId, DocumentReader};

const DEFAULT_MAX_ROOTS: usize = 8;
const DEFAULT_MAX_DEPTH: usize = 4;
const DEFAULT_MAX_CHILDREN: usize = 6;

/// Blocks that may hold inner blocks.
const CONTAINER_BLOCKS: &[&str] = &[
    "core/group",
    "core/columns",
    "core/column",
    "core/cover",
    "core/list",
    "core/quote",
];

/// Blocks that are always leaves.
const LEAF_BLOCKS: &[&str] = &[
    "core/paragraph",
    "core/heading",
    "core/image",
    "core/button",
    "core/separator",
    "core/code",
];

static HEADER_METADATA: once_cell::sync::Lazy<serde_json::Value> = once_cell::sync::Lazy::new(|| {
    serde_json::json!({
        "generator": "VirtualDocumentReader",
        "description": "Synthetic block document for testing"
    })
});

/// Produces seeded random block documents instead of reading a file.
pub struct VirtualDocumentReader {
    max_roots: usize,
    max_depth: usize,
    max_children: usize,
    seed: u64,
}

impl VirtualDocumentReader {
    pub fn new() -> Self {
        Self {
            max_roots: DEFAULT_MAX_ROOTS,
            max_depth: DEFAULT_MAX_DEPTH,
            max_children: DEFAULT_MAX_CHILDREN,
            seed: 42,
        }
    }

    pub fn with_config(max_roots: usize, max_depth: usize, max_children: usize, seed: u64) -> Self {
        Self {
            max_roots: max_roots.max(1),
            max_depth,
            max_children,
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates the document. Same configuration, same document.
    pub fn generate(&self) -> BlockDocumentData {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut doc = BlockDocumentData::new(DocumentHeader {
            version: "1".to_string(),
            metadata: HEADER_METADATA.clone(),
        });

        let num_roots = rng.gen_range(1..=self.max_roots);
        for _ in 0..num_roots {
            self.generate_block(&mut rng, &mut doc, None, 0);
        }

        log::info!(
            "Generated virtual document with {} blocks (seed {})",
            doc.block_count(),
            self.seed
        );
        doc
    }

    fn generate_block(
        &self,
        rng: &mut StdRng,
        doc: &mut BlockDocumentData,
        parent_id: Option<BlockId>,
        depth: usize,
    ) {
        let is_container = depth < self.max_depth && rng.gen_bool(0.4);
        let name = if is_container {
            CONTAINER_BLOCKS[rng.gen_range(0..CONTAINER_BLOCKS.len())]
        } else {
            LEAF_BLOCKS[rng.gen_range(0..LEAF_BLOCKS.len())]
        };
        let attributes = generate_attributes(rng, name);

        // Parents are always present, so this cannot fail.
        let Ok(id) = doc.append_block(parent_id, name, attributes) else {
            return;
        };

        if is_container {
            let num_children = rng.gen_range(1..=self.max_children.max(1));
            for _ in 0..num_children {
                self.generate_block(rng, doc, Some(id), depth + 1);
            }
        }
    }
}

impl Default for VirtualDocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for VirtualDocumentReader {
    fn read(&self, _file_path: &str) -> anyhow::Result<BlockDocumentData> {
        Ok(self.generate())
    }
}

fn generate_attributes(rng: &mut StdRng, name: &str) -> serde_json::Value {
    match name {
        "core/paragraph" => serde_json::json!({
            "content": format!("Paragraph {}", rng.gen_range(0..10_000)),
        }),
        "core/heading" => serde_json::json!({
            "level": rng.gen_range(1..=6),
            "content": format!("Heading {}", rng.gen_range(0..1_000)),
        }),
        "core/image" => serde_json::json!({
            "id": rng.gen_range(1..5_000),
            "sizeSlug": "large",
        }),
        "core/columns" => serde_json::json!({ "isStackedOnMobile": rng.gen_bool(0.5) }),
        "core/group" => serde_json::json!({ "tagName": "div" }),
        _ => serde_json::json!({}),
    }
}
