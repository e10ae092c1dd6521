use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use anyhow::{Result, Context};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use crate::document::BlockDocumentData;
use crate::traits::{BlockDocument, BlockId, BlockNode};

/// Streams a block document as JSON Lines.
pub struct DocumentWriter {
    writer: Box<dyn Write>,
    block_count: usize,
}

impl DocumentWriter {
    /// Creates a new DocumentWriter for the specified file path.
    ///
    /// Brotli compression (quality 6) is enabled when the path ends with
    /// `.br`, e.g. `post.blocks.br`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use rlistview::DocumentWriter;
    /// # fn main() -> anyhow::Result<()> {
    /// let mut writer = DocumentWriter::new("post.blocks")?;
    /// writer.write_header("1", serde_json::json!({"title": "Hello"}))?;
    /// writer.write_block(1, None, "core/paragraph", None)?;
    /// writer.write_footer()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(BufWriter::new(file), 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Ok(Self::from_writer(writer))
    }

    /// Wraps an arbitrary sink (used for in-memory output).
    pub fn from_writer(writer: Box<dyn Write>) -> Self {
        DocumentWriter {
            writer,
            block_count: 0,
        }
    }

    pub fn write_header(&mut self, version: &str, metadata: serde_json::Value) -> Result<()> {
        let header = serde_json::json!({
            "type": "header",
            "version": version,
            "metadata": metadata
        });

        self.write_line(&header)
    }

    /// Writes one block line. The parent must already have been written.
    pub fn write_block(
        &mut self,
        id: BlockId,
        parent_id: Option<BlockId>,
        name: &str,
        attributes: Option<serde_json::Value>,
    ) -> Result<()> {
        let mut map = serde_json::Map::new();
        map.insert("type".to_string(), serde_json::Value::String("block".to_string()));
        map.insert("id".to_string(), serde_json::Value::Number(id.into()));
        map.insert("parent_id".to_string(),
            parent_id.map(|p| serde_json::Value::Number(p.into()))
                .unwrap_or(serde_json::Value::Null));
        map.insert("name".to_string(), serde_json::Value::String(name.to_string()));

        if let Some(attrs) = attributes {
            map.insert("attributes".to_string(), attrs);
        }

        self.write_line(&serde_json::Value::Object(map))?;
        self.block_count += 1;
        Ok(())
    }

    pub fn write_footer(&mut self) -> Result<()> {
        let footer = serde_json::json!({
            "type": "footer",
            "total_blocks": self.block_count
        });

        self.write_line(&footer)
    }

    /// Writes a complete document: header, every block in pre-order, footer.
    pub fn write_document(&mut self, doc: &BlockDocumentData) -> Result<()> {
        let info = doc.metadata();
        self.write_header(&info.header.version, info.header.metadata.clone())?;

        for block in doc.blocks_in_order() {
            let attributes = match block.attributes() {
                serde_json::Value::Object(map) if map.is_empty() => None,
                other => Some(other.clone()),
            };
            self.write_block(block.id(), block.parent_id(), block.name(), attributes)?;
        }

        self.write_footer()
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .context("Failed to serialize to JSON")?;

        writeln!(self.writer, "{}", json)
            .context("Failed to write line")?;

        Ok(())
    }

    /// Flushes buffered output (and finishes the Brotli stream on drop).
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }
}

impl Drop for DocumentWriter {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
