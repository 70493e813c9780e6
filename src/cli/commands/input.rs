//! Document input shared by the commands that read files

use crate::cli::output;
use crate::core::chunking::{document_name, DocumentPipeline};
use crate::core::error::RagError;
use crate::core::types::Document;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Read one document from a path, or from stdin for `-`
pub async fn read_document(
    path: &Path,
    pipeline: &DocumentPipeline,
) -> Result<Document, RagError> {
    if path == Path::new(STDIN_PATH) {
        let mut bytes = Vec::new();
        tokio::io::stdin().read_to_end(&mut bytes).await?;
        return pipeline.document_from_bytes("stdin", bytes);
    }

    let name = document_name(path);
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| RagError::DocumentError(format!("Failed to read {path:?}: {e}")))?;
    pipeline.check_size(&name, metadata.len())?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| RagError::DocumentError(format!("Failed to read {path:?}: {e}")))?;
    pipeline.document_from_bytes(&name, bytes)
}

/// Read every path, warning about and skipping unreadable ones.
/// Fails only when nothing could be read.
pub async fn read_documents(
    paths: &[PathBuf],
    pipeline: &DocumentPipeline,
) -> Result<Vec<Document>, RagError> {
    let mut documents = Vec::with_capacity(paths.len());

    for path in paths {
        match read_document(path, pipeline).await {
            Ok(doc) => documents.push(doc),
            Err(e) => {
                tracing::warn!("Skipping {:?}: {}", path, e);
                output::print_warning(&e.to_string());
            }
        }
    }

    if documents.is_empty() {
        return Err(RagError::NoDocuments);
    }

    Ok(documents)
}
