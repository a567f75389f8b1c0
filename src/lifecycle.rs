//! Host lifecycle hooks
//!
//! Opening a document scans it and then forces a reload under whatever
//! encoding the scan left in place, since a `fileencoding` directive only
//! takes effect once the buffer is decoded again. Saving only rescans.

use anyhow::{Context, Result};

use crate::config::ModelineConfig;
use crate::modeline::{scan_document, DocumentTarget, ModelineRegistry, ScanReport};

/// Document notifications delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    Opened,
    Saved,
}

/// Scan a freshly opened document, then reload it with its encoding
pub fn on_document_open<T: DocumentTarget + ?Sized>(
    doc: &mut T,
    registry: &ModelineRegistry,
    config: &ModelineConfig,
) -> Result<ScanReport> {
    let report = scan_document(doc, registry, config);

    let encoding = doc.encoding();
    if let Err(e) = doc.reload_with_encoding(&encoding) {
        tracing::warn!("Failed to reload document as {}: {}", encoding, e);
        return Err(e).with_context(|| format!("reloading document as {}", encoding));
    }

    Ok(report)
}

/// Rescan a document after it was written to disk
pub fn on_document_save<T: DocumentTarget + ?Sized>(
    doc: &mut T,
    registry: &ModelineRegistry,
    config: &ModelineConfig,
) -> ScanReport {
    scan_document(doc, registry, config)
}

/// Dispatch a host notification to its hook
pub fn handle_event<T: DocumentTarget + ?Sized>(
    event: DocumentEvent,
    doc: &mut T,
    registry: &ModelineRegistry,
    config: &ModelineConfig,
) -> Result<ScanReport> {
    tracing::debug!(?event, "Handling document event");
    match event {
        DocumentEvent::Opened => on_document_open(doc, registry, config),
        DocumentEvent::Saved => Ok(on_document_save(doc, registry, config)),
    }
}
