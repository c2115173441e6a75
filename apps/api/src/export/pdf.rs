//! PDF export via injected rendering capabilities.
#![allow(dead_code)]
//!
//! # Pipeline
//! 1. `Rasterizer::render` lays the text out at a fixed content width and returns one tall image.
//! 2. The image is scaled to the printable page width and paginated (see `page.rs`).
//! 3. `PageAssembler::assemble` draws the image once per page at each placement and encodes the PDF.
//!
//! Both capabilities are traits so the server never depends on a particular canvas or PDF
//! backend. Nothing is returned unless every step succeeds.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{info, warn};

use crate::export::page::{paginate, PageGeometry, PagePlacement};
use crate::export::trigger::ExportTrigger;
use crate::export::{DocumentKind, ExportArtifact, ExportDocument, ExportError};

// ────────────────────────────────────────────────────────────────────────────
// Capability types
// ────────────────────────────────────────────────────────────────────────────

/// The block of text to lay out and rasterize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub kind: DocumentKind,
    pub text: String,
    pub width_px: u32,
}

/// A rasterized document. `data` is opaque to this module (typically PNG bytes).
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width_px: u32,
    pub height_px: u32,
    pub data: Bytes,
}

/// Renders a text block to a bitmap at a fixed content width.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn render(&self, request: &RenderRequest) -> Result<RasterImage, ExportError>;
}

/// Places the same image on successive PDF pages and returns the encoded document.
#[async_trait]
pub trait PageAssembler: Send + Sync {
    async fn assemble(
        &self,
        image: &RasterImage,
        pages: &[PagePlacement],
        geometry: &PageGeometry,
    ) -> Result<Bytes, ExportError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Exporter
// ────────────────────────────────────────────────────────────────────────────

/// Lays a rendered image out across pages: scales it to the printable width, then paginates.
pub fn layout_pages(
    image: &RasterImage,
    geometry: &PageGeometry,
) -> Result<Vec<PagePlacement>, ExportError> {
    if image.width_px == 0 {
        return Err(ExportError::EmptyRender);
    }
    let height = geometry.scaled_height(image.width_px, image.height_px);
    paginate(height, geometry)
}

/// Produces paginated PDF artifacts using the injected rasterizer and page assembler.
pub struct DocumentExporter<R, A> {
    rasterizer: R,
    assembler: A,
    geometry: PageGeometry,
}

impl<R: Rasterizer, A: PageAssembler> DocumentExporter<R, A> {
    pub fn new(rasterizer: R, assembler: A, geometry: PageGeometry) -> Self {
        Self {
            rasterizer,
            assembler,
            geometry,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Exports `document` as a PDF.
    ///
    /// `trigger` belongs to the caller's download control; it stays busy until this returns.
    /// Fails without producing output on an empty document, a render failure, or an assembly
    /// failure.
    pub async fn export_pdf(
        &self,
        trigger: &ExportTrigger,
        document: &ExportDocument<'_>,
    ) -> Result<ExportArtifact, ExportError> {
        let _guard = trigger.try_begin()?;

        if document.text.trim().is_empty() {
            return Err(ExportError::EmptyDocument);
        }
        self.geometry.validate()?;

        let request = RenderRequest {
            kind: document.kind,
            text: document.text.to_string(),
            width_px: self.geometry.render_width_px,
        };

        let image = self.rasterizer.render(&request).await.map_err(|e| {
            warn!(kind = document.kind.label(), "PDF render failed: {e}");
            e
        })?;

        let pages = layout_pages(&image, &self.geometry)?;
        let bytes = self
            .assembler
            .assemble(&image, &pages, &self.geometry)
            .await?;

        let filename = document.file_name("pdf");
        info!(
            kind = document.kind.label(),
            pages = pages.len(),
            bytes = bytes.len(),
            "Exported {filename}"
        );

        Ok(ExportArtifact::Pdf {
            filename,
            pages,
            bytes,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
