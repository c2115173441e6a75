//! Page geometry and raster pagination.
#![allow(dead_code)]
//!
//! A document is rendered once as a single tall image. Each PDF page shows the same full image,
//! shifted up by one printable height per page, so the page acts as a viewport sliding down the
//! image. No text is reflowed across pages.

use serde::{Deserialize, Serialize};

use crate::export::ExportError;

/// A4 portrait in PDF points.
pub const A4_WIDTH_PT: f64 = 595.28;
pub const A4_HEIGHT_PT: f64 = 841.89;
pub const DEFAULT_MARGIN_PT: f64 = 30.0;
/// Content width the rasterizer lays text out at (A4 width at 96 dpi).
pub const RENDER_WIDTH_PX: u32 = 794;
/// Upper bound on pages in one export. Taller images are rejected rather than laid out.
pub const MAX_PAGES: usize = 500;

/// Page dimensions for PDF export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width_pt: f64,
    pub height_pt: f64,
    /// Applied on all four sides.
    pub margin_pt: f64,
    pub render_width_px: u32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width_pt: A4_WIDTH_PT,
            height_pt: A4_HEIGHT_PT,
            margin_pt: DEFAULT_MARGIN_PT,
            render_width_px: RENDER_WIDTH_PX,
        }
    }
}

impl PageGeometry {
    /// Vertical space per page between top and bottom margins.
    pub fn available_height(&self) -> f64 {
        self.height_pt - 2.0 * self.margin_pt
    }

    pub fn printable_width(&self) -> f64 {
        self.width_pt - 2.0 * self.margin_pt
    }

    /// Height of a `width_px × height_px` image once scaled to the printable width.
    pub fn scaled_height(&self, width_px: u32, height_px: u32) -> f64 {
        f64::from(height_px) * self.printable_width() / f64::from(width_px)
    }

    pub fn validate(&self) -> Result<(), ExportError> {
        if !(self.available_height() > 0.0) {
            return Err(ExportError::InvalidGeometry(format!(
                "margins of {}pt leave no vertical space on a {}pt page",
                self.margin_pt, self.height_pt
            )));
        }
        if !(self.printable_width() > 0.0) {
            return Err(ExportError::InvalidGeometry(format!(
                "margins of {}pt leave no horizontal space on a {}pt page",
                self.margin_pt, self.width_pt
            )));
        }
        if self.render_width_px == 0 {
            return Err(ExportError::InvalidGeometry(
                "render width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where the full image is drawn on one page. `y_pt` is measured from the page top and is
/// negative from the second page on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePlacement {
    pub page_index: usize,
    pub x_pt: f64,
    pub y_pt: f64,
    pub width_pt: f64,
    pub height_pt: f64,
}

/// Number of pages needed for an image of `image_height` points: `ceil(H / A)`, at least one.
pub fn page_count(image_height: f64, available_height: f64) -> usize {
    if image_height <= 0.0 {
        return 1;
    }
    ((image_height / available_height).ceil() as usize).max(1)
}

/// Lays the scaled image out across pages.
///
/// Page 0 draws the image at `y = margin`. Page `k` draws it at `margin - k * A`, where
/// `A = height - 2 * margin`, so each page reveals the next `A` points of the image.
pub fn paginate(
    image_height: f64,
    geometry: &PageGeometry,
) -> Result<Vec<PagePlacement>, ExportError> {
    geometry.validate()?;
    if !image_height.is_finite() {
        return Err(ExportError::InvalidGeometry(format!(
            "image height {image_height} is not finite"
        )));
    }

    let available = geometry.available_height();
    if image_height / available > MAX_PAGES as f64 {
        return Err(ExportError::InvalidGeometry(format!(
            "image height {image_height}pt needs more than {MAX_PAGES} pages"
        )));
    }

    let pages = (0..page_count(image_height, available))
        .map(|page_index| PagePlacement {
            page_index,
            x_pt: geometry.margin_pt,
            y_pt: geometry.margin_pt - page_index as f64 * available,
            width_pt: geometry.printable_width(),
            height_pt: image_height,
        })
        .collect();

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 900pt of usable height per page, 500pt usable width.
    fn geometry() -> PageGeometry {
        PageGeometry {
            width_pt: 600.0,
            height_pt: 1000.0,
            margin_pt: 50.0,
            render_width_px: 794,
        }
    }

    #[test]
    fn test_default_geometry_is_a4_with_30pt_margin() {
        let g = PageGeometry::default();
        assert!((g.available_height() - 781.89).abs() < 1e-9);
        assert!((g.printable_width() - 535.28).abs() < 1e-9);
        assert_eq!(g.render_width_px, 794);
    }

    #[test]
    fn test_page_count_is_ceil_of_height_over_available() {
        assert_eq!(page_count(1.0, 900.0), 1);
        assert_eq!(page_count(900.0, 900.0), 1);
        assert_eq!(page_count(901.0, 900.0), 2);
        assert_eq!(page_count(1800.0, 900.0), 2);
        assert_eq!(page_count(2500.0, 900.0), 3);
    }

    #[test]
    fn test_zero_height_image_gets_one_page() {
        let pages = paginate(0.0, &geometry()).unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_first_page_placed_at_margin() {
        let pages = paginate(400.0, &geometry()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].y_pt, 50.0);
        assert_eq!(pages[0].x_pt, 50.0);
        assert_eq!(pages[0].width_pt, 500.0);
        assert_eq!(pages[0].height_pt, 400.0);
    }

    #[test]
    fn test_offsets_advance_by_available_height() {
        let pages = paginate(2500.0, &geometry()).unwrap();
        let offsets: Vec<f64> = pages.iter().map(|p| p.y_pt).collect();
        assert_eq!(offsets, vec![50.0, -850.0, -1750.0]);
        for pair in pages.windows(2) {
            assert_eq!(pair[0].y_pt - pair[1].y_pt, 900.0);
        }
        assert!(pages.iter().all(|p| p.height_pt == 2500.0));
    }

    #[test]
    fn test_page_count_matches_ceil_for_many_heights() {
        let g = geometry();
        for height in [1.0, 450.0, 899.0, 900.0, 900.5, 1799.0, 1800.0, 1801.0, 9000.0] {
            let pages = paginate(height, &g).unwrap();
            assert_eq!(pages.len(), (height / 900.0).ceil() as usize, "height {height}");
        }
    }

    #[test]
    fn test_scaled_height_preserves_aspect_ratio() {
        let g = geometry();
        // 794px wide → 500pt wide, so 1588px tall → 1000pt.
        assert!((g.scaled_height(794, 1588) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_margins_too_large_are_rejected() {
        let g = PageGeometry {
            margin_pt: 500.0,
            ..geometry()
        };
        assert!(matches!(
            paginate(100.0, &g),
            Err(ExportError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_page_cap_is_inclusive() {
        let pages = paginate(900.0 * MAX_PAGES as f64, &geometry()).unwrap();
        assert_eq!(pages.len(), MAX_PAGES);
    }

    #[test]
    fn test_height_beyond_page_cap_is_rejected() {
        let g = geometry();
        // A 1px-wide, u32::MAX-tall render scales to about 2e12pt.
        let height = g.scaled_height(1, u32::MAX);
        assert!(matches!(
            paginate(height, &g),
            Err(ExportError::InvalidGeometry(_))
        ));
        assert!(paginate(900.0 * MAX_PAGES as f64 + 1.0, &g).is_err());
    }

    #[test]
    fn test_non_finite_height_is_rejected() {
        assert!(paginate(f64::INFINITY, &geometry()).is_err());
    }
}
