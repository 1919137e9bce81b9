//! Cairo-based stroke preview.

use super::PreviewSurface;
use crate::draw::Color;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

/// Renders the current stroke as a filled dot over the background tint.
///
/// The dot is centered and its diameter equals the stroke size, capped to
/// fit the image.
pub struct CairoPreview {
    width: i32,
    height: i32,
    size: u32,
    color: Color,
    tint: Option<Color>,
    visible: bool,
    image: Option<cairo::ImageSurface>,
}

impl CairoPreview {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            size: 1,
            color: crate::draw::BLACK,
            tint: None,
            visible: true,
            image: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last rendered image, if `update_image` succeeded at least once.
    pub fn image(&self) -> Option<&cairo::ImageSurface> {
        self.image.as_ref()
    }

    /// Renders a fresh image from the current inputs.
    pub fn render(&self) -> Result<cairo::ImageSurface> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, self.width, self.height)
            .context("failed to create preview surface")?;
        let ctx = cairo::Context::new(&surface).context("failed to create preview context")?;

        ctx.set_operator(cairo::Operator::Source);
        match self.tint {
            Some(tint) => {
                let (r, g, b) = tint.to_unit_rgb();
                ctx.set_source_rgba(r, g, b, 1.0);
            }
            None => ctx.set_source_rgba(0.0, 0.0, 0.0, 0.0),
        }
        ctx.paint().context("failed to paint preview background")?;
        ctx.set_operator(cairo::Operator::Over);

        let max_diameter = f64::from(self.width.min(self.height));
        let radius = (f64::from(self.size).min(max_diameter) / 2.0).max(0.5);
        let (r, g, b) = self.color.to_unit_rgb();
        ctx.set_source_rgba(r, g, b, 1.0);
        ctx.arc(
            f64::from(self.width) / 2.0,
            f64::from(self.height) / 2.0,
            radius,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill().context("failed to fill preview dot")?;

        drop(ctx);
        Ok(surface)
    }

    /// Writes the last rendered image (rendering one if needed) as PNG.
    pub fn write_png(&mut self, path: &Path) -> Result<()> {
        if self.image.is_none() {
            self.image = Some(self.render()?);
        }
        let Some(image) = self.image.as_ref() else {
            return Ok(());
        };
        let mut file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        image
            .write_to_png(&mut file)
            .with_context(|| format!("failed to write preview to {}", path.display()))?;
        Ok(())
    }
}

impl PreviewSurface for CairoPreview {
    fn set_pen(&mut self, size: u32, color: Color) {
        self.size = size;
        self.color = color;
    }

    fn set_background(&mut self, tint: Option<Color>) {
        self.tint = tint;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn update_image(&mut self) {
        match self.render() {
            Ok(image) => self.image = Some(image),
            Err(err) => log::warn!("Preview render failed: {err:#}"),
        }
    }
}
