use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, Rgba};
use imageproc::drawing::draw_text_mut;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::RenderConfig;
use crate::error::{MemeforgeError, Result};
use crate::render::fonts::FontSet;
use crate::render::text;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Composites a caption onto an image and persists the result.
///
/// Stages run strictly in order for one request:
/// load -> crop -> fit fonts -> position -> draw -> save.
///
/// The bitmap and fitted sizes are mutated in place by each stage, so an
/// engine must not be shared across concurrent renders; the web layer builds
/// one engine per request from the shared config and font set.
pub struct MemeEngine {
    output_dir: PathBuf,
    fonts: FontSet,
    text_scale: f32,
    wrap_width: usize,
    output_width: Option<u32>,
    body: String,
    author: String,
    image: Option<DynamicImage>,
    body_size: u32,
    author_size: u32,
    rng: StdRng,
}

impl MemeEngine {
    pub fn new(output_dir: impl Into<PathBuf>, fonts: FontSet) -> Self {
        Self {
            output_dir: output_dir.into(),
            fonts,
            text_scale: 0.7,
            wrap_width: 40,
            output_width: None,
            body: String::new(),
            author: String::new(),
            image: None,
            body_size: 0,
            author_size: 0,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_config(render: &RenderConfig, fonts: FontSet) -> Self {
        let mut engine = Self::new(render.output_dir.clone(), fonts);
        engine.text_scale = render.text_scale;
        engine.wrap_width = render.wrap_width;
        engine
    }

    /// Seed the placement RNG so renders are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn set_caption(&mut self, body: impl Into<String>, author: impl Into<String>) {
        self.body = body.into();
        self.author = author.into();
    }

    /// Author text as rendered on the image. Computed from the stored author
    /// at render time, never stored alongside it.
    pub fn author_caption(&self) -> String {
        format!("- {}", self.author)
    }

    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    pub fn body_size(&self) -> u32 {
        self.body_size
    }

    pub fn author_size(&self) -> u32 {
        self.author_size
    }

    /// Decode the image at `path` into the engine, replacing any previous
    /// one. The format is sniffed from the content, not the extension, so
    /// downloaded temp files decode regardless of how they are named.
    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        let load_err = |reason: String| MemeforgeError::ImageLoad {
            path: path.to_path_buf(),
            reason,
        };
        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| load_err(e.to_string()))?;
        let image = reader.decode().map_err(|e| load_err(e.to_string()))?;
        self.image = Some(image);
        Ok(())
    }

    /// Scale the image to `output_width` and crop-to-fill, preserving center
    /// content.
    ///
    /// Both target dimensions derive from the scaled source width, so the
    /// output is square regardless of the source aspect ratio.
    pub fn crop_image(&mut self, output_width: Option<u32>) -> Result<()> {
        let target = output_width
            .or(self.output_width)
            .ok_or(MemeforgeError::MissingDimension)?;
        let image = self.image.as_mut().ok_or(MemeforgeError::ImageNotLoaded)?;
        self.output_width = Some(target);

        let scale = target as f64 / image.width() as f64;
        // Rounded, not truncated: the ratio is not always exactly
        // representable and the output width must land on the target.
        let new_width = (image.width() as f64 * scale).round() as u32;
        let new_height = new_width;
        *image = image.resize_to_fill(new_width, new_height, FilterType::Lanczos3);
        Ok(())
    }

    /// Search the smallest body size whose full unwrapped text spans at least
    /// `text_scale` of the image width, then derive the author size from it.
    pub fn fit_fonts(&mut self) -> Result<()> {
        let image = self.image.as_ref().ok_or(MemeforgeError::ImageNotLoaded)?;
        self.body_size =
            text::fit_body_size(&self.fonts.body, &self.body, image.width(), self.text_scale);
        self.author_size = text::author_size(self.body_size);
        Ok(())
    }

    /// Pick a uniformly random anchor such that the full body text (anchored
    /// bottom-right) and the full author text (anchored top-right) both stay
    /// inside the image. Bounds come from the unwrapped strings, not from
    /// individual wrapped lines. A degenerate range collapses to its lower
    /// bound.
    pub fn random_position(&mut self) -> Result<(u32, u32)> {
        let image = self.image.as_ref().ok_or(MemeforgeError::ImageNotLoaded)?;
        let (body_w, body_h) = text::measured_size(&self.fonts.body, &self.body, self.body_size);
        let (author_w, author_h) = text::measured_size(
            &self.fonts.author,
            &self.author_caption(),
            self.author_size,
        );

        let x = sample_range(&mut self.rng, body_w.max(author_w), image.width());
        let y = sample_range(
            &mut self.rng,
            body_h,
            image.height().saturating_sub(author_h),
        );
        Ok((x, y))
    }

    /// Draw every wrapped body line with its bottom-right corner at the
    /// anchor, then every wrapped author line with its top-right corner at
    /// the anchor. All lines share the single anchor point.
    pub fn draw_caption(&mut self, x: u32, y: u32) -> Result<()> {
        let body_lines = text::wrap_lines(&self.body, self.wrap_width);
        let author_lines = text::wrap_lines(&self.author_caption(), self.wrap_width);

        let image = self.image.take().ok_or(MemeforgeError::ImageNotLoaded)?;
        let mut canvas = image.into_rgba8();

        for line in &body_lines {
            let (line_w, line_h) = text::measured_size(&self.fonts.body, line, self.body_size);
            draw_text_mut(
                &mut canvas,
                WHITE,
                x as i32 - line_w as i32,
                y as i32 - line_h as i32,
                self.body_size as f32,
                &self.fonts.body,
                line,
            );
        }

        for line in &author_lines {
            let (line_w, _) = text::measured_size(&self.fonts.author, line, self.author_size);
            draw_text_mut(
                &mut canvas,
                WHITE,
                x as i32 - line_w as i32,
                y as i32,
                self.author_size as f32,
                &self.fonts.author,
                line,
            );
        }

        self.image = Some(DynamicImage::ImageRgba8(canvas));
        Ok(())
    }

    /// Run crop (when a width is supplied), font fitting, placement and
    /// drawing on the loaded image.
    pub fn overlay_text(&mut self, output_width: Option<u32>) -> Result<()> {
        if output_width.is_some() {
            self.crop_image(output_width)?;
        }
        self.fit_fonts()?;
        let (x, y) = self.random_position()?;
        self.draw_caption(x, y)
    }

    /// Encode the bitmap as JPEG under the output directory, using a
    /// uniqueness-generating temp file name with the `meme-` prefix.
    pub fn save_image(&mut self) -> Result<PathBuf> {
        let image = self.image.as_ref().ok_or(MemeforgeError::ImageNotLoaded)?;
        std::fs::create_dir_all(&self.output_dir)?;

        let tmp = tempfile::Builder::new()
            .prefix("meme-")
            .suffix(".jpg")
            .tempfile_in(&self.output_dir)?;
        let (_file, out_path) = tmp.keep().map_err(|e| MemeforgeError::Io(e.error))?;

        image
            .to_rgb8()
            .save(&out_path)
            .map_err(|e| MemeforgeError::ImageEncode(e.to_string()))?;

        tracing::debug!("Saved meme to {}", out_path.display());
        Ok(out_path)
    }

    /// Facade for one full render: load the image, set the caption, overlay
    /// at `width` and save. Leaves the engine holding the last-rendered
    /// state.
    pub fn make_meme(
        &mut self,
        image_path: &Path,
        body: &str,
        author: &str,
        width: u32,
    ) -> Result<PathBuf> {
        self.load_image(image_path)?;
        self.set_caption(body, author);
        self.overlay_text(Some(width))?;
        self.save_image()
    }
}

fn sample_range(rng: &mut StdRng, lo: u32, hi: u32) -> u32 {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}
