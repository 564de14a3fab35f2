//! PDF document encoder.
//!
//! Lays content out top to bottom on A4 pages and, on finalize, assembles
//! the complete file: header, font, pages with their content streams,
//! images, page tree, catalog, cross-reference table and trailer.
//!
//! Object ids come from one counter owned by the encoder. Pages take an id
//! when they are started and images when they are placed; the catalog,
//! page tree, font and content streams are numbered during finalize. Ids
//! are therefore contiguous from 1.

use super::content_stream::PageContentBuilder;
use super::image_handler::ImageResource;
use super::object_serializer::ObjectSerializer;
use crate::config::EncoderConfig;
use crate::elements::{PixelTextSize, TextAlign};
use crate::error::{Error, Result};
use crate::layout::{
    Color, CONTENT_BOTTOM, CONTENT_HEIGHT, CONTENT_WIDTH, LAYOUT_EPSILON, LINE_SPACING, MARGIN,
    PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::object::{Dictionary, Object};
use crate::rendering::{render_bitmap, PixelBuffer, CHAR_WIDTH};
use crate::text::{measure, wrap};
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::Write;

/// PDF version written in the header.
pub const PDF_VERSION: &str = "1.7";

/// Streams a document's content into pages and encodes it as PDF.
///
/// The whole file is assembled in memory; the sink is only written once
/// [`finalize`](Self::finalize) has built every byte.
///
/// # Examples
///
/// ```
/// use pdf_scribe::elements::TextAlign;
/// use pdf_scribe::layout::Color;
/// use pdf_scribe::writer::DocumentEncoder;
///
/// let mut encoder = DocumentEncoder::new(Vec::new(), Color::WHITE);
/// encoder.draw_text("Hello, World!", 18.0, Color::BLACK, TextAlign::Center)?;
/// let bytes = encoder.finalize()?;
/// assert!(bytes.starts_with(b"%PDF-1.7"));
/// # Ok::<(), pdf_scribe::Error>(())
/// ```
pub struct DocumentEncoder<W: Write> {
    sink: W,
    config: EncoderConfig,
    background: Color,
    /// Next free object id
    next_id: u32,
    current: PageContentBuilder,
    /// Pages before `current`, in creation order
    pages: Vec<PageContentBuilder>,
    images: Vec<ImageResource>,
    /// Top of the next item, measured from the top of the page
    cursor_y: f32,
    disposed: bool,
}

impl<W: Write> DocumentEncoder<W> {
    /// Create an encoder with the default configuration; page 1 is started.
    pub fn new(sink: W, background: Color) -> Self {
        Self::with_config(sink, background, EncoderConfig::default())
    }

    /// Create an encoder with a custom configuration.
    pub fn with_config(sink: W, background: Color, config: EncoderConfig) -> Self {
        let current = PageContentBuilder::new(1, background, config.font_name.clone());
        Self {
            sink,
            config,
            background,
            next_id: 2,
            current,
            pages: Vec::new(),
            images: Vec::new(),
            cursor_y: MARGIN,
            disposed: false,
        }
    }

    /// Allocate a new object ID.
    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn ensure_active(&self) -> Result<()> {
        if self.disposed {
            Err(Error::ResourceDisposed("document encoder"))
        } else {
            Ok(())
        }
    }

    fn start_new_page(&mut self) {
        let id = self.alloc_id();
        let page = PageContentBuilder::new(id, self.background, self.config.font_name.clone());
        let finished = std::mem::replace(&mut self.current, page);
        self.pages.push(finished);
        self.cursor_y = MARGIN;
        log::debug!("Started page {} (object {})", self.page_count(), id);
    }

    fn overflows(&self, height: f32) -> bool {
        self.cursor_y + height > CONTENT_BOTTOM + LAYOUT_EPSILON
    }

    /// Number of pages started so far (at least 1).
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Number of images placed so far.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Vertical position of the next item, from the top of the page.
    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Draw a paragraph with the built-in font.
    ///
    /// The text is wrapped to the content width. Each line advances the
    /// cursor by `point_size * 1.5`; a line that would cross the bottom
    /// margin goes to a new page.
    pub fn draw_text(
        &mut self,
        text: &str,
        point_size: f32,
        color: Color,
        alignment: TextAlign,
    ) -> Result<()> {
        self.ensure_active()?;

        let line_height = point_size * LINE_SPACING;
        for line in wrap(text, point_size, CONTENT_WIDTH) {
            if self.overflows(line_height) {
                self.start_new_page();
            }

            let width = measure(&line, point_size);
            let x = match alignment {
                TextAlign::Left => MARGIN,
                TextAlign::Center => PAGE_WIDTH / 2.0 - width / 2.0,
                TextAlign::Right => PAGE_WIDTH - MARGIN - width,
            };

            self.current.add_text(&line, x, self.cursor_y, point_size, color);
            self.cursor_y += line_height;
        }
        Ok(())
    }

    /// Draw text rasterized with the bitmap font.
    ///
    /// Every non-empty line becomes one or more images; lines longer than
    /// fit in the content width are split into fixed-size chunks.
    pub fn draw_bitmap_text(
        &mut self,
        text: &str,
        text_color: Color,
        background_color: Color,
        scale: PixelTextSize,
    ) -> Result<()> {
        self.ensure_active()?;

        let scale = usize::from(scale.value());
        let advance = ((CHAR_WIDTH + 1) * scale) as f32;
        let max_chars = ((CONTENT_WIDTH / advance).floor() as usize).max(1);

        for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
            let chars: Vec<char> = line.chars().collect();
            for chunk in chars.chunks(max_chars) {
                let chunk: String = chunk.iter().collect();
                let mut image = render_bitmap(&chunk, text_color, background_color, scale);
                self.draw_image(&image)?;
                image.release();
            }
        }
        Ok(())
    }

    /// Place an image centered horizontally at the cursor.
    ///
    /// Images larger than the content area are scaled down uniformly, never
    /// up. The pixels are copied, so `image` may be released afterwards.
    pub fn draw_image(&mut self, image: &PixelBuffer) -> Result<()> {
        self.ensure_active()?;
        let pixels = image.pixels()?;

        let (img_w, img_h) = (image.width() as f32, image.height() as f32);
        let scale = 1f32.min(CONTENT_WIDTH / img_w).min(CONTENT_HEIGHT / img_h);
        let width = img_w * scale;
        let height = img_h * scale;

        if self.overflows(height) {
            self.start_new_page();
        }

        let id = self.alloc_id();
        let resource =
            ImageResource::new(id, image.width(), image.height(), Bytes::copy_from_slice(pixels));

        let x = PAGE_WIDTH / 2.0 - width / 2.0;
        self.current.add_image(&resource, x, self.cursor_y, width, height);
        self.cursor_y += height;

        log::debug!(
            "Placed image {} ({}x{} px) at {:.2}x{:.2} on page {}",
            id,
            resource.width,
            resource.height,
            width,
            height,
            self.page_count()
        );
        self.images.push(resource);
        Ok(())
    }

    /// Encode the document and write it to the sink.
    ///
    /// Returns the sink once every byte has been written and flushed.
    pub fn finalize(mut self) -> Result<W> {
        self.ensure_active()?;

        let mut pages = std::mem::take(&mut self.pages);
        let last = PageContentBuilder::new(0, self.background, String::new());
        pages.push(std::mem::replace(&mut self.current, last));
        let images = std::mem::take(&mut self.images);

        let mut out = ObjectWriter::new();

        writeln!(out.buf, "%PDF-{}", PDF_VERSION)?;
        out.buf.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");
        writeln!(out.buf, "%%Creator: {}", self.config.creator)?;

        let catalog_id = self.alloc_id();
        let pages_id = self.alloc_id();
        let font_id = self.alloc_id();

        out.write(
            font_id,
            &ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Font")),
                ("Subtype", ObjectSerializer::name("Type1")),
                ("BaseFont", ObjectSerializer::name(&self.config.font_name)),
                ("Encoding", ObjectSerializer::name(&self.config.encoding)),
            ]),
        )?;

        let mut kids = Vec::with_capacity(pages.len());
        for page in &pages {
            let content_id = self.alloc_id();
            let data = page.encoded_content();
            out.write(
                content_id,
                &Object::Stream {
                    dict: ObjectSerializer::entries(vec![(
                        "Length",
                        ObjectSerializer::integer(data.len() as i64),
                    )]),
                    data: Bytes::from(data),
                },
            )?;

            out.write(page.id(), &self.page_object(page, pages_id, font_id, content_id))?;
            kids.push(ObjectSerializer::reference(page.id()));
        }

        for image in &images {
            out.write(image.id, &image.to_xobject())?;
        }

        let page_count = kids.len();
        out.write(
            pages_id,
            &ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Pages")),
                ("Kids", ObjectSerializer::array(kids)),
                ("Count", ObjectSerializer::integer(page_count as i64)),
            ]),
        )?;

        out.write(
            catalog_id,
            &ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Catalog")),
                ("Pages", ObjectSerializer::reference(pages_id)),
            ]),
        )?;

        debug_assert_eq!(
            out.offsets.len(),
            (self.next_id - 1) as usize,
            "every allocated object id must be written exactly once"
        );

        out.write_xref_and_trailer(catalog_id)?;

        log::debug!(
            "Encoded PDF: {} page(s), {} image(s), {} objects, {} bytes",
            page_count,
            images.len(),
            out.offsets.len(),
            out.buf.len()
        );

        self.sink.write_all(&out.buf)?;
        self.sink.flush()?;
        Ok(self.sink)
    }

    fn page_object(
        &self,
        page: &PageContentBuilder,
        pages_id: u32,
        font_id: u32,
        content_id: u32,
    ) -> Object {
        let mut fonts = Dictionary::new();
        fonts.insert(self.config.font_name.clone(), ObjectSerializer::reference(font_id));

        let mut resources = Dictionary::new();
        resources.insert("Font".to_string(), Object::Dictionary(fonts));
        if page.has_images() {
            let xobjects: Dictionary = page
                .image_ids()
                .iter()
                .map(|&id| (format!("Im{}", id), ObjectSerializer::reference(id)))
                .collect();
            resources.insert("XObject".to_string(), Object::Dictionary(xobjects));
        }

        ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Page")),
            ("Parent", ObjectSerializer::reference(pages_id)),
            ("MediaBox", ObjectSerializer::media_box(PAGE_WIDTH as f64, PAGE_HEIGHT as f64)),
            ("Contents", ObjectSerializer::reference(content_id)),
            ("Resources", Object::Dictionary(resources)),
        ])
    }

    /// Release internal buffers. Later draws and `finalize` fail with
    /// [`Error::ResourceDisposed`]; disposing twice is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.pages = Vec::new();
        self.images = Vec::new();
        self.current = PageContentBuilder::new(self.current.id(), self.background, String::new());
        log::debug!("Document encoder disposed");
    }
}

/// In-memory file body that records where each object starts.
struct ObjectWriter {
    buf: Vec<u8>,
    /// Object id -> byte offset
    offsets: BTreeMap<u32, usize>,
    serializer: ObjectSerializer,
}

impl ObjectWriter {
    fn new() -> Self {
        Self {
            buf: Vec::new(),
            offsets: BTreeMap::new(),
            serializer: ObjectSerializer::new(),
        }
    }

    fn write(&mut self, id: u32, obj: &Object) -> Result<()> {
        let offset = self.buf.len();
        self.offsets.insert(id, offset);
        log::trace!("Object {} at offset {}", id, offset);
        self.serializer.write_indirect(&mut self.buf, id, obj)?;
        Ok(())
    }

    fn write_xref_and_trailer(&mut self, root_id: u32) -> Result<()> {
        let xref_pos = self.buf.len();
        let size = self.offsets.len() + 1;

        writeln!(self.buf, "xref")?;
        writeln!(self.buf, "0 {}", size)?;
        writeln!(self.buf, "0000000000 65535 f ")?;
        for offset in self.offsets.values() {
            writeln!(self.buf, "{:010} 00000 n ", offset)?;
        }

        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(size as i64)),
            ("Root", ObjectSerializer::reference(root_id)),
        ]);
        write!(self.buf, "trailer ")?;
        self.serializer.write_object(&mut self.buf, &trailer)?;
        writeln!(self.buf)?;
        writeln!(self.buf, "startxref")?;
        writeln!(self.buf, "{}", xref_pos)?;
        write!(self.buf, "%%EOF")?;
        Ok(())
    }
}
