//! Pull-based element stream over an OSM XML document.
//!
//! The document is never materialised as a tree. Events are read into a
//! single reusable buffer that is cleared after every event, and only the
//! element currently being assembled is held in memory. Once an element's
//! closing tag is seen it is handed to the caller and nothing of it is kept.
//!
//! # Usage
//!
//! ```ignore
//! use osm_ingest::ElementStream;
//!
//! for element in ElementStream::open(&path)? {
//!     let element = element?;
//!     println!("{} {:?}", element.kind(), element.id());
//! }
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use osm_model::{Attributes, ElementKind, NodeRef, RawElement, RawTag};

use crate::error::{IngestError, Result};

/// Read buffer capacity for file sources.
const READ_BUFFER_BYTES: usize = 64 * 1024;

/// Element currently being assembled, and how many document elements
/// enclose it.
struct OpenElement {
    element: RawElement,
    depth: usize,
}

/// Streams complete `node` and `way` elements in document order.
///
/// Single forward pass: once exhausted, or after the first error, the
/// iterator only returns `None`. The document as a whole must be complete:
/// an unclosed root, a missing root or content after the root is an error.
pub struct ElementStream<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// Names of the currently open document elements, outermost first.
    ancestors: Vec<String>,
    root_closed: bool,
    open: Option<OpenElement>,
    finished: bool,
}

impl ElementStream<BufReader<File>> {
    /// Opens a file source.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened OSM source");
        Ok(Self::from_reader(BufReader::with_capacity(
            READ_BUFFER_BYTES,
            file,
        )))
    }
}

impl<R: BufRead> ElementStream<R> {
    /// Streams from any buffered source. The character encoding is taken
    /// from the XML declaration (UTF-8 when there is none).
    pub fn from_reader(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
            ancestors: Vec::new(),
            root_closed: false,
            open: None,
            finished: false,
        }
    }

    fn next_element(&mut self) -> Result<Option<RawElement>> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(source) => {
                    return Err(IngestError::Xml {
                        position: self.reader.error_position(),
                        source,
                    });
                }
            };
            let decoder = self.reader.decoder();
            let position = self.reader.buffer_position();

            match event {
                Event::Start(start) => {
                    reject_after_root(self.root_closed, position)?;
                    match self.open.as_mut() {
                        Some(open) => push_child(&mut open.element, &start, decoder, position)?,
                        None => {
                            if let Some(kind) = element_kind(&start) {
                                let attributes = read_attributes(&start, decoder, position)?;
                                self.open = Some(OpenElement {
                                    element: RawElement::empty(kind, attributes),
                                    depth: self.ancestors.len(),
                                });
                            }
                        }
                    }
                    self.ancestors
                        .push(String::from_utf8_lossy(start.name().as_ref()).into_owned());
                }
                Event::Empty(start) => {
                    reject_after_root(self.root_closed, position)?;
                    if self.ancestors.is_empty() {
                        self.root_closed = true;
                    }
                    match self.open.as_mut() {
                        Some(open) => push_child(&mut open.element, &start, decoder, position)?,
                        None => {
                            if let Some(kind) = element_kind(&start) {
                                let attributes = read_attributes(&start, decoder, position)?;
                                return Ok(Some(RawElement::empty(kind, attributes)));
                            }
                        }
                    }
                }
                Event::End(_) => {
                    self.ancestors.pop();
                    if self.ancestors.is_empty() {
                        self.root_closed = true;
                    }
                    if self
                        .open
                        .as_ref()
                        .is_some_and(|open| open.depth == self.ancestors.len())
                    {
                        return Ok(self.open.take().map(|open| open.element));
                    }
                }
                Event::Text(text) => {
                    if text.iter().any(|byte| !byte.is_ascii_whitespace()) {
                        reject_after_root(self.root_closed, position)?;
                    }
                }
                Event::CData(_) => reject_after_root(self.root_closed, position)?,
                Event::Eof => {
                    if let Some(element) = self.ancestors.pop() {
                        return Err(IngestError::UnexpectedEof { element });
                    }
                    if !self.root_closed {
                        return Err(IngestError::MissingRoot);
                    }
                    return Ok(None);
                }
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for ElementStream<R> {
    type Item = Result<RawElement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_element() {
            Ok(Some(element)) => Some(Ok(element)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

/// Only comments and processing instructions may follow the root.
fn reject_after_root(root_closed: bool, position: u64) -> Result<()> {
    if root_closed {
        return Err(IngestError::TrailingContent { position });
    }
    Ok(())
}

fn element_kind(start: &BytesStart<'_>) -> Option<ElementKind> {
    match start.name().as_ref() {
        b"node" => Some(ElementKind::Node),
        b"way" => Some(ElementKind::Way),
        _ => None,
    }
}

/// Records a `tag` or `nd` child; anything else inside an element is ignored.
fn push_child(
    element: &mut RawElement,
    start: &BytesStart<'_>,
    decoder: Decoder,
    position: u64,
) -> Result<()> {
    match start.name().as_ref() {
        b"tag" => {
            let mut attributes = read_attributes(start, decoder, position)?;
            element.push_tag(RawTag {
                key: attributes.remove("k").unwrap_or_default(),
                value: attributes.remove("v").unwrap_or_default(),
            });
        }
        b"nd" => {
            let mut attributes = read_attributes(start, decoder, position)?;
            element.push_node_ref(NodeRef {
                node_id: attributes.remove("ref"),
            });
        }
        _ => {}
    }
    Ok(())
}

fn read_attributes(start: &BytesStart<'_>, decoder: Decoder, position: u64) -> Result<Attributes> {
    let mut attributes = Attributes::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|source| IngestError::Attribute { position, source })?;
        let key = decoder
            .decode(attr.key.as_ref())
            .map_err(|source| IngestError::AttributeValue {
                position,
                source: source.into(),
            })?
            .into_owned();
        let value = attr
            .decode_and_unescape_value(decoder)
            .map_err(|source| IngestError::AttributeValue { position, source })?;
        attributes.insert(key, value.into_owned());
    }
    Ok(attributes)
}
