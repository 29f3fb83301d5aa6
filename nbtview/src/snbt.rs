//! Renders an [`NbtTag`] tree as stringified NBT (SNBT) text.
//!
//! Two whitespace modes exist. Pretty mode lays each named entry out on its
//! own line with four-space indentation; compact mode emits no whitespace at
//! all. Both produce identical tokens in identical order.
//!
//! ```
//! use nbtview::{NbtTag, Payload};
//!
//! let root = NbtTag {
//!     name: Some("".to_owned()),
//!     payload: Payload::Compound(vec![
//!         NbtTag {
//!             name: Some("foo".to_owned()),
//!             payload: Payload::Byte(42),
//!         },
//!         NbtTag {
//!             name: None,
//!             payload: Payload::End,
//!         },
//!     ]),
//! };
//!
//! assert_eq!(nbtview::snbt::to_string(&root).unwrap(), "{foo:42b}");
//! ```

use std::io::Write;

use crate::error::{Error, Result};
use crate::tag::{NbtTag, Payload};

const INDENT: &[u8] = b"    ";

/// Prints tag trees to a writer.
///
/// Indentation depth is state of the printer value and is reset by every
/// [`print`](Printer::print) call, so a printer can render trees one after
/// another, and two printers never interfere with each other.
pub struct Printer<W> {
    writer: W,
    pretty: bool,
    indent: usize,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            indent: 0,
        }
    }

    /// Consumes this printer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Render one whole tree, returning the number of bytes written.
    pub fn print(&mut self, tag: &NbtTag) -> Result<usize> {
        self.indent = 0;
        self.tag(tag)
    }

    fn tag(&mut self, tag: &NbtTag) -> Result<usize> {
        let mut out = 0;
        let named = tag.name().map_or(false, |n| !n.is_empty());

        if self.pretty && (named || tag.is_end()) {
            out += self.emit(b"\n")?;
            // End tags sit one level out: they close the scope the
            // surrounding compound opened.
            let levels = if tag.is_end() {
                self.indent.saturating_sub(1)
            } else {
                self.indent
            };
            for _ in 0..levels {
                out += self.emit(INDENT)?;
            }
        }

        if named {
            if let Some(name) = tag.name() {
                out += self.emit(name.as_bytes())?;
            }
            let separator: &[u8] = if self.pretty { b": " } else { b":" };
            out += self.emit(separator)?;
        }

        out += self.payload(&tag.payload)?;
        Ok(out)
    }

    fn payload(&mut self, payload: &Payload) -> Result<usize> {
        match payload {
            Payload::End => {
                self.indent = self.indent.saturating_sub(1);
                self.emit(b"}")
            }
            Payload::Byte(v) => self.int(*v, b"b"),
            Payload::Short(v) => self.int(*v, b"s"),
            Payload::Int(v) => self.int(*v, b""),
            Payload::Long(v) => self.int(*v, b"l"),
            Payload::Float(v) => self.float(*v, b"f"),
            Payload::Double(v) => self.float(*v, b"d"),
            Payload::String(s) => self.string(s),
            Payload::ByteArray(els) => self.array(b"[B;", els, b"b"),
            Payload::IntArray(els) => self.array(b"[I;", els, b""),
            Payload::LongArray(els) => self.array(b"[L;", els, b"l"),
            Payload::List(_, elements) => {
                let mut out = self.emit(b"[")?;
                // Lists separate with a bare comma in both modes, unlike
                // arrays and compounds.
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        out += self.emit(b",")?;
                    }
                    out += self.payload(element)?;
                }
                out += self.emit(b"]")?;
                Ok(out)
            }
            Payload::Compound(children) => {
                let mut out = self.emit(b"{")?;
                self.indent += 1;

                for (i, child) in children.iter().enumerate() {
                    out += self.tag(child)?;
                    // Comma between children, but never adjacent to the End
                    // terminator.
                    let next_is_end = children.get(i + 1).map_or(true, NbtTag::is_end);
                    if !child.is_end() && !next_is_end {
                        out += self.emit(b",")?;
                    }
                }

                Ok(out)
            }
        }
    }

    fn int<I: itoa::Integer>(&mut self, value: I, suffix: &[u8]) -> Result<usize> {
        let mut buffer = itoa::Buffer::new();
        let mut out = self.emit(buffer.format(value).as_bytes())?;
        out += self.emit(suffix)?;
        Ok(out)
    }

    fn float<F: ryu::Float>(&mut self, value: F, suffix: &[u8]) -> Result<usize> {
        let mut buffer = ryu::Buffer::new();
        let mut out = self.emit(buffer.format(value).as_bytes())?;
        out += self.emit(suffix)?;
        Ok(out)
    }

    /// Double-quoted with embedded quotes escaped. Backslashes pass through
    /// unescaped.
    fn string(&mut self, value: &str) -> Result<usize> {
        let mut out = self.emit(b"\"")?;
        let bytes = value.as_bytes();
        let mut start = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            if byte != b'"' {
                continue;
            }
            if start < i {
                out += self.emit(&bytes[start..i])?;
            }
            out += self.emit(b"\\\"")?;
            start = i + 1;
        }
        if start != bytes.len() {
            out += self.emit(&bytes[start..])?;
        }
        out += self.emit(b"\"")?;
        Ok(out)
    }

    fn array<I: itoa::Integer + Copy>(
        &mut self,
        open: &[u8],
        elements: &[I],
        suffix: &[u8],
    ) -> Result<usize> {
        let mut out = self.emit(open)?;
        let separator: &[u8] = if self.pretty { b", " } else { b"," };
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                out += self.emit(separator)?;
            }
            out += self.int(*element, suffix)?;
        }
        out += self.emit(b"]")?;
        Ok(out)
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<usize> {
        self.writer.write_all(bytes)?;
        Ok(bytes.len())
    }
}

/// Render a tree compactly, returning the number of bytes written.
pub fn to_writer<W: Write>(writer: W, tag: &NbtTag) -> Result<usize> {
    Printer::new(writer, false).print(tag)
}

/// Render a tree with newlines and indentation, returning the number of
/// bytes written.
pub fn to_writer_pretty<W: Write>(writer: W, tag: &NbtTag) -> Result<usize> {
    Printer::new(writer, true).print(tag)
}

/// Render a tree compactly into a `String`.
pub fn to_string(tag: &NbtTag) -> Result<String> {
    let mut buf = Vec::new();
    to_writer(&mut buf, tag)?;
    String::from_utf8(buf).map_err(|e| Error::bespoke(format!("printed invalid utf-8: {}", e)))
}

/// Render a tree with newlines and indentation into a `String`.
pub fn to_string_pretty(tag: &NbtTag) -> Result<String> {
    let mut buf = Vec::new();
    to_writer_pretty(&mut buf, tag)?;
    String::from_utf8(buf).map_err(|e| Error::bespoke(format!("printed invalid utf-8: {}", e)))
}
