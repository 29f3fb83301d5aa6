//! Decodes binary NBT from any [`Read`] into an owned [`NbtTag`] tree.
//!
//! One call decodes one complete tag, nested content and all, consuming
//! exactly the bytes that belong to it. The reader is left positioned on the
//! byte after the tag, so consecutive top-level tags can be read by calling
//! [`from_reader`] again.
//!
//! The decoder does not check declared string/array/list lengths against the
//! bytes actually available; a truncated stream fails at the point a read
//! can no longer be satisfied.

use std::convert::TryFrom;
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use log::debug;

use crate::error::{Error, Result};
use crate::tag::{NbtTag, Payload};
use crate::Tag;

/// Read one tag from the reader.
///
/// Returns `Ok(None)` only when the stream ends cleanly before the leading
/// type byte; the stream running out anywhere inside a tag is an
/// invalid-input error, not an absence.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Option<NbtTag>> {
    read_tag(&mut reader)
}

/// Read one tag from a byte slice. See [`from_reader`].
pub fn from_bytes(bytes: &[u8]) -> Result<Option<NbtTag>> {
    from_reader(bytes)
}

fn read_tag<R: Read>(reader: &mut R) -> Result<Option<NbtTag>> {
    // EOF on the type byte is the natural end of the stream.
    let type_byte = match reader.read_u8() {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let tag = tag_from_byte(type_byte)?;

    // End tags are the only kind without a name field.
    if tag == Tag::End {
        return Ok(Some(NbtTag {
            name: None,
            payload: Payload::End,
        }));
    }

    let name = read_string(reader)?;
    let payload = read_payload(reader, tag)?;

    Ok(Some(NbtTag {
        name: Some(name),
        payload,
    }))
}

fn read_payload<R: Read>(reader: &mut R, tag: Tag) -> Result<Payload> {
    Ok(match tag {
        Tag::End => Payload::End,
        Tag::Byte => Payload::Byte(reader.read_i8()?),
        Tag::Short => Payload::Short(reader.read_i16::<BigEndian>()?),
        Tag::Int => Payload::Int(reader.read_i32::<BigEndian>()?),
        Tag::Long => Payload::Long(reader.read_i64::<BigEndian>()?),
        Tag::Float => Payload::Float(reader.read_f32::<BigEndian>()?),
        Tag::Double => Payload::Double(reader.read_f64::<BigEndian>()?),
        Tag::String => Payload::String(read_string(reader)?),
        Tag::ByteArray => {
            let size = read_size(reader)?;
            let mut buf = vec![0u8; size];
            reader.read_exact(&mut buf)?;
            Payload::ByteArray(buf.into_iter().map(|b| b as i8).collect())
        }
        Tag::IntArray => {
            let size = read_size(reader)?;
            let mut buf = vec![0i32; size];
            for el in buf.iter_mut() {
                *el = reader.read_i32::<BigEndian>()?;
            }
            Payload::IntArray(buf)
        }
        Tag::LongArray => {
            let size = read_size(reader)?;
            let mut buf = vec![0i64; size];
            for el in buf.iter_mut() {
                *el = reader.read_i64::<BigEndian>()?;
            }
            Payload::LongArray(buf)
        }
        Tag::List => {
            let element_tag = tag_from_byte(reader.read_u8()?)?;
            let size = read_size(reader)?;
            if element_tag == Tag::End && size > 0 {
                // Seen in the wild for empty lists only, but End payloads
                // occupy zero bytes so a nonzero count still decodes.
                debug!("list of End with {} declared elements", size);
            }
            let mut elements = Vec::with_capacity(size);
            for _ in 0..size {
                elements.push(read_payload(reader, element_tag)?);
            }
            Payload::List(element_tag, elements)
        }
        Tag::Compound => {
            let mut children = Vec::new();
            loop {
                let child = read_tag(reader)?.ok_or_else(Error::unterminated_compound)?;
                let end = child.is_end();
                children.push(child);
                if end {
                    break;
                }
            }
            Payload::Compound(children)
        }
    })
}

/// Read a 16-bit length prefix followed by that many bytes of CESU-8 data.
/// Both names and String payloads use this layout.
fn read_string<R: Read>(reader: &mut R) -> Result<String> {
    let len = reader.read_u16::<BigEndian>()? as usize;

    let mut buf = vec![0; len];
    reader.read_exact(&mut buf[..])?;

    Ok(cesu8::from_java_cesu8(&buf[..])
        .map_err(|_| Error::nonunicode(&buf[..]))?
        .into_owned())
}

/// Read an array/list element count. Declared counts are signed on the wire;
/// a negative one is malformed input.
fn read_size<R: Read>(reader: &mut R) -> Result<usize> {
    let size = reader.read_i32::<BigEndian>()?;
    if size < 0 {
        return Err(Error::negative_size(size));
    }
    Ok(size as usize)
}

fn tag_from_byte(byte: u8) -> Result<Tag> {
    Tag::try_from(byte).map_err(|_| Error::invalid_tag(byte))
}
