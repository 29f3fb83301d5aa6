//! nbtview reads binary NBT data, as used by *Minecraft: Java Edition* for
//! world data and player inventories, into an owned tree and renders that
//! tree as stringified NBT (SNBT) text.
//!
//! * For decoding a byte stream into a tree, see [`de`].
//! * For the tree itself, see [`NbtTag`] and [`Payload`].
//! * For rendering a tree as text, see [`snbt`].
//!
//! The input must already be uncompressed. NBT files are usually gzip
//! wrapped; decompress before handing the stream over.
//!
//! # Quick example
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! fn main() -> nbtview::error::Result<()> {
//!     let args: Vec<_> = std::env::args().skip(1).collect();
//!     let file = File::open(&args[0])?;
//!
//!     if let Some(root) = nbtview::de::from_reader(BufReader::new(file))? {
//!         println!("{}", nbtview::snbt::to_string_pretty(&root)?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Dropping the root tag frees the whole tree; there is no separate release
//! step.

pub mod de;
pub mod error;
pub mod snbt;

mod tag;

pub use tag::{NbtTag, Payload};

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// An NBT tag kind. This carries neither the value nor the name of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Ends a Compound's child sequence.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// An array of Byte (i8).
    ByteArray = 7,
    /// A CESU-8 encoded string.
    String = 8,
    /// A sequence of unnamed payloads sharing one declared element kind.
    List = 9,
    /// A struct-like sequence of named child tags.
    Compound = 10,
    /// An array of Int (i32).
    IntArray = 11,
    /// An array of Long (i64).
    LongArray = 12,
}

// Written out by hand rather than derived; the tag values will essentially
// never change.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}
