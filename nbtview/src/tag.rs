use crate::Tag;

/// A complete NBT tag: an optional name and a typed payload. Owns its data;
/// compounds and lists own their children exclusively, so dropping the root
/// of a tree frees every node in it.
///
/// The name is `None` for End tags and for list elements, which are unnamed
/// on the wire. Every other decoded tag has a name, though it may be the
/// empty string (the root compound of most files is named `""`).
#[derive(Debug, Clone, PartialEq)]
pub struct NbtTag {
    pub name: Option<String>,
    pub payload: Payload,
}

impl NbtTag {
    /// The tag kind, derived from the payload variant.
    pub fn tag(&self) -> Tag {
        self.payload.tag()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_end(&self) -> bool {
        matches!(self.payload, Payload::End)
    }
}

/// The typed value carried by a tag, one variant per tag kind.
///
/// A `Compound` holds its children in wire order, terminated by an End tag
/// stored as the last element of the vector. Trees built by the decoder
/// always satisfy this; the printer relies on the End terminator to close
/// the compound's scope.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Tag, Vec<Payload>),
    Compound(Vec<NbtTag>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Payload {
    /// The tag kind this payload belongs to.
    pub fn tag(&self) -> Tag {
        match self {
            Payload::End => Tag::End,
            Payload::Byte(_) => Tag::Byte,
            Payload::Short(_) => Tag::Short,
            Payload::Int(_) => Tag::Int,
            Payload::Long(_) => Tag::Long,
            Payload::Float(_) => Tag::Float,
            Payload::Double(_) => Tag::Double,
            Payload::ByteArray(_) => Tag::ByteArray,
            Payload::String(_) => Tag::String,
            Payload::List(_, _) => Tag::List,
            Payload::Compound(_) => Tag::Compound,
            Payload::IntArray(_) => Tag::IntArray,
            Payload::LongArray(_) => Tag::LongArray,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Payload::Byte(v) => Some(v as i64),
            Payload::Short(v) => Some(v as i64),
            Payload::Int(v) => Some(v as i64),
            Payload::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Payload::Float(v) => Some(v as f64),
            Payload::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Payload::String(v) => Some(v),
            _ => None,
        }
    }

    /// Look up a compound child by name. Returns `None` for non-compounds,
    /// unknown names, and the End terminator (which has no name).
    pub fn get(&self, name: &str) -> Option<&NbtTag> {
        match self {
            Payload::Compound(children) => children
                .iter()
                .find(|c| c.name.as_deref() == Some(name)),
            _ => None,
        }
    }
}
