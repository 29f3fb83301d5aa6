use crate::de::from_bytes;
use crate::error::Result;
use crate::snbt::{to_string, to_string_pretty, to_writer, to_writer_pretty, Printer};
use crate::tag::{NbtTag, Payload};
use crate::Tag;

fn unnamed(payload: Payload) -> NbtTag {
    NbtTag {
        name: None,
        payload,
    }
}

fn named(name: &str, payload: Payload) -> NbtTag {
    NbtTag {
        name: Some(name.to_owned()),
        payload,
    }
}

/// A compound tag with the End terminator appended.
fn compound(name: &str, mut children: Vec<NbtTag>) -> NbtTag {
    children.push(unnamed(Payload::End));
    named(name, Payload::Compound(children))
}

#[test]
fn integer_suffixes() -> Result<()> {
    assert_eq!(to_string(&unnamed(Payload::Byte(42)))?, "42b");
    assert_eq!(to_string(&unnamed(Payload::Short(-5)))?, "-5s");
    assert_eq!(to_string(&unnamed(Payload::Int(123456)))?, "123456");
    assert_eq!(to_string(&unnamed(Payload::Long(-9000000000)))?, "-9000000000l");
    Ok(())
}

#[test]
fn float_suffixes() -> Result<()> {
    assert_eq!(to_string(&unnamed(Payload::Float(1.25)))?, "1.25f");
    assert_eq!(to_string(&unnamed(Payload::Double(0.5)))?, "0.5d");
    assert_eq!(to_string(&unnamed(Payload::Double(42.0)))?, "42.0d");
    Ok(())
}

#[test]
fn string_escapes_embedded_quotes() -> Result<()> {
    let tag = unnamed(Payload::String("a\"b".to_owned()));
    assert_eq!(to_string(&tag)?, "\"a\\\"b\"");
    Ok(())
}

#[test]
fn string_leaves_backslashes_alone() -> Result<()> {
    let tag = unnamed(Payload::String("a\\b".to_owned()));
    assert_eq!(to_string(&tag)?, "\"a\\b\"");
    Ok(())
}

#[test]
fn array_prefixes_and_suffixes() -> Result<()> {
    assert_eq!(
        to_string(&unnamed(Payload::ByteArray(vec![-1, 2, -3])))?,
        "[B;-1b,2b,-3b]"
    );
    assert_eq!(
        to_string(&unnamed(Payload::IntArray(vec![-1, 2, -3])))?,
        "[I;-1,2,-3]"
    );
    assert_eq!(
        to_string(&unnamed(Payload::LongArray(vec![-1, 2, -3])))?,
        "[L;-1l,2l,-3l]"
    );
    Ok(())
}

#[test]
fn arrays_space_elements_in_pretty_mode_only() -> Result<()> {
    let tag = unnamed(Payload::IntArray(vec![1, 2, 3]));
    assert_eq!(to_string(&tag)?, "[I;1,2,3]");
    assert_eq!(to_string_pretty(&tag)?, "[I;1, 2, 3]");
    Ok(())
}

#[test]
fn empty_array() -> Result<()> {
    assert_eq!(to_string(&unnamed(Payload::ByteArray(vec![])))?, "[B;]");
    Ok(())
}

#[test]
fn lists_use_bare_commas_in_both_modes() -> Result<()> {
    let tag = unnamed(Payload::List(
        Tag::Byte,
        vec![Payload::Byte(1), Payload::Byte(2), Payload::Byte(3)],
    ));
    assert_eq!(to_string(&tag)?, "[1b,2b,3b]");
    assert_eq!(to_string_pretty(&tag)?, "[1b,2b,3b]");
    Ok(())
}

#[test]
fn named_tag_separator_by_mode() -> Result<()> {
    let tag = named("foo", Payload::Byte(42));
    assert_eq!(to_string(&tag)?, "foo:42b");
    // Pretty mode puts every named tag on its own line, the root included.
    assert_eq!(to_string_pretty(&tag)?, "\nfoo: 42b");
    Ok(())
}

#[test]
fn empty_compound() -> Result<()> {
    let tag = compound("", vec![]);
    assert_eq!(to_string(&tag)?, "{}");
    assert_eq!(to_string_pretty(&tag)?, "{\n}");
    Ok(())
}

#[test]
fn end_to_end_from_wire_bytes() -> Result<()> {
    // Compound "" containing Byte "foo" = 42.
    let bytes = [
        0x0A, 0x00, 0x00, 0x01, 0x00, 0x03, 0x66, 0x6F, 0x6F, 0x2A, 0x00,
    ];

    let tag = from_bytes(&bytes)?.expect("stream held no tag");
    assert_eq!(
        tag,
        compound("", vec![named("foo", Payload::Byte(42))])
    );

    assert_eq!(to_string_pretty(&tag)?, "{\n    foo: 42b\n}");
    assert_eq!(to_string(&tag)?, "{foo:42b}");
    Ok(())
}

#[test]
fn nested_compound_pretty_layout() -> Result<()> {
    let tag = compound(
        "",
        vec![
            named("a", Payload::Byte(1)),
            compound("b", vec![named("c", Payload::String("x".to_owned()))]),
            named("d", Payload::IntArray(vec![1, 2])),
        ],
    );

    assert_eq!(
        to_string_pretty(&tag)?,
        "{\n    a: 1b,\n    b: {\n        c: \"x\"\n    },\n    d: [I;1, 2]\n}"
    );
    assert_eq!(to_string(&tag)?, "{a:1b,b:{c:\"x\"},d:[I;1,2]}");
    Ok(())
}

#[test]
fn list_of_compounds_pretty() -> Result<()> {
    let element = Payload::Compound(vec![
        named("n", Payload::Byte(7)),
        unnamed(Payload::End),
    ]);
    let tag = compound("", vec![named("l", Payload::List(Tag::Compound, vec![element]))]);

    assert_eq!(
        to_string_pretty(&tag)?,
        "{\n    l: [{\n        n: 7b\n    }]\n}"
    );
    assert_eq!(to_string(&tag)?, "{l:[{n:7b}]}");
    Ok(())
}

#[test]
fn byte_count_matches_output_length() -> Result<()> {
    let tag = compound(
        "",
        vec![
            named("a", Payload::Byte(1)),
            named("s", Payload::String("a\"b".to_owned())),
            named("l", Payload::List(Tag::Int, vec![Payload::Int(1), Payload::Int(2)])),
        ],
    );

    let mut buf = Vec::new();
    let written = to_writer(&mut buf, &tag)?;
    assert_eq!(written, buf.len());

    let mut buf = Vec::new();
    let written = to_writer_pretty(&mut buf, &tag)?;
    assert_eq!(written, buf.len());
    Ok(())
}

#[test]
fn modes_differ_only_in_whitespace() -> Result<()> {
    let tag = compound(
        "",
        vec![
            named("a", Payload::Byte(1)),
            named("s", Payload::String("xy".to_owned())),
            named("ints", Payload::IntArray(vec![1, 2, 3])),
            compound("inner", vec![named("d", Payload::Double(0.5))]),
        ],
    );

    let compact = to_string(&tag)?;
    let pretty = to_string_pretty(&tag)?;
    let stripped: String = pretty.chars().filter(|c| *c != ' ' && *c != '\n').collect();
    // Compact keeps no spaces at all, so stripping whitespace from the
    // pretty output must recover it exactly.
    assert_eq!(stripped, compact.replace(' ', ""));
    assert_eq!(compact.replace(' ', ""), compact);
    Ok(())
}

#[test]
fn printer_state_resets_between_prints() -> Result<()> {
    let tag = compound("", vec![named("a", Payload::Byte(1))]);

    let mut printer = Printer::new(Vec::new(), true);
    let first = printer.print(&tag)?;
    let second = printer.print(&tag)?;
    assert_eq!(first, second);

    let buf = printer.into_inner();
    let text = String::from_utf8(buf).unwrap();
    let expected = "{\n    a: 1b\n}";
    assert_eq!(text, format!("{}{}", expected, expected));
    Ok(())
}
