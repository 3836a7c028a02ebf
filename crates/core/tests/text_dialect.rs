mod common;

use edid_core::text_dialect::parse_text_edid;
use edid_core::{collect_edids, Dialect, ParseError};

use common::{sample_edid, text_dump};

#[test]
fn decodes_rows_without_annotation_column() {
    let input = "00 FF FF FF\r\n01 02 03 04\r\n\r\nEDID Version : 1.3\r\nMonitor Name : FooMon\r\n";
    let record = parse_text_edid(input.as_bytes()).expect("text EDID");
    assert_eq!(record.name, "FooMon");
    assert_eq!(record.bytes, vec![0x00, 0xff, 0xff, 0xff, 0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn decodes_full_table_with_dashes_and_annotations() {
    let bytes = sample_edid(42);
    let input = text_dump(&bytes, "AppleStudio");
    let record = parse_text_edid(input.as_bytes()).expect("text EDID");
    assert_eq!(record.size(), 128);
    assert_eq!(record.bytes, bytes);
    assert_eq!(record.name, "AppleStudio");
}

#[test]
fn annotation_text_with_hex_letters_is_ignored() {
    let input = "00 FF FF FF FF FF FF 00-06 10 F4 01 01 01 01 01    ..ABCDEF..\r\n\
                 27 08 01 01 28 1F 17 96-E8 44 E4 A1 57 4A 97 23    '...(....D..WJ.#\r\n\
                 \r\n\
                 EDID Version                : 1.1\r\n\
                 Monitor Name                : Studio Display\r\n";
    let record = parse_text_edid(input.as_bytes()).expect("text EDID");
    assert_eq!(record.size(), 32);
    assert_eq!(&record.bytes[..4], &[0x00, 0xff, 0xff, 0xff]);
    assert_eq!(&record.bytes[28..], &[0x57, 0x4a, 0x97, 0x23]);
    assert_eq!(record.name, "Studio Display");
}

#[test]
fn collector_returns_single_text_record() {
    let input = text_dump(&sample_edid(0), "Mon");
    let collection = collect_edids(input.as_bytes());
    assert_eq!(collection.dialect, Dialect::TextFormat);
    assert_eq!(collection.records.len(), 1);
    assert!(collection.abandoned.is_empty());
}

#[test]
fn stray_character_in_table_is_malformed() {
    let input = "00 FF ZZ FF\r\n\r\nEDID Version : 1.3\r\nMonitor Name : Bad\r\n";
    assert!(matches!(
        parse_text_edid(input.as_bytes()),
        Err(ParseError::MalformedHexPair { .. })
    ));
}

#[test]
fn half_byte_is_malformed() {
    let input = "00 F\r\n\r\nEDID Version : 1.3\r\nMonitor Name : Bad\r\n";
    assert!(matches!(
        parse_text_edid(input.as_bytes()),
        Err(ParseError::MalformedHexPair { .. })
    ));
}

#[test]
fn missing_monitor_name_yields_no_record() {
    let input = "00 FF FF FF\r\n\r\nEDID Version : 1.3\r\n";
    let collection = collect_edids(input.as_bytes());
    assert_eq!(collection.dialect, Dialect::TextFormat);
    assert!(collection.records.is_empty());
    assert_eq!(collection.abandoned.len(), 1);
    assert!(matches!(collection.abandoned[0].error, ParseError::MalformedFooter { .. }));
}

#[test]
fn empty_monitor_name_is_malformed() {
    let input = "00 FF\r\n\r\nEDID Version : 1.3\r\nMonitor Name : \r\n";
    assert!(matches!(
        parse_text_edid(input.as_bytes()),
        Err(ParseError::MalformedFooter { .. })
    ));
}

#[test]
fn table_without_blank_line_runs_out_of_input() {
    let input = "00 FF FF FF    ....\r\n";
    assert_eq!(parse_text_edid(input.as_bytes()), Err(ParseError::EndOfInput));
}
