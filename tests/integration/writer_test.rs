//! Integration tests for SequenceWriter output

use termseq::sequence::catalog;
use termseq::{mode, sgr, Color, SequenceWriter, Style};

use crate::helpers::{visible, FailingOutput};

fn flushed(mut writer: SequenceWriter<Vec<u8>>) -> String {
    writer.flush().expect("flush to Vec never fails");
    String::from_utf8(writer.into_inner()).expect("sequences are ASCII")
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn cursor_position_then_flush() {
    let output = flushed(SequenceWriter::new(Vec::new()).cursor_position(3, 10));
    assert_eq!(output, "\x1b[3;10H");
}

#[test]
fn sgr_then_flush() {
    let output = flushed(SequenceWriter::new(Vec::new()).sgr(&[31, 1]));
    assert_eq!(output, "\x1b[31;1m");
}

#[test]
fn snapshot_status_line_frame() {
    let writer = SequenceWriter::new(Vec::new())
        .save_cursor()
        .hide_cursor()
        .cursor_position(24, 1)
        .erase_line(None)
        .style(&Style {
            fg: Color::BrightWhite,
            bg: Color::Blue,
            bold: true,
            ..Default::default()
        })
        .text(" READY ")
        .reset_attributes()
        .restore_cursor()
        .show_cursor();

    insta::assert_snapshot!(
        visible(writer.buffer()),
        @"ESC7ESC[?25lESC[24;1HESC[2KESC[1;97;44m READY ESC[0mESC8ESC[?25h"
    );
}

// ============================================================================
// Property Tests
// ============================================================================

#[test]
fn movement_counts_render_as_decimal() {
    for n in [1u16, 2, 9, 10, 99, 100, 1000, u16::MAX] {
        let cases = [
            (SequenceWriter::new(Vec::new()).cursor_up(n), 'A'),
            (SequenceWriter::new(Vec::new()).cursor_down(n), 'B'),
            (SequenceWriter::new(Vec::new()).cursor_forward(n), 'C'),
            (SequenceWriter::new(Vec::new()).cursor_back(n), 'D'),
        ];
        for (writer, letter) in cases {
            assert_eq!(writer.buffer(), format!("\x1b[{}{}", n, letter));
        }
    }
}

#[test]
fn out_of_range_erase_modes_become_two() {
    for erase_mode in 3..=u8::MAX {
        let writer = SequenceWriter::new(Vec::new())
            .erase_display(erase_mode)
            .erase_line(erase_mode);
        assert_eq!(
            writer.buffer(),
            "\x1b[2J\x1b[2K",
            "Failed for mode {}",
            erase_mode
        );

        let mut named = SequenceWriter::new(Vec::new());
        named
            .append_named("erase_display", &[u16::from(erase_mode)])
            .unwrap()
            .append_named("erase_line", &[u16::from(erase_mode)])
            .unwrap();
        assert_eq!(named.buffer(), writer.buffer(), "Failed for mode {}", erase_mode);
    }
}

#[test]
fn sgr_joins_codes_in_order() {
    let codes = [sgr::BOLD, sgr::UNDERLINE, 38, 5, 208, sgr::RESET];
    let writer = SequenceWriter::new(Vec::new()).sgr(&codes);
    assert_eq!(writer.buffer(), "\x1b[1;4;38;5;208;0m");
}

#[test]
fn appends_do_not_touch_output() {
    let writer = SequenceWriter::new(Vec::new())
        .cursor_up(None)
        .erase_display(None)
        .scroll_up(3)
        .set_private_mode(mode::BRACKETED_PASTE)
        .select_charset('0')
        .text("literal");
    assert!(writer.get_ref().is_empty());
}

#[test]
fn flush_twice_writes_nothing_the_second_time() {
    let mut writer = SequenceWriter::new(Vec::new()).cursor_next_line(2);
    writer.flush().unwrap();
    writer.flush().unwrap();
    assert!(writer.is_empty());
    assert_eq!(writer.into_inner(), b"\x1b[2E");
}

#[test]
fn flush_with_trailing_message_and_reset_clears_buffer() {
    let mut writer = SequenceWriter::new(Vec::new()).fg(Color::Green).text("ok");
    writer.flush_with(" done", true).unwrap();
    assert!(writer.is_empty());
    assert_eq!(
        visible(std::str::from_utf8(writer.get_ref()).unwrap()),
        "ESC[32mok doneESC[0m"
    );
}

#[test]
fn failed_flush_still_clears_buffer() {
    let mut writer = SequenceWriter::new(FailingOutput).cursor_position(1, 1);
    let err = writer.flush_with("message", true).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    assert!(writer.is_empty());
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[test]
fn every_catalog_entry_is_reachable_by_name() {
    for def in catalog::CATALOG {
        let mut writer = SequenceWriter::new(Vec::new());
        let params: Vec<u16> = match def.arity {
            termseq::sequence::Arity::Exactly(n) => vec![1; n],
            termseq::sequence::Arity::Variadic => vec![1, 2],
        };
        writer
            .append_named(def.name, &params)
            .unwrap_or_else(|e| panic!("{}: {}", def.name, e));
        assert_eq!(writer.buffer(), def.format(&params).unwrap());
    }
}

#[test]
fn named_and_typed_appends_agree() {
    let typed = SequenceWriter::new(Vec::new())
        .cursor_previous_line(4)
        .erase_line(0)
        .delete_lines(2);

    let mut named = SequenceWriter::new(Vec::new());
    named
        .append_named("cursor_previous_line", &[4])
        .and_then(|w| w.append_named("erase_line", &[0]))
        .and_then(|w| w.append_named("delete_lines", &[2]))
        .unwrap();

    assert_eq!(typed.buffer(), named.buffer());
}
