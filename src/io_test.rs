// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

use super::*;

#[test]
fn mock_console_records_written_lines() {
    let mut console = MockConsole::default();
    console.write_line("42").unwrap();
    console.write_line("7").unwrap();
    assert_eq!(console.output, "42\n7\n");
}

#[test]
fn mock_console_peek_does_not_consume() {
    let mut console = MockConsole::with_input("3\n4\n");
    assert_eq!(console.peek_byte().unwrap(), Some(b'3'));
    assert_eq!(console.peek_byte().unwrap(), Some(b'3'));
    console.consume_byte().unwrap();
    assert_eq!(console.peek_byte().unwrap(), Some(b'\n'));
}

#[test]
fn mock_console_reaches_eof() {
    let mut console = MockConsole::with_input("1");
    assert_eq!(console.peek_byte().unwrap(), Some(b'1'));
    console.consume_byte().unwrap();
    assert_eq!(console.peek_byte().unwrap(), None);
}
