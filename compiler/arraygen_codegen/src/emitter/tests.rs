use super::*;
use pretty_assertions::assert_eq;

#[test]
fn string_emitter_basic() {
    let mut emitter = StringEmitter::new();
    emitter.emit("hello");
    emitter.emit_newline();
    emitter.emit("world");
    assert_eq!(emitter.as_str(), "hello\nworld");
    assert_eq!(emitter.output(), "hello\nworld");
}

#[test]
fn string_emitter_trailing_newline() {
    let mut emitter = StringEmitter::new();
    emitter.emit("content");
    emitter.ensure_trailing_newline();
    assert_eq!(emitter.output(), "content\n");
}

#[test]
fn string_emitter_trailing_newline_already_present() {
    let mut emitter = StringEmitter::new();
    emitter.emit("content");
    emitter.emit_newline();
    emitter.ensure_trailing_newline();
    assert_eq!(emitter.output(), "content\n");
}

#[test]
fn string_emitter_with_capacity() {
    let emitter = StringEmitter::with_capacity(1024);
    assert!(emitter.is_empty());
    assert_eq!(emitter.len(), 0);
}

#[test]
fn collapse_whitespace_joins_lines() {
    let snippet = "\ntemplate<typename T, int N> Array<T, N>\n  operator+(Array<T,N> a){\n\treturn r;\n}\n";
    assert_eq!(
        collapse_whitespace(snippet),
        "template<typename T, int N> Array<T, N> operator+(Array<T,N> a){ return r; }"
    );
}

#[test]
fn collapse_whitespace_edge_cases() {
    assert_eq!(collapse_whitespace(""), "");
    assert_eq!(collapse_whitespace(" \n\t "), "");
    assert_eq!(collapse_whitespace("a"), "a");
    assert_eq!(collapse_whitespace("  a  b  "), "a b");
}

#[test]
fn collapse_blank_lines_keeps_single_newlines() {
    assert_eq!(collapse_blank_lines("a\nb\n"), "a\nb\n");
    assert_eq!(collapse_blank_lines("a\n\n\nb\n\n"), "a\nb\n");
    assert_eq!(collapse_blank_lines("\n\na"), "\na");
    assert_eq!(collapse_blank_lines(""), "");
}

#[test]
fn string_emitter_collapse_blank_lines_in_place() {
    let mut emitter = StringEmitter::new();
    emitter.emit("a");
    emitter.emit_newline();
    emitter.emit_newline();
    emitter.emit("b");
    emitter.collapse_blank_lines();
    emitter.ensure_trailing_newline();
    assert_eq!(emitter.output(), "a\nb\n");
}
