#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

use core::fmt::Write;

fn render(inputs: &[&str]) -> String {
    let mut out = String::new();
    for input in inputs {
        match jsontree::parse(input) {
            Ok(value) => writeln!(out, "{value:?}").unwrap(),
            Err(err) => writeln!(out, "error: {err}").unwrap(),
        }
    }
    out
}

#[test]
fn snapshot_values() {
    insta::assert_snapshot!(render(&[r#"{"a":1,"b":2,"a":3}"#]), @r#"Object({"a": Integer(3), "b": Integer(2)})"#);
    insta::assert_snapshot!(render(&[r#"[1,[2,3],{"k":null}]"#]), @r#"Array([Integer(1), Array([Integer(2), Integer(3)]), Object({"k": Null})])"#);
    insta::assert_snapshot!(render(&["-5", "-5.0", "3e2", "true", r#""a\"b""#]), @r#"
    Integer(-5)
    Real(-5.0)
    Real(300.0)
    True
    String("a\"b")
    "#);
}

#[test]
fn snapshot_errors() {
    insta::assert_snapshot!(render(&[
        "",
        "[1, 2,]",
        "{} garbage",
        r#"{"a" 1}"#,
        r#""\uD800x""#,
        r#""\q""#,
        "18446744073709551616",
    ]), @r#"
    error: unexpected end of input at character 1
    error: unexpected character ']' at character 7
    error: trailing content starting with 'g' at character 4
    error: unexpected character '1' at character 6
    error: invalid escape: unpaired surrogate \uD800 at character 8
    error: invalid escape: unknown escape '\q' at character 3
    error: number out of range at character 21
    "#);
}
