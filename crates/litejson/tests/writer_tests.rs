use litejson::{parse, Number, Value};

fn doc(input: &str) -> Value {
    parse(input, false).unwrap()
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn scalar_spellings() {
    assert_eq!(Value::Null.dump(0, true), "null");
    assert_eq!(Value::from(true).dump(0, true), "true");
    assert_eq!(Value::from(false).dump(0, true), "false");
    assert_eq!(Value::from(42u64).dump(0, true), "42");
    assert_eq!(Value::from(-7i64).dump(0, true), "-7");
}

#[test]
fn float_formatting_is_shortest_roundtrip() {
    assert_eq!(Value::from(3.14).dump(0, true), "3.14");
    assert_eq!(Value::from(0.25).dump(0, true), "0.25");
    assert_eq!(Value::from(1e-7).dump(0, true), "0.0000001");
    // Whole floats lose the decimal point; numeric equality still holds.
    assert_eq!(Value::from(2.0).dump(0, true), "2");
}

#[test]
fn negative_zero_keeps_its_sign() {
    assert_eq!(Value::from(-0.0).dump(0, true), "-0.0");
    assert_eq!(Value::from(0.0).dump(0, true), "0");
}

#[test]
fn non_finite_numbers_render_as_null() {
    assert_eq!(Value::from(f64::NAN).dump(0, true), "null");
    assert_eq!(Value::from(f64::INFINITY).dump(0, true), "null");
    assert_eq!(Value::from(f64::NEG_INFINITY).dump(0, true), "null");
}

// ============================================================================
// Compact layout
// ============================================================================

#[test]
fn compact_has_no_whitespace() {
    let v = doc(r#"{ "a" : 1 , "b" : [ true , null ] }"#);
    assert_eq!(v.dump(0, true), r#"{"a":1,"b":[true,null]}"#);
}

#[test]
fn compact_empty_containers() {
    assert_eq!(Value::array().dump(0, true), "[]");
    assert_eq!(Value::object().dump(0, true), "{}");
}

// ============================================================================
// Pretty layout
// ============================================================================

#[test]
fn pretty_object_two_space_indent() {
    let v = doc(r#"{"x":1}"#);
    assert_eq!(v.dump(2, true), "{\n  \"x\": 1\n}");
}

#[test]
fn pretty_array_four_space_indent() {
    let v = doc("[1,2]");
    assert_eq!(v.dump(4, true), "[\n    1,\n    2\n]");
}

#[test]
fn pretty_nested_indents_per_depth() {
    let v = doc(r#"{"a":{"b":[1]}}"#);
    assert_eq!(
        v.dump(2, true),
        "{\n  \"a\": {\n    \"b\": [\n      1\n    ]\n  }\n}"
    );
}

#[test]
fn pretty_empty_containers_stay_inline() {
    let v = doc(r#"{"a":[],"b":{}}"#);
    assert_eq!(v.dump(2, true), "{\n  \"a\": [],\n  \"b\": {}\n}");
}

#[test]
fn pretty_scalar_is_bare() {
    assert_eq!(Value::from(true).dump(2, true), "true");
}

// ============================================================================
// String escaping
// ============================================================================

#[test]
fn short_escapes_always_apply() {
    let v = Value::from("q\" b\\ \u{8} \u{c} \n \r \t");
    assert_eq!(v.dump(0, true), r#""q\" b\\ \b \f \n \r \t""#);
}

#[test]
fn other_control_chars_use_unicode_escapes() {
    assert_eq!(Value::from("\u{1}").dump(0, true), r#""\u0001""#);
    assert_eq!(Value::from("\u{1f}").dump(0, false), r#""\u001f""#);
}

#[test]
fn raw_utf8_mode_passes_multibyte_through() {
    assert_eq!(Value::from("héllo 㑧").dump(0, true), "\"héllo 㑧\"");
}

#[test]
fn escaped_mode_emits_bmp_escapes() {
    assert_eq!(Value::from("é").dump(0, false), r#""\u00e9""#);
    assert_eq!(Value::from("㑧").dump(0, false), r#""\u3467""#);
    assert_eq!(Value::from("ascii").dump(0, false), r#""ascii""#);
}

#[test]
fn escaped_mode_splits_astral_into_surrogate_pair() {
    assert_eq!(Value::from("😀").dump(0, false), r#""\ud83d\ude00""#);
}

#[test]
fn escaped_mode_mixed_content() {
    assert_eq!(
        Value::from("a é 😀\n").dump(0, false),
        r#""a \u00e9 \ud83d\ude00\n""#
    );
}

// ============================================================================
// Keys and ordering
// ============================================================================

#[test]
fn object_keys_are_escaped_like_values() {
    let mut v = Value::Null;
    *v.entry("tab\there").unwrap() = Value::from(1);
    assert_eq!(v.dump(0, true), r#"{"tab\there":1}"#);
}

#[test]
fn dump_preserves_insertion_order() {
    let v = doc(r#"{"z":1,"a":2,"m":3}"#);
    assert_eq!(v.dump(0, true), r#"{"z":1,"a":2,"m":3}"#);
}

#[test]
fn number_subkinds_render_distinctly() {
    let v = Value::from(vec![
        Value::Number(Number::Int(-1)),
        Value::Number(Number::UInt(u64::MAX)),
        Value::Number(Number::Float(0.5)),
    ]);
    assert_eq!(v.dump(0, true), "[-1,18446744073709551615,0.5]");
}
