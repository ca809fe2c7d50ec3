use litejson::{JsonError, Number, Value, ValueKind};

// ============================================================================
// Construction and tags
// ============================================================================

#[test]
fn default_is_null() {
    assert_eq!(Value::default(), Value::Null);
    assert_eq!(Value::default().kind(), ValueKind::Null);
}

#[test]
fn from_impls() {
    assert_eq!(Value::from(true).kind(), ValueKind::Bool);
    assert_eq!(Value::from(-3i64), Value::Number(Number::Int(-3)));
    assert_eq!(Value::from(3u64), Value::Number(Number::UInt(3)));
    assert_eq!(Value::from(1.5), Value::Number(Number::Float(1.5)));
    assert_eq!(Value::from("hi"), Value::String("hi".to_owned()));
    assert_eq!(Value::from(vec![Value::Null]).kind(), ValueKind::Array);
}

#[test]
fn empty_containers() {
    assert_eq!(Value::array().len(), 0);
    assert_eq!(Value::object().len(), 0);
    assert_eq!(Value::array().kind(), ValueKind::Array);
    assert_eq!(Value::object().kind(), ValueKind::Object);
}

// ============================================================================
// Scalar accessors
// ============================================================================

#[test]
fn accessors_match_tag() {
    let v = Value::from(true);
    assert_eq!(v.as_bool(), Some(true));
    assert_eq!(v.as_i64(), None);
    assert_eq!(v.as_str(), None);

    let n = Value::from(42i64);
    assert_eq!(n.as_i64(), Some(42));
    assert_eq!(n.as_u64(), Some(42));
    assert_eq!(n.as_f64(), Some(42.0));
    assert_eq!(n.as_bool(), None);
}

#[test]
fn number_conversions_respect_range() {
    assert_eq!(Value::from(-1i64).as_u64(), None);
    assert_eq!(Value::from(u64::MAX).as_i64(), None);
    assert_eq!(Value::from(1.5).as_i64(), None);
    assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
}

// ============================================================================
// Numeric equality across sub-kinds
// ============================================================================

#[test]
fn number_equality_is_numeric() {
    assert_eq!(Number::Int(1), Number::UInt(1));
    assert_eq!(Number::Int(2), Number::Float(2.0));
    assert_eq!(Number::UInt(3), Number::Float(3.0));
    assert_ne!(Number::Int(-1), Number::UInt(u64::MAX));
    assert_ne!(Number::Int(1), Number::Int(2));
}

#[test]
fn nan_is_never_equal() {
    assert_ne!(Number::Float(f64::NAN), Number::Float(f64::NAN));
}

// ============================================================================
// Auto-vivification
// ============================================================================

#[test]
fn entry_vivifies_null_into_object() {
    let mut v = Value::Null;
    *v.entry("a").unwrap() = Value::from(1);
    assert_eq!(v.kind(), ValueKind::Object);
    assert_eq!(v["a"].as_i64(), Some(1));
}

#[test]
fn entry_inserts_null_for_absent_key() {
    let mut v = Value::object();
    assert!(v.entry("missing").unwrap().is_null());
    assert!(v.contains_key("missing"));
}

#[test]
fn entry_on_wrong_tag_is_type_mismatch() {
    let mut v = Value::from(1);
    assert_eq!(
        v.entry("a"),
        Err(JsonError::TypeMismatch {
            expected: ValueKind::Object,
            found: ValueKind::Number,
        })
    );
}

#[test]
fn element_vivifies_null_but_never_extends() {
    let mut v = Value::Null;
    assert_eq!(
        v.element(0),
        Err(JsonError::IndexOutOfBounds { index: 0, len: 0 })
    );
    // The vivification itself still happened.
    assert_eq!(v.kind(), ValueKind::Array);
}

#[test]
fn element_in_range_allows_mutation() {
    let mut v = Value::Null;
    v.push(Value::from(1)).unwrap();
    *v.element(0).unwrap() = Value::from("replaced");
    assert_eq!(v[0].as_str(), Some("replaced"));
    assert_eq!(
        v.element(1),
        Err(JsonError::IndexOutOfBounds { index: 1, len: 1 })
    );
}

#[test]
fn push_vivifies_and_appends() {
    let mut v = Value::Null;
    v.push(Value::from(1)).unwrap();
    v.push(Value::from(2)).unwrap();
    assert_eq!(v.len(), 2);
    assert_eq!(
        Value::from("s").push(Value::Null),
        Err(JsonError::TypeMismatch {
            expected: ValueKind::Array,
            found: ValueKind::String,
        })
    );
}

// ============================================================================
// Removal and queries
// ============================================================================

#[test]
fn remove_key_reports_whether_it_removed() {
    let mut v = Value::Null;
    *v.entry("a").unwrap() = Value::from(1);
    assert!(v.remove_key("a"));
    assert!(!v.remove_key("a"));
    assert!(!Value::from(1).remove_key("a"));
}

#[test]
fn remove_index_checks_bounds() {
    let mut v = Value::Null;
    v.push(Value::from(1)).unwrap();
    assert!(!v.remove_index(1));
    assert!(v.remove_index(0));
    assert!(v.is_empty());
    assert!(!Value::Null.remove_index(0));
}

#[test]
fn len_and_is_empty_semantics() {
    assert_eq!(Value::Null.len(), 0);
    assert!(Value::Null.is_empty());
    assert_eq!(Value::from(true).len(), 1);
    assert!(!Value::from(true).is_empty());
    // String length is in bytes.
    assert_eq!(Value::from("é").len(), 2);
    assert!(Value::from("").is_empty());
    assert!(Value::array().is_empty());
    assert!(Value::object().is_empty());
}

#[test]
fn clear_resets_to_null() {
    let mut v = Value::Null;
    v.push(Value::from(1)).unwrap();
    v.clear();
    assert_eq!(v, Value::Null);
}

#[test]
fn take_leaves_null_behind() {
    let mut v = Value::from("payload");
    let taken = v.take();
    assert_eq!(taken.as_str(), Some("payload"));
    assert_eq!(v, Value::Null);
}

#[test]
fn clone_is_deep() {
    let mut original = Value::Null;
    original.entry("a").unwrap().push(Value::from(1)).unwrap();
    let mut copy = original.clone();
    copy.entry("a").unwrap().push(Value::from(2)).unwrap();
    assert_eq!(original["a"].len(), 1);
    assert_eq!(copy["a"].len(), 2);
}

// ============================================================================
// Indexing sugar
// ============================================================================

#[test]
fn index_misses_yield_null() {
    let mut v = Value::Null;
    *v.entry("a").unwrap() = Value::from(1);
    assert!(v["missing"].is_null());
    assert!(v[0].is_null());
    assert!(Value::from(true)["a"].is_null());
    assert!(v["a"][99].is_null());
}

#[test]
fn from_str_parses_strict() {
    let v: Value = "[1,2,3]".parse().unwrap();
    assert_eq!(v.len(), 3);
    assert!("// nope\n1".parse::<Value>().is_err());
}

#[test]
fn display_is_compact() {
    let mut v = Value::Null;
    *v.entry("a").unwrap() = Value::from(1);
    assert_eq!(v.to_string(), r#"{"a":1}"#);
}
