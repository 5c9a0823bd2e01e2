use proptest::prelude::*;
use serde_json::json;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use webexport_types::{Error, PropertyType, PropertyValue};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut h = DefaultHasher::new();
    value.hash(&mut h);
    h.finish()
}

// ── from_typed ───────────────────────────────────────────────────

#[test]
fn from_typed_accepts_supported_types() {
    assert_eq!(PropertyValue::from_typed(true).unwrap(), PropertyValue::Boolean(true));
    assert_eq!(
        PropertyValue::from_typed(String::from("a")).unwrap(),
        PropertyValue::String("a".into())
    );
    assert_eq!(PropertyValue::from_typed(7i32).unwrap(), PropertyValue::Integer(7));
    assert_eq!(PropertyValue::from_typed(1.5f64).unwrap(), PropertyValue::Double(1.5));
    assert_eq!(
        PropertyValue::from_typed(json!([1, 2])).unwrap(),
        PropertyValue::Json(json!([1, 2]))
    );
}

#[test]
fn from_typed_rejects_unsupported_type_and_lists_supported() {
    let err = PropertyValue::from_typed(7u64).unwrap_err();
    match &err {
        Error::UnsupportedType { type_name, supported } => {
            assert_eq!(type_name, "u64");
            assert_eq!(supported, "bool, String, i32, f64, serde_json::Value");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn downcast_ref_matches_payload_type_only() {
    let v = PropertyValue::Integer(3);
    assert_eq!(v.downcast_ref::<i32>(), Some(&3));
    assert_eq!(v.downcast_ref::<f64>(), None);
}

// ── from_json ────────────────────────────────────────────────────

#[test]
fn from_json_null_is_absent() {
    for t in PropertyType::SUPPORTED {
        assert!(PropertyValue::from_json(t, &json!(null)).unwrap().is_none());
    }
}

#[test]
fn from_json_accepts_integral_double_for_integer() {
    let v = PropertyValue::from_json(PropertyType::Integer, &json!(5.0)).unwrap();
    assert_eq!(v, Some(PropertyValue::Integer(5)));
}

#[test]
fn from_json_rejects_fractional_integer() {
    assert!(PropertyValue::from_json(PropertyType::Integer, &json!(5.5)).is_err());
}

#[test]
fn from_json_rejects_out_of_range_integer() {
    assert!(PropertyValue::from_json(PropertyType::Integer, &json!(i64::MAX)).is_err());
}

#[test]
fn from_json_type_mismatch_names_both_sides() {
    let err = PropertyValue::from_json(PropertyType::Boolean, &json!("true")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("boolean"));
    assert!(msg.contains("string"));
}

#[test]
fn from_json_json_type_takes_anything() {
    let v = PropertyValue::from_json(PropertyType::Json, &json!({"k": [1]})).unwrap();
    assert_eq!(v, Some(PropertyValue::Json(json!({"k": [1]}))));
}

// ── infer / serde ────────────────────────────────────────────────

#[test]
fn infer_picks_narrowest_type() {
    assert_eq!(PropertyValue::infer(json!(1)).property_type(), PropertyType::Integer);
    assert_eq!(PropertyValue::infer(json!(1.25)).property_type(), PropertyType::Double);
    assert_eq!(
        PropertyValue::infer(json!(10_000_000_000i64)).property_type(),
        PropertyType::Double
    );
    assert_eq!(PropertyValue::infer(json!("x")).property_type(), PropertyType::String);
    assert_eq!(PropertyValue::infer(json!([])).property_type(), PropertyType::Json);
}

#[test]
fn serializes_as_plain_json() {
    assert_eq!(serde_json::to_value(PropertyValue::Integer(5)).unwrap(), json!(5));
    assert_eq!(serde_json::to_value(PropertyValue::from("a")).unwrap(), json!("a"));
}

// ── Eq / Hash ────────────────────────────────────────────────────

#[test]
fn nan_equals_itself() {
    let a = PropertyValue::Double(f64::NAN);
    assert_eq!(a, a.clone());
    assert_eq!(hash_of(&a), hash_of(&a.clone()));
}

#[test]
fn values_of_different_types_differ() {
    assert_ne!(PropertyValue::Integer(1), PropertyValue::Double(1.0));
    assert_ne!(PropertyValue::from("1"), PropertyValue::Json(json!("1")));
}

proptest! {
    #[test]
    fn equal_doubles_hash_equal(d in any::<f64>()) {
        let a = PropertyValue::Double(d);
        let b = PropertyValue::Double(d);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn integer_json_roundtrip(i in any::<i32>()) {
        let v = PropertyValue::Integer(i);
        let back = PropertyValue::from_json(PropertyType::Integer, &v.to_json()).unwrap();
        prop_assert_eq!(back, Some(v));
    }

    #[test]
    fn string_equality_matches_payload(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
        let va = PropertyValue::from(a.as_str());
        let vb = PropertyValue::from(b.as_str());
        prop_assert_eq!(va == vb, a == b);
        if va == vb {
            prop_assert_eq!(hash_of(&va), hash_of(&vb));
        }
    }
}
