use super::*;
use pretty_assertions::assert_eq;

#[test]
fn scalar_kinds_never_coerce() {
    assert_ne!(Value::int(1), Value::float(1.0));
    assert_ne!(Value::int(1), Value::text("1"));
    assert_ne!(Value::bool(true), Value::int(1));
    assert_eq!(Value::int(1), Value::int(1));
}

#[test]
fn variants_compare_tag_and_fields_in_order() {
    let a = Value::variant("Pound", vec![Value::float(5.0)]);
    let b = Value::variant("Pound", vec![Value::float(5.0)]);
    let c = Value::variant("Ounce", vec![Value::float(5.0)]);
    let d = Value::variant("Pound", vec![Value::float(4.0)]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
}

#[test]
fn variant_field_names_are_part_of_identity() {
    let named = Value::variant_fields("Pound", vec![Field::named("weight", Value::int(5))]);
    let positional = Value::variant("Pound", vec![Value::int(5)]);
    assert_ne!(named, positional);
}

#[test]
fn tuples_compare_by_arity_and_elements() {
    let pair = Value::tuple(vec![Value::int(1), Value::int(2)]);
    let triple = Value::tuple(vec![Value::int(1), Value::int(2), Value::int(3)]);
    assert_ne!(pair, triple);
    assert_eq!(pair, Value::tuple(vec![Value::int(1), Value::int(2)]));
}

#[test]
fn clone_shares_compound_payload() {
    let pair = Value::tuple(vec![Value::int(1), Value::text("x")]);
    let copy = pair.clone();
    match (&pair, &copy) {
        (Value::Tuple(a), Value::Tuple(b)) => assert!(Heap::ptr_eq(a, b)),
        _ => panic!("expected tuples"),
    }
}

#[test]
fn display_is_source_like() {
    assert_eq!(Value::float(5.0).to_string(), "5.0");
    assert_eq!(Value::text("hi").to_string(), "\"hi\"");
    assert_eq!(Value::Absent.to_string(), "absent");
    assert_eq!(
        Value::tuple(vec![Value::int(0), Value::unit_variant("Empty")]).to_string(),
        "(0, Empty)"
    );
    assert_eq!(
        Value::variant_fields(
            "Point",
            vec![Field::named("x", Value::int(1)), Field::positional(Value::int(2))]
        )
        .to_string(),
        "Point(x: 1, 2)"
    );
}

#[test]
fn literal_keys_only_for_literals() {
    assert_eq!(Value::int(3).literal_key(), Some(LiteralKey::Int(3)));
    assert_eq!(Value::Absent.literal_key(), Some(LiteralKey::Absent));
    assert_eq!(Value::tuple(vec![]).literal_key(), None);
    assert_ne!(
        Value::float(0.0).literal_key(),
        Value::float(-0.0).literal_key()
    );
}

#[test]
fn accessors_return_payloads() {
    assert_eq!(Value::int(7).as_int(), Some(7));
    assert_eq!(Value::int(7).as_float(), None);
    assert_eq!(Value::text("a").as_text(), Some("a"));
    assert_eq!(Value::bool(false).scalar_kind(), Some(ScalarKind::Bool));
    let v = Value::variant("Grain", vec![Value::int(2)]);
    let (tag, fields) = v.as_variant().unwrap_or_else(|| panic!("variant"));
    assert_eq!(tag.as_str(), "Grain");
    assert_eq!(fields.len(), 1);
}
