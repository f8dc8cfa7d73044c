use parambench_core::{AttributeSpec, Rgba, Value, ValueKind, Vector4};

#[test]
fn value_serialization_uses_kind_tagged_wire_fields() {
    let json = serde_json::to_value(Value::from(4.0)).unwrap();
    assert_eq!(json["kind"], "number");
    assert_eq!(json["value"], 4.0);

    let json = serde_json::to_value(Value::from(Vector4::point(150.0, 150.0))).unwrap();
    assert_eq!(json["kind"], "vector");
    assert_eq!(json["value"]["x"], 150.0);
    assert_eq!(json["value"]["w"], 0.0);

    let json = serde_json::to_value(Value::from(Rgba::opaque(1.0, 0.5, 0.0))).unwrap();
    assert_eq!(json["kind"], "color");
    assert_eq!(json["value"]["a"], 1.0);

    let json = serde_json::to_value(Value::Null).unwrap();
    assert_eq!(json["kind"], "null");
}

#[test]
fn value_deserializes_from_kind_tagged_payload() {
    let decoded: Value = serde_json::from_value(serde_json::json!({
        "kind": "text",
        "value": "Alice"
    }))
    .unwrap();
    assert_eq!(decoded, Value::Text("Alice".to_string()));

    let decoded: Value = serde_json::from_value(serde_json::json!({
        "kind": "image",
        "value": { "id": "asset-7", "width": 1024, "height": 768 }
    }))
    .unwrap();
    assert_eq!(decoded.as_image().map(|image| image.width), Some(1024));
}

#[test]
fn attribute_spec_serialization_uses_snake_case_modes() {
    let spec = AttributeSpec::read_only("output_image", "Output Image", ValueKind::Image);
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["key"], "output_image");
    assert_eq!(json["kind"], "image");
    assert_eq!(json["access"], "read_only");
    assert_eq!(json["default"]["kind"], "null");

    let spec = AttributeSpec::number("radius", "Radius", 10.0).with_slider(0.0, 100.0);
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["access"], "read_write");
    assert_eq!(json["min"], 0.0);
    assert_eq!(json["max"], 100.0);
}

#[test]
fn vector_text_form_matches_bracketed_contract() {
    let vector = Vector4::parse_bracketed("[0 0 300 300]").expect("rect form parses");
    assert_eq!(vector, Vector4::new(0.0, 0.0, 300.0, 300.0));
    assert_eq!(vector.to_bracketed(), "[0 0 300 300]");

    let short = Vector4::parse_bracketed("[150 150]").expect("point form parses");
    assert_eq!(short, Vector4::point(150.0, 150.0));
}

#[test]
fn non_finite_inputs_normalize_at_the_model_boundary() {
    assert_eq!(Value::from(f64::NAN), Value::from(0.0));
    assert_eq!(
        Vector4::new(f64::INFINITY, 1.0, f64::NAN, 2.0),
        Vector4::new(0.0, 1.0, 0.0, 2.0)
    );
    assert_eq!(Rgba::new(0.5, 0.5, 0.5, f64::NAN).a, 1.0);
}
