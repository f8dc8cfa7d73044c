use parambench_core::{
    AccessError, AttributeAccess, AttributeSpec, ImageRef, ParameterSurface, SafeAccess,
    SurfaceCatalog, SurfaceDescriptor, Value, ValueKind,
};

fn profile_surface() -> ParameterSurface {
    let descriptor = SurfaceDescriptor::new(
        "profile",
        "Profile",
        vec![
            AttributeSpec::text("name", "Name", "Alice"),
            AttributeSpec::number("count", "Count", 5.0),
        ],
    );
    ParameterSurface::new(&descriptor).expect("profile descriptor instantiates")
}

#[test]
fn safe_read_returns_current_value_for_recognized_key() {
    let surface = profile_surface();
    assert_eq!(
        surface.safe_attribute("name").expect("recognized key reads"),
        Value::Text("Alice".to_string())
    );
}

#[test]
fn safe_read_returns_null_for_unrecognized_key() {
    let surface = profile_surface();
    assert_eq!(
        surface.safe_attribute("ghost").expect("unrecognized key is suppressed"),
        Value::Null
    );
}

#[test]
fn safe_write_to_recognized_key_updates_the_slot() {
    let mut surface = profile_surface();
    assert_eq!(
        surface.safe_attribute("count").expect("count reads"),
        Value::from(5.0)
    );

    surface
        .set_safe_attribute("count", Value::from(6.0))
        .expect("recognized key writes");
    assert_eq!(
        surface.safe_attribute("count").expect("count reads back"),
        Value::from(6.0)
    );
}

#[test]
fn safe_write_to_unrecognized_key_is_a_silent_no_op() {
    let mut surface = profile_surface();
    let before = surface.clone();

    surface
        .set_safe_attribute("color", Value::Text("blue".to_string()))
        .expect("unrecognized key write must not fail");

    assert_eq!(surface, before);
    assert!(!surface.has_attribute("color"));
    assert_eq!(
        surface.attribute_keys(),
        vec!["name", "count"],
        "no slot may be materialized for the unknown key"
    );
}

#[test]
fn repeated_safe_calls_are_idempotent() {
    let mut surface = profile_surface();
    let pristine = surface.clone();

    for _ in 0..5 {
        assert_eq!(
            surface.safe_attribute("ghost").expect("read suppressed"),
            Value::Null
        );
        surface
            .set_safe_attribute("ghost", Value::from(1.0))
            .expect("write suppressed");
    }
    assert_eq!(surface, pristine);
}

#[test]
fn blank_keys_fail_on_both_safe_paths() {
    let mut surface = profile_surface();

    let err = surface
        .safe_attribute("   ")
        .expect_err("blank key read must propagate");
    assert_eq!(err, AccessError::EmptyKey);

    let err = surface
        .set_safe_attribute("", Value::from(1.0))
        .expect_err("blank key write must propagate");
    assert_eq!(err, AccessError::EmptyKey);
}

#[test]
fn kind_mismatch_propagates_through_safe_write() {
    let mut surface = profile_surface();
    let err = surface
        .set_safe_attribute("count", Value::Text("six".to_string()))
        .expect_err("kind mismatch must propagate");
    assert_eq!(
        err,
        AccessError::TypeMismatch {
            key: "count".to_string(),
            expected: ValueKind::Number,
            actual: ValueKind::Text,
        }
    );
    assert_eq!(
        surface.attribute("count").expect("count unchanged"),
        Value::from(5.0)
    );
}

#[test]
fn read_only_violation_propagates_through_safe_write() {
    let catalog = SurfaceCatalog::builtin();
    let mut surface = catalog
        .instantiate("gaussian_blur")
        .expect("builtin instantiates");

    assert_eq!(
        surface
            .safe_attribute("output_image")
            .expect("read-only slot reads"),
        Value::Null
    );

    let err = surface
        .set_safe_attribute("output_image", Value::from(ImageRef::new("out", 1, 1)))
        .expect_err("read-only write must propagate");
    assert_eq!(
        err,
        AccessError::ReadOnlyKey {
            key: "output_image".to_string(),
        }
    );
}

#[test]
fn stored_null_and_unknown_key_read_alike_but_differ_by_declaration() {
    let catalog = SurfaceCatalog::builtin();
    let surface = catalog
        .instantiate("gaussian_blur")
        .expect("builtin instantiates");

    let declared = surface
        .safe_attribute("input_image")
        .expect("declared image slot reads");
    let undeclared = surface
        .safe_attribute("background_image")
        .expect("undeclared key is suppressed");
    assert_eq!(declared, Value::Null);
    assert_eq!(undeclared, Value::Null);

    assert!(surface.has_attribute("input_image"));
    assert!(!surface.has_attribute("background_image"));
    assert!(surface
        .attribute("background_image")
        .expect_err("strict read still fails")
        .is_unknown_key());
}

#[test]
fn safe_ops_cover_every_builtin_surface() {
    let catalog = SurfaceCatalog::builtin();
    for name in catalog.surface_names() {
        let mut surface = catalog.instantiate(&name).expect("builtin instantiates");
        let pristine = surface.clone();

        assert_eq!(
            surface
                .safe_attribute("no_such_parameter")
                .expect("suppressed read"),
            Value::Null,
            "surface `{name}`"
        );
        surface
            .set_safe_attribute("no_such_parameter", Value::from(1.0))
            .expect("suppressed write");
        assert_eq!(surface, pristine, "surface `{name}` must stay unchanged");
    }
}

#[test]
fn scenario_recognized_and_ghost_reads() {
    let surface = profile_surface();
    assert_eq!(
        surface.safe_attribute("name").expect("name reads"),
        Value::Text("Alice".to_string())
    );
    assert_eq!(
        surface.safe_attribute("ghost").expect("ghost suppressed"),
        Value::Null
    );
}

#[test]
fn scenario_unknown_color_write_leaves_object_unchanged() {
    let mut surface = profile_surface();
    let before = surface.clone();
    surface
        .set_safe_attribute("color", Value::Text("blue".to_string()))
        .expect("unknown color write is accepted silently");
    assert_eq!(surface, before);
}

#[test]
fn scenario_count_increments_through_safe_ops() {
    let mut surface = profile_surface();
    let count = surface
        .safe_attribute("count")
        .expect("count reads")
        .number_or_zero();
    assert_eq!(count, 5.0);

    surface
        .set_safe_attribute("count", Value::from(count + 1.0))
        .expect("count writes");
    assert_eq!(
        surface.safe_attribute("count").expect("count reads back"),
        Value::from(6.0)
    );
}
