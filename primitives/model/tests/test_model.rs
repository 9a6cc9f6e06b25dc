//! Unit tests for the canonical model

use model::*;

fn person() -> Model {
    Model::new(
        "Person",
        vec![
            Property::new("name", TypeRef::Primitive(PrimitiveType::String)),
            Property::new("age", TypeRef::Primitive(PrimitiveType::Int)),
            Property::new("address", TypeRef::Model("Address".to_string())),
            Property::new(
                "aliases",
                TypeRef::List(Box::new(TypeRef::Model("Alias".to_string()))),
            ),
        ],
    )
}

#[test]
fn test_model_accessors() {
    let model = person().with_namespace(vec!["crm".to_string()]).with_source("crm/person.yaml");

    assert_eq!(model.type_name(), "Person");
    assert_eq!(model.properties().len(), 4);
    assert_eq!(model.namespace(), &["crm".to_string()]);
    assert_eq!(model.source(), std::path::Path::new("crm/person.yaml"));
    assert!(model.description().is_none());
    assert_eq!(
        model.property("age").map(|p| &p.ty),
        Some(&TypeRef::Primitive(PrimitiveType::Int))
    );
    assert!(model.property("missing").is_none());
}

#[test]
fn test_referenced_models_follow_property_order() {
    assert_eq!(person().referenced_models(), vec!["Address", "Alias"]);
}

#[test]
fn test_model_serializes_with_stable_field_order() {
    let json = serde_json::to_string(&person()).expect("model serializes");
    let type_at = json.find("\"type_name\"").expect("type_name present");
    let props_at = json.find("\"properties\"").expect("properties present");
    assert!(type_at < props_at);

    let back: Model = serde_json::from_str(&json).expect("model deserializes");
    assert_eq!(back, person());
}

#[test]
fn test_every_primitive_keyword_parses_back() {
    for primitive in PrimitiveType::ALL {
        assert_eq!(TypeRef::parse(primitive.keyword()), Ok(TypeRef::Primitive(primitive)));
    }
}
