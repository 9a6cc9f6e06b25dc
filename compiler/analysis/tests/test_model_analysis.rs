use modelgen_analysis::{
    detect_collisions, ModelIndex, ModelValidationError, ModelValidator, QualifiedName,
    ResolutionFailure,
};
use model::{Model, PrimitiveType, Property, TypeRef};

fn string_prop(name: &str) -> Property {
    Property::new(name, TypeRef::Primitive(PrimitiveType::String))
}

fn model_ref(name: &str, target: &str) -> Property {
    Property::new(name, TypeRef::Model(target.to_string()))
}

fn at(model: Model, namespace: &[&str], source: &str) -> Model {
    model.with_namespace(namespace.iter().map(|s| s.to_string()).collect()).with_source(source)
}

#[test]
fn accepts_well_formed_model() {
    let model = Model::new("Person", vec![string_prop("name"), string_prop("email")]);
    assert!(ModelValidator::new().validate(&model).is_empty());
}

#[test]
fn fails_on_duplicate_property_names() {
    let model = Model::new("Person", vec![string_prop("name"), string_prop("name")]);
    let errors = ModelValidator::new().validate(&model);
    assert_eq!(errors, vec![ModelValidationError::DuplicateProperty("name".to_string())]);
}

#[test]
fn fails_on_properties_sharing_accessor_names() {
    let model = Model::new(
        "Person",
        vec![string_prop("name"), Property::new("Name", TypeRef::Primitive(PrimitiveType::Int))],
    );
    let errors = ModelValidator::new().validate(&model);
    assert_eq!(
        errors,
        vec![ModelValidationError::AccessorClash {
            earlier: "name".to_string(),
            property: "Name".to_string(),
            stem: "Name".to_string(),
        }]
    );
    assert_eq!(
        errors[0].to_string(),
        "properties `name` and `Name` both generate `getName`/`setName`"
    );
}

#[test]
fn accepts_properties_differing_past_the_first_letter() {
    let model = Model::new("Person", vec![string_prop("url"), string_prop("uRL")]);
    assert!(ModelValidator::new().validate(&model).is_empty());
}

#[test]
fn fails_on_bad_identifiers_and_reserved_words() {
    let model = Model::new("2Fast", vec![string_prop("first-name"), string_prop("class")]);
    let errors = ModelValidator::new().validate(&model);
    assert_eq!(
        errors,
        vec![
            ModelValidationError::InvalidTypeName("2Fast".to_string()),
            ModelValidationError::InvalidPropertyName("first-name".to_string()),
            ModelValidationError::ReservedWord("class".to_string()),
        ]
    );

    let empty = Model::new("  ", vec![]);
    assert_eq!(ModelValidator::new().validate(&empty), vec![ModelValidationError::EmptyTypeName]);
}

#[test]
fn resolves_unique_and_local_references() {
    let address_root = at(Model::new("Address", vec![]), &[], "address.yaml");
    let address_eu = at(Model::new("Address", vec![]), &["eu"], "eu/address.yaml");
    let person = at(Model::new("Person", vec![]), &[], "person.yaml");
    let index = ModelIndex::build([&address_root, &address_eu, &person]);

    assert_eq!(index.len(), 2);
    assert_eq!(index.resolve("Person", &["eu".to_string()]).map(|q| q.namespace.clone()), Ok(vec![]));
    assert_eq!(
        index.resolve("Address", &["eu".to_string()]).map(|q| q.namespace.clone()),
        Ok(vec!["eu".to_string()])
    );
    assert_eq!(index.resolve("Address", &[]).map(|q| q.namespace.clone()), Ok(vec![]));
    assert!(matches!(
        index.resolve("Address", &["us".to_string()]),
        Err(ResolutionFailure::Ambiguous(candidates)) if candidates.len() == 2
    ));
    assert_eq!(index.resolve("Missing", &[]), Err(ResolutionFailure::Unknown));
}

#[test]
fn reports_unknown_reference_with_schema_path() {
    let order = at(
        Model::new("Order", vec![string_prop("id"), model_ref("customer", "Customer")]),
        &["sales"],
        "sales/order.yaml",
    );
    let index = ModelIndex::build([&order]);

    let err = index.check_references(&order).expect_err("Customer is not defined");
    assert_eq!(err.property, "customer");
    assert_eq!(err.reference, "Customer");
    assert_eq!(err.failure, ResolutionFailure::Unknown);
    let message = err.to_string();
    assert!(message.starts_with("sales/order.yaml"), "got: {}", message);
    assert!(message.contains("unknown type `Customer`"), "got: {}", message);
}

#[test]
fn list_references_are_checked_too() {
    let team = Model::new(
        "Team",
        vec![Property::new("members", TypeRef::parse("list<Member>").expect("valid type"))],
    );
    let index = ModelIndex::build([&team]);
    assert!(index.check_references(&team).is_err());

    let member = Model::new("Member", vec![]);
    let index = ModelIndex::build([&team, &member]);
    assert!(index.check_references(&team).is_ok());
}

#[test]
fn detects_collisions_only_within_the_same_namespace() {
    let models = vec![
        at(Model::new("Person", vec![]), &[], "person.yaml"),
        at(Model::new("Person", vec![]), &["hr"], "hr/person.yaml"),
        at(Model::new("Person", vec![]), &[], "people.yml"),
        at(Model::new("Team", vec![]), &[], "team.yaml"),
    ];

    let collisions = detect_collisions(&models);
    assert_eq!(collisions.keys().copied().collect::<Vec<_>>(), vec![0, 2]);
    let first = &collisions[&0];
    assert_eq!(first.name, QualifiedName { namespace: vec![], type_name: "Person".to_string() });
    assert_eq!(first.others, vec![std::path::PathBuf::from("people.yml")]);
    assert!(first.to_string().contains("also defined by people.yml"));
}

#[test]
fn qualified_package_joins_base_and_namespace() {
    let name = QualifiedName { namespace: vec!["hr".to_string()], type_name: "Person".into() };
    assert_eq!(name.package("com.example"), "com.example.hr");
    assert_eq!(name.package(""), "hr");
}
