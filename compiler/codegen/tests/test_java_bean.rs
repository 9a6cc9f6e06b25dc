use analysis::ModelIndex;
use model::{Model, Property, TypeRef};
use modelgen_codegen::{CodeGenerator, CodegenError, EmitOptions, JavaBeanGenerator};

fn model_with(type_name: &str, properties: &[(&str, &str)]) -> Model {
    let properties = properties
        .iter()
        .map(|(name, ty)| Property::new(*name, TypeRef::parse(ty).expect("valid type")))
        .collect();
    Model::new(type_name, properties).with_source(format!("{}.yaml", type_name.to_lowercase()))
}

fn emit(generator: &JavaBeanGenerator, model: &Model) -> String {
    let index = ModelIndex::build([model]);
    generator.emit(model, &index).expect("Failed to emit").source
}

#[test]
fn emitting_twice_is_byte_identical() {
    let model = model_with(
        "Invoice",
        &[("number", "string"), ("total", "decimal"), ("lines", "list<string>"), ("due", "date")],
    );
    let generator = JavaBeanGenerator::new(EmitOptions::new("com.acme"));
    assert_eq!(emit(&generator, &model), emit(&generator, &model));
}

#[test]
fn one_field_and_two_accessors_per_property_in_order() {
    let properties = [
        ("zulu", "string"),
        ("alpha", "int"),
        ("mike", "boolean"),
        ("bravo", "long"),
        ("yankee", "double"),
    ];
    let model = model_with("Ordered", &properties);
    let source = emit(&JavaBeanGenerator::new(EmitOptions::new("com.acme")), &model);

    let fields: Vec<&str> =
        source.lines().filter(|l| l.trim_start().starts_with("private ")).collect();
    assert_eq!(fields.len(), properties.len());

    let accessors: Vec<String> = source
        .lines()
        .map(str::trim_start)
        .filter(|l| l.starts_with("public ") && !l.starts_with("public class"))
        .map(|l| {
            let signature = l.split('(').next().expect("method signature");
            signature.rsplit(' ').next().expect("method name").to_string()
        })
        .collect();

    let expected: Vec<String> = properties
        .iter()
        .flat_map(|(name, _)| {
            let upper = format!("{}{}", name[..1].to_uppercase(), &name[1..]);
            [format!("get{}", upper), format!("set{}", upper)]
        })
        .collect();
    assert_eq!(accessors, expected);

    for (i, (name, _)) in properties.iter().enumerate() {
        assert!(fields[i].ends_with(&format!(" {};", name)), "field {} out of order", name);
    }
}

#[test]
fn boilerplate_is_emitted_only_when_enabled() {
    let model = model_with("Plain", &[("id", "long")]);

    let without = emit(&JavaBeanGenerator::new(EmitOptions::new("com.acme")), &model);
    assert!(!without.contains("sumOfTen"));

    let options = EmitOptions::new("com.acme")
        .with_boilerplate(&["sum_of_ten", "sum_of_ten"])
        .expect("known boilerplate");
    let with = emit(&JavaBeanGenerator::new(options), &model);
    assert_eq!(with.matches("public int sumOfTen()").count(), 1);
    let setter = with.find("public void setId").expect("setter present");
    let extra = with.find("public int sumOfTen").expect("boilerplate present");
    assert!(setter < extra, "boilerplate follows the accessors");
}

#[test]
fn unknown_boilerplate_is_rejected() {
    let err = EmitOptions::new("com.acme")
        .with_boilerplate(&["sum_of_eleven"])
        .expect_err("unknown boilerplate");
    assert!(matches!(err, CodegenError::UnknownBoilerplate(ref name) if name == "sum_of_eleven"));
    assert_eq!(
        err.to_string(),
        "unknown boilerplate method `sum_of_eleven` (available: sum_of_ten)"
    );
}

#[test]
fn namespace_segments_extend_the_package() {
    let model = model_with("Invoice", &[("total", "decimal")])
        .with_namespace(vec!["billing".to_string(), "eu".to_string()]);
    let index = ModelIndex::build([&model]);
    let unit = JavaBeanGenerator::new(EmitOptions::new("com.acme"))
        .emit(&model, &index)
        .expect("Failed to emit");
    assert_eq!(unit.package, "com.acme.billing.eu");
    assert_eq!(unit.relative_path, std::path::PathBuf::from("com/acme/billing/eu/Invoice.java"));
    assert!(unit.source.contains("package com.acme.billing.eu;\n"));
}
