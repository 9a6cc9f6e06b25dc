//! JavaBean class generator
//!
//! Renders one public class per model: a private field per property, then a
//! `get`/`set` pair per property, both in declaration order, followed by any enabled
//! boilerplate methods.

use std::collections::BTreeSet;
use std::fmt::Write;

use analysis::{ModelIndex, ResolutionFailure, TypeResolutionError};
use model::{Model, PrimitiveType, Property, TypeRef};

use crate::generators::doc_comment::write_javadoc;
use crate::utils::{accessor_name, portable_path};
use crate::{CodeGenerator, EmitOptions, GeneratedUnit, Result};

/// Generator for JavaBean classes
#[derive(Debug, Clone, Default)]
pub struct JavaBeanGenerator {
    options: EmitOptions,
}

impl JavaBeanGenerator {
    /// Create a generator with the given options
    pub fn new(options: EmitOptions) -> Self { Self { options } }

    /// Options this generator renders with
    pub fn options(&self) -> &EmitOptions { &self.options }

    fn package_of(&self, model: &Model) -> String {
        path::qualified_package(&self.options.base_package, model.namespace())
    }

    /// Map a property type to Java source, recording the imports it needs
    fn java_type(
        &self,
        ty: &TypeRef,
        model: &Model,
        index: &ModelIndex,
        imports: &mut BTreeSet<String>,
    ) -> std::result::Result<String, (String, ResolutionFailure)> {
        match ty {
            TypeRef::Primitive(primitive) => Ok(primitive_type(*primitive, imports, false)),
            TypeRef::List(inner) => {
                let element = match inner.as_ref() {
                    TypeRef::Primitive(primitive) => primitive_type(*primitive, imports, true),
                    other => self.java_type(other, model, index, imports)?,
                };
                imports.insert("java.util.List".to_string());
                Ok(format!("List<{}>", element))
            }
            TypeRef::Model(name) => {
                let target = index
                    .resolve(name, model.namespace())
                    .map_err(|failure| (name.clone(), failure))?;
                let package = target.package(&self.options.base_package);
                if package == self.package_of(model) {
                    Ok(target.type_name.clone())
                } else if target.type_name == model.type_name() {
                    // Importing would shadow the class being declared.
                    Ok(format!("{}.{}", package, target.type_name))
                } else {
                    imports.insert(format!("{}.{}", package, target.type_name));
                    Ok(target.type_name.clone())
                }
            }
        }
    }

    fn render_field(&self, out: &mut String, property: &Property, ty: &str) -> std::fmt::Result {
        if let Some(description) = &property.description {
            write_javadoc(out, description, "    ")?;
        }
        writeln!(out, "    private {} {};", ty, property.name)
    }

    fn render_accessors(&self, out: &mut String, property: &Property, ty: &str) -> std::fmt::Result {
        let name = &property.name;
        writeln!(out)?;
        writeln!(out, "    public {} {}() {{", ty, accessor_name("get", name))?;
        writeln!(out, "        return {};", name)?;
        writeln!(out, "    }}")?;
        writeln!(out)?;
        writeln!(out, "    public void {}({} {}) {{", accessor_name("set", name), ty, name)?;
        writeln!(out, "        this.{} = {};", name, name)?;
        writeln!(out, "    }}")
    }
}

fn primitive_type(primitive: PrimitiveType, imports: &mut BTreeSet<String>, boxed: bool) -> String {
    let (name, import) = match (primitive, boxed) {
        (PrimitiveType::String, _) => ("String", None),
        (PrimitiveType::Int, false) => ("int", None),
        (PrimitiveType::Int, true) => ("Integer", None),
        (PrimitiveType::Long, false) => ("long", None),
        (PrimitiveType::Long, true) => ("Long", None),
        (PrimitiveType::Float, false) => ("float", None),
        (PrimitiveType::Float, true) => ("Float", None),
        (PrimitiveType::Double, false) => ("double", None),
        (PrimitiveType::Double, true) => ("Double", None),
        (PrimitiveType::Boolean, false) => ("boolean", None),
        (PrimitiveType::Boolean, true) => ("Boolean", None),
        (PrimitiveType::Decimal, _) => ("BigDecimal", Some("java.math.BigDecimal")),
        (PrimitiveType::Date, _) => ("LocalDate", Some("java.time.LocalDate")),
        (PrimitiveType::DateTime, _) => ("OffsetDateTime", Some("java.time.OffsetDateTime")),
        (PrimitiveType::Bytes, _) => ("byte[]", None),
    };
    if let Some(import) = import {
        imports.insert(import.to_string());
    }
    name.to_string()
}

impl CodeGenerator for JavaBeanGenerator {
    fn name(&self) -> &'static str { "java-bean" }

    fn file_extension(&self) -> &'static str { "java" }

    fn emit(&self, model: &Model, index: &ModelIndex) -> Result<GeneratedUnit> {
        let package = self.package_of(model);
        let mut imports = BTreeSet::new();

        let mut fields = Vec::with_capacity(model.properties().len());
        for property in model.properties() {
            let ty = self.java_type(&property.ty, model, index, &mut imports).map_err(
                |(reference, failure)| TypeResolutionError {
                    schema: model.source().to_path_buf(),
                    model: model.type_name().to_string(),
                    property: property.name.clone(),
                    reference,
                    failure,
                },
            )?;
            fields.push((property, ty));
        }

        let mut out = String::new();
        writeln!(
            out,
            "// Generated by modelgen from {}. Do not edit.",
            portable_path(model.source())
        )?;
        writeln!(out, "// Regenerating overwrites this file; changes made by hand are lost.")?;
        writeln!(out)?;
        if !package.is_empty() {
            writeln!(out, "package {};", package)?;
            writeln!(out)?;
        }
        if !imports.is_empty() {
            for import in &imports {
                writeln!(out, "import {};", import)?;
            }
            writeln!(out)?;
        }

        if let Some(description) = model.description() {
            write_javadoc(&mut out, description, "")?;
        }
        writeln!(out, "public class {} {{", model.type_name())?;

        if !fields.is_empty() {
            writeln!(out)?;
        }
        for (property, ty) in &fields {
            self.render_field(&mut out, property, ty)?;
        }
        for (property, ty) in &fields {
            self.render_accessors(&mut out, property, ty)?;
        }
        for method in &self.options.boilerplate {
            writeln!(out)?;
            out.push_str(&method.render());
        }
        writeln!(out, "}}")?;

        let relative_path =
            path::unit_relative_path(&package, model.type_name(), self.file_extension());
        logging::trace(
            "CODEGEN",
            &format!("rendered {} ({} properties)", relative_path.display(), fields.len()),
        );

        Ok(GeneratedUnit {
            package,
            type_name: model.type_name().to_string(),
            source: out,
            relative_path,
        })
    }
}
