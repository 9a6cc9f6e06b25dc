//! Output collision detection
//!
//! Two models collide when they would be written to the same output path, i.e. they
//! share a namespace and a type name. Colliding models are all rejected: picking a
//! winner would make the output depend on discovery order.

use std::collections::BTreeMap;
use std::path::PathBuf;

use model::Model;
use thiserror::Error;

use crate::resolver::QualifiedName;

/// Several schema documents define the same qualified type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: type `{}` is also defined by {}", .schema.display(), .name.type_name, join_paths(.others))]
pub struct CollisionError {
    /// Schema document this error is reported for
    pub schema: PathBuf,
    /// The contested qualified name
    pub name: QualifiedName,
    /// The other documents defining the same name
    pub others: Vec<PathBuf>,
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Find every model whose qualified name is shared with another model
///
/// Returns one error per colliding model, keyed by its index in `models`.
pub fn detect_collisions(models: &[Model]) -> BTreeMap<usize, CollisionError> {
    let mut groups: BTreeMap<QualifiedName, Vec<usize>> = BTreeMap::new();
    for (index, model) in models.iter().enumerate() {
        groups.entry(QualifiedName::of(model)).or_default().push(index);
    }

    let mut collisions = BTreeMap::new();
    for (name, members) in groups.into_iter().filter(|(_, members)| members.len() > 1) {
        for &index in &members {
            let others = members
                .iter()
                .filter(|&&other| other != index)
                .map(|&other| models[other].source().to_path_buf())
                .collect();
            collisions.insert(
                index,
                CollisionError {
                    schema: models[index].source().to_path_buf(),
                    name: name.clone(),
                    others,
                },
            );
        }
    }
    collisions
}
