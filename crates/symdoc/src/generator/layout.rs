//! Placement of pages in the path tree.
//!
//! Runs on a single thread: node creation in the tree is check-then-create.
//! Member names can collide with reserved segments (`ctors`) or with pages
//! of nested namespaces; the page placed first keeps the path and the later
//! one is reported.

use tracing::warn;

use crate::error::PlacementError;
use crate::pages::{DocumentedType, Page};
use crate::tree::PathTree;

pub const CONSTRUCTORS_SEGMENT: &str = "ctors";
pub const INDEXER_SEGMENT: &str = "this";

/// A page that could not be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFailure {
    pub path: String,
    pub error: PlacementError,
}

/// Insert one page per type, constructor set, method group, property,
/// indexer and field.
pub fn layout<'a>(
    types: &'a [DocumentedType<'a>],
    root_name: &str,
) -> (PathTree<Page<'a>>, Vec<PathFailure>) {
    let mut tree = PathTree::new(root_name);
    let mut failures = Vec::new();

    for owner in types {
        let base = owner.path.as_str();
        let mut place = |path: String, page: Page<'a>| {
            let occupant = tree.lookup(&path).map(Page::title);
            let placed = match occupant {
                Some(occupant) => Err(PlacementError::Occupied {
                    path: path.clone(),
                    occupant,
                }),
                None => tree.insert(&path, page).map(|_| ()).map_err(PlacementError::from),
            };
            if let Err(error) = placed {
                warn!("Skipping page {}: {error}", page.title());
                failures.push(PathFailure {
                    path,
                    error,
                });
            }
        };

        place(base.to_string(), Page::Type(owner));

        if !owner.constructors.is_empty() {
            place(format!("{base}/{CONSTRUCTORS_SEGMENT}"), Page::Constructors(owner));
        }

        for name in owner.method_groups().into_keys() {
            place(format!("{base}/{name}"), Page::MethodGroup {
                owner,
                name,
            });
        }

        for property in owner.plain_properties() {
            place(format!("{base}/{}", property.symbol.name), Page::Property {
                owner,
                property,
            });
        }

        for (index, indexer) in owner.indexers().enumerate() {
            place(format!("{base}/{INDEXER_SEGMENT}/{}", index + 1), Page::Property {
                owner,
                property: indexer,
            });
        }

        for field in &owner.fields {
            place(format!("{base}/{}", field.symbol.name), Page::Field {
                owner,
                field,
            });
        }
    }

    (tree, failures)
}

#[cfg(test)]
#[path = "../../tests/src/generator/layout_tests.rs"]
mod tests;
