pub mod annotations;
pub mod config;
pub mod error;
pub mod generator;
pub mod identity;
pub mod markdown;
pub mod model;
pub mod pages;
pub mod signature;
pub mod tree;

pub use annotations::{AnnotationRecord, AnnotationSource, AnnotationStore, NO_DESCRIPTION};
pub use config::GeneratorSettings;
pub use error::{GenerateError, MalformedSymbolError, PathInsertionError, PlacementError};
pub use generator::{GenerateReport, Generator};
pub use identity::{encode_identity, field_id, method_id, property_id, type_fragment, type_id};
pub use markdown::{DocWriter, MarkdownWriter};
pub use model::{Symbol, SymbolKind, SymbolTables, TypeRef};
pub use pages::{Documented, DocumentedType, Page, PageOptions};
pub use signature::{SignatureOptions, SignatureRenderer, format_literal, render_signature};
pub use tree::{PathNode, PathTree};
