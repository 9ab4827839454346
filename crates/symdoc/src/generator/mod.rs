//! End-to-end documentation run: collect, lay out, emit.

pub mod collect;
pub mod emit;
pub mod layout;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use crate::annotations::AnnotationSource;
use crate::config::GeneratorSettings;
use crate::error::GenerateError;
use crate::markdown::MarkdownWriter;
use crate::model::RawAssembly;
use crate::pages::DocumentedType;
use crate::pages::slim::render_slim;

pub use collect::{CollectOptions, Collection, SymbolFailure, collect};
pub use emit::{EmitReport, WriteFailure, emit_pages, page_file};
pub use layout::{PathFailure, layout};

/// Outcome of a run. Failures here are per symbol, path or file; none of
/// them stop the run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub types: usize,
    pub symbol_failures: Vec<SymbolFailure>,
    pub path_failures: Vec<PathFailure>,
    pub emit: EmitReport,
}

impl GenerateReport {
    pub fn is_clean(&self) -> bool {
        self.symbol_failures.is_empty() && self.path_failures.is_empty() && self.emit.failures.is_empty()
    }
}

pub struct Generator {
    settings: GeneratorSettings,
}

impl Generator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self {
            settings,
        }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn load_model(path: &Path) -> Result<RawAssembly, GenerateError> {
        let text = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| GenerateError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn generate(
        &self,
        assembly: &RawAssembly,
        annotations: &dyn AnnotationSource,
    ) -> Result<GenerateReport, GenerateError> {
        let options = CollectOptions {
            include_protected: self.settings.pages.include_protected,
        };
        let collection = collect(assembly, annotations, options);
        let mut report = GenerateReport {
            types: collection.types.len(),
            symbol_failures: collection.failures,
            ..GenerateReport::default()
        };

        if self.settings.output.slim {
            report.emit = self.emit_slim(&collection.types);
        } else {
            let (tree, path_failures) = layout(&collection.types, &self.settings.output.root_name);
            report.path_failures = path_failures;

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.settings.thread_pool.resolved_worker_threads())
                .thread_name(|index| format!("symdoc-writer-{index}"))
                .build()?;
            report.emit = emit_pages(&tree, &self.settings.output.directory, &pool, self.settings.pages.page_options());
        }

        info!(
            "Documented {} type(s): {} file(s) written, {} symbol failure(s), {} path failure(s), {} write failure(s)",
            report.types,
            report.emit.written.len(),
            report.symbol_failures.len(),
            report.path_failures.len(),
            report.emit.failures.len()
        );
        Ok(report)
    }

    fn emit_slim(
        &self,
        types: &[DocumentedType<'_>],
    ) -> EmitReport {
        let file = self.settings.output.slim_file();
        let write = || -> std::io::Result<()> {
            if let Some(dir) = file.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let mut writer = MarkdownWriter::new(BufWriter::new(File::create(&file)?));
            render_slim(&self.settings.output.root_name, types, &mut writer)?;
            writer.flush()
        };

        let result = write();
        let mut report = EmitReport::default();
        match result {
            Ok(()) => report.written.push(file),
            Err(error) => report.failures.push(WriteFailure {
                path: file,
                error,
            }),
        }
        report
    }
}
