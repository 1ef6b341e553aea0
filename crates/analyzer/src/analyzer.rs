use crate::config::AnalyzerConfig;
use crate::enhancer::DiagramEnhancer;
use crate::error::{AnalyzerError, Result};
use crate::scanner::{FileScanner, SourceFile};
use calltree_diagram::{accept_enhanced, render, repair, Grammar};
use calltree_extractor::{Extractor, FunctionRecord};
use calltree_graph::{CallGraph, GraphBuilder, GraphConfig};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

/// Final diagram plus what went into it
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub diagram: String,
    pub grammar: Grammar,
    pub summary: AnalysisSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub total_functions: usize,
    pub total_files: usize,
    pub language: String,
    /// Uncapped; only the first few get a tree
    pub entry_point_count: usize,
    /// Resolved caller → callee pairs across all files
    pub call_edges: usize,
    pub recursive_groups: Vec<Vec<String>>,
    /// Whether the enhancer's rewrite replaced the rendering
    pub enhanced: bool,
}

/// Extract → build trees → render → (enhance) → repair
pub struct Analyzer {
    config: AnalyzerConfig,
    extractor: Extractor,
    enhancer: Option<Box<dyn DiagramEnhancer>>,
}

impl Analyzer {
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        let extractor = Extractor::new(config.extraction.clone());
        Self {
            config,
            extractor,
            enhancer: None,
        }
    }

    #[must_use]
    pub fn with_enhancer(mut self, enhancer: impl DiagramEnhancer + 'static) -> Self {
        self.enhancer = Some(Box::new(enhancer));
        self
    }

    /// Records from every source, in source order
    #[must_use]
    pub fn extract_all(&self, sources: &[SourceFile]) -> Vec<FunctionRecord> {
        let mut functions = Vec::new();
        for source in sources {
            functions.extend(
                self.extractor
                    .extract(&source.text, &source.path, source.language),
            );
        }
        functions
    }

    pub fn scan(&self, root: impl AsRef<Path>) -> Result<Vec<SourceFile>> {
        FileScanner::from_config(root, &self.config)?.read_sources()
    }

    pub fn analyze_path(&self, root: impl AsRef<Path>) -> Result<AnalysisResult> {
        let root = root.as_ref();
        log::info!("Analyzing {}", root.display());
        let sources = self.scan(root)?;
        self.analyze(&sources)
    }

    pub fn analyze(&self, sources: &[SourceFile]) -> Result<AnalysisResult> {
        let start = Instant::now();

        let functions = self.extract_all(sources);
        if functions.is_empty() {
            return Err(AnalyzerError::no_functions(
                self.config.language.clone(),
                sources.len(),
            ));
        }

        let builder = GraphBuilder::new(&functions);
        let forest = builder.build(GraphConfig::with_max_depth(self.config.max_depth));
        let entry_point_count = builder.entry_points().len();

        let grammar = self.config.grammar;
        let rendered = render(&forest, &functions, grammar).text();
        let (text, enhanced) = self.enhance(rendered, grammar);
        let diagram = repair(&text);

        let graph = CallGraph::from_functions(&functions);
        let files: HashSet<&str> = sources.iter().map(|s| s.path.as_str()).collect();
        let summary = AnalysisSummary {
            total_functions: functions.len(),
            total_files: files.len(),
            language: self.config.language.clone(),
            entry_point_count,
            call_edges: graph.edge_count(),
            recursive_groups: graph.recursive_groups(),
            enhanced,
        };

        log::info!(
            "Rendered {grammar} diagram for {} functions in {} files ({} ms)",
            summary.total_functions,
            summary.total_files,
            start.elapsed().as_millis()
        );

        Ok(AnalysisResult {
            diagram,
            grammar,
            summary,
        })
    }

    fn enhance(&self, rendered: String, grammar: Grammar) -> (String, bool) {
        let Some(enhancer) = &self.enhancer else {
            return (rendered, false);
        };

        match enhancer.enhance(&rendered, grammar) {
            Ok(candidate) => {
                let accepted = accept_enhanced(&rendered, &candidate, grammar);
                let enhanced = accepted != rendered;
                (accepted, enhanced)
            }
            Err(e) => {
                log::warn!("Diagram enhancement failed: {e:#}, keeping original");
                (rendered, false)
            }
        }
    }
}
