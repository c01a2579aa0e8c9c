use civnet_core::{DiagnosticIssue, Diagnostics, Network, Severity};
use serde::Serialize;

/// Statistics about the import
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportStats {
    pub vertices: usize,
    pub edges: usize,
    pub skipped_lines: usize,
    pub comment_lines: usize,
}

/// Complete diagnostics for an import operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportDiagnostics {
    pub stats: ImportStats,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<DiagnosticIssue>,
}

impl ImportDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(
        &mut self,
        severity: Severity,
        category: &str,
        message: &str,
        line: Option<usize>,
        entity: Option<&str>,
    ) {
        let mut issue = DiagnosticIssue::new(severity, category, message);
        if let Some(line) = line {
            issue = issue.with_line(line);
        }
        if let Some(entity) = entity {
            issue = issue.with_entity(entity);
        }
        self.issues.push(issue);
    }

    pub fn add_warning(
        &mut self,
        category: &str,
        message: &str,
        line: Option<usize>,
        entity: Option<&str>,
    ) {
        self.push(Severity::Warning, category, message, line, entity);
    }

    /// Add an error (the offending line was skipped)
    pub fn add_error(
        &mut self,
        category: &str,
        message: &str,
        line: Option<usize>,
        entity: Option<&str>,
    ) {
        self.push(Severity::Error, category, message, line, entity);
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Drop the counters and keep only the issue list.
    pub fn into_diagnostics(self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for issue in self.issues {
            diagnostics.add(issue);
        }
        diagnostics
    }
}

/// Network plus everything noticed while building it.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub network: Network,
    pub diagnostics: ImportDiagnostics,
}
