use std::fmt::Write as _;

use bump_core::Classification;

/// What happened to one repository during a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Scanned only, or skipped because the classification was a no-op.
    Classified(Classification),
    Bumped {
        new_version: String,
        sha: Option<String>,
    },
    /// Dry run: the rewrite that a real run would perform.
    WouldBump { new_version: String },
    Excluded,
    DirtyWorkTree,
    /// Operator answered "no" at the confirmation prompt.
    Declined,
    Failed(String),
}

/// Per-repository outcomes of one batch run, in processing order.
#[derive(Debug, Default)]
pub(crate) struct Report {
    entries: Vec<(String, Outcome)>,
}

impl Report {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, name: impl Into<String>, outcome: Outcome) {
        self.entries.push((name.into(), outcome));
    }

    pub(crate) fn render(&self) -> String {
        let mut output = String::new();

        for (name, outcome) in &self.entries {
            let line = match outcome {
                Outcome::Classified(classification) => classification.to_string(),
                Outcome::Bumped {
                    new_version,
                    sha: Some(sha),
                } => format!("bumped to {new_version}, committed {}", short(sha)),
                Outcome::Bumped {
                    new_version,
                    sha: None,
                } => format!("bumped to {new_version}, not committed"),
                Outcome::WouldBump { new_version } => {
                    format!("would bump to {new_version} (dry run)")
                }
                Outcome::Excluded => "excluded by configuration".to_string(),
                Outcome::DirtyWorkTree => "working tree not clean, skipped".to_string(),
                Outcome::Declined => "changes declined at prompt".to_string(),
                Outcome::Failed(reason) => format!("failed: {reason}"),
            };
            let _ = writeln!(output, "{name}: {line}");
        }

        let bumped = self.count(|o| matches!(o, Outcome::Bumped { .. } | Outcome::WouldBump { .. }));
        let failed = self.count(|o| matches!(o, Outcome::Failed(_)));
        let skipped = self.entries.len() - bumped - failed;

        let _ = writeln!(
            output,
            "\n{} repositories: {bumped} bumped, {skipped} skipped, {failed} failed",
            self.entries.len()
        );

        output
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }
}

fn short(sha: &str) -> &str {
    &sha[..sha.len().min(10)]
}
