mod tables;

pub use self::tables::{comparison as print_comparison, summary as print_summary};

use goodness::error::GdResult;
use goodness::experiment::{ExperimentReport, Reporter};

/// Prints each experiment as it finishes and keeps it for the final summary.
#[derive(Default)]
pub struct TableReporter {
    pub results: Vec<(String, ExperimentReport)>,
}

impl Reporter for TableReporter {
    fn report(&mut self, label: &str, report: &ExperimentReport) -> GdResult<()> {
        print_comparison(label, report);
        self.results.push((label.to_string(), report.clone()));
        Ok(())
    }
}
