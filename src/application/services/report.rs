//! Cost report service
//!
//! Orchestrates the run: fetch both record sets, build the rooted
//! hierarchy, roll up costs. The caller picks the rendering.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::ApplicationResult;
use crate::domain::{rollup_costs, CompanyTree, TreeBuilder};
use crate::infrastructure::RecordFetcher;

/// Service producing fully valued company trees.
pub struct ReportService {
    fetcher: Arc<dyn RecordFetcher>,
}

impl ReportService {
    /// Create a new report service over the given transport.
    pub fn new(fetcher: Arc<dyn RecordFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch records from both sources, build the tree and compute costs.
    ///
    /// Build-time inconsistencies (dangling parent reference, zero or
    /// multiple roots) abort the run; no partial tree is returned. Travels
    /// owned by an unknown company are dropped and reported at warn level.
    #[instrument(level = "debug", skip(self))]
    pub fn build_report(
        &self,
        companies_source: &str,
        travels_source: &str,
    ) -> ApplicationResult<CompanyTree> {
        let companies = self.fetcher.fetch_companies(companies_source)?;
        let travels = self.fetcher.fetch_travels(travels_source)?;
        debug!(
            companies = companies.len(),
            travels = travels.len(),
            "records fetched"
        );

        let outcome = TreeBuilder::new().build(companies, travels)?;
        if outcome.dropped_travels > 0 {
            warn!(
                dropped = outcome.dropped_travels,
                "travels with unknown owning company were dropped"
            );
        }

        let mut tree = outcome.tree;
        let total = rollup_costs(&mut tree);
        debug!(total, depth = tree.depth(), "cost rollup complete");

        Ok(tree)
    }
}
