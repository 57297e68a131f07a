use std::path::Path;

use tracing::warn;

use bump_core::VersionPolicy;
use bump_scan::scan_repository;

use crate::commands::{ScanArgs, error_chain};
use crate::error::Result;
use crate::report::{Outcome, Report};
use crate::repos::discover;

pub(crate) fn run(args: &ScanArgs, checkouts: &Path) -> Result<()> {
    let policy = VersionPolicy::new(&args.policy.target_version, &args.policy.alternate_version)?;
    let repos = discover(checkouts, args.policy.repo.as_deref())?;

    let mut report = Report::new();
    for checkout in repos {
        let outcome = match scan_repository(&checkout.path, &policy) {
            Ok(scan) => Outcome::Classified(scan.classification),
            Err(error) => {
                warn!(repo = %checkout.name, "scan failed, continuing");
                Outcome::Failed(error_chain(&error))
            }
        };
        report.record(checkout.name, outcome);
    }

    print!("{}", report.render());
    Ok(())
}
