use anyhow::Result;
use socialsim::{Client, seed::SeedReport};

use crate::output::OutputManager;

pub fn handle_seed(client: &Client, output: &OutputManager) -> Result<()> {
    let report = client.seed_defaults()?;
    report_seed(&report, output);
    Ok(())
}

pub fn report_seed(report: &SeedReport, output: &OutputManager) {
    if report.is_empty() {
        output.info("All records already populated; nothing seeded");
        return;
    }
    if report.admin_created {
        output.success("Created the admin profile");
    }
    if report.posts_created > 0 {
        output.success(&format!("Published {} sample posts", report.posts_created));
    }
    if report.reactions_initialized {
        output.success("Initialized an empty reactions record");
    }
}
