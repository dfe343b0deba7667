//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;
use runner_common::Ensure;

use crate::domain::{Artifact, Finding, Plan};
use crate::output::OutputContext;

/// Section title for artifacts no single instance owns.
pub const SHARED_SECTION: &str = "shared";

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("ghrunner {version}");
    }

    /// Render a compiled plan grouped by instance.
    pub fn render_plan(&self, plan: &Plan) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.header(&format!("Plan ({})", plan.platform));
        for (title, artifacts) in plan_sections(plan) {
            println!();
            self.ctx.header(&format!("{title}:"));
            for artifact in artifacts {
                println!("    {}", self.artifact_line(artifact));
            }
        }
        println!();
        self.ctx.info(&plan_summary(plan));
    }

    fn artifact_line(&self, artifact: &Artifact) -> String {
        let style = match artifact.ensure {
            Ensure::Present => self.ctx.styles.present,
            Ensure::Absent => self.ctx.styles.absent,
        };
        format!(
            "{} {}  {}",
            format!("{:<8}", artifact.ensure.as_str()).style(style),
            format!("{:<13}", artifact.kind()).style(self.ctx.styles.dim),
            artifact.name
        )
    }

    /// Render lint findings; prints a success line when there are none.
    pub fn render_findings(&self, findings: &[Finding]) {
        if findings.is_empty() {
            self.ctx.success("Manifest is valid");
            return;
        }
        for finding in findings {
            match &finding.instance {
                Some(name) => self.ctx.warn(&format!(
                    "{}: {}",
                    name.style(self.ctx.styles.bold),
                    finding.message
                )),
                None => self.ctx.warn(&finding.message),
            }
        }
    }
}

/// Consecutive runs of artifacts with the same owner, titled by instance
/// name or [`SHARED_SECTION`].
#[must_use]
pub fn plan_sections(plan: &Plan) -> Vec<(&str, Vec<&Artifact>)> {
    let mut sections: Vec<(Option<&str>, Vec<&Artifact>)> = Vec::new();
    for artifact in &plan.artifacts {
        let owner = artifact.instance.as_deref();
        if let Some((_, list)) = sections.last_mut().filter(|(current, _)| *current == owner) {
            list.push(artifact);
        } else {
            sections.push((owner, vec![artifact]));
        }
    }
    sections
        .into_iter()
        .map(|(owner, list)| (owner.unwrap_or(SHARED_SECTION), list))
        .collect()
}

/// `"<n> artifacts (<p> present, <a> absent)"`
#[must_use]
pub fn plan_summary(plan: &Plan) -> String {
    let absent = plan
        .artifacts
        .iter()
        .filter(|a| a.ensure == Ensure::Absent)
        .count();
    format!(
        "{} artifacts ({} present, {absent} absent)",
        plan.artifacts.len(),
        plan.artifacts.len() - absent
    )
}
