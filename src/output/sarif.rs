use crate::audit::AuditReport;
use crate::usage::ActionUsage;
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};

const RULE_DENIED: &str = "allowlist/denied";
const RULE_DEPRECATED: &str = "allowlist/deprecated";

pub fn format(report: &AuditReport) -> String {
    // Rule order is fixed; rule_index values below depend on it.
    let rules = vec![
        descriptor(
            RULE_DENIED,
            "Action is not covered by the approved allowlist",
            "Review the action, then add the reference and exact version pin to the allowlist — or replace the action",
        ),
        descriptor(
            RULE_DEPRECATED,
            "Action uses an approved but deprecated version",
            "Move to a non-deprecated approved version before the pin is removed from the allowlist",
        ),
    ];

    let mut results: Vec<SarifResult> = Vec::new();
    for usage in &report.verdict.denied_usages {
        results.push(result(
            usage,
            RULE_DENIED,
            0,
            ResultLevel::Error,
            &format!(
                "Use of '{}@{}' is denied: not on the approved allowlist",
                usage.action, usage.version
            ),
        ));
    }
    for usage in &report.verdict.deprecated_usages {
        results.push(result(
            usage,
            RULE_DEPRECATED,
            1,
            ResultLevel::Warning,
            &format!(
                "'{}' version '{}' is approved but deprecated",
                usage.action, usage.version
            ),
        ));
    }

    let driver = ToolComponent::builder()
        .name("actions-allowlist")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}

fn descriptor(id: &str, description: &str, help: &str) -> ReportingDescriptor {
    let mut rule = ReportingDescriptor::builder().id(id.to_string()).build();
    rule.short_description = Some(
        MultiformatMessageString::builder()
            .text(description.to_string())
            .build(),
    );
    rule.help = Some(
        MultiformatMessageString::builder()
            .text(help.to_string())
            .build(),
    );
    rule
}

fn result(
    usage: &ActionUsage,
    rule_id: &str,
    rule_index: i64,
    level: ResultLevel,
    message: &str,
) -> SarifResult {
    let mut result = SarifResult::builder()
        .message(Message::builder().text(message.to_string()).build())
        .build();

    result.rule_id = Some(rule_id.to_string());
    result.level = Some(level);
    result.rule_index = Some(rule_index);

    let mut location = Location::builder().build();
    let mut physical = PhysicalLocation::builder().build();
    physical.artifact_location = Some(
        ArtifactLocation::builder()
            .uri(usage.workflow.clone())
            .build(),
    );
    location.physical_location = Some(physical);
    result.locations = Some(vec![location]);

    result
}
