use tfrefine_core::{validate_block, Platform};

fn valid_block(provider: &str, resource_type: &str) -> String {
    format!(
        "provider \"{provider}\" {{}}\n\nresource \"{resource_type}\" \"main\" {{}}\n"
    )
}

#[test]
fn block_with_provider_and_resource_is_valid() {
    let verdict = validate_block(&valid_block("aws", "aws_vpc"), Platform::Aws);
    assert!(verdict.passed());
    assert!(verdict.issues.is_empty());
}

#[test]
fn each_platform_requires_its_own_provider_keyword() {
    assert!(validate_block(&valid_block("azurerm", "azurerm_subnet"), Platform::Azure).passed());
    assert!(validate_block(&valid_block("google", "google_compute_network"), Platform::Gcp).passed());
    // Cross-platform provider fails the provider check.
    assert!(!validate_block(&valid_block("aws", "aws_vpc"), Platform::Gcp).passed());
}

#[test]
fn empty_block_reports_exactly_two_issues() {
    // Checks are independent, not short-circuited.
    let verdict = validate_block("", Platform::Azure);
    assert_eq!(verdict.issues.len(), 2);
    assert!(verdict.issues[0].contains("provider"));
    assert!(verdict.issues[1].contains("resource"));
}

#[test]
fn provider_without_resource_is_one_issue() {
    let verdict = validate_block("provider \"aws\" {}", Platform::Aws);
    assert_eq!(verdict.issues.len(), 1);
    assert_eq!(verdict.issues[0], "missing resource block");
}

#[test]
fn resource_without_provider_is_one_issue() {
    let verdict = validate_block("resource \"aws_vpc\" \"main\" {}", Platform::Aws);
    assert_eq!(verdict.issues.len(), 1);
    assert!(verdict.issues[0].contains("provider"));
}

#[test]
fn verdicts_are_stable_across_calls() {
    let content = "resource \"aws_vpc\" \"main\" {}";
    let a = validate_block(content, Platform::Aws);
    let b = validate_block(content, Platform::Aws);
    assert_eq!(a, b);
}
