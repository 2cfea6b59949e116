use tfrefine_core::{extract_blocks, Platform};

const TWO_BLOCKS: &str = r#"
Here is the network layer:

```terraform
provider "aws" {
  region = "us-east-1"
}

resource "aws_vpc" "main" {
  cidr_block = "10.0.0.0/16"
}
```

And the storage layer:

```terraform
resource "aws_s3_bucket" "logs" {
  bucket = "logs"
}
```
"#;

#[test]
fn blocks_are_returned_in_document_order() {
    let blocks = extract_blocks(TWO_BLOCKS, Platform::Aws);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].suggested_name, "aws_aws_vpc");
    assert_eq!(blocks[1].suggested_name, "aws_aws_s3_bucket");
}

#[test]
fn extraction_is_deterministic() {
    let first = extract_blocks(TWO_BLOCKS, Platform::Aws);
    let second = extract_blocks(TWO_BLOCKS, Platform::Aws);
    assert_eq!(first, second);
}

#[test]
fn interior_whitespace_is_trimmed() {
    let out = "```terraform\n\n  resource \"aws_vpc\" \"main\" {}\n\n```";
    let blocks = extract_blocks(out, Platform::Aws);
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].content.starts_with("resource"));
    assert!(blocks[0].content.ends_with('}'));
}

#[test]
fn unterminated_fence_yields_no_block() {
    let out = "```terraform\nresource \"aws_vpc\" \"main\" {}\n";
    assert!(extract_blocks(out, Platform::Aws).is_empty());
}

#[test]
fn block_without_resource_gets_generic_name() {
    let out = "```terraform\nprovider \"google\" {}\n```";
    let blocks = extract_blocks(out, Platform::Gcp);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].suggested_name, "gcp_resource");
}

#[test]
fn duplicate_resource_types_are_both_kept() {
    let out = "```terraform\nresource \"aws_s3_bucket\" \"a\" {}\n```\n\
               ```terraform\nresource \"aws_s3_bucket\" \"b\" {}\n```";
    let blocks = extract_blocks(out, Platform::Aws);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].suggested_name, blocks[1].suggested_name);
    assert_ne!(blocks[0].content, blocks[1].content);
}

#[test]
fn name_uses_first_resource_declaration() {
    let out = "```terraform\n\
               resource \"aws_subnet\" \"a\" {}\n\
               resource \"aws_vpc\" \"b\" {}\n\
               ```";
    let blocks = extract_blocks(out, Platform::Aws);
    assert_eq!(blocks[0].suggested_name, "aws_aws_subnet");
}
