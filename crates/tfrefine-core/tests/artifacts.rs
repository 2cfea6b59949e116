use std::fs;

use tempfile::tempdir;
use tfrefine_core::{extract_blocks, write_artifacts, Platform};

#[test]
fn valid_blocks_are_written_with_sequence_index() {
    let dir = tempdir().expect("tempdir");
    let out = "```terraform\nprovider \"aws\" {}\nresource \"aws_s3_bucket\" \"a\" {}\n```\n\
               ```terraform\nprovider \"aws\" {}\nresource \"aws_s3_bucket\" \"b\" {}\n```";
    let blocks = extract_blocks(out, Platform::Aws);
    let outcome = write_artifacts(&blocks, dir.path(), Platform::Aws).expect("write");

    assert_eq!(outcome.written.len(), 2);
    assert!(outcome.rejected.is_empty());
    // Same inferred name, disambiguated by the 1-based block index.
    assert!(dir.path().join("aws_aws_s3_bucket_1.tf").is_file());
    assert!(dir.path().join("aws_aws_s3_bucket_2.tf").is_file());
}

#[test]
fn invalid_block_is_rejected_not_persisted() {
    let dir = tempdir().expect("tempdir");
    // Provider declaration present, zero resource declarations.
    let out = "```terraform\nprovider \"aws\" {\n  region = \"us-east-1\"\n}\n```";
    let blocks = extract_blocks(out, Platform::Aws);
    assert_eq!(blocks.len(), 1);

    let outcome = write_artifacts(&blocks, dir.path(), Platform::Aws).expect("write");
    assert!(outcome.written.is_empty());
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].issues, vec!["missing resource block"]);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn index_counts_rejected_blocks_too() {
    let dir = tempdir().expect("tempdir");
    let out = "```terraform\nprovider \"aws\" {}\n```\n\
               ```terraform\nprovider \"aws\" {}\nresource \"aws_vpc\" \"main\" {}\n```";
    let blocks = extract_blocks(out, Platform::Aws);
    let outcome = write_artifacts(&blocks, dir.path(), Platform::Aws).expect("write");

    // The valid block is the second in the sequence, so its file carries _2.
    assert_eq!(outcome.written.len(), 1);
    assert!(dir.path().join("aws_aws_vpc_2.tf").is_file());
}

#[test]
fn written_content_matches_block_content() {
    let dir = tempdir().expect("tempdir");
    let out = "```terraform\nprovider \"google\" {}\nresource \"google_compute_network\" \"net\" {}\n```";
    let blocks = extract_blocks(out, Platform::Gcp);
    let outcome = write_artifacts(&blocks, dir.path(), Platform::Gcp).expect("write");

    let saved = fs::read_to_string(&outcome.written[0]).expect("read back");
    assert_eq!(saved, blocks[0].content);
}

#[test]
fn output_directory_is_created_when_absent() {
    let dir = tempdir().expect("tempdir");
    let nested = dir.path().join("artifacts").join("aws");
    let out = "```terraform\nprovider \"aws\" {}\nresource \"aws_vpc\" \"main\" {}\n```";
    let blocks = extract_blocks(out, Platform::Aws);
    let outcome = write_artifacts(&blocks, &nested, Platform::Aws).expect("write");
    assert_eq!(outcome.written.len(), 1);
    assert!(nested.is_dir());
}
