// Tests for atomic output in the diff and patch workflows
//
// These tests verify:
// 1. A failed apply never creates or truncates the output
// 2. Existing outputs are replaced whole
// 3. No staging files are left behind

use std::fs;

use engine::{DiffOptions, ExitCode, PatchOptions, run_diff, run_patch};
use tempfile::tempdir;

#[test]
fn mismatched_base_leaves_existing_output_untouched() {
    let temp = tempdir().expect("tempdir");
    let base = temp.path().join("base.bin");
    let target = temp.path().join("target.bin");
    let stored = temp.path().join("base.bin.patch");
    let output = temp.path().join("result.bin");
    fs::write(&base, b"original base").expect("write base");
    fs::write(&target, b"original target").expect("write target");
    fs::write(&output, b"previous result").expect("seed output");

    run_diff(&base, &target, &DiffOptions::new().with_output(Some(&stored))).expect("diff");
    fs::write(&base, b"modified base").expect("modify base");

    let err = run_patch(&base, &stored, &PatchOptions::new().with_output(Some(&output)))
        .expect_err("mismatch");
    assert_eq!(err.exit_code(), ExitCode::HashMismatch);
    assert_eq!(fs::read(&output).expect("read output"), b"previous result");
}

#[test]
fn malformed_patch_creates_no_output() {
    let temp = tempdir().expect("tempdir");
    let base = temp.path().join("base.bin");
    let stored = temp.path().join("junk.patch");
    let output = temp.path().join("result.bin");
    fs::write(&base, b"base").expect("write base");
    fs::write(&stored, b"this is not a patch").expect("write patch");

    let err = run_patch(&base, &stored, &PatchOptions::new().with_output(Some(&output)))
        .expect_err("malformed");
    assert_eq!(err.exit_code(), ExitCode::MalformedPatch);
    assert!(!output.exists());
}

#[test]
fn output_is_replaced_whole() {
    let temp = tempdir().expect("tempdir");
    let base = temp.path().join("base.bin");
    let target = temp.path().join("target.bin");
    let stored = temp.path().join("p.patch");
    let output = temp.path().join("result.bin");
    fs::write(&base, b"abc").expect("write base");
    fs::write(&target, b"abd").expect("write target");
    fs::write(&output, vec![b'x'; 4096]).expect("seed output");

    run_diff(&base, &target, &DiffOptions::new().with_output(Some(&stored))).expect("diff");
    run_patch(&base, &stored, &PatchOptions::new().with_output(Some(&output))).expect("patch");
    assert_eq!(fs::read(&output).expect("read output"), b"abd");
}

#[test]
fn no_staging_files_remain() {
    let temp = tempdir().expect("tempdir");
    let base = temp.path().join("base.bin");
    let target = temp.path().join("target.bin");
    let stored = temp.path().join("p.patch");
    fs::write(&base, b"one").expect("write base");
    fs::write(&target, b"two").expect("write target");

    run_diff(&base, &target, &DiffOptions::new().with_output(Some(&stored))).expect("diff");

    let mut names: Vec<_> = fs::read_dir(temp.path())
        .expect("list")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    names.sort();
    assert_eq!(names, ["base.bin", "p.patch", "target.bin"]);
}
