//! Command-line behaviour of the `ref-tracks` binary.

mod common;

use assert_cmd::Command;
use common::{repeat, write_bgzf_indexed_fasta, write_fasta, write_indexed_fasta};
use predicates::prelude::*;
use tempfile::TempDir;

fn ref_tracks() -> Command {
    Command::cargo_bin("ref-tracks").unwrap()
}

fn small_records() -> Vec<(&'static str, String)> {
    vec![
        ("chr1", repeat("GGCCAATT", 250)),
        ("chr2", "PPPACGTPP".to_string()),
    ]
}

fn small_reference(dir: &TempDir) -> std::path::PathBuf {
    write_indexed_fasta(dir, "test.fa", &small_records())
}

#[test]
fn test_contigs_tsv() {
    let dir = TempDir::new().unwrap();
    let path = small_reference(&dir);

    ref_tracks()
        .args(["contigs", "--format", "tsv"])
        .arg(&path)
        .assert()
        .success()
        .stdout("name\tlength\nchr1\t250\nchr2\t9\n");
}

#[test]
fn test_contigs_text_reports_unknown_genome() {
    let dir = TempDir::new().unwrap();
    let path = small_reference(&dir);

    ref_tracks()
        .arg("contigs")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference genome: unknown"))
        .stdout(predicate::str::contains("Naming convention: UCSC"));
}

#[test]
fn test_gc_tsv_rows() {
    let dir = TempDir::new().unwrap();
    let path = small_reference(&dir);

    ref_tracks()
        .args(["gc", "-c", "chr1", "--format", "tsv"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "chrom\tstart\tend\tgc\tat\n\
             chr1\t0\t100\t52\t48\n\
             chr1\t100\t200\t48\t52\n\
             chr1\t200\t250\t26\t24\n",
        );
}

#[test]
fn test_gc_tsv_all_chromosomes_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = small_reference(&dir);

    ref_tracks()
        .args(["gc", "--format", "tsv"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "chrom\tstart\tend\tgc\tat\n\
             chr1\t0\t100\t52\t48\n\
             chr1\t100\t200\t48\t52\n\
             chr1\t200\t250\t26\t24\n\
             chr2\t0\t9\t2\t2\n",
        );
}

#[test]
fn test_gc_from_bgzipped_reference() {
    let dir = TempDir::new().unwrap();
    let path = write_bgzf_indexed_fasta(&dir, "test.fa.gz", &small_records());

    ref_tracks()
        .args(["gc", "-c", "chr1", "--format", "tsv"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "chrom\tstart\tend\tgc\tat\n\
             chr1\t0\t100\t52\t48\n\
             chr1\t100\t200\t48\t52\n\
             chr1\t200\t250\t26\t24\n",
        );

    ref_tracks()
        .args(["mask", "-c", "chr2", "--format", "tsv"])
        .arg(&path)
        .assert()
        .success()
        .stdout("chrom\tstart\tend\nchr2\t0\t3\nchr2\t7\t9\n");
}

#[test]
fn test_gc_json_has_padding_bin() {
    let dir = TempDir::new().unwrap();
    let path = write_indexed_fasta(&dir, "even.fa", &[("chr1", repeat("ACGT", 200))]);

    let output = ref_tracks()
        .args(["gc", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let gc = json[0]["gc"].as_array().unwrap();
    let at = json[0]["at"].as_array().unwrap();
    assert_eq!(gc.len(), 3);
    assert_eq!(at.len(), 3);
    assert_eq!(gc[2], 0);
    assert_eq!(at[2], 0);
}

#[test]
fn test_gc_custom_window() {
    let dir = TempDir::new().unwrap();
    let path = small_reference(&dir);

    ref_tracks()
        .args(["gc", "-c", "chr2", "--window", "4", "--format", "tsv"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "chrom\tstart\tend\tgc\tat\n\
             chr2\t0\t4\t0\t1\n\
             chr2\t4\t8\t2\t1\n\
             chr2\t8\t9\t0\t0\n",
        );
}

#[test]
fn test_gc_zero_window_rejected() {
    let dir = TempDir::new().unwrap();
    let path = small_reference(&dir);

    ref_tracks()
        .args(["gc", "--window", "0"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Window width must be at least 1"));
}

#[test]
fn test_mask_tsv_spans() {
    let dir = TempDir::new().unwrap();
    let path = small_reference(&dir);

    ref_tracks()
        .args(["mask", "--format", "tsv"])
        .arg(&path)
        .assert()
        .success()
        .stdout("chrom\tstart\tend\nchr2\t0\t3\nchr2\t7\t9\n");
}

#[test]
fn test_mask_custom_marker() {
    let dir = TempDir::new().unwrap();
    let path = small_reference(&dir);

    ref_tracks()
        .args(["mask", "-c", "chr2", "--marker", "g", "--format", "tsv"])
        .arg(&path)
        .assert()
        .success()
        .stdout("chrom\tstart\tend\nchr2\t5\t6\n");
}

#[test]
fn test_missing_chromosome_warns_and_fails() {
    let dir = TempDir::new().unwrap();
    let path = small_reference(&dir);

    ref_tracks()
        .args(["mask", "-c", "chr2", "-c", "nonexist_chr", "--format", "tsv"])
        .arg(&path)
        .assert()
        .failure()
        .stdout("chrom\tstart\tend\nchr2\t0\t3\nchr2\t7\t9\n")
        .stderr(predicate::str::contains("Can not find chromosome 'nonexist_chr'"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();

    ref_tracks()
        .arg("gc")
        .arg(dir.path().join("nonexistent_file.fa"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Problem opening file"));
}

#[test]
fn test_missing_index() {
    let dir = TempDir::new().unwrap();
    let path = write_fasta(&dir, "noindex_file.fa", &[("chr1", "ACGT".to_string())]);

    ref_tracks()
        .arg("gc")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index for file"));
}

#[test]
fn test_template_round_trips_through_catalog() {
    let dir = TempDir::new().unwrap();
    let path = small_reference(&dir);

    let output = ref_tracks().arg("template").arg(&path).output().unwrap();
    assert!(output.status.success());

    let template = String::from_utf8(output.stdout).unwrap();
    assert!(template.contains("\"genomes\""));
    assert!(template.contains("FULL NAME"));

    let catalog = dir.path().join("catalog.json");
    std::fs::write(&catalog, template.replace("\"NAME\"", "\"toy\"")).unwrap();

    ref_tracks()
        .arg("contigs")
        .arg("--catalog")
        .arg(&catalog)
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference genome: toy"));
}
