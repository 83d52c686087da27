//! Shared fixtures: small indexed FASTA files on disk.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use noodles::bgzf;
use tempfile::TempDir;

pub const LINE_BASES: usize = 60;

/// Index path samtools would use for `path`
pub fn fai_path(path: &Path) -> PathBuf {
    let mut index = path.as_os_str().to_owned();
    index.push(".fai");
    PathBuf::from(index)
}

/// Block index path bgzip would use for `path`
pub fn gzi_path(path: &Path) -> PathBuf {
    let mut index = path.as_os_str().to_owned();
    index.push(".gzi");
    PathBuf::from(index)
}

/// `records` as FASTA text wrapped at 60 bases
fn fasta_bytes(records: &[(&str, String)]) -> Vec<u8> {
    let mut fasta = Vec::new();
    for (name, seq) in records {
        writeln!(fasta, ">{name}").unwrap();
        for line in seq.as_bytes().chunks(LINE_BASES) {
            fasta.write_all(line).unwrap();
            fasta.write_all(b"\n").unwrap();
        }
    }
    fasta
}

fn write_fai(path: &Path, records: &[(&str, String)]) {
    let mut fai = File::create(fai_path(path)).unwrap();
    let mut offset = 0;
    for (name, seq) in records {
        offset += name.len() + 2; // '>' + name + '\n'
        writeln!(fai, "{name}\t{}\t{offset}\t{LINE_BASES}\t{}", seq.len(), LINE_BASES + 1).unwrap();
        offset += seq.len() + seq.len().div_ceil(LINE_BASES);
    }
}

/// Write `records` as a FASTA wrapped at 60 bases, with a `.fai` next to it
pub fn write_indexed_fasta(dir: &TempDir, file_name: &str, records: &[(&str, String)]) -> PathBuf {
    let path = write_fasta(dir, file_name, records);
    write_fai(&path, records);
    path
}

/// Write `records` as a FASTA without an index
pub fn write_fasta(dir: &TempDir, file_name: &str, records: &[(&str, String)]) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, fasta_bytes(records)).unwrap();
    path
}

/// Write `records` bgzipped, with `.fai` and `.gzi` next to it.
///
/// The text must fit in one BGZF block (under 64 KiB) so the `.gzi` stays empty.
pub fn write_bgzf_indexed_fasta(
    dir: &TempDir,
    file_name: &str,
    records: &[(&str, String)],
) -> PathBuf {
    let path = dir.path().join(file_name);
    let fasta = fasta_bytes(records);
    assert!(fasta.len() < 0xff00, "fixture does not fit in one BGZF block");

    let mut writer = bgzf::Writer::new(File::create(&path).unwrap());
    writer.write_all(&fasta).unwrap();
    writer.finish().unwrap();

    write_fai(&path, records);
    std::fs::write(gzi_path(&path), 0u64.to_le_bytes()).unwrap();
    path
}

/// `unit` repeated until `length` bases
pub fn repeat(unit: &str, length: usize) -> String {
    unit.chars().cycle().take(length).collect()
}
