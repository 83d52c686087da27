//! Indexed FASTA source using noodles.
//!
//! The FASTA file must have a samtools-style index next to it (`<path>.fai`).
//! Index format: `name\tlength\toffset\tline_bases\tline_width`
//!
//! bgzip-compressed files (`.gz`/`.bgz`) are read through their BGZF block
//! index (`<path>.gzi`), as written by `bgzip -i` or `samtools faidx`. Plain
//! gzip has no block structure to seek in and is rejected.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use noodles::bgzf;
use noodles::core::Region;
use noodles::fasta;

use crate::source::{SequenceSource, SourceError};
use crate::utils::validation::check_contig_limit;

/// Gzip member header: ID1 ID2 CM FLG MTIME(4) XFL OS XLEN(2) SI1 SI2
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const GZIP_FLAG_EXTRA: u8 = 0x04;
const BGZF_HEADER_LEN: usize = 14;

/// Path of the `.fai` index that belongs to `path`
pub fn fai_path(path: &Path) -> PathBuf {
    with_suffix(path, ".fai")
}

/// Path of the `.gzi` block index that belongs to a bgzipped `path`
pub fn gzi_path(path: &Path) -> PathBuf {
    with_suffix(path, ".gzi")
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut index = path.as_os_str().to_owned();
    index.push(suffix);
    PathBuf::from(index)
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compression {
    None,
    Bgzf,
    Gzip,
}

/// Classify a `.gz`/`.bgz` file by its first gzip member header.
///
/// Leaves `file` positioned at the start.
fn detect_compression(file: &mut File) -> io::Result<Compression> {
    let mut header = Vec::with_capacity(BGZF_HEADER_LEN);
    file.by_ref()
        .take(BGZF_HEADER_LEN as u64)
        .read_to_end(&mut header)?;
    file.seek(SeekFrom::Start(0))?;

    if !header.starts_with(&GZIP_MAGIC) {
        return Ok(Compression::None);
    }

    let is_bgzf = header.len() == BGZF_HEADER_LEN
        && header[3] & GZIP_FLAG_EXTRA != 0
        && header[12..14] == *b"BC";

    Ok(if is_bgzf {
        Compression::Bgzf
    } else {
        Compression::Gzip
    })
}

/// FASTA with a `.fai` index, uncompressed or bgzipped.
///
/// Reads go through a single indexed reader guarded by a mutex, so one source
/// can serve several threads.
pub struct IndexedFastaSource {
    name: String,
    compressed: bool,
    contigs: Vec<(String, u64)>,
    reader: Mutex<fasta::io::IndexedReader<fasta::io::BufReader<File>>>,
}

impl IndexedFastaSource {
    /// Open `path` and its `.fai` index (plus `.gzi` when bgzipped).
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Path` if the FASTA cannot be opened,
    /// `SourceError::Compressed` for plain gzip input, `SourceError::MissingIndex`
    /// if `<path>.fai` (or `<path>.gzi` for bgzip) does not exist,
    /// `SourceError::Index` if an index cannot be parsed, or
    /// `SourceError::TooManyContigs` if the limit is exceeded.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let path_error = |e: io::Error| SourceError::Path {
            path: path.to_path_buf(),
            source: e,
        };

        let mut file = File::open(path).map_err(path_error)?;

        let compression = if is_gzipped(path) {
            detect_compression(&mut file).map_err(path_error)?
        } else {
            Compression::None
        };

        if compression == Compression::Gzip {
            return Err(SourceError::Compressed {
                path: path.to_path_buf(),
            });
        }

        let index = read_index(path)?;

        let mut contigs = Vec::new();
        for record in index.as_ref() {
            if check_contig_limit(contigs.len()).is_some() {
                return Err(SourceError::TooManyContigs(contigs.len()));
            }
            let name = String::from_utf8_lossy(record.name()).to_string();
            contigs.push((name, record.length()));
        }

        let inner = match compression {
            Compression::Bgzf => {
                let blocks = read_block_index(path)?;
                let reader = bgzf::indexed_reader::Builder::default()
                    .set_index(blocks)
                    .build_from_reader(file)
                    .map_err(path_error)?;
                fasta::io::BufReader::Bgzf(reader)
            }
            Compression::None | Compression::Gzip => {
                fasta::io::BufReader::Uncompressed(BufReader::new(file))
            }
        };

        tracing::debug!(
            path = %path.display(),
            contigs = contigs.len(),
            bgzf = compression == Compression::Bgzf,
            "Opened indexed FASTA"
        );

        Ok(Self {
            name: path.display().to_string(),
            compressed: compression == Compression::Bgzf,
            contigs,
            reader: Mutex::new(fasta::io::IndexedReader::new(inner, index)),
        })
    }

    /// True if the file is bgzipped
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }
}

fn missing_index(path: &Path, index: PathBuf) -> SourceError {
    SourceError::MissingIndex {
        path: path.to_path_buf(),
        index,
    }
}

fn read_index(path: &Path) -> Result<fasta::fai::Index, SourceError> {
    let index_path = fai_path(path);
    if !index_path.is_file() {
        return Err(missing_index(path, index_path));
    }

    let to_index_error = |message: String| SourceError::Index {
        index: index_path.clone(),
        message,
    };

    let reader = File::open(&index_path)
        .map(BufReader::new)
        .map_err(|e| to_index_error(e.to_string()))?;

    fasta::fai::io::Reader::new(reader)
        .read_index()
        .map_err(|e| to_index_error(format!("Failed to parse FAI file: {e}")))
}

fn read_block_index(path: &Path) -> Result<bgzf::gzi::Index, SourceError> {
    let index_path = gzi_path(path);
    if !index_path.is_file() {
        return Err(missing_index(path, index_path));
    }

    bgzf::gzi::read(&index_path).map_err(|e| SourceError::Index {
        message: format!("Failed to parse GZI file: {e}"),
        index: index_path,
    })
}

impl SequenceSource for IndexedFastaSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn contigs(&self) -> Vec<(String, u64)> {
        self.contigs.clone()
    }

    fn fetch(&self, name: &str) -> io::Result<Vec<u8>> {
        let region = Region::new(name, ..);

        let mut reader = self
            .reader
            .lock()
            .map_err(|_| io::Error::other("FASTA reader lock poisoned"))?;

        let record = reader.query(&region)?;
        Ok(record.sequence().as_ref().to_vec())
    }
}

impl std::fmt::Debug for IndexedFastaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedFastaSource")
            .field("name", &self.name)
            .field("compressed", &self.compressed)
            .field("contigs", &self.contigs.len())
            .finish_non_exhaustive()
    }
}
