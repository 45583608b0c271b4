use crate::error::{GdResult, GoodnessError};
use crate::hashing::PrimaryHash;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Tokens of `text` separated by ASCII whitespace. Words are raw bytes, so
/// dictionaries in any 8-bit encoding split the same way.
fn tokens(text: &[u8]) -> impl Iterator<Item = &[u8]> {
    text.split(|b| b.is_ascii_whitespace())
        .filter(|w| !w.is_empty())
}

/// Hashes every whitespace-separated token of `text`, in order.
pub fn hash_words<T: AsRef<[u8]>>(text: T, primary: PrimaryHash) -> Vec<u32> {
    tokens(text.as_ref()).map(|w| primary.hash(w)).collect()
}

/// Words read once from a source, re-hashable with any [`PrimaryHash`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Vec<u8>>,
}

impl WordList {
    pub fn from_text<T: AsRef<[u8]>>(text: T) -> Self {
        Self {
            words: tokens(text.as_ref()).map(<[u8]>::to_vec).collect(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GdResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| GoodnessError::DataUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_text(&bytes);
        info!("📚 Loaded {} words from '{}'", list.len(), path.display());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn codes(&self, primary: PrimaryHash) -> Vec<u32> {
        self.words.iter().map(|w| primary.hash(w)).collect()
    }
}

pub fn write_codes<W: Write>(writer: W, codes: &[u32]) -> GdResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for code in codes {
        wtr.write_record([code.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_codes_file<P: AsRef<Path>>(path: P, codes: &[u32]) -> GdResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_codes(file, codes)?;
    debug!("Wrote {} codes to '{}'", codes.len(), path.display());
    Ok(())
}

fn parse_code(token: &str, line: usize) -> GdResult<u32> {
    token
        .parse::<u32>()
        .or_else(|_| token.parse::<i32>().map(|v| v as u32))
        .map_err(|_| GoodnessError::InvalidCode {
            line,
            value: token.to_string(),
        })
}

/// Reads the code file format: one integer per record, in word order.
/// Several whitespace-separated integers per line and negative values (taken
/// as their 32-bit two's complement) are also accepted.
pub fn read_codes<R: Read>(reader: R) -> GdResult<Vec<u32>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut codes = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let line = record.position().map_or(idx + 1, |p| p.line() as usize);
        for field in record.iter() {
            for token in field.split_whitespace() {
                codes.push(parse_code(token, line)?);
            }
        }
    }
    Ok(codes)
}

pub fn read_codes_file<P: AsRef<Path>>(path: P) -> GdResult<Vec<u32>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GoodnessError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    read_codes(file)
}
