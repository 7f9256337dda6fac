//! Loading suit and rank domains from plain-text files.
//!
//! A domain file holds one label per line. Surrounding whitespace is ignored
//! and blank lines are skipped. Suits are accepted as full names or
//! single-letter codes (`Spades`, `S`); ranks as digits, codes or names
//! (`10`, `Q`, `Queen`, `A`, `Ace`).

use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;
use std::fs;
use std::path::Path;

use log::debug;

use crate::card::{Rank, Suit};
use crate::error::{DomainError, ParseCardError};

fn parse_lines<T>(text: &str) -> Result<Vec<T>, DomainError>
where
    T: FromStr<Err = ParseCardError>,
{
    let mut labels = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let label = line.trim();
        if label.is_empty() {
            continue;
        }
        let value = label.parse().map_err(|source| DomainError::UnknownLabel {
            line: i + 1,
            label: label.to_string(),
            source,
        })?;
        labels.push(value);
    }

    if labels.is_empty() {
        return Err(DomainError::Empty);
    }
    Ok(labels)
}

fn read(path: &Path) -> Result<String, DomainError> {
    fs::read_to_string(path).map_err(|source| DomainError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a suit domain, one suit per line.
///
/// # Errors
///
/// Returns an error on an unknown label or if no suits are listed.
///
/// # Example
///
/// ```
/// use cardpack::{Suit, domain};
///
/// let suits = domain::parse_suits("Spades\n\nH\n").unwrap();
/// assert_eq!(suits, [Suit::Spades, Suit::Hearts]);
/// ```
pub fn parse_suits(text: &str) -> Result<Vec<Suit>, DomainError> {
    parse_lines(text)
}

/// Parses a rank domain, one rank per line.
///
/// # Errors
///
/// Returns an error on an unknown label or if no ranks are listed.
pub fn parse_ranks(text: &str) -> Result<Vec<Rank>, DomainError> {
    parse_lines(text)
}

/// Reads a suit domain from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_suits<P: AsRef<Path>>(path: P) -> Result<Vec<Suit>, DomainError> {
    let path = path.as_ref();
    let suits = parse_suits(&read(path)?)?;
    debug!("loaded {} suits from {}", suits.len(), path.display());
    Ok(suits)
}

/// Reads a rank domain from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_ranks<P: AsRef<Path>>(path: P) -> Result<Vec<Rank>, DomainError> {
    let path = path.as_ref();
    let ranks = parse_ranks(&read(path)?)?;
    debug!("loaded {} ranks from {}", ranks.len(), path.display());
    Ok(ranks)
}
