//! Reads a [`DynamicArray`] from whitespace separated text.
//!
//! The format is a length token followed by that many element tokens, e.g. `3\n10 -2 7`. Tokens
//! may be split over any number of lines. Anything after the last announced element is ignored.

use std::io::BufRead;
use std::mem;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::array::DynamicArray;
use crate::error::ReadError;

/// Single-use reader over a text source.
///
/// The first [`read`](ArrayReader::read) consumes the source. Every later call fails with
/// [`ReadError::Exhausted`] until a fresh source is installed with
/// [`set_source`](ArrayReader::set_source).
#[derive(Debug)]
pub struct ArrayReader<R> {
    source: R,
    valid: bool,
}

impl<R: BufRead> ArrayReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            valid: true,
        }
    }

    /// Returns `false` once the current source has been read.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Installs `source` and makes the reader usable again. Returns the previous source.
    pub fn set_source(&mut self, source: R) -> R {
        self.valid = true;
        mem::replace(&mut self.source, source)
    }

    pub fn into_source(self) -> R {
        self.source
    }

    /// Reads the array and returns it together with the announced length.
    ///
    /// The reader is invalidated even if reading fails, a partially consumed source can not be
    /// read again.
    pub fn read<T>(&mut self) -> Result<(DynamicArray<T>, usize), ReadError>
    where
        T: FromStr,
    {
        if !self.valid {
            return Err(ReadError::Exhausted);
        }
        self.valid = false;

        let mut text = String::new();
        self.source.read_to_string(&mut text)?;
        let mut tokens = text.split_whitespace();

        let len_token = tokens.next().ok_or(ReadError::MissingLength)?;
        let len = len_token
            .parse::<usize>()
            .map_err(|_| ReadError::InvalidLength(len_token.to_owned()))?;
        debug!(len, "reading array");

        let mut array = DynamicArray::try_with_capacity(len)?;
        for index in 0..len {
            let token = tokens.next().ok_or(ReadError::Truncated {
                expected: len,
                found: index,
            })?;
            let value = token.parse::<T>().map_err(|_| ReadError::InvalidElement {
                index,
                token: token.to_owned(),
            })?;
            array.push_back(value);
        }

        if tokens.next().is_some() {
            trace!("ignoring trailing tokens");
        }

        Ok((array, len))
    }
}
