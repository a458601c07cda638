// struct to handle line buffered readers

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use log::debug;
use super::error::{Result, ScoreError};

pub struct FileBufferHelper<R: BufRead> {
    pub source_name: String,
    pub buffer_reader: R,
    pub line: String,
    pub line_number: usize,
}

impl FileBufferHelper<BufReader<File>> {
    pub fn open(file: &Path) -> Result<Self> {
        let file_open = File::open(file).map_err(|e| ScoreError::io(file, e))?;
        debug!("FileHelper created for: {:?}", file);
        Ok(Self::new(BufReader::new(file_open), file.display().to_string()))
    }
}

impl<R: BufRead> FileBufferHelper<R> {
    pub fn new(buffer_reader: R, source_name: String) -> Self {
        Self {
            source_name,
            buffer_reader,
            line: String::new(),
            line_number: 0,
        }
    }

    /// Read the next line into `self.line` with the line ending stripped.
    /// Returns false at end of input.
    pub fn next_line(&mut self) -> Result<bool> {
        self.line.clear();
        let read = self
            .buffer_reader
            .read_line(&mut self.line)
            .map_err(|e| ScoreError::io(&self.source_name, e))?;
        if read == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        let trimmed_len = self.line.trim_end_matches(['\n', '\r']).len();
        self.line.truncate(trimmed_len);
        Ok(true)
    }

    pub fn parse_error<M: Into<String>>(&self, message: M) -> ScoreError {
        ScoreError::parse(self.source_name.clone(), self.line_number, message)
    }
}
