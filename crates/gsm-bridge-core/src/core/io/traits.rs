use super::error::{ParseErrorKind, QmParseError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for parsing a quantum-chemistry text file.
///
/// Readers carry their own options (for example which line holds the energy),
/// so the methods take `&self`.
pub trait QmReader {
    /// The parsed representation of the file.
    type Output;

    /// Reads and validates the whole file from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is malformed or the reader fails.
    fn read_from(&self, reader: &mut impl BufRead) -> Result<Self::Output, QmParseError>;

    /// Reads the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Self::Output, QmParseError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }
}

/// Defines the interface for emitting a fixed-layout text file.
pub trait QmWriter {
    /// The data written by this format.
    type Input: ?Sized;

    /// Writes `input` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write_to(&self, input: &Self::Input, writer: &mut impl Write) -> io::Result<()>;

    /// Formats `input` into an in-memory buffer without touching the filesystem.
    fn render(&self, input: &Self::Input) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(input, &mut buffer)?;
        Ok(buffer)
    }

    /// Writes `input` to a newly created file at `path`.
    fn write_to_path<P: AsRef<Path>>(&self, input: &Self::Input, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(input, &mut writer)?;
        writer.flush()
    }
}

/// Reads every line up front; the formats handled here are addressed by line
/// position, so the total count is needed before any block can be located.
pub(crate) fn collect_lines(reader: &mut impl BufRead) -> Result<Vec<String>, QmParseError> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            line.map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => {
                    QmParseError::at(idx + 1, ParseErrorKind::InvalidEncoding)
                }
                _ => QmParseError::Io(e),
            })
        })
        .collect()
}
