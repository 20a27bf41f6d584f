//! Binary save format for grids.
//!
//! Layout: `rows: u32 LE`, `cols: u32 LE`, then `rows * cols` bytes in
//! row-major order, `0` for dead and `1` for alive. The format carries no
//! version; it is only read back by the same build that wrote it.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Cell, Grid};

/// Upper bound on persisted cell count, rejects absurd headers before allocating
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed grid data: {0}")]
    Format(String),
}

fn read_u32<R: Read>(reader: &mut R, what: &str) -> Result<u32, PersistError> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf).map_err(|e| truncated(e, what))?;
    Ok(u32::from_le_bytes(buf))
}

fn truncated(err: io::Error, what: &str) -> PersistError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        PersistError::Format(format!("stream ends before {what}"))
    } else {
        PersistError::Io(err)
    }
}

/// Write `grid` to `writer`
pub fn save<W: Write>(grid: &Grid, mut writer: W) -> Result<(), PersistError> {
    let (rows, cols) = grid.dimensions();
    let rows = u32::try_from(rows).map_err(|_| PersistError::Format(format!("{rows} rows")))?;
    let cols = u32::try_from(cols).map_err(|_| PersistError::Format(format!("{cols} columns")))?;

    writer.write_all(&rows.to_le_bytes())?;
    writer.write_all(&cols.to_le_bytes())?;
    let bytes: Vec<u8> = grid.cells().iter().map(|cell| cell.to_byte()).collect();
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Read a grid written by [`save`]. Nothing is returned unless the whole
/// stream is well formed.
pub fn load<R: Read>(mut reader: R) -> Result<Grid, PersistError> {
    let rows = read_u32(&mut reader, "row count")? as usize;
    let cols = read_u32(&mut reader, "column count")? as usize;
    if rows == 0 || cols == 0 {
        return Err(PersistError::Format(format!("invalid dimensions {rows}x{cols}")));
    }
    let count = rows
        .checked_mul(cols)
        .filter(|&count| count <= MAX_CELLS)
        .ok_or_else(|| PersistError::Format(format!("dimensions {rows}x{cols} too large")))?;

    let mut bytes = vec![0u8; count];
    reader
        .read_exact(&mut bytes)
        .map_err(|e| truncated(e, "all cells are read"))?;

    let mut trailing = [0u8; 1];
    if reader.read(&mut trailing)? != 0 {
        return Err(PersistError::Format("unexpected data after cells".to_owned()));
    }

    let cells = bytes
        .iter()
        .enumerate()
        .map(|(idx, &byte)| {
            Cell::from_byte(byte)
                .ok_or_else(|| PersistError::Format(format!("invalid cell value {byte} at {idx}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Grid::from_cells(rows, cols, cells)
        .ok_or_else(|| PersistError::Format("cell count does not match dimensions".to_owned()))
}

/// Somewhere a single grid can be saved to and loaded from
pub trait GridStore {
    fn save(&mut self, grid: &Grid) -> Result<(), PersistError>;
    fn load(&self) -> Result<Grid, PersistError>;
}

/// Grid persisted to one file, overwritten on every save
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GridStore for FileStore {
    fn save(&mut self, grid: &Grid) -> Result<(), PersistError> {
        let file = File::create(&self.path)?;
        save(grid, BufWriter::new(file))
    }

    fn load(&self) -> Result<Grid, PersistError> {
        let file = File::open(&self.path)?;
        load(BufReader::new(file))
    }
}

/// In-memory store, holds the bytes of the last save
#[derive(Default)]
pub struct MemoryStore {
    bytes: Option<Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

impl GridStore for MemoryStore {
    fn save(&mut self, grid: &Grid) -> Result<(), PersistError> {
        let mut bytes = Vec::new();
        save(grid, &mut bytes)?;
        self.bytes = Some(bytes);
        Ok(())
    }

    fn load(&self) -> Result<Grid, PersistError> {
        match &self.bytes {
            Some(bytes) => load(bytes.as_slice()),
            None => Err(PersistError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "nothing has been saved",
            ))),
        }
    }
}
