//! The dual-stream sink.

use std::io::{self, Write};

use super::record::{EmissionRecord, NativeDefine, parameter_line};
use super::template;
use crate::config::Config;

/// Owns the native and foreign output streams for one run.
///
/// Both streams are written append-only. Opening writes the headers; exactly
/// one of [`finalize`](Self::finalize) or [`abandon`](Self::abandon) ends the run.
pub struct DualFileEmitter<N: Write, F: Write> {
    native: N,
    foreign: F,
    native_footer: String,
    foreign_footer: String,
    records: usize,
}

impl<N: Write, F: Write> DualFileEmitter<N, F> {
    /// Take ownership of both sinks and write their headers.
    pub fn open(mut native: N, mut foreign: F, config: &Config) -> io::Result<Self> {
        native.write_all(template::native_header(config).as_bytes())?;
        foreign.write_all(template::foreign_header(config).as_bytes())?;
        Ok(Self {
            native,
            foreign,
            native_footer: template::native_footer(config),
            foreign_footer: template::foreign_footer(config),
            records: 0,
        })
    }

    /// Define a native width symbol. Native stream only.
    pub fn define(&mut self, define: &NativeDefine) -> io::Result<()> {
        self.native.write_all(define.line().as_bytes())
    }

    /// End the block of native defines.
    pub fn separate(&mut self) -> io::Result<()> {
        self.native.write_all(b"\n")
    }

    /// Append `record` to both streams.
    pub fn emit_both(&mut self, record: &EmissionRecord<'_>) -> io::Result<()> {
        self.foreign.write_all(record.foreign_line().as_bytes())?;
        self.native.write_all(record.native_line().as_bytes())?;
        self.records += 1;
        Ok(())
    }

    /// A foreign parameter with no native counterpart.
    pub fn foreign_constant(&mut self, name: &str, value: i64) -> io::Result<()> {
        self.foreign.write_all(parameter_line(name, value).as_bytes())
    }

    /// Number of records written to both streams so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Write both footers, flush, and hand the sinks back.
    pub fn finalize(mut self) -> io::Result<(N, F)> {
        self.native.write_all(self.native_footer.as_bytes())?;
        self.foreign.write_all(self.foreign_footer.as_bytes())?;
        self.native.flush()?;
        self.foreign.flush()?;
        Ok((self.native, self.foreign))
    }

    /// Flush what was written and release both sinks without footers.
    ///
    /// Partial output is left in place.
    pub fn abandon(mut self) -> io::Result<()> {
        let native = self.native.flush();
        let foreign = self.foreign.flush();
        native.and(foreign)
    }
}
