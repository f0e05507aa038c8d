use super::HistoryMatrix;
use crate::base::{PostError, HISTORY_NCOL, VPSC_CONTROL_FLAG, VPSC_TEMPERATURE};
use std::ffi::OsStr;
use std::fmt::Write;
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::Path;

/// Column labels of the deformation history file
const COLUMN_LABELS: &str = " step         L11         L12         L13         L21         L22         L23         L31         L32         L33         tincr";

/// Writes a deformation history in the fixed-width text format read by VPSC
///
/// The output holds a numeric header line (number of steps, control flag,
/// initial time increment, temperature), a column-label line, and one data
/// line per step. Writing is a pure formatting transform: no value is
/// recomputed, and the same matrix always yields byte-identical text.
pub struct DeformationHistoryWriter {
    /// Deformation control flag for the header
    ictrl: usize,

    /// Test temperature (K) for the header
    temperature: usize,
}

impl DeformationHistoryWriter {
    /// Allocates a new instance with the conventional header constants
    pub fn new() -> Self {
        DeformationHistoryWriter {
            ictrl: VPSC_CONTROL_FLAG,
            temperature: VPSC_TEMPERATURE,
        }
    }

    /// Sets the deformation control flag written to the header
    pub fn set_control_flag(&mut self, ictrl: usize) -> &mut Self {
        self.ictrl = ictrl;
        self
    }

    /// Sets the test temperature (K) written to the header
    pub fn set_temperature(&mut self, temperature: usize) -> &mut Self {
        self.temperature = temperature;
        self
    }

    /// Renders the history into the text layout
    ///
    /// Fails with [PostError::EmptyHistory] if the matrix has no rows.
    pub fn render(&self, history: &HistoryMatrix) -> Result<String, PostError> {
        let nstep = history.nstep();
        if nstep == 0 {
            return Err(PostError::EmptyHistory);
        }
        let mut buffer = String::new();
        write!(
            &mut buffer,
            "{:4}{:4}{:7.4}{:8}         nsteps  ictrl  eqincr  temp\n",
            nstep,
            self.ictrl,
            history.initial_time_increment()?,
            self.temperature
        )
        .unwrap();
        buffer.push_str(COLUMN_LABELS);
        buffer.push('\n');
        for i in 0..nstep {
            write!(&mut buffer, "{:3}", history.mat.get(i, 0) as i64).unwrap();
            for j in 1..HISTORY_NCOL {
                buffer.push(' ');
                buffer.push_str(&format_scientific(history.mat.get(i, j), 12, 4));
            }
            buffer.push('\n');
        }
        Ok(buffer)
    }

    /// Writes the history file, overwriting any previous content in full
    ///
    /// The text is rendered before the file is touched, so a failed render
    /// leaves no partial file behind.
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write<P>(&self, history: &HistoryMatrix, full_path: &P) -> Result<(), PostError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let buffer = self.render(history)?;
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p)?;
        }
        let mut file = File::create(&path)?;
        file.write_all(buffer.as_bytes())?;
        Ok(())
    }
}

/// Formats a number like C's `%w.pe` (lowercase, signed two-digit exponent)
///
/// Rust's `{:e}` neither pads the exponent with zeros nor writes its plus
/// sign, so the exponent part is rebuilt here.
fn format_scientific(num: f64, width: usize, precision: usize) -> String {
    let text = format!("{:.*e}", precision, num);
    let (mantissa, exponent) = text.split_once('e').unwrap();
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("+", exponent),
    };
    format!("{:>width$}", format!("{}e{}{:0>2}", mantissa, sign, digits))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
