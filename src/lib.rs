//! Tabulate y = cos²(x) on a uniform grid and write the samples as
//! "x y" lines, one per sample.  The default table covers \[0, 1000\]
//! with a step of 0.001, that is 1 000 001 samples, and is written to
//! `output.txt`.
//!
//! ```no_run
//! use cos2_table::{Table, OUTPUT_FILE};
//! # fn main() -> Result<(), cos2_table::Error> {
//! let n = Table::cos2().write_file(OUTPUT_FILE)?;
//! assert_eq!(n, 1_000_001);
//! # Ok(()) }
//! ```

use std::{fmt::{self, Display, Formatter},
          fs::File,
          hint::black_box,
          io::{self, BufRead, BufReader, BufWriter, Write},
          iter::FusedIterator,
          path::Path};
use tracing::{debug, info};

mod error;
mod repr;

pub use error::{Error, Result};
pub use repr::Repr;

/// Lower bound of the default table.
pub const LOWER: f64 = 0.;
/// Upper bound of the default table.
pub const UPPER: f64 = 1000.;
/// Step of the default table.
pub const STEP: f64 = 0.001;
/// File the default table is written to.
pub const OUTPUT_FILE: &str = "output.txt";

/// The tabulated function: cos²(`x`).  The square is libm's
/// `pow(c, 2)`, not `c * c`; the two differ by 1 ulp for some `x`
/// (e.g. `x = 1.533`).
#[inline]
pub fn cos2(x: f64) -> f64 {
    // `black_box` keeps LLVM from folding `powf(c, 2)` into `c * c`.
    x.cos().powf(black_box(2.))
}

/// A sample (`x`, `y`) of the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Display for Sample {
    /// Write the sample as "x y" where both coordinates use their
    /// shortest round-trip representation (see [`Repr`]).
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{} {}", Repr(self.x), Repr(self.y))
    }
}


////////////////////////////////////////////////////////////////////////
//
// Table

/// Number of samples for the bounds `a`, `b` and `step`.  The quotient
/// is truncated: `0.3 / 0.1` is slightly less than `3` and gives 3
/// samples, not 4.
#[inline]
fn count(a: f64, b: f64, step: f64) -> usize {
    ((b - a) / step) as usize + 1
}

/// Table of `f` on \[`a`, `b`\] with the points `a + i * step`.
pub struct Table<F> {
    f: F,
    a: f64,
    step: f64,
    n: usize,
}

impl Table<fn(f64) -> f64> {
    /// The table of [`cos2`] on \[[`LOWER`], [`UPPER`]\] with step
    /// [`STEP`].
    pub fn cos2() -> Self {
        Table { f: cos2,  a: LOWER,  step: STEP,
                n: count(LOWER, UPPER, STEP) }
    }
}

impl<F> Table<F>
where F: FnMut(f64) -> f64 {
    /// Create the table of `f` on \[`a`, `b`\] with the given `step`.
    /// The number of samples is ⌊(`b` - `a`) / `step`⌋ + 1, computed
    /// in floating point, so the last point may fall slightly short
    /// of `b`.
    ///
    /// Return an error if `a` or `b` is not finite, `b < a`, `step`
    /// is not finite and positive, or the number of samples
    /// overflows.
    pub fn new(f: F, a: f64, b: f64, step: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && a <= b) {
            return Err(Error::InvalidBounds { a, b })
        }
        if !(step.is_finite() && step > 0.) {
            return Err(Error::InvalidStep(step))
        }
        let q = (b - a) / step;
        // `usize::MAX as f64` rounds up to 2⁶⁴.
        if !(q < usize::MAX as f64) {
            return Err(Error::TooManySamples(q))
        }
        let n = count(a, b, step);
        debug!(a, b, step, n, "table parameters");
        Ok(Table { f, a, step, n })
    }
}

impl<F> Table<F> {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize { self.n }

    /// Always `false`: `n ≥ 1` by construction (the sample at `a`).
    #[inline]
    pub fn is_empty(&self) -> bool { false }

    /// The `i`th abscissa, `a + i * step`.  It is computed from the
    /// index (and not accumulated) so rounding errors do not build up.
    #[inline]
    pub fn x(&self, i: usize) -> f64 {
        self.a + i as f64 * self.step
    }
}

impl<F> Table<F>
where F: FnMut(f64) -> f64 {
    /// Iterate on the samples in increasing order of `x`.  `f` is
    /// evaluated lazily, once per sample produced.
    pub fn iter(&mut self) -> Samples<'_, F> {
        Samples { table: self, i: 0 }
    }

    /// Write the table to `f`: each sample is written as "x y" on a
    /// single line (see [`Sample`]'s `Display`).  This format is
    /// compatible with Gnuplot.
    pub fn write(&mut self, f: &mut impl Write) -> Result<(), io::Error> {
        for s in self.iter() {
            write!(f, "{}\n", s)?
        }
        Ok(())
    }

    /// Create (or truncate) the file `path` and write the table to
    /// it.  Return the number of lines written.  On error, a
    /// partially written file may remain.
    pub fn write_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let err = |source: io::Error| Error::OutputWrite {
            path: path.to_path_buf(), source };
        let mut fh = BufWriter::new(File::create(path).map_err(err)?);
        info!(path = %path.display(), n = self.n, "writing table");
        self.write(&mut fh).map_err(err)?;
        // `Drop` ignores flush errors.
        fh.flush().map_err(err)?;
        info!(path = %path.display(), "table written");
        Ok(self.n)
    }
}

/// Iterator on the samples of a [`Table`].
/// See [`Table::iter`] for more information.
pub struct Samples<'a, F> {
    table: &'a mut Table<F>,
    i: usize,
}

impl<'a, F> Iterator for Samples<'a, F>
where F: FnMut(f64) -> f64 {
    type Item = Sample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.table.n { return None }
        let x = self.table.x(self.i);
        self.i += 1;
        Some(Sample { x, y: (self.table.f)(x) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.table.n.saturating_sub(self.i);
        (n, Some(n))
    }

    /// Skipped samples are not evaluated.
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.i = self.i.saturating_add(n);
        self.next()
    }
}

impl<'a, F> ExactSizeIterator for Samples<'a, F>
where F: FnMut(f64) -> f64 {}

impl<'a, F> FusedIterator for Samples<'a, F>
where F: FnMut(f64) -> f64 {}


////////////////////////////////////////////////////////////////////////
//
// Input

/// Read a table written by [`Table::write`] (or any file with two
/// whitespace separated numbers per line).  Blank lines are skipped.
pub fn read(input: impl BufRead) -> Result<Vec<Sample>> {
    let mut samples = vec![];
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let (x, y) = match (fields.next(), fields.next(), fields.next()) {
            (None, _, _) => continue,
            (Some(x), Some(y), None) => (x, y),
            (Some(_), None, _) =>
                return Err(Error::Parse { line: i + 1,
                                          message: "missing y".into() }),
            (Some(_), Some(_), Some(_)) =>
                return Err(Error::Parse { line: i + 1,
                                          message: "expected 2 fields".into() }),
        };
        let num = |s: &str| s.parse::<f64>().map_err(|e| Error::Parse {
            line: i + 1, message: format!("{:?}: {}", s, e) });
        samples.push(Sample { x: num(x)?, y: num(y)? });
    }
    Ok(samples)
}

/// Read the table stored in the file `path`.  See [`read`].
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let err = |source: io::Error| Error::InputRead {
        path: path.to_path_buf(), source };
    let fh = File::open(path).map_err(err)?;
    let samples = read(BufReader::new(fh)).map_err(|e| match e {
        Error::Io(source) => err(source),
        e => e,
    })?;
    debug!(path = %path.display(), n = samples.len(), "table read");
    Ok(samples)
}

/// Left Riemann sum of the samples: Σ (xᵢ₊₁ - xᵢ) yᵢ over consecutive
/// samples.  Return `0.` if there are less than 2 samples.
pub fn area(samples: &[Sample]) -> f64 {
    samples.windows(2).map(|w| (w[1].x - w[0].x) * w[0].y).sum()
}


////////////////////////////////////////////////////////////////////////
//
// Tests
