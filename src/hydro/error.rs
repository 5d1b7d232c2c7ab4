use std::error;
use std::fmt;

/**
 * Error to represent invalid hydrodynamics data, an inadmissible gas model
 * or mesh, or a failure to load or store a model.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    NegativeGasPressure(f64),
    NonPositiveMassDensity(f64),
    ImaginarySoundSpeed(f64),
    NonFiniteState(usize),
    InvalidModel(String),
    InvalidMesh(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            NegativeGasPressure(p) => write!(fmt, "negative gas pressure: {}", p),
            NonPositiveMassDensity(d) => write!(fmt, "non-positive mass density: {}", d),
            ImaginarySoundSpeed(r) => write!(fmt, "negative sound speed radicand: {}", r),
            NonFiniteState(n) => write!(fmt, "non-finite conserved state at node offset {}", n),
            InvalidModel(what) => write!(fmt, "invalid gas model: {}", what),
            InvalidMesh(what) => write!(fmt, "invalid mesh: {}", what),
            Io(what) => write!(fmt, "model i/o failed: {}", what),
        }
    }
}

impl error::Error for Error {}
