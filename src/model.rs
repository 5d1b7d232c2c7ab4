use std::io::{Read, Write};
use log::info;
use crate::hydro::error::Error;




#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]


/**
 * Thermodynamic parameters of an ideal gas: the adiabatic index γ, the
 * specific gas constant R, and the specific heat at constant volume cv. A
 * model is read-only once constructed; every kernel function borrows it.
 */
pub struct Model {
    gamma: f64,
    gas_constant: f64,
    specific_heat_volume: f64,
}




// ============================================================================
impl Model {

    /**
     * Create a model, checking that γ > 1 and that R and cv are positive.
     */
    pub fn new(gamma: f64, gas_constant: f64, specific_heat_volume: f64) -> Result<Self, Error> {
        let model = Self { gamma, gas_constant, specific_heat_volume };
        model.validate()?;
        Ok(model)
    }

    /**
     * Create a model for a calorically perfect gas, where cv = R / (γ - 1).
     */
    pub fn ideal_gas(gamma: f64, gas_constant: f64) -> Result<Self, Error> {
        Self::new(gamma, gas_constant, gas_constant / (gamma - 1.0))
    }

    /** Dry air at standard conditions. */
    pub fn air() -> Self {
        Self { gamma: 1.4, gas_constant: 287.058, specific_heat_volume: 287.058 / 0.4 }
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn gas_constant(&self) -> f64 {
        self.gas_constant
    }

    pub fn specific_heat_volume(&self) -> f64 {
        self.specific_heat_volume
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.gamma > 1.0) {
            Err(Error::InvalidModel(format!("adiabatic index must exceed 1, got {}", self.gamma)))
        } else if !(self.gas_constant > 0.0) {
            Err(Error::InvalidModel(format!("gas constant must be positive, got {}", self.gas_constant)))
        } else if !(self.specific_heat_volume > 0.0) {
            Err(Error::InvalidModel(format!("specific heat must be positive, got {}", self.specific_heat_volume)))
        } else {
            Ok(())
        }
    }

    /**
     * Decode a model from CBOR. The decoded model is validated before it is
     * returned.
     */
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let model: Self = ciborium::de::from_reader(reader).map_err(|e| Error::Io(e.to_string()))?;
        model.validate()?;
        info!("loaded gas model: gamma={} R={} cv={}", model.gamma, model.gas_constant, model.specific_heat_volume);
        Ok(model)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        ciborium::ser::into_writer(self, writer).map_err(|e| Error::Io(e.to_string()))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::air()
    }
}
