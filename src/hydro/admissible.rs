//! Opt-in checks of physical admissibility. The kernel functions never call
//! these: they return non-finite values for inadmissible input instead.
//! Callers that want a hard failure wrap a step with the functions here.

use log::warn;
use super::error::Error;
use super::euler::{Conserved, Primitive, NUM_CONSERVED};
use super::roe::RoeAverage;
use crate::model::Model;
use crate::patch::Patch;




// ============================================================================
impl Conserved {

    /**
     * Convert to primitive variables, failing if the density is not
     * positive or the pressure is negative.
     */
    pub fn to_primitive_checked(&self, model: &Model) -> Result<Primitive, Error> {
        let prim = self.to_primitive(model);

        if self.mass_density() <= 0.0 {
            Err(Error::NonPositiveMassDensity(self.mass_density()))
        } else if prim.gas_pressure() < 0.0 {
            Err(Error::NegativeGasPressure(prim.gas_pressure()))
        } else {
            Ok(prim)
        }
    }
}




/**
 * Check that the Roe-averaged state has a real sound speed.
 */
pub fn check_roe_radicand(roe: &RoeAverage, model: &Model) -> Result<(), Error> {
    let radicand = roe.sound_speed_radicand(model);

    if radicand > 0.0 {
        Ok(())
    } else {
        Err(Error::ImaginarySoundSpeed(radicand))
    }
}




/**
 * Scan every node of a conserved-variable patch, returning the first
 * failure. The offending node is logged at warn level.
 */
pub fn check_patch(patch: &Patch, model: &Model) -> Result<(), Error> {
    assert_eq!(patch.num_fields(), NUM_CONSERVED, "patch does not hold conserved variables");

    for (n, cons) in patch.data().chunks_exact(NUM_CONSERVED).enumerate() {
        let result = if cons.iter().all(|x| x.is_finite()) {
            Conserved::from_slice(cons).to_primitive_checked(model).map(|_| ())
        } else {
            Err(Error::NonFiniteState(n))
        };

        if let Err(e) = result {
            warn!("inadmissible state at node offset {}: {}", n, e);
            return Err(e);
        }
    }
    Ok(())
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::*;
    use crate::index_space::range3d;

    fn model() -> Model {
        Model::ideal_gas(1.4, 1.0).unwrap()
    }

    #[test]
    fn admissible_states_pass() {
        let model = model();
        let u = Primitive::new(1.0, 2.0, 0.0, -1.0, 0.5).to_conserved(&model);
        assert!(u.to_primitive_checked(&model).is_ok());
        let roe = RoeAverage::between(&u, &u, &model);
        assert!(check_roe_radicand(&roe, &model).is_ok());
    }

    #[test]
    fn negative_density_and_pressure_are_reported() {
        let model = model();
        let u = Conserved::new(-1.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(u.to_primitive_checked(&model), Err(Error::NonPositiveMassDensity(-1.0)));

        let u = Conserved::new(0.0, 0.0, 0.0, 0.0, 1.0);
        let e = u.to_primitive_checked(&model).unwrap_err();
        assert_eq!(e, Error::NonPositiveMassDensity(0.0));
        assert_eq!(e.to_string(), "non-positive mass density: 0");

        let u = Conserved::new(1.0, 2.0, 0.0, 0.0, 1.0);
        assert!(matches!(u.to_primitive_checked(&model), Err(Error::NegativeGasPressure(_))));
        let roe = RoeAverage::between(&u, &u, &model);
        assert!(matches!(check_roe_radicand(&roe, &model), Err(Error::ImaginarySoundSpeed(_))));
    }

    #[test]
    fn patch_scan_finds_the_bad_node() {
        let model = model();
        let space = range3d(0..2, 0..2, 0..2);
        let good = Primitive::new(1.0, 0.0, 0.0, 0.0, 1.0).to_conserved(&model);
        let mut patch = Patch::from_slice_function(space, NUM_CONSERVED, |_, u| good.write_to_slice(u));
        assert!(check_patch(&patch, &model).is_ok());

        patch.get_slice_mut((1, 0, 1))[4] = f64::NAN;
        assert_eq!(check_patch(&patch, &model), Err(Error::NonFiniteState(5)));
    }
}
