use super::euler::Conserved;
use super::geometry::{Direction, Vector3d};
use crate::model::Model;




/**
 * The Roe-averaged state at the face between two nodes: velocity, specific
 * total enthalpy, and the sound speed derived from them. The averaged
 * density is not needed by the eigenstructure and is not computed.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoeAverage {
    velocity: Vector3d,
    total_enthalpy: f64,
    sound_speed: f64,
}




// ============================================================================
impl RoeAverage {

    /**
     * Form the Roe average of two conserved states. The weight is `D =
     * sqrt(ρr / ρl)` and each averaged quantity is `(φl + D φr) / (1 + D)`.
     * The sound speed `sqrt((γ - 1)(hT - |v|²/2))` is NaN when the averaged
     * enthalpy falls below the kinetic energy; that is not checked here.
     */
    pub fn between(left: &Conserved, right: &Conserved, model: &Model) -> Self {
        let gamma = model.gamma();

        let rho_l = left.mass_density();
        let rho_r = right.mass_density();
        let d = (rho_r / rho_l).sqrt();
        let average = |l: f64, r: f64| (l + d * r) / (1.0 + d);

        let u = average(left.momentum_1() / rho_l, right.momentum_1() / rho_r);
        let v = average(left.momentum_2() / rho_l, right.momentum_2() / rho_r);
        let w = average(left.momentum_3() / rho_l, right.momentum_3() / rho_r);
        let ht = average(left.total_enthalpy(model), right.total_enthalpy(model));
        let c = ((gamma - 1.0) * (ht - 0.5 * (u * u + v * v + w * w))).sqrt();

        Self {
            velocity: Vector3d::new(u, v, w),
            total_enthalpy: ht,
            sound_speed: c,
        }
    }

    /**
     * Construct an averaged state directly from its parts. Useful when the
     * face state comes from somewhere other than two grid nodes.
     */
    pub fn from_parts(velocity: Vector3d, total_enthalpy: f64, sound_speed: f64) -> Self {
        Self { velocity, total_enthalpy, sound_speed }
    }

    pub fn velocity(&self) -> Vector3d {
        self.velocity
    }

    pub fn normal_velocity(&self, direction: Direction) -> f64 {
        self.velocity.component(direction)
    }

    pub fn total_enthalpy(&self) -> f64 {
        self.total_enthalpy
    }

    pub fn sound_speed(&self) -> f64 {
        self.sound_speed
    }

    /**
     * Return the specific kinetic energy of the averaged velocity, `q =
     * |v|² / 2`.
     */
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.velocity.norm_squared()
    }

    /**
     * Return the quantity under the square root of the sound speed, `(γ - 1)
     * (hT - q)`. It must be positive for the averaged state to be physical.
     */
    pub fn sound_speed_radicand(&self, model: &Model) -> f64 {
        (model.gamma() - 1.0) * (self.total_enthalpy - self.kinetic_energy())
    }
}




/**
 * Compute the Roe average between the nodes at scalar offsets `left` and
 * `right` in the conserved buffer `u`.
 */
pub fn compute_roe_average(u: &[f64], left: usize, right: usize, model: &Model) -> RoeAverage {
    RoeAverage::between(&Conserved::at(u, left), &Conserved::at(u, right), model)
}




// ============================================================================
#[cfg(test)]
mod test {

    use approx::assert_relative_eq;
    use super::{compute_roe_average, RoeAverage};
    use crate::hydro::euler::{Primitive, NUM_CONSERVED};
    use crate::hydro::geometry::Direction;
    use crate::model::Model;

    fn model() -> Model {
        Model::ideal_gas(1.4, 1.0).unwrap()
    }

    #[test]
    fn average_of_identical_states_is_that_state() {
        let model = model();
        let p = Primitive::new(1.7, 0.3, -0.8, 1.2, 2.2);
        let u = p.to_conserved(&model);
        let roe = RoeAverage::between(&u, &u, &model);
        assert_relative_eq!(roe.normal_velocity(Direction::X), 0.3, max_relative = 1e-12);
        assert_relative_eq!(roe.normal_velocity(Direction::Y), -0.8, max_relative = 1e-12);
        assert_relative_eq!(roe.normal_velocity(Direction::Z), 1.2, max_relative = 1e-12);
        assert_relative_eq!(roe.sound_speed(), p.sound_speed_squared(&model).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn quiescent_gas_has_the_adiabatic_sound_speed() {
        let model = model();
        let u = Primitive::new(1.0, 0.0, 0.0, 0.0, 1.0).to_conserved(&model);
        let roe = RoeAverage::between(&u, &u, &model);
        assert_relative_eq!(roe.sound_speed(), 1.4f64.sqrt(), max_relative = 1e-12);
        assert_eq!(roe.kinetic_energy(), 0.0);
    }

    #[test]
    fn weight_favors_the_denser_side() {
        let model = model();
        let l = Primitive::new(1.0, 1.0, 0.0, 0.0, 1.0).to_conserved(&model);
        let r = Primitive::new(4.0, 4.0, 0.0, 0.0, 1.0).to_conserved(&model);
        let roe = RoeAverage::between(&l, &r, &model);

        // D = 2, so u = (1 + 2 * 4) / 3
        assert_relative_eq!(roe.normal_velocity(Direction::X), 3.0, max_relative = 1e-12);
    }

    #[test]
    fn buffer_offsets_select_the_two_nodes() {
        let model = model();
        let a = Primitive::new(1.0, 1.0, 0.0, 0.0, 1.0).to_conserved(&model);
        let b = Primitive::new(1.0, 2.0, 0.0, 0.0, 1.0).to_conserved(&model);
        let mut u = vec![0.0; 2 * NUM_CONSERVED];
        a.write_to_slice(&mut u[..NUM_CONSERVED]);
        b.write_to_slice(&mut u[NUM_CONSERVED..]);
        let roe = compute_roe_average(&u, 0, NUM_CONSERVED, &model);
        assert_relative_eq!(roe.normal_velocity(Direction::X), 1.5, max_relative = 1e-12);
        assert!(roe.sound_speed_radicand(&model) > 0.0);
    }

    #[test]
    fn unphysical_enthalpy_gives_nan_sound_speed() {
        let model = model();
        let u = crate::hydro::euler::Conserved::new(1.0, 2.0, 0.0, 0.0, 1.0);
        let roe = RoeAverage::between(&u, &u, &model);
        assert!(roe.sound_speed_radicand(&model) < 0.0);
        assert!(roe.sound_speed().is_nan());
    }
}
