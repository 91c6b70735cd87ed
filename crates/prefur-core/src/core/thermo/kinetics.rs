use super::input::{InputError, check_residue_count, check_temperature};
use super::params::AttemptFrequency;
use super::GAS_CONSTANT;

/// Rate constant, in s⁻¹, for crossing a free-energy barrier of `barrier` kJ/mol.
///
/// `k = ν(N)·exp(-ΔG‡ / RT)`. Very high barriers make the exponential underflow to exactly
/// zero; a rate of `0.0` is a legitimate result meaning "slower than `f64` can express".
pub fn rate_constant(
    barrier: f64,
    residue_count: usize,
    temperature: f64,
    frequency: &AttemptFrequency,
) -> Result<f64, InputError> {
    check_residue_count(residue_count)?;
    check_temperature(temperature)?;
    if !barrier.is_finite() || barrier < 0.0 {
        return Err(InputError::Barrier(barrier));
    }

    // Dividing by R before T keeps a zero barrier finite when RT underflows.
    let reduced_barrier = barrier / GAS_CONSTANT / temperature;
    let prefactor = frequency.at(residue_count);
    Ok(prefactor * (-reduced_barrier).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn zero_barrier_returns_attempt_frequency() {
        let nu = AttemptFrequency::default();
        let k = rate_constant(0.0, 100, 298.0, &nu).unwrap();
        assert_eq!(k, nu.at(100));
    }

    #[test]
    fn one_thermal_unit_of_barrier_divides_rate_by_e() {
        let nu = AttemptFrequency::default();
        let rt = GAS_CONSTANT * 300.0;
        let k = rate_constant(rt, 1, 300.0, &nu).unwrap();
        assert!((k / nu.at(1) - (-1.0f64).exp()).abs() < TOLERANCE);
    }

    #[test]
    fn rate_decreases_with_barrier_and_with_chain_length() {
        let nu = AttemptFrequency::default();
        let low = rate_constant(10.0, 50, 298.0, &nu).unwrap();
        let high = rate_constant(20.0, 50, 298.0, &nu).unwrap();
        let longer = rate_constant(10.0, 150, 298.0, &nu).unwrap();
        assert!(high < low);
        assert!(longer < low);
    }

    #[test]
    fn huge_barrier_underflows_to_zero_without_error() {
        let nu = AttemptFrequency::default();
        let k = rate_constant(1.0e6, 10_000, 298.0, &nu).unwrap();
        assert_eq!(k, 0.0);
    }

    #[test]
    fn subnormal_temperature_never_yields_nan() {
        let nu = AttemptFrequency::default();
        let tiny = 5e-324;

        let flat = rate_constant(0.0, 1, tiny, &nu).unwrap();
        assert_eq!(flat, nu.at(1));

        let blocked = rate_constant(1.0, 1, tiny, &nu).unwrap();
        assert_eq!(blocked, 0.0);
    }

    #[test]
    fn rejects_zero_residues() {
        let result = rate_constant(1.0, 0, 298.0, &AttemptFrequency::default());
        assert_eq!(result, Err(InputError::ResidueCount(0)));
    }

    #[test]
    fn rejects_non_positive_temperature() {
        let nu = AttemptFrequency::default();
        assert_eq!(
            rate_constant(1.0, 10, 0.0, &nu),
            Err(InputError::Temperature(0.0))
        );
        assert_eq!(
            rate_constant(1.0, 10, -1.0, &nu),
            Err(InputError::Temperature(-1.0))
        );
    }

    #[test]
    fn rejects_negative_or_non_finite_barrier() {
        let nu = AttemptFrequency::default();
        assert_eq!(
            rate_constant(-0.5, 10, 298.0, &nu),
            Err(InputError::Barrier(-0.5))
        );
        assert!(rate_constant(f64::NAN, 10, 298.0, &nu).is_err());
    }
}
