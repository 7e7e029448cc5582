use itertools::Itertools;
use log::debug;

use crate::algebra::BoolAlgebra;
use crate::cnf::{cnf_to_clauses, negate_to_cnf};
use crate::encode::cubes_to_dnf;
use crate::error::Error;
use crate::expr::ExprEngine;
use crate::lit::Lit;
use crate::minimize::{minimize_dnf, Minimize};
use crate::qmc::QmcMinimizer;

/// Run the full pipeline on raw signed-integer cubes.
///
/// The stages run strictly forward: encode the cubes into a DNF formula,
/// hand it to the minimizer oracle, negate the single cover and convert it
/// to CNF, then flatten into canonically ordered clauses. The conjunction
/// of the result is equivalent to the *negation* of the cubes' disjunction.
pub fn cubes_to_clauses<E, M>(engine: &mut E, minimizer: &M, cubes: &[Vec<i32>]) -> Result<Vec<Vec<i32>>, Error>
where
    E: BoolAlgebra,
    M: Minimize<E>,
{
    let (dnf, _var_map) = cubes_to_dnf(engine, cubes)?;
    let cover = minimize_dnf(engine, minimizer, dnf)?;
    let cnf = negate_to_cnf(engine, cover)?;
    cnf_to_clauses(engine, &cnf)
}

/// Minimize a set of "easy" cubes into an equivalent set of clauses, using
/// the bundled engine and minimizer.
pub fn minimize_cubes(cubes: &[Vec<Lit>]) -> Result<Vec<Vec<Lit>>, Error> {
    // Convert to i32-cubes (`Vec<i32>`):
    let cubes = cubes
        .iter()
        .map(|cube| cube.iter().map(|lit| lit.get()).collect_vec())
        .collect_vec();

    let mut engine = ExprEngine::new();
    debug!("Minimizing {} cubes...", cubes.len());
    let clauses = cubes_to_clauses(&mut engine, &QmcMinimizer, &cubes)?;

    // Convert to Lit-clauses (`Vec<Lit>`):
    Ok(clauses
        .into_iter()
        .map(|c| c.into_iter().map(Lit::new).collect_vec())
        .collect_vec())
}
