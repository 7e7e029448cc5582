use log::debug;

use crate::algebra::BoolAlgebra;
use crate::error::{Error, NormalForm};

/// Two-level minimization oracle.
///
/// The oracle is batch-oriented: it accepts several DNF formulas at once and
/// returns a flat collection of reduced covers, normally one per input, each
/// logically equivalent to its formula. A backend that produces several
/// candidate covers for one input may return them all; callers that need a
/// single cover enforce cardinality at the boundary (see [`minimize_dnf`]).
pub trait Minimize<E: BoolAlgebra> {
    fn minimize(&self, engine: &E, batch: &[E::Formula]) -> Vec<E::Formula>;
}

/// Hand one DNF formula to the oracle and take exactly one cover back.
///
/// The input must satisfy the engine's DNF predicate. The call is a blocking,
/// single-shot delegation with no retry: the oracle is deterministic, so a
/// cardinality failure is final.
pub fn minimize_dnf<E, M>(engine: &E, minimizer: &M, dnf: E::Formula) -> Result<E::Formula, Error>
where
    E: BoolAlgebra,
    M: Minimize<E>,
{
    if !engine.is_dnf(&dnf) {
        return Err(Error::NotNormal { form: NormalForm::Dnf });
    }

    debug!("Minimizing DNF...");
    let covers = minimizer.minimize(engine, std::slice::from_ref(&dnf));
    if covers.len() != 1 {
        return Err(Error::CoverCardinality { count: covers.len() });
    }
    Ok(covers.into_iter().next().unwrap())
}
