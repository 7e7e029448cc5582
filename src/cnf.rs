use itertools::Itertools;
use log::debug;

use crate::algebra::BoolAlgebra;
use crate::error::{Error, NormalForm};

/// Negate the minimized cover and convert it into CNF.
///
/// The engine's conversion is expected to succeed for any finite formula;
/// a result that fails the CNF predicate (e.g. the negation of a constant
/// cover, which has no literal CNF) is reported as a broken invariant
/// rather than passed on.
pub fn negate_to_cnf<E>(engine: &E, cover: E::Formula) -> Result<E::Formula, Error>
where
    E: BoolAlgebra,
{
    let negated = engine.not(cover);
    let cnf = engine.to_cnf(negated);
    if !engine.is_cnf(&cnf) {
        return Err(Error::NotNormal { form: NormalForm::Cnf });
    }
    Ok(cnf)
}

/// Flatten a CNF formula into signed-integer clauses in canonical order.
///
/// Each literal's id is re-derived from the engine's per-variable index
/// facility, taking the *first* index only: the pipeline assumes
/// single-register variable allocation, where every variable carries exactly
/// one index. Literals are sorted by ascending magnitude within each clause,
/// and clauses are sorted by (length, magnitude tuple), which makes the
/// output independent of the engine's clause emission order.
pub fn cnf_to_clauses<E>(engine: &E, cnf: &E::Formula) -> Result<Vec<Vec<i32>>, Error>
where
    E: BoolAlgebra,
{
    if !engine.is_cnf(cnf) {
        return Err(Error::NotNormal { form: NormalForm::Cnf });
    }

    debug!("Converting CNF into clauses...");
    let mut clauses = engine
        .clauses(cnf)
        .into_iter()
        .map(|clause| {
            clause
                .into_iter()
                .map(|(var, negated)| {
                    let index = engine.indices(var)[0] as i32;
                    if negated {
                        -index
                    } else {
                        index
                    }
                })
                .collect_vec()
        })
        .collect_vec();

    // Sort:
    for c in clauses.iter_mut() {
        c.sort_by_key(|lit| lit.unsigned_abs());
    }
    clauses.sort_by_key(|c| (c.len(), c.iter().map(|lit| lit.unsigned_abs()).collect_vec()));

    debug!(
        "Total {} clauses: {} units, {} binary, {} ternary, {} larger",
        clauses.len(),
        clauses.iter().filter(|c| c.len() == 1).count(),
        clauses.iter().filter(|c| c.len() == 2).count(),
        clauses.iter().filter(|c| c.len() == 3).count(),
        clauses.iter().filter(|c| c.len() > 3).count(),
    );
    Ok(clauses)
}
