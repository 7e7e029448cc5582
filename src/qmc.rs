use std::collections::HashMap;

use itertools::Itertools;
use log::debug;
use quine_mc_cluskey::Bool;

use crate::algebra::BoolAlgebra;
use crate::expr::{EVar, Expr, ExprEngine};
use crate::minimize::Minimize;

/// Two-level minimization backed by the `quine-mc_cluskey` crate.
///
/// The crate numbers terms contiguously from zero, so each formula's
/// variables are renumbered by ascending external index before the call and
/// mapped back afterwards. `simplify` returns every equally minimal
/// solution; this backend keeps the first one, so each input formula yields
/// exactly one cover. Formulas are limited to 32 distinct variables.
#[derive(Debug, Default)]
pub struct QmcMinimizer;

impl Minimize<ExprEngine> for QmcMinimizer {
    fn minimize(&self, engine: &ExprEngine, batch: &[Expr]) -> Vec<Expr> {
        let mut covers = Vec::with_capacity(batch.len());
        for f in batch {
            let mut vars = f.variables();
            vars.sort_by_key(|&v| engine.indices(v)[0]);
            assert!(vars.len() <= 32, "quine-mc_cluskey supports at most 32 variables");
            let terms: HashMap<EVar, u8> = vars.iter().enumerate().map(|(i, &v)| (v, i as u8)).collect();

            let solutions = to_bool(f, &terms).simplify();
            debug!("qmc: {} minimal solutions, taking the first", solutions.len());
            covers.extend(solutions.into_iter().next().map(|best| from_bool(&best, &vars)));
        }
        covers
    }
}

fn to_bool(f: &Expr, terms: &HashMap<EVar, u8>) -> Bool {
    match f {
        Expr::Const(true) => Bool::True,
        Expr::Const(false) => Bool::False,
        Expr::Terminal { var, negated } => {
            let term = Bool::Term(terms[var]);
            if *negated {
                Bool::Not(Box::new(term))
            } else {
                term
            }
        }
        Expr::And(args) => Bool::And(args.iter().map(|arg| to_bool(arg, terms)).collect_vec()),
        Expr::Or(args) => Bool::Or(args.iter().map(|arg| to_bool(arg, terms)).collect_vec()),
    }
}

fn from_bool(b: &Bool, vars: &[EVar]) -> Expr {
    match b {
        Bool::True => Expr::Const(true),
        Bool::False => Expr::Const(false),
        Bool::Term(t) => Expr::Terminal {
            var: vars[*t as usize],
            negated: false,
        },
        Bool::Not(arg) => from_bool(arg, vars).negate(),
        Bool::And(args) => Expr::and(args.iter().map(|arg| from_bool(arg, vars))),
        Bool::Or(args) => Expr::or(args.iter().map(|arg| from_bool(arg, vars))),
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_merge_adjacent_cubes() {
        let mut engine = ExprEngine::new();
        let x = engine.mk_var(1);
        let y = engine.mk_var(2);

        // (x & y) | (x & ~y)  =>  x
        let f = engine.or(vec![
            engine.and(vec![engine.var(x), engine.var(y)]),
            engine.and(vec![engine.var(x), engine.not(engine.var(y))]),
        ]);
        let covers = QmcMinimizer.minimize(&engine, &[f]);
        assert_eq!(covers, vec![engine.var(x)]);
    }

    #[test]
    fn test_cover_is_equivalent() {
        let mut engine = ExprEngine::new();
        let x = engine.mk_var(1);
        let y = engine.mk_var(2);
        let z = engine.mk_var(3);

        let f = engine.or(vec![
            engine.and(vec![engine.var(x), engine.var(y), engine.not(engine.var(z))]),
            engine.and(vec![engine.var(x), engine.not(engine.var(y)), engine.var(z)]),
            engine.and(vec![engine.var(x), engine.var(y), engine.var(z)]),
        ]);
        let covers = QmcMinimizer.minimize(&engine, &[f.clone()]);
        assert_eq!(covers.len(), 1);

        for bits in 0..8u32 {
            let assignment = HashMap::from([(x, bits & 1 != 0), (y, bits & 2 != 0), (z, bits & 4 != 0)]);
            assert_eq!(covers[0].eval(&assignment), f.eval(&assignment));
        }
    }

    #[test]
    fn test_tautology_collapses() {
        let mut engine = ExprEngine::new();
        let x = engine.mk_var(1);

        let f = engine.or(vec![engine.var(x), engine.not(engine.var(x))]);
        let covers = QmcMinimizer.minimize(&engine, &[f]);
        assert_eq!(covers, vec![Expr::Const(true)]);
    }

    #[test]
    fn test_batch() {
        let mut engine = ExprEngine::new();
        let x = engine.mk_var(1);
        let y = engine.mk_var(2);

        let f = engine.var(x);
        let g = engine.or(vec![engine.var(y), engine.var(y)]);
        let covers = QmcMinimizer.minimize(&engine, &[f, g]);
        assert_eq!(covers, vec![engine.var(x), engine.var(y)]);
    }
}
