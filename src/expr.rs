//! Reference Boolean-algebra engine over owned expression ASTs.
//!
//! Formulas are kept in negation normal form by construction: negation is
//! pushed to the literals, so the AST has no `Not` node. CNF conversion is
//! done by distributing disjunctions over conjunctions, which preserves
//! equivalence over the formula's own variables (no auxiliary variables).

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;

use crate::algebra::BoolAlgebra;

/// Interned variable handle of [`ExprEngine`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct EVar(u32);

impl Display for EVar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Const(bool),
    Terminal { var: EVar, negated: bool },
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

// Constructors
impl Expr {
    pub fn and<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        let args = args.into_iter().map_into::<Self>().collect_vec();
        match args.len() {
            1 => args.into_iter().next().unwrap(),
            _ => Expr::And(args),
        }
    }

    pub fn or<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        let args = args.into_iter().map_into::<Self>().collect_vec();
        match args.len() {
            1 => args.into_iter().next().unwrap(),
            _ => Expr::Or(args),
        }
    }
}

impl From<EVar> for Expr {
    fn from(var: EVar) -> Self {
        Expr::Terminal { var, negated: false }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Const(b) => {
                write!(f, "{}", b)
            }
            Expr::Terminal { var, negated } => {
                write!(f, "{}{}", if *negated { "~" } else { "" }, var)
            }
            Expr::And(args) => {
                write!(f, "({})", args.iter().format(" & "))
            }
            Expr::Or(args) => {
                write!(f, "({})", args.iter().format(" | "))
            }
        }
    }
}

impl Expr {
    /// Push the negation down to the literals (De Morgan).
    pub(crate) fn negate(self) -> Self {
        match self {
            Expr::Const(b) => Expr::Const(!b),
            Expr::Terminal { var, negated } => Expr::Terminal { var, negated: !negated },
            Expr::And(args) => Expr::or(args.into_iter().map(Expr::negate)),
            Expr::Or(args) => Expr::and(args.into_iter().map(Expr::negate)),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Terminal { .. })
    }

    /// A conjunction of literals (or a single literal).
    fn is_cube(&self) -> bool {
        match self {
            Expr::Terminal { .. } => true,
            Expr::And(args) => args.iter().all(Expr::is_literal),
            _ => false,
        }
    }

    /// A disjunction of literals (or a single literal).
    fn is_clause(&self) -> bool {
        match self {
            Expr::Terminal { .. } => true,
            Expr::Or(args) => args.iter().all(Expr::is_literal),
            _ => false,
        }
    }

    pub fn is_dnf(&self) -> bool {
        match self {
            Expr::Or(args) => args.iter().all(Expr::is_cube),
            _ => self.is_cube(),
        }
    }

    pub fn is_cnf(&self) -> bool {
        match self {
            Expr::And(args) => args.iter().all(Expr::is_clause),
            _ => self.is_clause(),
        }
    }

    /// Evaluate under a total assignment of the formula's variables.
    pub fn eval(&self, assignment: &HashMap<EVar, bool>) -> bool {
        match self {
            Expr::Const(b) => *b,
            Expr::Terminal { var, negated } => {
                let value = *assignment.get(var).unwrap_or_else(|| panic!("Assignment does not contain {var}"));
                value ^ *negated
            }
            Expr::And(args) => args.iter().all(|arg| arg.eval(assignment)),
            Expr::Or(args) => args.iter().any(|arg| arg.eval(assignment)),
        }
    }

    /// Distinct variables of the formula, in first-encounter order.
    pub fn variables(&self) -> Vec<EVar> {
        fn walk(f: &Expr, acc: &mut Vec<EVar>) {
            match f {
                Expr::Const(_) => {}
                Expr::Terminal { var, .. } => {
                    if !acc.contains(var) {
                        acc.push(*var);
                    }
                }
                Expr::And(args) | Expr::Or(args) => {
                    for arg in args {
                        walk(arg, acc);
                    }
                }
            }
        }

        let mut acc = Vec::new();
        walk(self, &mut acc);
        acc
    }

    /// The clause structure of the equivalent CNF, by distribution.
    fn distribute(&self) -> Vec<Vec<(EVar, bool)>> {
        match self {
            Expr::Const(_) => panic!("Constants are not supported"),
            Expr::Terminal { var, negated } => vec![vec![(*var, *negated)]],
            Expr::And(args) => args.iter().flat_map(Expr::distribute).collect_vec(),
            Expr::Or(args) => {
                let mut acc: Vec<Vec<(EVar, bool)>> = vec![vec![]];
                for arg in args {
                    let rhs = arg.distribute();
                    acc = acc
                        .iter()
                        .cartesian_product(rhs.iter())
                        .map(|(a, b)| a.iter().chain(b.iter()).copied().collect_vec())
                        .collect_vec();
                }
                acc
            }
        }
    }
}

/// Boolean-algebra engine with interned variables and [`Expr`] formulas.
///
/// Variable handles are interned by external index: `mk_var` with the same
/// index always returns the same handle, so one engine can be reused across
/// pipeline runs without a reset step. Each variable carries exactly one
/// external index (single-register allocation).
#[derive(Debug, Default)]
pub struct ExprEngine {
    vars: Vec<Vec<u32>>,
    interned: HashMap<u32, EVar>,
}

impl ExprEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }
}

impl BoolAlgebra for ExprEngine {
    type Var = EVar;
    type Formula = Expr;

    fn mk_var(&mut self, index: u32) -> EVar {
        assert_ne!(index, 0, "Variable index should not be zero");
        if let Some(&var) = self.interned.get(&index) {
            return var;
        }
        let var = EVar(self.vars.len() as u32);
        self.vars.push(vec![index]);
        self.interned.insert(index, var);
        debug!("mk_var({}) -> {}", index, var);
        var
    }

    fn indices(&self, var: EVar) -> Vec<u32> {
        self.vars[var.0 as usize].clone()
    }

    fn var(&self, var: EVar) -> Expr {
        Expr::Terminal { var, negated: false }
    }

    fn not(&self, f: Expr) -> Expr {
        f.negate()
    }

    fn and(&self, args: Vec<Expr>) -> Expr {
        Expr::and(args)
    }

    fn or(&self, args: Vec<Expr>) -> Expr {
        Expr::or(args)
    }

    fn is_dnf(&self, f: &Expr) -> bool {
        f.is_dnf()
    }

    fn is_cnf(&self, f: &Expr) -> bool {
        f.is_cnf()
    }

    fn to_cnf(&self, f: Expr) -> Expr {
        match f {
            // A constant has no literal CNF; callers check `is_cnf` on the result.
            Expr::Const(_) => f,
            _ => {
                let clauses = f.distribute();
                Expr::and(clauses.into_iter().map(|clause| {
                    // Identical literals within one clause collapse.
                    Expr::or(clause.into_iter().unique().map(|(var, negated)| Expr::Terminal { var, negated }))
                }))
            }
        }
    }

    fn clauses(&self, f: &Expr) -> Vec<Vec<(EVar, bool)>> {
        assert!(f.is_cnf(), "Formula should be in CNF");

        fn clause_lits(clause: &Expr) -> Vec<(EVar, bool)> {
            match clause {
                Expr::Terminal { var, negated } => vec![(*var, *negated)],
                Expr::Or(args) => args
                    .iter()
                    .map(|lit| match lit {
                        Expr::Terminal { var, negated } => (*var, *negated),
                        _ => unreachable!(),
                    })
                    .collect_vec(),
                _ => unreachable!(),
            }
        }

        match f {
            Expr::And(args) => args.iter().map(clause_lits).collect_vec(),
            _ => vec![clause_lits(f)],
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_interning() {
        let mut engine = ExprEngine::new();

        let x = engine.mk_var(5);
        let y = engine.mk_var(7);
        assert_ne!(x, y);
        assert_eq!(engine.mk_var(5), x);
        assert_eq!(engine.num_vars(), 2);

        assert_eq!(engine.indices(x), vec![5]);
        assert_eq!(engine.indices(y), vec![7]);
    }

    #[test]
    fn test_predicates() {
        let mut engine = ExprEngine::new();
        let x = engine.mk_var(1);
        let y = engine.mk_var(2);
        let z = engine.mk_var(3);

        let lit = engine.var(x);
        assert!(lit.is_dnf());
        assert!(lit.is_cnf());

        // A conjunction of literals is both a single cube and a set of unit clauses.
        let cube = engine.and(vec![engine.var(x), engine.not(engine.var(y))]);
        assert!(cube.is_dnf());
        assert!(cube.is_cnf());

        let dnf = engine.or(vec![cube.clone(), engine.var(z)]);
        assert!(dnf.is_dnf());
        assert!(!dnf.is_cnf());

        let clause = engine.or(vec![engine.var(x), engine.var(y)]);
        let cnf = engine.and(vec![clause, engine.not(engine.var(z))]);
        assert!(cnf.is_cnf());
        assert!(!cnf.is_dnf());

        assert!(!Expr::Const(true).is_dnf());
        assert!(!Expr::Const(true).is_cnf());
    }

    #[test]
    fn test_de_morgan() {
        let mut engine = ExprEngine::new();
        let x = engine.mk_var(1);
        let y = engine.mk_var(2);

        let f = engine.not(engine.and(vec![engine.var(x), engine.var(y)]));
        let g = engine.or(vec![engine.not(engine.var(x)), engine.not(engine.var(y))]);
        assert_eq!(f, g);

        let f = engine.not(engine.not(engine.var(x)));
        assert_eq!(f, engine.var(x));
    }

    #[test]
    fn test_to_cnf_distributes() {
        let mut engine = ExprEngine::new();
        let x = engine.mk_var(1);
        let y = engine.mk_var(2);
        let z = engine.mk_var(3);

        // (x & y) | z  =>  (x | z) & (y | z)
        let f = engine.or(vec![engine.and(vec![engine.var(x), engine.var(y)]), engine.var(z)]);
        let cnf = engine.to_cnf(f);
        assert!(cnf.is_cnf());
        assert_eq!(
            engine.clauses(&cnf),
            vec![vec![(x, false), (z, false)], vec![(y, false), (z, false)]]
        );
    }

    #[test]
    fn test_to_cnf_keeps_equivalence() {
        let mut engine = ExprEngine::new();
        let x = engine.mk_var(1);
        let y = engine.mk_var(2);
        let z = engine.mk_var(3);

        let f = engine.or(vec![
            engine.and(vec![engine.var(x), engine.not(engine.var(y))]),
            engine.and(vec![engine.var(y), engine.var(z)]),
        ]);
        let cnf = engine.to_cnf(f.clone());
        assert!(cnf.is_cnf());

        for bits in 0..8u32 {
            let assignment = HashMap::from([(x, bits & 1 != 0), (y, bits & 2 != 0), (z, bits & 4 != 0)]);
            assert_eq!(f.eval(&assignment), cnf.eval(&assignment));
        }
    }

    #[test]
    fn test_eval() {
        let mut engine = ExprEngine::new();
        let x = engine.mk_var(1);
        let y = engine.mk_var(2);

        let f = engine.and(vec![engine.var(x), engine.not(engine.var(y))]);
        assert!(f.eval(&HashMap::from([(x, true), (y, false)])));
        assert!(!f.eval(&HashMap::from([(x, true), (y, true)])));
        assert!(!f.eval(&HashMap::from([(x, false), (y, false)])));
    }
}
