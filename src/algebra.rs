use std::fmt::Debug;
use std::hash::Hash;

/// The capabilities the pipeline consumes from a Boolean-algebra engine.
///
/// The engine owns variable allocation and all formula algebra. The pipeline
/// only ever constructs variables, negations, conjunctions and disjunctions,
/// queries the two normal-form predicates, requests one CNF conversion, and
/// reads the flat clause structure back. Anything else the engine can do
/// (simplification, caching, sharing) is its own business.
pub trait BoolAlgebra {
    /// Opaque variable handle. Identity is stable within one engine.
    type Var: Copy + Eq + Hash + Debug;
    /// Formula handle or value.
    type Formula: Clone + Debug;

    /// Create (or look up) the variable with the given external 1-based index.
    ///
    /// Calling `mk_var` twice with the same index must return the same handle.
    fn mk_var(&mut self, index: u32) -> Self::Var;

    /// External indices of a variable, in the engine's stable order.
    ///
    /// The list is never empty. Engines with single-register allocation
    /// (such as [`ExprEngine`][crate::expr::ExprEngine]) return exactly one
    /// index: the one passed to [`mk_var`][BoolAlgebra::mk_var].
    fn indices(&self, var: Self::Var) -> Vec<u32>;

    /// The positive literal of `var` as a formula.
    fn var(&self, var: Self::Var) -> Self::Formula;

    /// Logical negation.
    fn not(&self, f: Self::Formula) -> Self::Formula;

    /// Conjunction of `args`.
    fn and(&self, args: Vec<Self::Formula>) -> Self::Formula;

    /// Disjunction of `args`.
    fn or(&self, args: Vec<Self::Formula>) -> Self::Formula;

    /// Is `f` a flat disjunction of conjunctions of literals?
    ///
    /// Degenerate forms count: a single literal, a single conjunction.
    fn is_dnf(&self, f: &Self::Formula) -> bool;

    /// Is `f` a flat conjunction of disjunctions of literals?
    ///
    /// Degenerate forms count: a single literal, a single disjunction.
    fn is_cnf(&self, f: &Self::Formula) -> bool;

    /// Convert an arbitrary formula into an equivalent CNF.
    ///
    /// The conversion must be equivalence-preserving over the formula's own
    /// variables: no auxiliary variables may be introduced.
    fn to_cnf(&self, f: Self::Formula) -> Self::Formula;

    /// The flat clause structure of a CNF formula, each literal as
    /// `(variable, negated)`.
    ///
    /// Precondition: `is_cnf(f)`.
    fn clauses(&self, f: &Self::Formula) -> Vec<Vec<(Self::Var, bool)>>;
}
