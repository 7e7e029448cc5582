//! # cube2cnf: minimized CNF encodings of Boolean cube covers
//!
//! **`cube2cnf`** converts a batch of Boolean *cubes* (conjunctive implicant
//! terms over one shared variable set) into a minimized, canonically ordered
//! CNF clause list, ready for a SAT solver.
//!
//! The pipeline is a single forward pass:
//!
//! 1. encode the signed-integer cubes into a DNF formula,
//! 2. reduce the DNF through a two-level minimization oracle,
//! 3. negate the reduced cover and convert it to CNF,
//! 4. flatten the CNF back into signed-integer clauses, sorted into a
//!    deterministic canonical order.
//!
//! Note the negation in step 3: the conjunction of the output clauses is
//! equivalent to the **negation** of the input cubes' disjunction. This is
//! the encoding needed when the cubes enumerate "easy" assignments that a
//! solver should be steered away from.
//!
//! The Boolean algebra and the minimizer are pluggable: any
//! [`BoolAlgebra`][crate::algebra::BoolAlgebra] engine together with any
//! [`Minimize`][crate::minimize::Minimize] oracle can drive the generic
//! [`cubes_to_clauses`][crate::pipeline::cubes_to_clauses]. The bundled
//! backends are [`ExprEngine`][crate::expr::ExprEngine] (expression ASTs,
//! distribution-based CNF conversion) and
//! [`QmcMinimizer`][crate::qmc::QmcMinimizer] (Quine--McCluskey via the
//! `quine-mc_cluskey` crate).
//!
//! ## Basic Usage
//!
//! ```rust
//! use cube2cnf::lit::Lit;
//! use cube2cnf::pipeline::minimize_cubes;
//!
//! // Two cubes over the variables {1, 2, 3}:
//! //   (x1 & x2 & ~x3) | (x1 & ~x2 & x3)
//! let cubes = vec![
//!     vec![Lit::new(1), Lit::new(2), Lit::new(-3)],
//!     vec![Lit::new(1), Lit::new(-2), Lit::new(3)],
//! ];
//!
//! let clauses = minimize_cubes(&cubes).unwrap();
//!
//! // The conjunction of the clauses is ~((x1 & x2 & ~x3) | (x1 & ~x2 & x3)).
//! let raw: Vec<Vec<i32>> = clauses
//!     .iter()
//!     .map(|c| c.iter().map(|lit| lit.get()).collect())
//!     .collect();
//! assert_eq!(raw.len(), 2);
//! assert!(raw.contains(&vec![-1, -2, 3]));
//! assert!(raw.contains(&vec![-1, 2, -3]));
//! ```

pub mod algebra;
pub mod cnf;
pub mod encode;
pub mod error;
pub mod expr;
pub mod lit;
pub mod minimize;
pub mod pipeline;
pub mod qmc;
