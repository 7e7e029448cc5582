use std::collections::HashMap;

use itertools::Itertools;
use log::debug;

use crate::algebra::BoolAlgebra;
use crate::error::Error;

/// Mapping from external variable ids to engine handles.
///
/// Built lazily by [`cubes_to_dnf`] as literals are first encountered, and
/// exported alongside the DNF so later stages can resolve handles back.
/// Note that the clause encoder re-derives ids from the engine's own index
/// scheme instead; the map and the indices must agree (see the tests).
#[derive(Debug)]
pub struct VarMap<V> {
    map: HashMap<u32, V>,
}

impl<V: Copy> VarMap<V> {
    fn new() -> Self {
        VarMap { map: HashMap::new() }
    }

    pub fn get(&self, id: u32) -> Option<V> {
        self.map.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, V)> + '_ {
        self.map.iter().map(|(&id, &var)| (id, var))
    }

    fn resolve<E>(&mut self, engine: &mut E, id: u32) -> V
    where
        E: BoolAlgebra<Var = V>,
    {
        *self.map.entry(id).or_insert_with(|| engine.mk_var(id))
    }
}

/// Encode a batch of cubes into a single DNF formula.
///
/// Every cube must list the same variable magnitudes as the first cube, in
/// the same positions; the batch must be non-empty. Literals with negative
/// sign become negated variable references, each cube becomes a conjunction,
/// and the cubes together become one disjunction.
pub fn cubes_to_dnf<E>(engine: &mut E, cubes: &[Vec<i32>]) -> Result<(E::Formula, VarMap<E::Var>), Error>
where
    E: BoolAlgebra,
{
    if cubes.is_empty() {
        return Err(Error::EmptyCubes);
    }

    // The first cube fixes the variable set for the whole batch:
    let variables = cubes[0].iter().map(|lit| lit.unsigned_abs()).collect_vec();
    for (index, cube) in cubes.iter().enumerate() {
        let found = cube.iter().map(|lit| lit.unsigned_abs()).collect_vec();
        if found != variables {
            return Err(Error::CubeVariables {
                index,
                expected: variables,
                found,
            });
        }
    }

    debug!("Converting {} cubes over {} variables into DNF...", cubes.len(), variables.len());

    let mut var_map = VarMap::new();
    let mut cube_formulas = Vec::with_capacity(cubes.len());
    for cube in cubes {
        let mut lits = Vec::with_capacity(cube.len());
        for &lit in cube {
            debug_assert_ne!(lit, 0);
            let var = var_map.resolve(engine, lit.unsigned_abs());
            let f = engine.var(var);
            lits.push(if lit < 0 { engine.not(f) } else { f });
        }
        cube_formulas.push(engine.and(lits));
    }
    let dnf = engine.or(cube_formulas);
    debug_assert!(engine.is_dnf(&dnf));

    Ok((dnf, var_map))
}
