use itertools::Itertools;
use varisat::Var;

use crate::clause::Clause;

/// No two of `vars` are true: `(!A + !B) * (!A + !C) * ...`, one clause per unordered pair.
///
/// Produces exactly `k * (k - 1) / 2` clauses for `k` variables, with pairs in the order [`Itertools::tuple_combinations`] yields them.
pub fn at_most_one(vars: &[Var]) -> Vec<Clause> {
    vars.iter()
        .tuple_combinations()
        .map(|(a, b)| vec![a.negative(), b.negative()])
        .collect_vec()
}

/// Exactly one of `vars` is true: [`at_most_one`] followed by the clause `A + B + C + ...`.
///
/// With no variables, the at-least-one clause is empty and the result is unsatisfiable.
pub fn exactly_one(vars: &[Var]) -> Vec<Clause> {
    let mut clauses = Vec::with_capacity(vars.len() * vars.len().saturating_sub(1) / 2 + 1);

    clauses.extend(at_most_one(vars));
    // at least one var is true
    clauses.push(vars.iter().map(|v| v.positive()).collect_vec());

    clauses
}
