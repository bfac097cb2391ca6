use std::collections::HashSet;

use itertools::Itertools;
use varisat::{CnfFormula, ExtendFormula, Lit};

/// A disjunction of literals. DIMACS numbering is available through [`Lit::to_dimacs`].
pub type Clause = Vec<Lit>;

/// An append-only list of clauses which silently drops any clause whose literal multiset was already added.
///
/// Clauses that are logically implied by earlier ones but textually different are kept.
/// The first occurrence keeps the literal order it was pushed with.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClauseList {
    clauses: Vec<Clause>,
    // sorted literal tuples of everything in `clauses`
    seen: HashSet<Vec<Lit>>,
}

impl ClauseList {
    /// Append `clause` unless an identical one (up to literal order) is already present.
    ///
    /// Returns whether the clause was appended.
    pub fn push(&mut self, clause: Clause) -> bool {
        let key = clause.iter().copied().sorted().collect_vec();
        if !self.seen.insert(key) {
            return false;
        }

        self.clauses.push(clause);
        true
    }

    /// Number of distinct clauses held.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The clauses in insertion order.
    pub fn as_slice(&self) -> &[Clause] {
        &self.clauses
    }
}

impl Extend<Clause> for ClauseList {
    fn extend<T: IntoIterator<Item = Clause>>(&mut self, iter: T) {
        for clause in iter {
            self.push(clause);
        }
    }
}

/// The CNF encoding of one puzzle: the two clause groups, in canonical order, and the size of the variable space.
///
/// Satisfying assignments of the conjunction of both groups correspond to the puzzle's solutions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Encoding {
    pub(crate) color_clauses: ClauseList,
    pub(crate) direction_clauses: ClauseList,
    pub(crate) color_variable_count: usize,
    pub(crate) direction_variable_count: usize,
}

impl Encoding {
    /// Clauses constraining which color each cell holds.
    pub fn color_clauses(&self) -> &[Clause] {
        self.color_clauses.as_slice()
    }

    /// Clauses choosing a direction type per non-endpoint cell and linking it to neighbor colors.
    pub fn direction_clauses(&self) -> &[Clause] {
        self.direction_clauses.as_slice()
    }

    /// All clauses: color clauses first, then direction clauses.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.color_clauses().iter().chain(self.direction_clauses())
    }

    /// Number of color variables, which occupy ids `1..=color_variable_count`.
    pub fn color_variable_count(&self) -> usize {
        self.color_variable_count
    }

    /// Number of direction variables, which follow the color variables.
    pub fn direction_variable_count(&self) -> usize {
        self.direction_variable_count
    }

    /// The maximum variable id, as written in a DIMACS header.
    pub fn variable_count(&self) -> usize {
        self.color_variable_count + self.direction_variable_count
    }

    /// Total number of clauses across both groups.
    pub fn clause_count(&self) -> usize {
        self.color_clauses.len() + self.direction_clauses.len()
    }

    /// Hand the encoding to `varisat` or anything else that consumes a [`CnfFormula`].
    ///
    /// The formula's variable count is [`Self::variable_count`] even if the highest variables occur in no clause.
    pub fn to_formula(&self) -> CnfFormula {
        let mut formula = CnfFormula::new();
        formula.set_var_count(self.variable_count());
        for clause in self.clauses() {
            formula.add_clause(clause);
        }

        formula
    }

    /// Whether `assignment` satisfies every clause, where `assignment[i]` is the value of the variable with index `i` (DIMACS id `i + 1`).
    ///
    /// Variables beyond the end of `assignment` count as false.
    pub fn is_satisfied_by(&self, assignment: &[bool]) -> bool {
        self.clauses().all(|clause| clause_satisfied(clause, assignment))
    }
}

/// Whether at least one literal of `clause` is true under `assignment`; see [`Encoding::is_satisfied_by`].
pub fn clause_satisfied(clause: &[Lit], assignment: &[bool]) -> bool {
    clause.iter().any(|lit| {
        let value = assignment.get(lit.var().index()).copied().unwrap_or(false);
        value == lit.is_positive()
    })
}
