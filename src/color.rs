use std::ops::Range;

use itertools::Itertools;

/// Dense color identifier in `0..num_colors`.
pub type ColorIndex = usize;

/// Maps color symbols to dense [`ColorIndex`]es.
///
/// Indices are handed out in the order symbols are registered, which for parsed puzzles is the order of first appearance in a row-major scan.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ColorRegistry {
    symbols: Vec<char>,
}

impl ColorRegistry {
    /// Return the index of `symbol`, registering it first if it is new.
    pub(crate) fn register(&mut self, symbol: char) -> ColorIndex {
        match self.index_of(symbol) {
            Some(index) => index,
            None => {
                self.symbols.push(symbol);
                self.symbols.len() - 1
            }
        }
    }

    /// Forget the most recently registered symbol.
    pub(crate) fn pop(&mut self) -> Option<char> {
        self.symbols.pop()
    }

    /// The index assigned to `symbol`, if registered.
    pub fn index_of(&self, symbol: char) -> Option<ColorIndex> {
        self.symbols.iter().find_position(|known| **known == symbol).map(|(index, _)| index)
    }

    /// The symbol registered under `index`.
    pub fn symbol(&self, index: ColorIndex) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// The number of registered colors.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no color has been registered.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Every valid [`ColorIndex`], in canonical order.
    pub fn indices(&self) -> Range<ColorIndex> {
        0..self.symbols.len()
    }

    /// `(index, symbol)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorIndex, char)> + '_ {
        self.symbols.iter().copied().enumerate()
    }
}
