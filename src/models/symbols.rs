//! # models::symbols
//!
//! The fixed symbol universe `SYM001` … `SYM120`.

/// Number of simulated symbols.
pub const SYMBOL_COUNT: usize = 120;

/// Immutable, ordered list of symbols. Built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolUniverse {
    symbols: Vec<String>,
}

impl SymbolUniverse {
    /// `SYM` + zero-padded index, 1 through [`SYMBOL_COUNT`], ascending.
    pub fn new() -> Self {
        let symbols = (1..=SYMBOL_COUNT).map(|i| format!("SYM{i:03}")).collect();
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl Default for SymbolUniverse {
    fn default() -> Self {
        Self::new()
    }
}
