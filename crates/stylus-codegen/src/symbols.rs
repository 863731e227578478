//! Symbol registries filled during the pass.
//!
//! All registries are flat: a name declared anywhere is known everywhere
//! after it, regardless of the scope it was declared in. Only parameter
//! names are scoped, to the callable being rendered.

use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Declaration {
    name: String,
    /// Rendered value; empty while the declaration itself is being rendered.
    value: Option<String>,
}

/// Names and values the emitter has seen so far.
#[derive(Debug, Default)]
pub struct Symbols {
    variables: FxHashSet<String>,
    maps: FxHashSet<String>,
    declarations: Vec<Declaration>,
    params: FxHashSet<String>,
}

impl Symbols {
    pub fn declare_variable(&mut self, name: &str) {
        self.variables.insert(name.to_string());
    }

    pub fn is_variable(&self, name: &str) -> bool {
        self.variables.contains(name)
    }

    pub fn declare_map(&mut self, name: &str) {
        self.maps.insert(name.to_string());
    }

    pub fn is_map(&self, name: &str) -> bool {
        self.maps.contains(name)
    }

    /// Record a declaration whose value is about to be rendered. Returns the
    /// slot to [`settle_declaration`](Self::settle_declaration) once known.
    pub fn push_declaration(&mut self, name: String) -> usize {
        self.declarations.push(Declaration { name, value: None });
        self.declarations.len() - 1
    }

    pub fn settle_declaration(&mut self, slot: usize, value: String) {
        if let Some(decl) = self.declarations.get_mut(slot) {
            decl.value = Some(value);
        }
    }

    /// Most recent rendered value of the declaration `name`.
    pub fn declared_value(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .filter(|d| d.name == name)
            .find_map(|d| d.value.as_deref())
    }

    pub fn enter_params(&mut self, names: impl IntoIterator<Item = String>) {
        self.params = names.into_iter().collect();
    }

    pub fn leave_params(&mut self) {
        self.params.clear();
    }

    pub fn is_param(&self, name: &str) -> bool {
        self.params.contains(name)
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn map_count(&self) -> usize {
        self.maps.len()
    }
}
