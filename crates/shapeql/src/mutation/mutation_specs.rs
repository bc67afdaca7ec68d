use crate::mutation::ParameterSpec;
use indexmap::IndexMap;

/// The mutations a [`MutableType`](crate::MutableType) supports, each with
/// its ordered parameter list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MutationSpecs {
    mutations: IndexMap<String, Vec<ParameterSpec>>,
}
impl MutationSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the parameter list for `mutation_name`.
    pub fn add_mutation(
        mut self,
        mutation_name: impl Into<String>,
        parameters: Vec<ParameterSpec>,
    ) -> Self {
        self.mutations.insert(mutation_name.into(), parameters);
        self
    }

    pub fn get(&self, mutation_name: &str) -> Option<&[ParameterSpec]> {
        self.mutations
            .get(mutation_name)
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    pub fn mutation_names(&self) -> impl Iterator<Item = &str> {
        self.mutations.keys().map(String::as_str)
    }
}
