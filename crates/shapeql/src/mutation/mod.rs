//! Declarative mutation parameters and their rendering from live instances.

mod mutation_specs;
mod parameter_encoder;
mod parameter_spec;

pub use mutation_specs::MutationSpecs;
pub use parameter_encoder::ParameterEncoder;
pub use parameter_spec::ParameterSpec;

#[cfg(test)]
mod tests;
