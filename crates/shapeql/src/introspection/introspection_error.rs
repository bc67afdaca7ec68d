use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum IntrospectionError {
    #[error(
        "Nesting below `{type_name}` exceeds the maximum introspection depth \
        of {max_depth}"
    )]
    MaxDepthExceeded {
        max_depth: usize,
        type_name: String,
    },

    #[error("Type cycle detected while introspecting: {}", cycle_path.join(" -> "))]
    TypeCycleDetected {
        cycle_path: Vec<String>,
    },
}
