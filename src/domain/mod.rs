// Domain layer: value types and the adder port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
