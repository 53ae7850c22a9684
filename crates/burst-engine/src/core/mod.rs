pub mod lattice;
pub mod time;
