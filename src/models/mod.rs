pub mod brownian;
pub mod force;
pub mod model;
