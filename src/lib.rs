// define modules in crate
pub mod domain;
pub mod dtos;
pub mod routes;
pub mod state;
pub mod upstream;
