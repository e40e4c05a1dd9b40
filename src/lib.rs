#[allow(non_snake_case)]
pub mod Reynolds;
pub mod cli;
pub mod params_manager;
