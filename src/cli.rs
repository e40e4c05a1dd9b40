/// interactive terminal menu
pub mod cli_main;
/// menu actions: build from file, reference bearing, template
pub mod cli_reynolds;
