pub mod chain_controller;
pub mod system_controller;
