pub mod analyze;
pub mod gcd;
pub mod show_config;
