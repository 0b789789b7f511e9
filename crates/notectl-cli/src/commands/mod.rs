//! Command handlers, one module per subcommand

pub mod delete;
pub mod new;
pub mod show;
