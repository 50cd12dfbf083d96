pub mod cli;
pub mod db;
pub mod error;
pub mod lister;
pub mod models;

pub use error::{OptionsError, Result};
pub use lister::{list_compile_options, print_options, run};
pub use models::CompileOption;
