use crate::db::{Database, with_database};
use crate::error::Result;
use crate::models::CompileOption;
use std::io::Write;

/// List the compile-time options of the linked SQLite build.
///
/// Opens a private in-memory database, reads `PRAGMA compile_options` eagerly
/// and closes the connection before returning, also when the query fails.
pub fn list_compile_options() -> Result<Vec<CompileOption>> {
    list_compile_options_with(Database::open_in_memory)
}

pub fn list_compile_options_with<O>(open: O) -> Result<Vec<CompileOption>>
where
    O: FnOnce() -> Result<Database>,
{
    with_database(open, Database::compile_options)
}

/// Write one identifier per line, in the given order
pub fn print_options<W: Write>(out: &mut W, options: &[CompileOption]) -> Result<()> {
    let rendered: String = options
        .iter()
        .map(|option| format!("{option}\n"))
        .collect();

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    run_with(out, Database::open_in_memory)
}

/// Nothing reaches `out` unless the whole list was read.
pub fn run_with<W, O>(out: &mut W, open: O) -> Result<()>
where
    W: Write,
    O: FnOnce() -> Result<Database>,
{
    let options = list_compile_options_with(open)?;
    print_options(out, &options)
}
