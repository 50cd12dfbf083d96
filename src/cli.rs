use clap::Parser;

#[derive(Parser)]
#[command(name = "sqlite-options")]
#[command(about = "Print the compile-time options of the linked SQLite engine, one per line")]
#[command(version)]
pub struct Cli {}
