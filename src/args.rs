use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Update or create a single key in an env file")]
pub struct Args {
    /// Key name (left-hand side of a KEY=VALUE line)
    pub key: String,

    /// Value to assign to the key
    pub value: String,

    /// Path to the env file
    #[arg(short, long, default_value = ".env", help = "Path to the env file")]
    pub file: String,
}
