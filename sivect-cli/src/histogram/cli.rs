use clap::{ArgGroup, Command, arg, value_parser};

pub const HISTOGRAM_CMD: &str = "histogram";

pub fn create_histogram_cli() -> Command {
    Command::new(HISTOGRAM_CMD)
        .author("Databio")
        .about("Count index occurrences into a sparse vector and print its populated entries.")
        .arg_required_else_help(true)
        .arg(
            arg!(-n --length <length> "Logical length of the vector")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(-s --sequence <sequence> "Comma separated indices").required(false))
        .arg(
            arg!(-f --file <file> "File of whitespace separated indices (can be gzipped)")
                .required(false),
        )
        .group(
            ArgGroup::new("input")
                .args(["sequence", "file"])
                .required(true),
        )
}
