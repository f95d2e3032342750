use clap::{Command, arg, value_parser};

pub const DICE_CMD: &str = "dice";

pub fn create_dice_cli() -> Command {
    Command::new(DICE_CMD)
        .author("Databio")
        .about("Dice similarity of two count vectors built from index sequences.")
        .arg_required_else_help(true)
        .arg(
            arg!(-n --length <length> "Logical length of both vectors")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(-a <a> "Comma separated indices of the first vector").required(true))
        .arg(arg!(-b <b> "Comma separated indices of the second vector").required(true))
        .arg(
            arg!(--bound <bound> "Lower bound for the early exit")
                .required(false)
                .value_parser(value_parser!(f64)),
        )
}
