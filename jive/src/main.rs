use std::process::ExitCode;

use jive_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    jive_driver::run(&argument)
}
