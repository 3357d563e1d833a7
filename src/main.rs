//! # BASIC
//!
//! A line-numbered integer BASIC.
//!

fn main() {
    pretty_env_logger::init();
    std::process::exit(basic::term::main());
}
