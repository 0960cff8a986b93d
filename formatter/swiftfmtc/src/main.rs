//! swiftfmt command-line driver.

mod fmt;
mod tracing_setup;

fn main() {
    tracing_setup::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(fmt::run(&args));
}
