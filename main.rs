use clap::Parser;
use log::debug;

use guc::cli::Opts;

fn main() {
    let opts = Opts::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(opts.log_filter()))
        .init();

    debug!("adding {} and {}", opts.a, opts.b);
    let sum = opts.sum();
    debug!("sum is {}", sum);
    println!("{}", sum);
}
