use std::process::exit;

use log::error;

mod cli;

fn main() {
    let cmd = cli::cmd_args::create_cmd_args();
    let matches = cmd.get_matches();

    cli::options::setup_logger(&matches);

    let options = cli::options::parse_options(&matches);

    if let Err(e) = cli::workflow::run(&options) {
        error!("Could not complete conversion, reason: {e}");
        exit(1);
    }
}
