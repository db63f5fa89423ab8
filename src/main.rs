//! rTasklogger main entrypoint.

use rtasklogger::run;
use rtasklogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
