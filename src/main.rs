//! rFortnight main entrypoint.

use rfortnight::run;
use rfortnight::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
