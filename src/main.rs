//! classbook main entrypoint.

use classbook::run;
use classbook::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
