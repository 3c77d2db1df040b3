//! absence-report main entrypoint.

use absence_report::run;
use absence_report::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
