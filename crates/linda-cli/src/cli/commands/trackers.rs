//! `linda trackers` – list the recognized tracker types.

use linda_core::TrackerType;

pub fn run_trackers() {
    println!("{:<6} {}", "TYPE", "VENDOR");
    for t in TrackerType::ALL {
        println!("{:<6} {}", t.tag(), t.vendor());
    }
}
