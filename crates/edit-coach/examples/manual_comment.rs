//! Replays a user commenting out three consecutive lines by hand.
//!
//! Run with `RUST_LOG=debug cargo run -p edit-coach --example manual_comment`.

use edit_coach::{
    BuiltinCatalog, Coach, CoachConfig, EvaluatorRegistry, LogSink, ManualClock, RopeBuffer,
};
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let clock = ManualClock::new();
    let mut coach = Coach::from_config(
        &CoachConfig::default(),
        &EvaluatorRegistry::with_defaults(),
        Arc::new(clock.clone()),
        BuiltinCatalog::new(),
        LogSink,
    )?;

    let mut buffer =
        RopeBuffer::from_text("fn main() {\n    let a = 1;\n    let b = 2;\n    let c = 3;\n}\n");

    // Keystrokes a few hundred milliseconds apart.
    for line in 1..4 {
        clock.advance(Duration::from_millis(400));
        let event = buffer.insert_at(line, 4, "//")?;
        for feature in coach.on_edit(&buffer, &event) {
            println!("line {line}: suggested {feature}");
        }
    }

    println!("{}", buffer.get_text());
    Ok(())
}
