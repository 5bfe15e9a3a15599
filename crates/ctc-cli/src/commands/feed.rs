use ctc_core::fixtures::{starter_friends, starter_tasks};

pub fn run_tasks() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&starter_tasks())?);
    Ok(())
}

pub fn run_feed() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&starter_friends())?);
    Ok(())
}
