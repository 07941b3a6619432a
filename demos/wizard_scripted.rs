//! Drive the form wizard with canned answers and print the result.

use evoa_notice::form::wizard::{run_wizard, ScriptedPrompter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("E-VOA Notice Generator - Scripted Wizard\n");

    // One answer per prompt; the two references stay blank and get
    // generated on submit. The first empty answer for a required field
    // triggers a re-ask, so "Jane Roe" is preceded by one refusal here.
    let mut prompter = ScriptedPrompter::new([
        "",
        "",
        "",
        "Jane Roe",
        "X1234567X",
        "BKK - Suvarnabhumi Intl.",
        "20/12/2024 at 10:15 AM",
        "SQ706",
        "12/12/2024 09:30 AM",
        "15/12/2024 02:00 PM",
    ]);
    let config = run_wizard(&mut prompter)?;

    println!("Wizard transcript:");
    for line in &prompter.transcript {
        println!("  {line}");
    }

    println!("\nFinal configuration:");
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
