use colored::Colorize;

use mm_core::about;

pub fn run() -> Result<(), String> {
    println!("  {} {}", about::APP_NAME.bold(), about::TAGLINE);
    println!("  {}", about::AUDIENCE.dimmed());
    println!();
    println!("  Created by {}", about::CREATOR.bold());
    println!();

    for section in about::STORY {
        println!("  {}", section.title.bold());
        println!("  {}", section.body);
        println!();
    }

    println!("  {}", "My Educational Philosophy".bold());
    for section in about::PHILOSOPHY {
        println!("    • {}: {}", section.title, section.body);
    }
    println!();
    println!("  \"{}\" - {}", about::QUOTE.italic(), about::QUOTE_AUTHOR);
    Ok(())
}
