use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use mm_core::{Category, ContentPack, Element};

pub fn run(content: Option<&Path>, name: Option<&str>, category: Option<&str>) -> Result<(), String> {
    let pack = super::load_pack(content)?;

    if let Some(name) = name {
        let element = pack
            .find_element(name)
            .ok_or_else(|| format!("element not found: \"{name}\""))?;
        print_card(element);
        return Ok(());
    }

    let categories = match category {
        Some(c) => vec![c.parse::<Category>()?],
        None => Category::ALL.to_vec(),
    };
    print_tables(&pack, &categories);
    Ok(())
}

fn print_tables(pack: &ContentPack, categories: &[Category]) {
    let mut total = 0;
    for &category in categories {
        println!(
            "  {} {} {}",
            category.badge(),
            category.plural().bold(),
            category.tagline().dimmed()
        );

        let elements: Vec<_> = pack.elements_in(category).collect();
        if elements.is_empty() {
            println!("  No elements.\n");
            continue;
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["", "Name", "Description"]);
        for element in &elements {
            table.add_row(vec![&element.emoji, &element.name, &element.description]);
        }
        println!("{table}");
        println!();
        total += elements.len();
    }
    println!("  {total} elements. Run 'mm learn <name>' for details.");
}

fn print_card(element: &Element) {
    println!(
        "  {} {} [{}]",
        element.emoji,
        element.name.bold(),
        element.category.to_string().dimmed()
    );
    println!();
    println!("  {}", element.description);
    println!();

    if !element.properties.is_empty() {
        println!("  {}", "Properties".bold());
        for property in &element.properties {
            println!("    • {property}");
        }
        println!();
    }

    if !element.fun_fact.is_empty() {
        println!("  {} {}", "Fun fact:".bold(), element.fun_fact);
    }
}
