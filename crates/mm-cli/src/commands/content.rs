use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use mm_core::Category;

pub fn run(content: Option<&Path>, export: bool) -> Result<(), String> {
    let pack = super::load_pack(content)?;

    if export {
        let json = pack.to_json().map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let source = match content {
        Some(p) => p.display().to_string(),
        None => "built-in".to_string(),
    };
    println!("  Content pack: {source}");

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Table", "Metal", "Non-Metal", "Total"]);

    let count_items = |c: Category| pack.sort_items.iter().filter(|i| i.category == c).count();
    let count_elements = |c: Category| pack.elements_in(c).count();
    table.add_row(vec![
        "Elements".to_string(),
        count_elements(Category::Metal).to_string(),
        count_elements(Category::NonMetal).to_string(),
        pack.elements.len().to_string(),
    ]);
    table.add_row(vec![
        "Sorting items".to_string(),
        count_items(Category::Metal).to_string(),
        count_items(Category::NonMetal).to_string(),
        pack.sort_items.len().to_string(),
    ]);
    table.add_row(vec![
        "Quiz questions".to_string(),
        "—".to_string(),
        "—".to_string(),
        pack.questions.len().to_string(),
    ]);

    println!("{table}");
    println!();
    println!("  OK");
    Ok(())
}
