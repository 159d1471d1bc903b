//! Simple inspector for GRids given on the command line.
//!
//! ```text
//! cargo run --example inspect -- grid:A1-2425G-ABC1234002-M A12425GABC1234002Q
//! ```

use grid_id::{Field, Grid};

fn format_part(part: Option<&str>) -> String {
    match part {
        Some(value) => format!("{:?}", value),
        None => "(absent)".to_string(),
    }
}

fn inspect(input: &str) {
    let mut grid = Grid::parse(input);

    println!("\n=== {:?} ===", input);
    println!("ID scheme:       {}", format_part(grid.id_scheme()));
    println!("Issuer code:     {}", format_part(grid.issuer_code()));
    println!("Release number:  {}", format_part(grid.release_number()));
    println!(
        "Check character: {}",
        format_part(grid.check_character().map(String::from).as_deref())
    );
    println!("Compact:         {}", grid);
    println!("Formatted:       {}", grid.formatted());

    if grid.is_valid() {
        println!("Valid");
        return;
    }

    println!("Invalid:");
    for field in Field::ALL {
        if let Some(messages) = grid.errors().messages(field) {
            println!("  {:>15}: {}", field, messages.join(", "));
        }
    }
    if let Some(expected) = grid.expected_check_character() {
        println!("Expected check character: {}", expected);
    }
}

fn main() {
    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inspect("A1-2425G-ABC1234002-M");
        return;
    }
    for input in &inputs {
        inspect(input);
    }
}
