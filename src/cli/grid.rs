use crate::cipher::playfair;
use crate::error::Result;
use crate::key::Key;

/// Render the 5x5 Playfair square derived from a keyword
pub fn show_grid(keyword: &str) -> Result<String> {
    // Validate through the key constructor so this reports the same
    // errors an encrypt run would
    Key::playfair(keyword)?;
    let grid = playfair::build_grid(keyword);

    let mut output = String::new();
    output.push_str(&format!(
        "Playfair square for keyword {}\n\n",
        keyword.to_ascii_uppercase()
    ));
    for row in grid {
        let cells: Vec<String> = row.iter().map(char::to_string).collect();
        output.push_str(&format!("  {}\n", cells.join(" ")));
    }
    output.push_str("\nI and J share a cell.\n");

    Ok(output)
}
