//! Detail screen: sections rendered from the display schema.

use console::style;
use dialoguer::Input;

use crate::domain::customer::Customer;
use crate::schema::DisplayConfig;
use crate::services::render_detail;

/// Prints the full customer detail and waits for acknowledgement.
pub fn run(display: &DisplayConfig, customer: &Customer) -> Result<(), dialoguer::Error> {
    println!();
    println!("{}", style(customer.full_name()).bold().underlined());

    for section in render_detail(display, customer) {
        println!();
        println!("{}", style(&section.title).bold());
        for field in &section.fields {
            // Multi-line values stay aligned under their label.
            let value = field.value.replace('\n', "\n    ");
            println!("  {}: {value}", style(&field.label).dim());
        }
    }

    println!();
    Input::<String>::new()
        .with_prompt("Press Enter to go back")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}
