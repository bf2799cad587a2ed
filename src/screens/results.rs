//! Results screen: the list of matched customers with refresh and detail
//! navigation.

use console::style;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};

use crate::domain::criteria::SearchCriteria;
use crate::domain::customer::Customer;
use crate::repository::CustomerReader;
use crate::schema::DisplayConfig;
use crate::screens::{detail, spinner};
use crate::services::format_list_item;

/// Runs the results list until the user goes back to the search form.
pub async fn run<R>(
    repo: &R,
    display: &DisplayConfig,
    mut customers: Vec<Customer>,
    criteria: &SearchCriteria,
) -> Result<(), dialoguer::Error>
where
    R: CustomerReader,
{
    let theme = ColorfulTheme::default();

    loop {
        println!();
        let count = customers.len();
        let plural = if count == 1 { "" } else { "s" };
        println!("{}", style(format!("{count} customer{plural} found")).bold());
        if customers.is_empty() {
            println!("No customers match your search criteria.");
        }

        let mut items: Vec<String> = customers
            .iter()
            .map(|customer| {
                let item = format_list_item(display, customer);
                format!("{} ({})", item.title, item.subtitle)
            })
            .collect();
        items.push("Refresh".to_string());
        items.push("Back to search".to_string());

        let choice = Select::with_theme(&theme)
            .with_prompt("Select a customer")
            .items(&items)
            .default(0)
            .interact()?;

        if choice < customers.len() {
            detail::run(display, &customers[choice])?;
        } else if choice == customers.len() {
            if let Some(refreshed) = refresh(repo, criteria).await? {
                customers = refreshed;
            }
        } else {
            return Ok(());
        }
    }
}

/// Re-runs the stored criteria. A failure is shown inline with a retry
/// prompt; declining keeps the current list.
async fn refresh<R>(
    repo: &R,
    criteria: &SearchCriteria,
) -> Result<Option<Vec<Customer>>, dialoguer::Error>
where
    R: CustomerReader,
{
    loop {
        let pending = spinner("Refreshing...");
        let result = repo.search(criteria).await;
        pending.finish_and_clear();

        match result {
            Ok(customers) => return Ok(Some(customers)),
            Err(err) => {
                log::error!("Refresh failed: {err}");
                println!("{} {err}", style("Failed to refresh results:").red());
                let retry = Confirm::new()
                    .with_prompt("Retry?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(None);
                }
            }
        }
    }
}
