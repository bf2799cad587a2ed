//! Search screen: the configuration-driven form plus submission handling.

use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::domain::criteria::SearchCriteria;
use crate::domain::customer::Customer;
use crate::forms::{InputMode, SearchForm, field_prompt};
use crate::repository::CustomerReader;
use crate::schema::SearchConfig;
use crate::screens::{alert, spinner};

/// Snapshot handed to the results screen: the matched customers and the
/// criteria that produced them (kept for refresh).
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub customers: Vec<Customer>,
    pub criteria: SearchCriteria,
}

/// Runs the search form until a search succeeds or the user quits.
/// Returns `None` on quit.
pub async fn run<R>(
    repo: &R,
    config: &SearchConfig,
) -> Result<Option<SearchOutcome>, dialoguer::Error>
where
    R: CustomerReader,
{
    let theme = ColorfulTheme::default();
    let mut form = SearchForm::new();

    loop {
        println!();
        println!("{}", style("Customer Lookup").bold());

        for entry in config.sorted_fields() {
            let prompt = field_prompt(&entry.config);
            let mut label = prompt.label.clone();
            if prompt.required {
                label.push_str(" *");
            }
            if let Some(hint) = &prompt.hint {
                println!("{}", style(hint).dim());
            }
            // No real keyboard modes in a terminal; surface them as hints.
            match prompt.mode {
                InputMode::EmailAddress => println!("{}", style("Email address").dim()),
                InputMode::PhonePad => println!("{}", style("Digits only").dim()),
                InputMode::Default => {}
            }
            if form.value(&entry.key).is_empty() {
                if let Some(placeholder) = &prompt.placeholder {
                    label = format!("{label} ({})", style(placeholder).dim());
                }
            }
            let value = Input::<String>::with_theme(&theme)
                .with_prompt(label)
                .allow_empty(true)
                .with_initial_text(form.value(&entry.key).to_string())
                .interact_text()?;
            form.set_value(&entry.key, value);
        }

        // The clear action only exists while some field is non-blank.
        let mut actions = vec!["Search"];
        if form.has_values() {
            actions.push("Clear");
        }
        actions.push("Quit");

        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[choice] {
            "Search" => {
                let values = form.submit();
                if values.is_empty() {
                    alert(
                        "No Search Criteria",
                        "Please enter at least one search criterion.",
                    );
                    continue;
                }
                let criteria = SearchCriteria::from_values(&values);

                let pending = spinner("Searching...");
                let result = repo.search(&criteria).await;
                pending.finish_and_clear();

                match result {
                    Ok(customers) => {
                        return Ok(Some(SearchOutcome {
                            customers,
                            criteria,
                        }));
                    }
                    Err(err) => {
                        log::error!("Search failed: {err}");
                        alert("Search Failed", &err.to_string());
                    }
                }
            }
            "Clear" => form.clear(),
            _ => return Ok(None),
        }
    }
}
