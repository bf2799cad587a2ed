//! Form submission through criteria building to repository filtering,
//! exercised against the deterministic in-memory repository.

use care_lookup::domain::criteria::SearchCriteria;
use care_lookup::domain::customer::Customer;
use care_lookup::forms::SearchForm;
use care_lookup::repository::mock::InMemoryCustomerRepository;
use care_lookup::repository::{ApiError, CustomerReader};

fn customer(id: &str, first_name: &str, last_name: &str, date_of_birth: &str) -> Customer {
    Customer {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth: date_of_birth.to_string(),
        marital_status: "Single".to_string(),
        ..Customer::default()
    }
}

fn sample_repo() -> InMemoryCustomerRepository {
    InMemoryCustomerRepository::new(vec![
        customer("1", "Jane", "Doe", "1990-01-05"),
        customer("2", "John", "Smith", "1985-12-25"),
        customer("3", "Janet", "Doolittle", "1990-01-05"),
    ])
}

#[tokio::test]
async fn submitted_form_values_drive_a_substring_search() {
    let mut form = SearchForm::new();
    form.set_value("firstName", " Jan ".to_string());
    form.set_value("lastName", "   ".to_string());

    let criteria = SearchCriteria::from_values(&form.submit());
    assert_eq!(criteria.first_name.as_deref(), Some("Jan"));
    assert!(criteria.last_name.is_none());

    let results = sample_repo().search(&criteria).await.unwrap();
    let ids: Vec<&str> = results.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[tokio::test]
async fn date_of_birth_filters_exactly() {
    let criteria = SearchCriteria {
        date_of_birth: Some("1985-12-25".to_string()),
        ..SearchCriteria::default()
    };
    let results = sample_repo().search(&criteria).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].first_name, "John");
}

#[tokio::test]
async fn combined_filters_intersect() {
    let criteria = SearchCriteria {
        first_name: Some("Jan".to_string()),
        last_name: Some("Doo".to_string()),
        ..SearchCriteria::default()
    };
    let results = sample_repo().search(&criteria).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "3");
}

#[tokio::test]
async fn empty_criteria_match_everyone() {
    let results = sample_repo()
        .search(&SearchCriteria::default())
        .await
        .unwrap();
    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn unknown_id_yields_a_normalized_not_found() {
    let err = sample_repo().get_by_id("nope").await.unwrap_err();
    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, 404);
            assert!(!message.is_empty());
        }
        other => panic!("expected server error, got {other:?}"),
    }
}
