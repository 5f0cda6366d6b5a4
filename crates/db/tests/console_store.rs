use assert_matches::assert_matches;
use brainstudio_core::error::CoreError;
use brainstudio_core::form_fields::{
    FieldDefinition, FieldDefinitionInput, FieldType, FieldValue, ProcessFormConfiguration,
};
use brainstudio_core::process::{NewProcess, ProcessStatus};
use brainstudio_core::settings::WorkflowFilters;
use brainstudio_core::store::ConsoleStore;
use brainstudio_db::repositories::{ProcessRepo, SettingRepo};
use brainstudio_db::PgConsoleStore;
use sqlx::PgPool;

fn process(name: &str, category: &str) -> NewProcess {
    NewProcess {
        category: Some(category.to_string()),
        ..NewProcess::named(name)
    }
}

fn email_definition() -> FieldDefinition {
    let mut input = FieldDefinitionInput::new("email", "Email", FieldType::Email);
    input.required = true;
    input.validation_pattern = Some("^[^@]+@[^@]+$".to_string());
    FieldDefinition::create(input).unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeded_catalog_is_empty(pool: PgPool) {
    let store = PgConsoleStore::new(pool);
    assert!(store.load_field_definitions().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn catalog_round_trips_in_order(pool: PgPool) {
    let store = PgConsoleStore::new(pool);
    let first = email_definition();
    let second = FieldDefinition::create(FieldDefinitionInput::new(
        "notes",
        "Notes",
        FieldType::Textarea,
    ))
    .unwrap();

    store
        .save_field_definitions(&[first.clone(), second.clone()])
        .await
        .unwrap();

    let loaded = store.load_field_definitions().await.unwrap();
    assert_eq!(loaded, vec![first, second]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_catalog_setting_loads_empty(pool: PgPool) {
    sqlx::query("DELETE FROM user_settings")
        .execute(&pool)
        .await
        .unwrap();
    let store = PgConsoleStore::new(pool);

    assert!(store.load_field_definitions().await.unwrap().is_empty());
    assert_eq!(
        store.load_workflow_filters().await.unwrap(),
        WorkflowFilters::default()
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_catalog_is_a_persistence_error(pool: PgPool) {
    SettingRepo::upsert(
        &pool,
        "form_field_definitions",
        &serde_json::json!({ "not": "a list" }),
    )
    .await
    .unwrap();
    let store = PgConsoleStore::new(pool);

    assert_matches!(
        store.load_field_definitions().await,
        Err(CoreError::Persistence(_))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn form_configuration_is_stored_on_process(pool: PgPool) {
    let row = ProcessRepo::create(&pool, &process("Onboarding", "HR"))
        .await
        .unwrap();
    let store = PgConsoleStore::new(pool);

    let definition = email_definition();
    let mut configuration = ProcessFormConfiguration::default();
    configuration.fields.push(definition.clone());
    configuration
        .values
        .insert("email".to_string(), FieldValue::from("a@b.c"));

    let saved = store
        .save_form_configuration(row.process_id, &configuration)
        .await
        .unwrap();
    assert_eq!(saved.form_configuration.as_ref(), Some(&configuration));

    let reloaded = store.find_process(row.process_id).await.unwrap().unwrap();
    assert_eq!(reloaded.configuration(), configuration);
    assert_eq!(reloaded.status, ProcessStatus::Draft);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn saving_configuration_for_unknown_process_is_not_found(pool: PgPool) {
    let store = PgConsoleStore::new(pool);
    let result = store
        .save_form_configuration(9_999, &ProcessFormConfiguration::default())
        .await;
    assert_matches!(result, Err(CoreError::NotFound { entity: "Process", .. }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn process_without_configuration_yields_empty_one(pool: PgPool) {
    let row = ProcessRepo::create(&pool, &process("Invoicing", "Finance"))
        .await
        .unwrap();
    let store = PgConsoleStore::new(pool);

    let found = store.find_process(row.process_id).await.unwrap().unwrap();
    assert!(found.form_configuration.is_none());
    assert_eq!(found.configuration(), ProcessFormConfiguration::default());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_configuration_is_skipped_on_list_but_fails_lookup(pool: PgPool) {
    let broken = ProcessRepo::create(&pool, &process("Broken", "Ops"))
        .await
        .unwrap();
    ProcessRepo::create(&pool, &process("Healthy", "Ops"))
        .await
        .unwrap();
    sqlx::query(
        "UPDATE processes SET form_configuration = '{\"fields\": 5}'::jsonb WHERE process_id = $1",
    )
    .bind(broken.process_id)
    .execute(&pool)
    .await
    .unwrap();
    let store = PgConsoleStore::new(pool);

    let listed = store.list_processes(None).await.unwrap();
    assert_eq!(listed.len(), 2);
    let listed_broken = listed
        .iter()
        .find(|p| p.id == broken.process_id)
        .unwrap();
    assert!(listed_broken.form_configuration.is_none());

    assert_eq!(store.list_processes(Some("broken")).await.unwrap().len(), 1);

    assert_matches!(
        store.find_process(broken.process_id).await,
        Err(CoreError::Persistence(_))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive_and_ordered(pool: PgPool) {
    ProcessRepo::create(&pool, &process("Vendor onboarding", "Procurement"))
        .await
        .unwrap();
    ProcessRepo::create(&pool, &process("Expense claims", "Finance"))
        .await
        .unwrap();
    ProcessRepo::create(&pool, &process("Employee ONBOARDING", "HR"))
        .await
        .unwrap();
    let store = PgConsoleStore::new(pool);

    let all = store.list_processes(None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    let names: Vec<String> = store
        .list_processes(Some("onboarding"))
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Vendor onboarding", "Employee ONBOARDING"]);

    let by_category = store.list_processes(Some("finance")).await.unwrap();
    assert_eq!(by_category.len(), 1);

    let blank = store.list_processes(Some("   ")).await.unwrap();
    assert_eq!(blank.len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn workflow_filters_round_trip(pool: PgPool) {
    let store = PgConsoleStore::new(pool);
    let filters = WorkflowFilters {
        statuses: vec![ProcessStatus::Active, ProcessStatus::Paused],
        categories: vec!["HR".to_string()],
    };

    store.save_workflow_filters(&filters).await.unwrap();
    assert_eq!(store.load_workflow_filters().await.unwrap(), filters);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_succeeds(pool: PgPool) {
    let store = PgConsoleStore::new(pool);
    assert!(store.health_check().await.is_ok());
}
