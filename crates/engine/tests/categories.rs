use sea_orm::Database;

use engine::{CategoryCmd, CategoryGroup, Engine, EngineError};
use migration::MigratorTrait;

async fn engine_with_db() -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder().database(db).build().await.unwrap()
}

fn validation(message: &str) -> EngineError {
    EngineError::Validation(message.to_string())
}

#[tokio::test]
async fn create_and_read_back() {
    let engine = engine_with_db().await;
    let service = engine.categories();

    let created = service
        .create_category(2, CategoryCmd::new("  Membership ").color("#22c55e"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.group, CategoryGroup::Income);
    assert_eq!(created.group_id(), 2);
    assert_eq!(created.name, "Membership");
    assert_eq!(created.color.as_deref(), Some("#22c55e"));
    assert_eq!(created.created_at, created.updated_at);

    assert_eq!(service.category(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn create_validates_name_and_group() {
    let engine = engine_with_db().await;
    let service = engine.categories();

    assert_eq!(
        service
            .create_category(1, CategoryCmd::new("   "))
            .await
            .unwrap_err(),
        validation("Category name is required")
    );
    assert_eq!(
        service
            .create_category(0, CategoryCmd::new("Food"))
            .await
            .unwrap_err(),
        validation("Category group is required")
    );
    assert_eq!(
        service
            .create_category(7, CategoryCmd::new("Food"))
            .await
            .unwrap_err(),
        validation("Unknown category group: 7")
    );
    assert!(service.all_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_all_and_by_group() {
    let engine = engine_with_db().await;
    let service = engine.categories();

    service
        .create_category(2, CategoryCmd::new("Sponsorship"))
        .await
        .unwrap();
    service
        .create_category(1, CategoryCmd::new("Travel"))
        .await
        .unwrap();
    service
        .create_category(1, CategoryCmd::new("Equipment"))
        .await
        .unwrap();

    let groups: Vec<i32> = service
        .all_categories()
        .await
        .unwrap()
        .iter()
        .map(|c| c.group_id())
        .collect();
    assert_eq!(groups, vec![1, 1, 2]);

    let expense = service.categories_by_group(1).await.unwrap();
    assert_eq!(expense.len(), 2);
    assert!(expense.iter().all(|c| c.group == CategoryGroup::Expense));

    assert_eq!(
        service.categories_by_group(0).await.unwrap_err(),
        validation("Group id is required")
    );
    assert_eq!(
        service.categories_by_group(3).await.unwrap_err(),
        validation("Unknown category group: 3")
    );
}

#[tokio::test]
async fn update_renames_and_recolors() {
    let engine = engine_with_db().await;
    let service = engine.categories();

    let created = service
        .create_category(1, CategoryCmd::new("Food").color("#ff0000"))
        .await
        .unwrap();

    let updated = service
        .update_category(created.id, CategoryCmd::new("Catering").color(""))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.group, CategoryGroup::Expense);
    assert_eq!(updated.name, "Catering");
    assert_eq!(updated.color, None);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn update_and_delete_missing_category() {
    let engine = engine_with_db().await;
    let service = engine.categories();
    let not_found = EngineError::KeyNotFound("Category not found".to_string());

    assert_eq!(service.category(42).await.unwrap_err(), not_found);
    assert_eq!(
        service
            .update_category(42, CategoryCmd::new("Food"))
            .await
            .unwrap_err(),
        not_found
    );
    assert_eq!(service.delete_category(42).await.unwrap_err(), not_found);
    assert_eq!(
        service.category(0).await.unwrap_err(),
        validation("Category id is required")
    );
}

#[tokio::test]
async fn delete_removes_category() {
    let engine = engine_with_db().await;
    let service = engine.categories();

    let created = service
        .create_category(1, CategoryCmd::new("Travel"))
        .await
        .unwrap();
    service.delete_category(created.id).await.unwrap();

    assert!(service.all_categories().await.unwrap().is_empty());
    assert!(matches!(
        service.category(created.id).await,
        Err(EngineError::KeyNotFound(_))
    ));
}
