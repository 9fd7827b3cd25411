use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Engine, EngineError, ExpenseCmd, IncomeCmd, MoneyCents, Transaction, TransactionKind};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn cents(value: i64) -> MoneyCents {
    MoneyCents::new(value)
}

fn validation(message: &str) -> EngineError {
    EngineError::Validation(message.to_string())
}

#[tokio::test]
async fn add_income_returns_stored_row() {
    let (engine, _db) = engine_with_db().await;

    let tx = engine
        .transactions()
        .add_income(IncomeCmd::new(cents(1000), day(2026, 2, 1), "Salary", "Pay"))
        .await
        .unwrap();

    assert!(!tx.id.is_empty());
    assert_eq!(tx.amount, cents(1000));
    assert_eq!(tx.date, day(2026, 2, 1));
    assert_eq!(tx.source(), "Salary");
    assert_eq!(tx.category, "Salary");
    assert_eq!(tx.description, "Pay");
    assert_eq!(tx.income_type, None);

    let all = engine.transactions().all().await.unwrap();
    let matching: Vec<_> = all.iter().filter(|t| t.id() == tx.id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].kind(), TransactionKind::Income);
    assert_eq!(matching[0].kind().as_str(), "income");
}

#[tokio::test]
async fn income_is_stored_in_income_table_with_source_column() {
    let (engine, db) = engine_with_db().await;

    let tx = engine
        .transactions()
        .add_income(
            IncomeCmd::new(cents(2500), day(2026, 2, 1), "Sponsor", "Kit deal")
                .income_type("One-time"),
        )
        .await
        .unwrap();

    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_sql_and_values(
            backend,
            "SELECT amount, source, income_type FROM income WHERE id = ?",
            vec![tx.id.clone().into()],
        ))
        .await
        .unwrap()
        .unwrap();
    let amount: i64 = row.try_get("", "amount").unwrap();
    let source: String = row.try_get("", "source").unwrap();
    let income_type: Option<String> = row.try_get("", "income_type").unwrap();
    assert_eq!(amount, 2500);
    assert_eq!(source, "Sponsor");
    assert_eq!(income_type.as_deref(), Some("One-time"));
}

#[tokio::test]
async fn non_positive_amount_is_rejected_without_write() {
    let (engine, _db) = engine_with_db().await;
    let service = engine.transactions();

    for amount in [0, -1, -50_000] {
        let err = service
            .add_income(IncomeCmd::new(cents(amount), day(2026, 2, 1), "Salary", "Pay"))
            .await
            .unwrap_err();
        assert_eq!(err, validation("Amount must be greater than zero."));

        let err = service
            .add_expense(ExpenseCmd::new(cents(amount), day(2026, 2, 1), "Food", "Lunch"))
            .await
            .unwrap_err();
        assert_eq!(err, validation("Amount must be greater than zero."));
    }

    assert!(service.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_category_or_description_is_rejected_without_write() {
    let (engine, _db) = engine_with_db().await;
    let service = engine.transactions();

    for blank in ["", "   ", "\t\n"] {
        let err = service
            .add_income(IncomeCmd::new(cents(100), day(2026, 2, 1), blank, "Pay"))
            .await
            .unwrap_err();
        assert_eq!(err, validation("Category is required."));

        let err = service
            .add_expense(ExpenseCmd::new(cents(100), day(2026, 2, 1), "Food", blank))
            .await
            .unwrap_err();
        assert_eq!(err, validation("Description is required."));
    }

    assert!(service.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn amount_is_checked_before_text_fields() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .transactions()
        .add_expense(ExpenseCmd::new(cents(0), day(2026, 2, 1), "", ""))
        .await
        .unwrap_err();
    assert_eq!(err, validation("Amount must be greater than zero."));
}

#[tokio::test]
async fn text_fields_are_trimmed() {
    let (engine, _db) = engine_with_db().await;

    let tx = engine
        .transactions()
        .add_expense(
            ExpenseCmd::new(cents(450), day(2026, 2, 1), "  Food ", " Lunch  ")
                .payment_method("   "),
        )
        .await
        .unwrap();

    assert_eq!(tx.category, "Food");
    assert_eq!(tx.description, "Lunch");
    assert_eq!(tx.payment_method, None);
}

#[tokio::test]
async fn optional_fields_survive_round_trip() {
    let (engine, _db) = engine_with_db().await;
    let service = engine.transactions();

    let with_type = service
        .add_income(
            IncomeCmd::new(cents(1000), day(2026, 2, 1), "Dues", "Monthly dues")
                .income_type("Recurring"),
        )
        .await
        .unwrap();
    let without_type = service
        .add_income(IncomeCmd::new(cents(300), day(2026, 2, 2), "Bake sale", "Cakes"))
        .await
        .unwrap();
    let with_method = service
        .add_expense(
            ExpenseCmd::new(cents(700), day(2026, 2, 3), "Equipment", "Balls")
                .payment_method("Credit Card"),
        )
        .await
        .unwrap();
    let without_method = service
        .add_expense(ExpenseCmd::new(cents(200), day(2026, 2, 4), "Food", "Snacks"))
        .await
        .unwrap();

    let incomes = service.incomes().await.unwrap();
    let read = |id: &str| incomes.iter().find(|t| t.id == id).unwrap().clone();
    assert_eq!(read(&with_type.id).income_type.as_deref(), Some("Recurring"));
    assert_eq!(read(&without_type.id).income_type, None);

    let expenses = service.expenses().await.unwrap();
    let read = |id: &str| expenses.iter().find(|t| t.id == id).unwrap().clone();
    assert_eq!(
        read(&with_method.id).payment_method.as_deref(),
        Some("Credit Card")
    );
    assert_eq!(read(&without_method.id).payment_method, None);
}

#[tokio::test]
async fn filtered_reads_return_one_kind_each() {
    let (engine, _db) = engine_with_db().await;
    let service = engine.transactions();

    service
        .add_income(IncomeCmd::new(cents(1000), day(2026, 2, 1), "Salary", "Pay"))
        .await
        .unwrap();
    service
        .add_expense(ExpenseCmd::new(cents(400), day(2026, 2, 1), "Food", "Lunch"))
        .await
        .unwrap();
    service
        .add_expense(ExpenseCmd::new(cents(100), day(2026, 2, 2), "Food", "Coffee"))
        .await
        .unwrap();

    assert_eq!(service.incomes().await.unwrap().len(), 1);
    assert_eq!(service.expenses().await.unwrap().len(), 2);
    assert_eq!(service.all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn all_is_newest_date_first() {
    let (engine, _db) = engine_with_db().await;
    let service = engine.transactions();

    service
        .add_expense(ExpenseCmd::new(cents(100), day(2026, 1, 15), "Food", "Old"))
        .await
        .unwrap();
    service
        .add_income(IncomeCmd::new(cents(100), day(2026, 3, 1), "Dues", "New"))
        .await
        .unwrap();
    service
        .add_expense(ExpenseCmd::new(cents(100), day(2026, 2, 10), "Food", "Middle"))
        .await
        .unwrap();

    let dates: Vec<NaiveDate> = service
        .all()
        .await
        .unwrap()
        .iter()
        .map(Transaction::date)
        .collect();
    assert_eq!(dates, vec![day(2026, 3, 1), day(2026, 2, 10), day(2026, 1, 15)]);
}

#[tokio::test]
async fn transaction_by_id() {
    let (engine, _db) = engine_with_db().await;
    let service = engine.transactions();

    let expense = service
        .add_expense(ExpenseCmd::new(cents(900), day(2026, 2, 1), "Travel", "Bus"))
        .await
        .unwrap();

    let found = service.transaction(&expense.id).await.unwrap();
    assert_eq!(found, Transaction::Expense(expense));

    let err = service.transaction("missing").await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("Transaction not found".to_string()));
}

#[tokio::test]
async fn totals_per_kind() {
    let (engine, _db) = engine_with_db().await;
    let service = engine.transactions();

    assert_eq!(service.total(TransactionKind::Income).await.unwrap(), MoneyCents::ZERO);

    service
        .add_income(IncomeCmd::new(cents(1250), day(2026, 2, 1), "Dues", "A"))
        .await
        .unwrap();
    service
        .add_income(IncomeCmd::new(cents(750), day(2026, 2, 2), "Dues", "B"))
        .await
        .unwrap();
    service
        .add_expense(ExpenseCmd::new(cents(300), day(2026, 2, 2), "Food", "C"))
        .await
        .unwrap();

    assert_eq!(service.total(TransactionKind::Income).await.unwrap(), cents(2000));
    assert_eq!(service.total(TransactionKind::Expense).await.unwrap(), cents(300));
}

#[tokio::test]
async fn database_errors_propagate() {
    let (engine, db) = engine_with_db().await;
    let backend = db.get_database_backend();
    db.execute(Statement::from_string(backend, "DROP TABLE expense;"))
        .await
        .unwrap();

    let err = engine.transactions().all().await.unwrap_err();
    assert!(matches!(err, EngineError::Database(_)));
}
