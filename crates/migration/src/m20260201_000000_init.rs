//! Initial schema.
//!
//! - `category_groups`: the two fixed groups (1 = Expense, 2 = Income)
//! - `categories`: user-managed labels, each in one group
//! - `income`: money received; `source` holds the category label
//! - `expense`: money spent
//!
//! Amounts are integer cents. Loans have no table of their own: they are
//! income/expense rows carrying a sentinel category.

use sea_orm::ConnectionTrait;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum CategoryGroups {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    GroupId,
    Name,
    Color,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Income {
    Table,
    Id,
    Amount,
    Date,
    Source,
    Description,
    IncomeType,
    CreatedAt,
}

#[derive(Iden)]
enum Expense {
    Table,
    Id,
    Amount,
    Date,
    Category,
    Description,
    PaymentMethod,
    CreatedAt,
}

const GROUPS: [(i32, &str); 2] = [(1, "Expense"), (2, "Income")];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // Category groups
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(CategoryGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CategoryGroups::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CategoryGroups::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        let db = manager.get_connection();
        let backend = db.get_database_backend();
        for (id, name) in GROUPS {
            let stmt = Query::insert()
                .into_table(CategoryGroups::Table)
                .columns([CategoryGroups::Id, CategoryGroups::Name])
                .values_panic([id.into(), name.into()])
                .to_owned();
            db.execute(backend.build(&stmt)).await?;
        }

        // ───────────────────────────────────────────────────────────────────
        // Categories
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::GroupId).integer().not_null())
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(ColumnDef::new(Categories::Color).string())
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Categories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-categories-group_id")
                            .from(Categories::Table, Categories::GroupId)
                            .to(CategoryGroups::Table, CategoryGroups::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-categories-group_id")
                    .table(Categories::Table)
                    .col(Categories::GroupId)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // Income
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Income::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Income::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Income::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Income::Date).date().not_null())
                    .col(ColumnDef::new(Income::Source).string().not_null())
                    .col(ColumnDef::new(Income::Description).string().not_null())
                    .col(ColumnDef::new(Income::IncomeType).string())
                    .col(
                        ColumnDef::new(Income::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-income-date")
                    .table(Income::Table)
                    .col(Income::Date)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // Expense
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Expense::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Expense::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Expense::Amount).big_integer().not_null())
                    .col(ColumnDef::new(Expense::Date).date().not_null())
                    .col(ColumnDef::new(Expense::Category).string().not_null())
                    .col(ColumnDef::new(Expense::Description).string().not_null())
                    .col(ColumnDef::new(Expense::PaymentMethod).string())
                    .col(
                        ColumnDef::new(Expense::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expense-date")
                    .table(Expense::Table)
                    .col(Expense::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expense::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Income::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CategoryGroups::Table).to_owned())
            .await?;
        Ok(())
    }
}
