use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, QueryFilter, QueryOrder, prelude::*};

use crate::{Category, CategoryCmd, CategoryGroup, EngineError, ResultEngine};

use super::{CategoryRepository, entities::categories};

#[derive(Clone, Debug)]
pub struct SqlCategoryRepository {
    database: DatabaseConnection,
}

impl SqlCategoryRepository {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

impl TryFrom<categories::Model> for Category {
    type Error = EngineError;

    fn try_from(model: categories::Model) -> Result<Self, Self::Error> {
        let group = CategoryGroup::try_from(model.group_id).map_err(|_| {
            EngineError::InvalidData(format!(
                "category {} has unknown group {}",
                model.id, model.group_id
            ))
        })?;

        Ok(Self {
            id: model.id,
            group,
            name: model.name,
            color: model.color,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

fn to_categories(models: Vec<categories::Model>) -> ResultEngine<Vec<Category>> {
    models.into_iter().map(Category::try_from).collect()
}

#[async_trait]
impl CategoryRepository for SqlCategoryRepository {
    async fn create(&self, group: CategoryGroup, cmd: CategoryCmd) -> ResultEngine<Category> {
        let now = Utc::now();
        let active = categories::ActiveModel {
            id: ActiveValue::NotSet,
            group_id: ActiveValue::Set(group.id()),
            name: ActiveValue::Set(cmd.name),
            color: ActiveValue::Set(cmd.color),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        let model = active.insert(&self.database).await?;
        tracing::debug!(id = model.id, group = group.name(), "category created");
        Category::try_from(model)
    }

    async fn find_all(&self) -> ResultEngine<Vec<Category>> {
        let models = categories::Entity::find()
            .order_by_asc(categories::Column::GroupId)
            .order_by_asc(categories::Column::Id)
            .all(&self.database)
            .await?;
        to_categories(models)
    }

    async fn find_by_group(&self, group: CategoryGroup) -> ResultEngine<Vec<Category>> {
        let models = categories::Entity::find()
            .filter(categories::Column::GroupId.eq(group.id()))
            .order_by_asc(categories::Column::Id)
            .all(&self.database)
            .await?;
        to_categories(models)
    }

    async fn find_by_id(&self, id: i32) -> ResultEngine<Option<Category>> {
        categories::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Category::try_from)
            .transpose()
    }

    async fn update(&self, id: i32, cmd: CategoryCmd) -> ResultEngine<Category> {
        let active = categories::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(cmd.name),
            color: ActiveValue::Set(cmd.color),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        let model = active.update(&self.database).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => EngineError::not_found("Category not found"),
            other => EngineError::Database(other),
        })?;
        tracing::debug!(id, "category updated");
        Category::try_from(model)
    }

    async fn delete(&self, id: i32) -> ResultEngine<()> {
        let result = categories::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::not_found("Category not found"));
        }
        tracing::debug!(id, "category deleted");
        Ok(())
    }
}
