use std::sync::Arc;

use crate::{
    Category, CategoryCmd, CategoryGroup, EngineError, ResultEngine,
    repository::CategoryRepository,
    util::{normalize_optional_text, normalize_required_text},
};

const NAME_REQUIRED: &str = "Category name is required";
const CATEGORY_NOT_FOUND: &str = "Category not found";

/// Category CRUD with name and group validation.
#[derive(Clone)]
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_category(&self, group_id: i32, cmd: CategoryCmd) -> ResultEngine<Category> {
        let cmd = normalize(cmd)?;
        if group_id == 0 {
            return Err(EngineError::validation("Category group is required"));
        }
        let group = CategoryGroup::try_from(group_id)?;

        self.repository.create(group, cmd).await
    }

    pub async fn all_categories(&self) -> ResultEngine<Vec<Category>> {
        self.repository.find_all().await
    }

    pub async fn categories_by_group(&self, group_id: i32) -> ResultEngine<Vec<Category>> {
        if group_id == 0 {
            return Err(EngineError::validation("Group id is required"));
        }
        let group = CategoryGroup::try_from(group_id)?;
        self.repository.find_by_group(group).await
    }

    pub async fn category(&self, id: i32) -> ResultEngine<Category> {
        ensure_id(id)?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::not_found(CATEGORY_NOT_FOUND))
    }

    /// Renames or recolors a category. The group never changes.
    pub async fn update_category(&self, id: i32, cmd: CategoryCmd) -> ResultEngine<Category> {
        ensure_id(id)?;
        let cmd = normalize(cmd)?;
        self.category(id).await?;

        self.repository.update(id, cmd).await
    }

    pub async fn delete_category(&self, id: i32) -> ResultEngine<()> {
        self.category(id).await?;
        self.repository.delete(id).await
    }
}

fn ensure_id(id: i32) -> ResultEngine<()> {
    if id == 0 {
        return Err(EngineError::validation("Category id is required"));
    }
    Ok(())
}

fn normalize(cmd: CategoryCmd) -> ResultEngine<CategoryCmd> {
    Ok(CategoryCmd {
        name: normalize_required_text(&cmd.name, NAME_REQUIRED)?,
        color: normalize_optional_text(cmd.color.as_deref()),
    })
}
