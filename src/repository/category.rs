use chrono::Utc;
use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, Slug};
use crate::models::category::{
    Category as DbCategory, CategoryChangeset as DbCategoryChangeset,
    NewCategory as DbNewCategory,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .select(DbCategory::as_select())
            .order((categories::name.asc(), categories::id.asc()))
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.get())
            .select(DbCategory::as_select())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn get_category_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::slug.eq(slug.as_str()))
            .select(DbCategory::as_select())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let row = DbNewCategory::from_domain(category.clone(), Utc::now().naive_utc());

        let created = diesel::insert_into(categories::table)
            .values(&row)
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_category(
        &self,
        id: CategoryId,
        category: &NewCategory,
    ) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let changeset = DbCategoryChangeset::from_domain(category.clone(), Utc::now().naive_utc());

        let updated = diesel::update(categories::table.find(id.get()))
            .set(&changeset)
            .returning(DbCategory::as_returning())
            .get_result::<DbCategory>(&mut conn)
            .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        // Descendants and product links go through ON DELETE CASCADE.
        let affected = diesel::delete(categories::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
