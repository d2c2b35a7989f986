use std::collections::HashSet;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::CategoryId;
use crate::forms::categories::{CategoryForm, CategoryFormPayload};
use crate::repository::errors::RepositoryError;
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal
    })
}

pub fn show_category<R>(category_id: i32, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Rejects slugs already used by another category.
fn ensure_slug_is_free<R>(
    category: &NewCategory,
    current: Option<CategoryId>,
    repo: &R,
) -> ServiceResult<()>
where
    R: CategoryReader,
{
    match repo.get_category_by_slug(&category.slug) {
        Ok(Some(existing)) if Some(existing.id) != current => Err(ServiceError::Conflict(
            format!("Category with slug '{}' already exists", category.slug),
        )),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to look up category slug: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Checks that the parent exists and, on update, that it is neither the
/// category itself nor one of its descendants.
fn ensure_valid_parent<R>(
    category: &NewCategory,
    current: Option<CategoryId>,
    repo: &R,
) -> ServiceResult<()>
where
    R: CategoryReader,
{
    let Some(parent_id) = category.parent_id else {
        return Ok(());
    };

    let mut visited = HashSet::new();
    let mut cursor = Some(parent_id);
    while let Some(ancestor_id) = cursor {
        if !visited.insert(ancestor_id) {
            break;
        }
        if Some(ancestor_id) == current {
            return Err(ServiceError::Form(
                "A category cannot be nested under itself".to_string(),
            ));
        }
        cursor = match repo.get_category_by_id(ancestor_id) {
            Ok(Some(ancestor)) => ancestor.parent_id,
            Ok(None) if ancestor_id == parent_id => {
                return Err(ServiceError::Form(format!(
                    "Parent category {parent_id} does not exist"
                )));
            }
            Ok(None) => None,
            Err(e) => {
                log::error!("Failed to get parent category: {e}");
                return Err(ServiceError::Internal);
            }
        };
    }

    Ok(())
}

fn map_write_error(action: &str, error: RepositoryError) -> ServiceError {
    match error {
        // Parent existence is checked up front; what remains is the unique slug.
        RepositoryError::ConstraintViolation(_) => {
            ServiceError::Conflict("Category with this slug already exists".to_string())
        }
        e => {
            log::error!("Failed to {action} category: {e}");
            ServiceError::Internal
        }
    }
}

pub fn create_category<R>(form: CategoryForm, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let payload: CategoryFormPayload = form.try_into()?;

    ensure_slug_is_free(&payload.category, None, repo)?;
    ensure_valid_parent(&payload.category, None, repo)?;

    repo.create_category(&payload.category)
        .map_err(|e| map_write_error("create", e))
}

pub fn update_category<R>(category_id: i32, form: CategoryForm, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;
    let payload: CategoryFormPayload = form.try_into()?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    ensure_slug_is_free(&payload.category, Some(category_id), repo)?;
    ensure_valid_parent(&payload.category, Some(category_id), repo)?;

    match repo.update_category(category_id, &payload.category) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(map_write_error("update", e)),
    }
}

/// Deletes the category and all of its descendants.
pub fn delete_category<R>(category_id: i32, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_category(category_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;

    fn form(name: &str, slug: &str, parent_id: Option<i32>) -> CategoryForm {
        CategoryForm {
            name: Some(name.to_string()),
            slug: Some(slug.to_string()),
            parent_id,
            ..Default::default()
        }
    }

    #[test]
    fn duplicate_slug_on_create_is_a_conflict() {
        let repo = TestRepository::new();
        create_category(form("Lamps", "lamps", None), &repo).unwrap();

        let result = create_category(form("Other lamps", "lamps", None), &repo);
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
        assert_eq!(list_categories(&repo).unwrap().len(), 1);
    }

    #[test]
    fn update_may_keep_its_own_slug() {
        let repo = TestRepository::new();
        let lamps = create_category(form("Lamps", "lamps", None), &repo).unwrap();

        let updated = update_category(lamps.id.get(), form("Lamps & lights", "lamps", None), &repo)
            .unwrap();
        assert_eq!(updated.name, "Lamps & lights");
    }

    #[test]
    fn update_to_another_categorys_slug_is_a_conflict() {
        let repo = TestRepository::new();
        create_category(form("Lamps", "lamps", None), &repo).unwrap();
        let desks = create_category(form("Desks", "desks", None), &repo).unwrap();

        let result = update_category(desks.id.get(), form("Desks", "lamps", None), &repo);
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn unknown_category_is_not_found() {
        let repo = TestRepository::new();
        assert_eq!(
            update_category(5, form("Lamps", "lamps", None), &repo),
            Err(ServiceError::NotFound)
        );
        assert_eq!(delete_category(5, &repo), Err(ServiceError::NotFound));
        assert_eq!(show_category(5, &repo), Err(ServiceError::NotFound));
    }

    #[test]
    fn parent_must_exist() {
        let repo = TestRepository::new();
        let result = create_category(form("Lamps", "lamps", Some(99)), &repo);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn category_cannot_be_moved_under_its_descendant() {
        let repo = TestRepository::new();
        let root = create_category(form("Lighting", "lighting", None), &repo).unwrap();
        let child =
            create_category(form("Lamps", "lamps", Some(root.id.get())), &repo).unwrap();

        let to_self = update_category(
            root.id.get(),
            form("Lighting", "lighting", Some(root.id.get())),
            &repo,
        );
        assert!(matches!(to_self, Err(ServiceError::Form(_))));

        let to_child = update_category(
            root.id.get(),
            form("Lighting", "lighting", Some(child.id.get())),
            &repo,
        );
        assert!(matches!(to_child, Err(ServiceError::Form(_))));
    }
}
