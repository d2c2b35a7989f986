use std::collections::{HashMap, HashSet};

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::attribute::{
    Attribute, AttributeValue, AttributeWithValues, NewAttribute, NewAttributeValue,
};
use crate::domain::types::AttributeId;
use crate::models::attribute::{
    Attribute as DbAttribute, AttributeChangeset as DbAttributeChangeset,
    AttributeValue as DbAttributeValue, AttributeValueChangeset as DbAttributeValueChangeset,
    NewAttribute as DbNewAttribute, NewAttributeValue as DbNewAttributeValue,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AttributeReader, AttributeWriter, DieselRepository};

impl AttributeReader for DieselRepository {
    fn list_attributes(&self) -> RepositoryResult<Vec<AttributeWithValues>> {
        use crate::schema::{attribute_values, attributes};

        let mut conn = self.conn()?;

        let items = attributes::table
            .select(DbAttribute::as_select())
            .order((attributes::position.asc(), attributes::name.asc()))
            .load::<DbAttribute>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Attribute>, _>>()?;

        let mut values: HashMap<i32, Vec<AttributeValue>> = HashMap::new();
        for row in attribute_values::table
            .select(DbAttributeValue::as_select())
            .order((
                attribute_values::attribute_id.asc(),
                attribute_values::position.asc(),
                attribute_values::id.asc(),
            ))
            .load::<DbAttributeValue>(&mut conn)?
        {
            values
                .entry(row.attribute_id)
                .or_default()
                .push(row.try_into()?);
        }

        Ok(items
            .into_iter()
            .map(|attribute| AttributeWithValues {
                values: values.remove(&attribute.id.get()).unwrap_or_default(),
                attribute,
            })
            .collect())
    }

    fn get_attribute_by_id(
        &self,
        id: AttributeId,
    ) -> RepositoryResult<Option<AttributeWithValues>> {
        let mut conn = self.conn()?;
        load_attribute(&mut conn, id.get())
    }
}

impl AttributeWriter for DieselRepository {
    fn create_attribute(
        &self,
        attribute: &NewAttribute,
        values: &[NewAttributeValue],
    ) -> RepositoryResult<AttributeWithValues> {
        use crate::schema::{attribute_values, attributes};

        let mut conn = self.conn()?;
        let row = DbNewAttribute::from_domain(attribute, Utc::now().naive_utc());

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let attribute_id = diesel::insert_into(attributes::table)
                .values(&row)
                .returning(attributes::id)
                .get_result::<i32>(conn)?;

            if !values.is_empty() {
                let rows: Vec<DbNewAttributeValue> = values
                    .iter()
                    .map(|value| DbNewAttributeValue::from_domain(attribute_id, value))
                    .collect();
                diesel::insert_into(attribute_values::table)
                    .values(&rows)
                    .execute(conn)?;
            }

            load_attribute(conn, attribute_id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn update_attribute(
        &self,
        id: AttributeId,
        attribute: &NewAttribute,
        values: Option<&[NewAttributeValue]>,
    ) -> RepositoryResult<Option<AttributeWithValues>> {
        use crate::schema::attributes;

        let mut conn = self.conn()?;
        let changeset = DbAttributeChangeset::from_domain(attribute, Utc::now().naive_utc());

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let affected = diesel::update(attributes::table.find(id.get()))
                .set(&changeset)
                .execute(conn)?;
            if affected == 0 {
                return Ok(None);
            }

            if let Some(values) = values {
                reconcile_values(conn, id.get(), values)?;
            }

            load_attribute(conn, id.get())
        })
    }

    fn delete_attribute(&self, id: AttributeId) -> RepositoryResult<usize> {
        use crate::schema::attributes;

        let mut conn = self.conn()?;

        let affected = diesel::delete(attributes::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}

/// Updates values whose id already belongs to the attribute, inserts the
/// others and deletes stored values that were not submitted.
fn reconcile_values(
    conn: &mut SqliteConnection,
    attribute_id: i32,
    values: &[NewAttributeValue],
) -> RepositoryResult<()> {
    use crate::schema::attribute_values;

    let existing: HashSet<i32> = attribute_values::table
        .filter(attribute_values::attribute_id.eq(attribute_id))
        .select(attribute_values::id)
        .load::<i32>(conn)?
        .into_iter()
        .collect();

    let mut kept = HashSet::new();
    for value in values {
        match value.id.map(|id| id.get()) {
            Some(value_id) if existing.contains(&value_id) => {
                diesel::update(attribute_values::table.find(value_id))
                    .set(DbAttributeValueChangeset::from(value))
                    .execute(conn)?;
                kept.insert(value_id);
            }
            _ => {
                let value_id = diesel::insert_into(attribute_values::table)
                    .values(DbNewAttributeValue::from_domain(attribute_id, value))
                    .returning(attribute_values::id)
                    .get_result::<i32>(conn)?;
                kept.insert(value_id);
            }
        }
    }

    let removed: Vec<i32> = existing.difference(&kept).copied().collect();
    if !removed.is_empty() {
        diesel::delete(attribute_values::table.filter(attribute_values::id.eq_any(removed)))
            .execute(conn)?;
    }

    Ok(())
}

fn load_attribute(
    conn: &mut SqliteConnection,
    attribute_id: i32,
) -> RepositoryResult<Option<AttributeWithValues>> {
    use crate::schema::{attribute_values, attributes};

    let attribute = attributes::table
        .find(attribute_id)
        .select(DbAttribute::as_select())
        .first::<DbAttribute>(conn)
        .optional()?;

    let Some(attribute) = attribute else {
        return Ok(None);
    };

    let values = attribute_values::table
        .filter(attribute_values::attribute_id.eq(attribute_id))
        .select(DbAttributeValue::as_select())
        .order((attribute_values::position.asc(), attribute_values::id.asc()))
        .load::<DbAttributeValue>(conn)?
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<AttributeValue>, _>>()?;

    Ok(Some(AttributeWithValues {
        attribute: attribute.try_into()?,
        values,
    }))
}
