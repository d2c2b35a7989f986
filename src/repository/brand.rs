use chrono::Utc;
use diesel::prelude::*;

use crate::domain::brand::{Brand, NewBrand};
use crate::domain::types::BrandId;
use crate::models::brand::{
    Brand as DbBrand, BrandChangeset as DbBrandChangeset, NewBrand as DbNewBrand,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BrandReader, BrandWriter, DieselRepository};

impl BrandReader for DieselRepository {
    fn list_brands(&self) -> RepositoryResult<Vec<Brand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let items = brands::table
            .select(DbBrand::as_select())
            .order((brands::name.asc(), brands::id.asc()))
            .load::<DbBrand>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Brand>, _>>()?;

        Ok(items)
    }

    fn get_brand_by_id(&self, id: BrandId) -> RepositoryResult<Option<Brand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let brand = brands::table
            .find(id.get())
            .select(DbBrand::as_select())
            .first::<DbBrand>(&mut conn)
            .optional()?;

        let brand = brand.map(TryInto::try_into).transpose()?;
        Ok(brand)
    }
}

impl BrandWriter for DieselRepository {
    fn create_brand(&self, brand: &NewBrand) -> RepositoryResult<Brand> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let row = DbNewBrand::from_domain(brand.clone(), Utc::now().naive_utc());

        let created = diesel::insert_into(brands::table)
            .values(&row)
            .returning(DbBrand::as_returning())
            .get_result::<DbBrand>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_brand(&self, id: BrandId, brand: &NewBrand) -> RepositoryResult<Option<Brand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let changeset = DbBrandChangeset::from_domain(brand.clone(), Utc::now().naive_utc());

        let updated = diesel::update(brands::table.find(id.get()))
            .set(&changeset)
            .returning(DbBrand::as_returning())
            .get_result::<DbBrand>(&mut conn)
            .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_brand(&self, id: BrandId) -> RepositoryResult<usize> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let affected = diesel::delete(brands::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
