use chrono::Utc;
use diesel::prelude::*;

use crate::domain::supplier::{NewSupplier, Supplier};
use crate::domain::types::SupplierId;
use crate::models::supplier::{
    NewSupplier as DbNewSupplier, Supplier as DbSupplier, SupplierChangeset as DbSupplierChangeset,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, SupplierReader, SupplierWriter};

impl SupplierReader for DieselRepository {
    fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let items = suppliers::table
            .select(DbSupplier::as_select())
            .order((suppliers::name.asc(), suppliers::id.asc()))
            .load::<DbSupplier>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Supplier>, _>>()?;

        Ok(items)
    }

    fn get_supplier_by_id(&self, id: SupplierId) -> RepositoryResult<Option<Supplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let supplier = suppliers::table
            .find(id.get())
            .select(DbSupplier::as_select())
            .first::<DbSupplier>(&mut conn)
            .optional()?;

        let supplier = supplier.map(TryInto::try_into).transpose()?;
        Ok(supplier)
    }
}

impl SupplierWriter for DieselRepository {
    fn create_supplier(&self, supplier: &NewSupplier) -> RepositoryResult<Supplier> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let row = DbNewSupplier::from_domain(supplier.clone(), Utc::now().naive_utc());

        let created = diesel::insert_into(suppliers::table)
            .values(&row)
            .returning(DbSupplier::as_returning())
            .get_result::<DbSupplier>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_supplier(
        &self,
        id: SupplierId,
        supplier: &NewSupplier,
    ) -> RepositoryResult<Option<Supplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let changeset = DbSupplierChangeset::from_domain(supplier.clone(), Utc::now().naive_utc());

        let updated = diesel::update(suppliers::table.find(id.get()))
            .set(&changeset)
            .returning(DbSupplier::as_returning())
            .get_result::<DbSupplier>(&mut conn)
            .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_supplier(&self, id: SupplierId) -> RepositoryResult<usize> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        // Products referencing the supplier keep existing with `supplier_id = NULL`.
        let affected = diesel::delete(suppliers::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
