use chrono::Utc;
use diesel::prelude::*;

use crate::domain::types::WarehouseId;
use crate::domain::warehouse::{NewWarehouse, Warehouse};
use crate::models::warehouse::{
    NewWarehouse as DbNewWarehouse, Warehouse as DbWarehouse,
    WarehouseChangeset as DbWarehouseChangeset,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, WarehouseReader, WarehouseWriter};

impl WarehouseReader for DieselRepository {
    fn list_warehouses(&self) -> RepositoryResult<Vec<Warehouse>> {
        use crate::schema::warehouses;

        let mut conn = self.conn()?;

        let items = warehouses::table
            .select(DbWarehouse::as_select())
            .order((warehouses::name.asc(), warehouses::id.asc()))
            .load::<DbWarehouse>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Warehouse>, _>>()?;

        Ok(items)
    }

    fn get_warehouse_by_id(&self, id: WarehouseId) -> RepositoryResult<Option<Warehouse>> {
        use crate::schema::warehouses;

        let mut conn = self.conn()?;

        let warehouse = warehouses::table
            .find(id.get())
            .select(DbWarehouse::as_select())
            .first::<DbWarehouse>(&mut conn)
            .optional()?;

        let warehouse = warehouse.map(TryInto::try_into).transpose()?;
        Ok(warehouse)
    }
}

impl WarehouseWriter for DieselRepository {
    fn create_warehouse(&self, warehouse: &NewWarehouse) -> RepositoryResult<Warehouse> {
        use crate::schema::warehouses;

        let mut conn = self.conn()?;
        let row = DbNewWarehouse::from_domain(warehouse.clone(), Utc::now().naive_utc());

        let created = diesel::insert_into(warehouses::table)
            .values(&row)
            .returning(DbWarehouse::as_returning())
            .get_result::<DbWarehouse>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_warehouse(
        &self,
        id: WarehouseId,
        warehouse: &NewWarehouse,
    ) -> RepositoryResult<Option<Warehouse>> {
        use crate::schema::warehouses;

        let mut conn = self.conn()?;
        let changeset =
            DbWarehouseChangeset::from_domain(warehouse.clone(), Utc::now().naive_utc());

        let updated = diesel::update(warehouses::table.find(id.get()))
            .set(&changeset)
            .returning(DbWarehouse::as_returning())
            .get_result::<DbWarehouse>(&mut conn)
            .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_warehouse(&self, id: WarehouseId) -> RepositoryResult<usize> {
        use crate::schema::warehouses;

        let mut conn = self.conn()?;

        let affected = diesel::delete(warehouses::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
