use chrono::Utc;
use diesel::prelude::*;

use crate::domain::feature::{Feature, NewFeature};
use crate::domain::types::FeatureId;
use crate::models::feature::{
    Feature as DbFeature, FeatureChangeset as DbFeatureChangeset, NewFeature as DbNewFeature,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, FeatureReader, FeatureWriter};

impl FeatureReader for DieselRepository {
    fn list_features(&self) -> RepositoryResult<Vec<Feature>> {
        use crate::schema::features;

        let mut conn = self.conn()?;

        let items = features::table
            .select(DbFeature::as_select())
            .order((features::position.asc(), features::name.asc()))
            .load::<DbFeature>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Feature>, _>>()?;

        Ok(items)
    }

    fn get_feature_by_id(&self, id: FeatureId) -> RepositoryResult<Option<Feature>> {
        use crate::schema::features;

        let mut conn = self.conn()?;

        let feature = features::table
            .find(id.get())
            .select(DbFeature::as_select())
            .first::<DbFeature>(&mut conn)
            .optional()?;

        let feature = feature.map(TryInto::try_into).transpose()?;
        Ok(feature)
    }
}

impl FeatureWriter for DieselRepository {
    fn create_feature(&self, feature: &NewFeature) -> RepositoryResult<Feature> {
        use crate::schema::features;

        let mut conn = self.conn()?;
        let row = DbNewFeature::from_domain(feature.clone(), Utc::now().naive_utc());

        let created = diesel::insert_into(features::table)
            .values(&row)
            .returning(DbFeature::as_returning())
            .get_result::<DbFeature>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_feature(
        &self,
        id: FeatureId,
        feature: &NewFeature,
    ) -> RepositoryResult<Option<Feature>> {
        use crate::schema::features;

        let mut conn = self.conn()?;
        let changeset = DbFeatureChangeset::from_domain(feature.clone(), Utc::now().naive_utc());

        let updated = diesel::update(features::table.find(id.get()))
            .set(&changeset)
            .returning(DbFeature::as_returning())
            .get_result::<DbFeature>(&mut conn)
            .optional()?;

        let updated = updated.map(TryInto::try_into).transpose()?;
        Ok(updated)
    }

    fn delete_feature(&self, id: FeatureId) -> RepositoryResult<usize> {
        use crate::schema::features;

        let mut conn = self.conn()?;

        let affected = diesel::delete(features::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
