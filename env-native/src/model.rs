use hub_core::models::ctx::{Config, Ctx};
use hub_core::models::resource_details::ResourceDetails;
use hub_core::models::resources::Resources;
use hub_core::models::tags::Tags;
use hub_core::Model;
use serde::Serialize;

use crate::env::NativeEnv;

#[derive(Model, Clone, Serialize, Debug)]
#[model(NativeEnv)]
pub struct NativeModel {
    pub ctx: Ctx,
    pub resources: Resources,
    pub resource_details: ResourceDetails,
    pub tags: Tags,
}

impl NativeModel {
    pub fn new(config: Config) -> Self {
        NativeModel {
            ctx: Ctx::new(config),
            resources: Resources::default(),
            resource_details: ResourceDetails::default(),
            tags: Tags::default(),
        }
    }
    pub fn get_state(&self, field: &NativeModelField) -> serde_json::Result<serde_json::Value> {
        match field {
            NativeModelField::Ctx => serde_json::to_value(&self.ctx),
            NativeModelField::Resources => serde_json::to_value(&self.resources),
            NativeModelField::ResourceDetails => serde_json::to_value(&self.resource_details),
            NativeModelField::Tags => serde_json::to_value(&self.tags),
        }
    }
}
