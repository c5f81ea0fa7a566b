use contracts::domain::a009_setting::aggregate::SettingDto;

use crate::domain::common::crud;
use crate::shared::api_client::{ApiClient, ApiError};

pub async fn list_settings(client: &ApiClient) -> Result<Vec<SettingDto>, ApiError> {
    crud::fetch_all(client).await
}

pub async fn get_setting(client: &ApiClient, id: i64) -> Result<SettingDto, ApiError> {
    crud::fetch_by_id(client, id).await
}

pub async fn save_setting(client: &ApiClient, dto: &SettingDto) -> Result<SettingDto, ApiError> {
    crud::save(client, dto).await
}

pub async fn update_setting(client: &ApiClient, dto: &SettingDto) -> Result<SettingDto, ApiError> {
    crud::update(client, dto).await
}
