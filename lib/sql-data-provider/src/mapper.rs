use gift_core::repository::error::DataLayerError;
use sea_orm::{DbErr, SqlErr};

pub(crate) fn to_data_layer_error(e: DbErr) -> DataLayerError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DataLayerError::AlreadyExists,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => DataLayerError::IncorrectParameters,
        Some(_) | None => DataLayerError::Db(e.into()),
    }
}

pub(crate) fn to_update_data_layer_error(err: DbErr) -> DataLayerError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => DataLayerError::RecordNotUpdated,
        e => to_data_layer_error(e),
    }
}

pub(crate) fn quantity_from_db(value: i32) -> Result<u32, DataLayerError> {
    u32::try_from(value).map_err(|_| DataLayerError::MappingError)
}

pub(crate) fn quantity_to_db(value: u32) -> Result<i32, DataLayerError> {
    i32::try_from(value).map_err(|_| DataLayerError::IncorrectParameters)
}
