use diesel::result::{DatabaseErrorKind, Error as DieselError};
use log::error;
use rocket::response::{Responder, Response};
use rocket::{Request, http::Status};
use std::io::Cursor;

#[derive(Debug)]
pub enum ApiError {
    DatabaseError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::DatabaseError(_) => Status::InternalServerError,
            ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Conflict(_) => Status::Conflict,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = self.status();
        let message = match self {
            ApiError::DatabaseError(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg) => msg,
        };

        Response::build()
            .status(status)
            .header(rocket::http::ContentType::Plain)
            .sized_body(message.len(), Cursor::new(message))
            .ok()
    }
}

impl From<DieselError> for ApiError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => ApiError::NotFound("Record not found".to_string()),
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                ApiError::Conflict(format!("Already exists: {}", info.message()))
            }
            DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info)
            | DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, info)
            | DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                ApiError::BadRequest(info.message().to_string())
            }
            other => {
                error!("Database error: {other}");
                ApiError::DatabaseError(format!("Database error: {other}"))
            }
        }
    }
}
