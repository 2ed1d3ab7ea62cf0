use crate::domain::errors::DomainError;
use std::io;

pub fn map_io(err: io::Error) -> DomainError {
    match err.kind() {
        io::ErrorKind::AlreadyExists => {
            DomainError::Persistence("blob name already taken".into())
        }
        io::ErrorKind::PermissionDenied => {
            DomainError::Persistence(format!("storage permission denied: {err}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn map_reqwest(err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        return DomainError::Persistence("blob service timed out".into());
    }
    if err.is_connect() {
        return DomainError::Persistence(format!("blob service unreachable: {err}"));
    }
    DomainError::Persistence(err.to_string())
}

pub fn unexpected_status(operation: &str, status: reqwest::StatusCode) -> DomainError {
    DomainError::Persistence(format!("{operation} failed with status {status}"))
}
