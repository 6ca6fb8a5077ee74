//! Classification of SeaORM errors into repository errors

use crate::domain::RepositoryError;
use sea_orm::{DbErr, SqlErr};

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::UniqueViolation(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::ForeignKeyViolation(detail)
            }
            _ => classify_by_message(err),
        }
    }
}

/// SQLite reports `RESTRICT` actions as trigger aborts, which carry no
/// foreign-key error code, so fall back to the driver message. Check
/// constraints have no `SqlErr` variant at all.
fn classify_by_message(err: DbErr) -> RepositoryError {
    let message = err.to_string();
    if message.contains("FOREIGN KEY constraint failed")
        || message.contains("violates foreign key constraint")
    {
        RepositoryError::ForeignKeyViolation(message)
    } else if message.contains("UNIQUE constraint failed")
        || message.contains("duplicate key value violates unique constraint")
    {
        RepositoryError::UniqueViolation(message)
    } else if message.contains("CHECK constraint failed")
        || message.contains("violates check constraint")
    {
        RepositoryError::CheckViolation(message)
    } else {
        RepositoryError::Other(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    fn exec_err(message: &str) -> DbErr {
        DbErr::Exec(RuntimeErr::Internal(message.to_string()))
    }

    #[test]
    fn restrict_abort_is_a_foreign_key_violation() {
        let err = exec_err("(code: 1811) FOREIGN KEY constraint failed");
        assert!(matches!(
            RepositoryError::from(err),
            RepositoryError::ForeignKeyViolation(_)
        ));
    }

    #[test]
    fn unique_message_is_a_unique_violation() {
        let err = exec_err("UNIQUE constraint failed: owners.national_id");
        assert!(matches!(
            RepositoryError::from(err),
            RepositoryError::UniqueViolation(_)
        ));
    }

    #[test]
    fn check_message_is_a_check_violation() {
        let sqlite = exec_err("CHECK constraint failed: \"end_date\" >= \"start_date\"");
        assert!(matches!(
            RepositoryError::from(sqlite),
            RepositoryError::CheckViolation(_)
        ));

        let postgres = exec_err(
            "new row for relation \"rental_contracts\" violates check constraint \"rental_contracts_check\"",
        );
        assert!(matches!(
            RepositoryError::from(postgres),
            RepositoryError::CheckViolation(_)
        ));
    }

    #[test]
    fn other_errors_stay_opaque() {
        let err = DbErr::Custom("connection reset".to_string());
        assert!(matches!(RepositoryError::from(err), RepositoryError::Other(_)));
    }
}
