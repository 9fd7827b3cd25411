use std::sync::Arc;

use crate::{
    EngineError, Loan, LoanCmd, LoanDirection, ResultEngine,
    repository::LoanRepository,
    util::{ensure_positive, normalize_optional_text},
};

/// Records and lists loans.
///
/// A loan without a note is described by its sentinel category, so it still
/// reads as a loan in plain transaction listings.
#[derive(Clone)]
pub struct LoanService {
    repository: Arc<dyn LoanRepository>,
}

impl LoanService {
    pub fn new(repository: Arc<dyn LoanRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_loan(&self, cmd: LoanCmd) -> ResultEngine<Loan> {
        ensure_positive(cmd.amount)
            .inspect_err(|err| tracing::debug!("loan rejected: {err}"))?;

        let description = normalize_optional_text(cmd.note.as_deref())
            .unwrap_or_else(|| cmd.direction.category().to_string());

        let loan = self
            .repository
            .create(cmd.direction, cmd.amount, cmd.date, description)
            .await?;
        tracing::debug!(id = %loan.id, direction = loan.direction.as_str(), "loan recorded");
        Ok(loan)
    }

    pub async fn all_loans(&self) -> ResultEngine<Vec<Loan>> {
        self.repository.find_all().await
    }

    pub async fn loans_by_direction(&self, direction: LoanDirection) -> ResultEngine<Vec<Loan>> {
        self.repository.find_by_direction(direction).await
    }

    pub async fn loan(&self, id: &str) -> ResultEngine<Loan> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EngineError::not_found("Loan not found"))
    }
}
