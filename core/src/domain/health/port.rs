use crate::domain::common::CoreError;

pub trait HealthRepository: Send + Sync {
    fn ping(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait HealthService: Send + Sync {
    fn healthy(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[derive(Clone)]
pub struct MockHealthRepository;

impl MockHealthRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HealthRepository for MockHealthRepository {
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
