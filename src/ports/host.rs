use crate::domain::{AppError, OwnerCandidate};

/// Repository-hosting provider operations, backed by the gh CLI.
pub trait HostPort {
    /// The authenticated account ("who am I").
    fn authenticated_user(&self) -> Result<OwnerCandidate, AppError>;

    /// Organizations the authenticated account belongs to, in provider order.
    fn organizations(&self) -> Result<Vec<OwnerCandidate>, AppError>;

    /// Create a remote repository under the fully qualified `<owner>/<name>`.
    fn create_repository(&self, full_name: &str) -> Result<(), AppError>;
}
