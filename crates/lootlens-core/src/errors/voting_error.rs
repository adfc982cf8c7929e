/// Voting subsystem errors.
///
/// Missing data (empty vote lists, unknown identities) is reported as an
/// absent result, not an error. These variants cover caller misconfiguration,
/// which must fail loudly.
#[derive(Debug, thiserror::Error)]
pub enum VotingError {
    #[error("unknown strategy: {name}")]
    UnknownStrategy { name: String },
}
