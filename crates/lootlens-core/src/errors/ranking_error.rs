/// Ranking subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("unsupported snapshot version {found} (this build reads up to {supported})")]
    UnsupportedSnapshotVersion { found: u32, supported: u32 },
}
