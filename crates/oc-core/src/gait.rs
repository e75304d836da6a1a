//! Speed classes of a move order.

/// How fast a subject should cover each tile of its path.
///
/// The per-tile duration of a gait comes from the subject's
/// `MoveProfile` (reference time × move coefficient).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Gait {
    /// Normal pace (the default move order).
    #[default]
    Walk,
    /// Fast move order.
    Run,
    /// Slow, low-profile move order.
    Crawl,
}

impl Gait {
    /// Human-readable label, useful for logs and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Gait::Walk  => "walk",
            Gait::Run   => "run",
            Gait::Crawl => "crawl",
        }
    }
}

impl std::fmt::Display for Gait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
