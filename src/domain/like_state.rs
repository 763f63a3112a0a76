// src/domain/like_state.rs
//
// Reconciliation for the optimistic like toggle. The rendered heart must
// reflect the user's latest action the instant it is dispatched, without
// flickering back to the old value while the request is in flight, and
// must revert if the server rejects the mutation.

/// A mutation that has been dispatched but not yet confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingIntent {
    Like,
    Unlike,
}

/// The most recent completed mutation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Liked,
    Unliked,
    Error(String),
}

/// Resolves the three inputs into the single boolean the UI renders.
///
/// Precedence, highest first:
/// 1. an in-flight mutation commits to its requested end-state,
/// 2. a settled success commits to its confirmed end-state,
/// 3. a settled error (or nothing settled) falls back to server truth.
pub fn effective_liked(
    server_has_liked: bool,
    pending: Option<PendingIntent>,
    settled: Option<&Settled>,
) -> bool {
    if let Some(intent) = pending {
        return matches!(intent, PendingIntent::Like);
    }
    match settled {
        Some(Settled::Liked) => true,
        Some(Settled::Unliked) => false,
        Some(Settled::Error(_)) | None => server_has_liked,
    }
}

/// The like control's lifecycle. A fresh page load always constructs a new
/// `Idle` from fetched server truth, discarding any stale pending/settled
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeControl {
    Idle {
        server_has_liked: bool,
    },
    /// The toggle is disabled while a mutation is pending, so at most one
    /// request is ever in flight.
    Pending {
        intent: PendingIntent,
        original: bool,
    },
}

impl LikeControl {
    pub fn from_server(server_has_liked: bool) -> Self {
        LikeControl::Idle { server_has_liked }
    }

    /// The user clicked the toggle. A no-op while pending: overlapping
    /// requests are prevented by disablement, not queued.
    pub fn toggle(self) -> Self {
        match self {
            LikeControl::Idle { server_has_liked } => LikeControl::Pending {
                intent: if server_has_liked {
                    PendingIntent::Unlike
                } else {
                    PendingIntent::Like
                },
                original: server_has_liked,
            },
            pending @ LikeControl::Pending { .. } => pending,
        }
    }

    /// The in-flight mutation completed. Success commits the intent;
    /// an error restores the pre-toggle server truth.
    pub fn settle(self, result: &Settled) -> Self {
        match self {
            LikeControl::Idle { .. } => self,
            LikeControl::Pending { intent, original } => match result {
                Settled::Liked | Settled::Unliked => LikeControl::Idle {
                    server_has_liked: matches!(intent, PendingIntent::Like),
                },
                Settled::Error(_) => LikeControl::Idle {
                    server_has_liked: original,
                },
            },
        }
    }

    pub fn liked(&self) -> bool {
        match *self {
            LikeControl::Idle { server_has_liked } => {
                effective_liked(server_has_liked, None, None)
            }
            LikeControl::Pending { intent, original } => {
                effective_liked(original, Some(intent), None)
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LikeControl::Pending { .. })
    }
}
