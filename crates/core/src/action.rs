use crate::InstanceId;
use serde::{Deserialize, Serialize};

fn default_draw_count() -> usize {
    1
}

/// Everything a caller can ask the engine to do.
///
/// JSON form is internally tagged on `kind`. Any kind not listed here decodes
/// to [`Action::Unknown`], which the engine ignores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum Action {
    StartGame,
    DrawCards {
        #[serde(default = "default_draw_count")]
        count: usize,
    },
    PlayCard {
        card: InstanceId,
    },
    CompleteChallenge,
    PurchaseCard {
        card: InstanceId,
    },
    EndPlayPhase,
    EndBuyPhase,
    RestartGame,
    #[serde(other)]
    Unknown,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::StartGame => "StartGame",
            Action::DrawCards { .. } => "DrawCards",
            Action::PlayCard { .. } => "PlayCard",
            Action::CompleteChallenge => "CompleteChallenge",
            Action::PurchaseCard { .. } => "PurchaseCard",
            Action::EndPlayPhase => "EndPlayPhase",
            Action::EndBuyPhase => "EndBuyPhase",
            Action::RestartGame => "RestartGame",
            Action::Unknown => "Unknown",
        }
    }
}
