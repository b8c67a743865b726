use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Speaker of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

/// Kind of history item this service reads as a conversation turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnKind {
    #[default]
    Message,
}

/// One chat message of the conversation history, as captured by the voice runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: TurnKind,
    pub role: Role,
    /// Text fragments of the utterance, in the order they were spoken.
    pub content: Vec<String>,
    /// Set when the speaker was cut off mid-utterance.
    #[serde(default)]
    pub interrupted: bool,
    /// Runtime fields not modeled here (timestamps, confidence, ...), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A history entry: a chat turn, or anything else the runtime records
/// (tool calls, handoffs) carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryItem {
    Turn(Turn),
    Other(Map<String, Value>),
}

impl HistoryItem {
    pub fn as_turn(&self) -> Option<&Turn> {
        match self {
            HistoryItem::Turn(turn) => Some(turn),
            HistoryItem::Other(_) => None,
        }
    }
}

impl From<Turn> for HistoryItem {
    fn from(turn: Turn) -> Self {
        HistoryItem::Turn(turn)
    }
}

/// Chronological history of one interview session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub items: Vec<HistoryItem>,
}

impl Transcript {
    pub fn new(items: Vec<HistoryItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.items.iter().filter_map(HistoryItem::as_turn)
    }

    /// Compact JSON sent to the model as the user content.
    pub fn to_model_input(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Indented JSON written to the on-disk artifact.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
