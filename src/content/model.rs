use std::{fmt, path::Path, str::FromStr};

use anyhow::Context as _;

use crate::foundation::error::{ScrollaError, ScrollaResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AtomType {
    Explanation,
    Example,
    Question,
    Comparison,
}

impl AtomType {
    pub const ALL: [AtomType; 4] = [
        Self::Explanation,
        Self::Example,
        Self::Question,
        Self::Comparison,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explanation => "explanation",
            Self::Example => "example",
            Self::Question => "question",
            Self::Comparison => "comparison",
        }
    }

    /// Badge text shown on the card.
    pub fn label(self) -> &'static str {
        match self {
            Self::Explanation => "📖 Concept",
            Self::Example => "⚡ Example",
            Self::Question => "✦ Challenge",
            Self::Comparison => "⚖️ Compare",
        }
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AtomType {
    type Err = ScrollaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ScrollaError::validation(format!("unknown atom type '{s}'")))
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Unknown labels count as easy.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Easy,
        }
    }

    /// Filled dots out of three.
    pub fn level(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonPanel {
    pub title: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonData {
    pub left: ComparisonPanel,
    pub right: ComparisonPanel,
}

/// Atom body, resolved once when the feed is loaded.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Content {
    PlainText(String),
    Comparison(ComparisonData),
}

impl Content {
    /// Flattened text, used for duplicate and length heuristics.
    pub fn text(&self) -> String {
        match self {
            Self::PlainText(s) => s.clone(),
            Self::Comparison(c) => {
                let mut parts = vec![c.left.title.as_str()];
                parts.extend(c.left.points.iter().map(String::as_str));
                parts.push(c.right.title.as_str());
                parts.extend(c.right.points.iter().map(String::as_str));
                parts.join(" ")
            }
        }
    }

    fn resolve(atom_id: &str, atom_type: AtomType, raw: serde_json::Value) -> ScrollaResult<Self> {
        use serde_json::Value;

        match (atom_type, raw) {
            (AtomType::Comparison, Value::String(s)) => serde_json::from_str(&s)
                .map(Self::Comparison)
                .map_err(|e| {
                    ScrollaError::content(format!(
                        "atom '{atom_id}': comparison content is not valid JSON data: {e}"
                    ))
                }),
            (AtomType::Comparison, v @ Value::Object(_)) => serde_json::from_value(v)
                .map(Self::Comparison)
                .map_err(|e| {
                    ScrollaError::content(format!(
                        "atom '{atom_id}': malformed comparison content: {e}"
                    ))
                }),
            (AtomType::Comparison, _) => Err(ScrollaError::content(format!(
                "atom '{atom_id}': comparison content must be an object or a JSON string"
            ))),
            (_, Value::String(s)) => Ok(Self::PlainText(s)),
            (_, Value::Null) => Ok(Self::PlainText(String::new())),
            (t, _) => Err(ScrollaError::content(format!(
                "atom '{atom_id}': {t} content must be a string"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Atom {
    pub id: String,
    pub concept: String,
    pub atom_type: AtomType,
    pub content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub difficulty: Difficulty,
    pub order: u32,
    pub estimated_read_time_sec: f64,
}

/// One feed atom as the quality report sees it, whether or not its type has a card.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnalyzedAtom {
    pub id: String,
    /// Type label as written in the feed, `"unknown"` when absent.
    pub atom_type: String,
    /// Raw content text; structured content is kept as its JSON encoding.
    pub content: String,
    pub estimated_read_time_sec: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AtomFeed {
    pub topic: String,
    pub atoms: Vec<Atom>,
    /// Ids of atoms whose type is not one of [`AtomType::ALL`]; they have no card.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    /// Every atom in feed order, including the skipped ones.
    #[serde(skip)]
    pub entries: Vec<AnalyzedAtom>,
}

#[derive(serde::Deserialize)]
struct RawFeed {
    #[serde(default)]
    topic: String,
    #[serde(default)]
    atoms: Vec<RawAtom>,
}

#[derive(serde::Deserialize)]
struct RawAtom {
    #[serde(default)]
    id: serde_json::Value,
    #[serde(default)]
    concept: String,
    #[serde(default)]
    atom_type: Option<String>,
    #[serde(default)]
    content: serde_json::Value,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    order: u32,
    #[serde(default)]
    estimated_read_time_sec: f64,
}

fn analysis_text(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn id_string(position: usize, v: serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => format!("#{position}"),
        other => other.to_string(),
    }
}

impl AtomFeed {
    #[tracing::instrument(skip(s), fields(len = s.len()))]
    pub fn from_json_str(s: &str) -> ScrollaResult<Self> {
        let raw: RawFeed = serde_json::from_str(s)?;
        let mut atoms = Vec::with_capacity(raw.atoms.len());
        let mut skipped = Vec::new();
        let mut entries = Vec::with_capacity(raw.atoms.len());

        for (position, a) in raw.atoms.into_iter().enumerate() {
            let id = id_string(position, a.id);
            let label = a.atom_type.unwrap_or_else(|| "unknown".to_string());
            entries.push(AnalyzedAtom {
                id: id.clone(),
                atom_type: label.clone(),
                content: analysis_text(&a.content),
                estimated_read_time_sec: a.estimated_read_time_sec,
            });
            let Ok(atom_type) = label.parse::<AtomType>() else {
                tracing::debug!(atom = %id, atom_type = %label, "atom type has no card");
                skipped.push(id);
                continue;
            };
            let content = Content::resolve(&id, atom_type, a.content)?;
            atoms.push(Atom {
                id,
                concept: a.concept,
                atom_type,
                content,
                answer: a.answer,
                difficulty: a
                    .difficulty
                    .as_deref()
                    .map(Difficulty::parse_lenient)
                    .unwrap_or_default(),
                order: a.order,
                estimated_read_time_sec: a.estimated_read_time_sec,
            });
        }

        tracing::debug!(atoms = atoms.len(), skipped = skipped.len(), "feed resolved");
        Ok(Self {
            topic: raw.topic,
            atoms,
            skipped,
            entries,
        })
    }

    pub fn load(path: &Path) -> ScrollaResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read atom feed '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Atoms sorted by `order`; ties keep feed order.
    pub fn ordered(&self) -> Vec<&Atom> {
        let mut atoms: Vec<&Atom> = self.atoms.iter().collect();
        atoms.sort_by_key(|a| a.order);
        atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/model.rs"]
mod tests;
