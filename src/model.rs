// Core types: Category, Tier, Classification
use std::fmt;
use thiserror::Error;

/// Fixed category set. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    ComputerHardware,
    ItServices,
    OfficeSupplies,
    Industrial,
    Furniture,
    Medical,
    Unclassified,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::ComputerHardware => "Computer Hardware Solutions",
            Category::ItServices => "Information Technology Services",
            Category::OfficeSupplies => "Office Products & Supplies",
            Category::Industrial => "Industrial Products & Services",
            Category::Furniture => "Furniture & Furnishings",
            Category::Medical => "Medical Equipment & Supplies",
            Category::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword specificity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn weight(&self) -> f64 {
        match self {
            Tier::High => 3.0,
            Tier::Medium => 2.0,
            Tier::Low => 1.0,
        }
    }
}

/// Score of one category for one piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCategory {
    pub category: Category,
    pub score: f64,
    /// Share of the total score mass, in percent.
    pub confidence: f64,
}

/// Outcome of a single categorization call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub category: Category,
    pub confidence: f64,
}

impl Classification {
    pub fn unclassified(confidence: f64) -> Self {
        Self {
            category: Category::Unclassified,
            confidence,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no catalog path given (config or first argument)")]
    MissingCatalogPath,
    #[error("threshold {name} = {value} is out of range")]
    InvalidThreshold { name: &'static str, value: f64 },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog not found: {0}")]
    NotFound(String),
    #[error("catalog is locked or in use: {0}")]
    Locked(String),
    #[error("column not found: {0}")]
    MissingColumn(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("bad keyword pattern {keyword:?}: {source}")]
    Pattern {
        keyword: String,
        #[source]
        source: regex::Error,
    },
}
