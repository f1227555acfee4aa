//! Classification methods

use std::fmt;
use std::str::FromStr;

use crate::error::ClassifyError;

/// Method used to place class breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationMethod {
    /// Classes of equal width between the band extrema
    EqualInterval,
    /// Classes of (approximately) equal population
    Quantile,
    /// Jenks natural breaks: minimal within-class variance
    NaturalBreaks,
}

impl ClassificationMethod {
    /// Canonical snake_case name
    pub fn name(self) -> &'static str {
        match self {
            Self::EqualInterval => "equal_interval",
            Self::Quantile => "quantile",
            Self::NaturalBreaks => "natural_breaks",
        }
    }

    /// Whether the method has a histogram-approximated variant
    pub fn supports_histogram(self) -> bool {
        !matches!(self, Self::EqualInterval)
    }
}

impl fmt::Display for ClassificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClassificationMethod {
    type Err = ClassifyError;

    /// Parse a method name, case-insensitively.
    ///
    /// ```
    /// use tessera_classify::ClassificationMethod;
    ///
    /// let m: ClassificationMethod = "Jenks".parse().unwrap();
    /// assert_eq!(m, ClassificationMethod::NaturalBreaks);
    /// assert!("kmeans".parse::<ClassificationMethod>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equal_interval" | "equalinterval" => Ok(Self::EqualInterval),
            "quantile" => Ok(Self::Quantile),
            "natural_breaks" | "naturalbreaks" | "jenks" => Ok(Self::NaturalBreaks),
            _ => Err(ClassifyError::UnknownMethod(s.to_string())),
        }
    }
}
