//! Column order for transposed text

use serde::{Deserialize, Serialize};

/// Which side the first original line ends up on once transposed.
///
/// `RightToLeft` is the traditional CJK layout: original line 0 becomes the
/// rightmost column. The direction is never stored in the text itself, so the
/// same value must be used when converting back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineDirection {
    #[default]
    RightToLeft,
    LeftToRight,
}

impl LineDirection {
    pub fn from_rtl(lines_rtl: bool) -> Self {
        if lines_rtl {
            Self::RightToLeft
        } else {
            Self::LeftToRight
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

impl From<bool> for LineDirection {
    fn from(lines_rtl: bool) -> Self {
        Self::from_rtl(lines_rtl)
    }
}

impl std::fmt::Display for LineDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RightToLeft => write!(f, "right-to-left"),
            Self::LeftToRight => write!(f, "left-to-right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rtl() {
        assert_eq!(LineDirection::default(), LineDirection::RightToLeft);
        assert!(LineDirection::default().is_rtl());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(LineDirection::from(true), LineDirection::RightToLeft);
        assert_eq!(LineDirection::from(false), LineDirection::LeftToRight);
        assert!(!LineDirection::from_rtl(false).is_rtl());
    }

    #[test]
    fn test_yaml_names() {
        let yaml = serde_yaml::to_string(&LineDirection::LeftToRight).unwrap();
        assert_eq!(yaml.trim(), "left-to-right");

        let parsed: LineDirection = serde_yaml::from_str("right-to-left").unwrap();
        assert_eq!(parsed, LineDirection::RightToLeft);
    }
}
