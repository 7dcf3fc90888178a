use std::fmt;

/// Which shape of ranked output a listing produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Every comment of the video, replies included, in one ranked list
    #[default]
    All,
    /// Top-level comments only, ranked and limited
    Top,
    /// Ranked top-level comments, each carrying its newest replies
    Nested,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::All => write!(f, "all"),
            ViewMode::Top => write!(f, "top"),
            ViewMode::Nested => write!(f, "nested"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "ranked" => Ok(ViewMode::All),
            "top" => Ok(ViewMode::Top),
            "nested" | "threaded" => Ok(ViewMode::Nested),
            _ => Err(anyhow::anyhow!(
                "Invalid view '{}'. Valid options: all, top, nested",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_parsing() {
        assert_eq!("all".parse::<ViewMode>().unwrap(), ViewMode::All);
        assert_eq!("ranked".parse::<ViewMode>().unwrap(), ViewMode::All);
        assert_eq!("top".parse::<ViewMode>().unwrap(), ViewMode::Top);
        assert_eq!("TOP".parse::<ViewMode>().unwrap(), ViewMode::Top);
        assert_eq!("nested".parse::<ViewMode>().unwrap(), ViewMode::Nested);
        assert_eq!("Threaded".parse::<ViewMode>().unwrap(), ViewMode::Nested);
    }

    #[test]
    fn test_view_mode_parsing_invalid() {
        let err = "tree".parse::<ViewMode>().unwrap_err();
        assert!(err.to_string().contains("Invalid view"));
    }

    #[test]
    fn test_view_mode_display_round_trips() {
        for mode in [ViewMode::All, ViewMode::Top, ViewMode::Nested] {
            assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
        }
        assert_eq!(ViewMode::default(), ViewMode::All);
    }
}
