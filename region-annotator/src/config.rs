use crate::raster::StrokeStyle;
use crate::AnnotateError;
use text_detector::TextLevel;

/// Selects `line` or `word` blocks from the detection service
pub const TEXT_LEVEL_VAR: &str = "ANNOTATE_TEXT_LEVEL";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "region_annotator=info,region_loader=info,text_detector=info,warn";

/// Runtime settings. AWS settings are loaded separately by `aws-config`.
#[derive(Debug, Clone, Default)]
pub struct AnnotatorConfig {
    pub text_level: TextLevel,
    pub stroke: StrokeStyle,
}

impl AnnotatorConfig {
    pub fn from_env() -> Result<Self, AnnotateError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AnnotateError> {
        let text_level = match lookup(TEXT_LEVEL_VAR) {
            Some(value) if !value.trim().is_empty() => value
                .parse()
                .map_err(|e| AnnotateError::Config(format!("{TEXT_LEVEL_VAR}: {e}")))?,
            _ => TextLevel::default(),
        };

        Ok(Self {
            text_level,
            stroke: StrokeStyle::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{STROKE_COLOR, STROKE_WIDTH};

    #[test]
    fn test_defaults() {
        let config = AnnotatorConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.text_level, TextLevel::Line);
        assert_eq!(config.stroke.color, STROKE_COLOR);
        assert_eq!(config.stroke.width, STROKE_WIDTH);
    }

    #[test]
    fn test_text_level_from_env() {
        let config = AnnotatorConfig::from_lookup(|key| {
            (key == TEXT_LEVEL_VAR).then(|| "word".to_string())
        })
        .unwrap();

        assert_eq!(config.text_level, TextLevel::Word);
    }

    #[test]
    fn test_blank_text_level_uses_default() {
        let config = AnnotatorConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config.text_level, TextLevel::Line);
    }

    #[test]
    fn test_unknown_text_level_is_rejected() {
        let err = AnnotatorConfig::from_lookup(|_| Some("glyph".to_string())).unwrap_err();

        assert!(matches!(err, AnnotateError::Config(_)));
        assert!(err.to_string().contains(TEXT_LEVEL_VAR));
    }
}
