//! Form description configuration
//!
//! Forms are described in TOML: a `[logging]` section and a `[form]` tree of
//! controls with bounds and anchors. `FormConfig::build` turns the
//! description into a live [`Container`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    AnchorPair, Bounds, Container, Control, ControlKind, DomainError, Insets, Size, Widget,
};

/// Name of the form description file searched for by default
pub const FORM_FILE: &str = "form.toml";

// ============================================================================
// LOGGING
// ============================================================================

/// Logging settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to write a log file
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log file path; relative paths resolve next to the executable
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl LoggingConfig {
    /// Resolved log file path
    pub fn path(&self) -> PathBuf {
        match &self.file {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => crate::log::exe_dir().join(p),
            None => crate::log::exe_dir().join(crate::log::DEFAULT_LOG_FILE),
        }
    }
}

// ============================================================================
// FORM DESCRIPTION
// ============================================================================

/// Top-level form
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormSpec {
    #[serde(default = "default_form_name")]
    pub name: String,
    /// Outer width including chrome
    pub width: i32,
    /// Outer height including chrome
    pub height: i32,
    #[serde(default)]
    pub chrome: Insets,
    #[serde(default)]
    pub controls: Vec<ControlSpec>,
}

fn default_form_name() -> String {
    "form".to_string()
}

/// One control, possibly with nested controls
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ControlSpec {
    pub name: String,
    #[serde(default)]
    pub kind: ControlKind,
    pub bounds: Bounds,
    #[serde(default)]
    pub anchors: AnchorPair,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Chrome thickness, only meaningful for container kinds
    #[serde(default)]
    pub chrome: Insets,
    #[serde(default)]
    pub controls: Vec<ControlSpec>,
}

impl ControlSpec {
    fn build(&self) -> Result<Box<dyn Control>, DomainError> {
        if !self.kind.is_container() {
            if !self.controls.is_empty() {
                return Err(DomainError::Validation(format!(
                    "control '{}' of kind {:?} cannot have child controls",
                    self.name, self.kind
                )));
            }
            if self.chrome != Insets::default() {
                return Err(DomainError::Validation(format!(
                    "control '{}' of kind {:?} cannot have chrome",
                    self.name, self.kind
                )));
            }
            let widget = Widget::new(self.name.clone(), self.kind, self.bounds)
                .with_anchors(self.anchors)
                .with_visible(self.visible)
                .with_enabled(self.enabled);
            return Ok(Box::new(widget));
        }

        let mut container = Container::new(self.name.clone(), self.kind, self.bounds)
            .with_anchors(self.anchors)
            .with_insets(self.chrome)
            .with_visible(self.visible)
            .with_enabled(self.enabled);
        add_children(&mut container, &self.controls)?;
        Ok(Box::new(container))
    }
}

fn add_children(container: &mut Container, specs: &[ControlSpec]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for spec in specs {
        if spec.name.is_empty() {
            return Err(DomainError::Validation(format!(
                "unnamed control in '{}'",
                container.name()
            )));
        }
        if !seen.insert(spec.name.as_str()) {
            return Err(DomainError::Validation(format!(
                "duplicate control name '{}' in '{}'",
                spec.name,
                container.name()
            )));
        }
        container.add_child(spec.build()?);
    }
    Ok(())
}

/// Complete form description file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    pub form: FormSpec,
}

impl FormConfig {
    /// Find form.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("anchor-layout").join(FORM_FILE)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(FORM_FILE))),
            Some(PathBuf::from(FORM_FILE)),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the form's root container from the description
    pub fn build(&self) -> Result<Container, DomainError> {
        let spec = &self.form;
        let mut root = Container::new(
            spec.name.clone(),
            ControlKind::Panel,
            Bounds::new(0, 0, spec.width, spec.height),
        )
        .with_insets(spec.chrome);
        add_children(&mut root, &spec.controls)?;
        Ok(root)
    }

    /// Inner size of the form as described
    pub fn inner_size(&self) -> Size {
        self.form
            .chrome
            .shrink(Size::new(self.form.width, self.form.height))
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::Anchor;

    const SAMPLE: &str = r#"
        [logging]
        enabled = false

        [form]
        name = "browser"
        width = 602
        height = 421
        chrome = { left = 1, top = 20, right = 1, bottom = 1 }

        [[form.controls]]
        name = "address"
        kind = "edit"
        bounds = { x = 10, y = 10, width = 580, height = 20 }
        anchors = { horizontal = "min-and-max", vertical = "min" }

        [[form.controls]]
        name = "go"
        kind = "button"
        bounds = { x = 500, y = 40, width = 75, height = 25 }
        anchors = { horizontal = "max" }

        [[form.controls]]
        name = "body"
        kind = "group-box"
        bounds = { x = 0, y = 80, width = 600, height = 320 }
        anchors = { horizontal = "min-and-max", vertical = "min-and-max" }
        chrome = { top = 20 }

            [[form.controls.controls]]
            name = "items"
            kind = "list-view"
            bounds = { x = 0, y = 0, width = 600, height = 300 }
            anchors = { horizontal = "min-and-max", vertical = "min-and-max" }
            visible = false
    "#;

    #[test]
    fn test_parse_sample() {
        let config = FormConfig::parse(SAMPLE).unwrap();

        assert!(!config.logging.enabled);
        assert_eq!(config.form.name, "browser");
        assert_eq!(config.inner_size(), Size::new(600, 400));
        assert_eq!(config.form.controls.len(), 3);

        let go = &config.form.controls[1];
        assert_eq!(go.kind, ControlKind::Button);
        assert_eq!(go.anchors, AnchorPair::new(Anchor::Max, Anchor::Min));

        let body = &config.form.controls[2];
        assert_eq!(body.chrome, Insets::new(0, 20, 0, 0));
        assert!(!body.controls[0].visible);
    }

    #[test]
    fn test_build_and_resize() {
        let mut form = FormConfig::parse(SAMPLE).unwrap().build().unwrap();
        assert_eq!(form.inner_size(), Size::new(600, 400));

        form.set_bounds(Bounds::new(0, 0, 802, 521));

        assert_eq!(form.inner_size(), Size::new(800, 500));
        assert_eq!(form.find("address").unwrap().bounds(), Bounds::new(10, 10, 780, 20));
        assert_eq!(form.find("go").unwrap().bounds(), Bounds::new(700, 40, 75, 25));
        assert_eq!(form.find("body").unwrap().bounds(), Bounds::new(0, 80, 800, 420));
        assert_eq!(
            form.find("body/items").unwrap().bounds(),
            Bounds::new(0, 0, 800, 400)
        );
    }

    #[test]
    fn test_leaf_with_children_is_rejected() {
        let text = r#"
            [form]
            width = 100
            height = 100

            [[form.controls]]
            name = "ok"
            kind = "button"
            bounds = { x = 0, y = 0, width = 10, height = 10 }

                [[form.controls.controls]]
                name = "inner"
                bounds = { x = 0, y = 0, width = 1, height = 1 }
        "#;
        let config = FormConfig::parse(text).unwrap();
        assert!(matches!(config.build(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_leaf_with_chrome_is_rejected() {
        let text = r#"
            [form]
            width = 100
            height = 100

            [[form.controls]]
            name = "ok"
            kind = "button"
            bounds = { x = 0, y = 0, width = 10, height = 10 }
            chrome = { top = 4 }
        "#;
        let config = FormConfig::parse(text).unwrap();
        assert!(matches!(config.build(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let text = r#"
            [form]
            width = 100
            height = 100

            [[form.controls]]
            name = "a"
            bounds = { x = 0, y = 0, width = 10, height = 10 }

            [[form.controls]]
            name = "a"
            bounds = { x = 0, y = 20, width = 10, height = 10 }
        "#;
        let config = FormConfig::parse(text).unwrap();
        assert!(matches!(config.build(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_unknown_anchor_is_parse_error() {
        let text = r#"
            [form]
            width = 100
            height = 100

            [[form.controls]]
            name = "a"
            bounds = { x = 0, y = 0, width = 10, height = 10 }
            anchors = { horizontal = "left" }
        "#;
        assert!(matches!(FormConfig::parse(text), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = FormConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.form.controls.len(), 3);

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            FormConfig::load_from_path(&missing),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_logging_path_resolution() {
        let absolute = std::env::temp_dir().join("x.log");
        let config = LoggingConfig {
            enabled: true,
            file: Some(absolute.clone()),
        };
        assert_eq!(config.path(), absolute);

        let relative = LoggingConfig {
            enabled: true,
            file: Some(PathBuf::from("x.log")),
        };
        assert_eq!(relative.path(), crate::log::exe_dir().join("x.log"));
    }
}
