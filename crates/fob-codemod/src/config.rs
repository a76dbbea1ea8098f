//! Codemod configuration

use serde::{Deserialize, Serialize};

use crate::error::{CodemodError, Result};
use crate::format::is_identifier_name;

/// Library roots rewritten by the import splitter by default
pub const DEFAULT_LIBRARIES: &[&str] = &[
    "@material-ui/core",
    "@material-ui/icons",
    "@material-ui/lab",
    "@material-ui/pickers",
];

/// Settings shared by both transforms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CodemodConfig {
    /// Suffix a prop type name must end with (`ButtonProps`)
    pub suffix: String,

    /// Generic wrapper type used for the canonical declaration (`FC`)
    pub wrapper_symbol: String,

    /// Module the wrapper type is imported from (`react`)
    pub wrapper_module: String,

    /// Library roots whose imports are split per symbol
    pub libraries: Vec<String>,
}

impl Default for CodemodConfig {
    fn default() -> Self {
        Self {
            suffix: "Props".to_string(),
            wrapper_symbol: "FC".to_string(),
            wrapper_module: "react".to_string(),
            libraries: DEFAULT_LIBRARIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CodemodConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`CodemodError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            return Err(CodemodError::invalid_config("suffix", "must not be empty"));
        }

        if !is_identifier_name(&self.wrapper_symbol) {
            return Err(CodemodError::invalid_config(
                "wrapperSymbol",
                format!("'{}' is not a valid identifier", self.wrapper_symbol),
            ));
        }

        if self.wrapper_module.trim().is_empty() {
            return Err(CodemodError::invalid_config(
                "wrapperModule",
                "must not be empty",
            ));
        }

        if let Some(idx) = self.libraries.iter().position(|lib| lib.trim().is_empty()) {
            return Err(CodemodError::invalid_config(
                format!("libraries[{idx}]"),
                "library root must not be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_react_conventions() {
        let config = CodemodConfig::default();
        assert_eq!(config.suffix, "Props");
        assert_eq!(config.wrapper_symbol, "FC");
        assert_eq!(config.wrapper_module, "react");
        assert_eq!(config.libraries.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_partial_camel_case() {
        let config: CodemodConfig = serde_json::from_value(json!({
            "wrapperSymbol": "VFC",
            "libraries": ["@mui/material"]
        }))
        .unwrap();

        assert_eq!(config.wrapper_symbol, "VFC");
        assert_eq!(config.suffix, "Props");
        assert_eq!(config.libraries, vec!["@mui/material".to_string()]);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: std::result::Result<CodemodConfig, _> =
            serde_json::from_value(json!({ "wrapper": "FC" }));
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = CodemodConfig::default();
        config.wrapper_symbol = "React.FC".into();
        assert!(matches!(
            config.validate(),
            Err(CodemodError::InvalidConfig { ref field, .. }) if field == "wrapperSymbol"
        ));

        let mut config = CodemodConfig::default();
        config.suffix.clear();
        assert!(config.validate().is_err());

        let mut config = CodemodConfig::default();
        config.libraries.push("  ".into());
        assert!(matches!(
            config.validate(),
            Err(CodemodError::InvalidConfig { ref field, .. }) if field == "libraries[4]"
        ));
    }
}
