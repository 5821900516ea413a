//! Plugin parameter mapping.
//!
//! Hosts hand every plugin an opaque string-to-string mapping of its
//! parameters. [`PluginParameters`] is that mapping; it can be built by hand or
//! loaded from one of two on-disk formats:
//!
//! - an RPG Maker style `js/plugins.js` manifest:
//!
//! ```js
//! var $plugins =
//! [
//! {"name":"DynamicResize","status":true,"description":"","parameters":{"Base Width":"816","Base Height":"624","Maintain Aspect Ratio":"true","Resize Delay":"100"}}
//! ];
//! ```
//!
//! - an INI file with an `[autoscale]` section:
//!
//! ```ini
//! [autoscale]
//! base_width = 816
//! base_height = 624
//! maintain_aspect_ratio = true
//! resize_delay = 100
//! ```
//!
//! Values are kept as raw strings; interpretation happens in
//! [`AutoscaleConfig::from_parameters`](crate::resources::autoscaleconfig::AutoscaleConfig::from_parameters).

use crate::resources::autoscaleconfig::{
    ConfigError, PARAM_BASE_HEIGHT, PARAM_BASE_WIDTH, PARAM_MAINTAIN_ASPECT, PARAM_RESIZE_DELAY,
};
use configparser::ini::Ini;
use log::info;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;

/// Plugin name looked up in `plugins.js` when none is given.
pub const DEFAULT_PLUGIN_NAME: &str = "DynamicResize";

/// Variable the manifest assigns the plugin array to.
const PLUGINS_VAR: &str = "$plugins";

/// INI section holding the autoscaler keys.
const INI_SECTION: &str = "autoscale";

/// INI key -> plugin parameter name.
const INI_KEYS: [(&str, &str); 4] = [
    ("base_width", PARAM_BASE_WIDTH),
    ("base_height", PARAM_BASE_HEIGHT),
    ("maintain_aspect_ratio", PARAM_MAINTAIN_ASPECT),
    ("resize_delay", PARAM_RESIZE_DELAY),
];

/// One entry of the `$plugins` array.
#[derive(Debug, Deserialize)]
struct PluginEntry {
    name: String,
    #[serde(default = "default_status")]
    status: bool,
    #[serde(default)]
    parameters: FxHashMap<String, serde_json::Value>,
}

fn default_status() -> bool {
    true
}

/// Raw key/value parameters of a single plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginParameters {
    values: FxHashMap<String, String>,
}

impl PluginParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw value of a parameter, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Extract the parameters of `plugin_name` from a `plugins.js` manifest.
    ///
    /// The manifest is a JavaScript assignment wrapping a JSON array. The array
    /// starts at the first `[` after `$plugins` (or in the whole source when
    /// there is no `$plugins`) and ends at the last `]`; header comments are
    /// ignored. Non-string parameter values are stringified.
    pub fn from_plugins_js(source: &str, plugin_name: &str) -> Result<Self, ConfigError> {
        let search_from = source.find(PLUGINS_VAR).unwrap_or(0);
        let start = source[search_from..].find('[').map(|i| search_from + i);
        let (Some(start), Some(end)) = (start, source.rfind(']')) else {
            return Err(ConfigError::Manifest(
                "no plugin array found in manifest".to_string(),
            ));
        };
        if end < start {
            return Err(ConfigError::Manifest(
                "no plugin array found in manifest".to_string(),
            ));
        }

        let entries: Vec<PluginEntry> = serde_json::from_str(&source[start..=end])
            .map_err(|e| ConfigError::Manifest(e.to_string()))?;

        let entry = entries
            .into_iter()
            .find(|entry| entry.name == plugin_name)
            .ok_or_else(|| ConfigError::MissingPlugin(plugin_name.to_string()))?;

        if !entry.status {
            return Err(ConfigError::PluginDisabled(entry.name));
        }

        let values = entry
            .parameters
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();

        Ok(Self { values })
    }

    /// Read a `plugins.js` manifest from disk. See [`Self::from_plugins_js`].
    pub fn load_plugins_js(
        path: impl AsRef<Path>,
        plugin_name: &str,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
        let params = Self::from_plugins_js(&source, plugin_name)?;
        info!(
            "Loaded {} parameter(s) for plugin '{}' from {}",
            params.len(),
            plugin_name,
            path.display()
        );
        Ok(params)
    }

    /// Read the `[autoscale]` section of an INI file.
    ///
    /// Keys that are absent stay absent, so they fall back to their defaults.
    pub fn load_ini(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = Ini::new();
        config
            .load(path)
            .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;

        let mut params = Self::new();
        for (ini_key, param) in INI_KEYS {
            if let Some(value) = config.get(INI_SECTION, ini_key) {
                params.insert(param, value);
            }
        }

        info!(
            "Loaded {} parameter(s) from [{}] in {}",
            params.len(),
            INI_SECTION,
            path.display()
        );
        Ok(params)
    }
}

impl<K, V> FromIterator<(K, V)> for PluginParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"// Generated by RPG Maker.
// Do not edit this file directly.
var $plugins =
[
{"name":"OtherPlugin","status":true,"description":"","parameters":{"Base Width":"1"}},
{"name":"DynamicResize","status":true,"description":"Fit the game to the browser window","parameters":{"Base Width":"1280","Base Height":"720","Maintain Aspect Ratio":"false","Resize Delay":"250"}},
{"name":"Disabled","status":false,"description":"","parameters":{}}
];
"#;

    #[test]
    fn test_plugins_js_selects_named_entry() {
        let params = PluginParameters::from_plugins_js(MANIFEST, DEFAULT_PLUGIN_NAME).unwrap();
        assert_eq!(params.len(), 4);
        assert_eq!(params.get(PARAM_BASE_WIDTH), Some("1280"));
        assert_eq!(params.get(PARAM_BASE_HEIGHT), Some("720"));
        assert_eq!(params.get(PARAM_MAINTAIN_ASPECT), Some("false"));
        assert_eq!(params.get(PARAM_RESIZE_DELAY), Some("250"));
    }

    #[test]
    fn test_plugins_js_ignores_brackets_in_header() {
        let source = format!("// Generated by RPG Maker [MZ]\n{}", MANIFEST);
        let params = PluginParameters::from_plugins_js(&source, DEFAULT_PLUGIN_NAME).unwrap();
        assert_eq!(params.get(PARAM_BASE_WIDTH), Some("1280"));
    }

    #[test]
    fn test_plugins_js_missing_plugin() {
        let err = PluginParameters::from_plugins_js(MANIFEST, "NotThere").unwrap_err();
        assert!(matches!(err, ConfigError::MissingPlugin(name) if name == "NotThere"));
    }

    #[test]
    fn test_plugins_js_disabled_plugin() {
        let err = PluginParameters::from_plugins_js(MANIFEST, "Disabled").unwrap_err();
        assert!(matches!(err, ConfigError::PluginDisabled(name) if name == "Disabled"));
    }

    #[test]
    fn test_plugins_js_without_array_is_rejected() {
        let err = PluginParameters::from_plugins_js("var $plugins = null;", "X").unwrap_err();
        assert!(matches!(err, ConfigError::Manifest(_)));
    }

    #[test]
    fn test_plugins_js_malformed_json_is_rejected() {
        let err = PluginParameters::from_plugins_js("var $plugins = [{\"name\": ];", "X")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Manifest(_)));
    }

    #[test]
    fn test_plugins_js_stringifies_non_string_values() {
        let source = r#"[{"name":"DynamicResize","parameters":{"Base Width":640,"Maintain Aspect Ratio":true,"Resize Delay":null}}]"#;
        let params = PluginParameters::from_plugins_js(source, DEFAULT_PLUGIN_NAME).unwrap();
        assert_eq!(params.get(PARAM_BASE_WIDTH), Some("640"));
        assert_eq!(params.get(PARAM_MAINTAIN_ASPECT), Some("true"));
        assert_eq!(params.get(PARAM_RESIZE_DELAY), Some(""));
    }

    #[test]
    fn test_load_ini_maps_keys() {
        let path = std::env::temp_dir().join(format!(
            "dynamicresize-params-{}.ini",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[autoscale]\nbase_width = 640\nmaintain_aspect_ratio = false\n",
        )
        .unwrap();

        let params = PluginParameters::load_ini(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(params.len(), 2);
        assert_eq!(params.get(PARAM_BASE_WIDTH), Some("640"));
        assert_eq!(params.get(PARAM_MAINTAIN_ASPECT), Some("false"));
        assert_eq!(params.get(PARAM_BASE_HEIGHT), None);
    }

    #[test]
    fn test_load_ini_missing_file() {
        let err = PluginParameters::load_ini("/definitely/not/here.ini").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn test_from_iterator() {
        let params: PluginParameters = [(PARAM_BASE_WIDTH, "100")].into_iter().collect();
        assert_eq!(params.get(PARAM_BASE_WIDTH), Some("100"));
        assert!(!params.is_empty());
    }
}
