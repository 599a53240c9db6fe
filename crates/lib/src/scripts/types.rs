use indexmap::IndexMap;
use serde::Serialize;
use toml::Value;

/// One command: program followed by its arguments.
pub type CommandLine = Vec<String>;

/// A validated script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
  /// Description shown when listing scripts.
  pub description: String,
  /// Commands to run, in order.
  pub commands: Vec<CommandLine>,
}

/// Validated scripts keyed by name, in manifest order.
///
/// Only [`crate::scripts::parse_scripts`] builds a table, so every name in it
/// is valid and every path argument is relative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScriptTable(IndexMap<String, Script>);

impl ScriptTable {
  pub(crate) fn insert(&mut self, name: String, script: Script) {
    self.0.insert(name, script);
  }

  pub fn get(&self, name: &str) -> Option<&Script> {
    self.0.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.0.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Script names in manifest order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }

  pub fn iter(&self) -> indexmap::map::Iter<'_, String, Script> {
    self.0.iter()
  }

  /// Render the table back into the contents of a scripts section.
  ///
  /// Every script is written in the structured form with its commands as a
  /// list of lists, so path arguments keep their joined form.
  pub fn to_scripts_table(&self) -> toml::Table {
    self
      .0
      .iter()
      .map(|(name, script)| {
        let mut entry = toml::Table::new();
        entry.insert("description".to_string(), Value::String(script.description.clone()));
        entry.insert(
          "script".to_string(),
          Value::Array(
            script
              .commands
              .iter()
              .map(|line| Value::Array(line.iter().cloned().map(Value::String).collect()))
              .collect(),
          ),
        );
        (name.clone(), Value::Table(entry))
      })
      .collect()
  }

  /// Render a complete manifest holding `project_name` and this table.
  pub fn to_manifest(&self, project_name: &str) -> toml::Table {
    let mut project = toml::Table::new();
    project.insert("name".to_string(), Value::String(project_name.to_string()));

    let mut namespace = toml::Table::new();
    namespace.insert("scripts".to_string(), Value::Table(self.to_scripts_table()));

    let mut tool = toml::Table::new();
    tool.insert(crate::consts::TOOL_NAMESPACE.to_string(), Value::Table(namespace));

    let mut manifest = toml::Table::new();
    manifest.insert("project".to_string(), Value::Table(project));
    manifest.insert("tool".to_string(), Value::Table(tool));
    manifest
  }
}

impl<'a> IntoIterator for &'a ScriptTable {
  type Item = (&'a String, &'a Script);
  type IntoIter = indexmap::map::Iter<'a, String, Script>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
