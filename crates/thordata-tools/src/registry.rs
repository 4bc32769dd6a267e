//! Registry for tool implementations.

use crate::tool::{Tool, ToolSpec};
use log::{debug, info};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thordata_tools_protocol::{ToolError, ToolOutput};

/// In-memory registry for tool implementations.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    /// Map of tool name to implementation.
    tools: Arc<RwLock<HashMap<String, Arc<dyn Tool>>>>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool by name, replacing any tool with the same name.
    pub fn register(&self, tool: Arc<dyn Tool>) {
        debug!("registering tool (name={})", tool.name());
        self.tools.write().insert(tool.name().to_string(), tool);
    }

    /// Fetch a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.read().get(name).cloned()
    }

    /// List all registered tool names, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Return all registered tool instances.
    pub fn all(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.read().values().cloned().collect()
    }

    /// Return tool specs for all registered tools, sorted by name.
    pub fn specs(&self) -> Vec<ToolSpec> {
        let mut specs: Vec<ToolSpec> = self.tools.read().values().map(|tool| tool.spec()).collect();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        specs
    }

    /// Invoke a registered tool by name.
    pub fn invoke(&self, name: &str, args: Value) -> Result<ToolOutput, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::ToolNotFound(name.to_string()))?;
        info!("invoking tool (name={})", name);
        tool.invoke(args)
    }
}

#[cfg(test)]
mod tests {
    use super::ToolRegistry;
    use crate::Tool;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use thordata_tools_protocol::{ToolError, ToolOutput};

    struct DummyTool {
        name: &'static str,
    }

    impl Tool for DummyTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "dummy"
        }

        fn args_schema(&self) -> Value {
            json!({})
        }

        fn invoke(&self, args: Value) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput::Structured(args))
        }
    }

    #[test]
    fn registry_tracks_tools_and_specs() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool { name: "write" }));
        registry.register(Arc::new(DummyTool { name: "read" }));

        assert_eq!(registry.list(), vec!["read", "write"]);

        let spec_names = registry
            .specs()
            .into_iter()
            .map(|spec| spec.name)
            .collect::<Vec<_>>();
        assert_eq!(spec_names, vec!["read", "write"]);
        assert_eq!(registry.all().len(), 2);
    }

    #[test]
    fn registry_invokes_by_name() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool { name: "echo" }));

        let output = registry.invoke("echo", json!({ "a": 1 })).expect("invoke");
        assert_eq!(output, ToolOutput::Structured(json!({ "a": 1 })));

        let err = registry.invoke("missing", json!({})).expect_err("missing");
        assert!(matches!(err, ToolError::ToolNotFound(name) if name == "missing"));
    }
}
