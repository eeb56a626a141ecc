use crate::env::resolver::VarResolver;
use crate::id::IdGenerator;
use crate::state::environment::{EnvVariable, Environment};

/// Environment list plus the id of the currently selected one. Holding the
/// id rather than a copy means the selection can never drift out of sync
/// with the list it points into.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentStore {
    pub environments: Vec<Environment>,
    pub current_id: Option<String>,
}

impl EnvironmentStore {
    pub fn current(&self) -> Option<&Environment> {
        let id = self.current_id.as_deref()?;
        self.environments.iter().find(|e| e.id == id)
    }

    /// Resolver over the enabled variables of the current environment.
    /// Variables of non-selected environments are never consulted.
    pub fn resolver(&self) -> VarResolver {
        VarResolver::from_environment(self.current())
    }

    /// The first environment ever created becomes current automatically.
    pub fn create_environment(mut self, ids: &mut dyn IdGenerator, name: &str) -> Self {
        let env = Environment::new(ids, name);
        if self.current_id.is_none() {
            self.current_id = Some(env.id.clone());
        }
        self.environments.push(env);
        self
    }

    pub fn rename_environment(mut self, environment_id: &str, name: &str) -> Self {
        if let Some(env) = self.environments.iter_mut().find(|e| e.id == environment_id) {
            env.name = name.to_string();
        }
        self
    }

    /// Deleting the current environment falls back to the first remaining
    /// one, or to no selection.
    pub fn delete_environment(mut self, environment_id: &str) -> Self {
        self.environments.retain(|e| e.id != environment_id);
        if self.current_id.as_deref() == Some(environment_id) {
            self.current_id = self.environments.first().map(|e| e.id.clone());
        }
        self
    }

    /// Select by id, or clear the selection with `None`. An unknown id is
    /// a no-op.
    pub fn select_environment(mut self, environment_id: Option<&str>) -> Self {
        match environment_id {
            None => self.current_id = None,
            Some(id) => {
                if self.environments.iter().any(|e| e.id == id) {
                    self.current_id = Some(id.to_string());
                }
            }
        }
        self
    }

    pub fn add_variable(
        mut self,
        ids: &mut dyn IdGenerator,
        environment_id: &str,
        key: &str,
        value: &str,
    ) -> Self {
        if let Some(env) = self.environments.iter_mut().find(|e| e.id == environment_id) {
            env.variables.push(EnvVariable::new(ids, key, value));
        }
        self
    }

    pub fn update_variable(
        mut self,
        environment_id: &str,
        variable_id: &str,
        apply: impl FnOnce(&mut EnvVariable),
    ) -> Self {
        if let Some(env) = self.environments.iter_mut().find(|e| e.id == environment_id) {
            if let Some(var) = env.variables.iter_mut().find(|v| v.id == variable_id) {
                apply(var);
            }
        }
        self
    }

    pub fn delete_variable(mut self, environment_id: &str, variable_id: &str) -> Self {
        if let Some(env) = self.environments.iter_mut().find(|e| e.id == environment_id) {
            env.variables.retain(|v| v.id != variable_id);
        }
        self
    }
}
