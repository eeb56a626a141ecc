use std::collections::HashMap;

use crate::env::interpolator::parse_placeholders;
use crate::state::environment::Environment;

/// Substitutes `{{key}}` placeholders using the enabled variables of the
/// active environment. Disabled variables and unknown keys are inert: their
/// placeholders pass through verbatim. Resolution is single-pass — resolved
/// values are never re-scanned for further placeholders, and there is no
/// escape syntax for literal `{{...}}` text.
#[derive(Debug, Clone, Default)]
pub struct VarResolver {
    vars: HashMap<String, String>,
}

impl VarResolver {
    /// Build a resolver from the currently selected environment, if any.
    /// With no environment, `resolve` is the identity function.
    pub fn from_environment(env: Option<&Environment>) -> Self {
        let mut vars = HashMap::new();
        if let Some(env) = env {
            for var in &env.variables {
                if var.enabled {
                    vars.entry(var.key.clone()).or_insert_with(|| var.value.clone());
                }
            }
        }
        Self { vars }
    }

    pub fn resolve(&self, input: &str) -> String {
        if self.vars.is_empty() {
            return input.to_string();
        }

        let spans = parse_placeholders(input);
        if spans.is_empty() {
            return input.to_string();
        }

        let mut output = String::with_capacity(input.len());
        let mut last = 0;

        for span in &spans {
            output.push_str(&input[last..span.start]);
            match self.vars.get(&span.key) {
                Some(value) => output.push_str(value),
                // Unmatched placeholders stay as typed
                None => output.push_str(&input[span.start..span.end]),
            }
            last = span.end;
        }

        output.push_str(&input[last..]);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialGenerator;
    use crate::state::environment::EnvVariable;

    fn make_env(vars: &[(&str, &str, bool)]) -> Environment {
        let mut ids = SequentialGenerator::new("var");
        Environment {
            id: "env-1".to_string(),
            name: "Test".to_string(),
            variables: vars
                .iter()
                .map(|(k, v, enabled)| {
                    let mut var = EnvVariable::new(&mut ids, *k, *v);
                    var.enabled = *enabled;
                    var
                })
                .collect(),
        }
    }

    #[test]
    fn test_resolves_base_url() {
        let env = make_env(&[("baseUrl", "https://api.example.com", true)]);
        let r = VarResolver::from_environment(Some(&env));
        assert_eq!(r.resolve("{{baseUrl}}/users"), "https://api.example.com/users");
    }

    #[test]
    fn test_no_environment_is_identity() {
        let r = VarResolver::from_environment(None);
        assert_eq!(r.resolve("{{baseUrl}}/users"), "{{baseUrl}}/users");
        assert_eq!(r.resolve("plain text"), "plain text");
    }

    #[test]
    fn test_disabled_variables_are_inert() {
        let env = make_env(&[("token", "secret", false)]);
        let r = VarResolver::from_environment(Some(&env));
        assert_eq!(r.resolve("Bearer {{token}}"), "Bearer {{token}}");
    }

    #[test]
    fn test_unmatched_placeholders_stay_verbatim() {
        let env = make_env(&[("host", "example.com", true)]);
        let r = VarResolver::from_environment(Some(&env));
        assert_eq!(r.resolve("{{host}}/{{missing}}"), "example.com/{{missing}}");
    }

    #[test]
    fn test_repeated_key_replaces_every_occurrence() {
        let env = make_env(&[("v", "1", true)]);
        let r = VarResolver::from_environment(Some(&env));
        assert_eq!(r.resolve("/{{v}}/a/{{v}}/b"), "/1/a/1/b");
    }

    #[test]
    fn test_substitution_is_not_recursive() {
        let env = make_env(&[("a", "{{b}}", true), ("b", "deep", true)]);
        let r = VarResolver::from_environment(Some(&env));
        // The resolved value of `a` is not re-scanned
        assert_eq!(r.resolve("{{a}}"), "{{b}}");
    }

    #[test]
    fn test_stray_brace_before_a_placeholder_resolves_it() {
        let env = make_env(&[("b", "VALUE", true)]);
        let r = VarResolver::from_environment(Some(&env));
        assert_eq!(r.resolve("{{a}/{{b}}"), "{{a}/VALUE");
    }

    #[test]
    fn test_text_outside_spans_is_untouched() {
        let env = make_env(&[("k", "v", true)]);
        let r = VarResolver::from_environment(Some(&env));
        assert_eq!(r.resolve("a {{k}} b {{k}} c"), "a v b v c");
    }
}
