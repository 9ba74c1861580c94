use std::collections::HashMap;

use indexmap::IndexSet;
use leon::Template;

use crate::definitions::ParameterDefinition;
use crate::error::Result;

/// Maps parameter IDs to their defaults, skipping parameters without one.
pub fn build_default_lookup(definitions: &Option<Vec<ParameterDefinition>>) -> HashMap<String, String> {
    let mut defaults: HashMap<String, String> = HashMap::new();

    if let Some(definitions) = definitions.as_ref() {
        for definition in definitions {
            if let Some(default) = &definition.default {
                defaults.insert(definition.id.clone(), default.clone());
            }
        }
    }

    defaults
}

/// Find all tokens in all templates, in order of first appearance.
pub fn get_tokens(templates: &[Template]) -> IndexSet<String> {
    let mut tokens = IndexSet::new();

    for template in templates {
        for key in template.keys() {
            let _ = tokens.insert((*key).to_string());
        }
    }

    tokens
}

pub fn get_templates<S: AsRef<str>>(arguments: &[S]) -> Result<Vec<Template>> {
    let mut templates: Vec<Template> = Vec::new();

    for argument in arguments {
        templates.push(Template::parse(argument.as_ref())?);
    }

    Ok(templates)
}

/// Renders a single template string against `context`.
pub fn interpolate(template: &str, context: &HashMap<String, String>) -> Result<String> {
    Ok(Template::parse(template)?.render(&context)?)
}
