use std::collections::HashMap;
use std::sync::Arc;

use exordial_core::{config::Config, generator::PetitionGenerator};
use tracing::warn;

use crate::{
    chatvolt::ChatvoltGenerator, gemini::GeminiClient, groq::GroqGenerator,
    orchestrated::OrchestratedGenerator, simulated::SimulatedGenerator,
};

/// Build the name-keyed backend map from config.
///
/// Backends whose construction fails (missing credential) are left out
/// of the map with a warning; selecting them by name then fails
/// explicitly at resolution instead of running half-configured.
pub fn backends(config: &Config) -> HashMap<String, Arc<dyn PetitionGenerator>> {
    let mut map: HashMap<String, Arc<dyn PetitionGenerator>> = HashMap::new();
    map.insert("simulated".into(), Arc::new(SimulatedGenerator));

    match GroqGenerator::from_config(config) {
        Ok(g) => {
            map.insert("groq".into(), Arc::new(g));
        },
        Err(e) => warn!("groq backend disabled: {e}"),
    }

    match ChatvoltGenerator::from_config(config) {
        Ok(g) => {
            map.insert("chatvolt".into(), Arc::new(g));
        },
        Err(e) => warn!("chatvolt backend disabled: {e}"),
    }

    match GeminiClient::from_config(config) {
        Ok(client) => {
            map.insert(
                "flow".into(),
                Arc::new(OrchestratedGenerator::new(Arc::new(client))),
            );
        },
        Err(e) => warn!("orchestrated flow backend disabled: {e}"),
    }

    map
}

/// Resolve a backend for a run.
///
/// An explicit choice must exist in the map — an unknown or
/// unconfigured name is `None`, never a silent fallback. Without a
/// choice, the configured default is used, falling back to the
/// always-present simulated backend.
pub fn resolve(
    map: &HashMap<String, Arc<dyn PetitionGenerator>>,
    choice: Option<&str>,
    config: &Config,
) -> Option<Arc<dyn PetitionGenerator>> {
    match choice {
        Some(name) => map.get(name).map(Arc::clone),
        None => map
            .get(&config.default_backend)
            .or_else(|| map.get("simulated"))
            .map(Arc::clone),
    }
}
