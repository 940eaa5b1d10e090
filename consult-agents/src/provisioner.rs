use crate::service::{AgentHandle, ExtractionService, ServiceError};
use serde_json::Value;

/// Returns the remote agent called `name`, creating it from `schema` if absent.
///
/// A failed lookup is logged and treated as "not found", so creation is
/// attempted anyway and the service's own name uniqueness decides. This is a
/// best-effort existence check: two processes provisioning at the same time
/// can both miss and both create.
pub async fn ensure_agent(
    service: &dyn ExtractionService,
    name: &str,
    schema: &Value,
) -> Result<AgentHandle, ServiceError> {
    match service.list_agents().await {
        Ok(agents) => {
            if let Some(agent) = agents.into_iter().find(|agent| agent.name == name) {
                tracing::info!("Using existing extraction agent {} ({})", agent.name, agent.id);
                return Ok(agent);
            }
        }
        Err(err) => {
            tracing::warn!("Error checking existing agents: {}", err);
        }
    }

    tracing::info!("Creating new extraction agent {}", name);
    service.create_agent(name, schema).await
}
