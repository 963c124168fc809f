use crate::agent::AgentRegistry;
use crate::api::types::AgentsResponse;

/// Execute the `agents` command: display all listable agents.
pub fn execute(registry: &AgentRegistry) {
    let listing = AgentsResponse::from_registry(registry);

    println!("{:<10} {:<10} {:<8} DESCRIPTION", "ID", "NAME", "ICON");
    for agent in &listing.agents {
        println!(
            "{:<10} {:<10} {:<8} {}",
            agent.id, agent.name, agent.icon, agent.description
        );
    }

    println!("\n{} agent(s) available", listing.agents.len());
}
