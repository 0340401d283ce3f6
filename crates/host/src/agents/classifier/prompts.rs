// crates/host/src/agents/classifier/prompts.rs

use super::super::prompt_utils::json_schema;
use super::Classification;

const ROUTING_RULES: &str = r#"1. **General Agent (general)**:
   - Queries about strings, greetings or general-purpose tasks.
   - Examples: 'Write a smart contract that returns "Hello, World!"', 'Explain how to use strings in Soroban'.
   - Keywords: 'hello', 'string', 'greeting', 'general', 'example'.
2. **Storage Agent (storage)**:
   - Queries about storing or retrieving data.
   - Examples: 'Write a smart contract that stores user details', 'How do I retrieve data from persistent storage?'.
   - Keywords: 'store', 'retrieve', 'storage', 'data', 'persist', 'save', 'fetch'.
3. **Cross-Contract Agent (cross_contract)**:
   - Queries about one contract interacting with another.
   - Examples: 'Write a contract that calls another contract', 'How do I interact with another contract in Soroban?'.
   - Keywords: 'cross contract', 'call contract', 'contract interaction', 'interact with contract'.
4. **Atomic Swap Agent (atomic_swap)**:
   - Queries about atomic swaps between tokens.
   - Examples: 'Write a contract for atomic swaps between two tokens', 'Create a contract that swaps tokens atomically'.
   - Keywords: 'atomic swap', 'token swap', 'swap tokens', 'atomic exchange'.
If the query does not match any of the above, default to 'general'."#;

pub fn build_classifier_prompt(user_query: &str) -> String {
    let schema = json_schema::<Classification>();
    format!(
        r#"Your task is to assign an agent based on the query provided by the user.
Determine which agent should handle the query based on these rules:
{ROUTING_RULES}

Queries are one of: debugging, code generation, code or function explanation, copilot assistance.
The kind of query must not influence the choice of agent.

The response must be a JSON object with the following schema:
{schema}

`expected_field` is the agent to route to and `reason` justifies the choice.
Determine which agent should handle the following query: {user_query}"#
    )
}
