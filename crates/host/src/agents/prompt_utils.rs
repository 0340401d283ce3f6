// crates/host/src/agents/prompt_utils.rs

//! Shared utilities for building agent prompts.

use schemars::JsonSchema;

/// Soroban SDK cheat sheet embedded in every category agent prompt.
pub const SDK_REFERENCE: &str = r#"### Key Rust data structures and functions in the Soroban SDK

1. **Storage**
   - `env.storage().persistent()` / `.temporary()` / `.instance()`: the three storage tiers.
   - `set(&key, &value)`, `get(&key)`, `has(&key)`, `remove(&key)`.
   - `extend_ttl(threshold, extend_to)`: keep an entry (or the instance) alive.

2. **Types**
   - `String`, `Symbol`, `symbol_short!("KEY")` (at most 9 chars), `Address`, `BytesN<N>`.
   - `Vec<T>` and `Map<K, V>` are host objects created with `vec![&env, ..]` / `Map::new(&env)`.

3. **Environment**
   - `address.require_auth()` and `require_auth_for_args(args)` for authorization.
   - `env.ledger().sequence()`, `env.ledger().timestamp()`.
   - `log!(&env, "count: {}", count)` for debug logging.

4. **Errors**
   - Prefer `unwrap_or(default)` on storage reads; use `#[contracterror]` enums and
     `panic_with_error!` for contract failures instead of bare `panic!`.
   - Contracts are `#![no_std]`: no `std::string::String`, no `format!`."#;

/// What every category agent may be asked to do.
const TASK_MODES: &str = "Your task is to assist the user in one of the following ways:\n\
1. If the user provides a code snippet, debug it and explain the issues.\n\
2. If the user requests a smart contract, generate the code and explain it.\n\
3. If the user asks about specific functions, macros or code parts, provide detailed assistance.\n\
4. If the query starts with \"Copilot Code Requested\", write only the code that belongs between the `######` markers so that it fits the surrounding code.";

/// Output layout shared by every category agent.
const OUTPUT_FORMAT: &str = "For each case, follow this output format:\n\
- First, explain what the user is asking for (debugging, generating code, copilot or assistance).\n\
- Then, cite the important points (what is wrong, what the generated code does, or what the function does).\n\
- Follow this with a Rust code block (if applicable) and close it.\n\
- Acknowledge and end the response.";

/// Build a category agent prompt around its reference material.
///
/// `reference` holds sample contracts with their key points, `guidelines`
/// the category-specific rules for debugging, generation and assistance.
pub fn expert_prompt(topic: &str, reference: &str, guidelines: &str, user_query: &str) -> String {
    format!(
        r#"You are an expert in Rust and smart contract development using the Stellar blockchain and Soroban SDK, specialised in {topic}.
{TASK_MODES}

{reference}

Additional guidelines for better responses:
{guidelines}

{SDK_REFERENCE}

{OUTPUT_FORMAT}

User Query: {user_query}

Provide your response below:"#
    )
}

/// Pretty-printed JSON schema of `T`, for JSON-mode prompts.
pub fn json_schema<T: JsonSchema>() -> String {
    let schema = schemars::schema_for!(T);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ide_agent_core::types::ExtractionDecision;

    #[test]
    fn expert_prompt_ends_with_query() {
        let prompt = expert_prompt("storage", "SAMPLE", "- rule", "store a counter");
        assert!(prompt.contains("specialised in storage"));
        assert!(prompt.contains("SAMPLE"));
        assert!(prompt.contains(SDK_REFERENCE));
        assert!(prompt.trim_end().ends_with("Provide your response below:"));
        assert!(prompt.contains("User Query: store a counter"));
    }

    #[test]
    fn schema_lists_fields() {
        let schema = json_schema::<ExtractionDecision>();
        assert!(schema.contains("code_updation_required"));
        assert!(schema.contains("code_requested"));
    }
}
