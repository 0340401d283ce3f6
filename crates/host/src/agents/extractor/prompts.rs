// crates/host/src/agents/extractor/prompts.rs

use ide_agent_core::types::ExtractionDecision;

use super::super::prompt_utils::json_schema;

const RULES: &str = "1. If the query is debugging or copilot assistance, extract the snippet that fixes or completes the code. Keep the formatting of the original code and assume the snippet is written from the leftmost column.\n\
2. If the query is code generation, extract the generated code.\n\
3. If the query only asks to explain functions or concepts, no code is required.\n\
4. If the query involves cross-contract calls, extract both contracts, contract A first and then contract B.\n\n\
For debugging, copilot, code generation and cross-contract queries `code_updation_required` is true.\n\
Never return more than two snippets.";

const EXAMPLE: &str = r#"### user query:
Copilot Code Requested 
pub fn increment(env: Env) -> u32 {
    let mut count: u32 = env.storage().instance().get(&COUNTER).unwrap_or(0);
######
Copilot Code Requested
User Request: increment the counter and save it
######
    count
}

### agent response:
The counter needs to be incremented, stored and its TTL extended.
```rust
    count += 1;
    env.storage().instance().set(&COUNTER, &count);
    env.storage().instance().extend_ttl(50, 100);
```

### your response:
{"code_updation_required": true, "code_requested": ["    count += 1;\n    env.storage().instance().set(&COUNTER, &count);\n    env.storage().instance().extend_ttl(50, 100);\n"]}

### user query:
What does extend_ttl do?

### agent response:
`extend_ttl(threshold, extend_to)` keeps an entry alive ...

### your response:
{"code_updation_required": false, "code_requested": []}"#;

pub fn build_extractor_prompt(user_query: &str, agent_response: &str) -> String {
    let schema = json_schema::<ExtractionDecision>();
    format!(
        r#"You are a code extraction assistant. Analyze the user query and the agent response, decide whether code is required and extract the relevant code snippets.

Here are the rules:
{RULES}

The response must be a JSON object with the following schema:
{schema}

Refer to these examples:
{EXAMPLE}

Now generate the response for the query and response below.

Here is the user query:
{user_query}

Here is the agent response:
{agent_response}

Provide your response below:"#
    )
}
