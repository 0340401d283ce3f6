// crates/host/src/agents/functioniser/prompts.rs

const FORMAT_EXAMPLE: &str = r#"{
  "functions": [
    {
      "name": "swap",
      "parameters": [
        {"name": "a", "type": "Address"},
        {"name": "b", "type": "Address"},
        {"name": "token_a", "type": "Address"},
        {"name": "token_b", "type": "Address"},
        {"name": "amount_a", "type": "i128"},
        {"name": "min_b_for_a", "type": "i128"},
        {"name": "amount_b", "type": "i128"},
        {"name": "min_a_for_b", "type": "i128"}
      ],
      "returns": "void"
    }
  ]
}"#;

const SAMPLE_CONTRACT: &str = r#"#[contract]
pub struct AtomicSwapContract;

#[contractimpl]
impl AtomicSwapContract {
    pub fn swap(
        env: Env,
        a: Address,
        b: Address,
        token_a: Address,
        token_b: Address,
        amount_a: i128,
        min_b_for_a: i128,
        amount_b: i128,
        min_a_for_b: i128,
    ) {
        // ...
    }
}"#;

pub fn build_functioniser_prompt(contract_code: &str) -> String {
    format!(
        r#"You are an expert Rust/Soroban smart contract developer. Your task is to:
1. Analyze the provided contract code.
2. Extract all public contract functions.
3. Return their metadata in this exact JSON format:
{FORMAT_EXAMPLE}

Rules:
- Only include functions inside a `#[contractimpl]` block.
- Only include `pub` functions; skip private helpers.
- Leave out the `env: Env` parameter.
- Use the exact Rust types of the parameters.
- Use "void" as the return type when the function returns `()`.

Sample contract for reference:
```rust
{SAMPLE_CONTRACT}
```

Contract to analyze:
```rust
{contract_code}
```

Respond with the JSON object only."#
    )
}
