// crates/host/src/agents/general/prompts.rs

//! Prompt for the general agent.

use super::super::prompt_utils::expert_prompt;

const REFERENCE: &str = r#"For reference, here is a sample contract that greets a caller and remembers the last greeting:
```rust
#![no_std]
use soroban_sdk::{contract, contractimpl, symbol_short, vec, Env, String, Symbol, Vec};

const LAST: Symbol = symbol_short!("LAST");

#[contract]
pub struct HelloContract;

#[contractimpl]
impl HelloContract {
    pub fn hello(env: Env, to: String) -> Vec<String> {
        env.storage().instance().set(&LAST, &to);
        vec![&env, String::from_str(&env, "Hello"), to]
    }

    pub fn last_greeted(env: Env) -> Option<String> {
        env.storage().instance().get(&LAST)
    }
}
```

Key points about the sample:
- `#![no_std]`: contracts do not link the Rust standard library.
- `#[contract]` marks the struct, `#[contractimpl]` exports its public methods.
- `String::from_str(&env, "Hello")` builds a host string; `vec![&env, ..]` a host vector.
- `Option<String>` return types map to `void` or the value on the client side."#;

const GUIDELINES: &str = "1. **Debugging**: explain why the error occurs, including `no_std` details such as the missing allocator, then give a working fix.\n\
2. **Code generation**: keep state in `env.storage()` instead of rebuilding maps in every call; keep contracts small.\n\
3. **Assistance**: explain purpose, usage and cost of the function or macro, with a short example.";

pub fn build_general_prompt(user_query: &str) -> String {
    expert_prompt("strings, greetings and general contracts", REFERENCE, GUIDELINES, user_query)
}
