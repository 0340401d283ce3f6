// crates/host/src/agents/cross_contract/prompts.rs

//! Prompt for the cross-contract agent.

use super::super::prompt_utils::expert_prompt;

const REFERENCE: &str = r#"For reference, a target contract and a caller contract:

**Contract A (target)**:
```rust
#![no_std]
use soroban_sdk::{contract, contractimpl, Env};

#[contract]
pub struct ContractA;

#[contractimpl]
impl ContractA {
    pub fn add(_env: Env, x: u32, y: u32) -> u32 {
        x.checked_add(y).expect("no overflow")
    }
}
```

**Contract B (caller)**:
```rust
#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env};

mod contract_a {
    soroban_sdk::contractimport!(
        file = "../contract_a/target/wasm32-unknown-unknown/release/contract_a.wasm"
    );
}

#[contract]
pub struct ContractB;

#[contractimpl]
impl ContractB {
    pub fn add_with(env: Env, contract: Address, x: u32, y: u32) -> u32 {
        let client = contract_a::Client::new(&env, &contract);
        client.add(&x, &y)
    }
}
```

Key points about the samples:
- `contractimport!` generates a typed client from the compiled WASM of the target.
- `contract_a::Client::new(&env, &contract)` binds that client to a deployed address.
- Arguments are passed by reference to the generated client methods.
- A caller that just computes `x + y` itself is not a cross-contract call."#;

const GUIDELINES: &str = "1. **Debugging**: check the import path, the client construction and argument references first.\n\
2. **Code generation**: always produce both contracts, labelled **Contract A** and **Contract B**, A first.\n\
3. **Assistance**: explain how the call is authorised and what happens when the target traps.";

pub fn build_cross_contract_prompt(user_query: &str) -> String {
    expert_prompt("cross-contract calls", REFERENCE, GUIDELINES, user_query)
}
