// crates/host/src/agents/storage/prompts.rs

//! Prompt for the storage agent.

use super::super::prompt_utils::expert_prompt;

const REFERENCE: &str = r#"For reference, here is a counter kept in instance storage:
```rust
#![no_std]
use soroban_sdk::{contract, contractimpl, log, symbol_short, Env, Symbol};

const COUNTER: Symbol = symbol_short!("COUNTER");

#[contract]
pub struct IncrementContract;

#[contractimpl]
impl IncrementContract {
    pub fn increment(env: Env) -> u32 {
        let mut count: u32 = env.storage().instance().get(&COUNTER).unwrap_or(0);
        log!(&env, "count: {}", count);

        count += 1;
        env.storage().instance().set(&COUNTER, &count);
        env.storage().instance().extend_ttl(50, 100);

        count
    }
}
```

And per-user data in persistent storage keyed by a `#[contracttype]` enum:
```rust
#[contracttype]
pub enum DataKey {
    Balance(Address),
}

pub fn deposit(env: Env, user: Address, amount: i128) {
    user.require_auth();
    let key = DataKey::Balance(user);
    let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage().persistent().set(&key, &(balance + amount));
    env.storage().persistent().extend_ttl(&key, 100, 1000);
}
```

Key points about the samples:
- Instance storage lives and expires with the contract instance; use it for small shared config.
- Persistent storage is per key; extend the TTL of every key you write.
- Temporary storage is cheapest and may be dropped after its TTL; never keep balances there."#;

const GUIDELINES: &str = "1. **Debugging**: point at the wrong storage tier, missing TTL extension or mismatched key type, then fix it.\n\
2. **Code generation**: pick the storage tier deliberately and say why; read with `unwrap_or` defaults.\n\
3. **Assistance**: compare the storage tiers by lifetime and cost when relevant.";

pub fn build_storage_prompt(user_query: &str) -> String {
    expert_prompt("contract storage", REFERENCE, GUIDELINES, user_query)
}
