// crates/host/src/agents/atomic_swap/prompts.rs

//! Prompt for the atomic swap agent.

use super::super::prompt_utils::expert_prompt;

const REFERENCE: &str = r#"For reference, a swap between two parties and two tokens:
```rust
#![no_std]
use soroban_sdk::{contract, contractimpl, token, Address, Env, IntoVal};

#[contract]
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
        if amount_b < min_b_for_a || amount_a < min_a_for_b {
            panic!("price not acceptable");
        }

        a.require_auth_for_args(
            (token_a.clone(), token_b.clone(), amount_a, min_b_for_a).into_val(&env),
        );
        b.require_auth_for_args(
            (token_b.clone(), token_a.clone(), amount_b, min_a_for_b).into_val(&env),
        );

        move_token(&env, &token_a, &a, &b, amount_a, min_a_for_b);
        move_token(&env, &token_b, &b, &a, amount_b, min_b_for_a);
    }
}

fn move_token(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    max_spend_amount: i128,
    transfer_amount: i128,
) {
    let token = token::Client::new(env, token);
    let contract_address = env.current_contract_address();
    token.transfer(from, &contract_address, &max_spend_amount);
    token.transfer(&contract_address, to, &transfer_amount);
    token.transfer(&contract_address, from, &(max_spend_amount - transfer_amount));
}
```

Key points about the sample:
- Each party authorises exactly the arguments it agreed to with `require_auth_for_args`.
- Price checks run before any transfer, so a bad price moves nothing.
- Funds pass through the contract and the unspent remainder is refunded.
- A swap without authorisation or precondition checks is unsafe."#;

const GUIDELINES: &str = "1. **Debugging**: look for missing authorisation, unchecked minimums and refunds that can underflow.\n\
2. **Code generation**: use `token::Client` for transfers and authorise per party.\n\
3. **Assistance**: explain why the swap is atomic and what each party signs.";

pub fn build_atomic_swap_prompt(user_query: &str) -> String {
    expert_prompt("atomic token swaps", REFERENCE, GUIDELINES, user_query)
}
