// crates/core/src/composer.rs

//! Turning an IDE request into the single query the model stages see.

use crate::error::Result;
use crate::markers;
use crate::types::{CompositeQuery, IncomingRequest, RequestKind};

/// Appended to the user's context for every request kind.
pub const ECOSYSTEM_SUFFIX: &str = "\n\n The output should be compatible with Soroban SDK and Rust.\n If required, use only the Soroban SDK and ensure the contract is memory-efficient.\n";

/// Sits between the request and the user's code for generation and assistance.
pub const CONTEXT_PREAMBLE: &str = "\nThe following code is provided for context and may include relevant functions or data structures from the Soroban SDK. While it shouldn't directly influence your output, feel free to reference it if it helps explain or enhance the response.\n\n";

pub const DEBUG_PREAMBLE: &str =
    "Received Compilation or Runtime Error as follows, please fix the code:\n";

pub const DEBUG_CODE_HEADER: &str = "\n\nHere's my code with the error:\n";

/// Instruction placed between the copilot markers.
pub fn copilot_instruction(context: &str) -> String {
    format!("\nCopilot Code Requested\nUser Request: {context}\n")
}

pub fn compose(kind: RequestKind, user_code: &str, context: &str) -> Result<CompositeQuery> {
    let context = format!("{context}{ECOSYSTEM_SUFFIX}");

    let text = match kind {
        RequestKind::Copilot => {
            markers::splice_at_markers(user_code, &copilot_instruction(&context))?
        }
        RequestKind::Generation | RequestKind::Assistance => {
            format!("{context}{CONTEXT_PREAMBLE}{user_code}")
        }
        RequestKind::Debugging => {
            format!("{DEBUG_PREAMBLE}{context}{DEBUG_CODE_HEADER}{user_code}")
        }
    };

    Ok(CompositeQuery::new(text))
}

pub fn compose_request(request: &IncomingRequest) -> Result<CompositeQuery> {
    compose(request.kind, &request.user_code, &request.context)
}
