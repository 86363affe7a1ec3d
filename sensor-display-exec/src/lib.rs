// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod subscribe;

// Re-export commonly used types
pub use subscribe::{SubscribeExt, SubscriptionSummary};
pub use tokio_util::sync::CancellationToken;
