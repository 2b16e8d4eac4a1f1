//! Spawns chat requests on a background thread with a result channel.

use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::llm;
use crate::core::settings::Language;

use super::PendingChat;

/// Spawn a chat request. The returned [`PendingChat`] delivers the result
/// once and carries the token that cancels the request.
pub(crate) fn spawn_chat(
    rt: &Arc<Runtime>,
    config: Arc<Config>,
    message: String,
    language: Language,
) -> PendingChat {
    let (result_tx, result_rx) = mpsc::channel();
    let cancel_token = CancellationToken::new();
    let token = cancel_token.clone();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let result = rt_clone.block_on(llm::send_message(
            config.as_ref(),
            &message,
            language,
            Some(&token),
        ));
        let _ = result_tx.send(result);
    });

    PendingChat {
        result_rx,
        cancel_token,
    }
}
