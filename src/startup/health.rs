//! Background probe of the retrieval service's `/health` endpoint.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::AppMessage;
use crate::retrieval::RetrievalClient;
use crate::traits::HttpClient;

/// Probe the service once and report the outcome as
/// [`AppMessage::ServiceHealth`]. Never blocks the caller.
pub fn spawn_health_probe<C>(
    client: RetrievalClient<C>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()>
where
    C: HttpClient + 'static,
{
    tokio::spawn(async move {
        let online = match client.health().await {
            Ok(status) if status.is_healthy() => {
                tracing::info!(url = client.base_url(), service = ?status.service, "Retrieval service online");
                true
            }
            Ok(status) => {
                tracing::warn!(url = client.base_url(), status = %status.status, "Retrieval service unhealthy");
                false
            }
            Err(err) => {
                tracing::warn!(url = client.base_url(), error = %err, "Retrieval service unreachable");
                false
            }
        };
        let _ = message_tx.send(AppMessage::ServiceHealth { online });
    })
}
