//! Service health command handler.

use anyhow::Result;

use lukman::LukmanClient;

/// Print the service health summary.
pub(crate) async fn cmd_health(client: &LukmanClient) -> Result<()> {
    let health = client.check_health().await?;

    println!("Status:   {}", health.status);
    println!("Message:  {}", health.message);
    println!(
        "AI model: {}",
        if health.gemini_connected {
            "connected"
        } else {
            "not connected"
        }
    );
    Ok(())
}
