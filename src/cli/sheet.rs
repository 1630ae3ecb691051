use crate::config::Config;
use crate::error::Result;
use crate::kaonavi::{KaonaviClient, KaonaviOperations};
use tracing::info;

pub async fn execute(sheet_id: u64, non_interactive: bool) -> Result<()> {
    let config = Config::resolve(non_interactive)?;
    let client = KaonaviClient::new(&config).await?;

    print_sheet(&client, sheet_id).await
}

/// Fetch one sheet and print it verbatim as JSON on stdout
async fn print_sheet<C>(client: &C, sheet_id: u64) -> Result<()>
where
    C: KaonaviOperations + Sync,
{
    let sheet = client.get_sheet(sheet_id).await?;

    println!("{}", serde_json::to_string_pretty(&sheet)?);
    info!(sheet_id, "Sheet retrieved");

    Ok(())
}
