use anyhow::Result;

pub fn execute() -> Result<()> {
    let schema = bob_core::configs::config_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
