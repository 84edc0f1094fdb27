use anyhow::Result;

fn main() -> Result<()> {
    let schema = graphic_editor::Config::config_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
