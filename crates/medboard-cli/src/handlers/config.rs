use anyhow::Result;
use medboard_runtime::Config;

pub fn handle(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
