use anyhow::Result;
use profile_widgets::WidgetConfig;
use std::path::Path;

pub fn show(config: &WidgetConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}
