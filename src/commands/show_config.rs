use crate::config::Settings;

pub fn main_with_opts(settings: &Settings) -> anyhow::Result<()> {
    print!("{}", settings.to_toml()?);
    Ok(())
}
